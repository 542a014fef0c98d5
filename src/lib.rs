//! # bsm-greeks: Closed-Form Black-Scholes-Merton Pricing and Greeks
//!
//! A Rust library for pricing European options under the Black-Scholes-Merton
//! model with a continuous dividend yield, together with the analytic Greeks
//! and a parameter panel that feeds and renders them.
//!
//! ## Key Features
//!
//! - **Closed Form**: Call and put prices from Φ(d₁), Φ(d₂)
//! - **Complete Greeks**: Delta, Gamma, Vega, Theta, Rho
//! - **Parameter Panel**: Bounded sliders, day-count conversion and formatted reports
//! - **Volatility Scan**: Parallel re-evaluation across a volatility ladder with CSV export
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_greeks::{bs_greeks, bs_price, OptionKind};
//!
//! // At-the-money one-year call
//! let price = bs_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call, 0.0);
//! let greeks = bs_greeks(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call, 0.0);
//!
//! assert!((price - 10.4506).abs() < 1e-3);
//! assert!((greeks.delta - 0.6368).abs() < 1e-3);
//! ```
//!
//! ## Numeric Contract
//!
//! The pricer and the Greeks calculator never fail and never panic. With no
//! time or no volatility left (T ≤ 0 or σ ≤ 0) the pricer returns intrinsic
//! value; the Greeks calculator has no such shortcut and returns NaN or
//! infinite components there. Non-positive spot or strike, or non-finite
//! inputs, propagate as NaN/infinity through both. Use
//! [`OptionParameters::validate`] to check inputs up front.

// Module declarations
pub mod analytics;
pub mod error;
pub mod math_utils;
pub mod output;
pub mod panel;
pub mod params;
pub mod payoffs;
pub mod scan;

// Re-export commonly used types for convenience
pub use analytics::{bs_greeks, bs_price, GreekSet, Greeks};
pub use error::{BsmError, BsmResult};
pub use params::OptionParameters;
pub use payoffs::OptionKind;
