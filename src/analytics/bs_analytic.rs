// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes-Merton prices for European options
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes-Merton model with continuous dividend yield q,
//! the underlying follows:
//! ```text
//! dS_t = (r - q) S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! For European options, this has closed-form solutions involving
//! the cumulative normal distribution function Φ(x).
//!
//! # Domain
//!
//! Inputs are not validated. A non-positive spot or strike, or non-finite
//! values, flow through `ln`, `sqrt` and `exp` and come out as NaN or
//! infinity. Use [`crate::params::OptionParameters::validate`] beforehand when
//! that matters.

use crate::math_utils::norm_cdf;
use crate::payoffs::OptionKind;

/// Standardized moneyness terms of the closed form
///
/// # Formula
/// ```text
/// d₁ = [ln(S/K) + (r - q + σ²/2)T] / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
///
/// Divides by σ√T unconditionally: T ≤ 0 or σ ≤ 0 gives NaN or ±∞.
pub fn d1_d2(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> (f64, f64) {
    let sigma_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r - q + 0.5 * sigma * sigma) * t) / sigma_sqrt_t;
    (d1, d1 - sigma_sqrt_t)
}

/// Black-Scholes-Merton European option price
///
/// # Formula
/// ```text
/// C = S*e^(-qT)*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// P = K*e^(-rT)*Φ(-d₂) - S*e^(-qT)*Φ(-d₁)
/// ```
///
/// # Parameters
/// - `s`: Current spot price
/// - `k`: Strike price
/// - `t`: Time to expiration in years
/// - `r`: Risk-free rate
/// - `sigma`: Volatility
/// - `kind`: Call or put
/// - `q`: Continuous dividend yield
///
/// # Degenerate inputs
/// When `t <= 0` or `sigma <= 0` the intrinsic value `max(0, S-K)` /
/// `max(0, K-S)` is returned and `r`, `q` are ignored.
///
/// # Returns
/// Present value of the option. Not clamped at zero: far out of the money
/// the subtraction can round to a tiny negative number.
pub fn bs_price(s: f64, k: f64, t: f64, r: f64, sigma: f64, kind: OptionKind, q: f64) -> f64 {
    if t <= 0.0 || sigma <= 0.0 {
        return kind.intrinsic(s, k);
    }

    let (d1, d2) = d1_d2(s, k, t, r, sigma, q);
    let spot_df = s * (-q * t).exp();
    let strike_df = k * (-r * t).exp();

    match kind {
        OptionKind::Call => spot_df * norm_cdf(d1) - strike_df * norm_cdf(d2),
        OptionKind::Put => strike_df * norm_cdf(-d2) - spot_df * norm_cdf(-d1),
    }
}

/// Black-Scholes-Merton European call price without dividends
pub fn bs_call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    bs_price(s, k, t, r, sigma, OptionKind::Call, 0.0)
}

/// Black-Scholes-Merton European put price without dividends
pub fn bs_put_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    bs_price(s, k, t, r, sigma, OptionKind::Put, 0.0)
}
