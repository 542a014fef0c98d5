//! Option Kinds and Expiry Payoffs
//!
//! # Mathematical Definitions
//!
//! A European option pays its intrinsic value at expiry:
//! - **Call**: max(S - K, 0) - right to buy at strike K
//! - **Put**: max(K - S, 0) - right to sell at strike K
//!
//! The closed-form pricer falls back to these payoffs when there is no time
//! value left (T ≤ 0) or no volatility (σ ≤ 0).

use crate::error::BsmError;
use std::fmt;
use std::str::FromStr;

/// European option kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OptionKind {
    /// Right to buy the underlying at the strike
    #[default]
    Call,

    /// Right to sell the underlying at the strike
    Put,
}

impl OptionKind {
    /// Intrinsic value at immediate expiry
    ///
    /// # Returns
    /// Non-negative payoff. `f64::max` drops NaN, so a NaN input gives 0.0.
    pub fn intrinsic(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKind {
    type Err = BsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            _ => Err(BsmError::UnknownOptionKind {
                input: s.to_string(),
            }),
        }
    }
}
