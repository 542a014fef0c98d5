// src/params.rs
use crate::analytics::bs_analytic::bs_price;
use crate::analytics::greeks::{bs_greeks, Greeks};
use crate::error::{validation::*, BsmResult};
use crate::payoffs::OptionKind;

/// Inputs of the Black-Scholes-Merton closed form
///
/// Nothing here is enforced on construction. [`OptionParameters::price`] and
/// [`OptionParameters::greeks`] accept any values and let NaN or infinity
/// propagate; call [`OptionParameters::validate`] first when the values come
/// from an untrusted source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParameters {
    pub spot: f64,
    pub strike: f64,
    /// Time to maturity in years
    pub time: f64,
    /// Continuously-compounded risk-free rate
    pub rate: f64,
    pub volatility: f64,
    /// Continuous dividend yield
    pub dividend_yield: f64,
    pub kind: OptionKind,
}

impl OptionParameters {
    /// Parameters with a zero dividend yield
    pub fn new(
        spot: f64,
        strike: f64,
        time: f64,
        rate: f64,
        volatility: f64,
        kind: OptionKind,
    ) -> Self {
        OptionParameters {
            spot,
            strike,
            time,
            rate,
            volatility,
            dividend_yield: 0.0,
            kind,
        }
    }

    pub fn with_dividend_yield(mut self, q: f64) -> Self {
        self.dividend_yield = q;
        self
    }

    pub fn with_kind(mut self, kind: OptionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// No time value or no volatility left: the pricer returns intrinsic
    /// value and the Greeks are undefined.
    pub fn is_degenerate(&self) -> bool {
        self.time <= 0.0 || self.volatility <= 0.0
    }

    /// Check the economic domain of the inputs
    pub fn validate(&self) -> BsmResult<()> {
        validate_positive("spot", self.spot)?;
        validate_positive("strike", self.strike)?;
        validate_non_negative("time", self.time)?;
        validate_finite("time", self.time)?;
        validate_finite("rate", self.rate)?;
        validate_non_negative("volatility", self.volatility)?;
        validate_finite("volatility", self.volatility)?;
        validate_non_negative("dividend_yield", self.dividend_yield)?;
        validate_finite("dividend_yield", self.dividend_yield)?;
        Ok(())
    }

    pub fn price(&self) -> f64 {
        bs_price(
            self.spot,
            self.strike,
            self.time,
            self.rate,
            self.volatility,
            self.kind,
            self.dividend_yield,
        )
    }

    pub fn greeks(&self) -> Greeks {
        bs_greeks(
            self.spot,
            self.strike,
            self.time,
            self.rate,
            self.volatility,
            self.kind,
            self.dividend_yield,
        )
    }
}
