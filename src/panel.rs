//! Parameter Panel
//!
//! The interactive front of the pricer: a set of bounded sliders, one per
//! model input, whose current values are priced and rendered as a report.
//! Time to expiry is entered in whole days and converted with a 365-day year.
//!
//! # Slider Ranges
//!
//! ```text
//! spot      50 .. 200     default 100
//! strike    50 .. 200     default 100
//! days       1 .. 365     default 30
//! rate     0.0 .. 0.1     default 0.03
//! vol     0.01 .. 1.0     default 0.2
//! div      0.0 .. 0.1     default 0.0
//! ```
//!
//! The lower bounds on days and volatility keep every panel evaluation out
//! of the region where the Greeks are undefined.

use crate::analytics::greeks::{GreekSet, Greeks};
use crate::error::{validation::*, BsmError, BsmResult};
use crate::params::OptionParameters;
use crate::payoffs::OptionKind;
use std::fmt;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Bounds and initial position of one slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        SliderRange { min, max, default }
    }

    pub fn validate(&self, field: &str) -> BsmResult<()> {
        if !(self.min.is_finite() && self.max.is_finite() && self.default.is_finite()) {
            return Err(BsmError::InvalidConfiguration {
                field: field.to_string(),
                reason: "slider bounds must be finite".to_string(),
            });
        }
        if self.min > self.max {
            return Err(BsmError::InvalidConfiguration {
                field: field.to_string(),
                reason: format!("min {} exceeds max {}", self.min, self.max),
            });
        }
        if self.default < self.min || self.default > self.max {
            return Err(BsmError::InvalidConfiguration {
                field: field.to_string(),
                reason: format!(
                    "default {} outside [{}, {}]",
                    self.default, self.min, self.max
                ),
            });
        }
        Ok(())
    }

    /// Reject a slider value outside the range
    pub fn check(&self, name: &str, value: f64) -> BsmResult<()> {
        validate_range(name, value, self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub spot: SliderRange,
    pub strike: SliderRange,
    pub days: SliderRange,
    pub rate: SliderRange,
    pub volatility: SliderRange,
    pub dividend_yield: SliderRange,
    pub default_kind: OptionKind,
    /// Greeks shown in the report
    pub greeks: GreekSet,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            spot: SliderRange::new(50.0, 200.0, 100.0),
            strike: SliderRange::new(50.0, 200.0, 100.0),
            days: SliderRange::new(1.0, 365.0, 30.0),
            rate: SliderRange::new(0.0, 0.1, 0.03),
            volatility: SliderRange::new(0.01, 1.0, 0.2),
            dividend_yield: SliderRange::new(0.0, 0.1, 0.0),
            default_kind: OptionKind::Call,
            greeks: GreekSet::all(),
        }
    }
}

impl PanelConfig {
    /// Validate the slider layout
    pub fn validate(&self) -> BsmResult<()> {
        self.spot.validate("spot")?;
        self.strike.validate("strike")?;
        self.days.validate("days")?;
        self.rate.validate("rate")?;
        self.volatility.validate("volatility")?;
        self.dividend_yield.validate("dividend_yield")?;

        // Spot and strike feed a logarithm; days and volatility a division
        validate_positive("spot.min", self.spot.min)?;
        validate_positive("strike.min", self.strike.min)?;
        validate_positive("days.min", self.days.min)?;
        validate_positive("volatility.min", self.volatility.min)?;
        validate_non_negative("dividend_yield.min", self.dividend_yield.min)?;
        Ok(())
    }

    /// Slider values at their initial positions
    pub fn defaults(&self) -> PanelInputs {
        PanelInputs {
            spot: self.spot.default,
            strike: self.strike.default,
            days: self.days.default,
            rate: self.rate.default,
            volatility: self.volatility.default,
            dividend_yield: self.dividend_yield.default,
            kind: self.default_kind,
        }
    }

    /// Reject inputs outside the slider ranges
    pub fn check(&self, inputs: &PanelInputs) -> BsmResult<()> {
        self.spot.check("spot", inputs.spot)?;
        self.strike.check("strike", inputs.strike)?;
        self.days.check("days", inputs.days)?;
        self.rate.check("rate", inputs.rate)?;
        self.volatility.check("volatility", inputs.volatility)?;
        self.dividend_yield
            .check("dividend_yield", inputs.dividend_yield)?;
        Ok(())
    }
}

/// Current slider positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelInputs {
    pub spot: f64,
    pub strike: f64,
    /// Time to expiry in days
    pub days: f64,
    pub rate: f64,
    pub volatility: f64,
    pub dividend_yield: f64,
    pub kind: OptionKind,
}

impl Default for PanelInputs {
    fn default() -> Self {
        PanelConfig::default().defaults()
    }
}

impl PanelInputs {
    pub fn to_parameters(&self) -> OptionParameters {
        OptionParameters::new(
            self.spot,
            self.strike,
            self.days / DAYS_PER_YEAR,
            self.rate,
            self.volatility,
            self.kind,
        )
        .with_dividend_yield(self.dividend_yield)
    }
}

/// Priced panel state, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct PanelReport {
    pub params: OptionParameters,
    pub price: f64,
    pub greeks: Greeks,
    pub shown: GreekSet,
}

impl fmt::Display for PanelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Option Price ({})", self.params.kind)?;
        writeln!(f, "  ${:.2}", self.price)?;
        if self.shown.is_empty() {
            return Ok(());
        }
        writeln!(f, "Greeks")?;
        for flag in self.shown.iter() {
            let (Some(label), Some(value)) = (flag.label(), self.greeks.get(flag)) else {
                continue;
            };
            // Vega is quoted to cents, the others to four decimals
            if flag == GreekSet::VEGA {
                writeln!(f, "  {:<6} {:.2}", label, value)?;
            } else {
                writeln!(f, "  {:<6} {:.4}", label, value)?;
            }
        }
        Ok(())
    }
}

/// Price the panel's current inputs: price first, then the Greeks
pub fn evaluate(config: &PanelConfig, inputs: &PanelInputs) -> BsmResult<PanelReport> {
    config.check(inputs)?;
    let params = inputs.to_parameters();

    let price = params.price();
    let greeks = params.greeks();
    tracing::debug!(
        spot = params.spot,
        strike = params.strike,
        time = params.time,
        kind = %params.kind,
        price,
        "panel evaluated"
    );

    Ok(PanelReport {
        params,
        price,
        greeks,
        shown: config.greeks,
    })
}
