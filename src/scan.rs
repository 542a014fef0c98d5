// src/scan.rs
//! Volatility scan
//!
//! Re-evaluates one set of option parameters along an evenly spaced
//! volatility ladder, the way dragging the panel's volatility slider would.
//! Each ladder point is independent, so rows are filled in parallel.
//!
//! # Table Layout
//!
//! ```text
//! column  0      1      2      3     4      5
//!         price  delta  gamma  vega  theta  rho
//! ```

use crate::analytics::greeks::GreekSet;
use crate::error::{validation::*, BsmError, BsmResult};
use crate::params::OptionParameters;
use ndarray::{Array1, Array2, ArrayView1, Zip};

pub const PRICE_COLUMN: usize = 0;
pub const COLUMN_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    pub vol_min: f64,
    pub vol_max: f64,
    pub points: usize,
    /// Greeks written by the CSV export
    pub greeks: GreekSet,
}

impl ScanConfig {
    /// Validate the scan configuration
    pub fn validate(&self) -> BsmResult<()> {
        validate_finite("vol_max", self.vol_max)?;
        validate_positive("vol_min", self.vol_min)?;
        if self.vol_min >= self.vol_max {
            return Err(BsmError::InvalidConfiguration {
                field: "vol_max".to_string(),
                reason: format!("must exceed vol_min ({})", self.vol_min),
            });
        }
        if self.points < 2 {
            return Err(BsmError::InvalidConfiguration {
                field: "points".to_string(),
                reason: "must be at least 2".to_string(),
            });
        } else if self.points > 10_000 {
            return Err(BsmError::InvalidConfiguration {
                field: "points".to_string(),
                reason: "exceeds maximum allowed (10,000)".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            vol_min: 0.05,
            vol_max: 1.0,
            points: 20,
            greeks: GreekSet::all(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScanTable {
    pub base: OptionParameters,
    pub volatilities: Array1<f64>,
    /// `points x COLUMN_COUNT`
    pub values: Array2<f64>,
}

impl ScanTable {
    pub fn prices(&self) -> ArrayView1<'_, f64> {
        self.values.column(PRICE_COLUMN)
    }

    /// Column index of a single Greek
    pub fn column_of(greek: GreekSet) -> Option<usize> {
        GreekSet::all()
            .iter()
            .position(|flag| flag == greek)
            .map(|i| i + 1)
    }

    /// Strictly increasing prices along the ladder
    pub fn is_price_increasing(&self) -> bool {
        self.prices()
            .windows(2)
            .into_iter()
            .all(|w| w[1] > w[0])
    }

    pub fn len(&self) -> usize {
        self.volatilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volatilities.is_empty()
    }
}

/// Price and Greeks of `base` at each volatility of the ladder
///
/// The volatility of `base` itself is ignored. Spot, strike and time are not
/// validated beyond what the caller has done; non-finite results show up as
/// NaN cells.
pub fn scan_volatility(base: &OptionParameters, cfg: &ScanConfig) -> BsmResult<ScanTable> {
    cfg.validate()?;

    let volatilities = Array1::linspace(cfg.vol_min, cfg.vol_max, cfg.points);
    let mut values = Array2::<f64>::zeros((cfg.points, COLUMN_COUNT));

    Zip::from(values.rows_mut())
        .and(&volatilities)
        .par_for_each(|mut row, &vol| {
            let params = base.with_volatility(vol);
            let g = params.greeks();
            row[PRICE_COLUMN] = params.price();
            row[1] = g.delta;
            row[2] = g.gamma;
            row[3] = g.vega;
            row[4] = g.theta;
            row[5] = g.rho;
        });

    tracing::info!(
        kind = %base.kind,
        points = cfg.points,
        vol_min = cfg.vol_min,
        vol_max = cfg.vol_max,
        "volatility scan complete"
    );

    Ok(ScanTable {
        base: *base,
        volatilities,
        values,
    })
}
