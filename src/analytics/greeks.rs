// src/analytics/greeks.rs
//! Analytical Black-Scholes-Merton Greeks
//!
//! All five sensitivities come from one d₁/d₂ evaluation. Units are the raw
//! partial derivatives: vega per unit of σ, theta per year, rho per unit of r.
//!
//! Unlike [`bs_price`](super::bs_analytic::bs_price) there is no intrinsic
//! shortcut here. With T ≤ 0 or σ ≤ 0 the division by σ√T produces NaN or
//! infinite components; check
//! [`OptionParameters::is_degenerate`](crate::params::OptionParameters::is_degenerate)
//! first if that matters to the caller.

use super::bs_analytic::d1_d2;
use crate::math_utils::{norm_cdf, norm_pdf};
use crate::payoffs::OptionKind;
use bitflags::bitflags;

bitflags! {
    /// Selection of Greeks to display or export
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GreekSet: u32 {
        const DELTA = 1 << 0;
        const GAMMA = 1 << 1;
        const VEGA  = 1 << 2;
        const THETA = 1 << 3;
        const RHO   = 1 << 4;
    }
}

const GREEK_LABELS: [(GreekSet, &str); 5] = [
    (GreekSet::DELTA, "delta"),
    (GreekSet::GAMMA, "gamma"),
    (GreekSet::VEGA, "vega"),
    (GreekSet::THETA, "theta"),
    (GreekSet::RHO, "rho"),
];

impl GreekSet {
    /// Column name of a single-flag set
    pub fn label(self) -> Option<&'static str> {
        GREEK_LABELS
            .iter()
            .find(|(flag, _)| *flag == self)
            .map(|(_, name)| *name)
    }

    /// Parse a comma separated list such as `"delta,vega"`; `"all"` selects
    /// every Greek.
    pub fn parse_list(list: &str) -> Option<GreekSet> {
        let mut set = GreekSet::empty();
        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            set |= match name.to_ascii_lowercase().as_str() {
                "all" => GreekSet::all(),
                "delta" => GreekSet::DELTA,
                "gamma" => GreekSet::GAMMA,
                "vega" => GreekSet::VEGA,
                "theta" => GreekSet::THETA,
                "rho" => GreekSet::RHO,
                _ => return None,
            };
        }
        Some(set)
    }
}

impl Default for GreekSet {
    fn default() -> Self {
        GreekSet::all()
    }
}

/// First and second order sensitivities of a European option
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S², same for calls and puts
    pub gamma: f64,
    /// ∂V/∂σ, same for calls and puts
    pub vega: f64,
    /// -∂V/∂T, per year
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
}

impl Greeks {
    /// Value of a single Greek; `None` unless `which` has exactly one flag.
    pub fn get(&self, which: GreekSet) -> Option<f64> {
        if which == GreekSet::DELTA {
            Some(self.delta)
        } else if which == GreekSet::GAMMA {
            Some(self.gamma)
        } else if which == GreekSet::VEGA {
            Some(self.vega)
        } else if which == GreekSet::THETA {
            Some(self.theta)
        } else if which == GreekSet::RHO {
            Some(self.rho)
        } else {
            None
        }
    }

    pub fn is_finite(&self) -> bool {
        [self.delta, self.gamma, self.vega, self.theta, self.rho]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl From<Greeks> for (f64, f64, f64, f64, f64) {
    fn from(g: Greeks) -> Self {
        (g.delta, g.gamma, g.vega, g.theta, g.rho)
    }
}

/// Black-Scholes-Merton Greeks
///
/// # Formulas
/// ```text
/// Γ = e^(-qT)*φ(d₁) / (S*σ*√T)
/// ν = S*e^(-qT)*φ(d₁)*√T
///
/// call: Δ = e^(-qT)*Φ(d₁)
///       Θ = -S*σ*e^(-qT)*φ(d₁)/(2√T) - r*K*e^(-rT)*Φ(d₂) + q*S*e^(-qT)*Φ(d₁)
///       ρ = K*T*e^(-rT)*Φ(d₂)
///
/// put:  Δ = -e^(-qT)*Φ(-d₁)
///       Θ = -S*σ*e^(-qT)*φ(d₁)/(2√T) + r*K*e^(-rT)*Φ(-d₂) - q*S*e^(-qT)*Φ(-d₁)
///       ρ = -K*T*e^(-rT)*Φ(-d₂)
/// ```
///
/// # Interpretation
/// - Delta: hedge ratio, in (0, e^(-qT)) for calls and (-e^(-qT), 0) for puts
/// - Gamma: convexity, maximal near the money
/// - Vega: always positive for long options
/// - Theta: time decay, usually negative for long options
/// - Rho: positive for calls, negative for puts
pub fn bs_greeks(s: f64, k: f64, t: f64, r: f64, sigma: f64, kind: OptionKind, q: f64) -> Greeks {
    let (d1, d2) = d1_d2(s, k, t, r, sigma, q);
    let sqrt_t = t.sqrt();
    let div_df = (-q * t).exp();
    let rate_df = (-r * t).exp();
    let pdf_d1 = norm_pdf(d1);

    let gamma = div_df * pdf_d1 / (s * sigma * sqrt_t);
    let vega = s * div_df * pdf_d1 * sqrt_t;
    let decay = -s * sigma * div_df * pdf_d1 / (2.0 * sqrt_t);

    let (delta, theta, rho) = match kind {
        OptionKind::Call => {
            let cdf_d1 = norm_cdf(d1);
            let cdf_d2 = norm_cdf(d2);
            (
                div_df * cdf_d1,
                decay - r * k * rate_df * cdf_d2 + q * s * div_df * cdf_d1,
                k * t * rate_df * cdf_d2,
            )
        }
        OptionKind::Put => {
            let cdf_neg_d1 = norm_cdf(-d1);
            let cdf_neg_d2 = norm_cdf(-d2);
            (
                -div_df * cdf_neg_d1,
                decay + r * k * rate_df * cdf_neg_d2 - q * s * div_df * cdf_neg_d1,
                -k * t * rate_df * cdf_neg_d2,
            )
        }
    };

    Greeks {
        delta,
        gamma,
        vega,
        theta,
        rho,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_single_flag() {
        let g = Greeks {
            delta: 0.5,
            gamma: 0.02,
            vega: 30.0,
            theta: -5.0,
            rho: 40.0,
        };
        assert_eq!(g.get(GreekSet::VEGA), Some(30.0));
        assert_eq!(g.get(GreekSet::RHO), Some(40.0));
        assert_eq!(g.get(GreekSet::DELTA | GreekSet::GAMMA), None);
        assert_eq!(g.get(GreekSet::empty()), None);
    }

    #[test]
    fn test_tuple_order() {
        let g = bs_greeks(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call, 0.0);
        let (delta, gamma, vega, theta, rho): (f64, f64, f64, f64, f64) = g.into();
        assert_eq!((delta, gamma, vega, theta, rho), (g.delta, g.gamma, g.vega, g.theta, g.rho));
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(GreekSet::parse_list("all"), Some(GreekSet::all()));
        assert_eq!(
            GreekSet::parse_list("Delta, vega"),
            Some(GreekSet::DELTA | GreekSet::VEGA)
        );
        assert_eq!(GreekSet::parse_list(""), Some(GreekSet::empty()));
        assert_eq!(GreekSet::parse_list("delta,charm"), None);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = GreekSet::all().iter().filter_map(GreekSet::label).collect();
        assert_eq!(labels, vec!["delta", "gamma", "vega", "theta", "rho"]);
    }

    #[test]
    fn test_dividend_lowers_call_delta_bound() {
        let q = 0.04;
        let g = bs_greeks(150.0, 100.0, 2.0, 0.03, 0.25, OptionKind::Call, q);
        assert!(g.delta > 0.0 && g.delta < (-q * 2.0f64).exp());
    }
}
