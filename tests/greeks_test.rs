// tests/greeks_test.rs
use bsm_greeks::analytics::greeks::{bs_greeks, Greeks};
use bsm_greeks::OptionKind;

const S: f64 = 100.0;
const K: f64 = 100.0;
const T: f64 = 1.0;
const R: f64 = 0.05;
const SIGMA: f64 = 0.20;

fn atm(kind: OptionKind) -> Greeks {
    bs_greeks(S, K, T, R, SIGMA, kind, 0.0)
}

fn assert_rel(name: &str, actual: f64, expected: f64, tol: f64) {
    let abs_error = (actual - expected).abs();
    let rel_error = abs_error / expected.abs();

    println!("\nAnalytic {}: {}", name, actual);
    println!("Expected {}: {}", name, expected);
    println!("Relative Error ({}): {}", name, rel_error);

    assert!(rel_error < tol, "Relative error for {} exceeds tolerance: {}", name, rel_error);
}

#[test]
fn test_bs_call_delta_analytic() {
    assert_rel("Delta", atm(OptionKind::Call).delta, 0.636830651175619, 1e-9);
}

#[test]
fn test_bs_call_gamma_analytic() {
    assert_rel("Gamma", atm(OptionKind::Call).gamma, 0.018762017345847, 1e-9);
}

#[test]
fn test_bs_call_vega_analytic() {
    assert_rel("Vega", atm(OptionKind::Call).vega, 37.524034691693792, 1e-9);
}

#[test]
fn test_bs_call_theta_analytic() {
    assert_rel("Theta", atm(OptionKind::Call).theta, -6.414027546438197, 1e-7);
}

#[test]
fn test_bs_call_rho_analytic() {
    assert_rel("Rho", atm(OptionKind::Call).rho, 53.232481545376345, 1e-7);
}

#[test]
fn test_bs_put_greeks_analytic() {
    let put = atm(OptionKind::Put);
    assert_rel("Put Delta", put.delta, -0.363169348824381, 1e-7);
    assert_rel("Put Theta", put.theta, -1.6578804239346256, 1e-6);
    assert_rel("Put Rho", put.rho, -41.89046090469506, 1e-7);
}

#[test]
fn test_gamma_vega_identical_for_call_and_put() {
    let cases = [
        (100.0, 100.0, 1.0, 0.05, 0.2, 0.0),
        (120.0, 90.0, 0.25, 0.01, 0.45, 0.03),
        (60.0, 150.0, 2.5, -0.01, 0.8, 0.07),
    ];
    for &(s, k, t, r, sigma, q) in &cases {
        let call = bs_greeks(s, k, t, r, sigma, OptionKind::Call, q);
        let put = bs_greeks(s, k, t, r, sigma, OptionKind::Put, q);
        assert_eq!(call.gamma, put.gamma);
        assert_eq!(call.vega, put.vega);
    }
}

#[test]
fn test_delta_parity() {
    // Δ_call - Δ_put = e^(-qT)
    let (s, k, t, r, sigma, q) = (105.0, 100.0, 0.75, 0.02, 0.3, 0.04);
    let call = bs_greeks(s, k, t, r, sigma, OptionKind::Call, q);
    let put = bs_greeks(s, k, t, r, sigma, OptionKind::Put, q);
    assert!((call.delta - put.delta - (-q * t).exp()).abs() < 1e-12);
}

#[test]
fn test_delta_bounds() {
    let q = 0.02;
    for &s in &[60.0, 90.0, 100.0, 110.0, 150.0] {
        let call = bs_greeks(s, 100.0, 0.5, 0.03, 0.25, OptionKind::Call, q);
        let put = bs_greeks(s, 100.0, 0.5, 0.03, 0.25, OptionKind::Put, q);
        let bound = (-q * 0.5f64).exp();
        assert!(call.delta > 0.0 && call.delta < bound, "call delta {} at S={}", call.delta, s);
        assert!(put.delta < 0.0 && put.delta > -bound, "put delta {} at S={}", put.delta, s);
    }
}

#[test]
fn test_greeks_match_finite_differences_of_price() {
    use bsm_greeks::bs_price;

    let (s, k, t, r, sigma, q) = (100.0, 95.0, 0.8, 0.04, 0.3, 0.02);
    for kind in [OptionKind::Call, OptionKind::Put] {
        let g = bs_greeks(s, k, t, r, sigma, kind, q);
        let h = 1e-4;

        let delta_fd = (bs_price(s + h, k, t, r, sigma, kind, q) - bs_price(s - h, k, t, r, sigma, kind, q)) / (2.0 * h);
        let gamma_fd = (bs_price(s + h, k, t, r, sigma, kind, q) - 2.0 * bs_price(s, k, t, r, sigma, kind, q)
            + bs_price(s - h, k, t, r, sigma, kind, q))
            / (h * h);
        let vega_fd = (bs_price(s, k, t, r, sigma + h, kind, q) - bs_price(s, k, t, r, sigma - h, kind, q)) / (2.0 * h);
        let theta_fd = -(bs_price(s, k, t + h, r, sigma, kind, q) - bs_price(s, k, t - h, r, sigma, kind, q)) / (2.0 * h);
        let rho_fd = (bs_price(s, k, t, r + h, sigma, kind, q) - bs_price(s, k, t, r - h, sigma, kind, q)) / (2.0 * h);

        assert!((g.delta - delta_fd).abs() < 1e-6, "{} delta {} vs {}", kind, g.delta, delta_fd);
        assert!((g.gamma - gamma_fd).abs() < 1e-4, "{} gamma {} vs {}", kind, g.gamma, gamma_fd);
        assert!((g.vega - vega_fd).abs() < 1e-5, "{} vega {} vs {}", kind, g.vega, vega_fd);
        assert!((g.theta - theta_fd).abs() < 1e-5, "{} theta {} vs {}", kind, g.theta, theta_fd);
        assert!((g.rho - rho_fd).abs() < 1e-5, "{} rho {} vs {}", kind, g.rho, rho_fd);
    }
}

#[test]
fn test_greeks_at_expiry_are_nan() {
    // No intrinsic shortcut here: T = 0 divides by σ√T = 0
    let g = bs_greeks(100.0, 100.0, 0.0, 0.05, 0.2, OptionKind::Call, 0.0);
    assert!(g.gamma.is_nan(), "gamma = {}", g.gamma);
    assert!(g.vega.is_nan(), "vega = {}", g.vega);
    assert!(!g.is_finite());
}

#[test]
fn test_greeks_at_zero_volatility_are_not_finite() {
    let g = bs_greeks(100.0, 100.0, 1.0, 0.05, 0.0, OptionKind::Put, 0.0);
    assert!(!g.is_finite());
}
