// demos/error_handling_demo.rs
use bsm_greeks::error::BsmError;
use bsm_greeks::panel::{evaluate, PanelConfig, PanelInputs};
use bsm_greeks::scan::{scan_volatility, ScanConfig};
use bsm_greeks::{bs_greeks, bs_price, OptionKind, OptionParameters};

fn main() {
    println!("Error Handling Demo for bsm-greeks");
    println!("==================================\n");

    // 1: validation is opt-in
    println!("1. Validating a negative spot price...");
    let bad = OptionParameters::new(-100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
    match bad.validate() {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // 2: the closed form itself does not validate
    println!("\n2. Pricing the same parameters without validation...");
    println!("   price = {} (NaN propagates)", bad.price());

    // 3: expiry is not an error for the pricer
    println!("\n3. Pricing at expiry...");
    let p = bs_price(100.0, 90.0, 0.0, 0.03, 0.2, OptionKind::Call, 0.0);
    println!("   ✓ Intrinsic value: {}", p);

    // 4: but the Greeks are undefined there
    println!("\n4. Greeks at expiry...");
    let g = bs_greeks(100.0, 100.0, 0.0, 0.05, 0.2, OptionKind::Call, 0.0);
    println!("   gamma = {}, vega = {} (finite: {})", g.gamma, g.vega, g.is_finite());

    // 5: panel slider bounds
    println!("\n5. Evaluating the panel with volatility outside its slider...");
    let inputs = PanelInputs {
        volatility: 2.5,
        ..PanelInputs::default()
    };
    match evaluate(&PanelConfig::default(), &inputs) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(BsmError::InvalidParameters {
            parameter,
            value,
            constraint,
        }) => {
            println!("   ✓ Caught InvalidParameters: {} = {} ({})", parameter, value, constraint);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    // 6: invalid scan configuration
    println!("\n6. Scanning with an empty ladder...");
    let cfg = ScanConfig {
        points: 0,
        ..ScanConfig::default()
    };
    match scan_volatility(&inputs.to_parameters(), &cfg) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // 7: unknown option kind
    println!("\n7. Parsing an unknown option kind...");
    match "straddle".parse::<OptionKind>() {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // 8: valid panel
    println!("\n8. Evaluating the default panel...");
    match evaluate(&PanelConfig::default(), &PanelInputs::default()) {
        Ok(report) => print!("{}", report),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    println!("\n✓ Error handling demo complete!");
}
