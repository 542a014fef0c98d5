//! Black-Scholes-Merton parameter panel
//!
//! Prices one European option from slider-style inputs and prints the price
//! and Greeks; optionally exports a volatility scan as CSV.

use bsm_greeks::output::write_scan_to_csv;
use bsm_greeks::panel::{evaluate, PanelConfig, PanelInputs};
use bsm_greeks::scan::{scan_volatility, ScanConfig};
use bsm_greeks::{GreekSet, OptionKind};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Black-Scholes-Merton option pricing panel
#[derive(Parser, Debug)]
#[command(name = "bsm_panel")]
#[command(version, about, long_about = None)]
struct Args {
    /// Spot price (S)
    #[arg(long, default_value_t = 100.0)]
    spot: f64,

    /// Strike price (K)
    #[arg(long, default_value_t = 100.0)]
    strike: f64,

    /// Time to expiry in days
    #[arg(long, default_value_t = 30.0)]
    days: f64,

    /// Risk-free rate (r)
    #[arg(long, default_value_t = 0.03)]
    rate: f64,

    /// Volatility (σ)
    #[arg(long, default_value_t = 0.2)]
    vol: f64,

    /// Dividend yield (q)
    #[arg(long, default_value_t = 0.0)]
    div: f64,

    /// Option type: call or put
    #[arg(long, default_value = "call", value_parser = parse_kind)]
    kind: OptionKind,

    /// Greeks to show, comma separated (delta,gamma,vega,theta,rho or all)
    #[arg(long, default_value = "all", value_parser = parse_greeks)]
    greeks: GreekSet,

    /// Write a volatility scan to this CSV file
    #[arg(long, value_name = "FILE")]
    scan_csv: Option<PathBuf>,

    /// Lowest volatility of the scan
    #[arg(long, default_value_t = 0.05)]
    scan_min: f64,

    /// Highest volatility of the scan
    #[arg(long, default_value_t = 1.0)]
    scan_max: f64,

    /// Number of scan points
    #[arg(long, default_value_t = 20)]
    scan_points: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "BSM_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

fn parse_kind(s: &str) -> Result<OptionKind, String> {
    s.parse::<OptionKind>().map_err(|e| e.to_string())
}

fn parse_greeks(s: &str) -> Result<GreekSet, String> {
    GreekSet::parse_list(s).ok_or_else(|| format!("unknown greek in '{}'", s))
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = PanelConfig {
        greeks: args.greeks,
        ..PanelConfig::default()
    };
    config.validate()?;

    let inputs = PanelInputs {
        spot: args.spot,
        strike: args.strike,
        days: args.days,
        rate: args.rate,
        volatility: args.vol,
        dividend_yield: args.div,
        kind: args.kind,
    };
    let report = evaluate(&config, &inputs)?;
    print!("{}", report);

    if let Some(path) = args.scan_csv {
        let scan_cfg = ScanConfig {
            vol_min: args.scan_min,
            vol_max: args.scan_max,
            points: args.scan_points,
            greeks: args.greeks,
        };
        let table = scan_volatility(&report.params, &scan_cfg)?;
        write_scan_to_csv(&path, &table, scan_cfg.greeks)?;
        println!("Scan saved to: {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "panel evaluation failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
