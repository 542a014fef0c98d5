// src/output.rs
use crate::analytics::greeks::GreekSet;
use crate::scan::{ScanTable, PRICE_COLUMN};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write a volatility scan as CSV: `volatility,price,<greeks...>`
///
/// Only the Greeks in `greeks` are written, in the order
/// delta, gamma, vega, theta, rho.
pub fn write_scan_to_csv<P: AsRef<Path>>(
    filename: P,
    table: &ScanTable,
    greeks: GreekSet,
) -> io::Result<()> {
    let file = File::create(filename.as_ref())?;
    write_scan(BufWriter::new(file), table, greeks)?;
    tracing::info!(
        path = %filename.as_ref().display(),
        rows = table.len(),
        "scan written"
    );
    Ok(())
}

/// CSV body of [`write_scan_to_csv`] against any writer
pub fn write_scan<W: Write>(mut out: W, table: &ScanTable, greeks: GreekSet) -> io::Result<()> {
    let columns: Vec<(&str, usize)> = greeks
        .iter()
        .filter_map(|flag| Some((flag.label()?, ScanTable::column_of(flag)?)))
        .collect();

    write!(out, "volatility,price")?;
    for (label, _) in &columns {
        write!(out, ",{}", label)?;
    }
    writeln!(out)?;

    for (vol, row) in table.volatilities.iter().zip(table.values.rows()) {
        write!(out, "{},{}", vol, row[PRICE_COLUMN])?;
        for &(_, col) in &columns {
            write!(out, ",{}", row[col])?;
        }
        writeln!(out)?;
    }
    out.flush()
}

pub fn write_summary_to_csv(filename: &str, summary_data: &[(&str, &str)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::OptionParameters;
    use crate::payoffs::OptionKind;
    use crate::scan::{scan_volatility, ScanConfig};

    fn table(points: usize) -> ScanTable {
        let base = OptionParameters::new(100.0, 95.0, 0.5, 0.03, 0.2, OptionKind::Put);
        let cfg = ScanConfig {
            points,
            ..ScanConfig::default()
        };
        scan_volatility(&base, &cfg).unwrap()
    }

    #[test]
    fn test_scan_csv_all_greeks() {
        let mut buf = Vec::new();
        write_scan(&mut buf, &table(5), GreekSet::all()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "volatility,price,delta,gamma,vega,theta,rho");
        assert!(lines[1..].iter().all(|l| l.split(',').count() == 7));
    }

    #[test]
    fn test_scan_csv_selected_greeks() {
        let t = table(3);
        let mut buf = Vec::new();
        write_scan(&mut buf, &t, GreekSet::VEGA | GreekSet::DELTA).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "volatility,price,delta,vega");

        let first: Vec<f64> = lines[1].split(',').map(|v| v.parse().unwrap()).collect();
        assert_eq!(first[0], t.volatilities[0]);
        assert_eq!(first[1], t.values[[0, PRICE_COLUMN]]);
        assert_eq!(first[3], t.values[[0, ScanTable::column_of(GreekSet::VEGA).unwrap()]]);
    }

    #[test]
    fn test_files_written() {
        let dir = std::env::temp_dir();
        let scan_path = dir.join(format!("bsm_scan_{}.csv", std::process::id()));
        write_scan_to_csv(&scan_path, &table(4), GreekSet::RHO).unwrap();
        let text = std::fs::read_to_string(&scan_path).unwrap();
        assert_eq!(text.lines().count(), 5);
        std::fs::remove_file(&scan_path).unwrap();

        let summary_path = dir.join(format!("bsm_summary_{}.csv", std::process::id()));
        let summary_str = summary_path.to_str().unwrap();
        write_summary_to_csv(summary_str, &[("kind", "put"), ("points", "4")]).unwrap();
        let text = std::fs::read_to_string(&summary_path).unwrap();
        assert_eq!(text, "kind,put\npoints,4\n");
        std::fs::remove_file(&summary_path).unwrap();
    }
}
