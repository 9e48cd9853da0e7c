//! Text snapshots of one rotation, one `degree, distance` pair per line.

use crate::constants::{SNAPSHOT_COMMENT, SNAPSHOT_ERROR_DISTANCE};
use crate::error::{Result, WallScanError};
use crate::numeric::wrap_degree;
use std::io::Write;
use std::path::Path;
use wallscan_data::PolarScan;

/// Parses a snapshot. Degrees missing from the text, and readings at or
/// beyond the logger's error distance, are left invalid.
pub fn parse_snapshot(text: &str) -> Result<PolarScan> {
    let mut scan = PolarScan::empty();
    for (i, line) in text.lines().enumerate() {
        let line_number = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with(SNAPSHOT_COMMENT) {
            continue;
        }
        let (degree, distance) = parse_line(line, line_number)?;
        if distance >= SNAPSHOT_ERROR_DISTANCE {
            log::warn!(
                "Dropping error reading {} at {} degrees (line {})",
                distance,
                degree,
                line_number
            );
            continue;
        }
        if scan.is_valid(degree) {
            log::warn!("Degree {} repeated on line {}", degree, line_number);
        }
        scan.set_distance(degree, distance);
    }
    Ok(scan)
}

fn parse_line(line: &str, line_number: usize) -> Result<(usize, f64)> {
    let parse_error = |reason: String| WallScanError::SnapshotParse {
        line: line_number,
        reason,
    };

    let mut fields = line.split(',').map(str::trim);
    let (degree, distance) = match (fields.next(), fields.next(), fields.next()) {
        (Some(degree), Some(distance), None) => (degree, distance),
        _ => return Err(parse_error(format!("expected two fields in \"{}\"", line))),
    };
    let degree: f64 = degree
        .parse()
        .map_err(|_| parse_error(format!("invalid degree \"{}\"", degree)))?;
    let distance: f64 = distance
        .parse()
        .map_err(|_| parse_error(format!("invalid distance \"{}\"", distance)))?;
    if !degree.is_finite() || !distance.is_finite() {
        return Err(parse_error(format!("non-finite value in \"{}\"", line)));
    }
    Ok((wrap_degree(degree.round() as i64), distance))
}

pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<PolarScan> {
    let text = std::fs::read_to_string(path)?;
    parse_snapshot(&text)
}

/// Writes all 360 samples, invalid ones as the sentinel distance.
pub fn write_snapshot<W: Write>(writer: &mut W, scan: &PolarScan) -> Result<()> {
    for (degree, distance) in scan.samples() {
        writeln!(writer, "{:.1}, {:.1}", degree as f64, distance)?;
    }
    Ok(())
}

pub fn snapshot_to_string(scan: &PolarScan) -> String {
    scan.samples()
        .map(|(degree, distance)| format!("{:.1}, {:.1}\n", degree as f64, distance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snapshot() {
        let text = "# one rotation\n24.0, 22.1\n\n26, 21.1\n28.4, 19.6\n30.0, 800.0\n-1, 5.0\n";
        let scan = parse_snapshot(text).unwrap();
        assert_eq!(scan.distance(24), Some(22.1));
        assert_eq!(scan.distance(26), Some(21.1));
        assert_eq!(scan.distance(28), Some(19.6));
        assert!(!scan.is_valid(30));
        assert_eq!(scan.distance(359), Some(5.0));
        assert_eq!(scan.n_valid(), 4);
    }

    #[test]
    fn test_parse_snapshot_errors() {
        assert!(matches!(
            parse_snapshot("1.0, 2.0\n1.0 2.0\n"),
            Err(WallScanError::SnapshotParse { line: 2, .. })
        ));
        assert!(matches!(
            parse_snapshot("a, 2.0"),
            Err(WallScanError::SnapshotParse { line: 1, .. })
        ));
        assert!(matches!(
            parse_snapshot("1.0, 2.0, 3.0"),
            Err(WallScanError::SnapshotParse { line: 1, .. })
        ));
        assert!(matches!(
            parse_snapshot("1.0, NaN"),
            Err(WallScanError::SnapshotParse { line: 1, .. })
        ));
    }

    #[test]
    fn test_write_snapshot() {
        let mut scan = PolarScan::empty();
        scan.set_distance(1, 36.2);
        let mut buffer = Vec::new();
        write_snapshot(&mut buffer, &scan).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, snapshot_to_string(&scan));

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 360);
        assert_eq!(lines[0], "0.0, 590.6");
        assert_eq!(lines[1], "1.0, 36.2");
        assert_eq!(parse_snapshot(&text).unwrap().n_valid(), 1);
    }

    #[test]
    fn test_read_missing_snapshot() {
        assert!(matches!(
            read_snapshot("/nonexistent/lidar_snapshot_1.dat"),
            Err(WallScanError::Io(_))
        ));
    }
}
