//! Detection of the most prominent wall in one 360 degree rangefinder scan.
//!
//! Valid samples are projected onto the plane, every run of four points is
//! scored for collinearity, admitted runs are extended while the fit holds
//! and the run with the greatest extent is reported.

mod analyzer;
mod collinearity;
mod config;
mod constants;
mod error;
mod extent;
mod numeric;
mod points;
mod report;
mod scanner;
mod snapshot;
mod worker;

pub use crate::analyzer::range_at_heading;
pub use crate::collinearity::r_squared;
pub use crate::config::DetectorConfig;
pub use crate::error::{Result, WallScanError};
pub use crate::numeric::to_planar;
pub use crate::points::ValidPoints;
pub use crate::report::{
    closest_point, RangeAtHeadingMessage, WallGeometry, WallMessage, WallReport, WallStatus,
};
pub use crate::scanner::{ScanTrace, Scanner, WindowScore};
pub use crate::snapshot::{parse_snapshot, read_snapshot, snapshot_to_string, write_snapshot};
pub use crate::worker::{join, run_detector, DetectorThread};
pub use wallscan_data::{
    PlanarPoint, PolarScan, WallDetection, WallRun, INVALID_DISTANCE, SCAN_SIZE,
};

/// Builds a scan from raw distances, one per degree.
pub fn scan_from_distances(distances: &[f64]) -> Result<PolarScan> {
    PolarScan::from_slice(distances).ok_or(WallScanError::InvalidScanLength(distances.len()))
}

/// Finds the wall with the greatest extent in `scan`.
///
/// # Arguments
///
/// * `scan` - One rotation, one distance per degree.
/// * `config` - Detector parameters. Fails only if they are out of range.
pub fn detect_wall(scan: &PolarScan, config: &DetectorConfig) -> Result<WallDetection> {
    let scanner = Scanner::new(config.clone())?;
    let points = ValidPoints::from_scan(scan);
    let detection = scanner.scan(&points);
    match &detection {
        WallDetection::Found(run) => log::info!(
            "Wall from {} to {} degrees, extent {:.2} ({} of {} valid points)",
            run.start_degree,
            run.end_degree,
            run.extent,
            run.n_points(),
            points.len()
        ),
        WallDetection::NotFound => log::info!("No wall in {} valid points", points.len()),
    }
    Ok(detection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_detect_wall_all_invalid() {
        let detection = detect_wall(&PolarScan::empty(), &DetectorConfig::default()).unwrap();
        assert_eq!(detection, WallDetection::NotFound);
        assert_eq!(detection.extent(), None);
    }

    #[test]
    fn test_detect_wall_too_few_valid_samples() {
        let mut scan = PolarScan::empty();
        scan.set_distance(10, 50.);
        scan.set_distance(20, 51.);
        scan.set_distance(30, 52.);
        let detection = detect_wall(&scan, &DetectorConfig::default()).unwrap();
        assert_eq!(detection, WallDetection::NotFound);
    }

    #[test]
    fn test_detect_wall_four_collinear_samples() {
        // four samples on the line x + y = 100, spread over the scan
        let mut scan = PolarScan::empty();
        let degrees = [15usize, 30, 50, 75];
        for &degree in &degrees {
            let radian = (degree as f64).to_radians();
            scan.set_distance(degree, 100. / (radian.cos() + radian.sin()));
        }

        let detection = detect_wall(&scan, &DetectorConfig::default()).unwrap();
        let run = detection.wall().unwrap();
        let first = to_planar(15., scan.distance(15).unwrap());
        let last = to_planar(75., scan.distance(75).unwrap());
        assert_eq!(run.window[0], first);
        assert_eq!(run.window[3], last);
        assert_eq!((run.start_degree, run.end_degree), (15, 75));
        assert_abs_diff_eq!(run.extent, first.distance_to(&last), epsilon = 1e-12);
    }

    #[test]
    fn test_scan_from_distances() {
        assert!(matches!(
            scan_from_distances(&[1.; 12]),
            Err(WallScanError::InvalidScanLength(12))
        ));
        let scan = scan_from_distances(&[INVALID_DISTANCE; SCAN_SIZE]).unwrap();
        assert_eq!(scan.n_valid(), 0);
    }

    #[test]
    fn test_detect_wall_invalid_config() {
        let config = DetectorConfig::new().with_r2_min(3.);
        assert!(detect_wall(&PolarScan::empty(), &config).is_err());
    }
}
