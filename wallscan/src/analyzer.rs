use crate::numeric::wrap_degree;
use std::ops::Range;
use wallscan_data::{PolarScan, INVALID_DISTANCE, SCAN_SIZE};

/// Closest valid return within `sweep`, as `(degree, distance)`.
///
/// The sweep is half-open and may start below zero, so `-10..10` covers
/// 350..=359 and 0..=9. Equal distances keep the first degree swept. At most
/// one full turn is swept, starting at `sweep.start`.
pub fn range_at_heading(scan: &PolarScan, sweep: Range<i64>) -> Option<(usize, f64)> {
    let mut closest: Option<(usize, f64)> = None;
    for degree in sweep.take(SCAN_SIZE).map(wrap_degree) {
        let distance = match scan.distance(degree) {
            Some(d) if d != INVALID_DISTANCE => d,
            _ => continue,
        };
        if closest.map_or(true, |(_, d)| distance < d) {
            closest = Some((degree, distance));
        }
    }
    closest
}
