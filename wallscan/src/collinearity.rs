//! Squared correlation of four planar points.

use wallscan_data::PlanarPoint;

/// Squared correlation coefficient between the x and y coordinates of
/// `points`. 1 means the points lie on one line.
///
/// Returns 0 when every x or every y coordinate is the same, since the
/// correlation is undefined there.
pub fn r_squared(points: &[PlanarPoint; 4]) -> f64 {
    let n = points.len() as f64;
    let (mut sum_x, mut sum_y) = (0., 0.);
    let (mut sum_xx, mut sum_yy, mut sum_xy) = (0., 0., 0.);
    for p in points {
        sum_x += p.x;
        sum_y += p.y;
        sum_xx += p.x * p.x;
        sum_yy += p.y * p.y;
        sum_xy += p.x * p.y;
    }

    let numerator = n * sum_xy - sum_x * sum_y;
    // Rounding can push an exactly zero spread slightly negative
    let spread_x = (n * sum_xx - sum_x * sum_x).max(0.);
    let spread_y = (n * sum_yy - sum_y * sum_y).max(0.);
    let denominator = spread_x.sqrt() * spread_y.sqrt();

    if denominator == 0. || !denominator.is_finite() {
        log::debug!(
            "Degenerate fit for ({:.2}, {:.2}) .. ({:.2}, {:.2})",
            points[0].x,
            points[0].y,
            points[3].x,
            points[3].y
        );
        return 0.;
    }

    let r = numerator / denominator;
    r * r
}
