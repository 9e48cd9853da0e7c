use wallscan_data::PlanarPoint;

pub(crate) fn degree_to_radian(degree: f64) -> f64 {
    degree * std::f64::consts::PI / 180.
}

pub(crate) fn radian_to_degree(radian: f64) -> f64 {
    radian * 180. / std::f64::consts::PI
}

/// Projects a polar sample onto the plane.
pub fn to_planar(degree: f64, distance: f64) -> PlanarPoint {
    let radian = degree_to_radian(degree);
    PlanarPoint::new(distance * radian.cos(), distance * radian.sin())
}

/// Heading of `point` seen from the origin, in `[0, 360)` degrees.
pub(crate) fn heading_degree(point: &PlanarPoint) -> f64 {
    let degree = radian_to_degree(point.y.atan2(point.x)).rem_euclid(360.);
    // A tiny negative angle wraps up to exactly 360
    if degree >= 360. {
        0.
    } else {
        degree
    }
}

/// Folds a line direction into `(-90, 90]` degrees.
pub(crate) fn fold_line_angle(mut degree: f64) -> f64 {
    while degree > 90. {
        degree -= 180.;
    }
    while degree <= -90. {
        degree += 180.;
    }
    degree
}

/// Wraps an integer degree into `0..360`.
pub(crate) fn wrap_degree(degree: i64) -> usize {
    degree.rem_euclid(360) as usize
}
