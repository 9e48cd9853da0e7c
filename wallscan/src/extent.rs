//! Extension and measurement of admitted runs.

use crate::collinearity::r_squared;
use crate::constants::WINDOW_SIZE;
use crate::points::ValidPoints;
use wallscan_data::WallRun;

/// Index of the last point of the run admitted at `start`.
///
/// The run grows one point at a time. Each step scores the start point
/// together with the three newest points; the first step scoring below
/// `r2_min` closes the run before its newest point. A run still holding at
/// the end of the sequence closes at the last point.
///
/// Returns `None` if there is no full window at `start`, or if that window
/// scores no more than `r2_min`.
pub(crate) fn run_end(points: &ValidPoints, start: usize, r2_min: f64) -> Option<usize> {
    if points.len() < WINDOW_SIZE || start > points.len() - WINDOW_SIZE {
        return None;
    }
    let admitting = [
        points[start],
        points[start + 1],
        points[start + 2],
        points[start + 3],
    ];
    if r_squared(&admitting) <= r2_min {
        return None;
    }

    let mut d = start + 1;
    while d + 3 < points.len() {
        let window = [points[start], points[d + 1], points[d + 2], points[d + 3]];
        if r_squared(&window) < r2_min {
            return Some(d + 2);
        }
        d += 1;
    }
    Some(points.len() - 1)
}

/// Extends the run admitted at `start` and measures its extent.
pub(crate) fn measure_run(points: &ValidPoints, start: usize, r2_min: f64) -> Option<WallRun> {
    let end = run_end(points, start, r2_min)?;
    let window = points.window([start, start + 1, start + 2, start + 3])?;
    let first = points[start];
    let last = points[end];
    Some(WallRun {
        start,
        end,
        start_degree: points.degree(start)?,
        end_degree: points.degree(end)?,
        window,
        score: r_squared(&window),
        first,
        last,
        extent: first.distance_to(&last),
    })
}
