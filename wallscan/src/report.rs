//! Presentation of a detection: geometry relative to the sensor, a one-line
//! summary and the wall message sent to the robot controller.

use crate::constants::{MESSAGE_SENDER, RANGE_AT_HEADING_MESSAGE_KIND, WALL_MESSAGE_KIND};
use crate::error::Result;
use crate::numeric::{fold_line_angle, heading_degree, radian_to_degree};
use serde::{Deserialize, Serialize};
use std::fmt;
use wallscan_data::{PlanarPoint, WallDetection, WallRun};

/// Where a wall lies relative to the sensor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallGeometry {
    /// Window point nearest to the sensor.
    pub closest: PlanarPoint,
    /// Midpoint between the first and last point of the run.
    pub midpoint: PlanarPoint,
    /// Heading to the midpoint, in `[0, 360)` degrees.
    pub heading: f64,
    /// Distance to the midpoint.
    pub range: f64,
    /// Degrees to turn so the sensor's zero axis is parallel to the wall,
    /// in `(-90, 90]`.
    pub orientation: f64,
}

impl WallGeometry {
    pub fn of(run: &WallRun) -> Self {
        let midpoint = run.first.midpoint(&run.last);
        let direction = radian_to_degree((run.last.y - run.first.y).atan2(run.last.x - run.first.x));
        Self {
            closest: closest_point(&run.window),
            midpoint,
            heading: heading_degree(&midpoint),
            range: midpoint.norm(),
            orientation: fold_line_angle(direction),
        }
    }
}

/// The point of `window` nearest to the sensor. Ties keep the earlier point.
pub fn closest_point(window: &[PlanarPoint; 4]) -> PlanarPoint {
    let mut closest = window[0];
    for p in &window[1..] {
        if p.norm() < closest.norm() {
            closest = *p;
        }
    }
    closest
}

/// Human-readable rendering of a detection.
pub struct WallReport<'a>(pub &'a WallDetection);

impl fmt::Display for WallReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let run = match self.0 {
            WallDetection::Found(run) => run,
            WallDetection::NotFound => return write!(f, "No wall found"),
        };
        write!(f, "Wall found with points")?;
        for (i, p) in run.window.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}({:.2}, {:.2})", sep, p.x, p.y)?;
        }
        write!(
            f,
            "; extent {:.2} from {} to {} degrees",
            run.extent, run.start_degree, run.end_degree
        )
    }
}

/// Message telling the robot how to face the most prominent wall.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallMessage {
    pub sender: String,
    pub message: String,
    pub status: WallStatus,
    pub orientation: f64,
    pub heading: f64,
    pub range: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallStatus {
    #[serde(rename = "ok")]
    Ok,
    #[serde(rename = "not found")]
    NotFound,
}

impl WallMessage {
    pub fn from_detection(detection: &WallDetection) -> Self {
        let (status, orientation, heading, range) = match detection.wall() {
            Some(run) => {
                let geometry = WallGeometry::of(run);
                (
                    WallStatus::Ok,
                    geometry.orientation,
                    geometry.heading,
                    geometry.range,
                )
            }
            None => (WallStatus::NotFound, 0., 0., 0.),
        };
        Self {
            sender: MESSAGE_SENDER.to_string(),
            message: WALL_MESSAGE_KIND.to_string(),
            status,
            orientation,
            heading,
            range,
        }
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Message carrying the closest return within the sweep the robot asked
/// about. Both fields are `null` when the sweep had no return.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeAtHeadingMessage {
    pub sender: String,
    pub message: String,
    pub heading: Option<usize>,
    pub range: Option<f64>,
}

impl RangeAtHeadingMessage {
    /// Wraps a `(degree, distance)` reading from `range_at_heading`.
    pub fn from_reading(reading: Option<(usize, f64)>) -> Self {
        Self {
            sender: MESSAGE_SENDER.to_string(),
            message: RANGE_AT_HEADING_MESSAGE_KIND.to_string(),
            heading: reading.map(|(heading, _)| heading),
            range: reading.map(|(_, range)| range),
        }
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
