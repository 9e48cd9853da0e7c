use crate::point::PlanarPoint;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A contiguous run of valid points accepted as lying on one line.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WallRun {
    /// Index of the first point in the valid point sequence.
    pub start: usize,
    /// Index of the last point in the valid point sequence.
    pub end: usize,
    /// Scan degree the first point was measured at.
    pub start_degree: usize,
    /// Scan degree the last point was measured at.
    pub end_degree: usize,
    /// The four points of the window that admitted this run.
    pub window: [PlanarPoint; 4],
    /// Collinearity score of the admitting window.
    pub score: f64,
    pub first: PlanarPoint,
    pub last: PlanarPoint,
    /// Euclidean distance between `first` and `last`.
    pub extent: f64,
}

impl WallRun {
    /// Number of valid points covered by the run.
    pub fn n_points(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Outcome of one scan.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WallDetection {
    Found(WallRun),
    /// No window was admitted, which is distinct from a run of zero extent.
    NotFound,
}

impl WallDetection {
    pub fn wall(&self) -> Option<&WallRun> {
        match self {
            WallDetection::Found(run) => Some(run),
            WallDetection::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, WallDetection::Found(_))
    }

    pub fn extent(&self) -> Option<f64> {
        self.wall().map(|run| run.extent)
    }
}

impl From<Option<WallRun>> for WallDetection {
    fn from(run: Option<WallRun>) -> Self {
        match run {
            Some(run) => WallDetection::Found(run),
            None => WallDetection::NotFound,
        }
    }
}
