#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of samples in one rotation, one per degree.
pub const SCAN_SIZE: usize = 360;

/// Distance reported by the rangefinder when there was no return at an angle.
pub const INVALID_DISTANCE: f64 = 590.6;

/// Struct to hold one lap of rangefinder data, indexed by degree.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolarScan {
    /// Distance at each degree, or [`INVALID_DISTANCE`].
    distances: Vec<f64>,
}

impl PolarScan {
    /// A scan with no return at any angle.
    pub fn empty() -> Self {
        Self {
            distances: vec![INVALID_DISTANCE; SCAN_SIZE],
        }
    }

    pub fn from_array(distances: [f64; SCAN_SIZE]) -> Self {
        Self {
            distances: distances.to_vec(),
        }
    }

    /// Returns `None` unless `distances` holds exactly [`SCAN_SIZE`] entries.
    pub fn from_slice(distances: &[f64]) -> Option<Self> {
        if distances.len() != SCAN_SIZE {
            return None;
        }
        Some(Self {
            distances: distances.to_vec(),
        })
    }

    /// Distance at `degree`, or `None` if the degree is out of range.
    pub fn distance(&self, degree: usize) -> Option<f64> {
        self.distances.get(degree).copied()
    }

    /// Sets the distance at `degree`; degrees outside 0..360 are ignored.
    pub fn set_distance(&mut self, degree: usize, distance: f64) {
        if let Some(d) = self.distances.get_mut(degree) {
            *d = distance;
        }
    }

    pub fn invalidate(&mut self, degree: usize) {
        self.set_distance(degree, INVALID_DISTANCE);
    }

    pub fn is_valid(&self, degree: usize) -> bool {
        matches!(self.distance(degree), Some(d) if d != INVALID_DISTANCE)
    }

    /// `(degree, distance)` for every sample, invalid ones included.
    pub fn samples(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.distances.iter().copied().enumerate()
    }

    /// `(degree, distance)` for samples that carry a return.
    pub fn valid_samples(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.samples().filter(|(_, d)| *d != INVALID_DISTANCE)
    }

    pub fn n_valid(&self) -> usize {
        self.valid_samples().count()
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }
}

impl Default for PolarScan {
    fn default() -> Self {
        Self::empty()
    }
}
