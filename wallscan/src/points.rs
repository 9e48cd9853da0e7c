use crate::numeric::to_planar;
use std::ops::Index;
use wallscan_data::{PlanarPoint, PolarScan, SCAN_SIZE};

/// Planar points of the valid samples of one scan, in angle order.
///
/// Each point remembers the degree it was measured at, so a run found over
/// the sequence can be mapped back onto the scan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidPoints {
    points: Vec<PlanarPoint>,
    degrees: Vec<usize>,
}

impl ValidPoints {
    /// Projects every non-invalid sample of `scan`.
    pub fn from_scan(scan: &PolarScan) -> Self {
        let mut valid = Self::with_capacity(SCAN_SIZE);
        for (degree, distance) in scan.valid_samples() {
            valid.push(degree, to_planar(degree as f64, distance));
        }
        valid
    }

    /// Builds a sequence from points that are already planar. Degrees are
    /// numbered by position.
    pub fn from_points(points: &[PlanarPoint]) -> Self {
        let points = &points[..points.len().min(SCAN_SIZE)];
        Self {
            points: points.to_vec(),
            degrees: (0..points.len()).collect(),
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            degrees: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, degree: usize, point: PlanarPoint) {
        self.points.push(point);
        self.degrees.push(degree);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PlanarPoint> {
        self.points.get(index)
    }

    /// Degree of the sample the point at `index` came from.
    pub fn degree(&self, index: usize) -> Option<usize> {
        self.degrees.get(index).copied()
    }

    /// The points at `indices`, or `None` if any index is past the end.
    pub(crate) fn window(&self, indices: [usize; 4]) -> Option<[PlanarPoint; 4]> {
        let mut window = [PlanarPoint::new(0., 0.); 4];
        for (slot, &i) in window.iter_mut().zip(indices.iter()) {
            *slot = *self.points.get(i)?;
        }
        Some(window)
    }
}

impl Index<usize> for ValidPoints {
    type Output = PlanarPoint;

    fn index(&self, index: usize) -> &PlanarPoint {
        &self.points[index]
    }
}
