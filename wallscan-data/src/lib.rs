pub mod detection;
pub mod point;
pub mod scan;

pub use detection::{WallDetection, WallRun};
pub use point::PlanarPoint;
pub use scan::{PolarScan, INVALID_DISTANCE, SCAN_SIZE};
