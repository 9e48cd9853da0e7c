/// Number of points scored together when testing for collinearity.
pub(crate) const WINDOW_SIZE: usize = 4;
/// Minimum squared correlation to admit and extend a run.
pub(crate) const DEFAULT_R2_MIN: f64 = 0.9;
// Snapshot logs mark failed readings with large distances instead of the sentinel
pub(crate) const SNAPSHOT_ERROR_DISTANCE: f64 = 777.;
pub(crate) const SNAPSHOT_COMMENT: char = '#';
pub(crate) const MESSAGE_SENDER: &str = "lidar";
pub(crate) const WALL_MESSAGE_KIND: &str = "wall";
pub(crate) const RANGE_AT_HEADING_MESSAGE_KIND: &str = "range at heading";
pub(crate) const N_PENDING_SCANS: usize = 10;
