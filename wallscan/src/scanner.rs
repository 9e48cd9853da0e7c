//! Sweep over the valid points of a scan looking for the longest wall.

use crate::collinearity::r_squared;
use crate::config::DetectorConfig;
use crate::constants::WINDOW_SIZE;
use crate::error::Result;
use crate::extent::measure_run;
use crate::points::ValidPoints;
use wallscan_data::{WallDetection, WallRun};

/// Score of one admission window, as recorded by [`Scanner::scan_traced`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowScore {
    pub start: usize,
    pub score: f64,
    pub admitted: bool,
}

/// Collector for the admission scores of a single sweep.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanTrace {
    scores: Vec<WindowScore>,
}

impl ScanTrace {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, start: usize, score: f64, admitted: bool) {
        self.scores.push(WindowScore {
            start,
            score,
            admitted,
        });
    }

    pub fn scores(&self) -> &[WindowScore] {
        &self.scores
    }

    /// Start indices of the admitted windows.
    pub fn admitted(&self) -> impl Iterator<Item = usize> + '_ {
        self.scores.iter().filter(|s| s.admitted).map(|s| s.start)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn clear(&mut self) {
        self.scores.clear();
    }
}

/// Finds the run of collinear points with the greatest extent.
#[derive(Clone, Debug)]
pub struct Scanner {
    config: DetectorConfig,
}

impl Scanner {
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Best run over `points`, or [`WallDetection::NotFound`] if no window
    /// was admitted.
    pub fn scan(&self, points: &ValidPoints) -> WallDetection {
        self.best_run(points, None).into()
    }

    /// Same as [`Scanner::scan`], recording every admission score in `trace`.
    pub fn scan_traced(&self, points: &ValidPoints, trace: &mut ScanTrace) -> WallDetection {
        self.best_run(points, Some(trace)).into()
    }

    /// Every admitted run, in start order.
    pub fn candidates(&self, points: &ValidPoints) -> Vec<WallRun> {
        let mut runs = Vec::new();
        self.sweep(points, None, |run| runs.push(run));
        runs
    }

    fn best_run(&self, points: &ValidPoints, trace: Option<&mut ScanTrace>) -> Option<WallRun> {
        let mut best: Option<WallRun> = None;
        self.sweep(points, trace, |run| {
            let improves = best.as_ref().map_or(true, |b| run.extent > b.extent);
            if improves {
                best = Some(run);
            }
        });
        best
    }

    fn sweep<F>(&self, points: &ValidPoints, mut trace: Option<&mut ScanTrace>, mut on_run: F)
    where
        F: FnMut(WallRun),
    {
        if points.len() < WINDOW_SIZE {
            log::debug!("Only {} valid points, nothing to scan", points.len());
            return;
        }

        let r2_min = self.config.r2_min;
        for start in 0..=(points.len() - WINDOW_SIZE) {
            let window = [
                points[start],
                points[start + 1],
                points[start + 2],
                points[start + 3],
            ];
            let score = r_squared(&window);
            let admitted = score > r2_min;
            if let Some(trace) = trace.as_deref_mut() {
                trace.record(start, score, admitted);
            }
            if !admitted {
                log::trace!(
                    "Rejected window at {} with r2 {:.4} ({:.2}, {:.2})",
                    start,
                    score,
                    window[0].x,
                    window[0].y
                );
                continue;
            }

            log::debug!("Admitted window at {} with r2 {:.4}", start, score);
            if let Some(run) = measure_run(points, start, r2_min) {
                log::debug!(
                    "Run {}..={} extends {:.2} ({:.2}, {:.2}) -> ({:.2}, {:.2})",
                    run.start,
                    run.end,
                    run.extent,
                    run.first.x,
                    run.first.y,
                    run.last.x,
                    run.last.y
                );
                on_run(run);
            }
        }
    }
}
