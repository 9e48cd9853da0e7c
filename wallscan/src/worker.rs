use crate::config::DetectorConfig;
use crate::constants::N_PENDING_SCANS;
use crate::error::{Result, WallScanError};
use crate::points::ValidPoints;
use crate::scanner::Scanner;
use crossbeam_channel::{bounded, select, Receiver, Sender};
use std::thread::JoinHandle;
use wallscan_data::{PolarScan, WallDetection};

/// Struct that owns the detection thread.
pub struct DetectorThread {
    pub(crate) scan_tx: Sender<PolarScan>,
    pub(crate) terminator_tx: Sender<bool>,
    pub(crate) thread: Option<JoinHandle<()>>,
}

impl DetectorThread {
    /// Queues a scan. Blocks while the detection queue is full.
    pub fn send(&self, scan: PolarScan) -> Result<()> {
        self.scan_tx
            .send(scan)
            .map_err(|_| WallScanError::WorkerStopped)
    }
}

/// Function to launch the detector on its own thread.
///
/// Scans passed to [`DetectorThread::send`] come back as detections, in
/// order, on the returned receiver.
pub fn run_detector(
    config: DetectorConfig,
) -> Result<(DetectorThread, Receiver<WallDetection>)> {
    let scanner = Scanner::new(config)?;

    let (scan_tx, scan_rx) = bounded::<PolarScan>(N_PENDING_SCANS);
    let (detection_tx, detection_rx) = bounded::<WallDetection>(N_PENDING_SCANS);
    let (terminator_tx, terminator_rx) = bounded(1);

    let thread = Some(std::thread::spawn(move || {
        detect_scans(&scanner, scan_rx, terminator_rx, detection_tx);
    }));

    let detector_thread = DetectorThread {
        scan_tx,
        terminator_tx,
        thread,
    };
    Ok((detector_thread, detection_rx))
}

pub(crate) fn detect_scans(
    scanner: &Scanner,
    scan_rx: Receiver<PolarScan>,
    terminator_rx: Receiver<bool>,
    detection_tx: Sender<WallDetection>,
) {
    loop {
        let scan = select! {
            recv(terminator_rx) -> _ => return,
            recv(scan_rx) -> scan => match scan {
                Ok(scan) => scan,
                Err(_) => return,
            },
        };

        let detection = scanner.scan(&ValidPoints::from_scan(&scan));
        select! {
            recv(terminator_rx) -> _ => return,
            send(detection_tx, detection) -> res => {
                if let Err(e) = res {
                    log::warn!("{e}");
                    return;
                }
            },
        }
    }
}

/// Function to join the detection thread.
/// This function is automatically called when `detector_thread` is dropped.
pub fn join(detector_thread: &mut DetectorThread) {
    // The thread may already have exited and dropped the receiver
    let _ = detector_thread.terminator_tx.try_send(true);

    if let Some(thread) = detector_thread.thread.take() {
        if thread.join().is_err() {
            log::error!("Detection thread panicked");
        }
    }
}

impl Drop for DetectorThread {
    fn drop(&mut self) {
        join(self);
    }
}
