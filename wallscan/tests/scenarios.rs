use approx::assert_abs_diff_eq;
use wallscan::{
    detect_wall, read_snapshot, DetectorConfig, PolarScan, ScanTrace, Scanner,
    ValidPoints, WallDetection, WallMessage, WallReport, WallStatus, INVALID_DISTANCE, SCAN_SIZE,
};

const PROTOTYPE_SCAN: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/prototype_scan.dat");

fn prototype_scan() -> PolarScan {
    read_snapshot(PROTOTYPE_SCAN).unwrap()
}

fn admitted_starts(points: &ValidPoints, r2_min: f64) -> Vec<usize> {
    let scanner = Scanner::new(DetectorConfig::new().with_r2_min(r2_min)).unwrap();
    scanner.candidates(points).iter().map(|run| run.start).collect()
}

#[test]
fn test_prototype_scan() {
    let scan = prototype_scan();
    assert_eq!(scan.n_valid(), 71);

    let detection = detect_wall(&scan, &DetectorConfig::default()).unwrap();
    let run = detection.wall().unwrap();
    assert_eq!((run.start, run.end), (16, 20));
    assert_eq!((run.start_degree, run.end_degree), (106, 156));
    assert_abs_diff_eq!(run.extent, 197.8725167927494, epsilon = 1e-6);
    assert_abs_diff_eq!(run.first.x, -61.384439140445686, epsilon = 1e-6);
    assert_abs_diff_eq!(run.first.y, 214.0729796854636, epsilon = 1e-6);
    assert_abs_diff_eq!(run.last.x, -39.19110013286757, epsilon = 1e-6);
    assert_abs_diff_eq!(run.last.y, 17.44900198795184, epsilon = 1e-6);

    let report = WallReport(&detection).to_string();
    assert!(report.starts_with("Wall found with points (-61.38, 214.07)"));

    let message = WallMessage::from_detection(&detection);
    assert_eq!(message.status, WallStatus::Ok);
    assert!((0. ..360.).contains(&message.heading));
    assert!(message.orientation > -90. && message.orientation <= 90.);
}

#[test]
fn test_prototype_scan_strict_threshold() {
    let config = DetectorConfig::new().with_r2_min(0.99);
    let detection = detect_wall(&prototype_scan(), &config).unwrap();
    let run = detection.wall().unwrap();
    assert_eq!((run.start, run.end), (17, 20));
    assert_abs_diff_eq!(run.extent, 197.7807022711528, epsilon = 1e-6);
}

#[test]
fn test_raising_threshold_never_admits_more() {
    let points = ValidPoints::from_scan(&prototype_scan());
    let loose = admitted_starts(&points, 0.9);
    let middle = admitted_starts(&points, 0.95);
    let strict = admitted_starts(&points, 0.99);
    assert_eq!((loose.len(), middle.len(), strict.len()), (49, 46, 41));
    assert!(middle.iter().all(|s| loose.contains(s)));
    assert!(strict.iter().all(|s| middle.contains(s)));
    assert!(admitted_starts(&points, 1.).is_empty());
}

#[test]
fn test_scan_is_idempotent() {
    let points = ValidPoints::from_scan(&prototype_scan());
    let scanner = Scanner::new(DetectorConfig::default()).unwrap();
    let mut first_trace = ScanTrace::new();
    let mut second_trace = ScanTrace::new();
    let first = scanner.scan_traced(&points, &mut first_trace);
    let second = scanner.scan_traced(&points, &mut second_trace);
    assert_eq!(first, second);
    assert_eq!(first_trace, second_trace);
    assert_eq!(first_trace.len(), points.len() - 3);
}

#[test]
fn test_all_invalid_scan() {
    let scan = PolarScan::from_array([INVALID_DISTANCE; SCAN_SIZE]);
    assert!(ValidPoints::from_scan(&scan).is_empty());
    let detection = detect_wall(&scan, &DetectorConfig::default()).unwrap();
    assert_eq!(detection, WallDetection::NotFound);
    let message = WallMessage::from_detection(&detection);
    assert_eq!(message.status, WallStatus::NotFound);
}

#[test]
fn test_sparse_scans_never_panic() {
    let scanner = Scanner::new(DetectorConfig::default()).unwrap();
    for n in 0..4 {
        let mut scan = PolarScan::empty();
        for degree in 0..n {
            scan.set_distance(degree * 90, 100.);
        }
        let points = ValidPoints::from_scan(&scan);
        assert_eq!(points.len(), n);
        assert_eq!(scanner.scan(&points), WallDetection::NotFound);
    }
}

#[test]
fn test_four_valid_samples() {
    // four returns from the line x + y = 100
    let mut scan = PolarScan::empty();
    for degree in [5usize, 40, 45, 85] {
        let radian = (degree as f64).to_radians();
        scan.set_distance(degree, 100. / (radian.cos() + radian.sin()));
    }
    let valid = ValidPoints::from_scan(&scan);
    assert_eq!(valid.len(), 4);

    let detection = detect_wall(&scan, &DetectorConfig::default()).unwrap();
    let run = detection.wall().unwrap();
    assert_eq!((run.start, run.end), (0, 3));
    assert_eq!(run.window, [valid[0], valid[1], valid[2], valid[3]]);
    assert_abs_diff_eq!(run.extent, valid[0].distance_to(&valid[3]), epsilon = 1e-12);
    assert_abs_diff_eq!(run.first.x + run.first.y, 100., epsilon = 1e-9);
}
