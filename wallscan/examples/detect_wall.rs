use clap::{Arg, ArgAction, Command};
use wallscan::{
    detect_wall, range_at_heading, read_snapshot, DetectorConfig, RangeAtHeadingMessage,
    WallGeometry, WallMessage, WallReport,
};

struct Options {
    snapshot: String,
    config: Option<String>,
    r2_min: Option<f64>,
    json: bool,
}

fn get_options() -> Options {
    let matches = Command::new("Wall detector.")
        .about("Finds the most prominent wall in a lidar snapshot.")
        .disable_version_flag(true)
        .arg(
            Arg::new("snapshot")
                .help("Snapshot file with one \"degree, distance\" pair per line")
                .required(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("JSON detector configuration"),
        )
        .arg(
            Arg::new("r2-min")
                .long("r2-min")
                .help("Minimum squared correlation of a wall")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the messages sent to the robot")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    Options {
        snapshot: matches.get_one::<String>("snapshot").unwrap().to_string(),
        config: matches.get_one::<String>("config").cloned(),
        r2_min: matches.get_one::<f64>("r2-min").copied(),
        json: matches.get_flag("json"),
    }
}

fn main() -> wallscan::Result<()> {
    env_logger::init();
    let options = get_options();

    let mut config = match &options.config {
        Some(path) => DetectorConfig::from_json_file(path)?,
        None => DetectorConfig::default(),
    };
    if let Some(r2_min) = options.r2_min {
        config = config.with_r2_min(r2_min);
    }

    let scan = read_snapshot(&options.snapshot)?;
    let detection = detect_wall(&scan, &config)?;
    let ahead = range_at_heading(&scan, -10..10);

    if options.json {
        println!("{}", WallMessage::from_detection(&detection).encode()?);
        println!("{}", RangeAtHeadingMessage::from_reading(ahead).encode()?);
        return Ok(());
    }

    println!("{}", WallReport(&detection));
    if let Some(run) = detection.wall() {
        let geometry = WallGeometry::of(run);
        println!(
            "Midpoint at {:.1} degrees, range {:.1}; turn {:.1} degrees to face along it",
            geometry.heading, geometry.range, geometry.orientation
        );
    }
    if let Some((heading, range)) = ahead {
        println!("Closest ahead: {:.1} at {} degrees", range, heading);
    }
    Ok(())
}
