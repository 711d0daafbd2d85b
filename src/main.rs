use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use gpx_profile::{
    analyze_elevation, read_points, read_points_from_path, write_result, AnalysisConfig,
    OutputFormat, OutputOptions, DEFAULT_SEGMENT_DISTANCE_KM,
};
use log::{debug, warn};

#[derive(Parser, Debug)]
#[command(
    name = "gpx-profile",
    version,
    about = "Elevation profile of a GPX route or track, split into fixed-distance segments",
    after_help = "Examples:\n  \
        gpx-profile route.gpx                 # 1 km segments (JSON)\n  \
        gpx-profile -f csv route.gpx          # CSV output\n  \
        gpx-profile -d 0.5 -f csv route.gpx   # 500 m segments in CSV\n  \
        cat route.gpx | gpx-profile -f csv    # read from stdin"
)]
struct Cli {
    /// GPX file to analyze (`-` or omitted for stdin)
    #[arg(value_hint = ValueHint::FilePath)]
    file: Option<PathBuf>,

    /// Output format: json, csv or summary
    #[arg(short, long, default_value_t = OutputFormat::Json, value_parser = parse_format)]
    format: OutputFormat,

    /// Same as `--format csv` (deprecated)
    #[arg(short = 'c', long = "csv", action = ArgAction::SetTrue)]
    csv: bool,

    /// Compact JSON output
    #[arg(short = 'C', long, action = ArgAction::SetTrue)]
    compact: bool,

    /// Segment distance in km
    #[arg(short = 'd', long = "distance", value_name = "KM", allow_hyphen_values = true, default_value_t = DEFAULT_SEGMENT_DISTANCE_KM, value_parser = parse_segment_distance)]
    distance: f64,
}

fn parse_format(value: &str) -> std::result::Result<OutputFormat, String> {
    value.parse().map_err(|e: gpx_profile::ProfileError| e.to_string())
}

fn parse_segment_distance(value: &str) -> std::result::Result<f64, String> {
    let distance: f64 = value
        .parse()
        .map_err(|_| format!("invalid distance value: {}", value))?;
    AnalysisConfig::new(distance)
        .map(|config| config.segment_distance_km())
        .map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    let cli = Cli::parse();

    let format = if cli.csv {
        warn!("-c/--csv is deprecated, use --format csv");
        OutputFormat::Csv
    } else {
        cli.format
    };
    let options = OutputOptions {
        format,
        compact: cli.compact,
    };
    let config = AnalysisConfig::new(cli.distance)?;

    let points = match cli.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            debug!("reading {}", path.display());
            read_points_from_path(path)?
        }
        _ => {
            debug!("reading stdin");
            read_points(io::stdin().lock())?
        }
    };

    let result = analyze_elevation(&points, &config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_result(&result, &options, &mut out).context("failed to format output")?;
    out.flush().context("failed to format output")?;

    Ok(())
}
