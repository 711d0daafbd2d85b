/// Result rendering: JSON, CSV and a plain-text summary
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use csv::Writer;

use crate::analyzer::{AnalysisResult, Metadata};
use crate::error::{ProfileError, Result};

pub const CSV_HEADER: [&str; 10] = [
    "segment",
    "start_km",
    "end_km",
    "distance_km",
    "elevation_gain_m",
    "elevation_loss_m",
    "net_elevation_m",
    "start_elevation_m",
    "end_elevation_m",
    "point_count",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Summary,
}

impl FromStr for OutputFormat {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "summary" => Ok(OutputFormat::Summary),
            _ => Err(ProfileError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Summary => "summary",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// Single-line JSON; ignored by the other formats.
    pub compact: bool,
}

pub fn write_result<W: Write>(result: &AnalysisResult, options: &OutputOptions, writer: W) -> Result<()> {
    match options.format {
        OutputFormat::Json => write_json(result, options.compact, writer),
        OutputFormat::Csv => write_csv(result, writer),
        OutputFormat::Summary => write_summary(&result.metadata, writer),
    }
}

fn write_json<W: Write>(result: &AnalysisResult, compact: bool, mut writer: W) -> Result<()> {
    if compact {
        serde_json::to_writer(&mut writer, result)?;
    } else {
        serde_json::to_writer_pretty(&mut writer, result)?;
    }
    writeln!(writer)?;
    Ok(())
}

fn write_csv<W: Write>(result: &AnalysisResult, writer: W) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for segment in &result.segments {
        csv_writer.write_record(&[
            segment.number.to_string(),
            format!("{:.3}", segment.start_km),
            format!("{:.3}", segment.end_km),
            format!("{:.3}", segment.distance_km),
            format!("{:.1}", segment.elevation_gain_m),
            format!("{:.1}", segment.elevation_loss_m),
            format!("{:.1}", segment.net_elevation_m),
            format!("{:.1}", segment.start_elevation_m),
            format!("{:.1}", segment.end_elevation_m),
            segment.point_count.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn write_summary<W: Write>(metadata: &Metadata, mut writer: W) -> Result<()> {
    writeln!(writer, "Total Distance: {:.2} km", metadata.total_distance_km)?;
    writeln!(writer, "Total Points: {}", metadata.total_points)?;
    writeln!(writer, "Segment Distance: {:.1} km", metadata.segment_distance_km)?;
    writeln!(writer, "Total Elevation Gain: {:.1} m", metadata.total_elevation_gain_m)?;
    writeln!(writer, "Total Elevation Loss: {:.1} m", metadata.total_elevation_loss_m)?;
    writeln!(
        writer,
        "Elevation Range: {:.1} - {:.1} m",
        metadata.min_elevation_m, metadata.max_elevation_m
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::Segment;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            metadata: Metadata {
                total_distance_km: 1.7504,
                total_points: 5,
                segment_distance_km: 1.0,
                total_elevation_gain_m: 32.26,
                total_elevation_loss_m: 4.0,
                min_elevation_m: 98.0,
                max_elevation_m: 126.26,
            },
            segments: vec![
                Segment {
                    number: 1,
                    start_km: 0.0,
                    end_km: 1.0,
                    distance_km: 1.0,
                    elevation_gain_m: 20.0,
                    elevation_loss_m: 4.0,
                    net_elevation_m: 16.0,
                    start_elevation_m: 100.0,
                    end_elevation_m: 116.0,
                    point_count: 4,
                },
                Segment {
                    number: 2,
                    start_km: 1.0,
                    end_km: 1.7504,
                    distance_km: 0.7504,
                    elevation_gain_m: 10.26,
                    elevation_loss_m: 0.0,
                    net_elevation_m: 10.26,
                    start_elevation_m: 116.0,
                    end_elevation_m: 126.26,
                    point_count: 2,
                },
            ],
        }
    }

    fn render(options: OutputOptions) -> String {
        let mut buf = Vec::new();
        write_result(&sample_result(), &options, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let out = render(OutputOptions {
            format: OutputFormat::Csv,
            compact: false,
        });
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER.join(","));
        assert!(lines.iter().all(|l| l.split(',').count() == 10));
        assert_eq!(lines[1], "1,0.000,1.000,1.000,20.0,4.0,16.0,100.0,116.0,4");
        assert_eq!(lines[2], "2,1.000,1.750,0.750,10.3,0.0,10.3,116.0,126.3,2");
    }

    #[test]
    fn test_json_field_names() {
        let out = render(OutputOptions::default());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["metadata"]["total_points"], 5);
        assert_eq!(value["metadata"]["segment_distance_km"], 1.0);
        assert_eq!(value["segments"][1]["segment"], 2);
        assert_eq!(value["segments"][1]["point_count"], 2);
        assert_eq!(value["segments"][0]["net_elevation_m"], 16.0);
        assert!(out.contains("\n  \"metadata\": {"));
    }

    #[test]
    fn test_compact_json_is_one_line() {
        let out = render(OutputOptions {
            format: OutputFormat::Json,
            compact: true,
        });
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("{\"metadata\":{\"total_distance_km\":1.7504,"));
    }

    #[test]
    fn test_summary() {
        let out = render(OutputOptions {
            format: OutputFormat::Summary,
            compact: false,
        });
        assert_eq!(
            out,
            "Total Distance: 1.75 km\n\
             Total Points: 5\n\
             Segment Distance: 1.0 km\n\
             Total Elevation Gain: 32.3 m\n\
             Total Elevation Loss: 4.0 m\n\
             Elevation Range: 98.0 - 126.3 m\n"
        );
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("summary".parse::<OutputFormat>().unwrap(), OutputFormat::Summary);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(ProfileError::UnsupportedFormat(f)) if f == "xml"
        ));
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }
}
