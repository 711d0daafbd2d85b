//! # gpx-profile
//!
//! Distance-bucketed elevation profiles for GPX routes and tracks.
//!
//! A trip is read into an ordered list of [`TrackPoint`]s, measured with the
//! haversine formula, and cut into fixed-width distance segments. Each segment
//! reports its elevation gain, loss and net change. Segments that contain no
//! recorded point are measured between interpolated boundary points.
//!
//! ```rust
//! use gpx_profile::{analyze_elevation, AnalysisConfig, TrackPoint};
//!
//! let points = vec![
//!     TrackPoint::new(0.0, 0.0, 100.0),
//!     TrackPoint::new(0.0, 0.01, 150.0),
//! ];
//! let result = analyze_elevation(&points, &AnalysisConfig::new(100.0).unwrap());
//!
//! assert_eq!(result.segments.len(), 1);
//! assert_eq!(result.segments[0].elevation_gain_m, 50.0);
//! ```

pub mod analyzer;
pub mod distance;
pub mod elevation;
pub mod error;
pub mod geodesic;
pub mod gpx_reader;
pub mod interpolate;
pub mod output;
pub mod point;
pub mod segmenter;

pub use analyzer::{
    analyze_elevation, analyze_elevation_default, AnalysisConfig, AnalysisResult, Metadata,
    DEFAULT_SEGMENT_DISTANCE_KM,
};
pub use error::{ProfileError, Result};
pub use gpx_reader::{read_points, read_points_from_path};
pub use output::{write_result, OutputFormat, OutputOptions};
pub use point::TrackPoint;
pub use segmenter::Segment;
