/// Elevation profile analysis - cumulative distance, segmentation and trip totals
use log::debug;
use serde::Serialize;

use crate::distance::calculate_cumulative_distances;
use crate::elevation::{elevation_range, point_gain_loss};
use crate::error::{ProfileError, Result};
use crate::point::TrackPoint;
use crate::segmenter::{divide_into_segments, Segment};

pub const DEFAULT_SEGMENT_DISTANCE_KM: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    segment_distance_km: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            segment_distance_km: DEFAULT_SEGMENT_DISTANCE_KM,
        }
    }
}

impl AnalysisConfig {
    /// Rejects zero, negative and non-finite segment widths.
    pub fn new(segment_distance_km: f64) -> Result<Self> {
        if !segment_distance_km.is_finite() || segment_distance_km <= 0.0 {
            return Err(ProfileError::InvalidSegmentDistance(segment_distance_km));
        }
        Ok(AnalysisConfig { segment_distance_km })
    }

    pub fn segment_distance_km(&self) -> f64 {
        self.segment_distance_km
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    pub total_distance_km: f64,
    pub total_points: usize,
    pub segment_distance_km: f64,
    pub total_elevation_gain_m: f64,
    pub total_elevation_loss_m: f64,
    pub min_elevation_m: f64,
    pub max_elevation_m: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub metadata: Metadata,
    pub segments: Vec<Segment>,
}

pub fn analyze_elevation_default(points: &[TrackPoint]) -> AnalysisResult {
    analyze_elevation(points, &AnalysisConfig::default())
}

/// Build the full profile for an ordered point sequence.
///
/// Fewer than two points is not an error: the result has no segments and only
/// the segment width filled in.
pub fn analyze_elevation(points: &[TrackPoint], config: &AnalysisConfig) -> AnalysisResult {
    let segment_distance_km = config.segment_distance_km();

    if points.len() < 2 {
        debug!("{} point(s): not enough to build a profile", points.len());
        return AnalysisResult {
            metadata: Metadata {
                segment_distance_km,
                ..Default::default()
            },
            segments: Vec::new(),
        };
    }

    let distances = calculate_cumulative_distances(points);
    let total_distance_km = distances[distances.len() - 1];
    debug!(
        "{} points over {:.3} km, {:.3} km segments",
        points.len(),
        total_distance_km,
        segment_distance_km
    );

    let metadata = calculate_metadata(points, total_distance_km, segment_distance_km);
    let segments = divide_into_segments(points, &distances, segment_distance_km);
    debug!("built {} segments", segments.len());

    AnalysisResult { metadata, segments }
}

fn calculate_metadata(
    points: &[TrackPoint],
    total_distance_km: f64,
    segment_distance_km: f64,
) -> Metadata {
    let change = point_gain_loss(points);
    let (min_elevation_m, max_elevation_m) = elevation_range(points).unwrap_or((0.0, 0.0));

    Metadata {
        total_distance_km,
        total_points: points.len(),
        segment_distance_km,
        total_elevation_gain_m: change.gain_m,
        total_elevation_loss_m: change.loss_m,
        min_elevation_m,
        max_elevation_m,
    }
}
