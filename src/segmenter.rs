/// Fixed-distance segmentation of a path
///
/// The trip is swept forward in windows of `segment_distance_km`. Each window
/// `[start_km, end_km]` is inclusive on both ends, so a point sitting exactly on
/// a boundary counts towards both neighbouring segments. Windows without any
/// raw point are measured between interpolated boundary points instead.
use log::debug;
use serde::Serialize;

use crate::elevation::point_gain_loss;
use crate::interpolate::interpolate_segment_boundaries;
use crate::point::TrackPoint;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Segment {
    #[serde(rename = "segment")]
    pub number: usize,
    pub start_km: f64,
    pub end_km: f64,
    pub distance_km: f64,
    pub elevation_gain_m: f64,
    pub elevation_loss_m: f64,
    pub net_elevation_m: f64,
    pub start_elevation_m: f64,
    pub end_elevation_m: f64,
    pub point_count: usize,
}

/// Split the path into segments.
///
/// Segment numbers are assigned per window before empty windows are dropped,
/// so the emitted numbering can skip values.
pub fn divide_into_segments(
    points: &[TrackPoint],
    distances: &[f64],
    segment_distance_km: f64,
) -> Vec<Segment> {
    if points.len() < 2 || distances.len() < 2 {
        return Vec::new();
    }

    let total_distance = distances[distances.len() - 1];
    let mut segments = Vec::new();
    let mut segment_number = 1;
    let mut current_start = 0.0;
    let mut current_end = segment_distance_km;

    while current_start < total_distance {
        let segment = calculate_segment(
            points,
            distances,
            current_start,
            current_end,
            segment_number,
        );

        if segment.point_count > 0 {
            segments.push(segment);
        } else {
            debug!(
                "dropping segment {} ({:.3}-{:.3} km): no points",
                segment_number, current_start, current_end
            );
        }

        segment_number += 1;
        current_start = current_end;
        current_end += segment_distance_km;
    }

    segments
}

fn calculate_segment(
    points: &[TrackPoint],
    distances: &[f64],
    start_km: f64,
    end_km: f64,
    number: usize,
) -> Segment {
    let total_distance = distances[distances.len() - 1];
    let actual_end_km = end_km.min(total_distance);

    let mut segment_points: Vec<TrackPoint> = points
        .iter()
        .zip(distances)
        .filter(|&(_, &d)| d >= start_km && d <= end_km)
        .map(|(p, _)| p.clone())
        .collect();

    if segment_points.is_empty() {
        if let Some(pair) = interpolate_segment_boundaries(points, distances, start_km, end_km) {
            segment_points = vec![pair.start, pair.end];
        }
    }

    let mut segment = Segment {
        number,
        start_km,
        end_km: actual_end_km,
        distance_km: actual_end_km - start_km,
        point_count: segment_points.len(),
        ..Default::default()
    };

    // too sparse for an elevation delta
    if segment_points.len() < 2 {
        return segment;
    }

    let change = point_gain_loss(&segment_points);
    segment.elevation_gain_m = change.gain_m;
    segment.elevation_loss_m = change.loss_m;
    segment.net_elevation_m = change.net_m();
    segment.start_elevation_m = segment_points[0].elevation;
    segment.end_elevation_m = segment_points[segment_points.len() - 1].elevation;

    segment
}
