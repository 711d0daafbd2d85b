use crate::geodesic::haversine_km;
use crate::point::TrackPoint;

/// Cumulative trip distance (km) at every point; `distances[0] == 0.0`.
pub fn calculate_cumulative_distances(points: &[TrackPoint]) -> Vec<f64> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut distances = Vec::with_capacity(points.len());
    distances.push(0.0);

    for i in 1..points.len() {
        let segment_distance = haversine_km(points[i - 1].location(), points[i].location());
        distances.push(distances[i - 1] + segment_distance);
    }

    distances
}
