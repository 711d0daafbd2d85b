/// Boundary interpolation - find the point sitting exactly at a cumulative distance
use crate::point::TrackPoint;

/// Start and end points of a segment that contains no raw points.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPair {
    pub start: TrackPoint,
    pub end: TrackPoint,
}

/// Point at `target_km` along the path.
///
/// Uses the first consecutive pair with `distances[i-1] <= target_km <= distances[i]`.
/// An exact hit returns the raw point unchanged. Anything in between is a linear
/// blend of latitude, longitude and elevation without timestamp or name.
/// Returns `None` when no pair brackets the target.
pub fn point_at_distance(
    points: &[TrackPoint],
    distances: &[f64],
    target_km: f64,
) -> Option<TrackPoint> {
    let n = points.len().min(distances.len());

    for i in 1..n {
        let (d0, d1) = (distances[i - 1], distances[i]);
        if d0 <= target_km && target_km <= d1 {
            if d0 == target_km {
                return Some(points[i - 1].clone());
            }
            if d1 == target_km {
                return Some(points[i].clone());
            }

            let ratio = (target_km - d0) / (d1 - d0);
            let (a, b) = (&points[i - 1], &points[i]);
            return Some(TrackPoint::new(
                lerp(a.latitude, b.latitude, ratio),
                lerp(a.longitude, b.longitude, ratio),
                lerp(a.elevation, b.elevation, ratio),
            ));
        }
    }

    None
}

/// Both boundaries of `[start_km, end_km]`, or `None` if either lies outside the path.
pub fn interpolate_segment_boundaries(
    points: &[TrackPoint],
    distances: &[f64],
    start_km: f64,
    end_km: f64,
) -> Option<BoundaryPair> {
    if points.len() < 2 {
        return None;
    }

    let start = point_at_distance(points, distances, start_km)?;
    let end = point_at_distance(points, distances, end_km)?;
    Some(BoundaryPair { start, end })
}

fn lerp(from: f64, to: f64, ratio: f64) -> f64 {
    from + ratio * (to - from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    fn sample() -> (Vec<TrackPoint>, Vec<f64>) {
        let mut first = TrackPoint::new(0.0, 0.0, 100.0);
        first.name = Some("start".to_string());
        first.timestamp = Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap());
        let points = vec![
            first,
            TrackPoint::new(0.0, 1.0, 200.0),
            TrackPoint::new(0.0, 2.0, 150.0),
        ];
        (points, vec![0.0, 10.0, 20.0])
    }

    #[test]
    fn test_exact_hit_returns_raw_point() {
        let (points, distances) = sample();
        let p = point_at_distance(&points, &distances, 0.0).unwrap();
        assert_eq!(p, points[0]);
        assert_eq!(p.name.as_deref(), Some("start"));
        assert!(p.timestamp.is_some());

        let p = point_at_distance(&points, &distances, 10.0).unwrap();
        assert_eq!(p, points[1]);
    }

    #[test]
    fn test_linear_interpolation() {
        let (points, distances) = sample();
        let p = point_at_distance(&points, &distances, 15.0).unwrap();
        assert_relative_eq!(p.longitude, 1.5);
        assert_relative_eq!(p.elevation, 175.0);
        assert_eq!(p.latitude, 0.0);
        assert!(p.timestamp.is_none());
        assert!(p.name.is_none());
    }

    #[test]
    fn test_outside_path_is_none() {
        let (points, distances) = sample();
        assert!(point_at_distance(&points, &distances, 20.5).is_none());
        assert!(point_at_distance(&points, &distances, -1.0).is_none());
    }

    #[test]
    fn test_boundary_pair() {
        let (points, distances) = sample();
        let pair = interpolate_segment_boundaries(&points, &distances, 5.0, 12.0).unwrap();
        assert_relative_eq!(pair.start.elevation, 150.0);
        assert_relative_eq!(pair.end.elevation, 190.0);

        // end beyond the last point
        assert!(interpolate_segment_boundaries(&points, &distances, 15.0, 25.0).is_none());
        // single point cannot bracket anything
        assert!(interpolate_segment_boundaries(&points[..1], &distances[..1], 0.0, 0.0).is_none());
    }
}
