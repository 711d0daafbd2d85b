/// Elevation gain/loss aggregation over consecutive points
use crate::point::TrackPoint;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElevationChange {
    pub gain_m: f64,
    pub loss_m: f64,
}

impl ElevationChange {
    pub fn net_m(&self) -> f64 {
        self.gain_m - self.loss_m
    }
}

/// Sum of positive and (magnitude of) negative consecutive deltas.
pub fn calculate_gain_loss<I>(elevations: I) -> ElevationChange
where
    I: IntoIterator<Item = f64>,
{
    let mut change = ElevationChange::default();
    let mut previous: Option<f64> = None;

    for elevation in elevations {
        if let Some(prev) = previous {
            let delta = elevation - prev;
            if delta > 0.0 {
                change.gain_m += delta;
            } else {
                change.loss_m += -delta;
            }
        }
        previous = Some(elevation);
    }

    change
}

pub fn point_gain_loss(points: &[TrackPoint]) -> ElevationChange {
    calculate_gain_loss(points.iter().map(|p| p.elevation))
}

/// (min, max) elevation over all points, `None` for an empty slice.
pub fn elevation_range(points: &[TrackPoint]) -> Option<(f64, f64)> {
    let first = points.first()?.elevation;
    Some(points.iter().skip(1).fold((first, first), |(lo, hi), p| {
        (lo.min(p.elevation), hi.max(p.elevation))
    }))
}
