/// GPX input - parse a document and flatten its routes and tracks into one path
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use gpx::{read, Gpx, Time, Waypoint};
use log::{debug, warn};

use crate::error::{ProfileError, Result};
use crate::point::TrackPoint;

/// Parse GPX from any reader. Fails with [`ProfileError::NoPoints`] when the
/// document holds no route or track points.
pub fn read_points<R: Read>(mut reader: R) -> Result<Vec<TrackPoint>> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;

    let gpx = parse_gpx(&content)?;
    let points = extract_points(&gpx);

    if points.is_empty() {
        return Err(ProfileError::NoPoints);
    }

    Ok(points)
}

pub fn read_points_from_path(path: &Path) -> Result<Vec<TrackPoint>> {
    let file = File::open(path).map_err(|source| ProfileError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    read_points(BufReader::new(file))
}

/// Route points first, then track points, each in document order.
pub fn extract_points(gpx: &Gpx) -> Vec<TrackPoint> {
    let mut points = Vec::new();

    for route in &gpx.routes {
        points.extend(route.points.iter().map(to_track_point));
    }
    let route_points = points.len();

    for track in &gpx.tracks {
        for segment in &track.segments {
            points.extend(segment.points.iter().map(to_track_point));
        }
    }

    debug!(
        "extracted {} points ({} route, {} track)",
        points.len(),
        route_points,
        points.len() - route_points
    );
    points
}

fn parse_gpx(content: &[u8]) -> Result<Gpx> {
    let error = match read(content) {
        Ok(gpx) => return Ok(gpx),
        Err(e) => e,
    };

    // Some exporters omit the mandatory version attribute on <gpx>
    match add_missing_version(&String::from_utf8_lossy(content)) {
        Some(repaired) => {
            warn!("GPX root has no version attribute, assuming 1.1");
            Ok(read(repaired.as_bytes())?)
        }
        None => Err(error.into()),
    }
}

fn add_missing_version(content: &str) -> Option<String> {
    let start = find_root_tag(content)?;
    let end = start + content[start..].find('>')?;

    if content[start..end].contains("version=") {
        return None;
    }

    let insert_at = start + "<gpx".len();
    let mut repaired = String::with_capacity(content.len() + 16);
    repaired.push_str(&content[..insert_at]);
    repaired.push_str(" version=\"1.1\"");
    repaired.push_str(&content[insert_at..]);
    Some(repaired)
}

fn find_root_tag(content: &str) -> Option<usize> {
    content.match_indices("<gpx").map(|(i, _)| i).find(|&i| {
        content[i + "<gpx".len()..]
            .chars()
            .next()
            .map_or(false, |c| c.is_whitespace() || c == '>' || c == '/')
    })
}

fn to_track_point(waypoint: &Waypoint) -> TrackPoint {
    let location = waypoint.point();
    TrackPoint {
        latitude: location.y(),
        longitude: location.x(),
        elevation: waypoint.elevation.unwrap_or(0.0),
        timestamp: waypoint.time.as_ref().and_then(to_utc),
        name: waypoint.name.clone(),
    }
}

fn to_utc(time: &Time) -> Option<DateTime<Utc>> {
    time.format().ok()?.parse::<DateTime<Utc>>().ok()
}
