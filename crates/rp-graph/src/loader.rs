//! CSV feature reader.
//!
//! # CSV format
//!
//! One row per road feature.  Coordinates use GIS axis order (`lon lat`).
//!
//! ```csv
//! road_type,oneway,maxspeed,geometry
//! primary,no,60,106.900 47.910;106.910 47.920;106.915 47.925
//! residential,yes,,106.910 47.920;106.920 47.920
//! ,,,106.920 47.920;106.930 47.915|106.930 47.915;106.940 47.915
//! ```
//!
//! | Column      | Meaning                                                   |
//! |-------------|-----------------------------------------------------------|
//! | `road_type` | road class tag; empty → absent                            |
//! | `oneway`    | see below; empty → two-way                                |
//! | `maxspeed`  | km/h; empty or non-numeric → absent                       |
//! | `geometry`  | `;`-separated coordinates, a pipe between line parts      |
//!
//! **`oneway`** field:
//!
//! | Value                       | Meaning                                  |
//! |-----------------------------|------------------------------------------|
//! | `yes`, `true`, `1`, `F`     | one-way in digitized direction           |
//! | `T`                         | one-way against digitized direction      |
//! | anything else (`no`, `B`…)  | two-way                                  |
//!
//! A row whose geometry cannot be parsed is returned as a feature with
//! [`Geometry::Empty`]; the builder then skips and counts it.  Only CSV-level
//! failures (unreadable file, wrong column count) abort loading.

use std::io::Read;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use rp_core::{CoreResult, GeoPoint};

use crate::error::GraphResult;
use crate::feature::{Feature, Geometry};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FeatureRecord {
    road_type: Option<String>,
    oneway:    Option<String>,
    maxspeed:  Option<String>,
    geometry:  Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load road features from a CSV file.
pub fn load_features_csv(path: &Path) -> GraphResult<Vec<Feature>> {
    let file = std::fs::File::open(path)?;
    let features = load_features_reader(file)?;
    info!("read {} features from {}", features.len(), path.display());
    Ok(features)
}

/// Like [`load_features_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded networks.
pub fn load_features_reader<R: Read>(reader: R) -> GraphResult<Vec<Feature>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut features = Vec::new();

    for (row, result) in csv_reader.deserialize::<FeatureRecord>().enumerate() {
        let record = result?;
        features.push(to_feature(row, record));
    }

    Ok(features)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn to_feature(row: usize, record: FeatureRecord) -> Feature {
    let (one_way, reversed) = parse_oneway(record.oneway.as_deref().unwrap_or(""));

    let mut geometry = match record.geometry.as_deref().map(parse_geometry) {
        None => Geometry::Empty,
        Some(Ok(g)) => g,
        Some(Err(e)) => {
            warn!("row {row}: unreadable geometry ({e})");
            Geometry::Empty
        }
    };
    if reversed {
        reverse(&mut geometry);
    }

    Feature {
        geometry,
        road_type: record.road_type.filter(|s| !s.trim().is_empty()),
        one_way,
        max_speed_kmh: record
            .maxspeed
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v > 0.0),
    }
}

/// Returns `(one_way, reversed)`.
fn parse_oneway(value: &str) -> (bool, bool) {
    match value.trim() {
        "T" => (true, true),
        "F" | "1" => (true, false),
        v if v.eq_ignore_ascii_case("yes") || v.eq_ignore_ascii_case("true") => (true, false),
        _ => (false, false),
    }
}

fn parse_geometry(s: &str) -> CoreResult<Geometry> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Geometry::Empty);
    }

    let mut parts = s
        .split('|')
        .map(|part| {
            part.split(';')
                .filter(|c| !c.trim().is_empty())
                .map(GeoPoint::parse_lon_lat)
                .collect::<CoreResult<Vec<_>>>()
        })
        .collect::<CoreResult<Vec<_>>>()?;

    Ok(if parts.len() == 1 {
        Geometry::LineString(parts.remove(0))
    } else {
        Geometry::MultiLineString(parts)
    })
}

fn reverse(geometry: &mut Geometry) {
    match geometry {
        Geometry::Empty => {}
        Geometry::LineString(line) => line.reverse(),
        Geometry::MultiLineString(lines) => {
            lines.reverse();
            lines.iter_mut().for_each(|line| line.reverse());
        }
    }
}
