//! The feature-source model consumed by the graph builder.
//!
//! A [`Feature`] is one road record from whatever geometry source feeds the
//! build (a shapefile reader, an OSM extract, the CSV reader in
//! [`loader`](crate::loader)).  Decoding those formats is the source's
//! business; the builder only ever sees coordinates plus attributes.

use rp_core::GeoPoint;

/// Line geometry of a road feature.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Geometry {
    /// Null or unreadable geometry.
    #[default]
    Empty,
    LineString(Vec<GeoPoint>),
    MultiLineString(Vec<Vec<GeoPoint>>),
}

impl Geometry {
    /// The line parts of this geometry (one for a `LineString`).
    pub fn parts(&self) -> impl Iterator<Item = &[GeoPoint]> + '_ {
        let parts: &[Vec<GeoPoint>] = match self {
            Geometry::Empty => &[],
            Geometry::LineString(line) => std::slice::from_ref(line),
            Geometry::MultiLineString(lines) => lines,
        };
        parts.iter().map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.parts().all(<[GeoPoint]>::is_empty)
    }

    /// Length-weighted centroid in planar lon/lat space.
    ///
    /// Each segment contributes its midpoint weighted by its planar length.
    /// When every segment has zero length the plain mean of the coordinates
    /// is returned instead.  `None` for an empty geometry.
    pub fn centroid(&self) -> Option<GeoPoint> {
        let (mut sum_lat, mut sum_lon, mut total_len) = (0.0, 0.0, 0.0);
        let (mut mean_lat, mut mean_lon, mut count) = (0.0, 0.0, 0usize);

        for part in self.parts() {
            for p in part {
                mean_lat += p.lat;
                mean_lon += p.lon;
                count += 1;
            }
            for seg in part.windows(2) {
                let (a, b) = (seg[0], seg[1]);
                let len = (b.lat - a.lat).hypot(b.lon - a.lon);
                sum_lat += len * (a.lat + b.lat) * 0.5;
                sum_lon += len * (a.lon + b.lon) * 0.5;
                total_len += len;
            }
        }

        if count == 0 {
            return None;
        }
        if total_len > 0.0 {
            Some(GeoPoint::new(sum_lat / total_len, sum_lon / total_len))
        } else {
            Some(GeoPoint::new(mean_lat / count as f64, mean_lon / count as f64))
        }
    }
}

/// One road record handed to the builder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feature {
    pub geometry:      Geometry,
    /// Road classification tag (`"primary"`, `"residential"`, …).
    pub road_type:     Option<String>,
    /// Only the digitized direction is traversable.
    pub one_way:       bool,
    /// Posted speed limit, carried through from the source.  Edge weights
    /// are distances, so routing does not read it.
    pub max_speed_kmh: Option<f64>,
}

impl Feature {
    pub fn line(coords: Vec<GeoPoint>) -> Self {
        Self { geometry: Geometry::LineString(coords), ..Self::default() }
    }

    pub fn with_road_type(mut self, road_type: impl Into<String>) -> Self {
        self.road_type = Some(road_type.into());
        self
    }

    pub fn one_way(mut self, one_way: bool) -> Self {
        self.one_way = one_way;
        self
    }
}
