//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` stores latitude/longitude in degrees as `f64`.  Distances are
//! great-circle distances on a sphere of radius [`EARTH_RADIUS_KM`], reported
//! in kilometres, the unit of every edge weight in the workspace.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Parse a `"lon lat"` pair (GIS axis order, whitespace separated).
    pub fn parse_lon_lat(s: &str) -> CoreResult<GeoPoint> {
        let mut parts = s.split_whitespace();
        let (Some(lon), Some(lat), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(CoreError::Parse(format!(
                "invalid coordinate {s:?}: expected \"<lon> <lat>\""
            )));
        };
        let parse = |v: &str| {
            v.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .ok_or_else(|| CoreError::Parse(format!("invalid number {v:?} in {s:?}")))
        };
        Ok(GeoPoint::new(parse(lat)?, parse(lon)?))
    }

    /// Bit-exact key for coordinate deduplication.
    ///
    /// Two points map to the same key only if both components are identical
    /// floats.  `-0.0` and `0.0` are folded together.
    #[inline]
    pub fn bits(self) -> (u64, u64) {
        ((self.lat + 0.0).to_bits(), (self.lon + 0.0).to_bits())
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// An inclusive latitude/longitude rectangle.
///
/// Used by ingestion to discard features outside the region being served.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self { min_lat, max_lat, min_lon, max_lon }
    }

    /// Reject boxes whose minimum exceeds their maximum on either axis.
    pub fn validate(&self) -> CoreResult<()> {
        if self.min_lat > self.max_lat || self.min_lon > self.max_lon {
            return Err(CoreError::Config(format!("empty bounding box {self}")));
        }
        Ok(())
    }

    /// `true` if `p` lies inside the box, edges included.
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lat >= self.min_lat
            && p.lat <= self.max_lat
            && p.lon >= self.min_lon
            && p.lon <= self.max_lon
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.4}..{:.4}] x [{:.4}..{:.4}]",
            self.min_lat, self.max_lat, self.min_lon, self.max_lon
        )
    }
}
