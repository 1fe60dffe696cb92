//! Embedded central-Ulaanbaatar road network.
//!
//! A handful of synthetic streets in the CSV feature format, used when no
//! features file is given.  Both `metro` and `export_graph` call this.

use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use log::info;

use rp_core::GeoPoint;
use rp_graph::{Feature, load_features_csv, load_features_reader};

// Grid of two east-west avenues joined by north-south streets, with a
// one-way service lane, a reverse-digitized one-way, a multi-part
// secondary road, a footway the default filter drops, and one unreadable
// row.
const FEATURES_CSV: &str = "\
road_type,oneway,maxspeed,geometry
primary,no,60,106.900 47.910;106.910 47.910;106.920 47.910
primary,no,60,106.900 47.920;106.910 47.920;106.920 47.920
residential,,40,106.900 47.910;106.900 47.920
residential,,40,106.910 47.910;106.910 47.920
service,yes,20,106.920 47.910;106.920 47.920
tertiary,T,,106.930 47.915;106.920 47.920
secondary,B,50,106.920 47.910;106.930 47.915|106.930 47.915;106.940 47.915
footway,no,,106.905 47.915;106.915 47.915
residential,no,,106.950 47.930;garbage
";

/// Query used when none is given: from the south-west corner to the end of
/// the secondary road.
pub const QUERY_START: GeoPoint = GeoPoint { lat: 47.9101, lon: 106.9001 };
pub const QUERY_END:   GeoPoint = GeoPoint { lat: 47.9152, lon: 106.9398 };

/// Read features from `path`, or the embedded network if `None`.
pub fn load_features(path: Option<&Path>) -> Result<Vec<Feature>> {
    match path {
        Some(path) => Ok(load_features_csv(path)?),
        None => {
            info!("no features file given, using the embedded network");
            Ok(load_features_reader(Cursor::new(FEATURES_CSV))?)
        }
    }
}
