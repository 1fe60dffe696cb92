//! Export vertex coordinates and directed edges for a map viewer.
//!
//! Writes two JSON files to `output/metro/`:
//!   - `vertices.json`: `[{vertex_id, lat, lon}, …]`
//!   - `edges.json`:    `[{from, to, weight_km, road_type, one_way}, …]`
//!
//! Run with: `cargo run -p metro --bin export_graph [features.csv]`

mod network;

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;

use rp_graph::{IngestConfig, build_graph};

use network::load_features;

fn main() -> Result<()> {
    env_logger::init();

    let features_path = std::env::args().nth(1).map(PathBuf::from);
    let features = load_features(features_path.as_deref())?;
    let (graph, _report) = build_graph(features, IngestConfig::default())?;

    fs::create_dir_all("output/metro")?;

    // ── vertices.json ─────────────────────────────────────────────────────────
    let vertices: Vec<serde_json::Value> = graph
        .vertices()
        .map(|v| json!({ "vertex_id": v.id.0, "lat": v.pos.lat, "lon": v.pos.lon }))
        .collect();

    fs::write("output/metro/vertices.json", serde_json::to_string_pretty(&vertices)?)?;
    println!("Wrote output/metro/vertices.json ({} vertices)", vertices.len());

    // ── edges.json ────────────────────────────────────────────────────────────
    let edges: Vec<serde_json::Value> = graph
        .vertices()
        .flat_map(|v| graph.neighbors(v.id))
        .map(|e| {
            json!({
                "from":      e.from.0,
                "to":        e.to.0,
                "weight_km": e.weight_km,
                "road_type": e.road_type,
                "one_way":   e.one_way,
            })
        })
        .collect();

    fs::write("output/metro/edges.json", serde_json::to_string_pretty(&edges)?)?;
    println!("Wrote output/metro/edges.json ({} edges)", edges.len());

    Ok(())
}
