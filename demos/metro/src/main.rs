//! metro: build a road graph and compare every search algorithm on one trip.
//!
//! Usage: `metro [features.csv] [config.json]`
//!
//! Without arguments the embedded Ulaanbaatar network and default filters
//! are used.  The optional JSON config holds an `ingest` section
//! (`region`, `allowed_road_types`) and a `service` section
//! (`default_max_paths`); missing fields keep their defaults.
//!
//! Results are printed to stdout as JSON.  Set `RUST_LOG=debug` to see
//! per-query resolution and timings.

mod network;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;
use serde_json::json;

use rp_graph::{IngestConfig, build_graph};
use rp_search::{Algorithm, Path as RoutePath, SearchResult};
use rp_service::{RouteQuery, RoutingService, ServiceConfig};

use network::{QUERY_END, QUERY_START, load_features};

// ── Config file ───────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DemoConfig {
    ingest:  IngestConfig,
    service: ServiceConfig,
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── JSON output ───────────────────────────────────────────────────────────────

fn path_json(path: &RoutePath) -> serde_json::Value {
    json!({
        "vertices":    path.vertex_ids().map(|id| id.0).collect::<Vec<_>>(),
        "distance_km": path.distance_km,
    })
}

fn result_json(result: &SearchResult) -> serde_json::Value {
    json!({
        "algorithm":   result.algorithm_name(),
        "found":       result.found(),
        "vertices":    result.vertex_count(),
        "distance_km": result.total_distance_km(),
        "elapsed_us":  result.elapsed.as_micros() as u64,
        "path":        result.path.as_ref().map(path_json),
    })
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1).map(PathBuf::from);
    let features_path = args.next();
    let config_path = args.next();

    // 1. Config and features.
    let config = load_config(config_path.as_deref())?;
    let features = load_features(features_path.as_deref())?;

    // 2. Build the graph.
    let t0 = Instant::now();
    let (graph, report) = build_graph(features, config.ingest)?;
    info!(
        "built in {:.3} ms: {} features processed, {} skipped, {} segments",
        t0.elapsed().as_secs_f64() * 1e3,
        report.processed,
        report.skipped,
        report.segments
    );

    // 3. Serve.
    let service = RoutingService::with_config(Arc::new(graph), config.service)?;
    let query = RouteQuery::new(QUERY_START, QUERY_END);

    let comparison = service.compare(&query)?;
    let all_paths = service.all_paths(&query, None)?;

    // Every vertex back to the query start, in one batch.
    let returns: Vec<RouteQuery> = service
        .graph()
        .vertices()
        .map(|v| RouteQuery::new(v.pos, QUERY_START))
        .collect();
    let reachable = service
        .route_batch(Algorithm::Dijkstra, &returns)
        .into_iter()
        .filter(|r| r.as_ref().is_ok_and(|resp| resp.result.found()))
        .count();

    // 4. Report.
    let output = json!({
        "graph": service.stats(),
        "ingest": report,
        "query": {
            "start":        QUERY_START,
            "end":          QUERY_END,
            "start_vertex": comparison.start.0,
            "end_vertex":   comparison.end.0,
        },
        "results": comparison.results.values().map(result_json).collect::<Vec<_>>(),
        "all_paths": {
            "algorithm": all_paths.result.algorithm_name(),
            "max_paths": all_paths.max_paths,
            "count":     all_paths.result.len(),
            "paths":     all_paths.result.paths.iter().map(path_json).collect::<Vec<_>>(),
        },
        "vertices_reaching_start": reachable,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
