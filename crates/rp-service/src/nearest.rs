//! Snap an arbitrary coordinate onto the graph.

use rp_core::{GeoPoint, VertexId};
use rp_graph::Graph;

/// The vertex closest to `point` by haversine distance.
///
/// A full linear scan in ascending id order, keeping the strict minimum, so
/// equidistant vertices resolve to the lowest id.  `None` only for an empty
/// graph.  There is no distance cutoff.
pub fn nearest_vertex(graph: &Graph, point: GeoPoint) -> Option<VertexId> {
    let mut best: Option<(VertexId, f64)> = None;
    for v in graph.vertices() {
        let d = point.distance_km(v.pos);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((v.id, d));
        }
    }
    best.map(|(id, _)| id)
}
