//! Weighted shortest-path search.
//!
//! Lazy-deletion Dijkstra: a relaxed vertex is pushed again rather than
//! decreased in place, and stale heap entries are skipped when popped because
//! their vertex is already finalized.  The search stops as soon as `end` is
//! finalized.
//!
//! Edge weights must be non-negative.  This is not checked; a negative
//! weight can yield a non-shortest path.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rp_core::{EdgeId, VertexId};
use rp_graph::Graph;

use crate::result::{Algorithm, Path};
use crate::search::{Endpoints, PathSearch, check_endpoints};

/// Dijkstra's algorithm over kilometre edge weights.
#[derive(Copy, Clone, Debug, Default)]
pub struct Dijkstra;

impl PathSearch for Dijkstra {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn find_path(&self, graph: &Graph, start: VertexId, end: VertexId) -> Option<Path> {
        match check_endpoints(graph, start, end) {
            Endpoints::Missing => None,
            Endpoints::Same(v) => Some(Path::trivial(v)),
            Endpoints::Distinct => dijkstra(graph, start, end),
        }
    }
}

// ── Heap entry ────────────────────────────────────────────────────────────────

/// Min-heap entry: smaller distance first, then lower vertex id.
#[derive(Copy, Clone, Debug)]
struct Entry {
    dist:   f64,
    vertex: VertexId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (a max-heap) pops the minimum.
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

// ── Search ────────────────────────────────────────────────────────────────────

fn dijkstra(graph: &Graph, start: VertexId, end: VertexId) -> Option<Path> {
    let n = graph.id_bound();
    // dist[v] = best known distance (km) to v.
    let mut dist      = vec![f64::INFINITY; n];
    let mut finalized = vec![false; n];
    // prev_edge[v] = edge of the current best path into v.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[start.index()] = 0.0;
    let mut heap = BinaryHeap::new();
    heap.push(Entry { dist: 0.0, vertex: start });

    while let Some(Entry { dist: d, vertex: v }) = heap.pop() {
        if finalized[v.index()] {
            continue;
        }
        finalized[v.index()] = true;

        if v == end {
            return Path::walk_back(graph, &prev_edge, start, end);
        }

        for &e in graph.out_edges(v) {
            let edge = graph.edge(e);
            let to = edge.to.index();
            if finalized[to] {
                continue;
            }
            let candidate = d + edge.weight_km;
            if candidate < dist[to] {
                dist[to] = candidate;
                prev_edge[to] = e;
                heap.push(Entry { dist: candidate, vertex: edge.to });
            }
        }
    }

    None
}
