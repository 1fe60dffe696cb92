//! Search output types.
//!
//! Every query produces a fresh value; nothing here is cached or shared
//! between queries.

use std::fmt;
use std::time::Duration;

use rp_core::{EdgeId, VertexId};
use rp_graph::{Graph, Vertex};

// ── Algorithm ─────────────────────────────────────────────────────────────────

/// The three search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Unweighted breadth-first search (fewest hops).
    Bfs,
    /// Depth-first search (first path found).
    Dfs,
    /// Weighted shortest path by total kilometres.
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra];

    /// Display name reported in results.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered walk from a start vertex to an end vertex, inclusive.
///
/// `edges[i]` is the directed edge taken from `vertices[i]` to
/// `vertices[i + 1]`, so `edges.len() == vertices.len() - 1`.
/// `distance_km` is the sum of those edges' weights.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub vertices:    Vec<Vertex>,
    pub edges:       Vec<EdgeId>,
    pub distance_km: f64,
}

impl Path {
    /// The one-vertex path of a query whose start and end coincide.
    pub(crate) fn trivial(vertex: Vertex) -> Self {
        Self { vertices: vec![vertex], edges: Vec::new(), distance_km: 0.0 }
    }

    /// Assemble a path from `start` and the edges walked from it.
    ///
    /// `None` if some vertex is missing from `graph`.
    pub(crate) fn from_edges(graph: &Graph, start: VertexId, edges: Vec<EdgeId>) -> Option<Self> {
        let mut vertices = Vec::with_capacity(edges.len() + 1);
        vertices.push(*graph.vertex(start)?);

        let mut distance_km = 0.0;
        for &e in &edges {
            let edge = graph.edge(e);
            vertices.push(*graph.vertex(edge.to)?);
            distance_km += edge.weight_km;
        }

        Some(Self { vertices, edges, distance_km })
    }

    /// Rebuild the path ending at `end` by following `prev_edge` back to
    /// `start`.
    ///
    /// `prev_edge[v]` is the edge that first reached `v`, or
    /// [`EdgeId::INVALID`].  A vertex without a parent before `start` is
    /// reached means the search never connected the two, and `None` is
    /// returned.
    pub(crate) fn walk_back(
        graph:     &Graph,
        prev_edge: &[EdgeId],
        start:     VertexId,
        end:       VertexId,
    ) -> Option<Self> {
        let mut edges = Vec::new();
        let mut cur = end;
        while cur != start {
            let e = prev_edge[cur.index()];
            if e == EdgeId::INVALID {
                return None;
            }
            edges.push(e);
            cur = graph.edge(e).from;
        }
        edges.reverse();
        Self::from_edges(graph, start, edges)
    }

    /// Number of vertices on the path (at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Never true for a path produced by a search.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges traversed.
    #[inline]
    pub fn hops(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(|v| v.id)
    }

    /// `true` if no vertex appears twice.
    pub fn is_simple(&self) -> bool {
        let mut ids: Vec<VertexId> = self.vertex_ids().collect();
        ids.sort_unstable();
        ids.windows(2).all(|w| w[0] != w[1])
    }
}

// ── SearchResult ──────────────────────────────────────────────────────────────

/// Outcome of one single-path query.
///
/// A query that finds no path is a normal result with `path == None`, not an
/// error.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub path:      Option<Path>,
    /// Wall-clock time spent inside the search.
    pub elapsed:   Duration,
}

impl SearchResult {
    #[inline]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Vertices on the path; 0 when nothing was found.
    pub fn vertex_count(&self) -> usize {
        self.path.as_ref().map_or(0, Path::len)
    }

    /// Total path length in kilometres; 0 when nothing was found.
    pub fn total_distance_km(&self) -> f64 {
        self.path.as_ref().map_or(0.0, |p| p.distance_km)
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }
}

// ── AllPathsResult ────────────────────────────────────────────────────────────

/// Outcome of a simple-path enumeration.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllPathsResult {
    /// Paths in discovery order.
    pub paths:   Vec<Path>,
    pub elapsed: Duration,
}

impl AllPathsResult {
    pub const ALGORITHM_NAME: &'static str = "DFS (All Paths)";

    pub fn algorithm_name(&self) -> &'static str {
        Self::ALGORITHM_NAME
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
