//! Road network representation.
//!
//! # Data layout
//!
//! Vertices are stored densely, indexed by `VertexId`.  Directed edges live
//! in a single arena indexed by `EdgeId`; each vertex owns the ordered list of
//! its outgoing `EdgeId`s:
//!
//! ```text
//! vertices[v]   : Option<Vertex>
//! adjacency[v]  : [EdgeId, …]     (insertion order)
//! edges[e]      : Edge { from, to, weight_km, road_type, one_way }
//! ```
//!
//! Adjacency order is insertion order and is observable: breadth- and
//! depth-first search expand neighbors in exactly this order.
//!
//! The graph is append-only.  There is no removal operation.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use rp_core::{EdgeId, GeoPoint, VertexId};

/// Road-type tag given to edges whose source feature carried none.
pub const UNSPECIFIED_ROAD_TYPE: &str = "unspecified";

// ── Vertex ────────────────────────────────────────────────────────────────────

/// A graph point.  Equality and hashing use the id only.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub id:  VertexId,
    pub pos: GeoPoint,
}

impl Vertex {
    #[inline]
    pub fn new(id: VertexId, lat: f64, lon: f64) -> Self {
        Self { id, pos: GeoPoint::new(lat, lon) }
    }

    /// Haversine distance to `other` in kilometres.
    #[inline]
    pub fn distance_km(&self, other: &Vertex) -> f64 {
        self.pos.distance_km(other.pos)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.pos)
    }
}

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A directed, weighted road segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub from:      VertexId,
    pub to:        VertexId,
    /// Segment length in kilometres.  Must be non-negative.
    pub weight_km: f64,
    pub road_type: String,
    pub one_way:   bool,
}

impl Edge {
    /// The synthesized opposite direction of a two-way segment.
    fn mirrored(&self) -> Edge {
        Edge {
            from:      self.to,
            to:        self.from,
            weight_km: self.weight_km,
            road_type: self.road_type.clone(),
            one_way:   false,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({:.2} km, {}{})",
            self.from,
            self.to,
            self.weight_km,
            self.road_type,
            if self.one_way { ", one-way" } else { "" }
        )
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Directed road graph with insertion-ordered adjacency lists.
///
/// Vertex ids are expected to be dense (as assigned by
/// [`GraphBuilder`](crate::GraphBuilder)); storage grows to the largest id
/// inserted.
#[derive(Default)]
pub struct Graph {
    vertices:     Vec<Option<Vertex>>,
    adjacency:    Vec<Vec<EdgeId>>,
    edges:        Vec<Edge>,
    vertex_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of vertices and directed edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices:     Vec::with_capacity(vertices),
            adjacency:    Vec::with_capacity(vertices),
            edges:        Vec::with_capacity(edges),
            vertex_count: 0,
        }
    }

    // ── Mutation (build phase only) ───────────────────────────────────────

    /// Insert `vertex`, replacing any vertex with the same id.
    ///
    /// Also ensures an (empty) adjacency list exists for it.  Existing
    /// outgoing edges are kept.
    pub fn add_vertex(&mut self, vertex: Vertex) {
        let idx = vertex.id.index();
        if idx >= self.vertices.len() {
            self.vertices.resize(idx + 1, None);
            self.adjacency.resize_with(idx + 1, Vec::new);
        }
        if self.vertices[idx].replace(vertex).is_none() {
            self.vertex_count += 1;
        }
    }

    /// Insert a road segment from `from` to `to`.
    ///
    /// Both endpoints are upserted first.  The forward edge is appended to
    /// `from`'s adjacency list; unless `one_way` is set, a mirrored edge with
    /// the same weight and road type (and `one_way = false`) is appended to
    /// `to`'s list.  Parallel edges are not merged.
    ///
    /// Returns the `EdgeId` of the forward edge.
    pub fn add_edge(
        &mut self,
        from:      Vertex,
        to:        Vertex,
        weight_km: f64,
        road_type: impl Into<String>,
        one_way:   bool,
    ) -> EdgeId {
        self.add_vertex(from);
        self.add_vertex(to);

        let forward = Edge {
            from: from.id,
            to: to.id,
            weight_km,
            road_type: road_type.into(),
            one_way,
        };
        let reverse = (!one_way).then(|| forward.mirrored());

        let id = self.push_edge(forward);
        if let Some(reverse) = reverse {
            self.push_edge(reverse);
        }
        id
    }

    fn push_edge(&mut self, edge: Edge) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        self.adjacency[edge.from.index()].push(id);
        self.edges.push(edge);
        id
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        self.vertex(id).is_some()
    }

    /// The edge stored under `id`.
    ///
    /// # Panics
    /// Panics if `id` was not returned by this graph.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Outgoing edge ids of `id` in insertion order; empty for unknown ids.
    #[inline]
    pub fn out_edges(&self, id: VertexId) -> &[EdgeId] {
        self.adjacency.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Outgoing edges of `id` in insertion order; empty for unknown ids.
    pub fn neighbors(&self, id: VertexId) -> impl ExactSizeIterator<Item = &Edge> + '_ {
        self.out_edges(id).iter().map(|&e| self.edge(e))
    }

    /// First edge from `from` to `to` in adjacency order.
    pub fn edge_between(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.neighbors(from).find(|e| e.to == to)
    }

    /// Linear scan of `from`'s adjacency list.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.edge_between(from, to).is_some()
    }

    /// All vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter().flatten()
    }

    /// Recompute the length of a vertex sequence after the fact.
    ///
    /// Each hop uses the *first* matching edge in adjacency order, so when
    /// parallel edges of different weight connect the same ordered pair the
    /// result may differ from the distance a search actually travelled.
    /// Returns `None` if some consecutive pair is not connected.
    pub fn path_distance(&self, path: &[VertexId]) -> Option<f64> {
        path.windows(2)
            .map(|hop| self.edge_between(hop[0], hop[1]).map(|e| e.weight_km))
            .sum()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Number of vertices.
    #[inline]
    pub fn size(&self) -> usize {
        self.vertex_count
    }

    /// Number of directed edges (a two-way segment counts twice).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// One past the largest vertex id slot.  Searches size their dense
    /// per-query arrays with this.
    #[inline]
    pub fn id_bound(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex/edge counts and the number of directed edges per road type.
    pub fn stats(&self) -> GraphStats {
        let mut road_types = BTreeMap::new();
        for e in &self.edges {
            *road_types.entry(e.road_type.clone()).or_insert(0) += 1;
        }
        GraphStats {
            vertices: self.size(),
            edges: self.edge_count(),
            road_types,
        }
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph with {} vertices, {} edges", self.size(), self.edge_count())
    }
}

// ── GraphStats ────────────────────────────────────────────────────────────────

/// Summary of a built graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphStats {
    pub vertices:   usize,
    pub edges:      usize,
    /// Directed edge count per road-type tag, sorted by tag.
    pub road_types: BTreeMap<String, usize>,
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vertices: {}", self.vertices)?;
        write!(f, "edges:    {}", self.edges)?;
        for (road_type, count) in &self.road_types {
            write!(f, "\n  {road_type}: {count}")?;
        }
        Ok(())
    }
}
