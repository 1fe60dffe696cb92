//! The [`PathSearch`] trait shared by all strategies.
//!
//! # Pluggability
//!
//! The routing service dispatches through this trait, so a new strategy
//! (A*, bidirectional search) only needs a `find_path` implementation to get
//! timing, logging, and comparison for free.
//!
//! # Endpoint rules
//!
//! Every implementation follows the same conventions:
//!
//! - a start or end id that is not in the graph yields no path;
//! - `start == end` on an existing vertex yields the one-vertex path with
//!   distance 0, without expanding anything.

use std::time::Instant;

use log::debug;

use rp_core::VertexId;
use rp_graph::{Graph, Vertex};

use crate::bfs::BreadthFirst;
use crate::dfs::DepthFirst;
use crate::dijkstra::Dijkstra;
use crate::result::{Algorithm, Path, SearchResult};

/// A single-path search strategy over a read-only [`Graph`].
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: one instance serves concurrent
/// queries, each with its own query-local state.
pub trait PathSearch: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    /// Find a path from `start` to `end`, or `None` if there is none.
    fn find_path(&self, graph: &Graph, start: VertexId, end: VertexId) -> Option<Path>;

    /// Run [`find_path`](Self::find_path) and wrap it in a timed
    /// [`SearchResult`].
    fn search(&self, graph: &Graph, start: VertexId, end: VertexId) -> SearchResult {
        let started = Instant::now();
        let path = self.find_path(graph, start, end);
        let elapsed = started.elapsed();

        let algorithm = self.algorithm();
        match &path {
            Some(p) => debug!(
                "{algorithm} {start} -> {end}: {} vertices, {:.3} km in {elapsed:?}",
                p.len(),
                p.distance_km
            ),
            None => debug!("{algorithm} {start} -> {end}: no path ({elapsed:?})"),
        }

        SearchResult { algorithm, path, elapsed }
    }
}

impl Algorithm {
    /// The stateless searcher implementing this algorithm.
    pub fn searcher(self) -> &'static dyn PathSearch {
        match self {
            Algorithm::Bfs => &BreadthFirst,
            Algorithm::Dfs => &DepthFirst,
            Algorithm::Dijkstra => &Dijkstra,
        }
    }
}

/// Validated query endpoints.
pub(crate) enum Endpoints {
    /// Start or end is not in the graph.
    Missing,
    /// `start == end`; the answer is the one-vertex path.
    Same(Vertex),
    /// Two distinct, existing vertices.
    Distinct,
}

pub(crate) fn check_endpoints(graph: &Graph, start: VertexId, end: VertexId) -> Endpoints {
    match (graph.vertex(start), graph.vertex(end)) {
        (Some(s), Some(_)) if start == end => Endpoints::Same(*s),
        (Some(_), Some(_)) => Endpoints::Distinct,
        _ => Endpoints::Missing,
    }
}
