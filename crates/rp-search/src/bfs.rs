//! Unweighted breadth-first search.
//!
//! Finds a path with the fewest edges.  Neighbors are enqueued in adjacency
//! order and marked visited at enqueue time, so among equally short paths the
//! one found first in that order wins.  Edge weights are ignored for the
//! search itself; the reported distance sums the edges actually taken.

use std::collections::VecDeque;

use rp_core::{EdgeId, VertexId};
use rp_graph::Graph;

use crate::result::{Algorithm, Path};
use crate::search::{Endpoints, PathSearch, check_endpoints};

/// Breadth-first search (fewest hops).
#[derive(Copy, Clone, Debug, Default)]
pub struct BreadthFirst;

impl PathSearch for BreadthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn find_path(&self, graph: &Graph, start: VertexId, end: VertexId) -> Option<Path> {
        match check_endpoints(graph, start, end) {
            Endpoints::Missing => None,
            Endpoints::Same(v) => Some(Path::trivial(v)),
            Endpoints::Distinct => bfs(graph, start, end),
        }
    }
}

fn bfs(graph: &Graph, start: VertexId, end: VertexId) -> Option<Path> {
    let n = graph.id_bound();
    let mut visited   = vec![false; n];
    let mut prev_edge = vec![EdgeId::INVALID; n];
    let mut queue     = VecDeque::new();

    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        if v == end {
            return Path::walk_back(graph, &prev_edge, start, end);
        }
        for &e in graph.out_edges(v) {
            let to = graph.edge(e).to;
            if !visited[to.index()] {
                visited[to.index()] = true;
                prev_edge[to.index()] = e;
                queue.push_back(to);
            }
        }
    }

    None
}
