//! Depth-first search: a single path, or every simple path up to a limit.
//!
//! Both searches walk an explicit stack of `(vertex, cursor)` frames instead
//! of recursing, where `cursor` is the index of the next outgoing edge to try.
//! The visiting order is exactly that of the recursive formulation, and a
//! long chain cannot overflow the thread stack.
//!
//! The two searches differ in how they treat `visited`:
//!
//! | Search           | On backtrack          | Result                       |
//! |------------------|-----------------------|------------------------------|
//! | `find_path`      | vertex stays visited  | first path found, O(V + E)   |
//! | `find_all_paths` | vertex is released    | every simple path, up to `k` |

use std::time::Instant;

use log::debug;

use rp_core::{EdgeId, VertexId};
use rp_graph::Graph;

use crate::result::{AllPathsResult, Algorithm, Path};
use crate::search::{Endpoints, PathSearch, check_endpoints};

/// Depth-first search (first path found in adjacency order).
#[derive(Copy, Clone, Debug, Default)]
pub struct DepthFirst;

impl PathSearch for DepthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn find_path(&self, graph: &Graph, start: VertexId, end: VertexId) -> Option<Path> {
        match check_endpoints(graph, start, end) {
            Endpoints::Missing => None,
            Endpoints::Same(v) => Some(Path::trivial(v)),
            Endpoints::Distinct => Walk::new(graph, start).first_path(end),
        }
    }
}

impl DepthFirst {
    /// Enumerate simple paths from `start` to `end` in depth-first order,
    /// stopping once `max_paths` have been collected.
    ///
    /// The number of simple paths can grow exponentially with graph size;
    /// `max_paths` is the only bound.  `max_paths == 0` returns no paths.
    pub fn find_all_paths(
        &self,
        graph:     &Graph,
        start:     VertexId,
        end:       VertexId,
        max_paths: usize,
    ) -> AllPathsResult {
        let started = Instant::now();
        let paths = if max_paths == 0 {
            Vec::new()
        } else {
            match check_endpoints(graph, start, end) {
                Endpoints::Missing => Vec::new(),
                Endpoints::Same(v) => vec![Path::trivial(v)],
                Endpoints::Distinct => Walk::new(graph, start).all_paths(end, max_paths),
            }
        };
        let elapsed = started.elapsed();

        debug!(
            "{} {start} -> {end}: {} of at most {max_paths} paths in {elapsed:?}",
            AllPathsResult::ALGORITHM_NAME,
            paths.len()
        );
        AllPathsResult { paths, elapsed }
    }
}

// ── Explicit-stack walk ───────────────────────────────────────────────────────

struct Walk<'g> {
    graph:   &'g Graph,
    start:   VertexId,
    visited: Vec<bool>,
    /// `(vertex, index of the next out-edge to try)`.
    frames:  Vec<(VertexId, usize)>,
    /// `edges[i]` leads from `frames[i]` to `frames[i + 1]`.
    edges:   Vec<EdgeId>,
}

/// What the top frame does next.
enum Step {
    Enter(EdgeId, VertexId),
    Skip,
    Backtrack,
}

impl<'g> Walk<'g> {
    fn new(graph: &'g Graph, start: VertexId) -> Self {
        let mut visited = vec![false; graph.id_bound()];
        visited[start.index()] = true;
        Self {
            graph,
            start,
            visited,
            frames: vec![(start, 0)],
            edges: Vec::new(),
        }
    }

    /// Advance the top frame's cursor by one edge.
    fn step(&mut self) -> Option<Step> {
        let graph = self.graph;
        let (v, cursor) = self.frames.last_mut()?;
        let out = graph.out_edges(*v);
        let Some(&e) = out.get(*cursor) else {
            return Some(Step::Backtrack);
        };
        *cursor += 1;

        let to = graph.edge(e).to;
        Some(if self.visited[to.index()] { Step::Skip } else { Step::Enter(e, to) })
    }

    fn enter(&mut self, e: EdgeId, to: VertexId) {
        self.visited[to.index()] = true;
        self.frames.push((to, 0));
        self.edges.push(e);
    }

    /// Pop the top frame, returning its vertex.
    fn leave(&mut self) -> Option<VertexId> {
        let (v, _) = self.frames.pop()?;
        self.edges.pop();
        Some(v)
    }

    fn current_path(&self) -> Option<Path> {
        Path::from_edges(self.graph, self.start, self.edges.clone())
    }

    fn first_path(mut self, end: VertexId) -> Option<Path> {
        while let Some(step) = self.step() {
            match step {
                Step::Enter(e, to) => {
                    self.enter(e, to);
                    if to == end {
                        return self.current_path();
                    }
                }
                Step::Skip => {}
                Step::Backtrack => {
                    self.leave();
                }
            }
        }
        None
    }

    fn all_paths(mut self, end: VertexId, max_paths: usize) -> Vec<Path> {
        let mut paths = Vec::new();
        while let Some(step) = self.step() {
            match step {
                Step::Enter(e, to) if to == end => {
                    // Record without descending: a simple path ends here.
                    self.edges.push(e);
                    paths.extend(self.current_path());
                    self.edges.pop();
                    if paths.len() >= max_paths {
                        break;
                    }
                }
                Step::Enter(e, to) => self.enter(e, to),
                Step::Skip => {}
                Step::Backtrack => {
                    if let Some(v) = self.leave() {
                        self.visited[v.index()] = false;
                    }
                }
            }
        }
        paths
    }
}
