//! Coordinate-level routing over a shared graph.
//!
//! Every query follows the same three steps:
//!
//! 1. resolve the start and end coordinates to their nearest vertices,
//! 2. run one or more searches between those vertices,
//! 3. return the fresh results together with the resolved vertex ids.
//!
//! The service holds the graph behind an `Arc` and keeps no per-query state,
//! so one instance (or clones of it) can serve queries from many threads.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;

use rp_core::{GeoPoint, VertexId};
use rp_graph::{Graph, GraphStats};
use rp_search::{AllPathsResult, Algorithm, DepthFirst, PathSearch, SearchResult};

use crate::config::ServiceConfig;
use crate::error::{Endpoint, RoutingError, RoutingResult};
use crate::nearest::nearest_vertex;

// ── Query & responses ─────────────────────────────────────────────────────────

/// A start/end coordinate pair.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteQuery {
    pub start: GeoPoint,
    pub end:   GeoPoint,
}

impl RouteQuery {
    pub fn new(start: GeoPoint, end: GeoPoint) -> Self {
        Self { start, end }
    }
}

/// One algorithm's answer to a [`RouteQuery`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResponse {
    /// Vertex the start coordinate snapped to.
    pub start:  VertexId,
    /// Vertex the end coordinate snapped to.
    pub end:    VertexId,
    pub result: SearchResult,
}

/// Every algorithm's answer to the same [`RouteQuery`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    pub start:   VertexId,
    pub end:     VertexId,
    pub results: BTreeMap<Algorithm, SearchResult>,
}

impl Comparison {
    pub fn get(&self, algorithm: Algorithm) -> Option<&SearchResult> {
        self.results.get(&algorithm)
    }

    /// The found result with the smallest total distance.
    pub fn shortest(&self) -> Option<&SearchResult> {
        self.results
            .values()
            .filter(|r| r.found())
            .min_by(|a, b| a.total_distance_km().total_cmp(&b.total_distance_km()))
    }
}

/// Simple-path enumeration for a [`RouteQuery`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllPathsResponse {
    pub start:     VertexId,
    pub end:       VertexId,
    /// The limit the enumeration ran with.
    pub max_paths: usize,
    pub result:    AllPathsResult,
}

// ── RoutingService ────────────────────────────────────────────────────────────

/// Resolves coordinates and dispatches path searches over a frozen graph.
#[derive(Clone, Debug)]
pub struct RoutingService {
    graph:  Arc<Graph>,
    config: ServiceConfig,
}

impl RoutingService {
    /// A service with [`ServiceConfig::default`].
    pub fn new(graph: Arc<Graph>) -> Self {
        Self { graph, config: ServiceConfig::default() }
    }

    pub fn with_config(graph: Arc<Graph>, config: ServiceConfig) -> RoutingResult<Self> {
        config.validate()?;
        Ok(Self { graph, config })
    }

    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The vertex closest to `point`; `None` only for an empty graph.
    pub fn nearest_vertex(&self, point: GeoPoint) -> Option<VertexId> {
        nearest_vertex(&self.graph, point)
    }

    fn resolve(&self, query: &RouteQuery) -> RoutingResult<(VertexId, VertexId)> {
        let snap = |endpoint: Endpoint, point: GeoPoint| {
            self.nearest_vertex(point)
                .ok_or(RoutingError::Unresolvable { endpoint, point })
        };
        let start = snap(Endpoint::Start, query.start)?;
        let end = snap(Endpoint::End, query.end)?;
        debug!("resolved {} -> {start}, {} -> {end}", query.start, query.end);
        Ok((start, end))
    }

    /// Route `query` with one algorithm.
    ///
    /// Fails only if an endpoint cannot be resolved.  A response whose
    /// result is not found is still `Ok`.
    pub fn route(&self, algorithm: Algorithm, query: &RouteQuery) -> RoutingResult<RouteResponse> {
        self.route_with(algorithm.searcher(), query)
    }

    /// Route `query` with a caller-supplied search strategy.
    pub fn route_with<S>(&self, search: &S, query: &RouteQuery) -> RoutingResult<RouteResponse>
    where
        S: PathSearch + ?Sized,
    {
        let (start, end) = self.resolve(query)?;
        let result = search.search(&self.graph, start, end);
        Ok(RouteResponse { start, end, result })
    }

    /// Run every algorithm on the same resolved endpoints.
    pub fn compare(&self, query: &RouteQuery) -> RoutingResult<Comparison> {
        let (start, end) = self.resolve(query)?;
        let results = Algorithm::ALL
            .into_iter()
            .map(|a| (a, a.searcher().search(&self.graph, start, end)))
            .collect();
        Ok(Comparison { start, end, results })
    }

    /// Enumerate up to `max_paths` simple paths, or
    /// [`default_max_paths`](ServiceConfig::default_max_paths) if `None`.
    pub fn all_paths(
        &self,
        query:     &RouteQuery,
        max_paths: Option<usize>,
    ) -> RoutingResult<AllPathsResponse> {
        let (start, end) = self.resolve(query)?;
        let max_paths = max_paths.unwrap_or(self.config.default_max_paths);
        let result = DepthFirst.find_all_paths(&self.graph, start, end, max_paths);
        Ok(AllPathsResponse { start, end, max_paths, result })
    }

    /// Route many independent queries with one algorithm.
    ///
    /// Results are in query order.  With the `parallel` Cargo feature the
    /// queries run on Rayon's thread pool.
    pub fn route_batch(
        &self,
        algorithm: Algorithm,
        queries:   &[RouteQuery],
    ) -> Vec<RoutingResult<RouteResponse>> {
        debug!("batch of {} {algorithm} queries", queries.len());

        #[cfg(not(feature = "parallel"))]
        {
            queries.iter().map(|q| self.route(algorithm, q)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            queries.par_iter().map(|q| self.route(algorithm, q)).collect()
        }
    }

    /// Summary counts of the served graph.
    pub fn stats(&self) -> GraphStats {
        self.graph.stats()
    }
}
