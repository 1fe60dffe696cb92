//! Unit tests for rp-search.
//!
//! Hand-built graphs pin down exact paths and tie-breaks; seeded random
//! graphs check the cross-algorithm invariants.

#[cfg(test)]
mod helpers {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use rp_core::VertexId;
    use rp_graph::{Graph, Vertex};

    use crate::Path;

    pub fn v(id: u32, lat: f64, lon: f64) -> Vertex {
        Vertex::new(VertexId(id), lat, lon)
    }

    pub fn ids(path: &Path) -> Vec<u32> {
        path.vertex_ids().map(|id| id.0).collect()
    }

    /// Vertices {1:(0,0), 2:(0,1), 3:(0,2)}; 1-2 and 2-3 two-way with
    /// weight 1, 1→3 one-way with weight 5.
    ///
    /// Fewest hops 1→3 is the direct edge; shortest by weight is via 2.
    pub fn triangle() -> Graph {
        let mut g = Graph::new();
        g.add_edge(v(1, 0.0, 0.0), v(2, 0.0, 1.0), 1.0, "primary", false);
        g.add_edge(v(2, 0.0, 1.0), v(3, 0.0, 2.0), 1.0, "primary", false);
        g.add_edge(v(1, 0.0, 0.0), v(3, 0.0, 2.0), 5.0, "motorway", true);
        g
    }

    /// One-way diamond 0→{1,2}→3 with unit weights.
    pub fn diamond() -> Graph {
        let mut g = Graph::new();
        let (a, b, c, d) = (v(0, 0.0, 0.0), v(1, 1.0, 1.0), v(2, -1.0, 1.0), v(3, 0.0, 2.0));
        g.add_edge(a, b, 1.0, "road", true);
        g.add_edge(a, c, 1.0, "road", true);
        g.add_edge(b, d, 1.0, "road", true);
        g.add_edge(c, d, 1.0, "road", true);
        g
    }

    /// `n` vertices and about `m` random edges, half of them one-way.
    pub fn random_graph(seed: u64, n: u32, m: usize) -> Graph {
        let mut rng = SmallRng::seed_from_u64(seed);
        let vertices: Vec<Vertex> = (0..n)
            .map(|i| v(i, rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect();

        let mut g = Graph::new();
        for &vx in &vertices {
            g.add_vertex(vx);
        }
        for _ in 0..m {
            let a = vertices[rng.gen_range(0..vertices.len())];
            let b = vertices[rng.gen_range(0..vertices.len())];
            if a == b {
                continue;
            }
            let weight = rng.gen_range(0.0..10.0);
            g.add_edge(a, b, weight, "residential", rng.gen_bool(0.5));
        }
        g
    }

    /// Check that `path` is a real walk from `start` to `end` in `g` and that
    /// its distance is the sum of its edges.
    pub fn assert_valid(g: &Graph, path: &Path, start: VertexId, end: VertexId) {
        assert_eq!(path.vertices.first().map(|v| v.id), Some(start));
        assert_eq!(path.vertices.last().map(|v| v.id), Some(end));
        assert_eq!(path.edges.len() + 1, path.vertices.len());

        let mut sum = 0.0;
        for (i, &e) in path.edges.iter().enumerate() {
            let edge = g.edge(e);
            assert_eq!(edge.from, path.vertices[i].id);
            assert_eq!(edge.to, path.vertices[i + 1].id);
            sum += edge.weight_km;
        }
        assert!((sum - path.distance_km).abs() < 1e-9);
    }
}

// ── Breadth-first ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod bfs {
    use rp_core::VertexId;

    use super::helpers::{ids, triangle, v};
    use crate::{Algorithm, BreadthFirst, PathSearch};

    #[test]
    fn takes_fewest_hops() {
        let r = BreadthFirst.search(&triangle(), VertexId(1), VertexId(3));
        assert!(r.found());
        assert_eq!(r.algorithm, Algorithm::Bfs);
        assert_eq!(ids(r.path.as_ref().unwrap()), vec![1, 3]);
        assert_eq!(r.vertex_count(), 2);
        assert_eq!(r.total_distance_km(), 5.0);
    }

    #[test]
    fn respects_one_way() {
        // 1→3 is one-way; back from 3 the only route is via 2.
        let path = BreadthFirst.find_path(&triangle(), VertexId(3), VertexId(1)).unwrap();
        assert_eq!(ids(&path), vec![3, 2, 1]);
        assert_eq!(path.distance_km, 2.0);
    }

    #[test]
    fn equal_hops_follow_adjacency_order() {
        let mut g = rp_graph::Graph::new();
        let (s, a, b, t) = (v(0, 0.0, 0.0), v(1, 0.0, 0.0), v(2, 0.0, 0.0), v(3, 0.0, 0.0));
        // `b` is inserted first, so it is expanded first.
        g.add_edge(s, b, 9.0, "road", true);
        g.add_edge(s, a, 1.0, "road", true);
        g.add_edge(a, t, 1.0, "road", true);
        g.add_edge(b, t, 9.0, "road", true);

        let path = BreadthFirst.find_path(&g, VertexId(0), VertexId(3)).unwrap();
        assert_eq!(ids(&path), vec![0, 2, 3]);
        assert_eq!(path.distance_km, 18.0);
    }

    #[test]
    fn parallel_edges_use_first_found() {
        let mut g = rp_graph::Graph::new();
        let (a, b) = (v(0, 0.0, 0.0), v(1, 0.0, 1.0));
        let heavy = g.add_edge(a, b, 3.0, "primary", true);
        g.add_edge(a, b, 1.0, "service", true);

        let path = BreadthFirst.find_path(&g, a.id, b.id).unwrap();
        assert_eq!(path.edges, vec![heavy]);
        assert_eq!(path.distance_km, 3.0);
    }
}

// ── Depth-first ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod dfs {
    use rp_core::VertexId;
    use rp_graph::Graph;

    use super::helpers::{diamond, ids, triangle, v};
    use crate::{AllPathsResult, Algorithm, DepthFirst, PathSearch};

    #[test]
    fn follows_first_neighbor_first() {
        let r = DepthFirst.search(&triangle(), VertexId(1), VertexId(3));
        assert_eq!(r.algorithm, Algorithm::Dfs);
        // 1's first edge leads to 2, and 2 reaches 3.
        assert_eq!(ids(r.path.as_ref().unwrap()), vec![1, 2, 3]);
        assert_eq!(r.total_distance_km(), 2.0);
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        let mut g = Graph::new();
        let (s, dead, mid, t) = (v(0, 0.0, 0.0), v(1, 0.0, 1.0), v(2, 1.0, 0.0), v(3, 1.0, 1.0));
        g.add_edge(s, dead, 1.0, "road", true);
        g.add_edge(s, mid, 1.0, "road", true);
        g.add_edge(mid, t, 1.0, "road", true);

        let path = DepthFirst.find_path(&g, VertexId(0), VertexId(3)).unwrap();
        assert_eq!(ids(&path), vec![0, 2, 3]);
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let mut g = Graph::new();
        let n = 200_000;
        for i in 0..n - 1 {
            g.add_edge(v(i, 0.0, 0.0), v(i + 1, 0.0, 0.0), 0.001, "road", true);
        }
        let path = DepthFirst.find_path(&g, VertexId(0), VertexId(n - 1)).unwrap();
        assert_eq!(path.len(), n as usize);

        let all = DepthFirst.find_all_paths(&g, VertexId(0), VertexId(n - 1), 5);
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn all_paths_in_discovery_order() {
        let r = DepthFirst.find_all_paths(&diamond(), VertexId(0), VertexId(3), 10);
        assert_eq!(r.algorithm_name(), "DFS (All Paths)");
        let found: Vec<_> = r.paths.iter().map(ids).collect();
        assert_eq!(found, vec![vec![0, 1, 3], vec![0, 2, 3]]);
    }

    #[test]
    fn all_paths_stops_at_limit() {
        let r = DepthFirst.find_all_paths(&diamond(), VertexId(0), VertexId(3), 1);
        assert_eq!(r.len(), 1);
        assert_eq!(ids(&r.paths[0]), vec![0, 1, 3]);
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let r = DepthFirst.find_all_paths(&diamond(), VertexId(0), VertexId(0), 0);
        assert!(r.is_empty());
    }

    #[test]
    fn all_paths_releases_vertices_on_backtrack() {
        // Two routes share vertex 2: 0→1→2→3 and 0→2→3.
        let mut g = Graph::new();
        let (a, b, c, d) = (v(0, 0.0, 0.0), v(1, 0.0, 0.0), v(2, 0.0, 0.0), v(3, 0.0, 0.0));
        g.add_edge(a, b, 1.0, "road", true);
        g.add_edge(b, c, 1.0, "road", true);
        g.add_edge(a, c, 1.0, "road", true);
        g.add_edge(c, d, 1.0, "road", true);

        let r = DepthFirst.find_all_paths(&g, VertexId(0), VertexId(3), 10);
        let found: Vec<_> = r.paths.iter().map(ids).collect();
        assert_eq!(found, vec![vec![0, 1, 2, 3], vec![0, 2, 3]]);
        assert!(r.paths.iter().all(|p| p.is_simple()));
    }

    #[test]
    fn all_paths_never_revisits_on_cycles() {
        // Fully two-way square: 0-1-2-3-0.
        let mut g = Graph::new();
        let vs = [v(0, 0.0, 0.0), v(1, 0.0, 1.0), v(2, 1.0, 1.0), v(3, 1.0, 0.0)];
        for i in 0..4 {
            g.add_edge(vs[i], vs[(i + 1) % 4], 1.0, "road", false);
        }
        let r = DepthFirst.find_all_paths(&g, VertexId(0), VertexId(2), 100);
        assert_eq!(r.len(), 2);
        assert!(r.paths.iter().all(|p| p.is_simple()));
        assert_eq!(AllPathsResult::ALGORITHM_NAME, r.algorithm_name());
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dijkstra {
    use rp_core::VertexId;
    use rp_graph::Graph;

    use super::helpers::{ids, triangle, v};
    use crate::{Algorithm, Dijkstra, PathSearch};

    #[test]
    fn beats_heavy_direct_edge() {
        let r = Dijkstra.search(&triangle(), VertexId(1), VertexId(3));
        assert_eq!(r.algorithm_name(), "Dijkstra");
        assert_eq!(ids(r.path.as_ref().unwrap()), vec![1, 2, 3]);
        assert_eq!(r.total_distance_km(), 2.0);
    }

    #[test]
    fn parallel_edges_use_lightest() {
        let mut g = Graph::new();
        let (a, b) = (v(0, 0.0, 0.0), v(1, 0.0, 1.0));
        g.add_edge(a, b, 3.0, "primary", true);
        let light = g.add_edge(a, b, 1.0, "service", true);

        let path = Dijkstra.find_path(&g, a.id, b.id).unwrap();
        assert_eq!(path.edges, vec![light]);
        assert_eq!(path.distance_km, 1.0);
        // Post-hoc recomputation takes the first edge instead.
        assert_eq!(g.path_distance(&[a.id, b.id]), Some(3.0));
    }

    #[test]
    fn equal_distances_prefer_lower_id() {
        let mut g = Graph::new();
        let (s, a, b, t) = (v(0, 0.0, 0.0), v(1, 0.0, 0.0), v(2, 0.0, 0.0), v(3, 0.0, 0.0));
        // Insert the higher id first; the heap still settles 1 before 2.
        g.add_edge(s, b, 1.0, "road", true);
        g.add_edge(s, a, 1.0, "road", true);
        g.add_edge(b, t, 1.0, "road", true);
        g.add_edge(a, t, 1.0, "road", true);

        let path = Dijkstra.find_path(&g, VertexId(0), VertexId(3)).unwrap();
        assert_eq!(ids(&path), vec![0, 1, 3]);
        assert_eq!(Dijkstra.algorithm(), Algorithm::Dijkstra);
    }

    #[test]
    fn zero_weight_edges() {
        let mut g = Graph::new();
        g.add_edge(v(0, 0.0, 0.0), v(1, 0.0, 0.0), 0.0, "road", false);
        g.add_edge(v(1, 0.0, 0.0), v(2, 0.0, 0.0), 0.0, "road", false);
        let path = Dijkstra.find_path(&g, VertexId(2), VertexId(0)).unwrap();
        assert_eq!(ids(&path), vec![2, 1, 0]);
        assert_eq!(path.distance_km, 0.0);
    }
}

// ── Shared endpoint rules ─────────────────────────────────────────────────────

#[cfg(test)]
mod endpoints {
    use rp_core::VertexId;
    use rp_graph::Graph;

    use super::helpers::{diamond, ids, triangle, v};
    use crate::{Algorithm, DepthFirst, PathSearch};

    #[test]
    fn self_query_is_one_vertex_path() {
        let g = triangle();
        for algorithm in Algorithm::ALL {
            let r = algorithm.searcher().search(&g, VertexId(2), VertexId(2));
            assert!(r.found(), "{algorithm}");
            assert_eq!(ids(r.path.as_ref().unwrap()), vec![2]);
            assert_eq!(r.vertex_count(), 1);
            assert_eq!(r.total_distance_km(), 0.0);
        }
        let all = DepthFirst.find_all_paths(&g, VertexId(2), VertexId(2), 3);
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn missing_vertex_is_not_found() {
        let g = triangle();
        for algorithm in Algorithm::ALL {
            let searcher = algorithm.searcher();
            assert!(!searcher.search(&g, VertexId(1), VertexId(42)).found(), "{algorithm}");
            assert!(!searcher.search(&g, VertexId(42), VertexId(1)).found(), "{algorithm}");
            // Slot 0 is inside the id range but holds no vertex.
            assert!(!searcher.search(&g, VertexId(0), VertexId(0)).found(), "{algorithm}");
        }
        assert!(DepthFirst.find_all_paths(&g, VertexId(1), VertexId(42), 5).is_empty());
    }

    #[test]
    fn disconnected_is_not_found() {
        let mut g = triangle();
        g.add_vertex(v(9, 5.0, 5.0));
        for algorithm in Algorithm::ALL {
            let r = algorithm.searcher().search(&g, VertexId(1), VertexId(9));
            assert!(!r.found());
            assert_eq!(r.vertex_count(), 0);
            assert_eq!(r.total_distance_km(), 0.0);
        }
    }

    #[test]
    fn one_way_blocks_every_algorithm() {
        let g = diamond();
        for algorithm in Algorithm::ALL {
            assert!(!algorithm.searcher().search(&g, VertexId(3), VertexId(0)).found());
        }
    }

    #[test]
    fn empty_graph() {
        let g = Graph::new();
        for algorithm in Algorithm::ALL {
            assert!(!algorithm.searcher().search(&g, VertexId(0), VertexId(1)).found());
        }
    }

    #[test]
    fn names() {
        let names: Vec<_> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["BFS", "DFS", "Dijkstra"]);
        assert_eq!(Algorithm::Dfs.to_string(), "DFS");
    }

    #[test]
    fn searchers_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn PathSearch>();
        assert_send_sync::<Graph>();
    }
}

// ── Cross-algorithm properties on random graphs ───────────────────────────────

#[cfg(test)]
mod properties {
    use rp_core::VertexId;

    use super::helpers::{assert_valid, random_graph};
    use crate::{BreadthFirst, DepthFirst, Dijkstra, PathSearch};

    const SEEDS: u64 = 25;
    const N: u32 = 8;
    const M: usize = 14;
    const EPS: f64 = 1e-9;

    fn pairs() -> impl Iterator<Item = (VertexId, VertexId)> {
        (0..N).flat_map(|s| (0..N).map(move |e| (VertexId(s), VertexId(e))))
    }

    #[test_log::test]
    fn algorithms_agree_on_reachability() {
        for seed in 0..SEEDS {
            let g = random_graph(seed, N, M);
            for (s, e) in pairs() {
                let bfs = BreadthFirst.find_path(&g, s, e);
                let dfs = DepthFirst.find_path(&g, s, e);
                let dij = Dijkstra.find_path(&g, s, e);
                assert_eq!(bfs.is_some(), dfs.is_some(), "seed {seed} {s}->{e}");
                assert_eq!(bfs.is_some(), dij.is_some(), "seed {seed} {s}->{e}");

                for path in [&bfs, &dfs, &dij].into_iter().flatten() {
                    assert_valid(&g, path, s, e);
                }
            }
        }
    }

    #[test]
    fn bfs_hops_never_exceed_dfs_hops() {
        for seed in 0..SEEDS {
            let g = random_graph(seed, N, M);
            for (s, e) in pairs() {
                if let (Some(b), Some(d)) =
                    (BreadthFirst.find_path(&g, s, e), DepthFirst.find_path(&g, s, e))
                {
                    assert!(b.len() <= d.len(), "seed {seed} {s}->{e}");
                }
            }
        }
    }

    #[test]
    fn weighted_distance_is_minimal() {
        for seed in 0..SEEDS {
            let g = random_graph(seed, N, M);
            for (s, e) in pairs() {
                let Some(best) = Dijkstra.find_path(&g, s, e) else { continue };
                for other in [BreadthFirst.find_path(&g, s, e), DepthFirst.find_path(&g, s, e)]
                    .into_iter()
                    .flatten()
                {
                    assert!(best.distance_km <= other.distance_km + EPS);
                }

                // Brute force over every simple path.
                let all = DepthFirst.find_all_paths(&g, s, e, usize::MAX);
                let min = all
                    .paths
                    .iter()
                    .map(|p| p.distance_km)
                    .fold(f64::INFINITY, f64::min);
                assert!((best.distance_km - min).abs() < EPS, "seed {seed} {s}->{e}");
            }
        }
    }

    #[test]
    fn bfs_is_hop_minimal() {
        for seed in 0..SEEDS {
            let g = random_graph(seed, N, M);
            for (s, e) in pairs() {
                let Some(b) = BreadthFirst.find_path(&g, s, e) else { continue };
                let all = DepthFirst.find_all_paths(&g, s, e, usize::MAX);
                let min_hops = all.paths.iter().map(|p| p.hops()).min();
                assert_eq!(Some(b.hops()), min_hops, "seed {seed} {s}->{e}");
            }
        }
    }

    #[test]
    fn all_paths_are_simple_bounded_and_prefix_stable() {
        for seed in 0..SEEDS {
            let g = random_graph(seed, N, M);
            for (s, e) in pairs() {
                let all = DepthFirst.find_all_paths(&g, s, e, usize::MAX);
                assert_eq!(all.is_empty(), BreadthFirst.find_path(&g, s, e).is_none());
                for p in &all.paths {
                    assert!(p.is_simple());
                    assert_valid(&g, p, s, e);
                }

                let mut previous = 0;
                for k in 0..5 {
                    let limited = DepthFirst.find_all_paths(&g, s, e, k);
                    assert!(limited.len() <= k);
                    assert!(limited.len() >= previous);
                    assert_eq!(limited.paths[..], all.paths[..limited.len()]);
                    previous = limited.len();
                }
            }
        }
    }
}
