//! `rp-search`: path search over an `rp-graph` road graph.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`search`]   | `PathSearch` trait                                         |
//! | [`bfs`]      | `BreadthFirst` (fewest hops)                               |
//! | [`dfs`]      | `DepthFirst` (first path, all simple paths)                |
//! | [`dijkstra`] | `Dijkstra` (shortest by kilometres)                        |
//! | [`result`]   | `Algorithm`, `Path`, `SearchResult`, `AllPathsResult`      |
//!
//! All searchers are stateless unit structs.  Per-query state lives in dense
//! `Vec`s sized by [`Graph::id_bound`](rp_graph::Graph::id_bound) and is
//! dropped when the query returns, so a shared graph can be searched from
//! many threads at once.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on result types.           |

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod result;
pub mod search;

#[cfg(test)]
mod tests;

pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use result::{AllPathsResult, Algorithm, Path, SearchResult};
pub use search::PathSearch;
