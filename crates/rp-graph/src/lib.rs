//! `rp-graph`: road network graph, builder, and feature ingestion.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `Graph`, `Vertex`, `Edge`, `GraphStats`                     |
//! | [`feature`] | `Feature`, `Geometry` (the consumed feature-source model)   |
//! | [`builder`] | `GraphBuilder`, `IngestConfig`, `IngestReport`, `build_graph` |
//! | [`loader`]  | `load_features_csv` / `load_features_reader`                |
//! | [`error`]   | `GraphError`, `GraphResult<T>`, `SkipReason`                |
//!
//! # Lifecycle
//!
//! A [`Graph`] is filled once by a single writer (normally a
//! [`GraphBuilder`]) and is read-only afterwards.  It holds no interior
//! mutability, so a finished graph can be shared across threads behind an
//! `Arc` and queried concurrently.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on config and stats types. |

pub mod builder;
pub mod error;
pub mod feature;
pub mod graph;
pub mod loader;


pub use builder::{DEFAULT_ROAD_TYPES, GraphBuilder, IngestConfig, IngestReport, build_graph};
pub use error::{GraphError, GraphResult, SkipReason};
pub use feature::{Feature, Geometry};
pub use graph::{Edge, Graph, GraphStats, UNSPECIFIED_ROAD_TYPE, Vertex};
pub use loader::{load_features_csv, load_features_reader};
