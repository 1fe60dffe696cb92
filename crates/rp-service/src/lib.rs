//! `rp-service`: coordinate-level routing over a shared road graph.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`service`] | `RoutingService`, `RouteQuery`, response types              |
//! | [`nearest`] | `nearest_vertex` (linear haversine scan)                    |
//! | [`config`]  | `ServiceConfig`                                             |
//! | [`error`]   | `RoutingError`, `RoutingResult<T>`, `Endpoint`              |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Runs `route_batch` on Rayon's thread pool.                |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod config;
pub mod error;
pub mod nearest;
pub mod service;


pub use config::ServiceConfig;
pub use error::{Endpoint, RoutingError, RoutingResult};
pub use nearest::nearest_vertex;
pub use service::{AllPathsResponse, Comparison, RouteQuery, RouteResponse, RoutingService};
