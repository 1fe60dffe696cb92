//! Routing-service error type.

use std::fmt;

use thiserror::Error;

use rp_core::GeoPoint;

/// Which end of a query failed to resolve.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Start => "start",
            Endpoint::End => "end",
        })
    }
}

/// Errors produced by `rp-service`.
///
/// A query that resolves but finds no path is not an error; see
/// [`SearchResult::found`](rp_search::SearchResult::found).
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("could not resolve {endpoint} point {point} to a graph vertex")]
    Unresolvable { endpoint: Endpoint, point: GeoPoint },

    #[error("invalid service configuration: {0}")]
    Config(String),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
