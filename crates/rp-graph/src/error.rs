//! Graph-subsystem error types.

use thiserror::Error;

use rp_core::CoreError;

/// Errors produced by `rp-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Why a single feature was left out of the graph.
///
/// Skips are isolated per feature: they are counted in the
/// [`IngestReport`](crate::IngestReport) and never abort a build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("feature has no geometry")]
    EmptyGeometry,

    #[error("feature centroid lies outside the configured region")]
    OutsideRegion,

    #[error("road type {0:?} is not in the allow-list")]
    RoadTypeNotAllowed(String),

    #[error("no line part has at least two coordinates")]
    Degenerate,
}
