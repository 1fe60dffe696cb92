//! Service configuration.

use crate::error::{RoutingError, RoutingResult};

/// Tunables for a [`RoutingService`](crate::RoutingService).
///
/// Typically loaded from a JSON file by the application and passed to
/// [`RoutingService::with_config`](crate::RoutingService::with_config).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ServiceConfig {
    /// Path limit for `all_paths` when the caller gives none.  Default: 10.
    pub default_max_paths: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { default_max_paths: 10 }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> RoutingResult<()> {
        if self.default_max_paths == 0 {
            return Err(RoutingError::Config("default_max_paths must be at least 1".into()));
        }
        Ok(())
    }
}
