//! Configuration for the domain resolver.

use crate::error::{ExtentError, ExtentResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Limits applied while resolving projected grids.
///
/// Neither limit changes a result that is computed: a grid that would
/// exceed them is reported as unresolved instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Upper bound on candidate grid sizes tried by the polar stereographic
    /// corner search.
    pub max_corner_search_steps: usize,

    /// Largest number of grid points a projected grid may have before its
    /// point-by-point scan is refused.
    pub max_scan_points: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_corner_search_steps: 100_000,
            max_scan_points: 50_000_000,
        }
    }
}

impl ResolverConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("GRID_EXTENT_MAX_CORNER_SEARCH") {
            if let Ok(steps) = val.parse() {
                config.max_corner_search_steps = steps;
            }
        }

        if let Ok(val) = std::env::var("GRID_EXTENT_MAX_SCAN_POINTS") {
            if let Ok(points) = val.parse() {
                config.max_scan_points = points;
            }
        }

        config
    }

    /// Load configuration from a YAML file. Missing keys take their defaults.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ExtentResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ExtentError::config(format!("{}: {}", path.display(), e)))?;
        let config: Self = serde_yaml::from_str(&contents)
            .map_err(|e| ExtentError::config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ExtentResult<()> {
        if self.max_corner_search_steps == 0 {
            return Err(ExtentError::config("max_corner_search_steps must be > 0"));
        }

        if self.max_scan_points == 0 {
            return Err(ExtentError::config("max_scan_points must be > 0"));
        }

        Ok(())
    }
}
