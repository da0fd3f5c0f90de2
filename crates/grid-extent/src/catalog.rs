//! Lookup of grid definitions by catalog code.

use crate::error::{ExtentError, ExtentResult};
use grid_common::RawGridDefinition;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Source of grid definitions, keyed by the integer codes stored in a
/// dataset's bitmap.
///
/// Catalogs are shared across the resolver's worker threads.
pub trait GridCatalog: Sync {
    /// Definition for `code`, or `None` when the catalog has no such entry.
    fn grid_definition(&self, code: i64) -> Option<RawGridDefinition>;
}

impl<F> GridCatalog for F
where
    F: Fn(i64) -> Option<RawGridDefinition> + Sync,
{
    fn grid_definition(&self, code: i64) -> Option<RawGridDefinition> {
        self(code)
    }
}

impl GridCatalog for HashMap<i64, RawGridDefinition> {
    fn grid_definition(&self, code: i64) -> Option<RawGridDefinition> {
        self.get(&code).cloned()
    }
}

/// Load a catalog file mapping codes to `{family, params}` entries.
///
/// Files ending in `.json` are read as JSON, anything else as YAML:
///
/// ```yaml
/// 1:
///   family: latLon
///   params: "361:181:90N:0E:90S:0W:1.0:1.0"
/// ```
pub fn load_catalog_file(path: impl AsRef<Path>) -> ExtentResult<HashMap<i64, RawGridDefinition>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let entries: HashMap<String, RawGridDefinition> = if is_json {
        serde_json::from_str(&contents)?
    } else {
        serde_yaml::from_str(&contents)?
    };

    let catalog = entries
        .into_iter()
        .map(|(key, def)| {
            key.trim()
                .parse::<i64>()
                .map(|code| (code, def))
                .map_err(|_| ExtentError::catalog(format!("invalid grid code '{}'", key)))
        })
        .collect::<ExtentResult<HashMap<_, _>>>()?;

    info!(
        path = %path.display(),
        definitions = catalog.len(),
        "Loaded grid catalog"
    );
    Ok(catalog)
}
