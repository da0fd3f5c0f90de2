//! Geographic extents for gridded datasets.
//!
//! A dataset records which catalog grid definitions it uses as a compact
//! bitmap string. This crate decodes that bitmap, looks every code up in a
//! grid catalog, computes the bounding box of each grid (inverting the map
//! projection where needed) and merges the boxes into one dataset extent.
//!
//! # Architecture
//!
//! ```text
//! ExtentAggregator::aggregate_extent(bitmap, catalog)
//!      │
//!      ├─► bitmap::decode            → grid codes
//!      │
//!      ├─► GridCatalog::grid_definition(code)
//!      │
//!      ├─► DomainResolver::resolve   → GeoDomain per grid
//!      │         │
//!      │         ├─► lat-lon:  closed form
//!      │         └─► Lambert / polar: scan every point via `projection`
//!      │
//!      └─► component-wise min/max    → dataset GeoDomain
//! ```
//!
//! # Example
//!
//! ```
//! use grid_extent::{aggregate_extent, RawGridDefinition};
//! use std::collections::HashMap;
//!
//! let catalog = HashMap::from([(
//!     1_i64,
//!     RawGridDefinition::new("latLon", "61:41:20N:230E:60N:290E:1.0:1.0"),
//! )]);
//! let extent = aggregate_extent("!1", &catalog).unwrap().unwrap();
//! assert_eq!(extent.west, -130.0);
//! ```

pub mod aggregate;
pub mod bitmap;
pub mod catalog;
pub mod config;
pub mod coverage;
pub mod error;
pub mod resolver;

// Re-export commonly used types at crate root
pub use aggregate::{aggregate_extent, ExtentAggregator};
pub use bitmap::{decode, decode_many, BitmapError};
pub use catalog::{load_catalog_file, GridCatalog};
pub use config::ResolverConfig;
pub use coverage::{describe_grid, format_latitude, format_longitude, SpatialCoverage};
pub use error::{ExtentError, ExtentResult};
pub use resolver::{resolve, DomainResolver};

pub use grid_common::{Centering, GeoDomain, GridDefinition, RawGridDefinition};
