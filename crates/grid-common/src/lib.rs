//! Common types shared across the grid-extent workspace.

pub mod coord;
pub mod domain;
pub mod error;
pub mod grid;

pub use coord::{decode_east_longitude, decode_latitude};
pub use domain::{Centering, GeoDomain};
pub use error::{GridParseError, GridResult};
pub use grid::{
    GridDefinition, Hemisphere, LambertConformalGrid, LatLonGrid, LatLonKind,
    PolarStereographicGrid, RawGridDefinition,
};
