//! Inverse map projections from grid indices to geographic coordinates.
//!
//! Implements the projections from scratch without external dependencies.
//! All transforms share a spherical Earth of radius [`EARTH_RADIUS_M`].

pub mod lambert;
pub mod polar;

pub use lambert::LambertConformal;
pub use polar::PolarStereographic;

/// Earth radius used by the grid catalog (meters).
pub const EARTH_RADIUS_M: f64 = 6_371_200.0;

/// A geographic point: latitude and east longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub elon: f64,
}
