//! Polar stereographic projection.
//!
//! Grids are centred on the projection pole: the middle grid point of an
//! odd-sized grid sits exactly on the pole. Grid spacing is given at the
//! tangent latitude.

use crate::{GeoPoint, EARTH_RADIUS_M};
use grid_common::{Hemisphere, PolarStereographicGrid};

/// Polar stereographic projection parameters.
#[derive(Debug, Clone)]
pub struct PolarStereographic {
    /// Number of grid points in the i direction
    pub ni: i64,
    /// Number of grid points in the j direction
    pub nj: i64,
    pub hemisphere: Hemisphere,
    /// Tangent latitude (degrees)
    pub tan_lat: f64,
    /// Grid spacing at the tangent latitude (km)
    pub dx_km: f64,
    /// Orientation longitude (degrees east, 0 to 360)
    pub orient_elon: f64,
    /// Squared Earth radius in grid units
    re2: f64,
}

impl PolarStereographic {
    pub fn new(
        ni: i64,
        nj: i64,
        hemisphere: Hemisphere,
        tan_lat: f64,
        dx_km: f64,
        orient_elon: f64,
    ) -> Self {
        let re = (1.0 + tan_lat.to_radians().sin()) * EARTH_RADIUS_M / (dx_km * 1000.0);
        Self {
            ni,
            nj,
            hemisphere,
            tan_lat,
            dx_km,
            orient_elon,
            re2: re * re,
        }
    }

    /// Projection for a catalog grid definition, using its declared size.
    pub fn from_grid(grid: &PolarStereographicGrid) -> Self {
        Self::new(
            grid.ni as i64,
            grid.nj as i64,
            grid.hemisphere,
            grid.tan_lat,
            grid.dx_km,
            grid.orient_elon,
        )
    }

    /// Same projection with a different implied grid size.
    pub fn with_dimensions(&self, ni: i64, nj: i64) -> Self {
        Self { ni, nj, ..self.clone() }
    }

    /// Convert zero-based grid indices to latitude / east longitude.
    ///
    /// The pole itself maps to `lat = ±90, elon = 360`.
    pub fn grid_to_geo(&self, i: f64, j: f64) -> GeoPoint {
        let mut x = i + 1.0 - (self.ni as f64 + 1.0) / 2.0;
        if self.hemisphere == Hemisphere::South {
            x = -x;
        }
        let y = j + 1.0 - (self.nj as f64 + 1.0) / 2.0;

        let (mut lat, mut elon) = if x == 0.0 && y == 0.0 {
            (90.0, 360.0)
        } else {
            let r2 = x * x + y * y;
            let lat = ((self.re2 - r2) / (self.re2 + r2)).asin().to_degrees();
            let elon = y.atan2(x).to_degrees() + 90.0 - (360.0 - self.orient_elon);
            (lat, elon)
        };

        if self.hemisphere == Hemisphere::South {
            lat = -lat;
        }
        while elon < 0.0 {
            elon += 360.0;
        }

        GeoPoint { lat, elon }
    }

    /// Get grid dimensions.
    pub fn dimensions(&self) -> (i64, i64) {
        (self.ni, self.nj)
    }
}
