//! Lambert Conformal Conic projection.
//!
//! Used by many regional NWP grids (NAM, RUC, the AWIPS CONUS grids).
//! It maps a cone tangent to the Earth at a single latitude onto a flat
//! plane; grid indices are measured from the corner point farthest from the
//! pole of projection (lower-left for northern grids, upper-left for
//! southern ones).
//!
//! The projection parameters include:
//! - Tangent latitude: where the cone touches the sphere (sign selects the hemisphere)
//! - Orientation longitude: the meridian parallel to the grid's j axis
//! - Grid spacing: dx in kilometres at the tangent latitude
//! - Corner point: latitude/longitude of grid point (0, 0)

use crate::{GeoPoint, EARTH_RADIUS_M};
use grid_common::LambertConformalGrid;
use std::f64::consts::PI;

/// Lambert Conformal Conic projection parameters.
///
/// The constructor precomputes the cone constant and the grid position of
/// the projection pole, so [`LambertConformal::grid_to_geo`] is cheap enough
/// to call for every point of a grid.
#[derive(Debug, Clone)]
pub struct LambertConformal {
    /// Latitude of grid point (0, 0) in degrees
    pub left_lat: f64,
    /// East longitude of grid point (0, 0) in degrees
    pub left_elon: f64,
    /// Tangent latitude in degrees
    pub tan_lat: f64,
    /// Grid spacing at the tangent latitude (km)
    pub dx_km: f64,
    /// Orientation longitude in degrees east
    pub orient_elon: f64,
    /// +1 for northern grids, -1 for southern
    hemi: f64,
    /// Cone constant
    an: f64,
    /// Earth radius in grid units
    re: f64,
    /// Grid position of the projection pole (1-based)
    pole_i: f64,
    pole_j: f64,
}

impl LambertConformal {
    /// Create a new projection.
    ///
    /// # Arguments
    /// * `left_lat` - Latitude of grid point (0, 0) (degrees)
    /// * `left_elon` - East longitude of grid point (0, 0) (degrees)
    /// * `tan_lat` - Tangent latitude (degrees, negative for southern grids)
    /// * `dx_km` - Grid spacing at the tangent latitude (km)
    /// * `orient_elon` - Orientation longitude (degrees east)
    ///
    /// The corner rotation converts degrees to radians once and divides the
    /// scale by `1 + n`; legacy output that converted twice and multiplied
    /// by `1 + n` will not match these coordinates.
    pub fn new(left_lat: f64, left_elon: f64, tan_lat: f64, dx_km: f64, orient_elon: f64) -> Self {
        let hemi = if tan_lat > 0.0 { 1.0 } else { -1.0 };
        let tan = tan_lat.to_radians();
        let an = hemi * tan.sin();
        let lat1 = left_lat.to_radians();
        let re = EARTH_RADIUS_M / (dx_km * 1000.0);

        // Radius from the pole to the corner point, in grid units
        let rmll = re * tan.cos().powf(1.0 - an) * (1.0 + an).powf(an)
            * (lat1.cos() / (1.0 + hemi * lat1.sin())).powf(an)
            / an;

        // Rotation of the corner point away from the orientation meridian
        let arg = an * (left_elon - orient_elon).to_radians();
        let pole_i = 1.0 - hemi * rmll * arg.sin();
        let pole_j = 1.0 + rmll * arg.cos();

        Self {
            left_lat,
            left_elon,
            tan_lat,
            dx_km,
            orient_elon,
            hemi,
            an,
            re,
            pole_i,
            pole_j,
        }
    }

    /// Projection for a catalog grid definition.
    pub fn from_grid(grid: &LambertConformalGrid) -> Self {
        Self::new(
            grid.left_lat,
            grid.left_elon,
            grid.tan_lat,
            grid.dx_km,
            grid.orient_elon,
        )
    }

    /// Grid position of the projection pole (zero-based indices).
    pub fn pole_position(&self) -> (f64, f64) {
        (self.pole_i - 1.0, self.pole_j - 1.0)
    }

    /// Convert zero-based grid indices to latitude / east longitude.
    ///
    /// Returns `None` when the point falls inside the cone's cut, i.e. more
    /// than 180 degrees of longitude away from the orientation meridian.
    /// The cut test runs first, so the pole of projection only maps to
    /// `(±90, orient_elon)` for a polar cone (tangent latitude of ±90).
    pub fn grid_to_geo(&self, i: f64, j: f64) -> Option<GeoPoint> {
        let x = i + 1.0 - self.pole_i;
        let y = j + 1.0 - self.pole_j;
        let r2 = x * x + y * y;

        let theta = PI * (1.0 - self.an);
        let beta = x.atan2(y).abs();
        if beta < theta {
            return None;
        }

        if r2 == 0.0 {
            return Some(GeoPoint {
                lat: self.hemi * 90.0,
                elon: self.orient_elon,
            });
        }

        let aninv = 1.0 / self.an;
        let tan = self.tan_lat.to_radians();
        let z = (self.an / self.re).powf(aninv)
            / tan.cos().powf((1.0 - self.an) * aninv)
            / (1.0 + self.an);
        let lat = self.hemi * (PI / 2.0 - 2.0 * (z * r2.powf(aninv / 2.0)).atan()).to_degrees();

        let mut elon = self.orient_elon + ((self.hemi * x).atan2(-y) / self.an).to_degrees();
        while elon > 360.0 {
            elon -= 360.0;
        }

        Some(GeoPoint { lat, elon })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// AWIPS grid 212-like CONUS Lambert grid.
    fn conus() -> LambertConformal {
        LambertConformal::new(12.19, 226.541, 25.0, 40.635, 265.0)
    }

    #[test]
    fn test_corner_roundtrip() {
        let proj = conus();
        let p = proj.grid_to_geo(0.0, 0.0).unwrap();
        assert!((p.lat - 12.19).abs() < 1e-6, "lat should be ~12.19, got {}", p.lat);
        assert!((p.elon - 226.541).abs() < 1e-6, "elon should be ~226.541, got {}", p.elon);
    }

    #[test]
    fn test_orientation_meridian_column() {
        // A corner on the orientation meridian keeps its whole column there.
        let proj = LambertConformal::new(20.0, 265.0, 45.0, 50.0, 265.0);
        for j in 0..5 {
            let p = proj.grid_to_geo(0.0, j as f64).unwrap();
            assert!((p.elon - 265.0).abs() < 1e-9, "elon {} at j={}", p.elon, j);
        }
    }

    #[test]
    fn test_latitude_increases_toward_pole() {
        let proj = conus();
        let (_, pole_j) = proj.pole_position();
        assert!(pole_j > 0.0);

        let south = proj.grid_to_geo(46.0, 0.0).unwrap();
        let north = proj.grid_to_geo(46.0, 60.0).unwrap();
        assert!(north.lat > south.lat);
    }

    #[test]
    fn test_tangent_latitude_ninety_reaches_pole() {
        // With a polar cone the cut vanishes and the pole itself is valid.
        let proj = LambertConformal::new(60.0, 0.0, 90.0, 100.0, 0.0);
        let (pi, pj) = proj.pole_position();
        if let Some(p) = proj.grid_to_geo(pi, pj) {
            assert!(p.lat > 89.0);
        }
        let corner = proj.grid_to_geo(0.0, 0.0).unwrap();
        assert!((corner.lat - 60.0).abs() < 1e-6, "lat {}", corner.lat);
    }

    #[test]
    fn test_out_of_domain_behind_pole() {
        // Directly "above" the pole is 180 degrees from the orientation
        // meridian and falls in the cone's cut.
        let proj = conus();
        let (pi, pj) = proj.pole_position();
        assert!(proj.grid_to_geo(pi, pj + 10.0).is_none());
    }

    #[test]
    fn test_southern_hemisphere_corner_roundtrip() {
        let proj = LambertConformal::new(-10.0, 120.0, -30.0, 50.0, 135.0);
        let p = proj.grid_to_geo(0.0, 0.0).unwrap();
        assert!((p.lat - (-10.0)).abs() < 1e-6, "lat {}", p.lat);
        assert!((p.elon - 120.0).abs() < 1e-6, "elon {}", p.elon);
    }
}
