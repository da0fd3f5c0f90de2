//! Lambert conformal domains by exhaustive point scan.

use super::ScanBounds;
use grid_common::{Centering, GeoDomain, LambertConformalGrid};
use projection::LambertConformal;
use rayon::prelude::*;

pub(super) fn resolve(grid: &LambertConformalGrid, centering: Centering) -> Option<GeoDomain> {
    let proj = LambertConformal::from_grid(grid);

    (0..grid.nj)
        .into_par_iter()
        .map(|j| scan_row(&proj, grid.ni, j))
        .reduce(ScanBounds::empty, ScanBounds::merge)
        .into_domain(centering)
}

/// Bounds of one grid row.
///
/// Once a row steps from east of 180 to west of it, the rest of the row is
/// taken to have crossed the prime meridian and is shifted up by 360.
fn scan_row(proj: &LambertConformal, ni: usize, j: usize) -> ScanBounds {
    let (bounds, _, _) = (0..ni)
        .filter_map(|i| proj.grid_to_geo(i as f64, j as f64))
        .fold(
            (ScanBounds::empty(), None::<f64>, false),
            |(bounds, previous, straddles), point| {
                let previous = previous.unwrap_or(point.elon);
                let straddles = straddles || (point.elon < 180.0 && previous > 180.0);
                let elon = if straddles {
                    point.elon + 360.0
                } else {
                    point.elon
                };
                (bounds.include(point.lat, elon), Some(elon), straddles)
            },
        );
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(ni: usize, nj: usize, left_lat: f64, left_elon: f64, orient_elon: f64) -> LambertConformalGrid {
        LambertConformalGrid {
            ni,
            nj,
            left_lat,
            left_elon,
            tan_lat: 45.0,
            orient_elon,
            dx_km: 100.0,
        }
    }

    #[test]
    fn test_small_grid_on_orientation_meridian() {
        let g = grid(3, 3, 30.0, 265.0, 265.0);

        let domain = resolve(&g, Centering::PrimeMeridian).unwrap();
        assert!((domain.west - -95.0).abs() < 1e-6, "west {}", domain.west);
        assert!((domain.east - -92.938).abs() < 1e-3, "east {}", domain.east);
        assert!((domain.south - 29.978).abs() < 1e-3, "south {}", domain.south);
        assert!((domain.north - 31.748).abs() < 1e-3, "north {}", domain.north);

        let domain = resolve(&g, Centering::DateLine).unwrap();
        assert!((domain.west - 265.0).abs() < 1e-6);
        assert!(domain.east > domain.west);
    }

    #[test]
    fn test_row_crossing_prime_meridian() {
        // The last column of each row lies just east of 0E.
        let g = grid(10, 3, 40.0, 350.0, 355.0);

        let domain = resolve(&g, Centering::PrimeMeridian).unwrap();
        assert!((domain.west - -10.1485).abs() < 1e-3, "west {}", domain.west);
        assert!((domain.east - 0.6957).abs() < 1e-3, "east {}", domain.east);
        assert!(domain.south < domain.north);
    }

    #[test]
    fn test_row_crossing_prime_meridian_date_line_centered() {
        let g = grid(10, 3, 40.0, 350.0, 355.0);

        let domain = resolve(&g, Centering::DateLine).unwrap();
        assert!((domain.west - 349.8515).abs() < 1e-3, "west {}", domain.west);
        assert!((domain.east - 0.6957).abs() < 1e-3, "east {}", domain.east);
        assert!(domain.south < domain.north);
    }

    #[test]
    fn test_empty_grid_is_unresolved() {
        let g = grid(0, 0, 30.0, 265.0, 265.0);
        assert_eq!(resolve(&g, Centering::PrimeMeridian), None);
    }
}
