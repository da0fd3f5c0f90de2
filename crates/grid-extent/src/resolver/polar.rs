//! Polar stereographic domains.
//!
//! Catalog entries for polar grids are not always consistent with their
//! first grid point: some record the size of a larger parent grid. When the
//! declared size puts the `(0, 0)` corner somewhere other than the recorded
//! start coordinate, a corner search looks for the pole-centred grid whose
//! corner does land there.

use super::{DomainResolver, ScanBounds};
use grid_common::{Centering, GeoDomain, Hemisphere, PolarStereographicGrid};
use projection::PolarStereographic;
use rayon::prelude::*;
use tracing::{debug, warn};

/// Maximum distance, in degrees, between a projected corner and the
/// recorded start coordinate.
const CORNER_TOLERANCE: f64 = 0.5;

/// Kilometres per degree of latitude used to size the corner search.
const KM_PER_DEGREE: f64 = 111.1;

/// Largest pole row a corner-search candidate may have.
const MAX_HALF_HEIGHT: f64 = i32::MAX as f64;

pub(super) fn resolve(
    resolver: &DomainResolver,
    grid: &PolarStereographicGrid,
    centering: Centering,
) -> Option<GeoDomain> {
    let declared = PolarStereographic::from_grid(grid);
    let proj = if corner_matches(&declared, grid) {
        declared
    } else {
        debug!(
            ni = grid.ni,
            nj = grid.nj,
            start_lat = grid.start_lat,
            start_elon = grid.start_elon,
            "Declared polar grid does not match its start point; searching for grid size"
        );
        search_corner(&declared, grid, resolver.config().max_corner_search_steps)?
    };

    let (ni, nj) = proj.dimensions();
    if ni < 1 || nj < 1 || !resolver.within_scan_budget(ni as u64, nj as u64) {
        return None;
    }

    let bounds = (0..nj)
        .into_par_iter()
        .map(|j| {
            (0..ni).fold(ScanBounds::empty(), |bounds, i| {
                let p = proj.grid_to_geo(i as f64, j as f64);
                bounds.include(p.lat, p.elon)
            })
        })
        .reduce(ScanBounds::empty, ScanBounds::merge);

    let center = proj.grid_to_geo((ni / 2) as f64, (nj / 2) as f64);
    let encloses_pole = (center.elon == 360.0 && center.lat.abs() == 90.0)
        || (bounds.west == 0.0 && bounds.east > 359.9);
    if encloses_pole {
        let (west, east) = centering.full_circle();
        return Some(GeoDomain::new(west, bounds.south, east, bounds.north));
    }

    bounds.into_domain(centering)
}

fn corner_matches(proj: &PolarStereographic, grid: &PolarStereographicGrid) -> bool {
    let corner = proj.grid_to_geo(0.0, 0.0);
    (corner.lat - grid.start_lat).abs() <= CORNER_TOLERANCE
        && (corner.elon - grid.start_elon).abs() <= CORNER_TOLERANCE
}

/// Find the pole-centred grid whose `(0, 0)` corner is the recorded start
/// point.
///
/// The start point's bearing from the orientation meridian fixes the ratio
/// of the two half-widths; candidates are tried in order of increasing
/// width until one matches or the search budget runs out.
fn search_corner(
    declared: &PolarStereographic,
    grid: &PolarStereographicGrid,
    max_steps: usize,
) -> Option<PolarStereographic> {
    let mut yoverx = (grid.start_elon + 270.0 - grid.orient_elon).to_radians().tan();
    if grid.hemisphere == Hemisphere::South {
        yoverx = -yoverx;
    }

    let deg_res = grid.dx_km / (grid.tan_lat.to_radians().cos() * KM_PER_DEGREE);
    if !deg_res.is_finite() || deg_res <= 0.0 {
        warn!(
            dx_km = grid.dx_km,
            tan_lat = grid.tan_lat,
            "Polar grid spacing cannot size a corner search; leaving domain unresolved"
        );
        return None;
    }
    let natural_limit = ((360.0 / deg_res) as usize).saturating_add(1);
    let max_pole_x = natural_limit.min(max_steps);

    let found = (1..max_pole_x).find_map(|pole_x| {
        let ni = i64::try_from(pole_x).ok()?.checked_mul(2)?.checked_sub(1)?;
        // Near the orientation meridian the ratio blows up; such candidates
        // have no representable height.
        let pole_y = (1.0 - yoverx * (1.0 - pole_x as f64)).round_ties_even();
        if !pole_y.is_finite() || pole_y < 1.0 || pole_y > MAX_HALF_HEIGHT {
            return None;
        }
        let nj = (pole_y as i64).checked_mul(2)?.checked_sub(1)?;

        let candidate = declared.with_dimensions(ni, nj);
        let corner = candidate.grid_to_geo(0.0, 0.0);
        let close = (corner.lat - grid.start_lat).abs() < CORNER_TOLERANCE
            && (corner.elon - grid.start_elon).abs() < CORNER_TOLERANCE;
        close.then_some(candidate)
    });

    if found.is_none() {
        warn!(
            start_lat = grid.start_lat,
            start_elon = grid.start_elon,
            max_pole_x = max_pole_x,
            "Polar corner search exhausted; leaving domain unresolved"
        );
    }
    found
}
