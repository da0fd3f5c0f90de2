//! Closed-form domains for latitude/longitude, Gaussian and Mercator grids.

use grid_common::{Centering, GeoDomain, LatLonGrid};
use tracing::debug;

/// Tolerance when matching the declared resolution to the longitude span.
const RESOLUTION_TOLERANCE: f64 = 0.01;
/// Tolerance for "spans the full circle" and pole snapping.
const SPAN_TOLERANCE: f64 = 0.001;

/// Direction of the first row, after any wrap adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    East,
    West,
}

pub(super) fn resolve(grid: &LatLonGrid, centering: Centering) -> Option<GeoDomain> {
    let mut south = grid.start_lat.min(grid.end_lat);
    let mut north = grid.start_lat.max(grid.end_lat);
    let mut start = grid.start_elon;
    let mut end = grid.end_elon;

    let (xspace, xres) = column_spacing(grid);

    let scan = if ((end - start) / xspace - xres).abs() < RESOLUTION_TOLERANCE {
        Scan::East
    } else if ((end + 360.0 - start) / xspace - xres).abs() < RESOLUTION_TOLERANCE {
        end += 360.0;
        Scan::East
    } else if ((start - end) / xspace - xres).abs() < RESOLUTION_TOLERANCE {
        Scan::West
    } else if ((start + 360.0 - end) / xspace - xres).abs() < RESOLUTION_TOLERANCE {
        start += 360.0;
        Scan::West
    } else {
        debug!(
            start_elon = grid.start_elon,
            end_elon = grid.end_elon,
            x_count = grid.x_count,
            x_res = grid.x_res,
            "Longitude resolution does not match grid span"
        );
        return None;
    };

    if ((north - south + grid.y_res).abs() - 180.0).abs() < SPAN_TOLERANCE {
        south = -90.0;
        north = 90.0;
    }

    if is_global(start, end, xres) {
        let (west, east) = centering.full_circle();
        return Some(GeoDomain::new(west, south, east, north));
    }

    let (west, east) = match scan {
        Scan::East => (start, end),
        Scan::West => (end, start),
    };

    Some(GeoDomain::new(
        centering.fold_inclusive(west),
        south,
        centering.fold(east),
        north,
    ))
}

/// Number of column intervals and the effective column resolution.
fn column_spacing(grid: &LatLonGrid) -> (f64, f64) {
    let span = grid.end_elon - grid.start_elon;
    if grid.is_reduced() {
        return (span / grid.x_res, grid.x_res);
    }

    let xspace = (grid.x_count - 1) as f64;
    if xspace != 0.0 {
        return (xspace, grid.x_res);
    }

    // Single column: a zonal band, or a global mean when start == end.
    if span == 0.0 {
        (1.0, 0.0)
    } else {
        (span, 1.0)
    }
}

/// Whether the longitudes cover the full circle, with or without the
/// boundary column repeated.
fn is_global(start: f64, end: f64, xres: f64) -> bool {
    let span = (end - start).abs();
    if span <= SPAN_TOLERANCE {
        return false;
    }
    if (span - 360.0).abs() < SPAN_TOLERANCE {
        return true;
    }

    let padded = if end > start {
        end + xres - start
    } else {
        end - xres - start
    };
    (padded.abs() - 360.0).abs() < SPAN_TOLERANCE
}
