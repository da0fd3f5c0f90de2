//! Common test fixtures for grid-extent tests.
//!
//! Grid definitions are given exactly as a catalog stores them, as
//! `(family, params)` pairs.

use grid_common::RawGridDefinition;
use std::collections::HashMap;

/// Catalog grid definitions for testing.
pub mod grids {
    /// A catalog `(family, params)` pair.
    pub type GridFixture = (&'static str, &'static str);

    /// 1.0 degree global grid with the boundary column repeated
    pub const GLOBAL_1DEG: GridFixture = ("latLon", "361:181:90N:0E:90S:0W:1.0:1.0");

    /// GFS 0.25 degree global grid (boundary column not repeated)
    pub const GFS_QUARTER_DEG: GridFixture = ("latLon", "1440:721:90N:0E:90S:0.25W:0.25:0.25");

    /// 1.0 degree cell grid whose centres stop half a cell short of the poles
    pub const GLOBAL_CELLS: GridFixture = ("latLonCell", "360:180:89.5N:0.5E:89.5S:359.5E:1.0:1.0");

    /// Reduced Gaussian T62 grid
    pub const REDUCED_GAUSSIAN: GridFixture =
        ("gaussLatLon", "-1:94:88.542N:0E:88.542S:358.125E:1.875:1.9");

    /// North America window: 130W to 70W, 20N to 60N
    pub const NORTH_AMERICA: GridFixture = ("latLon", "61:41:20N:230E:60N:290E:1.0:1.0");

    /// Window straddling the prime meridian: 20W to 20E, 0N to 10N
    pub const PRIME_MERIDIAN_WINDOW: GridFixture = ("latLon", "41:11:0N:340E:10N:20E:1.0:1.0");

    /// Resolution inconsistent with the longitude span
    pub const INCONSISTENT: GridFixture = ("latLon", "10:10:0N:0E:10N:50E:1.0:1.0");

    /// AWIPS grid 211 style CONUS Lambert conformal grid
    pub const CONUS_LAMBERT: GridFixture = (
        "lambertConformal",
        "93:65:12.19N:133.459W:25.0N:95.0W:N:81.2705:81.2705",
    );

    /// Small Lambert grid with its corner on the orientation meridian
    pub const SMALL_LAMBERT: GridFixture = ("lambertConformal", "3:3:30N:95W:45N:95W:N:100.0:100.0");

    /// Northern hemisphere 65 x 65 polar stereographic grid centred on the pole
    pub const NH_POLAR: GridFixture = (
        "polarStereographic",
        "65:65:20.826S:125W:60N:80W:N:381.0:381.0",
    );

    /// 21 x 21 window of [`NH_POLAR`] recorded with the parent's size
    pub const NH_POLAR_WINDOW: GridFixture = (
        "polarStereographic",
        "65:65:41.239N:125W:60N:80W:N:381.0:381.0",
    );

    /// A family with no geographic domain
    pub const SPHERICAL_HARMONICS: GridFixture = ("sphericalHarmonics", "62:62:62");
}

/// Build a [`RawGridDefinition`] from a fixture.
pub fn raw_grid((family, params): grids::GridFixture) -> RawGridDefinition {
    RawGridDefinition::new(family, params)
}

/// In-memory catalog holding every fixture grid.
///
/// | code | grid                      |
/// |------|---------------------------|
/// | 1    | `GLOBAL_1DEG`             |
/// | 2    | `GFS_QUARTER_DEG`         |
/// | 3    | `NORTH_AMERICA`           |
/// | 4    | `PRIME_MERIDIAN_WINDOW`   |
/// | 5    | `INCONSISTENT`            |
/// | 6    | `CONUS_LAMBERT`           |
/// | 7    | `NH_POLAR`                |
/// | 8    | `NH_POLAR_WINDOW`         |
/// | 9    | `SPHERICAL_HARMONICS`     |
/// | 10   | `REDUCED_GAUSSIAN`        |
/// | 11   | `GLOBAL_CELLS`            |
/// | 12   | `SMALL_LAMBERT`           |
pub fn sample_catalog() -> HashMap<i64, RawGridDefinition> {
    use grids::*;

    [
        GLOBAL_1DEG,
        GFS_QUARTER_DEG,
        NORTH_AMERICA,
        PRIME_MERIDIAN_WINDOW,
        INCONSISTENT,
        CONUS_LAMBERT,
        NH_POLAR,
        NH_POLAR_WINDOW,
        SPHERICAL_HARMONICS,
        REDUCED_GAUSSIAN,
        GLOBAL_CELLS,
        SMALL_LAMBERT,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, fixture)| (i as i64 + 1, raw_grid(fixture)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_codes() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog[&1].params, grids::GLOBAL_1DEG.1);
        assert_eq!(catalog[&9].family, "sphericalHarmonics");
        assert_eq!(catalog[&12].family, "lambertConformal");
    }

    #[test]
    fn test_fixtures_parse() {
        for def in sample_catalog().values() {
            assert!(def.parse().is_ok(), "fixture {:?} should parse", def);
        }
    }
}
