//! Geographic domain resolution for catalog grid definitions.
//!
//! Lat-lon style grids are resolved from their parameters in closed form.
//! Lambert conformal and polar stereographic grids are resolved by
//! projecting every grid point and folding the results into a running
//! min/max; rows are scanned in parallel.

mod lambert;
mod lat_lon;
mod polar;

use crate::config::ResolverConfig;
use crate::error::ExtentResult;
use grid_common::{Centering, GeoDomain, GridDefinition, RawGridDefinition};
use tracing::{debug, warn};

/// Resolves grid definitions into geographic domains.
#[derive(Debug, Clone, Default)]
pub struct DomainResolver {
    config: ResolverConfig,
}

impl DomainResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Compute the bounding domain of a grid.
    ///
    /// Returns `None` ("unresolved") for unsupported families, inconsistent
    /// lat-lon parameters, or a polar corner search that finds no match.
    pub fn resolve(&self, def: &GridDefinition, centering: Centering) -> Option<GeoDomain> {
        match def {
            GridDefinition::LatLon(grid) => lat_lon::resolve(grid, centering),
            GridDefinition::LambertConformal(grid) => {
                if !self.within_scan_budget(grid.ni as u64, grid.nj as u64) {
                    return None;
                }
                lambert::resolve(grid, centering)
            }
            GridDefinition::PolarStereographic(grid) => polar::resolve(self, grid, centering),
            GridDefinition::Unsupported { family } => {
                debug!(family = %family, "No domain computation for grid family");
                None
            }
        }
    }

    /// Parse and resolve a catalog definition.
    ///
    /// Malformed parameters are an [`ExtentError::Grid`](crate::ExtentError::Grid).
    pub fn resolve_raw(
        &self,
        raw: &RawGridDefinition,
        centering: Centering,
    ) -> ExtentResult<Option<GeoDomain>> {
        let def = raw.parse()?;
        Ok(self.resolve(&def, centering))
    }

    fn within_scan_budget(&self, ni: u64, nj: u64) -> bool {
        let points = ni.saturating_mul(nj);
        if points > self.config.max_scan_points {
            warn!(
                ni = ni,
                nj = nj,
                max_scan_points = self.config.max_scan_points,
                "Grid too large to scan; leaving domain unresolved"
            );
            return false;
        }
        true
    }
}

/// Resolve a grid definition with the default configuration.
pub fn resolve(def: &GridDefinition, centering: Centering) -> Option<GeoDomain> {
    DomainResolver::default().resolve(def, centering)
}

/// Running latitude / east-longitude bounds of a point scan.
#[derive(Debug, Clone, Copy)]
struct ScanBounds {
    south: f64,
    north: f64,
    west: f64,
    east: f64,
}

impl ScanBounds {
    fn empty() -> Self {
        Self {
            south: f64::INFINITY,
            north: f64::NEG_INFINITY,
            west: f64::INFINITY,
            east: f64::NEG_INFINITY,
        }
    }

    fn include(self, lat: f64, elon: f64) -> Self {
        Self {
            south: self.south.min(lat),
            north: self.north.max(lat),
            west: self.west.min(elon),
            east: self.east.max(elon),
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            south: self.south.min(other.south),
            north: self.north.max(other.north),
            west: self.west.min(other.west),
            east: self.east.max(other.east),
        }
    }

    fn is_empty(&self) -> bool {
        self.south > self.north
    }

    /// Fold both longitude edges into the centering range.
    fn into_domain(self, centering: Centering) -> Option<GeoDomain> {
        if self.is_empty() {
            return None;
        }
        Some(GeoDomain::new(
            centering.fold(self.west),
            self.south,
            centering.fold(self.east),
            self.north,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtentError;

    #[test]
    fn test_scan_bounds_empty() {
        assert!(ScanBounds::empty().is_empty());
        assert!(ScanBounds::empty().into_domain(Centering::PrimeMeridian).is_none());
    }

    #[test]
    fn test_scan_bounds_merge() {
        let a = ScanBounds::empty().include(10.0, 200.0).include(20.0, 250.0);
        let b = ScanBounds::empty().include(-5.0, 300.0);
        let m = a.merge(b);
        assert_eq!(m.south, -5.0);
        assert_eq!(m.north, 20.0);
        assert_eq!(m.west, 200.0);
        assert_eq!(m.east, 300.0);

        let domain = m.into_domain(Centering::PrimeMeridian).unwrap();
        assert_eq!(domain, GeoDomain::new(-160.0, -5.0, -60.0, 20.0));
    }

    #[test]
    fn test_unsupported_family_is_unresolved() {
        let raw = RawGridDefinition::new("sphericalHarmonics", "62:62:62");
        let resolver = DomainResolver::default();
        assert_eq!(resolver.resolve_raw(&raw, Centering::PrimeMeridian).unwrap(), None);
    }

    #[test]
    fn test_malformed_definition_is_grid_error() {
        let raw = RawGridDefinition::new("latLon", "21:21:0N");
        let err = DomainResolver::default()
            .resolve_raw(&raw, Centering::PrimeMeridian)
            .unwrap_err();
        assert!(matches!(err, ExtentError::Grid(_)), "{:?}", err);
    }

    #[test]
    fn test_scan_budget() {
        let resolver = DomainResolver::new(ResolverConfig {
            max_scan_points: 100,
            ..Default::default()
        });
        let raw = RawGridDefinition::new(
            "lambertConformal",
            "93:65:12.19N:133.459W:25.0N:95.0W:N:81.2705:81.2705",
        );
        assert_eq!(resolver.resolve_raw(&raw, Centering::PrimeMeridian).unwrap(), None);
    }
}
