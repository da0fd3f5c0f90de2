//! Dataset-level extents: decode a grid bitmap, resolve every referenced
//! grid definition and merge the results.

use crate::bitmap;
use crate::catalog::GridCatalog;
use crate::coverage::{describe_grid, SpatialCoverage};
use crate::error::ExtentResult;
use crate::resolver::DomainResolver;
use grid_common::{Centering, GeoDomain, RawGridDefinition};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Merges the domains of all grids referenced by a dataset.
///
/// Domains are always resolved with prime-meridian centering before being
/// merged.
#[derive(Debug, Clone, Default)]
pub struct ExtentAggregator {
    resolver: DomainResolver,
}

impl ExtentAggregator {
    pub fn new(resolver: DomainResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &DomainResolver {
        &self.resolver
    }

    /// Overall extent of the grids referenced by one bitmap.
    ///
    /// Codes missing from the catalog, malformed definitions and unresolved
    /// domains are skipped. Returns `Ok(None)` when nothing resolves; a
    /// malformed bitmap is an error.
    pub fn aggregate_extent<C>(&self, bitmap: &str, catalog: &C) -> ExtentResult<Option<GeoDomain>>
    where
        C: GridCatalog + ?Sized,
    {
        let codes = bitmap::decode(bitmap)?;
        Ok(self.aggregate_codes(&codes, catalog))
    }

    /// Overall extent of the grids referenced by any of `bitmaps`.
    pub fn aggregate_many<C, I, S>(&self, bitmaps: I, catalog: &C) -> ExtentResult<Option<GeoDomain>>
    where
        C: GridCatalog + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes: Vec<i64> = bitmap::decode_many(bitmaps)?.into_iter().collect();
        Ok(self.aggregate_codes(&codes, catalog))
    }

    /// Merge the domains of already-decoded codes.
    pub fn aggregate_codes<C>(&self, codes: &[i64], catalog: &C) -> Option<GeoDomain>
    where
        C: GridCatalog + ?Sized,
    {
        codes
            .par_iter()
            .filter_map(|&code| {
                let def = self.lookup(code, catalog)?;
                self.resolve_code(code, &def)
            })
            .reduce_with(|a, b| a.union(&b))
    }

    /// Extent and grid descriptions for a dataset's bitmaps, formatted for
    /// a dataset description page.
    ///
    /// Returns `Ok(None)` when no referenced grid resolves.
    pub fn spatial_coverage<C, I, S>(&self, bitmaps: I, catalog: &C) -> ExtentResult<Option<SpatialCoverage>>
    where
        C: GridCatalog + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes = bitmap::decode_many(bitmaps)?;
        let defs: Vec<(i64, RawGridDefinition)> = codes
            .into_iter()
            .filter_map(|code| self.lookup(code, catalog).map(|def| (code, def)))
            .collect();

        let domain = defs
            .par_iter()
            .filter_map(|(code, def)| self.resolve_code(*code, def))
            .reduce_with(|a, b| a.union(&b));

        Ok(domain.map(|domain| {
            let details = defs.iter().filter_map(|(_, def)| describe_grid(def)).collect();
            SpatialCoverage::new(&domain, details)
        }))
    }

    fn lookup<C>(&self, code: i64, catalog: &C) -> Option<RawGridDefinition>
    where
        C: GridCatalog + ?Sized,
    {
        let def = catalog.grid_definition(code);
        if def.is_none() {
            warn!(code = code, "Grid definition not found in catalog");
        }
        def
    }

    fn resolve_code(&self, code: i64, def: &RawGridDefinition) -> Option<GeoDomain> {
        match self.resolver.resolve_raw(def, Centering::PrimeMeridian) {
            Ok(Some(domain)) => Some(domain),
            Ok(None) => {
                debug!(code = code, family = %def.family, "Grid domain unresolved");
                None
            }
            Err(e) => {
                warn!(code = code, family = %def.family, error = %e, "Skipping malformed grid definition");
                None
            }
        }
    }
}

/// Overall extent of the grids referenced by `bitmap`, with the default
/// resolver configuration.
pub fn aggregate_extent<C>(bitmap: &str, catalog: &C) -> ExtentResult<Option<GeoDomain>>
where
    C: GridCatalog + ?Sized,
{
    ExtentAggregator::default().aggregate_extent(bitmap, catalog)
}
