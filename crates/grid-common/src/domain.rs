//! Geographic domain (bounding box) types and longitude centering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Convention for representing longitude ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Centering {
    /// Anchored at the international date line: longitudes in [0, 360).
    DateLine,
    /// Anchored at the prime meridian: longitudes in (-180, 180].
    PrimeMeridian,
}

impl Centering {
    /// Longitude pair used for a grid that covers the full circle.
    pub fn full_circle(&self) -> (f64, f64) {
        match self {
            Centering::DateLine => (0.0, 360.0),
            Centering::PrimeMeridian => (-180.0, 180.0),
        }
    }

    /// Fold an east longitude into this centering's range.
    ///
    /// The upper bound itself (180 or 360) is kept, so an eastern edge that
    /// lands exactly on it stays there.
    pub fn fold(&self, elon: f64) -> f64 {
        let limit = self.upper_limit();
        if elon > limit {
            elon - 360.0
        } else {
            elon
        }
    }

    /// Like [`Centering::fold`], but the upper bound itself is folded as well.
    ///
    /// Used for western edges, where 180 (or 360) and -180 (or 0) name the
    /// same meridian and the lower representation is preferred.
    pub fn fold_inclusive(&self, elon: f64) -> f64 {
        let limit = self.upper_limit();
        if elon >= limit {
            elon - 360.0
        } else {
            elon
        }
    }

    fn upper_limit(&self) -> f64 {
        match self {
            Centering::DateLine => 360.0,
            Centering::PrimeMeridian => 180.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Centering::DateLine => "dateLine",
            Centering::PrimeMeridian => "primeMeridian",
        }
    }
}

impl Default for Centering {
    fn default() -> Self {
        Centering::PrimeMeridian
    }
}

impl fmt::Display for Centering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Centering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dateLine" | "dateline" | "date_line" => Ok(Centering::DateLine),
            "primeMeridian" | "primemeridian" | "prime_meridian" => Ok(Centering::PrimeMeridian),
            other => Err(format!(
                "unknown centering '{}'. Expected 'dateLine' or 'primeMeridian'",
                other
            )),
        }
    }
}

/// Geographic bounding extent of a grid, in decimal degrees.
///
/// Longitudes are directional: `west` may be numerically greater than `east`
/// when the domain crosses the edge of the centering range. An unresolved
/// domain is represented by `Option::None` at the call sites.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoDomain {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl GeoDomain {
    /// Create a new domain from its four edges.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Component-wise union: west/south take the minimum, east/north the maximum.
    pub fn union(&self, other: &GeoDomain) -> GeoDomain {
        GeoDomain {
            west: self.west.min(other.west),
            south: self.south.min(other.south),
            east: self.east.max(other.east),
            north: self.north.max(other.north),
        }
    }
}
