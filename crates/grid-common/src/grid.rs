//! Grid definitions as stored in the grid-definition catalog.
//!
//! The catalog stores each definition as a family tag plus a colon-delimited
//! parameter string whose positional meaning depends on the family:
//!
//! | family                 | parameters                                                        |
//! |------------------------|-------------------------------------------------------------------|
//! | `latLon`, `gaussLatLon`, `mercator` (+`Cell`) | `nx:ny:startLat:startLon:endLat:endLon:xRes:yRes` |
//! | `lambertConformal*`    | `nx:ny:leftLat:leftLon:tanLat:orientLon:pole:dxKm:dyKm`           |
//! | `polarStereographic*`  | `nx:ny:startLat:startLon:tanLat:orientLon:pole:dxKm:dyKm`         |

use crate::coord::{decode_east_longitude, decode_latitude};
use crate::error::{GridParseError, GridResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Pole of projection for polar grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    pub fn letter(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
        }
    }
}

impl FromStr for Hemisphere {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "N" => Ok(Hemisphere::North),
            "S" => Ok(Hemisphere::South),
            other => Err(GridParseError::InvalidHemisphere(other.to_string())),
        }
    }
}

/// A grid definition exactly as returned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGridDefinition {
    /// Projection family tag, e.g. `latLon` or `lambertConformal`.
    pub family: String,
    /// Colon-delimited parameter list.
    pub params: String,
}

impl RawGridDefinition {
    pub fn new(family: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            params: params.into(),
        }
    }

    /// The individual positional parameters.
    pub fn param_list(&self) -> Vec<&str> {
        self.params.split(':').collect()
    }

    /// Parse into a typed definition.
    pub fn parse(&self) -> GridResult<GridDefinition> {
        GridDefinition::parse(&self.family, &self.params)
    }
}

/// Flavor of a regular latitude/longitude style grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatLonKind {
    LatLon,
    GaussLatLon,
    Mercator,
}

/// Latitude/longitude, Gaussian and Mercator grids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLonGrid {
    pub kind: LatLonKind,
    /// Values represent cells rather than points (`…Cell` families)
    pub cell: bool,
    /// Number of points along a row; zero or negative for reduced grids
    pub x_count: i64,
    pub y_count: i64,
    pub start_lat: f64,
    /// East longitude of the first point
    pub start_elon: f64,
    pub end_lat: f64,
    /// East longitude of the last point
    pub end_elon: f64,
    pub x_res: f64,
    pub y_res: f64,
}

impl LatLonGrid {
    pub fn is_reduced(&self) -> bool {
        self.x_count <= 0
    }
}

/// Lambert conformal grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LambertConformalGrid {
    pub ni: usize,
    pub nj: usize,
    /// Latitude of the corner point farthest from the projection pole
    pub left_lat: f64,
    /// East longitude of the same corner point
    pub left_elon: f64,
    pub tan_lat: f64,
    pub orient_elon: f64,
    /// Grid spacing at the tangent latitude (km)
    pub dx_km: f64,
}

/// Polar stereographic grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarStereographicGrid {
    pub ni: usize,
    pub nj: usize,
    /// Latitude of the first grid point as recorded in the catalog
    pub start_lat: f64,
    /// East longitude of the first grid point as recorded in the catalog
    pub start_elon: f64,
    pub tan_lat: f64,
    pub orient_elon: f64,
    pub hemisphere: Hemisphere,
    /// Grid spacing at the tangent latitude (km)
    pub dx_km: f64,
}

/// Typed grid definition, one variant per projection family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GridDefinition {
    LatLon(LatLonGrid),
    LambertConformal(LambertConformalGrid),
    PolarStereographic(PolarStereographicGrid),
    /// A family with no domain computation (spherical harmonics, etc.)
    Unsupported { family: String },
}

impl GridDefinition {
    /// Parse a catalog `(family, params)` pair.
    ///
    /// Unknown families are not an error; they parse to
    /// [`GridDefinition::Unsupported`].
    pub fn parse(family: &str, params: &str) -> GridResult<Self> {
        let params = Params {
            family,
            values: params.split(':').collect(),
        };

        if let Some((kind, cell)) = lat_lon_family(family) {
            return Ok(GridDefinition::LatLon(LatLonGrid {
                kind,
                cell,
                x_count: params.integer(0)?,
                y_count: params.integer(1)?,
                start_lat: params.latitude(2)?,
                start_elon: params.longitude(3)?,
                end_lat: params.latitude(4)?,
                end_elon: params.longitude(5)?,
                x_res: params.number(6)?,
                y_res: params.number(7)?,
            }));
        }

        if family.starts_with("lambertConformal") {
            return Ok(GridDefinition::LambertConformal(LambertConformalGrid {
                ni: params.count(0)?,
                nj: params.count(1)?,
                left_lat: params.latitude(2)?,
                left_elon: params.longitude(3)?,
                tan_lat: params.latitude(4)?,
                orient_elon: params.longitude(5)?,
                dx_km: params.number(7)?,
            }));
        }

        if family.starts_with("polarStereographic") {
            let hemisphere: Hemisphere = params.get(6)?.parse()?;
            // An empty tangent latitude means the conventional 60 degrees.
            let tan_lat = match params.get(4)?.trim() {
                "" => decode_latitude(&format!("60{}", hemisphere.letter()))?,
                lat => decode_latitude(lat)?,
            };
            return Ok(GridDefinition::PolarStereographic(PolarStereographicGrid {
                ni: params.count(0)?,
                nj: params.count(1)?,
                start_lat: params.latitude(2)?,
                start_elon: params.longitude(3)?,
                tan_lat,
                orient_elon: params.longitude(5)?,
                hemisphere,
                dx_km: params.number(7)?,
            }));
        }

        Ok(GridDefinition::Unsupported {
            family: family.to_string(),
        })
    }
}

/// Match `^(latLon|gaussLatLon|mercator)(Cell)?$`.
fn lat_lon_family(family: &str) -> Option<(LatLonKind, bool)> {
    let (base, cell) = match family.strip_suffix("Cell") {
        Some(base) => (base, true),
        None => (family, false),
    };
    let kind = match base {
        "latLon" => LatLonKind::LatLon,
        "gaussLatLon" => LatLonKind::GaussLatLon,
        "mercator" => LatLonKind::Mercator,
        _ => return None,
    };
    Some((kind, cell))
}

struct Params<'a> {
    family: &'a str,
    values: Vec<&'a str>,
}

impl<'a> Params<'a> {
    fn get(&self, index: usize) -> GridResult<&'a str> {
        self.values
            .get(index)
            .copied()
            .ok_or_else(|| GridParseError::MissingParameter {
                family: self.family.to_string(),
                index,
            })
    }

    fn number(&self, index: usize) -> GridResult<f64> {
        let s = self.get(index)?;
        s.trim()
            .parse()
            .map_err(|_| GridParseError::InvalidNumber(s.to_string()))
    }

    fn integer(&self, index: usize) -> GridResult<i64> {
        let s = self.get(index)?;
        s.trim()
            .parse()
            .map_err(|_| GridParseError::InvalidNumber(s.to_string()))
    }

    fn count(&self, index: usize) -> GridResult<usize> {
        let s = self.get(index)?;
        s.trim()
            .parse()
            .map_err(|_| GridParseError::InvalidNumber(s.to_string()))
    }

    fn latitude(&self, index: usize) -> GridResult<f64> {
        decode_latitude(self.get(index)?)
    }

    fn longitude(&self, index: usize) -> GridResult<f64> {
        decode_east_longitude(self.get(index)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lat_lon() {
        let def = GridDefinition::parse("latLon", "360:181:90N:0E:90S:1W:1.0:1.0").unwrap();
        match def {
            GridDefinition::LatLon(grid) => {
                assert_eq!(grid.kind, LatLonKind::LatLon);
                assert!(!grid.cell);
                assert_eq!(grid.x_count, 360);
                assert_eq!(grid.start_lat, 90.0);
                assert_eq!(grid.end_lat, -90.0);
                assert_eq!(grid.end_elon, 359.0);
            }
            other => panic!("expected lat-lon grid, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_cell_variant() {
        let def = GridDefinition::parse("gaussLatLonCell", "192:94:88.542N:0E:88.542S:358.125E:1.875:1.9").unwrap();
        match def {
            GridDefinition::LatLon(grid) => {
                assert_eq!(grid.kind, LatLonKind::GaussLatLon);
                assert!(grid.cell);
            }
            other => panic!("expected lat-lon grid, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_polar_default_tangent_latitude() {
        let def = GridDefinition::parse("polarStereographic", "65:65:20.826S:150.0E::315.0E:S:381.0:381.0").unwrap();
        match def {
            GridDefinition::PolarStereographic(grid) => {
                assert_eq!(grid.tan_lat, -60.0);
                assert_eq!(grid.hemisphere, Hemisphere::South);
            }
            other => panic!("expected polar grid, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unsupported_family() {
        let def = GridDefinition::parse("sphericalHarmonics", "62:62:62").unwrap();
        assert_eq!(
            def,
            GridDefinition::Unsupported {
                family: "sphericalHarmonics".to_string()
            }
        );
        // "latLonFoo" must not match the lat-lon family
        assert!(matches!(
            GridDefinition::parse("latLonFoo", "").unwrap(),
            GridDefinition::Unsupported { .. }
        ));
    }

    #[test]
    fn test_parse_missing_parameter() {
        let err = GridDefinition::parse("latLon", "360:181:90N").unwrap_err();
        assert_eq!(
            err,
            GridParseError::MissingParameter {
                family: "latLon".to_string(),
                index: 3
            }
        );
    }
}
