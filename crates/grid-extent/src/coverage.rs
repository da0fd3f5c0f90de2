//! Human-readable spatial coverage summaries for dataset descriptions.

use crate::error::ExtentResult;
use grid_common::{GeoDomain, RawGridDefinition};
use serde::Serialize;

/// Formatted bounding box plus a description of every grid involved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpatialCoverage {
    pub west: String,
    pub east: String,
    pub south: String,
    pub north: String,
    /// Grid descriptions, sorted.
    pub details: Vec<String>,
}

impl SpatialCoverage {
    pub fn new(domain: &GeoDomain, mut details: Vec<String>) -> Self {
        details.sort();
        Self {
            west: format_longitude(domain.west),
            east: format_longitude(domain.east),
            south: format_latitude(domain.south),
            north: format_latitude(domain.north),
            details,
        }
    }

    pub fn to_json(&self) -> ExtentResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// `-10.0` → `10W`, `12.3456` → `12.346E`.
pub fn format_longitude(lon: f64) -> String {
    let hemisphere = if lon < 0.0 { 'W' } else { 'E' };
    format!("{}{}", round3(lon.abs()), hemisphere)
}

/// `-12.5` → `12.5S`, `90.0` → `90N`.
pub fn format_latitude(lat: f64) -> String {
    let hemisphere = if lat < 0.0 { 'S' } else { 'N' };
    format!("{}{}", round3(lat.abs()), hemisphere)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Describe a catalog grid definition in words.
///
/// Returns `None` for families with no description, or when the parameter
/// string is too short for the family.
pub fn describe_grid(def: &RawGridDefinition) -> Option<String> {
    let p = def.param_list();
    match def.family.as_str() {
        "gaussLatLon" => {
            let (start_lat, end_lat) = (p.get(2)?, p.get(4)?);
            let slat: f64 = start_lat.get(..start_lat.len().checked_sub(1)?)?.parse().ok()?;
            let elat: f64 = end_lat.get(..end_lat.len().checked_sub(1)?)?.parse().ok()?;
            let rows: f64 = p.get(1)?.parse().ok()?;
            let opposite = start_lat.chars().last()? != end_lat.chars().last()?;
            let span = if opposite { slat + elat } else { slat - elat };
            let y_res = span / (rows - 1.0);

            let size = if *p.first()? == "-1" {
                format!("reduced n{}", p.get(1)?.parse::<i64>().ok()? / 2)
            } else {
                format!("{} x {}", p[0], p.get(1)?)
            };
            Some(format!(
                "{}° x ~{}° from {} to {} and {} to {} ({} Longitude/Gaussian Latitude)",
                p.get(6)?,
                round3(y_res),
                p.get(3)?,
                p.get(5)?,
                start_lat,
                end_lat,
                size
            ))
        }
        "lambertConformal" => Some(format!(
            "{}km x {}km (at {}) oriented {} ({}x{} Lambert Conformal starting at {}, {})",
            p.get(7)?,
            p.get(8)?,
            p.get(4)?,
            p.get(5)?,
            p.first()?,
            p.get(1)?,
            p.get(2)?,
            p.get(3)?
        )),
        family @ ("latLon" | "mercator") => {
            let approx = if family == "mercator" { "~" } else { "" };
            let size = if *p.first()? == "-1" {
                "reduced".to_string()
            } else {
                format!("{} x {}", p[0], p.get(1)?)
            };
            let kind = if family == "mercator" {
                "Mercator"
            } else {
                "Latitude/Longitude"
            };
            Some(format!(
                "{}° x {}{}° from {} to {} and {} to {} ({} {})",
                p.get(6)?,
                approx,
                p.get(7)?,
                p.get(3)?,
                p.get(5)?,
                p.get(2)?,
                p.get(4)?,
                size,
                kind
            ))
        }
        "polarStereographic" => {
            let pole = *p.get(6)?;
            let tan_lat = match *p.get(4)? {
                "" => format!("60{}", pole),
                lat => lat.to_string(),
            };
            let orientation = if pole == "N" { "North" } else { "South" };
            Some(format!(
                "{}km x {}km (at {}) oriented {} ({} x {} {} Polar Stereographic)",
                p.get(7)?,
                p.get(8)?,
                tan_lat,
                p.get(5)?,
                p.first()?,
                p.get(1)?,
                orientation
            ))
        }
        "sphericalHarmonics" => {
            let (j, k, m) = (*p.first()?, *p.get(1)?, *p.get(2)?);
            let truncation = if j == k && k == m {
                "T"
            } else if m.parse::<i64>().ok()? == 0 {
                "R"
            } else {
                ""
            };
            Some(format!(
                "Spherical Harmonics at {}{} spectral resolution",
                truncation, k
            ))
        }
        _ => None,
    }
}
