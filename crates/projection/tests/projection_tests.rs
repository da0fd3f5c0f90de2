//! Integration tests: projections built from catalog grid definitions.

use grid_common::GridDefinition;
use projection::{LambertConformal, PolarStereographic};

fn lambert(params: &str) -> LambertConformal {
    match GridDefinition::parse("lambertConformal", params).unwrap() {
        GridDefinition::LambertConformal(grid) => LambertConformal::from_grid(&grid),
        other => panic!("expected Lambert grid, got {:?}", other),
    }
}

fn polar(params: &str) -> PolarStereographic {
    match GridDefinition::parse("polarStereographic", params).unwrap() {
        GridDefinition::PolarStereographic(grid) => PolarStereographic::from_grid(&grid),
        other => panic!("expected polar grid, got {:?}", other),
    }
}

// ============================================================================
// Lambert conformal
// ============================================================================

#[test]
fn test_catalog_lambert_corners_roundtrip() {
    let cases = [
        ("93:65:12.19N:133.459W:25.0N:95.0W:N:81.2705:81.2705", 12.19, 226.541),
        ("185:129:12.19N:133.459W:25.0N:95.0W:N:40.635:40.635", 12.19, 226.541),
        ("3:3:30N:95W:45N:95W:N:100.0:100.0", 30.0, 265.0),
        ("50:40:10S:120E:30S:135E:S:50.0:50.0", -10.0, 120.0),
    ];

    for (params, lat, elon) in cases {
        let p = lambert(params).grid_to_geo(0.0, 0.0).unwrap();
        assert!((p.lat - lat).abs() < 1e-6, "{}: lat {}", params, p.lat);
        assert!((p.elon - elon).abs() < 1e-6, "{}: elon {}", params, p.elon);
    }
}

#[test]
fn test_lambert_longitudes_stay_in_range() {
    let proj = lambert("93:65:12.19N:133.459W:25.0N:95.0W:N:81.2705:81.2705");
    for j in 0..65 {
        for i in 0..93 {
            let p = proj.grid_to_geo(i as f64, j as f64).unwrap();
            assert!(p.elon <= 360.0, "elon {} at ({}, {})", p.elon, i, j);
            assert!(p.lat > 0.0 && p.lat < 90.0, "lat {} at ({}, {})", p.lat, i, j);
        }
    }
}

// ============================================================================
// Polar stereographic
// ============================================================================

#[test]
fn test_catalog_polar_corner() {
    let p = polar("65:65:20.826S:125W:60N:80W:N:381.0:381.0").grid_to_geo(0.0, 0.0);
    assert!((p.lat - -20.826).abs() < 1e-3, "lat {}", p.lat);
    assert!((p.elon - 235.0).abs() < 1e-9, "elon {}", p.elon);
}

#[test]
fn test_polar_grid_is_symmetric_about_pole() {
    let proj = polar("65:65:20.826S:125W:60N:80W:N:381.0:381.0");
    let corners = [(0.0, 0.0), (64.0, 0.0), (0.0, 64.0), (64.0, 64.0)];
    let lats: Vec<f64> = corners.iter().map(|&(i, j)| proj.grid_to_geo(i, j).lat).collect();
    for lat in &lats {
        assert!((lat - lats[0]).abs() < 1e-9);
    }
}
