//! Casualty estimation from blast footprint and population density.
//!
//! This is a coarse heuristic, not a gridded population model: density
//! comes from an ordered list of geofenced regions (first match wins) with
//! a rural fallback, and a fixed fraction of the affected population is
//! counted as casualties. The table is plain policy data, injectable and
//! loadable from YAML, so it can be tested and revised apart from the
//! algorithm.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Fraction of the affected population counted as casualties.
pub const CASUALTY_FRACTION: f64 = 0.75;

/// Fallback population density outside all regions (people/km²).
pub const RURAL_DENSITY: f64 = 50.0;

/// A geofenced population density bucket.
///
/// Matches when the impact point is strictly within both tolerances of the
/// region center. Tolerances are per-axis so elongated bands (for example
/// the equatorial belt) are expressible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DensityRegion {
    /// Human-readable label, used only for diagnostics.
    pub name: String,
    /// Region center latitude (degrees).
    pub center_lat: f64,
    /// Region center longitude (degrees).
    pub center_lon: f64,
    /// Half-width of the region in latitude (degrees).
    pub tolerance_lat_deg: f64,
    /// Half-width of the region in longitude (degrees).
    pub tolerance_lon_deg: f64,
    /// Population density (people/km²).
    pub density: f64,
}

impl DensityRegion {
    /// Whether an impact point falls inside this region.
    #[must_use]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (latitude - self.center_lat).abs() < self.tolerance_lat_deg
            && (longitude - self.center_lon).abs() < self.tolerance_lon_deg
    }
}

/// Ordered population density lookup with a rural default.
///
/// The first matching region in list order wins; ordering is part of the
/// policy and is preserved from the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DensityTable {
    /// Regions checked in order.
    pub regions: Vec<DensityRegion>,
    /// Density applied when no region matches (people/km²).
    #[serde(default = "default_rural_density")]
    pub rural_density: f64,
}

fn default_rural_density() -> f64 {
    RURAL_DENSITY
}

impl Default for DensityTable {
    fn default() -> Self {
        Self {
            regions: vec![
                DensityRegion {
                    name: "New York City area".to_string(),
                    center_lat: 40.7,
                    center_lon: -74.0,
                    tolerance_lat_deg: 5.0,
                    tolerance_lon_deg: 5.0,
                    density: 10_000.0,
                },
                DensityRegion {
                    name: "Tokyo area".to_string(),
                    center_lat: 35.7,
                    center_lon: 139.7,
                    tolerance_lat_deg: 5.0,
                    tolerance_lon_deg: 5.0,
                    density: 6_000.0,
                },
                DensityRegion {
                    name: "Equatorial belt".to_string(),
                    center_lat: 0.0,
                    center_lon: 0.0,
                    tolerance_lat_deg: 30.0,
                    tolerance_lon_deg: 50.0,
                    density: 500.0,
                },
            ],
            rural_density: RURAL_DENSITY,
        }
    }
}

impl DensityTable {
    /// Load a density table from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, YAML parsing fails, or
    /// the table is semantically invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a density table from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or semantic validation fails.
    pub fn from_yaml(yaml: &str) -> EngineResult<Self> {
        let table: Self = serde_yaml::from_str(yaml)?;
        table.validate_semantic()?;
        Ok(table)
    }

    fn validate_semantic(&self) -> EngineResult<()> {
        if self.rural_density < 0.0 {
            return Err(EngineError::config("rural density must be non-negative"));
        }
        for region in &self.regions {
            if region.tolerance_lat_deg <= 0.0 || region.tolerance_lon_deg <= 0.0 {
                return Err(EngineError::config(format!(
                    "region '{}' has a non-positive tolerance",
                    region.name
                )));
            }
            if region.density < 0.0 {
                return Err(EngineError::config(format!(
                    "region '{}' has a negative density",
                    region.name
                )));
            }
        }
        Ok(())
    }

    /// Population density at an impact point (people/km²).
    #[must_use]
    pub fn density_at(&self, latitude: f64, longitude: f64) -> f64 {
        self.regions
            .iter()
            .find(|region| region.contains(latitude, longitude))
            .map_or(self.rural_density, |region| region.density)
    }
}

/// Estimate casualties from the blast radius and impact location.
///
/// Affected area is the disc inside the blast radius; the estimate is a
/// fixed fraction of the population in that disc at the looked-up density,
/// truncated to a whole count.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn estimate_casualties(
    blast_radius_m: f64,
    latitude: f64,
    longitude: f64,
    table: &DensityTable,
) -> u64 {
    let radius_km = blast_radius_m / 1000.0;
    let affected_area_km2 = std::f64::consts::PI * radius_km * radius_km;
    let density = table.density_at(latitude, longitude);
    let estimated_population = affected_area_km2 * density;

    (estimated_population * CASUALTY_FRACTION).floor().max(0.0) as u64
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_nyc_bucket_matches() {
        let table = DensityTable::default();
        assert!((table.density_at(40.7128, -74.006) - 10_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tokyo_bucket_matches() {
        let table = DensityTable::default();
        assert!((table.density_at(35.6762, 139.6503) - 6_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_equatorial_belt_matches() {
        let table = DensityTable::default();
        assert!((table.density_at(10.0, 20.0) - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rural_fallback() {
        let table = DensityTable::default();
        assert!((table.density_at(-75.0, 170.0) - RURAL_DENSITY).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tolerance_is_strict() {
        let table = DensityTable::default();
        // Exactly 5 degrees off-center must miss the NYC bucket; the point
        // still sits outside the equatorial belt, so it falls to rural.
        assert!((table.density_at(45.7, -74.0) - RURAL_DENSITY).abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_match_wins() {
        let mut table = DensityTable::default();
        table.regions.insert(
            0,
            DensityRegion {
                name: "Override".to_string(),
                center_lat: 40.7,
                center_lon: -74.0,
                tolerance_lat_deg: 5.0,
                tolerance_lon_deg: 5.0,
                density: 1.0,
            },
        );
        assert!((table.density_at(40.7, -74.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reference_casualty_count() {
        // 92,774 m blast over the NYC bucket: ~202.8 million casualties.
        let table = DensityTable::default();
        let casualties = estimate_casualties(92_774.0, 40.7128, -74.006, &table);
        assert!(
            (202_000_000..=204_000_000).contains(&casualties),
            "casualties = {casualties}"
        );
    }

    #[test]
    fn test_casualty_fraction_applied() {
        let table = DensityTable {
            regions: vec![],
            rural_density: 100.0,
        };
        // 1 km radius disc: area π km², population 100π, casualties
        // floor(75π) = 235.
        let casualties = estimate_casualties(1000.0, 0.0, 0.0, &table);
        assert_eq!(casualties, 235);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r"
regions:
  - name: Test city
    center_lat: 10.0
    center_lon: 20.0
    tolerance_lat_deg: 1.0
    tolerance_lon_deg: 1.0
    density: 2500.0
rural_density: 10.0
";
        let table = DensityTable::from_yaml(yaml).unwrap();
        assert!((table.density_at(10.5, 20.5) - 2500.0).abs() < f64::EPSILON);
        assert!((table.density_at(0.0, 0.0) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        let yaml = r"
regions:
  - name: Broken
    center_lat: 0.0
    center_lon: 0.0
    tolerance_lat_deg: 0.0
    tolerance_lon_deg: 1.0
    density: 100.0
";
        assert!(DensityTable::from_yaml(yaml).is_err());
    }
}
