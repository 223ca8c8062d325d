//! Impact result assembly.
//!
//! Runs the forward pipeline (energy → crater/blast → casualties → risk)
//! and composes the immutable response object. No computation of its own
//! beyond structural composition; enrichment is attached separately so the
//! physics path never depends on the external feed.

use serde::{Deserialize, Serialize};

use crate::casualty::{estimate_casualties, DensityTable};
use crate::error::{EngineError, EngineResult};
use crate::neo::{NeoEnrichment, NeoSnapshot};
use crate::params::AsteroidParameters;
use crate::physics::{crater_diameter, BlastEffects, ImpactEnergy};
use crate::risk::{classify, RiskLevel};

/// Assembled impact estimate. Immutable once built, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactResult {
    /// Crater diameter from the scaling law (nominal units).
    pub crater_diameter: f64,
    /// Blast radius at the reference overpressure (m).
    pub blast_radius: f64,
    /// Thermal firestorm area (km²).
    pub firestorm_area: f64,
    /// Estimated casualty count.
    pub casualties: u64,
    /// Ordinal severity classification.
    pub risk_level: RiskLevel,
    /// Best-effort NEO snapshot; omitted when the lookup did not succeed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neo_data: Option<NeoSnapshot>,
}

impl ImpactResult {
    /// Run the full physics pipeline for one validated parameter set.
    ///
    /// Pure and deterministic: identical parameters and density table give
    /// a bit-identical result. Enrichment starts out absent; attach it with
    /// [`ImpactResult::with_enrichment`].
    #[must_use]
    pub fn compute(params: &AsteroidParameters, densities: &DensityTable) -> Self {
        let energy = ImpactEnergy::from_params(params);
        let crater = crater_diameter(&energy, params.angle);
        let blast = BlastEffects::from_energy(&energy);
        let casualties = estimate_casualties(
            blast.blast_radius_m,
            params.latitude,
            params.longitude,
            densities,
        );
        let risk_level = classify(crater, casualties);

        Self {
            crater_diameter: crater,
            blast_radius: blast.blast_radius_m,
            firestorm_area: blast.firestorm_area_km2,
            casualties,
            risk_level,
            neo_data: None,
        }
    }

    /// Attach the outcome of the enrichment fetch.
    #[must_use]
    pub fn with_enrichment(mut self, enrichment: NeoEnrichment) -> Self {
        self.neo_data = enrichment.into_option();
        self
    }

    /// Guard against non-finite output.
    ///
    /// The formulas are total over the validated domain, so a non-finite
    /// field here is an internal failure and the whole request fails.
    ///
    /// # Errors
    ///
    /// Returns an internal error naming the first non-finite field.
    pub fn ensure_finite(&self) -> EngineResult<()> {
        for (name, value) in [
            ("craterDiameter", self.crater_diameter),
            ("blastRadius", self.blast_radius),
            ("firestormArea", self.firestorm_area),
        ] {
            if !value.is_finite() {
                return Err(EngineError::internal(format!(
                    "non-finite value in {name}: {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reference_params() -> AsteroidParameters {
        AsteroidParameters {
            size: 100.0,
            speed: 20.0,
            angle: 45.0,
            latitude: 40.7128,
            longitude: -74.006,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let result = ImpactResult::compute(&reference_params(), &DensityTable::default());

        assert!((result.crater_diameter - 1020.0).abs() < 5.0);
        assert!((result.blast_radius - 92_774.0).abs() / 92_774.0 < 1e-3);
        assert!((result.firestorm_area - 60_800.0).abs() / 60_800.0 < 2e-3);
        assert!((202_000_000..=204_000_000).contains(&result.casualties));
        assert_eq!(result.risk_level, RiskLevel::Catastrophic);
        assert!(result.neo_data.is_none());
        assert!(result.ensure_finite().is_ok());
    }

    #[test]
    fn test_determinism() {
        let densities = DensityTable::default();
        let a = ImpactResult::compute(&reference_params(), &densities);
        let b = ImpactResult::compute(&reference_params(), &densities);
        assert_eq!(a, b);
    }

    #[test]
    fn test_enrichment_attachment() {
        let result = ImpactResult::compute(&reference_params(), &DensityTable::default());

        let absent = result.clone().with_enrichment(NeoEnrichment::Absent);
        assert!(absent.neo_data.is_none());

        let snapshot = NeoSnapshot {
            element_count: 3,
            near_earth_objects: vec![json!({"id": "2024 XY"})],
        };
        let present = result.with_enrichment(NeoEnrichment::Present(snapshot.clone()));
        assert_eq!(present.neo_data, Some(snapshot));
    }

    #[test]
    fn test_serializes_camel_case_and_omits_absent_neo() {
        let result = ImpactResult::compute(&reference_params(), &DensityTable::default());
        let json = serde_json::to_value(&result).unwrap();

        assert!(json.get("craterDiameter").is_some());
        assert!(json.get("blastRadius").is_some());
        assert!(json.get("firestormArea").is_some());
        assert!(json.get("casualties").is_some());
        assert_eq!(json.get("riskLevel"), Some(&json!("Catastrophic")));
        assert!(json.get("neoData").is_none());
    }

    #[test]
    fn test_ensure_finite_flags_bad_output() {
        let mut result = ImpactResult::compute(&reference_params(), &DensityTable::default());
        result.blast_radius = f64::NAN;
        assert!(result.ensure_finite().is_err());
    }
}
