//! Kinetic energy derivation.

use serde::{Deserialize, Serialize};

use super::PROJECTILE_DENSITY;
use crate::params::AsteroidParameters;

/// Derived impact energy, recomputed fresh per request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactEnergy {
    /// Impactor mass (kg).
    pub mass_kg: f64,
    /// Impact velocity (m/s).
    pub velocity_mps: f64,
    /// Kinetic energy (J), ½·m·v².
    pub kinetic_energy_joules: f64,
}

impl ImpactEnergy {
    /// Derive mass, velocity, and kinetic energy from validated parameters.
    ///
    /// Mass assumes a sphere of diameter `size` at the fixed bulk density
    /// of [`PROJECTILE_DENSITY`]. Always finite and non-negative over the
    /// validated input domain.
    #[must_use]
    pub fn from_params(params: &AsteroidParameters) -> Self {
        let radius = params.size / 2.0;
        let volume = (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3);
        let mass_kg = volume * PROJECTILE_DENSITY;
        let velocity_mps = params.speed * 1000.0;
        let kinetic_energy_joules = 0.5 * mass_kg * velocity_mps * velocity_mps;

        Self {
            mass_kg,
            velocity_mps,
            kinetic_energy_joules,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn params(size: f64, speed: f64) -> AsteroidParameters {
        AsteroidParameters {
            size,
            speed,
            angle: 45.0,
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    #[test]
    fn test_reference_energy() {
        // 100 m stony impactor at 20 km/s releases ~3.14e17 J.
        let energy = ImpactEnergy::from_params(&params(100.0, 20.0));
        let relative = (energy.kinetic_energy_joules - 3.141_59e17).abs() / 3.141_59e17;
        assert!(relative < 1e-4, "KE = {:e}", energy.kinetic_energy_joules);
    }

    #[test]
    fn test_velocity_conversion() {
        let energy = ImpactEnergy::from_params(&params(10.0, 17.5));
        assert!((energy.velocity_mps - 17_500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mass_scales_with_cube_of_size() {
        let small = ImpactEnergy::from_params(&params(10.0, 20.0));
        let large = ImpactEnergy::from_params(&params(20.0, 20.0));
        let ratio = large.mass_kg / small.mass_kg;
        assert!((ratio - 8.0).abs() < 1e-9, "ratio = {ratio}");
    }

    #[test]
    fn test_energy_is_finite_and_positive() {
        let energy = ImpactEnergy::from_params(&params(0.001, 0.001));
        assert!(energy.kinetic_energy_joules.is_finite());
        assert!(energy.kinetic_energy_joules > 0.0);
    }
}
