//! Blast and thermal effects.
//!
//! Cube-root TNT-equivalence scaling at a fixed 5 psi reference
//! overpressure (severe structural damage), with the thermal firestorm
//! footprint derived as a fixed multiple of the blast radius.

use serde::{Deserialize, Serialize};

use super::{BLAST_RADIUS_COEFFICIENT, FIRESTORM_RADIUS_FACTOR, JOULES_PER_KILOTON};
use crate::physics::energy::ImpactEnergy;

/// Blast wave and firestorm footprint derived from kinetic energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlastEffects {
    /// Blast radius at the reference overpressure (m).
    pub blast_radius_m: f64,
    /// Thermal firestorm area (km²).
    pub firestorm_area_km2: f64,
}

impl BlastEffects {
    /// Derive blast effects from impact energy. Deterministic, no failure
    /// modes over the validated domain.
    #[must_use]
    pub fn from_energy(energy: &ImpactEnergy) -> Self {
        let kilotons = energy.kinetic_energy_joules / JOULES_PER_KILOTON;
        let blast_radius_m = kilotons.cbrt() * BLAST_RADIUS_COEFFICIENT * 1000.0;

        let firestorm_radius_m = blast_radius_m * FIRESTORM_RADIUS_FACTOR;
        let firestorm_radius_km = firestorm_radius_m / 1000.0;
        let firestorm_area_km2 = std::f64::consts::PI * firestorm_radius_km * firestorm_radius_km;

        Self {
            blast_radius_m,
            firestorm_area_km2,
        }
    }
}


#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod proptests {
    use super::*;
    use crate::params::AsteroidParameters;
    use proptest::prelude::*;

    fn energy(size: f64, speed: f64) -> ImpactEnergy {
        ImpactEnergy::from_params(&AsteroidParameters {
            size,
            speed,
            angle: 45.0,
            latitude: 0.0,
            longitude: 0.0,
        })
    }

    proptest! {
        /// Blast radius is strictly increasing in impactor size.
        #[test]
        fn blast_monotone_in_size(size in 1.0f64..5000.0, speed in 1.0f64..70.0) {
            let smaller = BlastEffects::from_energy(&energy(size, speed));
            let larger = BlastEffects::from_energy(&energy(size * 1.01, speed));
            prop_assert!(larger.blast_radius_m > smaller.blast_radius_m);
        }

        /// Blast radius is strictly increasing in impact speed.
        #[test]
        fn blast_monotone_in_speed(size in 1.0f64..5000.0, speed in 1.0f64..70.0) {
            let slower = BlastEffects::from_energy(&energy(size, speed));
            let faster = BlastEffects::from_energy(&energy(size, speed * 1.01));
            prop_assert!(faster.blast_radius_m > slower.blast_radius_m);
        }
    }
}
