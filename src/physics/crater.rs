//! Crater scaling law.
//!
//! Simplified transient-crater diameter from Collins et al. (2005):
//!
//! ```text
//! D = 1.161 · ( KE · sin(θ)^(1/3) / (ρ_p · √g · √ρ_t) )^0.25
//! ```
//!
//! The output is a nominal magnitude: the published simplification is not
//! dimensionally clean, and downstream consumers already calibrate their
//! display against it, so the formula is kept exact rather than corrected.

use super::{
    CRATER_SCALING_COEFFICIENT, CRATER_SCALING_EXPONENT, PROJECTILE_DENSITY, SURFACE_GRAVITY,
    TARGET_DENSITY,
};
use crate::physics::energy::ImpactEnergy;

/// Impact angle efficiency factor, `sin(θ)^(1/3)`.
///
/// Equals exactly 1 for a vertical impact (90°) and falls toward 0 as the
/// trajectory grazes the horizontal; the validated input range (0, 90]
/// keeps it strictly positive.
#[must_use]
pub fn angle_efficiency(angle_degrees: f64) -> f64 {
    let angle_radians = angle_degrees.to_radians();
    angle_radians.sin().powf(1.0 / 3.0)
}

/// Transient crater diameter (nominal units) from energy and impact angle.
#[must_use]
pub fn crater_diameter(energy: &ImpactEnergy, angle_degrees: f64) -> f64 {
    let efficiency = angle_efficiency(angle_degrees);
    let coupling = (energy.kinetic_energy_joules * efficiency)
        / (PROJECTILE_DENSITY * SURFACE_GRAVITY.sqrt() * TARGET_DENSITY.sqrt());

    CRATER_SCALING_COEFFICIENT * coupling.powf(CRATER_SCALING_EXPONENT)
}
