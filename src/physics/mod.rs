//! Impact physics models.
//!
//! Pure derivations from validated parameters:
//! - Kinetic energy from size, density, and speed ([`energy`])
//! - Crater diameter via a simplified Collins et al. (2005) scaling law
//!   ([`crater`])
//! - Blast radius and firestorm footprint via a cube-root TNT-equivalence
//!   law ([`blast`])
//!
//! All functions here are total over the validated input domain and share
//! the constants below. The crater scaling law is intentionally
//! approximate and its output is treated as nominal units downstream;
//! the formula is preserved as published rather than unit-corrected.

pub mod blast;
pub mod crater;
pub mod energy;

pub use blast::BlastEffects;
pub use crater::{angle_efficiency, crater_diameter};
pub use energy::ImpactEnergy;

/// Assumed impactor bulk density (kg/m³), typical stony asteroid.
pub const PROJECTILE_DENSITY: f64 = 3000.0;

/// Target rock density (kg/m³).
pub const TARGET_DENSITY: f64 = 2500.0;

/// Surface gravity (m/s²).
pub const SURFACE_GRAVITY: f64 = 9.81;

/// TNT equivalence: joules per kiloton.
pub const JOULES_PER_KILOTON: f64 = 4.184e12;

/// Leading coefficient of the transient-crater scaling law.
pub const CRATER_SCALING_COEFFICIENT: f64 = 1.161;

/// Energy exponent of the transient-crater scaling law.
pub const CRATER_SCALING_EXPONENT: f64 = 0.25;

/// Blast radius at the 5 psi overpressure contour (km per kt^(1/3)).
pub const BLAST_RADIUS_COEFFICIENT: f64 = 2.2;

/// Thermal firestorm radius as a multiple of the blast radius.
pub const FIRESTORM_RADIUS_FACTOR: f64 = 1.5;
