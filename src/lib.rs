//! # impactor
//!
//! Deterministic asteroid impact consequence estimation.
//!
//! Given an incoming body's physical parameters, derives crater size,
//! blast radius, firestorm footprint, a casualty estimate, and an ordinal
//! risk classification, optionally enriched with a best-effort snapshot of
//! externally tracked near-Earth objects. The whole pipeline is a pure,
//! stateless request→result transform: no orbital mechanics, no entry or
//! fragmentation modeling, no persisted state.
//!
//! ## Example
//!
//! ```rust
//! use impactor::prelude::*;
//!
//! let params = AsteroidParameters {
//!     size: 100.0,
//!     speed: 20.0,
//!     angle: 45.0,
//!     latitude: 40.7128,
//!     longitude: -74.006,
//! }
//! .validated()
//! .unwrap();
//!
//! let result = ImpactResult::compute(&params, &DensityTable::default());
//! assert_eq!(result.risk_level, RiskLevel::Catastrophic);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::suboptimal_flops,  // Formulas are kept in their published form
    clippy::imprecise_flops,   // Numerical code choices are intentional
    clippy::missing_const_for_fn  // Many functions can't be const in stable Rust
)]

pub mod casualty;
pub mod error;
pub mod neo;
pub mod params;
pub mod physics;
pub mod result;
pub mod risk;
pub mod server;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::casualty::{estimate_casualties, DensityTable};
    pub use crate::error::{EngineError, EngineResult};
    pub use crate::neo::{NeoClient, NeoEnrichment, NeoSnapshot};
    pub use crate::params::AsteroidParameters;
    pub use crate::physics::{angle_efficiency, crater_diameter, BlastEffects, ImpactEnergy};
    pub use crate::result::ImpactResult;
    pub use crate::risk::{classify, RiskLevel};
    pub use crate::server::AppState;
}

/// Re-export for public API
pub use error::{EngineError, EngineResult};
