//! # Beam Calculations
//!
//! Calculation entry points follow one pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Profiles` / `*Profile` - Results (JSON-serializable)
//! - `compute_*(input) -> Result<_, BeamError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`profiles`] - Stress and deflection profiles under Euler-Bernoulli
//!   and Timoshenko theory

pub mod profiles;

// Re-export commonly used types
pub use profiles::{
    compute_profiles, BeamInput, BeamProfiles, SectionStressProfile, SpanDeflectionProfile,
};
