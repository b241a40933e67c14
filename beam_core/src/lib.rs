//! # beam_core - Beam Theory Comparison Engine
//!
//! `beam_core` computes bending-stress and deflection profiles for a simply
//! supported rectangular beam under a uniform load, side by side under
//! Euler-Bernoulli theory (no shear deformation) and Timoshenko theory
//! (shear deformation included). Front-ends feed it six scalars and plot
//! the sampled curves it returns.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: a pure function that takes input and returns results
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **No hidden defaults**: the engine never clamps or substitutes values;
//!   interactive defaults live in explicit [`presets`] configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{compute_profiles, BeamInput};
//!
//! let input = BeamInput::new(5.0, 10.0, 0.2, 0.4, 210e6, 84e6);
//! let profiles = compute_profiles(&input).unwrap();
//!
//! println!("I     = {:.6} m4", profiles.moment_of_inertia_m4);
//! println!("M_max = {:.2} kN*m", profiles.max_moment_knm);
//! println!("V_max = {:.2} kN", profiles.max_shear_kn);
//!
//! // Serialize for a plotting front-end
//! let json = serde_json::to_string_pretty(&profiles).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Profile calculation (input, result types, entry point)
//! - [`equations`] - Closed-form beam and section formulas
//! - [`presets`] - Parameter ranges and defaults for interactive front-ends
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod presets;

// Re-export commonly used types at crate root for convenience
pub use calculations::profiles::{
    compute_profiles, BeamInput, BeamProfiles, SectionStressProfile, SpanDeflectionProfile,
};
pub use errors::{BeamError, BeamResult};
pub use presets::{ParameterRange, ParameterRanges};
