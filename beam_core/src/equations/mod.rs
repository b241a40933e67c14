//! # Beam Mechanics Equations
//!
//! Fundamental closed-form equations used by the profile calculation.
//! Having equations in one place enables:
//! - Easy verification against textbook references
//! - Documentation of assumptions and sign conventions
//! - Consistent implementation across both beam theories
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported uniform-load formulas (moment, shear, stress, deflection)
//! - [`section`] - Rectangular cross-section properties (A, I, Q)
//!
//! ## Sign Conventions
//!
//! - **Load**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Section height y**: Positive upward from the centroid
//! - **Normal stress**: Negative in compression, so a sagging moment gives
//!   negative stress above the neutral axis (y > 0)
//! - **Deflection**: Negative downward (sag is negative)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition
//! - Timoshenko, Strength of Materials, Part I

pub mod beam;
pub mod section;

// Re-export commonly used items
pub use beam::{
    bending_stress,
    parabolic_shear_stress,
    shear_deflection_correction,
    uniform_load_deflection,
    uniform_load_max_moment,
    uniform_load_max_shear,
};

pub use section::{
    rectangular_area,
    rectangular_first_moment,
    rectangular_moment_of_inertia,
};
