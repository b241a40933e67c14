//! # Parameter Presets
//!
//! Explicit configuration for interactive front-ends: each adjustable
//! parameter carries a min/max/step/default. The engine itself takes no
//! defaults from process-wide state; a front-end reads these presets,
//! collects values, and builds a [`crate::BeamInput`].

use serde::{Deserialize, Serialize};

/// Allowed range and default for one adjustable parameter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ParameterRange {
    /// Smallest accepted value
    pub min: f64,
    /// Largest accepted value
    pub max: f64,
    /// Suggested input granularity (slider step)
    pub step: f64,
    /// Initial value
    pub default: f64,
}

impl ParameterRange {
    /// Clamp a value into this range
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Whether a value lies inside this range
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Ranges for the four user-adjustable parameters plus the fixed material
/// constants of the reference configuration.
///
/// Moduli and the shear factor are not sliders: the reference front-end
/// keeps them fixed at steel-like values (E = 210 GPa, G = 84 GPa in kPa)
/// and k = 5/6 for the rectangular section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ParameterRanges {
    /// Span L (m)
    pub span_m: ParameterRange,
    /// Uniform load q (kN/m)
    pub load_kn_per_m: ParameterRange,
    /// Section width b (m)
    pub width_m: ParameterRange,
    /// Section height h (m)
    pub height_m: ParameterRange,
    /// Young's modulus E (kPa), fixed
    pub e_kpa: f64,
    /// Shear modulus G (kPa), fixed
    pub g_kpa: f64,
    /// Shear correction factor k, fixed
    pub shear_factor: f64,
}

impl ParameterRanges {
    /// The reference configuration's ranges and constants
    pub fn standard() -> Self {
        ParameterRanges {
            span_m: ParameterRange {
                min: 1.0,
                max: 10.0,
                step: 0.1,
                default: 5.0,
            },
            load_kn_per_m: ParameterRange {
                min: 1.0,
                max: 20.0,
                step: 0.1,
                default: 10.0,
            },
            width_m: ParameterRange {
                min: 0.1,
                max: 0.5,
                step: 0.01,
                default: 0.2,
            },
            height_m: ParameterRange {
                min: 0.1,
                max: 0.5,
                step: 0.01,
                default: 0.4,
            },
            e_kpa: 210e6,
            g_kpa: 84e6,
            shear_factor: 5.0 / 6.0,
        }
    }
}

impl Default for ParameterRanges {
    fn default() -> Self {
        ParameterRanges::standard()
    }
}
