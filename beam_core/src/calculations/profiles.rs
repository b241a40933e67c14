//! # Beam Theory Profile Calculation
//!
//! Computes bending-stress and deflection profiles for a simply-supported
//! rectangular beam under a full-span uniform load, under two classical
//! theories:
//!
//! - **Euler-Bernoulli**: plane sections stay perpendicular to the beam
//!   axis. Linear bending stress, no shear stress, bending-only deflection.
//! - **Timoshenko**: sections may shear relative to the axis. Same bending
//!   stress, parabolic shear stress, and extra deflection from shear
//!   flexibility.
//!
//! ## Assumptions
//!
//! - Simply-supported (pin-roller) boundary conditions
//! - Single uniform load over the full span
//! - Solid rectangular cross-section
//! - Linear-elastic material
//!
//! ## Units
//!
//! The engine performs no unit conversion; supply a consistent set. Field
//! names document the reference convention: meters, kN/m, kPa (stresses
//! come out in kPa, deflections in meters).
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::profiles::{compute_profiles, BeamInput};
//!
//! let input = BeamInput::default(); // 5 m span, 10 kN/m, 200x400 section
//! let profiles = compute_profiles(&input).unwrap();
//!
//! // Bernoulli theory carries no shear stress
//! assert!(profiles.bernoulli_stress.tau_xy_kpa.iter().all(|&t| t == 0.0));
//!
//! // Shear flexibility deepens the Timoshenko sag at midspan
//! let mid = input.sample_points / 2;
//! assert!(profiles.timoshenko_deflection.w_m[mid] < profiles.bernoulli_deflection.w_m[mid]);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::beam::{
    bending_stress, parabolic_shear_stress, shear_deflection_correction,
    uniform_load_deflection, uniform_load_max_moment, uniform_load_max_shear,
};
use crate::equations::section::{
    rectangular_area, rectangular_first_moment, rectangular_moment_of_inertia,
};
use crate::errors::{BeamError, BeamResult};

/// Default number of samples per profile
pub const DEFAULT_SAMPLE_POINTS: usize = 100;

/// Shear correction factor for a solid rectangular section
pub const RECTANGULAR_SHEAR_FACTOR: f64 = 5.0 / 6.0;

/// Input parameters for the profile calculation.
///
/// All fields are plain numbers in a consistent unit set (reference
/// convention: m, kN/m, kPa). `Default` reproduces the reference beam:
/// 5 m span, 10 kN/m load, 200x400 mm section, E = 210 GPa, G = 84 GPa.
///
/// ## JSON Example
///
/// ```json
/// {
///   "span_m": 5.0,
///   "load_kn_per_m": 10.0,
///   "width_m": 0.2,
///   "height_m": 0.4,
///   "e_kpa": 210000000.0,
///   "g_kpa": 84000000.0,
///   "shear_factor": 0.8333333333333334,
///   "sample_points": 100
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BeamInput {
    /// Span length L (m)
    pub span_m: f64,
    /// Uniform load intensity q (kN/m), positive downward
    pub load_kn_per_m: f64,
    /// Section width b (m)
    pub width_m: f64,
    /// Section height h (m)
    pub height_m: f64,
    /// Young's modulus E (kPa)
    pub e_kpa: f64,
    /// Shear modulus G (kPa)
    pub g_kpa: f64,
    /// Shear correction factor k (dimensionless, 5/6 for rectangles)
    pub shear_factor: f64,
    /// Number of samples per profile (minimum 2)
    pub sample_points: usize,
}

impl Default for BeamInput {
    fn default() -> Self {
        BeamInput {
            span_m: 5.0,
            load_kn_per_m: 10.0,
            width_m: 0.2,
            height_m: 0.4,
            e_kpa: 210e6,
            g_kpa: 84e6,
            shear_factor: RECTANGULAR_SHEAR_FACTOR,
            sample_points: DEFAULT_SAMPLE_POINTS,
        }
    }
}

impl BeamInput {
    /// Create an input with the given geometry and load, using the
    /// rectangular shear factor and default sampling
    pub fn new(span_m: f64, load_kn_per_m: f64, width_m: f64, height_m: f64, e_kpa: f64, g_kpa: f64) -> Self {
        BeamInput {
            span_m,
            load_kn_per_m,
            width_m,
            height_m,
            e_kpa,
            g_kpa,
            ..BeamInput::default()
        }
    }

    /// Validate all parameters against the closed-form model's constraints.
    ///
    /// Invalid input is surfaced, never clamped: a non-positive height is a
    /// caller bug, not something to silently repair.
    pub fn validate(&self) -> BeamResult<()> {
        for (field, value) in [
            ("span_m", self.span_m),
            ("load_kn_per_m", self.load_kn_per_m),
            ("width_m", self.width_m),
            ("height_m", self.height_m),
            ("e_kpa", self.e_kpa),
            ("g_kpa", self.g_kpa),
        ] {
            if !value.is_finite() {
                return Err(BeamError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be finite",
                ));
            }
            if value <= 0.0 {
                return Err(BeamError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be positive",
                ));
            }
        }
        if !self.shear_factor.is_finite() || self.shear_factor <= 0.0 || self.shear_factor > 1.0 {
            return Err(BeamError::invalid_input(
                "shear_factor",
                self.shear_factor.to_string(),
                "Shear correction factor must be in (0, 1]",
            ));
        }
        if self.sample_points < 2 {
            return Err(BeamError::invalid_input(
                "sample_points",
                self.sample_points.to_string(),
                "At least 2 sample points are required",
            ));
        }
        Ok(())
    }

    /// Moment of inertia I = bh³/12 (m⁴)
    pub fn moment_of_inertia_m4(&self) -> f64 {
        rectangular_moment_of_inertia(self.width_m, self.height_m)
    }

    /// Cross-sectional area A = bh (m²)
    pub fn area_m2(&self) -> f64 {
        rectangular_area(self.width_m, self.height_m)
    }

    /// Depth-to-span ratio h/L, the readout that signals when shear
    /// deformation matters (stocky beams, roughly h/L > 1/10)
    pub fn depth_to_span_ratio(&self) -> f64 {
        self.height_m / self.span_m
    }
}

/// Stress distribution across the section height under one theory.
///
/// Samples run bottom fiber to top fiber, y ∈ [-h/2, +h/2], strictly
/// increasing and symmetric about the centroid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionStressProfile {
    /// Height above the centroid (m)
    pub y_m: Vec<f64>,
    /// Bending normal stress σ_x at each height (kPa)
    pub sigma_x_kpa: Vec<f64>,
    /// Transverse shear stress τ_xy at each height (kPa)
    pub tau_xy_kpa: Vec<f64>,
}

/// Deflection curve along the span under one theory.
///
/// Samples run support to support, x ∈ [0, L] inclusive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpanDeflectionProfile {
    /// Position from the left support (m)
    pub x_m: Vec<f64>,
    /// Vertical deflection w at each position (m), negative downward
    pub w_m: Vec<f64>,
}

/// Full result set: both theories' stress and deflection profiles plus the
/// derived scalars behind them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BeamProfiles {
    /// Moment of inertia I (m⁴)
    pub moment_of_inertia_m4: f64,
    /// Peak bending moment M_max = qL²/8 (kN·m), at midspan
    pub max_moment_knm: f64,
    /// Peak shear force V_max = qL/2 (kN), at the supports
    pub max_shear_kn: f64,
    /// Depth-to-span ratio h/L
    pub depth_to_span_ratio: f64,

    /// Section stresses under Euler-Bernoulli theory
    pub bernoulli_stress: SectionStressProfile,
    /// Section stresses under Timoshenko theory
    pub timoshenko_stress: SectionStressProfile,
    /// Deflection curve under Euler-Bernoulli theory
    pub bernoulli_deflection: SpanDeflectionProfile,
    /// Deflection curve under Timoshenko theory
    pub timoshenko_deflection: SpanDeflectionProfile,
}

/// N evenly spaced samples over [start, end] inclusive
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let step = (end - start) / (n - 1) as f64;
    (0..n)
        .map(|i| {
            if i == n - 1 {
                end
            } else {
                start + step * i as f64
            }
        })
        .collect()
}

/// Compute stress and deflection profiles for both beam theories.
///
/// Pure function: same input, same output, no side effects. Fails with
/// [`BeamError::InvalidInput`] when any parameter violates
/// [`BeamInput::validate`]; otherwise every output array is finite.
pub fn compute_profiles(input: &BeamInput) -> BeamResult<BeamProfiles> {
    input.validate()?;

    let i = input.moment_of_inertia_m4();
    let area = input.area_m2();
    let m_max = uniform_load_max_moment(input.load_kn_per_m, input.span_m);
    let v_max = uniform_load_max_shear(input.load_kn_per_m, input.span_m);
    let n = input.sample_points;

    // Section stresses, sampled bottom fiber to top fiber
    let y_m = linspace(-input.height_m / 2.0, input.height_m / 2.0, n);
    let sigma_x_kpa: Vec<f64> = y_m.iter().map(|&y| bending_stress(m_max, y, i)).collect();

    // Bernoulli theory carries no shear stress; Timoshenko reports the
    // parabolic VQ/(Ib) distribution. Bending stress is shared: the
    // theories differ in kinematics, not in the linear stress law.
    let tau_bernoulli = vec![0.0; n];
    let tau_timoshenko: Vec<f64> = y_m
        .iter()
        .map(|&y| {
            let q_area = rectangular_first_moment(input.width_m, input.height_m, y);
            parabolic_shear_stress(v_max, q_area, i, input.width_m)
        })
        .collect();

    // Deflection curves, sampled support to support
    let x_m = linspace(0.0, input.span_m, n);
    let w_bernoulli: Vec<f64> = x_m
        .iter()
        .map(|&x| uniform_load_deflection(input.load_kn_per_m, input.span_m, x, input.e_kpa, i))
        .collect();
    let w_timoshenko: Vec<f64> = x_m
        .iter()
        .zip(&w_bernoulli)
        .map(|(&x, &w_b)| {
            w_b + shear_deflection_correction(
                input.load_kn_per_m,
                input.span_m,
                x,
                input.shear_factor,
                input.g_kpa,
                area,
            )
        })
        .collect();

    Ok(BeamProfiles {
        moment_of_inertia_m4: i,
        max_moment_knm: m_max,
        max_shear_kn: v_max,
        depth_to_span_ratio: input.depth_to_span_ratio(),
        bernoulli_stress: SectionStressProfile {
            y_m: y_m.clone(),
            sigma_x_kpa: sigma_x_kpa.clone(),
            tau_xy_kpa: tau_bernoulli,
        },
        timoshenko_stress: SectionStressProfile {
            y_m,
            sigma_x_kpa,
            tau_xy_kpa: tau_timoshenko,
        },
        bernoulli_deflection: SpanDeflectionProfile {
            x_m: x_m.clone(),
            w_m: w_bernoulli,
        },
        timoshenko_deflection: SpanDeflectionProfile {
            x_m,
            w_m: w_timoshenko,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-12 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    fn reference_input() -> BeamInput {
        BeamInput::default()
    }

    #[test]
    fn test_grid_shapes() {
        let profiles = compute_profiles(&reference_input()).unwrap();
        let n = reference_input().sample_points;

        assert_eq!(profiles.bernoulli_stress.y_m.len(), n);
        assert_eq!(profiles.bernoulli_stress.sigma_x_kpa.len(), n);
        assert_eq!(profiles.bernoulli_stress.tau_xy_kpa.len(), n);
        assert_eq!(profiles.timoshenko_stress.y_m.len(), n);
        assert_eq!(profiles.timoshenko_stress.sigma_x_kpa.len(), n);
        assert_eq!(profiles.timoshenko_stress.tau_xy_kpa.len(), n);
        assert_eq!(profiles.bernoulli_deflection.x_m.len(), n);
        assert_eq!(profiles.bernoulli_deflection.w_m.len(), n);
        assert_eq!(profiles.timoshenko_deflection.x_m.len(), n);
        assert_eq!(profiles.timoshenko_deflection.w_m.len(), n);
    }

    #[test]
    fn test_y_grid_symmetric_and_increasing() {
        let input = reference_input();
        let profiles = compute_profiles(&input).unwrap();
        let y = &profiles.bernoulli_stress.y_m;
        let n = y.len();

        assert!((y[0] + input.height_m / 2.0).abs() < EPSILON);
        assert!((y[n - 1] - input.height_m / 2.0).abs() < EPSILON);
        for pair in y.windows(2) {
            assert!(pair[1] > pair[0], "y grid must be strictly increasing");
        }
        // Symmetric about the centroid
        for i in 0..n {
            assert!((y[i] + y[n - 1 - i]).abs() < 1e-9, "y[{}] not mirrored", i);
        }
    }

    #[test]
    fn test_x_grid_spans_full_beam() {
        let input = reference_input();
        let profiles = compute_profiles(&input).unwrap();
        let x = &profiles.bernoulli_deflection.x_m;

        assert_eq!(x[0], 0.0);
        assert_eq!(x[x.len() - 1], input.span_m);
        for pair in x.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_derived_scalars_reference_beam() {
        // L=5, q=10, b=0.2, h=0.4:
        // I = 0.2*0.4³/12 = 0.0010667, M_max = 31.25, V_max = 25
        let profiles = compute_profiles(&reference_input()).unwrap();
        assert!(approx_eq(profiles.moment_of_inertia_m4, 0.0010666667, 1e-6));
        assert!(approx_eq(profiles.max_moment_knm, 31.25, 1e-12));
        assert!(approx_eq(profiles.max_shear_kn, 25.0, 1e-12));
        assert!(approx_eq(profiles.depth_to_span_ratio, 0.08, 1e-12));
    }

    #[test]
    fn test_bernoulli_shear_identically_zero() {
        let profiles = compute_profiles(&reference_input()).unwrap();
        assert!(profiles.bernoulli_stress.tau_xy_kpa.iter().all(|&t| t == 0.0));
    }

    #[test]
    fn test_normal_stress_odd_in_y() {
        // σ(-y) = -σ(y) for mirrored sample pairs, both theories
        let profiles = compute_profiles(&reference_input()).unwrap();
        for stress in [&profiles.bernoulli_stress, &profiles.timoshenko_stress] {
            let sigma = &stress.sigma_x_kpa;
            let n = sigma.len();
            for i in 0..n {
                assert!(
                    (sigma[i] + sigma[n - 1 - i]).abs() < 1e-6,
                    "σ[{}] = {}, σ[{}] = {}",
                    i,
                    sigma[i],
                    n - 1 - i,
                    sigma[n - 1 - i]
                );
            }
        }
    }

    #[test]
    fn test_normal_stress_strictly_monotonic() {
        // σ = -M·y/I with M > 0 is strictly decreasing in y
        let profiles = compute_profiles(&reference_input()).unwrap();
        for pair in profiles.bernoulli_stress.sigma_x_kpa.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_normal_stress_extreme_fiber_value() {
        // Bottom fiber (y = -h/2 = -0.2): σ = -31.25*(-0.2)/0.0010667 ≈ 5859.4 kPa
        let profiles = compute_profiles(&reference_input()).unwrap();
        let sigma_bottom = profiles.bernoulli_stress.sigma_x_kpa[0];
        assert!(approx_eq(sigma_bottom, 5859.375, 1e-6), "σ = {}", sigma_bottom);

        let sigma_timoshenko_bottom = profiles.timoshenko_stress.sigma_x_kpa[0];
        assert_eq!(sigma_bottom, sigma_timoshenko_bottom);
    }

    #[test]
    fn test_normal_stress_zero_at_centroid() {
        // Use an odd sample count so a sample lands exactly on y = 0
        let input = BeamInput {
            sample_points: 101,
            ..reference_input()
        };
        let profiles = compute_profiles(&input).unwrap();
        assert!(profiles.bernoulli_stress.sigma_x_kpa[50].abs() < 1e-9);
        assert!(profiles.timoshenko_stress.sigma_x_kpa[50].abs() < 1e-9);
    }

    #[test]
    fn test_timoshenko_shear_parabolic_shape() {
        let input = BeamInput {
            sample_points: 101,
            ..reference_input()
        };
        let profiles = compute_profiles(&input).unwrap();
        let tau = &profiles.timoshenko_stress.tau_xy_kpa;

        // Zero at the extreme fibers
        assert!(tau[0].abs() < 1e-9, "τ(-h/2) = {}", tau[0]);
        assert!(tau[100].abs() < 1e-9, "τ(+h/2) = {}", tau[100]);

        // Maximum at the centroid sample, equal to 1.5·V/A = 468.75 kPa
        let max = tau.iter().cloned().fold(f64::MIN, f64::max);
        assert!(approx_eq(tau[50], max, 1e-12));
        assert!(approx_eq(tau[50], 468.75, 1e-9), "τ(0) = {}", tau[50]);
    }

    #[test]
    fn test_deflection_zero_at_both_supports() {
        let profiles = compute_profiles(&reference_input()).unwrap();
        for curve in [&profiles.bernoulli_deflection, &profiles.timoshenko_deflection] {
            let w = &curve.w_m;
            assert!(w[0].abs() < EPSILON, "w(0) = {}", w[0]);
            assert!(w[w.len() - 1].abs() < EPSILON, "w(L) = {}", w[w.len() - 1]);
        }
    }

    #[test]
    fn test_bernoulli_midspan_deflection() {
        // w(L/2) = -5qL⁴/(384EI) = -5*10*625/(384*210e6*0.0010667) ≈ -3.6324e-4 m
        let input = BeamInput {
            sample_points: 101,
            ..reference_input()
        };
        let profiles = compute_profiles(&input).unwrap();
        let w_mid = profiles.bernoulli_deflection.w_m[50];
        let expected = -5.0 * 10.0 * 625.0 / (384.0 * 210e6 * input.moment_of_inertia_m4());
        assert!(approx_eq(w_mid, expected, 1e-9), "w = {} (expected {})", w_mid, expected);
        assert!(w_mid < 0.0, "midspan should sag downward");
    }

    #[test]
    fn test_timoshenko_sags_deeper_everywhere_inside_span() {
        let profiles = compute_profiles(&reference_input()).unwrap();
        let w_b = &profiles.bernoulli_deflection.w_m;
        let w_t = &profiles.timoshenko_deflection.w_m;
        let n = w_b.len();

        for i in 1..n - 1 {
            assert!(w_t[i] < w_b[i], "at sample {}: {} vs {}", i, w_t[i], w_b[i]);
        }
    }

    #[test]
    fn test_timoshenko_midspan_correction_value() {
        // Δw(L/2) = -qL³/(8kGA) = -10*125/(8*(5/6)*84e6*0.08) ≈ -2.790e-5 m
        let input = BeamInput {
            sample_points: 101,
            ..reference_input()
        };
        let profiles = compute_profiles(&input).unwrap();
        let delta = profiles.timoshenko_deflection.w_m[50] - profiles.bernoulli_deflection.w_m[50];
        let expected = -10.0 * 125.0 / (8.0 * input.shear_factor * 84e6 * 0.08);
        assert!(approx_eq(delta, expected, 1e-9), "Δw = {} (expected {})", delta, expected);
    }

    #[test]
    fn test_minimum_sample_count() {
        let input = BeamInput {
            sample_points: 2,
            ..reference_input()
        };
        let profiles = compute_profiles(&input).unwrap();
        assert_eq!(profiles.bernoulli_stress.y_m.len(), 2);
        assert_eq!(profiles.bernoulli_deflection.x_m[1], input.span_m);
    }

    #[test]
    fn test_all_outputs_finite() {
        let profiles = compute_profiles(&reference_input()).unwrap();
        let all = profiles
            .bernoulli_stress
            .sigma_x_kpa
            .iter()
            .chain(&profiles.timoshenko_stress.tau_xy_kpa)
            .chain(&profiles.bernoulli_deflection.w_m)
            .chain(&profiles.timoshenko_deflection.w_m);
        assert!(all.into_iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_idempotence() {
        let input = reference_input();
        let first = compute_profiles(&input).unwrap();
        let second = compute_profiles(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_non_positive_parameters() {
        let cases: Vec<(&str, BeamInput)> = vec![
            ("span_m", BeamInput { span_m: 0.0, ..reference_input() }),
            ("span_m", BeamInput { span_m: -5.0, ..reference_input() }),
            ("load_kn_per_m", BeamInput { load_kn_per_m: 0.0, ..reference_input() }),
            ("width_m", BeamInput { width_m: -0.2, ..reference_input() }),
            ("height_m", BeamInput { height_m: 0.0, ..reference_input() }),
            ("e_kpa", BeamInput { e_kpa: 0.0, ..reference_input() }),
            ("g_kpa", BeamInput { g_kpa: -84e6, ..reference_input() }),
        ];

        for (field, input) in cases {
            match compute_profiles(&input) {
                Err(BeamError::InvalidInput { field: f, .. }) => assert_eq!(f, field),
                other => panic!("{} should be rejected, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_rejects_bad_shear_factor() {
        for bad in [0.0, -0.5, 1.5, f64::NAN] {
            let input = BeamInput {
                shear_factor: bad,
                ..reference_input()
            };
            assert!(compute_profiles(&input).is_err(), "k = {} accepted", bad);
        }
        // Exactly 1.0 is the upper bound, still valid
        let input = BeamInput {
            shear_factor: 1.0,
            ..reference_input()
        };
        assert!(compute_profiles(&input).is_ok());
    }

    #[test]
    fn test_rejects_non_finite_parameters() {
        for bad in [f64::NAN, f64::INFINITY] {
            let input = BeamInput {
                e_kpa: bad,
                ..reference_input()
            };
            assert!(compute_profiles(&input).is_err());
        }
    }

    #[test]
    fn test_rejects_too_few_samples() {
        for n in [0, 1] {
            let input = BeamInput {
                sample_points: n,
                ..reference_input()
            };
            match compute_profiles(&input) {
                Err(BeamError::InvalidInput { field, .. }) => assert_eq!(field, "sample_points"),
                other => panic!("N = {} should be rejected, got {:?}", n, other),
            }
        }
    }

    #[test]
    fn test_json_round_trip() {
        let profiles = compute_profiles(&reference_input()).unwrap();
        let json = serde_json::to_string(&profiles).unwrap();
        let roundtrip: BeamProfiles = serde_json::from_str(&json).unwrap();
        assert_eq!(profiles, roundtrip);
    }
}
