//! # Simply-Supported Beam Formulas
//!
//! Closed-form equations for a simply-supported beam carrying a uniform
//! load over its full span, with pin support at left (x=0) and roller at
//! right (x=L). These cover both beam theories used by the profile
//! calculation: Euler-Bernoulli (bending only) and Timoshenko (bending
//! plus shear flexibility).
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `x` = Position along beam from left support
//! - `q` = Uniform load intensity (force per unit length)
//! - `M` = Bending moment
//! - `V` = Shear force
//! - `w` = Vertical deflection
//! - `E` = Modulus of elasticity
//! - `G` = Shear modulus
//! - `I` = Moment of inertia
//! - `k` = Shear correction factor (5/6 for rectangular sections)
//! - `y` = Height above the section centroid
//!
//! ## Sign Conventions
//!
//! - Load: Positive downward
//! - Moment: Positive causes tension on bottom fiber (sagging)
//! - Normal stress: Negative in compression, so the top fiber of a sagging
//!   beam carries negative stress
//! - Deflection: Negative downward (a sagging beam deflects negative)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - Timoshenko, Strength of Materials, Part I

// =============================================================================
// INTERNAL FORCE FORMULAS
// Uniform load w over the entire span
// =============================================================================

/// Maximum bending moment for uniform load q over full span L
///
/// ```text
///    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ q
///    ═════════════════
///    △                △
///       ←─────L─────→
/// ```
///
/// # Formula (Roark's Table 8.1, Case 2a)
/// M_max = qL²/8   at x = L/2
#[inline]
pub fn uniform_load_max_moment(q: f64, l: f64) -> f64 {
    q * l * l / 8.0
}

/// Maximum shear force for uniform load q over full span L
///
/// # Formula
/// V_max = qL/2   at the supports
#[inline]
pub fn uniform_load_max_shear(q: f64, l: f64) -> f64 {
    q * l / 2.0
}

// =============================================================================
// STRESS DISTRIBUTION FORMULAS
// =============================================================================

/// Bending normal stress at height y for moment m
///
/// Linear stress law of engineering beam theory. A positive (sagging)
/// moment compresses the top fiber, so stress is negative for y > 0.
///
/// # Formula
/// σ_x(y) = −M·y / I
///
/// # Example
/// ```rust
/// use beam_core::equations::beam::bending_stress;
///
/// let i = 0.2 * 0.4_f64.powi(3) / 12.0;
/// // Bottom fiber of a sagging beam is in tension (positive)
/// let sigma = bending_stress(31.25, -0.2, i);
/// assert!((sigma - 5859.375).abs() < 1e-6);
/// ```
#[inline]
pub fn bending_stress(m: f64, y: f64, i: f64) -> f64 {
    -m * y / i
}

/// Transverse shear stress at height y from the first-moment-of-area rule
///
/// The classical parabolic distribution τ = VQ/(Ib): zero at the extreme
/// fibers and maximal at the neutral axis. Euler-Bernoulli theory ignores
/// this stress entirely; Timoshenko theory reports it.
///
/// # Formula
/// τ_xy(y) = V·Q(y) / (I·b)
///
/// where Q(y) is the first moment of the area beyond y, see
/// [`crate::equations::section::rectangular_first_moment`].
#[inline]
pub fn parabolic_shear_stress(v: f64, q_area: f64, i: f64, b: f64) -> f64 {
    v * q_area / (i * b)
}

// =============================================================================
// DEFLECTION FORMULAS
// =============================================================================

/// Euler-Bernoulli deflection at position x for uniform load q
///
/// # Formula (Roark's Table 8.1, Case 2a, sign flipped so sag is negative)
/// w(x) = −q·x(L³ − 2Lx² + x³) / (24EI)
///
/// Zero at both supports; extreme value at midspan:
/// w(L/2) = −5qL⁴ / (384EI)
#[inline]
pub fn uniform_load_deflection(q: f64, l: f64, x: f64, e: f64, i: f64) -> f64 {
    -q * x * (l.powi(3) - 2.0 * l * x * x + x.powi(3)) / (24.0 * e * i)
}

/// Additional deflection from shear flexibility at position x
///
/// Timoshenko theory lets the cross-section shear relative to the beam
/// axis, adding flexibility that Euler-Bernoulli theory ignores. This is
/// the simplified shear addendum for a uniform load on a rectangular
/// section of area A = b·h:
///
/// # Formula
/// Δw(x) = qL²·x / (2kGA) · (x − L)/L
///
/// The term vanishes at both supports (x = 0 and x = L) and is most
/// negative at midspan, where it deepens the sag:
/// Δw(L/2) = −qL³ / (8kGA)
#[inline]
pub fn shear_deflection_correction(q: f64, l: f64, x: f64, k: f64, g: f64, area: f64) -> f64 {
    (q * l * l * x / (2.0 * k * g * area)) * (x - l) / l
}

// =============================================================================
// UNIT TESTS
// =============================================================================
