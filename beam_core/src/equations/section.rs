//! # Cross-Section Property Formulas
//!
//! Geometric properties of a solid rectangular cross-section. These
//! properties feed the bending-stress and shear-stress distributions.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia (second moment of area)
//! - `Q` = First moment of the area beyond a given height
//! - `b` = Width of section
//! - `h` = Height (depth) of section
//! - `y` = Height above the centroid, y ∈ [-h/2, +h/2]
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 3

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// Solid rectangular cross-section
// =============================================================================

/// Calculate cross-sectional area for a rectangular section
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × h
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_area;
///
/// let area = rectangular_area(0.2, 0.4);
/// assert!((area - 0.08).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Calculate moment of inertia for a rectangular section about its
/// centroidal axis
///
/// The moment of inertia (second moment of area) measures the section's
/// resistance to bending:
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ════════│ ← neutral axis at h/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bh³/12
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_moment_of_inertia;
///
/// // 200 x 400 mm section
/// let i = rectangular_moment_of_inertia(0.2, 0.4);
/// // I = 0.2 × 0.4³ / 12 = 1.0667e-3 m⁴
/// assert!((i - 1.0667e-3).abs() < 1e-7);
/// ```
///
/// # Reference
/// - Roark's Formulas, Table 3.1
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Calculate the first moment of area beyond height y for a rectangular
/// section
///
/// Q(y) is the first moment, about the neutral axis, of the part of the
/// section above the cut at height y. It drives the parabolic shear-stress
/// distribution τ = VQ/(Ib):
///
/// ```text
///     ┌─────────┐  ← +h/2
///     │/////////│     area whose first moment is Q(y)
///     ├─────────┤  ← cut at y
///     │═════════│  ← neutral axis (y = 0)
///     └─────────┘  ← -h/2
/// ```
///
/// # Formula
/// Q(y) = b(h²/4 − y²)/2
///
/// Q is zero at the extreme fibers (y = ±h/2) and maximal at the
/// neutral axis: Q(0) = bh²/8.
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_first_moment;
///
/// let q0 = rectangular_first_moment(0.2, 0.4, 0.0);
/// // Q(0) = bh²/8 = 0.2 × 0.16 / 8 = 0.004 m³
/// assert!((q0 - 0.004).abs() < 1e-12);
///
/// let q_edge = rectangular_first_moment(0.2, 0.4, 0.2);
/// assert!(q_edge.abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_first_moment(b: f64, h: f64, y: f64) -> f64 {
    b * (h * h / 4.0 - y * y) / 2.0
}

// =============================================================================
// UNIT TESTS
// =============================================================================
