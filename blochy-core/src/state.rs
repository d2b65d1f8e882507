//! Normalized single-qubit state

use crate::bloch_sphere::{amplitudes_to_bloch, BlochVector};
use crate::rotation::{apply_operator, rotation_operator, Operator, UnitAxis};
use crate::{BlochyError, Result};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance for the normalization invariant
pub const NORM_TOLERANCE: f64 = 1e-6;

/// An immutable single-qubit state α|0⟩ + β|1⟩ with |α|² + |β|² = 1
///
/// # Example
/// ```
/// use blochy_core::QuantumState;
/// use num_complex::Complex64;
///
/// let state = QuantumState::new(Complex64::new(3.0, 0.0), Complex64::new(0.0, 4.0)).unwrap();
/// assert!((state.norm_sqr() - 1.0).abs() < 1e-12);
/// assert!((state.alpha().re - 0.6).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuantumState {
    alpha: Complex64,
    beta: Complex64,
}

impl QuantumState {
    /// The |0⟩ state
    pub const ZERO: Self = Self {
        alpha: Complex64::new(1.0, 0.0),
        beta: Complex64::new(0.0, 0.0),
    };

    /// The |1⟩ state
    pub const ONE: Self = Self {
        alpha: Complex64::new(0.0, 0.0),
        beta: Complex64::new(1.0, 0.0),
    };

    /// Create a state from amplitudes, normalizing them
    ///
    /// # Errors
    /// Returns [`BlochyError::InvalidAngle`] if the amplitudes are non-finite
    /// or have zero norm, since no rotation can produce such a vector
    pub fn new(alpha: Complex64, beta: Complex64) -> Result<Self> {
        let norm = (alpha.norm_sqr() + beta.norm_sqr()).sqrt();
        if !norm.is_finite() || norm < 1e-12 {
            return Err(BlochyError::invalid_angle("state norm", norm));
        }
        Ok(Self {
            alpha: alpha / norm,
            beta: beta / norm,
        })
    }

    /// Amplitude of |0⟩
    #[inline]
    pub const fn alpha(&self) -> Complex64 {
        self.alpha
    }

    /// Amplitude of |1⟩
    #[inline]
    pub const fn beta(&self) -> Complex64 {
        self.beta
    }

    /// Both amplitudes as `[α, β]`
    #[inline]
    pub const fn amplitudes(&self) -> [Complex64; 2] {
        [self.alpha, self.beta]
    }

    /// |α|² + |β|²
    pub fn norm_sqr(&self) -> f64 {
        self.alpha.norm_sqr() + self.beta.norm_sqr()
    }

    /// Check the normalization invariant within [`NORM_TOLERANCE`]
    pub fn is_normalized(&self) -> bool {
        (self.norm_sqr() - 1.0).abs() <= NORM_TOLERANCE
    }

    /// Probability of measuring |0⟩
    pub fn probability_zero(&self) -> f64 {
        self.alpha.norm_sqr()
    }

    /// Probability of measuring |1⟩
    pub fn probability_one(&self) -> f64 {
        self.beta.norm_sqr()
    }

    /// Bloch vector of this state, recomputed on every call
    pub fn bloch_vector(&self) -> BlochVector {
        amplitudes_to_bloch(self.alpha, self.beta)
    }

    /// Apply an operator, producing a new renormalized state
    ///
    /// # Errors
    /// Returns [`BlochyError::InvalidAngle`] if the operator maps this state
    /// to a zero or non-finite vector
    pub fn evolve(&self, op: &Operator) -> Result<Self> {
        let [alpha, beta] = apply_operator(op, self.amplitudes());
        Self::new(alpha, beta)
    }

    /// Rotate by `angle` about `axis`
    ///
    /// Rotations are unitary, so the result only needs rounding drift removed.
    pub fn rotated(&self, axis: &UnitAxis, angle: f64) -> Self {
        let [alpha, beta] = apply_operator(&rotation_operator(axis, angle), self.amplitudes());
        let norm = (alpha.norm_sqr() + beta.norm_sqr()).sqrt();
        Self {
            alpha: alpha / norm,
            beta: beta / norm,
        }
    }
}

impl Default for QuantumState {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4}{:+.4}i)|0⟩ + ({:.4}{:+.4}i)|1⟩",
            self.alpha.re, self.alpha.im, self.beta.re, self.beta.im
        )
    }
}
