//! Single-qubit rotation operators
//!
//! Every state change in the engine is a rotation about some unit axis `n`:
//!
//! R(n, θ) = exp(-iθ(n·σ)/2) = cos(θ/2)·I − i·sin(θ/2)·(n·σ)
//!
//! Operators are plain row-major `[[Complex64; 2]; 2]` matrices.

use crate::{BlochyError, Result};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;

/// A 2x2 single-qubit operator in row-major order
pub type Operator = [[Complex64; 2]; 2];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

/// Identity
pub const IDENTITY: Operator = [[ONE, ZERO], [ZERO, ONE]];

/// Pauli-X
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: Operator = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: Operator = [[ZERO, NEG_I], [I, ZERO]];

/// Pauli-Z
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: Operator = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// Rotation axis selector
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
    /// Arbitrary direction; normalized before use
    Vector([f64; 3]),
}

impl Axis {
    /// Hadamard axis, (x + z)/√2
    pub const HADAMARD: Self = Self::Vector([FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2]);

    /// Resolve to a unit axis
    ///
    /// # Errors
    /// Returns [`BlochyError::InvalidAxis`] for a zero-length or non-finite vector
    pub fn unit(&self) -> Result<UnitAxis> {
        match *self {
            Self::X => Ok(UnitAxis::X),
            Self::Y => Ok(UnitAxis::Y),
            Self::Z => Ok(UnitAxis::Z),
            Self::Vector(v) => UnitAxis::new(v[0], v[1], v[2]),
        }
    }

    /// Parse `"x"`, `"y"` or `"z"` (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "x" => Some(Self::X),
            "y" => Some(Self::Y),
            "z" => Some(Self::Z),
            _ => None,
        }
    }
}

/// A normalized rotation axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitAxis([f64; 3]);

impl UnitAxis {
    pub const X: Self = Self([1.0, 0.0, 0.0]);
    pub const Y: Self = Self([0.0, 1.0, 0.0]);
    pub const Z: Self = Self([0.0, 0.0, 1.0]);
    /// (x + z)/√2
    pub const HADAMARD: Self = Self([FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2]);

    /// Normalize `(x, y, z)` into a unit axis
    ///
    /// Components are scaled by the largest magnitude first, so any finite
    /// non-zero direction normalizes without overflow.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        let scale = x.abs().max(y.abs()).max(z.abs());
        if !(x.is_finite() && y.is_finite() && z.is_finite()) || scale < 1e-12 {
            return Err(BlochyError::InvalidAxis(x, y, z));
        }
        let [sx, sy, sz] = [x / scale, y / scale, z / scale];
        let norm = (sx * sx + sy * sy + sz * sz).sqrt();
        Ok(Self([sx / norm, sy / norm, sz / norm]))
    }


    /// Components of the unit axis
    #[inline]
    pub const fn components(&self) -> [f64; 3] {
        self.0
    }
}

/// Build a unit axis from spherical angles
///
/// `polar` is measured from +Z, `azimuth` from +X toward +Y, both in radians.
///
/// # Errors
/// Returns [`BlochyError::InvalidAngle`] if either angle is not finite
pub fn axis_from_spherical(polar: f64, azimuth: f64) -> Result<UnitAxis> {
    let polar = BlochyError::ensure_finite("polar angle", polar)?;
    let azimuth = BlochyError::ensure_finite("azimuth angle", azimuth)?;

    UnitAxis::new(
        polar.sin() * azimuth.cos(),
        polar.sin() * azimuth.sin(),
        polar.cos(),
    )
}

/// Build the rotation operator R(n, θ) for a unit axis
#[inline]
pub fn rotation_operator(axis: &UnitAxis, angle: f64) -> Operator {
    let [nx, ny, nz] = axis.components();
    let half = angle / 2.0;
    let c = half.cos();
    let s = half.sin();

    [
        [Complex64::new(c, -s * nz), Complex64::new(-s * ny, -s * nx)],
        [Complex64::new(s * ny, -s * nx), Complex64::new(c, s * nz)],
    ]
}

/// Build the rotation operator for an axis selector and angle
///
/// # Errors
/// Returns [`BlochyError::InvalidAngle`] for a non-finite angle and
/// [`BlochyError::InvalidAxis`] for a degenerate axis vector
pub fn build_rotation_operator(axis: Axis, angle: f64) -> Result<Operator> {
    let angle = BlochyError::ensure_finite("rotation angle", angle)?;
    Ok(rotation_operator(&axis.unit()?, angle))
}

/// Apply a 2x2 operator to an amplitude pair
#[inline]
pub fn apply_operator(op: &Operator, amplitudes: [Complex64; 2]) -> [Complex64; 2] {
    let [a, b] = amplitudes;
    [op[0][0] * a + op[0][1] * b, op[1][0] * a + op[1][1] * b]
}

/// Multiply two operators, `a · b`
pub fn compose(a: &Operator, b: &Operator) -> Operator {
    let mut result = [[ZERO; 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

/// Check unitarity: U†U ≈ I
pub fn is_unitary(op: &Operator, tolerance: f64) -> bool {
    let adjoint = [
        [op[0][0].conj(), op[1][0].conj()],
        [op[0][1].conj(), op[1][1].conj()],
    ];
    let product = compose(&adjoint, op);

    (0..2).all(|i| (0..2).all(|j| (product[i][j] - IDENTITY[i][j]).norm() <= tolerance))
}
