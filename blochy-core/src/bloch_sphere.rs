//! Bloch sphere geometry for single-qubit states
//!
//! Any pure single-qubit state can be written as:
//!
//! |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩
//!
//! where θ ∈ [0, π] and φ ∈ [0, 2π) define a point on the unit sphere.
//!
//! The amplitude → vector direction is exact. The vector → amplitude direction
//! is lossy: a Bloch vector carries no global phase, so
//! [`bloch_to_amplitudes`] always returns a real, non-negative `alpha`. Use it
//! for display only and keep the amplitudes as ground truth.
//!
//! # Example
//!
//! ```
//! use blochy_core::bloch_sphere::{amplitudes_to_bloch, BlochVector};
//! use num_complex::Complex64;
//!
//! // |0⟩ state points to north pole
//! let bloch = amplitudes_to_bloch(Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0));
//! assert!((bloch.z - 1.0).abs() < 1e-10);
//!
//! // |+⟩ state points along +x axis
//! let h = 1.0 / 2.0_f64.sqrt();
//! let bloch = amplitudes_to_bloch(Complex64::new(h, 0.0), Complex64::new(h, 0.0));
//! assert!((bloch.x - 1.0).abs() < 1e-10);
//! ```

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Convert an amplitude pair to its Bloch vector
///
/// x = ⟨σ_x⟩ = 2Re(α*β), y = ⟨σ_y⟩ = 2Im(α*β), z = ⟨σ_z⟩ = |α|² - |β|²
pub fn amplitudes_to_bloch(alpha: Complex64, beta: Complex64) -> BlochVector {
    let alpha_conj_beta = alpha.conj() * beta;

    BlochVector {
        x: 2.0 * alpha_conj_beta.re,
        y: 2.0 * alpha_conj_beta.im,
        z: alpha.norm_sqr() - beta.norm_sqr(),
    }
}

/// Convert a Bloch vector back to an amplitude pair `[α, β]`
///
/// Global phase is not recoverable, so the result is the representative with
/// real, non-negative α.
pub fn bloch_to_amplitudes(vector: &BlochVector) -> [Complex64; 2] {
    vector.to_angles().to_amplitudes()
}

/// A point on the Bloch sphere represented in Cartesian coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    /// X coordinate (-1 to 1)
    pub x: f64,
    /// Y coordinate (-1 to 1)
    pub y: f64,
    /// Z coordinate (-1 to 1), where +Z is |0⟩ and -Z is |1⟩
    pub z: f64,
}

/// Bloch sphere angles (spherical coordinates)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π]
    pub theta: f64,
    /// Azimuthal angle φ ∈ [0, 2π)
    pub phi: f64,
}

impl BlochVector {
    /// North pole, the |0⟩ state
    pub const ZERO_STATE: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a Bloch vector from Cartesian coordinates
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Components as an array, handy for plotting collaborators
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Convert Bloch vector to spherical coordinates
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();

        if r < 1e-10 {
            return BlochAngles {
                theta: 0.0,
                phi: 0.0,
            };
        }

        let theta = (self.z / r).clamp(-1.0, 1.0).acos();

        let phi = self.y.atan2(self.x);
        let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };

        BlochAngles { theta, phi }
    }

    /// Get the magnitude of the Bloch vector
    ///
    /// Pure states sit on the surface (magnitude 1.0).
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Check if this represents a pure state (magnitude ≈ 1.0)
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() < tolerance
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean distance to another vector
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Fidelity between the pure states at the two points, (1 + a·b) / 2
    pub fn fidelity(&self, other: &Self) -> f64 {
        (1.0 + self.dot(other)) / 2.0
    }

    /// Get a description of the state
    pub fn describe(&self) -> String {
        let mag = self.magnitude();
        let angles = self.to_angles();

        let mut desc = String::new();
        desc.push_str(&format!("Bloch Vector: ({:.4}, {:.4}, {:.4})\n", self.x, self.y, self.z));
        desc.push_str(&format!("Magnitude: {:.4}\n", mag));
        desc.push_str(&format!(
            "Angles: θ={:.2}π, φ={:.2}π\n",
            angles.theta / PI,
            angles.phi / PI
        ));

        if let Some(name) = self.named_state() {
            desc.push_str(&format!("State: {}\n", name));
        }

        desc
    }

    /// Name of the cardinal state this vector points to, if any
    pub fn named_state(&self) -> Option<&'static str> {
        const TOL: f64 = 0.01;
        let on_equator = self.z.abs() < TOL;

        if (self.z - 1.0).abs() < TOL {
            Some("|0⟩ (north pole)")
        } else if (self.z + 1.0).abs() < TOL {
            Some("|1⟩ (south pole)")
        } else if on_equator && (self.x - 1.0).abs() < TOL {
            Some("|+⟩ (east pole)")
        } else if on_equator && (self.x + 1.0).abs() < TOL {
            Some("|−⟩ (west pole)")
        } else if on_equator && (self.y - 1.0).abs() < TOL {
            Some("|+i⟩ (front pole)")
        } else if on_equator && (self.y + 1.0).abs() < TOL {
            Some("|−i⟩ (back pole)")
        } else {
            None
        }
    }
}

impl Default for BlochVector {
    fn default() -> Self {
        Self::ZERO_STATE
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlochVector({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

impl BlochAngles {
    /// Create angles from θ and φ in radians
    pub const fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Convert spherical coordinates to a Bloch vector
    pub fn to_vector(&self) -> BlochVector {
        let x = self.theta.sin() * self.phi.cos();
        let y = self.theta.sin() * self.phi.sin();
        let z = self.theta.cos();
        BlochVector { x, y, z }
    }

    /// Convert to quantum state coefficients
    ///
    /// Returns [α, β] where |ψ⟩ = α|0⟩ + β|1⟩
    pub fn to_amplitudes(&self) -> [Complex64; 2] {
        let half = self.theta / 2.0;
        let alpha = Complex64::new(half.cos(), 0.0);
        let beta = Complex64::from_polar(half.sin(), self.phi);
        [alpha, beta]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_zero_state() {
        let bloch = amplitudes_to_bloch(c(1.0, 0.0), c(0.0, 0.0));

        assert!((bloch.x).abs() < 1e-10);
        assert!((bloch.y).abs() < 1e-10);
        assert!((bloch.z - 1.0).abs() < 1e-10);
        assert!(bloch.is_pure(1e-10));
    }

    #[test]
    fn test_one_state() {
        let bloch = amplitudes_to_bloch(c(0.0, 0.0), c(1.0, 0.0));

        assert!((bloch.z + 1.0).abs() < 1e-10);
        assert!(bloch.is_pure(1e-10));
    }

    #[test]
    fn test_minus_state() {
        let bloch = amplitudes_to_bloch(c(INV_SQRT2, 0.0), c(-INV_SQRT2, 0.0));

        assert!((bloch.x + 1.0).abs() < 1e-10);
        assert!((bloch.y).abs() < 1e-10);
        assert!((bloch.z).abs() < 1e-10);
    }

    #[test]
    fn test_plus_i_state() {
        let bloch = amplitudes_to_bloch(c(INV_SQRT2, 0.0), c(0.0, INV_SQRT2));

        assert!((bloch.x).abs() < 1e-10);
        assert!((bloch.y - 1.0).abs() < 1e-10);
        assert!((bloch.z).abs() < 1e-10);
    }

    #[test]
    fn test_global_phase_is_invisible() {
        let phase = Complex64::from_polar(1.0, 0.7);
        let a = amplitudes_to_bloch(c(0.6, 0.0), c(0.0, 0.8));
        let b = amplitudes_to_bloch(c(0.6, 0.0) * phase, c(0.0, 0.8) * phase);

        assert!(a.distance(&b) < 1e-12);
    }

    #[test]
    fn test_angles_conversion() {
        let vector = BlochAngles::new(PI / 2.0, 0.0).to_vector();

        assert!((vector.x - 1.0).abs() < 1e-10);
        assert!((vector.y).abs() < 1e-10);
        assert!((vector.z).abs() < 1e-10);
    }

    #[test]
    fn test_negative_azimuth_wraps() {
        let angles = BlochVector::new(0.0, -1.0, 0.0).to_angles();
        assert!((angles.phi - 1.5 * PI).abs() < 1e-10);
    }

    #[test]
    fn test_bloch_to_amplitudes_drops_phase() {
        // i|1⟩ and |1⟩ share a Bloch vector; the inverse picks the real representative
        let v = amplitudes_to_bloch(c(0.0, 0.0), c(0.0, 1.0));
        let [alpha, beta] = bloch_to_amplitudes(&v);

        assert!(alpha.im.abs() < 1e-12);
        assert!(alpha.re >= 0.0);
        assert!((beta.norm() - 1.0).abs() < 1e-10);
        assert!(amplitudes_to_bloch(alpha, beta).distance(&v) < 1e-10);
    }

    #[test]
    fn test_fidelity() {
        let north = BlochVector::ZERO_STATE;
        let south = BlochVector::new(0.0, 0.0, -1.0);
        let east = BlochVector::new(1.0, 0.0, 0.0);

        assert!((north.fidelity(&north) - 1.0).abs() < 1e-12);
        assert!(north.fidelity(&south).abs() < 1e-12);
        assert!((north.fidelity(&east) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_describe_names_pole() {
        let desc = BlochVector::new(-1.0, 0.0, 0.0).describe();
        assert!(desc.contains("|−⟩"));
        assert!(BlochVector::new(0.5, 0.5, 0.7).named_state().is_none());
    }
}
