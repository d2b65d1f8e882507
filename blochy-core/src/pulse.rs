//! Resonant drive pulses and Rabi oscillations
//!
//! A pulse of duration `t` about X or Y evolves the state by
//! exp(-i·t·σ/2), the same operator as a rotation by angle `t`. The pulse
//! flavour differs only in its accepted range and in how densely the phosphor
//! trail samples it.

use crate::rotation::Axis;
use crate::{BlochyError, Result};
use serde::{Deserialize, Serialize};

/// Longest accepted pulse duration
pub const MAX_PULSE_DURATION: f64 = 10.0;

/// Default number of samples in a Rabi curve
pub const DEFAULT_RABI_SAMPLES: usize = 100;

/// Drive axis for a pulse
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PulseAxis {
    X,
    Y,
}

impl PulseAxis {
    /// Rotation axis driven by this pulse
    pub const fn axis(self) -> Axis {
        match self {
            Self::X => Axis::X,
            Self::Y => Axis::Y,
        }
    }
}

/// Validate a pulse duration
///
/// # Errors
/// Returns [`BlochyError::InvalidPulse`] unless `0 <= duration <= MAX_PULSE_DURATION`
pub fn validate_duration(duration: f64) -> Result<f64> {
    if duration.is_finite() && (0.0..=MAX_PULSE_DURATION).contains(&duration) {
        Ok(duration)
    } else {
        Err(BlochyError::InvalidPulse(duration))
    }
}

/// Drive parameters for a Rabi oscillation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RabiParameters {
    /// Detuning Δ between drive and qubit frequency
    pub detuning: f64,
    /// Rabi frequency Ω (drive amplitude)
    pub amplitude: f64,
    /// Length of the sampled window
    pub pulse_length: f64,
}

impl Default for RabiParameters {
    fn default() -> Self {
        Self {
            detuning: 0.0,
            amplitude: 1.0,
            pulse_length: 0.5,
        }
    }
}

impl RabiParameters {
    /// Effective Rabi frequency √(Ω² + Δ²)
    pub fn effective_frequency(&self) -> f64 {
        self.amplitude.hypot(self.detuning)
    }

    /// Excited-state population at time `t`
    ///
    /// P(t) = (Ω² / Ω_eff²) · sin²(Ω_eff·t / 2)
    pub fn excited_population(&self, t: f64) -> f64 {
        let omega_eff = self.effective_frequency();
        if omega_eff == 0.0 {
            return 0.0;
        }
        let ratio = (self.amplitude * self.amplitude) / (omega_eff * omega_eff);
        ratio * (omega_eff * t / 2.0).sin().powi(2)
    }

    fn validate(&self) -> Result<()> {
        let finite = self.detuning.is_finite() && self.amplitude.is_finite();
        if !finite || !self.pulse_length.is_finite() || self.pulse_length < 0.0 {
            return Err(BlochyError::InvalidPulse(self.pulse_length));
        }
        Ok(())
    }
}

/// One sample of a Rabi curve
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RabiSample {
    pub time: f64,
    pub excited: f64,
}

/// Sample the excited-state population over `[0, pulse_length]`
///
/// # Errors
/// Returns [`BlochyError::InvalidPulse`] for non-finite parameters or a
/// negative window
pub fn rabi_curve(params: &RabiParameters, samples: usize) -> Result<Vec<RabiSample>> {
    params.validate()?;

    let samples = samples.max(2);
    let step = params.pulse_length / (samples - 1) as f64;

    Ok((0..samples)
        .map(|i| {
            let time = step * i as f64;
            RabiSample {
                time,
                excited: params.excited_population(time),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_validate_duration() {
        assert_eq!(validate_duration(0.5), Ok(0.5));
        assert_eq!(validate_duration(0.0), Ok(0.0));
        assert_eq!(validate_duration(10.0), Ok(10.0));
        assert!(validate_duration(-0.1).is_err());
        assert!(validate_duration(10.5).is_err());
        assert!(validate_duration(f64::NAN).is_err());
    }

    #[test]
    fn test_resonant_pi_pulse_fully_excites() {
        let params = RabiParameters {
            detuning: 0.0,
            amplitude: 1.0,
            pulse_length: PI,
        };
        let curve = rabi_curve(&params, DEFAULT_RABI_SAMPLES).unwrap();

        assert_eq!(curve.len(), DEFAULT_RABI_SAMPLES);
        assert_relative_eq!(curve[0].excited, 0.0, epsilon = 1e-12);
        assert_relative_eq!(curve.last().unwrap().time, PI, epsilon = 1e-12);
        assert_relative_eq!(curve.last().unwrap().excited, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_detuning_limits_contrast() {
        let params = RabiParameters {
            detuning: 1.0,
            amplitude: 1.0,
            pulse_length: 10.0,
        };
        let curve = rabi_curve(&params, 500).unwrap();
        let peak = curve.iter().map(|s| s.excited).fold(0.0, f64::max);

        assert!(peak <= 0.5 + 1e-12);
        assert!(peak > 0.49);
    }

    #[test]
    fn test_zero_drive_is_flat() {
        let params = RabiParameters {
            detuning: 0.0,
            amplitude: 0.0,
            pulse_length: 1.0,
        };
        assert!(rabi_curve(&params, 10).unwrap().iter().all(|s| s.excited == 0.0));
    }

    #[test]
    fn test_negative_window_rejected() {
        let params = RabiParameters {
            pulse_length: -1.0,
            ..Default::default()
        };
        assert!(matches!(rabi_curve(&params, 10), Err(BlochyError::InvalidPulse(_))));
    }
}
