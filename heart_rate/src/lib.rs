//! # Heart rate
//!
//! - AHR - average heart rate during a session
//! - MHR - maximum heart rate
//! - RHR - resting heart rate
//! - HRR - heart rate reserve
//!
//! Session intensity is the used share of the personal reserve:
//!
//! ```notrust
//! Intensity = (AHR - RHR) / (MHR - RHR)
//! ```
//!
//! HRR percentage uses the age predicted maximum instead of a measured one:
//!
//! ```notrust
//! HRR% = (AHR - RHR) / (220 - Age - RHR)
//! ```

use std::fmt;

mod smoking;

pub use self::smoking::*;

/// Age predicted maximum heart rate is `AGE_PREDICTED_MHR_BASE - age`.
pub const AGE_PREDICTED_MHR_BASE: f64 = 220.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeartRate {
    pub max_bpm: u8,
    pub avg_bpm: u8,
    pub resting_bpm: u8,
}

/// Adjustment applied to the average heart rate when it falls outside `(RHR, MHR]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum HeartRateCorrection {
    /// Average was not above resting, lifted to `resting_bpm + 1`
    AverageNotAboveResting {
        avg_bpm: u8,
        resting_bpm: u8,
        corrected_bpm: u8,
    },
    /// Average was above maximum, capped at `max_bpm`
    AverageAboveMax { avg_bpm: u8, max_bpm: u8 },
}

impl fmt::Display for HeartRateCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AverageNotAboveResting {
                avg_bpm,
                resting_bpm,
                ..
            } => write!(
                f,
                "Avg_BPM ({avg_bpm}) should be greater than Resting_BPM ({resting_bpm}). \
                 Setting Avg_BPM to Resting_BPM + 1."
            ),
            Self::AverageAboveMax { avg_bpm, max_bpm } => write!(
                f,
                "Avg_BPM ({avg_bpm}) exceeds Max_BPM ({max_bpm}). Capping Avg_BPM at Max_BPM."
            ),
        }
    }
}

impl HeartRate {
    pub const fn new(max_bpm: u8, avg_bpm: u8, resting_bpm: u8) -> Self {
        Self {
            max_bpm,
            avg_bpm,
            resting_bpm,
        }
    }

    /// Moves the average into `(RHR, MHR]`.
    ///
    /// The resting check runs first, so an input with `max_bpm <= resting_bpm`
    /// ends with the average capped at `max_bpm`.
    pub fn corrected(self) -> (Self, Vec<HeartRateCorrection>) {
        let mut corrections = Vec::new();
        let mut avg_bpm = self.avg_bpm;

        if avg_bpm <= self.resting_bpm {
            let corrected_bpm = self.resting_bpm.saturating_add(1);

            corrections.push(HeartRateCorrection::AverageNotAboveResting {
                avg_bpm,
                resting_bpm: self.resting_bpm,
                corrected_bpm,
            });

            avg_bpm = corrected_bpm;
        }

        if avg_bpm > self.max_bpm {
            corrections.push(HeartRateCorrection::AverageAboveMax {
                avg_bpm,
                max_bpm: self.max_bpm,
            });

            avg_bpm = self.max_bpm;
        }

        (Self { avg_bpm, ..self }, corrections)
    }

    #[inline]
    pub const fn intensity(&self) -> f64 {
        intensity(
            self.avg_bpm as f64,
            self.resting_bpm as f64,
            self.max_bpm as f64,
        )
    }

    #[inline]
    pub const fn hrr_percentage(&self, age: u8) -> f64 {
        hrr_percentage(self.avg_bpm as f64, self.resting_bpm as f64, age)
    }
}

/// Share of heart rate reserve used during a session.
///
/// Not clamped: an average above `max` gives values above `1.0`.
#[inline]
pub const fn intensity(avg: f64, resting: f64, max: f64) -> f64 {
    (avg - resting) / (max - resting)
}

/// Heart rate reserve percentage against the age predicted maximum.
#[inline]
pub const fn hrr_percentage(avg: f64, resting: f64, age: u8) -> f64 {
    (avg - resting) / (AGE_PREDICTED_MHR_BASE - age as f64 - resting)
}
