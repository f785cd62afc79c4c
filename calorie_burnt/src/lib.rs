//! # Calorie burnt
//!
//! Workout calorie estimation backed by a regression model and kept in a
//! plausible range by the MET energy formula:
//!
//! ```notrust
//! kcal = MET x weight (kg) x duration (h)
//! ```
//!
//! The model prediction is clamped into `+-10%` of that estimate (`+-5%` for
//! sessions under half an hour).
//!
//! Daily maintenance calories use the Mifflin-St Jeor equation, see
//! [`maintenance`].

use std::{fmt, str::FromStr};

mod constraint;
mod error;
mod features;
pub mod maintenance;
mod met;
mod predictor;
mod workout;

#[cfg(feature = "serde")]
pub mod dataset;
#[cfg(feature = "binary")]
pub mod logging;
#[cfg(feature = "ml")]
pub mod model;

pub use self::constraint::*;
pub use self::error::*;
pub use self::features::*;
pub use self::met::*;
pub use self::predictor::*;
pub use self::workout::*;

pub use heart_rate::{HeartRate, HeartRateCorrection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// `0` for male, `1` otherwise.
    pub const fn gender_factor(self) -> u8 {
        match self {
            Self::Male => 0,
            Self::Female => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl From<Sex> for f64 {
    fn from(value: Sex) -> Self {
        match value {
            Sex::Male => 1.0,
            Sex::Female => 0.0,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sex {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("male") => Ok(Self::Male),
            s if s.eq_ignore_ascii_case("female") => Ok(Self::Female),
            s => Err(InputError::InvalidGender(s.to_owned())),
        }
    }
}
