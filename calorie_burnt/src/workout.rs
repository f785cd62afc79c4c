use std::{fmt, str::FromStr};

use heart_rate::HeartRate;

use crate::{InputError, Sex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String")
)]
pub enum WorkoutType {
    Yoga,
    Cardio,
    Strength,
    #[allow(clippy::upper_case_acronyms)]
    HIIT,
}

impl WorkoutType {
    pub const ALL: [Self; 4] = [Self::Yoga, Self::Cardio, Self::Strength, Self::HIIT];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yoga => "Yoga",
            Self::Cardio => "Cardio",
            Self::Strength => "Strength",
            Self::HIIT => "HIIT",
        }
    }

    /// Column value used when the type is fed to the regression model.
    pub const fn code(self) -> u8 {
        match self {
            Self::Yoga => 0,
            Self::Cardio => 1,
            Self::Strength => 2,
            Self::HIIT => 3,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkoutType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| InputError::InvalidWorkoutType(s.to_owned()))
    }
}

impl TryFrom<String> for WorkoutType {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl ExperienceLevel {
    pub const fn level(self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Expert => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for ExperienceLevel {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Beginner),
            2 => Ok(Self::Intermediate),
            3 => Ok(Self::Expert),
            other => Err(InputError::InvalidExperienceLevel(other.to_string())),
        }
    }
}

impl From<ExperienceLevel> for u8 {
    fn from(value: ExperienceLevel) -> Self {
        value.level()
    }
}

/// Accepts the numeric level or its name.
impl FromStr for ExperienceLevel {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(level) = s.parse::<u8>() {
            return Self::try_from(level);
        }

        [Self::Beginner, Self::Intermediate, Self::Expert]
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| InputError::InvalidExperienceLevel(s.to_owned()))
    }
}

/// One workout session as entered by the user.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkoutInput {
    pub age: u8,
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_m: f64,
    pub heart_rate: HeartRate,
    pub duration_hours: f64,
    pub workout_type: WorkoutType,
    pub fat_percentage: f64,
    pub water_intake_liters: f64,
    /// Days per week
    pub workout_frequency: u8,
    pub experience_level: ExperienceLevel,
}

impl WorkoutInput {
    /// Hard checks. Heart rate averages outside `(resting, max]` are not
    /// rejected here, they get corrected while building features. Only
    /// `max_bpm == resting_bpm` is refused, intensity is `0 / 0` there.
    pub fn validate(&self) -> Result<(), InputError> {
        // Negated to reject NaN as well
        if !(self.duration_hours > 0.0) {
            return Err(InputError::InvalidDuration(self.duration_hours));
        }

        let HeartRate {
            max_bpm,
            resting_bpm,
            ..
        } = self.heart_rate;

        if max_bpm == resting_bpm {
            return Err(InputError::InvalidHeartRateRange {
                max_bpm,
                resting_bpm,
            });
        }

        Ok(())
    }

    #[inline]
    pub fn bmi(&self) -> f64 {
        self.weight_kg / (self.height_m * self.height_m)
    }
}
