use crate::{ExperienceLevel, WorkoutType};

/// Intensity above this is treated as maximal effort.
pub const MAX_INTENSITY: f64 = 1.0;

/// Yoga stays in the low tier up to this intensity.
pub const YOGA_LOW_INTENSITY: f64 = 0.55;
pub const LOW_INTENSITY: f64 = 0.5;
pub const MEDIUM_INTENSITY: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntensityTier {
    Low,
    Medium,
    High,
}

impl IntensityTier {
    pub fn select(workout_type: WorkoutType, intensity: f64) -> Self {
        let intensity = intensity.min(MAX_INTENSITY);

        if workout_type == WorkoutType::Yoga && intensity <= YOGA_LOW_INTENSITY {
            return Self::Low;
        }

        if intensity <= LOW_INTENSITY {
            Self::Low
        } else if intensity <= MEDIUM_INTENSITY {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl WorkoutType {
    /// Base MET values. Strength is kept low to account for rest between sets.
    pub const fn base_met(self, tier: IntensityTier) -> f64 {
        use IntensityTier::*;

        match (self, tier) {
            (Self::Cardio, Low) => 4.0,
            (Self::Cardio, Medium) => 6.0,
            (Self::Cardio, High) => 8.0,
            (Self::Strength, Low) => 3.0,
            (Self::Strength, Medium) => 5.0,
            (Self::Strength, High) => 6.5,
            (Self::HIIT, Low) => 6.0,
            (Self::HIIT, Medium) => 8.0,
            (Self::HIIT, High) => 10.0,
            (Self::Yoga, Low) => 2.5,
            (Self::Yoga, Medium) => 3.0,
            (Self::Yoga, High) => 4.0,
        }
    }
}

impl ExperienceLevel {
    pub const fn met_factor(self) -> f64 {
        match self {
            Self::Beginner => 0.9,
            Self::Intermediate => 1.0,
            Self::Expert => 1.1,
        }
    }
}

pub const fn age_factor(age: u8) -> f64 {
    match age {
        ..30 => 1.0,
        30..50 => 0.95,
        50..70 => 0.9,
        _ => 0.85,
    }
}

/// `1.0` for sessions of 0.5-1.5h, `0.95` below. Longer sessions restart at
/// `0.85` and grow by `0.05` per extra hour, capped at 5h.
pub fn duration_factor(duration_hours: f64) -> f64 {
    if (0.5..=1.5).contains(&duration_hours) {
        1.0
    } else if duration_hours < 0.5 {
        0.95
    } else {
        0.85 + 0.05 * (duration_hours - 1.5).min(3.5)
    }
}

/// MET adjusted for the person and the session.
pub fn dynamic_met(
    workout_type: WorkoutType,
    intensity: f64,
    age: u8,
    duration_hours: f64,
    experience_level: ExperienceLevel,
) -> f64 {
    let tier = IntensityTier::select(workout_type, intensity);

    workout_type.base_met(tier)
        * age_factor(age)
        * duration_factor(duration_hours)
        * experience_level.met_factor()
}
