use heart_rate::HeartRateCorrection;

use crate::{InputError, WorkoutInput};

pub const FEATURE_COUNT: usize = 18;

/// Model columns in the order produced by [`FeatureRecord::to_row`].
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Age",
    "Gender",
    "Gender_Factor",
    "Weight (kg)",
    "Height (m)",
    "Max_BPM",
    "Avg_BPM",
    "Resting_BPM",
    "Session_Duration (hours)",
    "Workout_Type",
    "Fat_Percentage",
    "Water_Intake (liters)",
    "Workout_Frequency (days/week)",
    "Experience_Level",
    "Intensity",
    "BMI",
    "Duration_Adjusted_Intensity",
    "HRR_Percentage",
];

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedFeatures {
    pub intensity: f64,
    pub bmi: f64,
    pub duration_adjusted_intensity: f64,
    pub hrr_percentage: f64,
    pub gender_factor: u8,
}

impl DerivedFeatures {
    /// Expects heart rate that already went through [`heart_rate::HeartRate::corrected`].
    pub fn compute(input: &WorkoutInput) -> Self {
        let intensity = input.heart_rate.intensity();
        let duration = input.duration_hours;
        let duration_weight = if duration > 1.0 { 2.0 } else { 3.0 };

        Self {
            intensity,
            bmi: input.bmi(),
            duration_adjusted_intensity: intensity * duration.ln_1p() * duration_weight,
            hrr_percentage: input.heart_rate.hrr_percentage(input.age),
            gender_factor: input.sex.gender_factor(),
        }
    }
}

/// Validated and corrected input together with its derived features.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureRecord {
    pub input: WorkoutInput,
    pub derived: DerivedFeatures,
}

impl FeatureRecord {
    /// Validates `input`, pulls the average heart rate into range and derives
    /// the remaining model features from the corrected values.
    pub fn build(input: &WorkoutInput) -> Result<(Self, Vec<HeartRateCorrection>), InputError> {
        input.validate()?;

        let (heart_rate, corrections) = input.heart_rate.corrected();
        let input = WorkoutInput {
            heart_rate,
            ..input.clone()
        };
        let derived = DerivedFeatures::compute(&input);

        Ok((Self { input, derived }, corrections))
    }

    pub fn to_row(&self) -> [f64; FEATURE_COUNT] {
        let Self { input, derived } = self;

        [
            input.age as f64,
            f64::from(input.sex),
            derived.gender_factor as f64,
            input.weight_kg,
            input.height_m,
            input.heart_rate.max_bpm as f64,
            input.heart_rate.avg_bpm as f64,
            input.heart_rate.resting_bpm as f64,
            input.duration_hours,
            input.workout_type.code() as f64,
            input.fat_percentage,
            input.water_intake_liters,
            input.workout_frequency as f64,
            input.experience_level.level() as f64,
            derived.intensity,
            derived.bmi,
            derived.duration_adjusted_intensity,
            derived.hrr_percentage,
        ]
    }
}
