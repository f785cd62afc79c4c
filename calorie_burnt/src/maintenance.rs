//! Maintenance calories with the Mifflin-St Jeor equation:
//!
//! ```notrust
//! BMR (male)   = 10 x weight (kg) + 6.25 x height (cm) - 5 x age + 5
//! BMR (female) = 10 x weight (kg) + 6.25 x height (cm) - 5 x age - 161
//! TDEE         = BMR x activity factor
//! ```

use crate::Sex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityLevel {
    /// Up to 2 workouts a week
    Sedentary,
    /// 3-4 workouts a week
    LightlyActive,
    /// 5-6 workouts a week
    ModeratelyActive,
    /// Daily workouts
    VeryActive,
}

impl ActivityLevel {
    pub const fn from_frequency(days_per_week: u8) -> Self {
        match days_per_week {
            ..=2 => Self::Sedentary,
            3..=4 => Self::LightlyActive,
            5..=6 => Self::ModeratelyActive,
            _ => Self::VeryActive,
        }
    }

    pub const fn factor(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaintenanceResult {
    pub bmr_kcal_per_day: f64,
    pub tdee_kcal_per_day: f64,
    pub activity_level: ActivityLevel,
}

/// Basal metabolic rate in kcal/day.
pub fn bmr(age: u8, sex: Sex, weight_kg: f64, height_m: f64) -> f64 {
    let height_cm = height_m * 100.0;
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;

    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

pub fn maintenance_calories(
    age: u8,
    sex: Sex,
    weight_kg: f64,
    height_m: f64,
    workout_frequency: u8,
) -> MaintenanceResult {
    let bmr_kcal_per_day = bmr(age, sex, weight_kg, height_m);
    let activity_level = ActivityLevel::from_frequency(workout_frequency);

    MaintenanceResult {
        bmr_kcal_per_day,
        tdee_kcal_per_day: bmr_kcal_per_day * activity_level.factor(),
        activity_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_male_reference() {
        let result = maintenance_calories(25, Sex::Male, 76.0, 1.84, 5);

        assert!(close(result.bmr_kcal_per_day, 1790.0));
        assert!(close(result.tdee_kcal_per_day, 2774.5));
        assert_eq!(result.activity_level, ActivityLevel::ModeratelyActive);
    }

    #[test]
    fn test_female_offset() {
        let male = bmr(25, Sex::Male, 76.0, 1.84);
        let female = bmr(25, Sex::Female, 76.0, 1.84);

        assert!(close(male - female, 166.0));
    }

    #[test]
    fn test_activity_levels() {
        let expected = [
            (0, ActivityLevel::Sedentary),
            (2, ActivityLevel::Sedentary),
            (3, ActivityLevel::LightlyActive),
            (4, ActivityLevel::LightlyActive),
            (5, ActivityLevel::ModeratelyActive),
            (6, ActivityLevel::ModeratelyActive),
            (7, ActivityLevel::VeryActive),
        ];

        for (days, level) in expected {
            assert_eq!(ActivityLevel::from_frequency(days), level, "{days} days");
        }
    }

    #[test]
    fn test_tdee_uses_factor() {
        let result = maintenance_calories(40, Sex::Female, 60.0, 1.65, 1);

        assert!(close(result.tdee_kcal_per_day, result.bmr_kcal_per_day * 1.2));
    }
}
