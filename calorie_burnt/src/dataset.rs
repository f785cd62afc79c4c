//! Rows of the gym members exercise dataset used to train and evaluate models.

use heart_rate::HeartRate;

use crate::{ExperienceLevel, Sex, WorkoutInput, WorkoutType};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GymRecord {
    #[serde(rename = "Age")]
    pub age: u8,
    #[serde(rename = "Gender")]
    pub sex: Sex,
    #[serde(rename = "Weight (kg)")]
    pub weight_kg: f64,
    #[serde(rename = "Height (m)")]
    pub height_m: f64,
    #[serde(rename = "Max_BPM")]
    pub max_bpm: u8,
    #[serde(rename = "Avg_BPM")]
    pub avg_bpm: u8,
    #[serde(rename = "Resting_BPM")]
    pub resting_bpm: u8,
    #[serde(rename = "Session_Duration (hours)")]
    pub duration_hours: f64,
    #[serde(rename = "Calories_Burned")]
    pub calories_burned: f64,
    #[serde(rename = "Workout_Type")]
    pub workout_type: WorkoutType,
    #[serde(rename = "Fat_Percentage")]
    pub fat_percentage: f64,
    #[serde(rename = "Water_Intake (liters)")]
    pub water_intake_liters: f64,
    #[serde(rename = "Workout_Frequency (days/week)")]
    pub workout_frequency: u8,
    #[serde(rename = "Experience_Level")]
    pub experience_level: ExperienceLevel,
}

impl GymRecord {
    pub fn input(&self) -> WorkoutInput {
        WorkoutInput {
            age: self.age,
            sex: self.sex,
            weight_kg: self.weight_kg,
            height_m: self.height_m,
            heart_rate: HeartRate::new(self.max_bpm, self.avg_bpm, self.resting_bpm),
            duration_hours: self.duration_hours,
            workout_type: self.workout_type,
            fat_percentage: self.fat_percentage,
            water_intake_liters: self.water_intake_liters,
            workout_frequency: self.workout_frequency,
            experience_level: self.experience_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Age,Gender,Weight (kg),Height (m),Max_BPM,Avg_BPM,Resting_BPM,Session_Duration (hours),Calories_Burned,Workout_Type,Fat_Percentage,Water_Intake (liters),Workout_Frequency (days/week),Experience_Level,BMI
56,Male,88.3,1.71,180,157,60,1.69,1313.0,Yoga,12.6,3.5,4,3,30.2
46,Female,74.9,1.53,179,151,66,1.3,883.0,HIIT,33.9,2.1,4,2,32.0
32,Female,68.1,1.66,167,122,54,1.11,677.0,Pilates,33.4,2.3,4,2,24.71
29,Male,53.2,1.7,190,164,56,0.59,532.0,Strength,28.8,2.1,3,4,18.41
";

    #[test]
    fn test_read_rows() {
        let mut reader = csv::Reader::from_reader(CSV.as_bytes());
        let rows = reader
            .deserialize::<GymRecord>()
            .collect::<Vec<_>>();

        assert_eq!(rows.len(), 4);

        let first = rows[0].as_ref().expect("valid row");
        assert_eq!(first.sex, Sex::Male);
        assert_eq!(first.workout_type, WorkoutType::Yoga);
        assert_eq!(first.experience_level, ExperienceLevel::Expert);
        assert_eq!(first.calories_burned, 1313.0);

        let input = first.input();
        assert_eq!(input.heart_rate, HeartRate::new(180, 157, 60));
        assert_eq!(input.duration_hours, 1.69);

        let second = rows[1].as_ref().expect("valid row");
        assert_eq!(second.sex, Sex::Female);
        assert_eq!(second.workout_type, WorkoutType::HIIT);

        // Unknown workout type and experience level out of range
        assert!(rows[2].is_err());
        assert!(rows[3].is_err());
    }
}
