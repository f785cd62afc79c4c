/// Input rejected before any calculation took place.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Duration must be positive, got {0} hours")]
    InvalidDuration(f64),
    #[error("Invalid Workout Type {0:?}, expected one of Yoga, Cardio, Strength or HIIT")]
    InvalidWorkoutType(String),
    #[error("Experience Level must be 1 (Beginner), 2 (Intermediate), or 3 (Expert), got {0:?}")]
    InvalidExperienceLevel(String),
    #[error("Gender must be Male or Female, got {0:?}")]
    InvalidGender(String),
    #[error("Max_BPM ({max_bpm}) must differ from Resting_BPM ({resting_bpm})")]
    InvalidHeartRateRange { max_bpm: u8, resting_bpm: u8 },
}

#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("Input Error: {0}")]
    Input(#[from] InputError),
    #[error("Prediction failed: {0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}
