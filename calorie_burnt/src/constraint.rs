use crate::{FeatureRecord, dynamic_met};

/// Sessions shorter than this get the narrower band.
pub const SHORT_SESSION_HOURS: f64 = 0.5;
pub const SHORT_SESSION_TOLERANCE: f64 = 0.05;
pub const DEFAULT_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstrainedPrediction {
    pub kcal: f64,
    pub met: f64,
    /// `met * weight * duration`
    pub met_estimate_kcal: f64,
    pub min_kcal: f64,
    pub max_kcal: f64,
}

#[inline]
pub fn tolerance(duration_hours: f64) -> f64 {
    if duration_hours < SHORT_SESSION_HOURS {
        SHORT_SESSION_TOLERANCE
    } else {
        DEFAULT_TOLERANCE
    }
}

/// Clamps `prediction` into the tolerance band around the MET estimate of the session.
pub fn constrain_prediction(features: &FeatureRecord, prediction: f64) -> ConstrainedPrediction {
    let FeatureRecord { input, derived } = features;

    let met = dynamic_met(
        input.workout_type,
        derived.intensity,
        input.age,
        input.duration_hours,
        input.experience_level,
    );
    let met_estimate_kcal = met * input.weight_kg * input.duration_hours;

    let tolerance = tolerance(input.duration_hours);
    let (min_kcal, max_kcal) = (
        met_estimate_kcal * (1.0 - tolerance),
        met_estimate_kcal * (1.0 + tolerance),
    );

    tracing::debug!(
        met,
        met_estimate_kcal,
        min_kcal,
        max_kcal,
        prediction,
        "constraining prediction"
    );

    ConstrainedPrediction {
        // Not `f64::clamp`: it panics on an inverted or NaN band
        kcal: prediction.max(min_kcal).min(max_kcal),
        met,
        met_estimate_kcal,
        min_kcal,
        max_kcal,
    }
}
