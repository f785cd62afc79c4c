use heart_rate::HeartRateCorrection;

use crate::{FeatureRecord, PredictionError, Sex, WorkoutInput, constrain_prediction};

/// Flat correction applied to female predictions of the model.
pub const FEMALE_CORRECTION: f64 = 0.9;

/// Regression model mapping a feature record to burnt kcal.
pub trait CalorieModel {
    type Error: std::error::Error + Send + Sync + 'static;

    fn predict(&self, features: &FeatureRecord) -> Result<f64, Self::Error>;
}

impl<M: CalorieModel + ?Sized> CalorieModel for &M {
    type Error = M::Error;

    fn predict(&self, features: &FeatureRecord) -> Result<f64, Self::Error> {
        (**self).predict(features)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredictionResult {
    /// Model output after the female correction
    pub raw_kcal: f64,
    pub constrained_kcal: f64,
    pub met: f64,
    pub met_estimate_kcal: f64,
    /// Corrected input and derived features the model saw
    pub features: FeatureRecord,
    pub corrections: Vec<HeartRateCorrection>,
}

/// Calorie predictor holding a loaded model.
///
/// The model is never mutated, the same predictor can serve any number of calls.
#[derive(Debug, Clone)]
pub struct Predictor<M> {
    model: M,
}

impl<M: CalorieModel> Predictor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn predict(&self, input: &WorkoutInput) -> Result<PredictionResult, PredictionError> {
        let (features, corrections) = FeatureRecord::build(input)?;

        for correction in &corrections {
            tracing::warn!("{correction}");
        }

        let mut raw_kcal = self
            .model
            .predict(&features)
            .map_err(|e| PredictionError::Model(Box::new(e)))?;

        if features.input.sex == Sex::Female {
            raw_kcal *= FEMALE_CORRECTION;
        }

        let constrained = constrain_prediction(&features, raw_kcal);

        tracing::debug!(
            raw_kcal,
            constrained_kcal = constrained.kcal,
            "calorie prediction"
        );

        Ok(PredictionResult {
            raw_kcal,
            constrained_kcal: constrained.kcal,
            met: constrained.met,
            met_estimate_kcal: constrained.met_estimate_kcal,
            features,
            corrections,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{HeartRate, InputError, workout::tests::sample_input};

    #[derive(Debug)]
    struct FixedModel {
        kcal: f64,
        calls: Cell<usize>,
    }

    impl FixedModel {
        fn new(kcal: f64) -> Self {
            Self {
                kcal,
                calls: Cell::new(0),
            }
        }
    }

    impl CalorieModel for FixedModel {
        type Error = std::convert::Infallible;

        fn predict(&self, _: &FeatureRecord) -> Result<f64, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.kcal)
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("model exploded")]
    struct Exploded;

    #[derive(Debug)]
    struct BrokenModel;

    impl CalorieModel for BrokenModel {
        type Error = Exploded;

        fn predict(&self, _: &FeatureRecord) -> Result<f64, Self::Error> {
            Err(Exploded)
        }
    }

    /// Echoes the average heart rate it was given.
    #[derive(Debug)]
    struct EchoAvgBpm;

    impl CalorieModel for EchoAvgBpm {
        type Error = std::convert::Infallible;

        fn predict(&self, features: &FeatureRecord) -> Result<f64, Self::Error> {
            Ok(features.input.heart_rate.avg_bpm as f64)
        }
    }

    #[test]
    fn test_prediction_within_band() {
        let predictor = Predictor::new(FixedModel::new(700.0));
        let result = predictor.predict(&sample_input()).expect("valid input");

        assert_eq!(result.raw_kcal, 700.0);
        assert_eq!(result.constrained_kcal, 700.0);
        assert!((result.met - 6.5).abs() < 1e-9);
        assert!((result.met_estimate_kcal - 741.0).abs() < 1e-9);
        assert!(result.corrections.is_empty());
    }

    #[test]
    fn test_raw_and_constrained_both_reported() {
        let predictor = Predictor::new(FixedModel::new(2000.0));
        let result = predictor.predict(&sample_input()).expect("valid input");

        assert_eq!(result.raw_kcal, 2000.0);
        assert!((result.constrained_kcal - 741.0 * 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_female_correction() {
        let predictor = Predictor::new(FixedModel::new(700.0));
        let input = WorkoutInput {
            sex: Sex::Female,
            ..sample_input()
        };
        let result = predictor.predict(&input).expect("valid input");

        assert!((result.raw_kcal - 630.0).abs() < 1e-9);
        assert_eq!(result.features.derived.gender_factor, 1);
    }

    #[test]
    fn test_invalid_duration_skips_model() {
        let predictor = Predictor::new(FixedModel::new(700.0));
        let input = WorkoutInput {
            duration_hours: 0.0,
            ..sample_input()
        };

        let error = predictor.predict(&input).expect_err("duration is zero");

        assert!(matches!(
            error,
            PredictionError::Input(InputError::InvalidDuration(_))
        ));
        assert_eq!(predictor.model().calls.get(), 0);
    }

    #[test]
    fn test_low_average_corrected() {
        let predictor = Predictor::new(EchoAvgBpm);
        let input = WorkoutInput {
            heart_rate: HeartRate::new(140, 60, 70),
            ..sample_input()
        };
        let result = predictor.predict(&input).expect("corrected, not rejected");

        assert_eq!(result.features.input.heart_rate.avg_bpm, 71);
        assert_eq!(result.raw_kcal, 71.0);
        assert_eq!(
            result.corrections,
            vec![HeartRateCorrection::AverageNotAboveResting {
                avg_bpm: 60,
                resting_bpm: 70,
                corrected_bpm: 71,
            }]
        );
    }

    #[test]
    fn test_max_below_resting_corrected() {
        let predictor = Predictor::new(EchoAvgBpm);

        // Only above max: capped at 80, (80 - 90) / (80 - 90)
        let input = WorkoutInput {
            heart_rate: HeartRate::new(80, 100, 90),
            ..sample_input()
        };
        let result = predictor.predict(&input).expect("corrected, not rejected");

        assert_eq!(result.features.input.heart_rate.avg_bpm, 80);
        assert_eq!(result.features.derived.intensity, 1.0);
        assert_eq!(result.raw_kcal, 80.0);
        assert_eq!(
            result.corrections,
            vec![HeartRateCorrection::AverageAboveMax {
                avg_bpm: 100,
                max_bpm: 80,
            }]
        );

        // Lifted to 91 first, then capped at 80
        let input = WorkoutInput {
            heart_rate: HeartRate::new(80, 85, 90),
            ..sample_input()
        };
        let result = predictor.predict(&input).expect("corrected, not rejected");

        assert_eq!(result.features.input.heart_rate.avg_bpm, 80);
        assert_eq!(result.features.derived.intensity, 1.0);
        assert_eq!(
            result.corrections,
            vec![
                HeartRateCorrection::AverageNotAboveResting {
                    avg_bpm: 85,
                    resting_bpm: 90,
                    corrected_bpm: 91,
                },
                HeartRateCorrection::AverageAboveMax {
                    avg_bpm: 91,
                    max_bpm: 80,
                },
            ]
        );
    }

    #[test]
    fn test_max_equal_to_resting_rejected() {
        let predictor = Predictor::new(FixedModel::new(700.0));
        let input = WorkoutInput {
            heart_rate: HeartRate::new(90, 120, 90),
            ..sample_input()
        };

        assert!(matches!(
            predictor.predict(&input),
            Err(PredictionError::Input(InputError::InvalidHeartRateRange { .. }))
        ));
        assert_eq!(predictor.model().calls.get(), 0);
    }

    #[test]
    fn test_model_failure() {
        let predictor = Predictor::new(BrokenModel);
        let error = predictor.predict(&sample_input()).expect_err("model fails");

        assert!(matches!(error, PredictionError::Model(_)));
        assert_eq!(error.to_string(), "Prediction failed: model exploded");
    }

    #[test]
    fn test_repeatable() {
        let model = FixedModel::new(500.0);
        let predictor = Predictor::new(&model);

        let first = predictor.predict(&sample_input()).expect("valid input");
        let second = predictor.predict(&sample_input()).expect("valid input");

        assert_eq!(first, second);
        assert_eq!(model.calls.get(), 2);
    }
}
