//! Exercise cautions for smokers.
//!
//! Intensity here is computed against a fixed resting rate of
//! [`ASSUMED_RESTING_BPM`], not the resting rate measured elsewhere.

use std::{fmt, str::FromStr};

use crate::intensity;

pub const ASSUMED_RESTING_BPM: f64 = 70.0;

/// Average above this share of the maximum counts as high heart rate.
pub const HIGH_BPM_RATIO: f64 = 0.7;
pub const HIGH_INTENSITY: f64 = 0.7;
pub const MODERATE_INTENSITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmokingStatus {
    #[cfg_attr(feature = "serde", serde(rename = "None"))]
    Never,
    #[cfg_attr(feature = "serde", serde(rename = "Very Less"))]
    Light,
    #[cfg_attr(feature = "serde", serde(rename = "Occasional"))]
    Occasional,
    #[cfg_attr(feature = "serde", serde(rename = "Very Much"))]
    Heavy,
}

impl SmokingStatus {
    pub const ALL: [Self; 4] = [Self::Never, Self::Light, Self::Occasional, Self::Heavy];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Never => "None",
            Self::Light => "Very Less",
            Self::Occasional => "Occasional",
            Self::Heavy => "Very Much",
        }
    }
}

impl fmt::Display for SmokingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Smoking status must be one of \"None\", \"Very Less\", \"Occasional\" or \"Very Much\", got {0:?}")]
pub struct ParseSmokingStatusError(pub String);

impl FromStr for SmokingStatus {
    type Err = ParseSmokingStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSmokingStatusError(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Info,
    Note,
    Caution,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Caution {
    HeavySmoker,
    OccasionalSmokerHighIntensity,
    OccasionalSmokerModerateIntensity,
    LightSmokerHighIntensity,
    HighIntensity,
}

impl Caution {
    pub const fn severity(self) -> Severity {
        match self {
            Self::HeavySmoker => Severity::Warning,
            Self::OccasionalSmokerHighIntensity => Severity::Caution,
            Self::OccasionalSmokerModerateIntensity | Self::LightSmokerHighIntensity => {
                Severity::Note
            }
            Self::HighIntensity => Severity::Info,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::HeavySmoker => "Heavy Smoker Warning",
            Self::OccasionalSmokerHighIntensity => "Occasional Smoker Caution",
            Self::OccasionalSmokerModerateIntensity => "Occasional Smoker Note",
            Self::LightSmokerHighIntensity => "Light Smoker Note",
            Self::HighIntensity => "Note",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::HeavySmoker => {
                "Smoking heavily increases cardiovascular risks. Consult a doctor before engaging \
                 in any exercise, especially if your heart rate or intensity is high."
            }
            Self::OccasionalSmokerHighIntensity => {
                "Your heart rate or exercise intensity is high. As an occasional smoker, consult a \
                 doctor before continuing intense workouts to ensure safety."
            }
            Self::OccasionalSmokerModerateIntensity => {
                "Moderate exercise intensity detected. Occasional smoking may still pose risks; \
                 consider consulting a doctor for personalized advice."
            }
            Self::LightSmokerHighIntensity => {
                "High heart rate or intensity detected. Even light smoking can affect \
                 cardiovascular health. Monitor your condition and consult a doctor if you \
                 experience discomfort."
            }
            Self::HighIntensity => {
                "High heart rate or intensity detected. Ensure you are cleared for intense \
                 exercise, especially if you have other health concerns."
            }
        }
    }
}

impl fmt::Display for Caution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

/// Heart rate flags the caution table is keyed on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmokingAssessment {
    pub intensity: f64,
    pub high_bpm: bool,
    pub high_intensity: bool,
    pub moderate_intensity: bool,
}

impl SmokingAssessment {
    pub fn new(avg_bpm: u8, max_bpm: u8) -> Self {
        let (avg, max) = (avg_bpm as f64, max_bpm as f64);
        let intensity = intensity(avg, ASSUMED_RESTING_BPM, max);

        Self {
            intensity,
            high_bpm: avg > HIGH_BPM_RATIO * max,
            high_intensity: intensity > HIGH_INTENSITY,
            moderate_intensity: (MODERATE_INTENSITY..=HIGH_INTENSITY).contains(&intensity),
        }
    }

    #[inline]
    pub const fn elevated(&self) -> bool {
        self.high_bpm || self.high_intensity
    }

    pub fn caution(&self, status: SmokingStatus) -> Option<Caution> {
        match status {
            SmokingStatus::Heavy => Some(Caution::HeavySmoker),
            SmokingStatus::Occasional if self.elevated() => {
                Some(Caution::OccasionalSmokerHighIntensity)
            }
            SmokingStatus::Occasional if self.moderate_intensity => {
                Some(Caution::OccasionalSmokerModerateIntensity)
            }
            SmokingStatus::Light if self.elevated() => Some(Caution::LightSmokerHighIntensity),
            SmokingStatus::Never if self.elevated() => Some(Caution::HighIntensity),
            _ => None,
        }
    }
}

/// Cautions for exercising at `avg_bpm` given a smoking habit. Empty when nothing applies.
pub fn smoking_cautions(avg_bpm: u8, max_bpm: u8, status: SmokingStatus) -> Vec<Caution> {
    let assessment = SmokingAssessment::new(avg_bpm, max_bpm);
    let caution = assessment.caution(status);

    tracing::debug!(
        avg_bpm,
        max_bpm,
        %status,
        intensity = assessment.intensity,
        high_bpm = assessment.high_bpm,
        ?caution,
        "smoking caution check"
    );

    caution.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heavy_smoker_always_warned() {
        let cautions = smoking_cautions(160, 140, SmokingStatus::Heavy);
        assert_eq!(cautions, vec![Caution::HeavySmoker]);

        let cautions = smoking_cautions(80, 200, SmokingStatus::Heavy);
        assert_eq!(cautions, vec![Caution::HeavySmoker]);
    }

    #[test]
    fn test_non_smoker_low_intensity() {
        let assessment = SmokingAssessment::new(100, 200);
        assert!((assessment.intensity - 0.2308).abs() < 1e-4);
        assert!(!assessment.elevated());

        assert!(smoking_cautions(100, 200, SmokingStatus::Never).is_empty());
    }

    #[test]
    fn test_non_smoker_high_intensity() {
        assert_eq!(
            smoking_cautions(180, 200, SmokingStatus::Never),
            vec![Caution::HighIntensity]
        );
    }

    #[test]
    fn test_occasional_smoker() {
        assert_eq!(
            smoking_cautions(180, 200, SmokingStatus::Occasional),
            vec![Caution::OccasionalSmokerHighIntensity]
        );

        // (138 - 70) / 130 = 0.523, 138 <= 0.7 * 200
        assert_eq!(
            smoking_cautions(138, 200, SmokingStatus::Occasional),
            vec![Caution::OccasionalSmokerModerateIntensity]
        );

        assert!(smoking_cautions(100, 200, SmokingStatus::Occasional).is_empty());
    }

    #[test]
    fn test_light_smoker() {
        assert_eq!(
            smoking_cautions(180, 200, SmokingStatus::Light),
            vec![Caution::LightSmokerHighIntensity]
        );

        // Moderate intensity only matters for occasional smokers
        assert!(smoking_cautions(138, 200, SmokingStatus::Light).is_empty());
    }

    #[test]
    fn test_high_bpm_without_high_intensity() {
        // 120 > 0.7 * 160 while (120 - 70) / 90 = 0.556
        let assessment = SmokingAssessment::new(120, 160);
        assert!(assessment.high_bpm);
        assert!(!assessment.high_intensity);

        assert_eq!(
            smoking_cautions(120, 160, SmokingStatus::Never),
            vec![Caution::HighIntensity]
        );
    }

    #[test]
    fn test_high_bpm_is_strict() {
        // 140 == 0.7 * 200
        let assessment = SmokingAssessment::new(140, 200);
        assert!(!assessment.high_bpm);
        assert!(!assessment.elevated());
        assert!(smoking_cautions(140, 200, SmokingStatus::Never).is_empty());

        let assessment = SmokingAssessment::new(141, 200);
        assert!(assessment.high_bpm);
        assert!(!assessment.high_intensity);
        assert_eq!(
            smoking_cautions(141, 200, SmokingStatus::Never),
            vec![Caution::HighIntensity]
        );
    }

    #[test]
    fn test_moderate_band_lower_edge() {
        // (135 - 70) / 130 = 0.5
        let assessment = SmokingAssessment::new(135, 200);
        assert_eq!(assessment.intensity, 0.5);
        assert!(assessment.moderate_intensity);
        assert_eq!(
            smoking_cautions(135, 200, SmokingStatus::Occasional),
            vec![Caution::OccasionalSmokerModerateIntensity]
        );

        // (134 - 70) / 130 = 0.492
        assert!(!SmokingAssessment::new(134, 200).moderate_intensity);
        assert!(smoking_cautions(134, 200, SmokingStatus::Occasional).is_empty());
    }

    #[test]
    fn test_moderate_band_upper_edge() {
        // (140 - 70) / 100 = 0.7, still moderate and not high
        let assessment = SmokingAssessment::new(140, 170);
        assert_eq!(assessment.intensity, 0.7);
        assert!(assessment.moderate_intensity);
        assert!(!assessment.high_intensity);

        // (141 - 70) / 100 = 0.71
        let assessment = SmokingAssessment::new(141, 170);
        assert!(assessment.high_intensity);
        assert!(!assessment.moderate_intensity);
        assert_eq!(
            smoking_cautions(141, 170, SmokingStatus::Occasional),
            vec![Caution::OccasionalSmokerHighIntensity]
        );
    }

    #[test]
    fn test_parse_status() {
        assert_eq!("None".parse::<SmokingStatus>(), Ok(SmokingStatus::Never));
        assert_eq!("very less".parse::<SmokingStatus>(), Ok(SmokingStatus::Light));
        assert_eq!(" Occasional ".parse::<SmokingStatus>(), Ok(SmokingStatus::Occasional));
        assert_eq!("Very Much".parse::<SmokingStatus>(), Ok(SmokingStatus::Heavy));
        assert_eq!(
            "Sometimes".parse::<SmokingStatus>(),
            Err(ParseSmokingStatusError("Sometimes".to_owned()))
        );
    }

    #[test]
    fn test_severity_order() {
        assert!(Caution::HeavySmoker.severity() > Caution::HighIntensity.severity());
        assert_eq!(
            Caution::HeavySmoker.to_string(),
            format!("Heavy Smoker Warning: {}", Caution::HeavySmoker.message())
        );
    }

    #[test]
    fn test_repeatable() {
        for status in SmokingStatus::ALL {
            assert_eq!(
                smoking_cautions(150, 180, status),
                smoking_cautions(150, 180, status)
            );
        }
    }
}
