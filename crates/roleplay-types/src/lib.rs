//! Shared types for the customer role-play trainer.
//!
//! This crate provides the value types passed between the dialogue engine,
//! the speech output adapter and the session layer: the customer's
//! [`Emotion`], the static [`CustomerDetails`] record and the transcript
//! [`Message`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod customer;
mod message;

pub use customer::CustomerDetails;
pub use message::Message;

/// Categorical affect of the simulated customer.
///
/// Drives both the visual indicator and the speech prosody profile.
/// `Neutral` stands in for "unspecified".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Frustrated,
    Confused,
    Anxious,
    Calm,
    Satisfied,
    #[default]
    Neutral,
}

impl Emotion {
    /// All emotions, in declaration order.
    pub const ALL: [Emotion; 6] = [
        Self::Frustrated,
        Self::Confused,
        Self::Anxious,
        Self::Calm,
        Self::Satisfied,
        Self::Neutral,
    ];

    /// Returns the lowercase label for this emotion.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frustrated => "frustrated",
            Self::Confused => "confused",
            Self::Anxious => "anxious",
            Self::Calm => "calm",
            Self::Satisfied => "satisfied",
            Self::Neutral => "neutral",
        }
    }

    /// Returns the CSS colour of the emotion indicator dot.
    ///
    /// Calm and neutral share the grey used for "no particular emotion".
    pub fn indicator_color(self) -> &'static str {
        match self {
            Self::Frustrated => "#dc3545",
            Self::Anxious => "#ffc107",
            Self::Confused => "#17a2b8",
            Self::Satisfied => "#28a745",
            Self::Calm | Self::Neutral => "#6c757d",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Emotion {
    type Err = ParseEmotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|emotion| emotion.as_str() == s)
            .ok_or_else(|| ParseEmotionError(s.to_string()))
    }
}

/// Error returned when parsing an unknown emotion label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown emotion: {0}")]
pub struct ParseEmotionError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emotion_label_round_trip() {
        for emotion in Emotion::ALL {
            assert_eq!(emotion.as_str().parse::<Emotion>(), Ok(emotion));
        }
    }

    #[test]
    fn emotion_unknown_label() {
        let err = "furious".parse::<Emotion>().unwrap_err();
        assert_eq!(err, ParseEmotionError("furious".to_string()));
        assert_eq!(err.to_string(), "unknown emotion: furious");
    }

    #[test]
    fn emotion_serializes_lowercase() {
        let json = serde_json::to_string(&Emotion::Anxious).unwrap();
        assert_eq!(json, "\"anxious\"");
        let parsed: Emotion = serde_json::from_str("\"satisfied\"").unwrap();
        assert_eq!(parsed, Emotion::Satisfied);
    }

    #[test]
    fn emotion_default_is_neutral() {
        assert_eq!(Emotion::default(), Emotion::Neutral);
    }

    #[test]
    fn indicator_colors() {
        assert_eq!(Emotion::Frustrated.indicator_color(), "#dc3545");
        assert_eq!(Emotion::Anxious.indicator_color(), "#ffc107");
        assert_eq!(Emotion::Confused.indicator_color(), "#17a2b8");
        assert_eq!(Emotion::Satisfied.indicator_color(), "#28a745");
        assert_eq!(Emotion::Calm.indicator_color(), "#6c757d");
        assert_eq!(Emotion::Neutral.indicator_color(), "#6c757d");
    }
}
