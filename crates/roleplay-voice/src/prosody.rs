//! Emotion-to-prosody mapping and pause insertion.

use roleplay_types::Emotion;
use serde::{Deserialize, Serialize};

/// Locale used for both synthesis and recognition.
pub const BRITISH_ENGLISH: &str = "en-GB";

/// Rate, pitch and volume multipliers for one utterance (1.0 is normal).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prosody {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Prosody {
    pub const NEUTRAL: Prosody = Prosody::new(1.0, 1.0, 1.0);

    pub const fn new(rate: f32, pitch: f32, volume: f32) -> Self {
        Self {
            rate,
            pitch,
            volume,
        }
    }

    /// Fixed lookup table keyed on emotion. Calm, neutral and unspecified
    /// all speak at normal settings.
    pub fn for_emotion(emotion: Option<Emotion>) -> Self {
        match emotion {
            Some(Emotion::Frustrated) => Self::new(1.1, 1.2, 1.1),
            Some(Emotion::Anxious) => Self::new(1.2, 1.3, 0.9),
            Some(Emotion::Confused) => Self::new(0.9, 1.1, 0.95),
            Some(Emotion::Satisfied) => Self::new(1.0, 1.1, 1.0),
            Some(Emotion::Calm | Emotion::Neutral) | None => Self::NEUTRAL,
        }
    }
}

impl Default for Prosody {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Inserts a space after every `.`, `?`, `!` and `,` so engines pause there.
///
/// Deliberately naive: no locale awareness, existing whitespace is kept, so
/// `"Hi. There"` becomes `"Hi.  There"`.
pub fn add_natural_pauses(text: &str) -> String {
    let extra = text
        .chars()
        .filter(|c| matches!(c, '.' | '?' | '!' | ','))
        .count();
    let mut out = String::with_capacity(text.len() + extra);
    for c in text.chars() {
        out.push(c);
        if matches!(c, '.' | '?' | '!' | ',') {
            out.push(' ');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prosody_table() {
        assert_eq!(
            Prosody::for_emotion(Some(Emotion::Frustrated)),
            Prosody::new(1.1, 1.2, 1.1)
        );
        assert_eq!(
            Prosody::for_emotion(Some(Emotion::Anxious)),
            Prosody::new(1.2, 1.3, 0.9)
        );
        assert_eq!(
            Prosody::for_emotion(Some(Emotion::Confused)),
            Prosody::new(0.9, 1.1, 0.95)
        );
        assert_eq!(
            Prosody::for_emotion(Some(Emotion::Satisfied)),
            Prosody::new(1.0, 1.1, 1.0)
        );
    }

    #[test]
    fn unlisted_emotions_are_neutral() {
        assert_eq!(Prosody::for_emotion(Some(Emotion::Calm)), Prosody::NEUTRAL);
        assert_eq!(Prosody::for_emotion(Some(Emotion::Neutral)), Prosody::NEUTRAL);
        assert_eq!(Prosody::for_emotion(None), Prosody::NEUTRAL);
    }

    #[test]
    fn pauses_follow_punctuation() {
        assert_eq!(
            add_natural_pauses("Hello,there.How?Now!"),
            "Hello, there. How? Now! "
        );
    }

    #[test]
    fn pauses_keep_existing_whitespace() {
        assert_eq!(add_natural_pauses("Hi. There"), "Hi.  There");
        assert_eq!(add_natural_pauses("no punctuation"), "no punctuation");
    }

    #[test]
    fn pauses_after_each_mark_in_a_run() {
        assert_eq!(add_natural_pauses("Wait..."), "Wait. . . ");
        assert_eq!(add_natural_pauses(""), "");
    }
}
