//! Emotion shown alongside canned, off-script replies.

use roleplay_types::Emotion;

/// Derives the emotion for a canned reply from its text.
///
/// Case-sensitive substring tests, first match wins. `None` means the
/// previously displayed emotion carries over. Scripted turns never go
/// through this; their declared emotion is authoritative.
pub fn reply_emotion(text: &str) -> Option<Emotion> {
    if text.contains("thank you") {
        Some(Emotion::Satisfied)
    } else if text.contains("not sure") {
        Some(Emotion::Frustrated)
    } else if text.contains("worried") {
        Some(Emotion::Anxious)
    } else if text.contains("understand") {
        Some(Emotion::Confused)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_apply_in_order() {
        assert_eq!(
            reply_emotion("thank you, though I'm not sure"),
            Some(Emotion::Satisfied)
        );
        assert_eq!(
            reply_emotion("I'm not sure and worried"),
            Some(Emotion::Frustrated)
        );
        assert_eq!(reply_emotion("I'm worried"), Some(Emotion::Anxious));
        assert_eq!(reply_emotion("I don't understand"), Some(Emotion::Confused));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(reply_emotion("Thank you for your help!"), None);
        assert_eq!(reply_emotion("NOT SURE"), None);
    }

    #[test]
    fn no_match_carries_over() {
        assert_eq!(reply_emotion("My name is Sarah Johnson."), None);
    }
}
