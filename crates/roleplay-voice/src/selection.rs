//! Voice selection policy.

use crate::platform::VoiceInfo;
use tracing::debug;

fn is_british(voice: &VoiceInfo) -> bool {
    voice.lang.contains("en-GB") || voice.name.contains("British") || voice.name.contains("UK")
}

fn is_female(voice: &VoiceInfo) -> bool {
    voice.name.contains("Female") || voice.name.contains("Woman")
}

fn is_english(voice: &VoiceInfo) -> bool {
    voice.lang.contains("en-")
}

/// Picks the session voice from the platform's list.
///
/// Preference order: a British English voice whose name signals a female
/// speaker, any British English voice, any English voice, the first voice.
/// Returns `None` only for an empty list. Matching is case-sensitive.
pub fn select_voice(voices: &[VoiceInfo]) -> Option<&VoiceInfo> {
    let british: Vec<&VoiceInfo> = voices.iter().filter(|v| is_british(v)).collect();
    debug!(available = voices.len(), british = british.len(), "selecting voice");

    if let Some(first_british) = british.first() {
        let female = british.iter().find(|v| is_female(v));
        return Some(female.copied().unwrap_or(*first_british));
    }

    voices.iter().find(|v| is_english(v)).or_else(|| voices.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(name: &str, lang: &str) -> VoiceInfo {
        VoiceInfo::new(name, lang)
    }

    #[test]
    fn prefers_female_british_voice() {
        let voices = vec![
            voice("Daniel", "en-GB"),
            voice("Samantha", "en-US"),
            voice("Google UK English Female", "en-GB"),
        ];
        assert_eq!(select_voice(&voices).unwrap().name, "Google UK English Female");
    }

    #[test]
    fn british_by_name_counts() {
        let voices = vec![voice("Samantha", "en-US"), voice("British Narrator", "und")];
        assert_eq!(select_voice(&voices).unwrap().name, "British Narrator");
    }

    #[test]
    fn falls_back_to_first_british_voice() {
        let voices = vec![
            voice("Alex", "en-US"),
            voice("Daniel", "en-GB"),
            voice("Arthur", "en-GB"),
        ];
        assert_eq!(select_voice(&voices).unwrap().name, "Daniel");
    }

    #[test]
    fn falls_back_to_any_english_voice() {
        let voices = vec![voice("Thomas", "fr-FR"), voice("Karen", "en-AU")];
        assert_eq!(select_voice(&voices).unwrap().name, "Karen");
    }

    #[test]
    fn falls_back_to_first_voice() {
        let voices = vec![voice("Thomas", "fr-FR"), voice("Anna", "de-DE")];
        assert_eq!(select_voice(&voices).unwrap().name, "Thomas");
    }

    #[test]
    fn empty_list_selects_nothing() {
        assert_eq!(select_voice(&[]), None);
    }

    #[test]
    fn matching_is_case_sensitive() {
        // lowercase "uk" is not a British marker
        let voices = vec![voice("Moira", "ga-IE"), voice("duke", "en-US")];
        assert_eq!(select_voice(&voices).unwrap().name, "duke");
    }
}
