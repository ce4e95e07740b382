use crate::platform::{PlaybackEvent, SpeechRecognizer, SpeechSynthesizer, VoiceInfo};
use crate::stt::Dictation;
use crate::tts::{SpeakOutcome, Speaker};
use roleplay_types::Emotion;
use tracing::{debug, warn};

/// The speech output adapter: customer voice plus trainee dictation.
///
/// Either capability may be absent, in which case the matching operations
/// are logged no-ops.
#[derive(Debug)]
pub struct SpeechOutput {
    speaker: Option<Speaker>,
    dictation: Option<Dictation>,
}

impl SpeechOutput {
    pub fn new(
        synth: Option<Box<dyn SpeechSynthesizer>>,
        recognizer: Option<Box<dyn SpeechRecognizer>>,
    ) -> Self {
        if synth.is_none() {
            warn!("speech synthesis not supported, customer lines will not be spoken");
        }
        if recognizer.is_none() {
            warn!("speech recognition not supported, dictation disabled");
        }
        Self {
            speaker: synth.map(Speaker::new),
            dictation: recognizer.map(Dictation::new),
        }
    }

    /// Text-only adapter with neither capability.
    pub fn disabled() -> Self {
        Self {
            speaker: None,
            dictation: None,
        }
    }

    pub fn can_speak(&self) -> bool {
        self.speaker.is_some()
    }

    pub fn can_listen(&self) -> bool {
        self.dictation.is_some()
    }

    pub fn is_voice_ready(&self) -> bool {
        self.speaker.as_ref().is_some_and(Speaker::is_ready)
    }

    pub fn selected_voice(&self) -> Option<&VoiceInfo> {
        self.speaker.as_ref().and_then(Speaker::selected_voice)
    }

    /// Forwards the platform's voice readiness notification.
    pub fn voices_changed(&mut self) -> Option<SpeakOutcome> {
        self.speaker.as_mut().and_then(Speaker::voices_changed)
    }

    /// Speaks a customer line. Never fails; see [`SpeakOutcome`].
    pub fn speak(&mut self, text: &str, emotion: Option<Emotion>) -> SpeakOutcome {
        match self.speaker.as_mut() {
            Some(speaker) => speaker.speak(text, emotion),
            None => {
                debug!("speech synthesis unavailable, skipping utterance");
                SpeakOutcome::Unavailable
            }
        }
    }

    /// Forwards a playback notification for utterance `id`.
    pub fn playback_event(&self, id: u64, event: PlaybackEvent) {
        if let Some(speaker) = &self.speaker {
            speaker.playback_event(id, &event);
        }
    }

    /// Starts single-shot dictation; `on_result` receives the transcript.
    /// Returns whether capture started.
    pub fn start_listening<F>(&mut self, on_result: F) -> bool
    where
        F: FnOnce(String) + Send + 'static,
    {
        match self.dictation.as_mut() {
            Some(dictation) => dictation.start(on_result),
            None => {
                warn!("speech recognition not supported");
                false
            }
        }
    }

    pub fn stop_listening(&mut self) {
        if let Some(dictation) = self.dictation.as_mut() {
            dictation.stop();
        }
    }

    pub fn is_listening(&self) -> bool {
        self.dictation.as_ref().is_some_and(Dictation::is_active)
    }
}

impl Default for SpeechOutput {
    fn default() -> Self {
        Self::disabled()
    }
}
