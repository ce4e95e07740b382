use crate::platform::{PlaybackEvent, SpeechSynthesizer, Utterance, VoiceInfo};
use crate::prosody::{add_natural_pauses, Prosody, BRITISH_ENGLISH};
use crate::selection::select_voice;
use roleplay_types::Emotion;
use std::fmt;
use tracing::{debug, info, warn};

/// What happened to a `speak` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeakOutcome {
    /// Handed to the engine under this utterance id.
    Dispatched(u64),
    /// Held until voice selection completes.
    Buffered,
    /// No synthesis capability.
    Unavailable,
    /// The engine rejected the utterance.
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
struct PendingSpeech {
    text: String,
    emotion: Option<Emotion>,
}

#[derive(Debug, Clone, PartialEq)]
enum VoiceState {
    AwaitingVoices,
    /// Selection finished; `None` when the engine listed no voices at all.
    Ready(Option<VoiceInfo>),
}

/// Text-to-speech half of the adapter.
///
/// Owns the synthesis engine, the session voice, and a one-slot buffer for
/// the request made before the voice list arrived.
pub struct Speaker {
    synth: Box<dyn SpeechSynthesizer>,
    voice: VoiceState,
    pending: Option<PendingSpeech>,
    next_id: u64,
}

impl Speaker {
    /// Wraps `synth`, cancelling anything it is still saying.
    ///
    /// The voice is selected immediately when the engine already lists
    /// voices; otherwise selection waits for [`voices_changed`](Self::voices_changed).
    pub fn new(mut synth: Box<dyn SpeechSynthesizer>) -> Self {
        if synth.is_speaking() {
            synth.cancel();
        }

        let mut speaker = Self {
            synth,
            voice: VoiceState::AwaitingVoices,
            pending: None,
            next_id: 1,
        };

        if speaker.synth.voices().is_empty() {
            info!("waiting for synthesis voices to become available");
        } else {
            speaker.select();
        }
        speaker
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.voice, VoiceState::Ready(_))
    }

    pub fn selected_voice(&self) -> Option<&VoiceInfo> {
        match &self.voice {
            VoiceState::Ready(voice) => voice.as_ref(),
            VoiceState::AwaitingVoices => None,
        }
    }

    /// Handles the engine's one-time voice readiness notification.
    ///
    /// Selects the voice and flushes the buffered request, returning its
    /// outcome. Notifications after selection are ignored.
    pub fn voices_changed(&mut self) -> Option<SpeakOutcome> {
        if self.is_ready() {
            debug!("voice already selected, ignoring voices-changed notification");
            return None;
        }
        self.select();

        let pending = self.pending.take()?;
        debug!("speaking buffered message");
        Some(self.speak(&pending.text, pending.emotion))
    }

    fn select(&mut self) {
        let voices = self.synth.voices();
        let selected = select_voice(&voices).cloned();
        info!(
            voice = selected.as_ref().map_or("<engine default>", |v| v.name.as_str()),
            "selected synthesis voice"
        );
        self.voice = VoiceState::Ready(selected);
    }

    /// Speaks `text` with the prosody for `emotion`, cancelling any
    /// utterance in progress. Before voice selection the request is
    /// buffered instead, replacing any earlier buffered request.
    pub fn speak(&mut self, text: &str, emotion: Option<Emotion>) -> SpeakOutcome {
        if self.synth.is_speaking() {
            debug!("cancelling previous utterance");
            self.synth.cancel();
        }

        let voice = match &self.voice {
            VoiceState::AwaitingVoices => {
                let replaced = self.pending.replace(PendingSpeech {
                    text: text.to_string(),
                    emotion,
                });
                debug!(
                    replaced = replaced.is_some(),
                    "voice not ready, buffering message"
                );
                return SpeakOutcome::Buffered;
            }
            VoiceState::Ready(voice) => voice.clone(),
        };

        let id = self.next_id;
        self.next_id += 1;

        let utterance = Utterance {
            id,
            text: add_natural_pauses(text),
            lang: BRITISH_ENGLISH.to_string(),
            voice,
            prosody: Prosody::for_emotion(emotion),
        };
        debug!(
            id,
            emotion = emotion.map_or("none", Emotion::as_str),
            rate = utterance.prosody.rate,
            pitch = utterance.prosody.pitch,
            volume = utterance.prosody.volume,
            "dispatching utterance"
        );

        if let Err(e) = self.synth.speak(utterance) {
            warn!(id, error = %e, "speech synthesis rejected utterance");
            return SpeakOutcome::Failed;
        }

        // Some engines start paused until the user has interacted with the page.
        if self.synth.is_paused() {
            debug!("speech synthesis was paused, resuming");
            self.synth.resume();
        }

        SpeakOutcome::Dispatched(id)
    }

    /// Logs a playback notification for utterance `id`.
    pub fn playback_event(&self, id: u64, event: &PlaybackEvent) {
        match event {
            PlaybackEvent::Started => debug!(id, "speech started"),
            PlaybackEvent::Ended => debug!(id, "speech ended"),
            PlaybackEvent::Error(error) => warn!(id, %error, "speech playback error"),
        }
    }
}

impl fmt::Debug for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Speaker")
            .field("voice", &self.voice)
            .field("pending", &self.pending)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}
