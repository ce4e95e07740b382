//! Contracts for the platform speech services.

use crate::error::VoiceError;
use crate::prosody::{Prosody, BRITISH_ENGLISH};
use serde::{Deserialize, Serialize};

/// A voice offered by the synthesis engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    /// Display name, e.g. `"Google UK English Female"`.
    pub name: String,
    /// BCP 47 language tag, e.g. `"en-GB"`.
    pub lang: String,
}

impl VoiceInfo {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// One line handed to the synthesis engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// Sequence number assigned by the adapter; echoed in [`PlaybackEvent`]s.
    pub id: u64,
    pub text: String,
    pub lang: String,
    /// `None` lets the engine pick its default voice.
    pub voice: Option<VoiceInfo>,
    pub prosody: Prosody,
}

/// Playback notifications the platform reports for an utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    Started,
    Ended,
    Error(String),
}

/// Platform text-to-speech engine.
///
/// Playback is fire-and-forget: `speak` queues the utterance and returns.
pub trait SpeechSynthesizer: Send {
    /// Voices currently known to the engine. May be empty until the engine
    /// fires its readiness notification.
    fn voices(&self) -> Vec<VoiceInfo>;

    fn is_speaking(&self) -> bool;

    fn is_paused(&self) -> bool;

    /// Stops the current utterance and drops anything queued.
    fn cancel(&mut self);

    fn resume(&mut self);

    fn speak(&mut self, utterance: Utterance) -> Result<(), VoiceError>;
}

/// Settings for one recognition session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionConfig {
    pub lang: String,
    /// Keep listening after the first utterance.
    pub continuous: bool,
    /// Report partial hypotheses.
    pub interim_results: bool,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            lang: BRITISH_ENGLISH.to_string(),
            continuous: false,
            interim_results: false,
        }
    }
}

/// One candidate transcript for a recognized utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptAlternative {
    pub transcript: String,
    pub confidence: f32,
}

impl TranscriptAlternative {
    pub fn new(transcript: impl Into<String>, confidence: f32) -> Self {
        Self {
            transcript: transcript.into(),
            confidence,
        }
    }
}

/// Outcome of a recognition session.
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    /// Result sets, each holding alternatives ordered best first.
    Result(Vec<Vec<TranscriptAlternative>>),
    Error(String),
}

/// Receives the single outcome of a recognition session.
pub type RecognitionHandler = Box<dyn FnOnce(RecognitionEvent) + Send>;

/// Platform speech-to-text engine.
pub trait SpeechRecognizer: Send {
    /// Begins capture. The engine calls `handler` at most once, with either
    /// the recognized result or an error. A stalled engine never calls it.
    fn start(
        &mut self,
        config: &RecognitionConfig,
        handler: RecognitionHandler,
    ) -> Result<(), VoiceError>;

    /// Ends capture. The pending handler, if any, is dropped uncalled.
    fn stop(&mut self);
}
