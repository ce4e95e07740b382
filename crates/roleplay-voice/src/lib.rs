//! Speech output adapter for the customer role-play trainer.
//!
//! Speaks the customer's lines through the platform's speech-synthesis
//! engine with emotion-dependent prosody, and wraps the platform's
//! speech-recognition engine for trainee dictation.
//!
//! The platform capabilities are consumed through two traits,
//! [`SpeechSynthesizer`] and [`SpeechRecognizer`]. Either may be missing;
//! the adapter then degrades to a logged no-op. Nothing in this crate is
//! fatal: playback and recognition errors are logged and never retried.
//!
//! Concurrency discipline is "last writer wins": every new utterance cancels
//! the one in flight, so at most one line is audible at a time. Platform
//! notifications (voice readiness, recognition results) are single-shot and
//! are forwarded in by the caller or delivered through `FnOnce` handlers.

pub mod error;
pub mod mock;
pub mod platform;
pub mod prosody;
pub mod selection;
pub mod service;
pub mod stt;
pub mod tts;

pub use error::VoiceError;
pub use platform::{
    PlaybackEvent, RecognitionConfig, RecognitionEvent, RecognitionHandler, SpeechRecognizer,
    SpeechSynthesizer, TranscriptAlternative, Utterance, VoiceInfo,
};
pub use prosody::{add_natural_pauses, Prosody, BRITISH_ENGLISH};
pub use selection::select_voice;
pub use service::SpeechOutput;
pub use stt::Dictation;
pub use tts::{SpeakOutcome, Speaker};
