use thiserror::Error;

/// Errors reported by platform speech capabilities.
///
/// The adapter logs these; they never reach the trainee.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoiceError {
    #[error("capability unavailable: {0}")]
    Unavailable(String),

    #[error("playback error: {0}")]
    Playback(String),

    #[error("recognition error: {0}")]
    Recognition(String),
}
