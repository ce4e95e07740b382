use thiserror::Error;

/// Errors raised while building a scenario catalogue.
///
/// Once a catalogue exists the engine itself cannot fail.
#[derive(Debug, Error)]
pub enum DialogueError {
    #[error("failed to read scenario catalogue: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse scenario catalogue: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("scenario catalogue contains no scenarios")]
    EmptyCatalogue,

    #[error("scenario {scenario} contains a turn with blank text")]
    BlankTurn { scenario: usize },
}
