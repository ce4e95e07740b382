use roleplay_dialogue::DialogueError;
use thiserror::Error;

/// Errors that prevent a training session from being set up.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to load scenario catalogue {path}: {source}")]
    Catalogue {
        path: String,
        #[source]
        source: DialogueError,
    },
}
