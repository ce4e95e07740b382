//! Transcript entries shown to the trainee.

use crate::Emotion;
use serde::{Deserialize, Serialize};

/// One line of the visible transcript.
///
/// The transcript itself is an append-only `Vec<Message>` owned by the
/// session layer; the dialogue engine never sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    /// `true` for lines typed or dictated by the trainee.
    pub from_trainee: bool,
    /// Customer emotion at the time of the line. Always `None` for trainee lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
}

impl Message {
    /// A line entered by the trainee.
    pub fn trainee(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            from_trainee: true,
            emotion: None,
        }
    }

    /// A line spoken by the simulated customer.
    pub fn customer(text: impl Into<String>, emotion: Emotion) -> Self {
        Self {
            text: text.into(),
            from_trainee: false,
            emotion: Some(emotion),
        }
    }
}
