//! Training-session wiring for the customer role-play trainer.
//!
//! A [`TrainingSession`] owns one dialogue engine and one speech output
//! adapter for a single trainee. It keeps the visible transcript, the
//! emotion currently shown for the customer, the draft input and the
//! microphone state, and forwards every customer line to the speech adapter.
//! Rendering is left to the caller.

pub mod config;
pub mod error;
pub mod session;
pub mod telemetry;

pub use config::{load_config, ConfigError, TrainerConfig};
pub use error::SessionError;
pub use session::{TrainingSession, COACHING_TIPS};
