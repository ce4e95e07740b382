//! Dialogue engine for the customer role-play trainer.
//!
//! Holds a fixed catalogue of customer scenarios and walks the trainee
//! through them. Every trainee submission is routed by keyword-substring
//! classification into one of six branches (identity, student ID, center
//! number, unhelpful, resolution, helpful); only the resolution and helpful
//! branches touch the session progress.
//!
//! Scenarios are stored as a flat turn table indexed by
//! `(scenario, step)`. The engine never fails: a classification miss is the
//! designed fallback branch, and the scenario index wraps around the
//! catalogue.
//!
//! ```rust
//! use roleplay_dialogue::DialogueEngine;
//!
//! let mut engine = DialogueEngine::new();
//! let opening = engine.opening_line().text.to_string();
//! let reply = engine.classify_and_advance("What's your name?");
//! assert_eq!(reply, "My name is Sarah Johnson.");
//! assert_eq!(engine.opening_line().text, opening);
//! ```

pub mod catalogue;
pub mod classify;
pub mod emotion;
pub mod engine;
pub mod error;
mod reference;

pub use catalogue::{ScenarioCatalogue, ScenarioSpec, Turn};
pub use classify::{classify, Intent};
pub use emotion::reply_emotion;
pub use engine::{
    DialogueEngine, OpeningLine, Reply, ReplyKind, SessionProgress, NOT_HELPFUL_REPLY,
    RESOLVED_REPLY, STUCK_REPLY,
};
pub use error::DialogueError;
