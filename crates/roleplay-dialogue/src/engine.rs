//! The conversation state machine.

use crate::catalogue::{ScenarioCatalogue, Turn};
use crate::classify::{classify, Intent};
use crate::emotion::reply_emotion;
use roleplay_types::{CustomerDetails, Emotion};
use serde::Serialize;
use tracing::{debug, info};

/// Reply when the input contains neither a helpful nor a resolution keyword.
pub const NOT_HELPFUL_REPLY: &str = "I'm not sure how that helps with my current issue. \
                                     Could you please provide more specific assistance?";

/// Reply when the trainee declares the issue resolved.
pub const RESOLVED_REPLY: &str =
    "Thank you for your help! That resolves my issue. I appreciate your assistance.";

/// Reply when the follow-ups are exhausted but the issue is not resolved yet.
pub const STUCK_REPLY: &str = "I'm still having issues with this. \
                               Could you please provide more specific assistance?";

/// Snapshot of the engine's mutable state.
///
/// `step` is always a valid follow-up index of the current scenario, or
/// exactly one past the end when the scenario has no follow-ups left.
/// `resolved` is cleared on every scenario transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SessionProgress {
    pub scenario_index: usize,
    pub step: usize,
    pub resolved: bool,
}

/// The opening line of the current scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningLine<'a> {
    pub text: &'a str,
    pub emotion: Emotion,
    pub customer: &'a CustomerDetails,
}

/// Which branch produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Identity,
    StudentId,
    Center,
    NotHelpful,
    Resolved,
    FollowUp,
    NextScenario,
    Stuck,
}

impl ReplyKind {
    /// Scripted replies come from the catalogue and carry a declared emotion.
    pub fn is_scripted(self) -> bool {
        matches!(self, Self::FollowUp | Self::NextScenario)
    }
}

/// The customer's next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// `None` asks the caller to keep the emotion it is currently showing.
    pub emotion: Option<Emotion>,
    pub kind: ReplyKind,
}

impl Reply {
    fn canned(kind: ReplyKind, text: String) -> Self {
        let emotion = reply_emotion(&text);
        Self {
            text,
            emotion,
            kind,
        }
    }

    fn scripted(kind: ReplyKind, turn: &Turn) -> Self {
        Self {
            text: turn.text.clone(),
            emotion: Some(turn.emotion),
            kind,
        }
    }
}

/// Tracks one trainee's progress through the scenario catalogue.
///
/// One engine per training session; never shared between sessions.
#[derive(Debug, Clone)]
pub struct DialogueEngine {
    catalogue: ScenarioCatalogue,
    progress: SessionProgress,
}

impl DialogueEngine {
    /// Creates an engine over the built-in catalogue.
    pub fn new() -> Self {
        Self::with_catalogue(ScenarioCatalogue::reference())
    }

    /// Creates an engine positioned at the first scenario, step 0, unresolved.
    pub fn with_catalogue(catalogue: ScenarioCatalogue) -> Self {
        Self {
            catalogue,
            progress: SessionProgress::default(),
        }
    }

    pub fn catalogue(&self) -> &ScenarioCatalogue {
        &self.catalogue
    }

    pub fn progress(&self) -> SessionProgress {
        self.progress
    }

    pub fn customer_details(&self) -> &CustomerDetails {
        self.catalogue.customer()
    }

    /// Returns the root turn of the current scenario. Does not touch progress.
    pub fn opening_line(&self) -> OpeningLine<'_> {
        let turn = self.current_opening();
        OpeningLine {
            text: &turn.text,
            emotion: turn.emotion,
            customer: self.catalogue.customer(),
        }
    }

    /// Classifies `input`, updates progress, and returns the next line.
    pub fn classify_and_advance(&mut self, input: &str) -> String {
        self.respond(input).text
    }

    /// Like [`classify_and_advance`](Self::classify_and_advance), but also
    /// reports the emotion and the branch taken.
    pub fn respond(&mut self, input: &str) -> Reply {
        let intent = classify(input);
        let customer = self.catalogue.customer();

        let reply = match intent {
            Intent::IdentityQuery => {
                Reply::canned(ReplyKind::Identity, format!("My name is {}.", customer.name))
            }
            Intent::IdQuery => Reply::canned(
                ReplyKind::StudentId,
                format!("My student ID is {}.", customer.student_id),
            ),
            Intent::CenterQuery => Reply::canned(
                ReplyKind::Center,
                format!("My center number is {}.", customer.center_number),
            ),
            Intent::Unhelpful => {
                Reply::canned(ReplyKind::NotHelpful, NOT_HELPFUL_REPLY.to_string())
            }
            Intent::Resolution => {
                // Advancing is deferred to the next helpful turn.
                self.progress.resolved = true;
                Reply::canned(ReplyKind::Resolved, RESOLVED_REPLY.to_string())
            }
            Intent::Helpful => self.advance(),
        };

        debug!(
            intent = intent.as_str(),
            mutating = intent.mutates_progress(),
            kind = ?reply.kind,
            scripted = reply.kind.is_scripted(),
            scenario = self.progress.scenario_index,
            step = self.progress.step,
            resolved = self.progress.resolved,
            "classified trainee input"
        );

        reply
    }

    fn advance(&mut self) -> Reply {
        let scenario = self.progress.scenario_index;
        let next = self.progress.step + 1;

        if let Some(turn) = self.catalogue.follow_up(scenario, next) {
            self.progress.step = next;
            return Reply::scripted(ReplyKind::FollowUp, turn);
        }

        if !self.progress.resolved {
            return Reply::canned(ReplyKind::Stuck, STUCK_REPLY.to_string());
        }

        let target = (scenario + 1) % self.catalogue.len();
        self.progress = SessionProgress {
            scenario_index: target,
            step: 0,
            resolved: false,
        };
        info!(from = scenario, to = target, "advanced to next scenario");

        Reply::scripted(ReplyKind::NextScenario, self.current_opening())
    }

    fn current_opening(&self) -> &Turn {
        // scenario_index only ever moves modulo the catalogue length
        let entry = &self.catalogue.scenarios[self.progress.scenario_index];
        &self.catalogue.turns[entry.opening]
    }
}

impl Default for DialogueEngine {
    fn default() -> Self {
        Self::new()
    }
}
