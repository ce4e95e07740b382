//! Scenario catalogue stored as a flat turn table.
//!
//! Scenario files nest follow-up turns under their opening turn
//! ([`ScenarioSpec`]). On load the nesting is flattened: every [`Turn`] lives
//! in one vector and each scenario records the index of its opening turn and
//! the contiguous range holding its follow-ups. Lookups are plain
//! `(scenario, step)` index arithmetic.

use crate::error::DialogueError;
use roleplay_types::{CustomerDetails, Emotion};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::Path;

/// One scripted customer utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub text: String,
    /// Descriptive tags for the turn. Not consulted when classifying input.
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub emotion: Emotion,
}

impl Turn {
    pub fn new(text: impl Into<String>, keywords: &[&str], emotion: Emotion) -> Self {
        Self {
            text: text.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            emotion,
        }
    }
}

/// A scenario as written in a catalogue file: an opening turn followed by
/// the follow-ups surfaced while the trainee keeps engaging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub emotion: Emotion,
    #[serde(default)]
    pub follow_ups: Vec<Turn>,
}

impl ScenarioSpec {
    pub fn new(opening: Turn, follow_ups: Vec<Turn>) -> Self {
        Self {
            text: opening.text,
            keywords: opening.keywords,
            emotion: opening.emotion,
            follow_ups,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogueFile {
    customer: CustomerDetails,
    #[serde(default)]
    scenarios: Vec<ScenarioSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScenarioEntry {
    pub(crate) opening: usize,
    pub(crate) follow_ups: Range<usize>,
}

/// Immutable, ordered, cyclic catalogue of scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioCatalogue {
    customer: CustomerDetails,
    pub(crate) turns: Vec<Turn>,
    pub(crate) scenarios: Vec<ScenarioEntry>,
}

impl ScenarioCatalogue {
    /// Builds a catalogue from nested scenario specs.
    ///
    /// # Errors
    ///
    /// Returns [`DialogueError::EmptyCatalogue`] when `specs` is empty and
    /// [`DialogueError::BlankTurn`] when any turn has blank text.
    pub fn from_specs(
        customer: CustomerDetails,
        specs: Vec<ScenarioSpec>,
    ) -> Result<Self, DialogueError> {
        if specs.is_empty() {
            return Err(DialogueError::EmptyCatalogue);
        }
        for (scenario, spec) in specs.iter().enumerate() {
            let blank = spec.text.trim().is_empty()
                || spec.follow_ups.iter().any(|t| t.text.trim().is_empty());
            if blank {
                return Err(DialogueError::BlankTurn { scenario });
            }
        }
        Ok(Self::flatten(customer, specs))
    }

    /// Parses a catalogue from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, DialogueError> {
        let file: CatalogueFile = toml::from_str(source)?;
        Self::from_specs(file.customer, file.scenarios)
    }

    /// Reads and parses a catalogue file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DialogueError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let catalogue = Self::from_toml_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            scenarios = catalogue.len(),
            "loaded scenario catalogue"
        );
        Ok(catalogue)
    }

    pub(crate) fn flatten(customer: CustomerDetails, specs: Vec<ScenarioSpec>) -> Self {
        let mut turns = Vec::new();
        let mut scenarios = Vec::with_capacity(specs.len());

        for spec in specs {
            let opening = turns.len();
            turns.push(Turn {
                text: spec.text,
                keywords: spec.keywords,
                emotion: spec.emotion,
            });
            let start = turns.len();
            turns.extend(spec.follow_ups);
            scenarios.push(ScenarioEntry {
                opening,
                follow_ups: start..turns.len(),
            });
        }

        Self {
            customer,
            turns,
            scenarios,
        }
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Customer identity attached to every scenario.
    pub fn customer(&self) -> &CustomerDetails {
        &self.customer
    }

    /// Opening turn of `scenario`.
    pub fn opening(&self, scenario: usize) -> Option<&Turn> {
        self.scenarios
            .get(scenario)
            .and_then(|entry| self.turns.get(entry.opening))
    }

    /// Follow-up turn `step` of `scenario`.
    pub fn follow_up(&self, scenario: usize, step: usize) -> Option<&Turn> {
        let entry = self.scenarios.get(scenario)?;
        if step >= entry.follow_ups.len() {
            return None;
        }
        self.turns.get(entry.follow_ups.start + step)
    }

    /// Number of follow-up turns in `scenario` (zero for unknown scenarios).
    pub fn follow_up_count(&self, scenario: usize) -> usize {
        self.scenarios
            .get(scenario)
            .map_or(0, |entry| entry.follow_ups.len())
    }
}

impl Default for ScenarioCatalogue {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> CustomerDetails {
        CustomerDetails::new("Alex Morgan", "STU1", "CN1")
    }

    #[test]
    fn flatten_lays_turns_out_contiguously() {
        let catalogue = ScenarioCatalogue::from_specs(
            customer(),
            vec![
                ScenarioSpec::new(
                    Turn::new("first", &[], Emotion::Calm),
                    vec![
                        Turn::new("first-a", &[], Emotion::Confused),
                        Turn::new("first-b", &[], Emotion::Anxious),
                    ],
                ),
                ScenarioSpec::new(Turn::new("second", &["tag"], Emotion::Frustrated), vec![]),
            ],
        )
        .unwrap();

        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.turns.len(), 4);
        assert_eq!(catalogue.opening(1).unwrap().text, "second");
        assert_eq!(catalogue.opening(1).unwrap().keywords, vec!["tag"]);
        assert_eq!(catalogue.follow_up(0, 1).unwrap().text, "first-b");
        assert_eq!(catalogue.follow_up(0, 2), None);
        assert_eq!(catalogue.follow_up_count(0), 2);
        assert_eq!(catalogue.follow_up_count(1), 0);
        assert_eq!(catalogue.follow_up_count(7), 0);
        assert_eq!(catalogue.opening(2), None);
    }

    #[test]
    fn empty_catalogue_is_rejected() {
        let err = ScenarioCatalogue::from_specs(customer(), vec![]).unwrap_err();
        assert!(matches!(err, DialogueError::EmptyCatalogue));
    }

    #[test]
    fn blank_follow_up_is_rejected() {
        let err = ScenarioCatalogue::from_specs(
            customer(),
            vec![
                ScenarioSpec::new(Turn::new("fine", &[], Emotion::Calm), vec![]),
                ScenarioSpec::new(
                    Turn::new("also fine", &[], Emotion::Calm),
                    vec![Turn::new("   ", &[], Emotion::Calm)],
                ),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, DialogueError::BlankTurn { scenario: 1 }));
    }

    #[test]
    fn parses_toml_catalogue() {
        let source = r#"
[customer]
name = "Alex Morgan"
student_id = "STU1"
center_number = "CN1"

[[scenarios]]
text = "My certificate never arrived."
keywords = ["certificate"]
emotion = "anxious"

[[scenarios.follow_ups]]
text = "It was posted three weeks ago."
emotion = "frustrated"

[[scenarios]]
text = "I want to change my exam venue."
"#;
        let catalogue = ScenarioCatalogue::from_toml_str(source).unwrap();
        assert_eq!(catalogue.customer().name, "Alex Morgan");
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.opening(0).unwrap().emotion, Emotion::Anxious);
        assert_eq!(
            catalogue.follow_up(0, 0).unwrap().emotion,
            Emotion::Frustrated
        );
        assert_eq!(catalogue.opening(1).unwrap().emotion, Emotion::Neutral);
        assert!(catalogue.opening(1).unwrap().keywords.is_empty());
    }

    #[test]
    fn toml_without_scenarios_is_rejected() {
        let source = r#"
[customer]
name = "Alex Morgan"
student_id = "STU1"
center_number = "CN1"
"#;
        let err = ScenarioCatalogue::from_toml_str(source).unwrap_err();
        assert!(matches!(err, DialogueError::EmptyCatalogue));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = ScenarioCatalogue::from_toml_str("[customer\nname=").unwrap_err();
        assert!(matches!(err, DialogueError::Parse(_)));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenarios.toml");
        std::fs::write(
            &path,
            r#"
[customer]
name = "Alex Morgan"
student_id = "STU1"
center_number = "CN1"

[[scenarios]]
text = "Hello?"
"#,
        )
        .unwrap();

        let catalogue = ScenarioCatalogue::load(&path).unwrap();
        assert_eq!(catalogue.opening(0).unwrap().text, "Hello?");
    }

    #[test]
    fn load_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScenarioCatalogue::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, DialogueError::Read(_)));
    }
}
