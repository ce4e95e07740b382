//! Keyword-substring classification of trainee input.
//!
//! Matching is case-insensitive substring search against fixed keyword
//! sets: no tokenization, no stemming. `"id"` therefore also matches
//! `"did"` or `"provide"`; that is the documented behavior.

/// Probes for the customer's name.
pub const IDENTITY_KEYWORDS: &[&str] = &["name", "who are you"];

/// Probes for the student ID.
pub const ID_KEYWORDS: &[&str] = &["id", "student number"];

/// Probes for the exam center number.
pub const CENTER_KEYWORDS: &[&str] = &["center", "centre"];

/// Signals that the trainee is engaging with the problem.
pub const HELPFUL_KEYWORDS: &[&str] = &[
    "help",
    "assist",
    "support",
    "check",
    "verify",
    "confirm",
    "understand",
    "apologize",
];

/// Signals that the trainee considers the problem solved.
pub const RESOLUTION_KEYWORDS: &[&str] = &[
    "resolved",
    "fixed",
    "sorted",
    "done",
    "completed",
    "finished",
];

/// Response branch chosen for a trainee submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    IdentityQuery,
    IdQuery,
    CenterQuery,
    Unhelpful,
    Resolution,
    Helpful,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IdentityQuery => "identity_query",
            Self::IdQuery => "id_query",
            Self::CenterQuery => "center_query",
            Self::Unhelpful => "unhelpful",
            Self::Resolution => "resolution",
            Self::Helpful => "helpful",
        }
    }

    /// Whether this branch may change session progress.
    pub fn mutates_progress(self) -> bool {
        matches!(self, Self::Resolution | Self::Helpful)
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

/// Classifies free-text input. The first matching branch wins, in the order
/// identity, ID, center, unhelpful, resolution, helpful.
pub fn classify(input: &str) -> Intent {
    let input = input.to_lowercase();

    if contains_any(&input, IDENTITY_KEYWORDS) {
        return Intent::IdentityQuery;
    }
    if contains_any(&input, ID_KEYWORDS) {
        return Intent::IdQuery;
    }
    if contains_any(&input, CENTER_KEYWORDS) {
        return Intent::CenterQuery;
    }

    let helpful = contains_any(&input, HELPFUL_KEYWORDS);
    let resolved = contains_any(&input, RESOLUTION_KEYWORDS);

    if !helpful && !resolved {
        Intent::Unhelpful
    } else if resolved {
        Intent::Resolution
    } else {
        Intent::Helpful
    }
}
