//! The simulated customer's identity record.

use serde::{Deserialize, Serialize};

/// Static identity attached to a scenario.
///
/// Constant for the whole session; the trainee can ask for any field and the
/// customer answers with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    /// Customer's full name.
    pub name: String,
    /// Student identifier, e.g. `STU2024001`.
    pub student_id: String,
    /// Exam center number, e.g. `CN12345`.
    pub center_number: String,
}

impl CustomerDetails {
    pub fn new(
        name: impl Into<String>,
        student_id: impl Into<String>,
        center_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            student_id: student_id.into(),
            center_number: center_number.into(),
        }
    }
}
