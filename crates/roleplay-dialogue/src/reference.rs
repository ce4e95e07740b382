//! Built-in exam-support catalogue.

use crate::catalogue::{ScenarioCatalogue, ScenarioSpec, Turn};
use roleplay_types::{CustomerDetails, Emotion};

impl ScenarioCatalogue {
    /// The built-in catalogue: four exam-administration problems raised by
    /// the same student.
    pub fn reference() -> Self {
        let customer = CustomerDetails::new("Sarah Johnson", "STU2024001", "CN12345");

        let scenarios = vec![
            ScenarioSpec::new(
                Turn::new(
                    "Hello, I'm having trouble with my exam registration. The system keeps \
                     showing an error message when I try to submit my application. I've been \
                     trying for hours and I'm getting really frustrated. Can you help me?",
                    &["help", "error", "registration", "submit"],
                    Emotion::Frustrated,
                ),
                vec![
                    Turn::new(
                        "The error message says 'Invalid student ID format'. I've checked my \
                         ID number multiple times and it's correct. I don't understand why \
                         it's not working.",
                        &["id", "format", "invalid", "number"],
                        Emotion::Confused,
                    ),
                    Turn::new(
                        "I need to register for my final exams by tomorrow, and I'm really \
                         worried I won't be able to. What should I do?",
                        &["deadline", "tomorrow", "worried", "urgent"],
                        Emotion::Anxious,
                    ),
                ],
            ),
            ScenarioSpec::new(
                Turn::new(
                    "I've just received my exam timetable and there's a conflict between two \
                     of my exams. They're scheduled for the same time on the same day. I don't \
                     know what to do about this.",
                    &["timetable", "conflict", "schedule", "same time"],
                    Emotion::Anxious,
                ),
                vec![Turn::new(
                    "Both exams are core modules for my degree, and I can't afford to miss \
                     either of them. Is there any way to reschedule one of them?",
                    &["core", "modules", "reschedule", "important"],
                    Emotion::Anxious,
                )],
            ),
            ScenarioSpec::new(
                Turn::new(
                    "I need to request special accommodations for my exams due to my \
                     disability. I've submitted the medical documentation but haven't heard \
                     back yet. The exams are in two weeks.",
                    &["accommodations", "disability", "medical", "documentation"],
                    Emotion::Anxious,
                ),
                vec![Turn::new(
                    "I have dyslexia and need extra time and a quiet room. I submitted all \
                     the required forms last month. Can you check the status of my request?",
                    &["dyslexia", "extra time", "quiet room", "status"],
                    Emotion::Calm,
                )],
            ),
            ScenarioSpec::new(
                Turn::new(
                    "I missed my exam yesterday because of a family emergency. I have the \
                     documentation to prove it. What's the process for applying for a resit?",
                    &["missed", "emergency", "documentation", "resit"],
                    Emotion::Calm,
                ),
                vec![Turn::new(
                    "I have the hospital documents and a letter from my doctor. When is the \
                     deadline to submit these for consideration?",
                    &["hospital", "doctor", "deadline", "submit"],
                    Emotion::Calm,
                )],
            ),
        ];

        Self::flatten(customer, scenarios)
    }
}
