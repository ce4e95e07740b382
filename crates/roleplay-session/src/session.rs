//! One trainee's conversation with the simulated customer.

use crate::config::TrainerConfig;
use crate::error::SessionError;
use roleplay_dialogue::{DialogueEngine, ScenarioCatalogue, SessionProgress};
use roleplay_types::{CustomerDetails, Emotion, Message};
use roleplay_voice::SpeechOutput;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info};

/// Guidance shown next to the conversation.
pub const COACHING_TIPS: [&str; 5] = [
    "Start by acknowledging the customer's issue",
    "Use empathetic language",
    "Ask clarifying questions when needed",
    "Provide clear, step-by-step solutions",
    "Confirm understanding before proceeding",
];

/// A training session: dialogue engine, speech adapter and transcript.
///
/// Constructed once per trainee and owned by the presentation layer.
#[derive(Debug)]
pub struct TrainingSession {
    engine: DialogueEngine,
    speech: SpeechOutput,
    transcript: Vec<Message>,
    current_emotion: Emotion,
    draft: String,
    reply_delay: Duration,
    speak_enabled: bool,
    dictation_enabled: bool,
    dictation_tx: mpsc::UnboundedSender<String>,
    dictation_rx: mpsc::UnboundedReceiver<String>,
    queued: VecDeque<QueuedReply>,
}

/// A trainee line waiting for the customer's answer.
#[derive(Debug)]
struct QueuedReply {
    input: String,
    due: Instant,
}

impl TrainingSession {
    /// Builds a session from `config`, using the configured scenario
    /// catalogue or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Catalogue`] if a configured catalogue file
    /// cannot be loaded.
    pub fn new(config: &TrainerConfig, speech: SpeechOutput) -> Result<Self, SessionError> {
        let catalogue = match config.session.scenarios_path.as_deref() {
            Some(path) => {
                ScenarioCatalogue::load(path).map_err(|source| SessionError::Catalogue {
                    path: path.to_string(),
                    source,
                })?
            }
            None => ScenarioCatalogue::reference(),
        };

        let engine = DialogueEngine::with_catalogue(catalogue);
        let (dictation_tx, dictation_rx) = mpsc::unbounded_channel();

        info!(
            scenarios = engine.catalogue().len(),
            customer = %engine.customer_details().name,
            "dialogue engine ready"
        );

        Ok(Self {
            current_emotion: engine.opening_line().emotion,
            engine,
            speech,
            transcript: Vec::new(),
            draft: String::new(),
            reply_delay: config.session.reply_delay(),
            speak_enabled: config.speech.enabled,
            dictation_enabled: config.speech.dictation,
            dictation_tx,
            dictation_rx,
            queued: VecDeque::new(),
        })
    }

    /// Shows and speaks the customer's opening line. Call once, before the
    /// first submission.
    pub fn start(&mut self) -> Message {
        let opening = self.engine.opening_line();
        let message = Message::customer(opening.text, opening.emotion);
        self.current_emotion = opening.emotion;
        info!(
            customer = %opening.customer.name,
            emotion = %opening.emotion,
            "training session started"
        );

        self.transcript.push(message.clone());
        self.say(&message.text, self.current_emotion);
        message
    }

    /// Submits a trainee line. Never waits.
    ///
    /// Blank input is ignored. Otherwise the line is added to the transcript
    /// at once, the draft is cleared, and the customer's answer is queued
    /// until the reply delay has passed. Returns when the answer is due.
    pub fn submit(&mut self, input: &str) -> Option<Instant> {
        if input.trim().is_empty() {
            return None;
        }

        self.transcript.push(Message::trainee(input));
        self.draft.clear();

        let due = Instant::now() + self.reply_delay;
        self.queued.push_back(QueuedReply {
            input: input.to_string(),
            due,
        });
        debug!(queued = self.queued.len(), "trainee line submitted");
        Some(due)
    }

    /// Submits the current draft.
    pub fn submit_draft(&mut self) -> Option<Instant> {
        let draft = std::mem::take(&mut self.draft);
        self.submit(&draft)
    }

    /// When the oldest queued answer is due, if any is queued.
    pub fn reply_due(&self) -> Option<Instant> {
        self.queued.front().map(|queued| queued.due)
    }

    /// Produces every queued answer whose delay has passed, oldest first.
    pub fn deliver_due_replies(&mut self) -> Vec<Message> {
        let now = Instant::now();
        let mut delivered = Vec::new();
        while self.queued.front().is_some_and(|queued| queued.due <= now) {
            if let Some(queued) = self.queued.pop_front() {
                delivered.push(self.reply_to(&queued.input));
            }
        }
        delivered
    }

    /// Waits for the oldest queued answer and produces it.
    ///
    /// Cancel safe: nothing changes until the delay has passed, so dropping
    /// the future leaves the answer queued.
    pub async fn next_reply(&mut self) -> Option<Message> {
        let due = self.reply_due()?;
        tokio::time::sleep_until(due).await;
        let queued = self.queued.pop_front()?;
        Some(self.reply_to(&queued.input))
    }

    fn reply_to(&mut self, input: &str) -> Message {
        let reply = self.engine.respond(input);
        let emotion = reply.emotion.unwrap_or(self.current_emotion);
        debug!(
            kind = ?reply.kind,
            emotion = %emotion,
            carried_over = reply.emotion.is_none(),
            "customer replied"
        );
        self.current_emotion = emotion;

        let message = Message::customer(reply.text, emotion);
        self.transcript.push(message.clone());
        self.say(&message.text, emotion);
        message
    }

    fn say(&mut self, text: &str, emotion: Emotion) {
        if self.speak_enabled {
            self.speech.speak(text, Some(emotion));
        }
    }

    /// The microphone button: stops an active capture, otherwise starts
    /// dictation. Returns whether the session is listening afterwards.
    pub fn toggle_listening(&mut self) -> bool {
        if self.speech.is_listening() {
            self.speech.stop_listening();
            return false;
        }
        if !self.dictation_enabled {
            debug!("dictation disabled by configuration");
            return false;
        }

        let tx = self.dictation_tx.clone();
        self.speech.start_listening(move |text| {
            // The session may be gone by the time the platform answers.
            let _ = tx.send(text);
        })
    }

    /// Moves dictated text, if any arrived, into the draft and returns it.
    pub fn poll_dictation(&mut self) -> Option<String> {
        let mut latest = None;
        while let Ok(text) = self.dictation_rx.try_recv() {
            latest = Some(text);
        }
        let text = latest?;
        self.draft.clone_from(&text);
        Some(text)
    }

    pub fn is_listening(&self) -> bool {
        self.speech.is_listening()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Emotion shown on the customer indicator.
    pub fn current_emotion(&self) -> Emotion {
        self.current_emotion
    }

    pub fn customer_details(&self) -> &CustomerDetails {
        self.engine.customer_details()
    }

    pub fn progress(&self) -> SessionProgress {
        self.engine.progress()
    }

    pub fn speech(&self) -> &SpeechOutput {
        &self.speech
    }

    /// Access for forwarding platform notifications (voice readiness,
    /// playback events) to the adapter.
    pub fn speech_mut(&mut self) -> &mut SpeechOutput {
        &mut self.speech
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_config() -> TrainerConfig {
        let mut config = TrainerConfig::default();
        config.session.reply_delay_ms = 0;
        config
    }

    #[test]
    fn emotion_starts_at_opening_emotion() {
        let session = TrainingSession::new(&instant_config(), SpeechOutput::disabled()).unwrap();
        assert_eq!(session.current_emotion(), Emotion::Frustrated);
        assert!(session.transcript().is_empty());
        assert_eq!(session.customer_details().center_number, "CN12345");
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session =
            TrainingSession::new(&instant_config(), SpeechOutput::disabled()).unwrap();
        session.start();

        assert_eq!(session.submit("   "), None);
        assert_eq!(session.submit(""), None);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.reply_due(), None);
    }

    #[tokio::test]
    async fn submit_draft_clears_draft() {
        let mut session =
            TrainingSession::new(&instant_config(), SpeechOutput::disabled()).unwrap();
        session.start();
        session.set_draft("Who are you?");

        assert!(session.submit_draft().is_some());
        assert_eq!(session.draft(), "");
        assert_eq!(session.transcript()[1], Message::trainee("Who are you?"));

        let reply = session.next_reply().await.unwrap();
        assert_eq!(reply.text, "My name is Sarah Johnson.");
    }

    #[tokio::test]
    async fn next_reply_without_queue_is_none() {
        let mut session =
            TrainingSession::new(&instant_config(), SpeechOutput::disabled()).unwrap();
        assert_eq!(session.next_reply().await, None);
        assert!(session.deliver_due_replies().is_empty());
    }

    #[test]
    fn tips() {
        assert_eq!(COACHING_TIPS.len(), 5);
        assert!(COACHING_TIPS[0].starts_with("Start by acknowledging"));
    }
}
