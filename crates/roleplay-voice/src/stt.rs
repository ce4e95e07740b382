use crate::platform::{
    RecognitionConfig, RecognitionEvent, RecognitionHandler, SpeechRecognizer,
    TranscriptAlternative,
};
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Speech-to-text half of the adapter: single-shot trainee dictation.
pub struct Dictation {
    recognizer: Box<dyn SpeechRecognizer>,
    config: RecognitionConfig,
    /// Set while a capture is in flight; cleared by the result handler.
    active: Arc<AtomicBool>,
    /// Bumped on every start and stop. A handler only acts while its
    /// capture is still the current one.
    generation: Arc<AtomicU64>,
}

/// Top candidate of the first result set.
fn top_transcript(results: &[Vec<TranscriptAlternative>]) -> Option<&str> {
    results
        .first()
        .and_then(|alternatives| alternatives.first())
        .map(|alternative| alternative.transcript.as_str())
}

impl Dictation {
    /// Wraps `recognizer` with single-utterance, final-results-only capture
    /// in British English.
    pub fn new(recognizer: Box<dyn SpeechRecognizer>) -> Self {
        Self {
            recognizer,
            config: RecognitionConfig::default(),
            active: Arc::new(AtomicBool::new(false)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn config(&self) -> &RecognitionConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Starts one capture. `on_result` receives the top transcript at most
    /// once; recognition errors are logged and not retried.
    ///
    /// Returns whether capture started. A call while a capture is already
    /// active is ignored.
    pub fn start<F>(&mut self, on_result: F) -> bool
    where
        F: FnOnce(String) + Send + 'static,
    {
        if self.is_active() {
            debug!("speech recognition already active, ignoring start request");
            return false;
        }

        let capture = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let active = Arc::clone(&self.active);
        let generation = Arc::clone(&self.generation);
        let handler: RecognitionHandler = Box::new(move |event| {
            if generation.load(Ordering::SeqCst) != capture {
                debug!(capture, "dropping result of a superseded capture");
                return;
            }
            active.store(false, Ordering::SeqCst);
            match event {
                RecognitionEvent::Result(results) => match top_transcript(&results) {
                    Some(text) => {
                        debug!(chars = text.len(), "speech recognized");
                        on_result(text.to_string());
                    }
                    None => warn!("speech recognition returned no transcript"),
                },
                RecognitionEvent::Error(e) => error!(error = %e, "speech recognition error"),
            }
        });

        self.active.store(true, Ordering::SeqCst);
        if let Err(e) = self.recognizer.start(&self.config, handler) {
            self.active.store(false, Ordering::SeqCst);
            error!(error = %e, "failed to start speech recognition");
            return false;
        }
        debug!(lang = %self.config.lang, "speech recognition started");
        true
    }

    /// Stops the active capture. No-op when idle.
    pub fn stop(&mut self) {
        if self.active.swap(false, Ordering::SeqCst) {
            self.generation.fetch_add(1, Ordering::SeqCst);
            self.recognizer.stop();
            debug!("speech recognition stopped");
        }
    }
}

impl fmt::Debug for Dictation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictation")
            .field("config", &self.config)
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRecognizer;
    use std::sync::Mutex;

    fn collector() -> (Arc<Mutex<Vec<String>>>, impl FnOnce(String) + Send + 'static) {
        let results = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&results);
        (results, move |text| sink.lock().unwrap().push(text))
    }

    #[test]
    fn configures_single_shot_british_capture() {
        let recognizer = MockRecognizer::default();
        let mut dictation = Dictation::new(Box::new(recognizer.clone()));
        let (_, on_result) = collector();

        assert!(dictation.start(on_result));

        let starts = recognizer.state().starts.clone();
        assert_eq!(starts.len(), 1);
        assert_eq!(starts[0].lang, "en-GB");
        assert!(!starts[0].continuous);
        assert!(!starts[0].interim_results);
        assert!(dictation.is_active());
    }

    #[test]
    fn delivers_top_candidate_of_first_result() {
        let recognizer = MockRecognizer::default();
        let mut dictation = Dictation::new(Box::new(recognizer.clone()));
        let (results, on_result) = collector();
        dictation.start(on_result);

        let delivered = recognizer.deliver(RecognitionEvent::Result(vec![
            vec![
                TranscriptAlternative::new("let me check that", 0.92),
                TranscriptAlternative::new("let me chuck that", 0.41),
            ],
            vec![TranscriptAlternative::new("for you", 0.88)],
        ]));

        assert!(delivered);
        assert_eq!(*results.lock().unwrap(), vec!["let me check that"]);
        assert!(!dictation.is_active());
        // Single-shot: nothing left to deliver to.
        assert!(!recognizer.deliver_transcript("again"));
        assert_eq!(results.lock().unwrap().len(), 1);
    }

    #[test]
    fn error_is_logged_not_delivered() {
        let recognizer = MockRecognizer::default();
        let mut dictation = Dictation::new(Box::new(recognizer.clone()));
        let (results, on_result) = collector();
        dictation.start(on_result);

        recognizer.deliver(RecognitionEvent::Error("no-speech".to_string()));

        assert!(results.lock().unwrap().is_empty());
        assert!(!dictation.is_active());
        assert_eq!(recognizer.state().starts.len(), 1, "errors are not retried");
    }

    #[test]
    fn empty_result_is_not_delivered() {
        let recognizer = MockRecognizer::default();
        let mut dictation = Dictation::new(Box::new(recognizer.clone()));
        let (results, on_result) = collector();
        dictation.start(on_result);

        recognizer.deliver(RecognitionEvent::Result(vec![]));
        assert!(results.lock().unwrap().is_empty());
    }

    #[test]
    fn second_start_while_active_is_ignored() {
        let recognizer = MockRecognizer::default();
        let mut dictation = Dictation::new(Box::new(recognizer.clone()));
        let (_, first) = collector();
        let (_, second) = collector();

        assert!(dictation.start(first));
        assert!(!dictation.start(second));
        assert_eq!(recognizer.state().starts.len(), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let recognizer = MockRecognizer::default();
        let mut dictation = Dictation::new(Box::new(recognizer.clone()));
        let (results, on_result) = collector();

        dictation.stop();
        assert_eq!(recognizer.state().stop_calls, 0);

        dictation.start(on_result);
        dictation.stop();
        dictation.stop();
        assert_eq!(recognizer.state().stop_calls, 1);
        assert!(!recognizer.is_capturing());
        assert!(!recognizer.deliver_transcript("late"));
        assert!(results.lock().unwrap().is_empty());
    }

    #[test]
    fn failed_start_leaves_dictation_idle() {
        let recognizer = MockRecognizer::default();
        recognizer.state().fail_next = Some("not-allowed".to_string());
        let mut dictation = Dictation::new(Box::new(recognizer.clone()));
        let (_, on_result) = collector();

        assert!(!dictation.start(on_result));
        assert!(!dictation.is_active());
    }

    /// Keeps every handler it is given, even across `stop`.
    #[derive(Clone, Default)]
    struct LingeringRecognizer {
        handlers: Arc<Mutex<Vec<RecognitionHandler>>>,
    }

    impl LingeringRecognizer {
        fn deliver(&self, index: usize, text: &str) {
            let handler = self.handlers.lock().unwrap().remove(index);
            handler(RecognitionEvent::Result(vec![vec![TranscriptAlternative::new(
                text, 0.9,
            )]]));
        }
    }

    impl SpeechRecognizer for LingeringRecognizer {
        fn start(
            &mut self,
            _config: &RecognitionConfig,
            handler: RecognitionHandler,
        ) -> Result<(), crate::VoiceError> {
            self.handlers.lock().unwrap().push(handler);
            Ok(())
        }

        fn stop(&mut self) {}
    }

    #[test]
    fn late_result_of_stopped_capture_is_dropped() {
        let recognizer = LingeringRecognizer::default();
        let mut dictation = Dictation::new(Box::new(recognizer.clone()));
        let (stale, first) = collector();
        let (fresh, second) = collector();

        assert!(dictation.start(first));
        dictation.stop();
        assert!(dictation.start(second));

        recognizer.deliver(0, "from the old capture");
        assert!(dictation.is_active());
        assert!(stale.lock().unwrap().is_empty());

        recognizer.deliver(0, "from the new capture");
        assert!(!dictation.is_active());
        assert_eq!(*fresh.lock().unwrap(), vec!["from the new capture"]);
    }
}
