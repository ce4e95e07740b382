//! In-memory platform doubles.
//!
//! Both mocks are cheap handles over shared state: keep a clone, hand the
//! other to the adapter, and inspect or drive the platform through the clone.

use crate::error::VoiceError;
use crate::platform::{
    RecognitionConfig, RecognitionEvent, RecognitionHandler, SpeechRecognizer,
    SpeechSynthesizer, TranscriptAlternative, Utterance, VoiceInfo,
};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Recorded state of a [`MockSynthesizer`].
#[derive(Debug, Default)]
pub struct SynthState {
    pub voices: Vec<VoiceInfo>,
    pub speaking: bool,
    pub paused: bool,
    /// Every utterance handed to the engine, in order.
    pub spoken: Vec<Utterance>,
    /// Ids of utterances cut off by `cancel`.
    pub cancelled: Vec<u64>,
    pub cancel_calls: usize,
    pub resume_calls: usize,
    /// When set, the next `speak` fails with this playback error.
    pub fail_next: Option<String>,
}

impl SynthState {
    /// The utterance currently audible, if any.
    pub fn current(&self) -> Option<&Utterance> {
        if self.speaking {
            self.spoken.last()
        } else {
            None
        }
    }
}

/// Synthesis engine that records calls instead of producing audio.
///
/// `speak` marks the engine as speaking until [`finish`](Self::finish) or
/// `cancel` is called.
#[derive(Debug, Clone, Default)]
pub struct MockSynthesizer {
    state: Arc<Mutex<SynthState>>,
}

impl MockSynthesizer {
    pub fn with_voices(voices: Vec<VoiceInfo>) -> Self {
        let mock = Self::default();
        mock.set_voices(voices);
        mock
    }

    pub fn state(&self) -> MutexGuard<'_, SynthState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_voices(&self, voices: Vec<VoiceInfo>) {
        self.state().voices = voices;
    }

    pub fn spoken(&self) -> Vec<Utterance> {
        self.state().spoken.clone()
    }

    /// Ends the current utterance as if playback completed.
    pub fn finish(&self) {
        self.state().speaking = false;
    }
}

impl SpeechSynthesizer for MockSynthesizer {
    fn voices(&self) -> Vec<VoiceInfo> {
        self.state().voices.clone()
    }

    fn is_speaking(&self) -> bool {
        self.state().speaking
    }

    fn is_paused(&self) -> bool {
        self.state().paused
    }

    fn cancel(&mut self) {
        let mut state = self.state();
        state.cancel_calls += 1;
        let current = state.current().map(|u| u.id);
        if let Some(id) = current {
            state.cancelled.push(id);
        }
        state.speaking = false;
    }

    fn resume(&mut self) {
        let mut state = self.state();
        state.resume_calls += 1;
        state.paused = false;
    }

    fn speak(&mut self, utterance: Utterance) -> Result<(), VoiceError> {
        let mut state = self.state();
        if let Some(error) = state.fail_next.take() {
            return Err(VoiceError::Playback(error));
        }
        state.spoken.push(utterance);
        state.speaking = true;
        Ok(())
    }
}

/// Recorded state of a [`MockRecognizer`].
#[derive(Default)]
pub struct RecognizerState {
    /// Configuration of every started session.
    pub starts: Vec<RecognitionConfig>,
    pub stop_calls: usize,
    /// When set, the next `start` fails with this error.
    pub fail_next: Option<String>,
    handler: Option<RecognitionHandler>,
}

impl fmt::Debug for RecognizerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecognizerState")
            .field("starts", &self.starts)
            .field("stop_calls", &self.stop_calls)
            .field("fail_next", &self.fail_next)
            .field("capturing", &self.handler.is_some())
            .finish()
    }
}

/// Recognition engine driven by the test through [`deliver`](Self::deliver).
#[derive(Debug, Clone, Default)]
pub struct MockRecognizer {
    state: Arc<Mutex<RecognizerState>>,
}

impl MockRecognizer {
    pub fn state(&self) -> MutexGuard<'_, RecognizerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether a session is waiting for a result.
    pub fn is_capturing(&self) -> bool {
        self.state().handler.is_some()
    }

    /// Delivers `event` to the active session. Returns `false` when no
    /// session is waiting.
    pub fn deliver(&self, event: RecognitionEvent) -> bool {
        // Release the lock before running the handler.
        let handler = self.state().handler.take();
        match handler {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }

    /// Delivers a single-alternative result.
    pub fn deliver_transcript(&self, text: &str) -> bool {
        self.deliver(RecognitionEvent::Result(vec![vec![
            TranscriptAlternative::new(text, 0.9),
        ]]))
    }
}

impl SpeechRecognizer for MockRecognizer {
    fn start(
        &mut self,
        config: &RecognitionConfig,
        handler: RecognitionHandler,
    ) -> Result<(), VoiceError> {
        let mut state = self.state();
        if let Some(error) = state.fail_next.take() {
            return Err(VoiceError::Recognition(error));
        }
        state.starts.push(config.clone());
        state.handler = Some(handler);
        Ok(())
    }

    fn stop(&mut self) {
        let mut state = self.state();
        state.stop_calls += 1;
        state.handler = None;
    }
}
