use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::StateSnapshot;

pub type LanguageCode = String;

/// Identifies one translate request; late results carrying an older id are dropped
pub type RequestId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub term: String,
    pub gloss: String,
}

/// Output of the synchronous normalize → match → compose pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationOutcome {
    pub matches: Vec<MatchResult>,
    pub composed_text: String,
}

impl TranslationOutcome {
    pub fn found_any(&self) -> bool {
        !self.matches.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDetection {
    pub code: LanguageCode,
    pub display_name: String,
}

/// Result of running the classifier over a request's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub detection: LanguageDetection,
    /// Warning-wrapped translation when the text is not in the primary
    /// language; `None` leaves the composed text untouched.
    pub final_text: Option<String>,
}

impl Annotation {
    pub fn is_wrapped(&self) -> bool {
        self.final_text.is_some()
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    TranslationReady {
        request_id: RequestId,
        outcome: TranslationOutcome,
    },
    LanguageDetected {
        request_id: RequestId,
        annotation: Annotation,
    },
    DetectionFailed {
        request_id: RequestId,
        reason: String,
    },
    ShowState(StateSnapshot),
    BackendReady,
    /// Coordinator exited after Close; nothing follows on the UI channel
    BackendStopped,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    TextInput(String),
    Translate,
    Clear,
    Close,
}
