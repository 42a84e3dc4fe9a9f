//! Session state as an explicit transition function.
//!
//! The coordinator owns one `TranslatorState` and folds every event into it
//! with [`TranslatorState::apply`]. A translate request fans out into the
//! synchronous translation and the asynchronous language detection; their
//! results can arrive in either order and are joined here.

use serde::{Deserialize, Serialize};

use crate::types::{Annotation, RequestId, TranslationOutcome};

/// Shown in place of a language name when the classifier fails
pub const DETECTION_FAILED_LABEL: &str = "Erro na detecção de idioma";

#[derive(Debug, Clone)]
pub enum StateEvent {
    InputChanged(String),
    TranslateRequested {
        request_id: RequestId,
    },
    TranslationCompleted {
        request_id: RequestId,
        outcome: TranslationOutcome,
    },
    LanguageDetected {
        request_id: RequestId,
        annotation: Annotation,
    },
    ClassifierFailed {
        request_id: RequestId,
        reason: String,
    },
    Cleared,
}

/// What the presentation layer renders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub input_text: String,
    pub translation_result: String,
    pub detected_language: String,
    pub is_loading: bool,
    /// Both halves of the current request have reported
    pub settled: bool,
}

#[derive(Debug, Clone)]
enum DetectionStatus {
    Resolved(Annotation),
    Failed,
}

#[derive(Debug, Clone)]
struct PendingRequest {
    id: RequestId,
    text: String,
    outcome: Option<TranslationOutcome>,
    detection: Option<DetectionStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct TranslatorState {
    input_text: String,
    translation_result: String,
    detected_language: String,
    is_loading: bool,
    request: Option<PendingRequest>,
}

impl TranslatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(mut self, event: StateEvent) -> Self {
        match event {
            StateEvent::InputChanged(text) => {
                self.input_text = text;
            }
            StateEvent::TranslateRequested { request_id } => {
                self.is_loading = true;
                self.detected_language.clear();
                self.request = Some(PendingRequest {
                    id: request_id,
                    text: self.input_text.clone(),
                    outcome: None,
                    detection: None,
                });
            }
            StateEvent::TranslationCompleted {
                request_id,
                outcome,
            } => match self.current_mut(request_id) {
                Some(request) if request.outcome.is_none() => {
                    request.outcome = Some(outcome);
                    self.is_loading = false;
                    self.refresh_result();
                }
                _ => tracing::debug!("Dropping stale translation for request {request_id}"),
            },
            StateEvent::LanguageDetected {
                request_id,
                annotation,
            } => match self.current_mut(request_id) {
                Some(request) if request.detection.is_none() => {
                    let display_name = annotation.detection.display_name.clone();
                    request.detection = Some(DetectionStatus::Resolved(annotation));
                    self.detected_language = display_name;
                    self.refresh_result();
                }
                _ => tracing::debug!("Dropping stale detection for request {request_id}"),
            },
            StateEvent::ClassifierFailed { request_id, reason } => {
                match self.current_mut(request_id) {
                    Some(request) if request.detection.is_none() => {
                        tracing::debug!("Language detection failed: {reason}");
                        request.detection = Some(DetectionStatus::Failed);
                        self.detected_language = DETECTION_FAILED_LABEL.to_string();
                    }
                    _ => tracing::debug!("Dropping stale detection failure for request {request_id}"),
                }
            }
            StateEvent::Cleared => {
                return Self::default();
            }
        }

        self
    }

    fn current_mut(&mut self, request_id: RequestId) -> Option<&mut PendingRequest> {
        self.request.as_mut().filter(|request| request.id == request_id)
    }

    /// The published result only moves once the synchronous outcome exists,
    /// so it never changes under a stale loading flag.
    fn refresh_result(&mut self) {
        let Some(request) = &self.request else {
            return;
        };
        let Some(outcome) = &request.outcome else {
            return;
        };

        self.translation_result = match &request.detection {
            Some(DetectionStatus::Resolved(Annotation {
                final_text: Some(wrapped),
                ..
            })) => wrapped.clone(),
            _ => outcome.composed_text.clone(),
        };
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn translation_result(&self) -> &str {
        &self.translation_result
    }

    pub fn detected_language(&self) -> &str {
        &self.detected_language
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn request_id(&self) -> Option<RequestId> {
        self.request.as_ref().map(|request| request.id)
    }

    /// Text snapshot the current request was issued for
    pub fn request_text(&self) -> Option<&str> {
        self.request.as_ref().map(|request| request.text.as_str())
    }

    pub fn is_settled(&self) -> bool {
        self.request
            .as_ref()
            .is_some_and(|request| request.outcome.is_some() && request.detection.is_some())
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            input_text: self.input_text.clone(),
            translation_result: self.translation_result.clone(),
            detected_language: self.detected_language.clone(),
            is_loading: self.is_loading,
            settled: self.is_settled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LanguageDetection, MatchResult};
    use uuid::Uuid;

    fn outcome(text: &str) -> TranslationOutcome {
        TranslationOutcome {
            matches: vec![MatchResult {
                term: "oi".to_string(),
                gloss: "👋".to_string(),
            }],
            composed_text: text.to_string(),
        }
    }

    fn annotation(code: &str, name: &str, wrapped: Option<&str>) -> Annotation {
        Annotation {
            detection: LanguageDetection {
                code: code.to_string(),
                display_name: name.to_string(),
            },
            final_text: wrapped.map(str::to_string),
        }
    }

    fn requested(text: &str) -> (TranslatorState, RequestId) {
        let id = Uuid::new_v4();
        let state = TranslatorState::new()
            .apply(StateEvent::InputChanged(text.to_string()))
            .apply(StateEvent::TranslateRequested { request_id: id });
        (state, id)
    }

    #[test]
    fn test_translate_sets_loading_until_outcome() {
        let (state, id) = requested("oi");
        assert!(state.is_loading());
        assert_eq!(state.request_text(), Some("oi"));

        let state = state.apply(StateEvent::TranslationCompleted {
            request_id: id,
            outcome: outcome("PLAIN"),
        });

        assert!(!state.is_loading());
        assert_eq!(state.translation_result(), "PLAIN");
        assert!(!state.is_settled());
    }

    #[test]
    fn test_wrapped_detection_after_outcome() {
        let (state, id) = requested("hello");

        let state = state
            .apply(StateEvent::TranslationCompleted {
                request_id: id,
                outcome: outcome("PLAIN"),
            })
            .apply(StateEvent::LanguageDetected {
                request_id: id,
                annotation: annotation("en", "Inglês", Some("WRAPPED")),
            });

        assert_eq!(state.translation_result(), "WRAPPED");
        assert_eq!(state.detected_language(), "Inglês");
        assert!(state.is_settled());
    }

    #[test]
    fn test_wrapped_detection_before_outcome() {
        let (state, id) = requested("hello");

        let state = state.apply(StateEvent::LanguageDetected {
            request_id: id,
            annotation: annotation("en", "Inglês", Some("WRAPPED")),
        });
        assert_eq!(state.detected_language(), "Inglês");
        assert_eq!(state.translation_result(), "");
        assert!(state.is_loading());

        let state = state.apply(StateEvent::TranslationCompleted {
            request_id: id,
            outcome: outcome("PLAIN"),
        });

        assert_eq!(state.translation_result(), "WRAPPED");
        assert!(!state.is_loading());
        assert!(state.is_settled());
    }

    #[test]
    fn test_both_orders_converge() {
        let (base, id) = requested("hello");
        let detected = StateEvent::LanguageDetected {
            request_id: id,
            annotation: annotation("en", "Inglês", Some("WRAPPED")),
        };
        let completed = StateEvent::TranslationCompleted {
            request_id: id,
            outcome: outcome("PLAIN"),
        };

        let first = base.clone().apply(detected.clone()).apply(completed.clone());
        let second = base.apply(completed).apply(detected);

        assert_eq!(first.snapshot(), second.snapshot());
    }

    #[test]
    fn test_primary_language_keeps_plain_text() {
        let (state, id) = requested("oi");

        let state = state
            .apply(StateEvent::TranslationCompleted {
                request_id: id,
                outcome: outcome("PLAIN"),
            })
            .apply(StateEvent::LanguageDetected {
                request_id: id,
                annotation: annotation("pt", "Português", None),
            });

        assert_eq!(state.translation_result(), "PLAIN");
        assert_eq!(state.detected_language(), "Português");
    }

    #[test]
    fn test_classifier_failure_does_not_touch_result() {
        let (state, id) = requested("oi");

        let state = state
            .apply(StateEvent::ClassifierFailed {
                request_id: id,
                reason: "offline".to_string(),
            })
            .apply(StateEvent::TranslationCompleted {
                request_id: id,
                outcome: outcome("PLAIN"),
            });

        assert_eq!(state.detected_language(), DETECTION_FAILED_LABEL);
        assert_eq!(state.translation_result(), "PLAIN");
        assert!(state.is_settled());
    }

    #[test]
    fn test_results_for_old_request_are_dropped() {
        let (state, old) = requested("hello");
        let new = Uuid::new_v4();

        let state = state
            .apply(StateEvent::InputChanged("oi".to_string()))
            .apply(StateEvent::TranslateRequested { request_id: new })
            .apply(StateEvent::LanguageDetected {
                request_id: old,
                annotation: annotation("en", "Inglês", Some("WRAPPED")),
            })
            .apply(StateEvent::TranslationCompleted {
                request_id: old,
                outcome: outcome("OLD"),
            });

        assert!(state.is_loading());
        assert_eq!(state.translation_result(), "");
        assert_eq!(state.detected_language(), "");
        assert_eq!(state.request_id(), Some(new));
    }

    #[test]
    fn test_cleared_resets_and_drops_late_results() {
        let (state, id) = requested("hello");

        let state = state.apply(StateEvent::Cleared).apply(StateEvent::TranslationCompleted {
            request_id: id,
            outcome: outcome("LATE"),
        });

        assert_eq!(state.snapshot(), StateSnapshot::default());
        assert_eq!(state.request_id(), None);
    }

    #[test]
    fn test_duplicate_completion_is_ignored() {
        let (state, id) = requested("oi");

        let state = state
            .apply(StateEvent::TranslationCompleted {
                request_id: id,
                outcome: outcome("FIRST"),
            })
            .apply(StateEvent::TranslationCompleted {
                request_id: id,
                outcome: outcome("SECOND"),
            });

        assert_eq!(state.translation_result(), "FIRST");
    }

    #[test]
    fn test_input_edit_during_flight_keeps_request_text() {
        let (state, _) = requested("hello");

        let state = state.apply(StateEvent::InputChanged("something else".to_string()));

        assert_eq!(state.request_text(), Some("hello"));
        assert_eq!(state.input_text(), "something else");
    }
}
