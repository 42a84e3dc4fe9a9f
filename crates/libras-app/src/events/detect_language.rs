use std::sync::Arc;

use libras_core::types::{AppEvent, RequestId};
use libras_detector::{Classifier, ClassifierError, annotate};

use crate::request_context::RequestContext;

/// Identify the request's language in the background.
///
/// Failures and timeouts are reported once as `DetectionFailed`; there is no
/// retry. Cancelling the context drops the in-flight classifier call.
pub fn spawn_detection(
    ctx: &RequestContext,
    classifier: Arc<dyn Classifier>,
    request_id: RequestId,
    text: String,
) {
    let processor = ctx.processor.clone();
    let event_tx = ctx.event_tx.clone();
    let cancel = ctx.cancel.child_token();
    let timeout = ctx.classifier_timeout;

    tokio::spawn(async move {
        let detection = tokio::time::timeout(
            timeout,
            annotate(&text, classifier.as_ref(), processor.as_ref()),
        );

        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Language detection for {request_id} cancelled");
                return;
            }
            result = detection => match result {
                Ok(Ok(annotation)) => AppEvent::LanguageDetected {
                    request_id,
                    annotation,
                },
                Ok(Err(e)) => {
                    tracing::warn!("Language detection failed: {}", e);
                    AppEvent::DetectionFailed {
                        request_id,
                        reason: e.to_string(),
                    }
                }
                Err(_) => {
                    let e = ClassifierError::Timeout(timeout.as_millis() as u64);
                    tracing::warn!("Language detection failed: {}", e);
                    AppEvent::DetectionFailed {
                        request_id,
                        reason: e.to_string(),
                    }
                }
            },
        };

        if let Err(e) = event_tx.send(event).await {
            tracing::debug!("Coordinator gone, dropping detection: {}", e);
        }
    });
}
