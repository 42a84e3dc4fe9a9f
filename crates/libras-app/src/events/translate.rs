use libras_core::types::{AppEvent, RequestId};

use crate::request_context::RequestContext;

/// Run normalize → match → compose after the configured processing delay.
///
/// The delay is a tokio timer, so other requests keep flowing while it runs.
/// Nothing is sent once the context is cancelled.
pub fn spawn_translation(ctx: &RequestContext, request_id: RequestId, text: String) {
    let processor = ctx.processor.clone();
    let event_tx = ctx.event_tx.clone();
    let cancel = ctx.cancel.child_token();
    let delay = ctx.processing_delay;

    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Translation for {request_id} cancelled");
            }
            _ = tokio::time::sleep(delay) => {
                let outcome = processor.translate(&text);
                if outcome.found_any() {
                    tracing::debug!(
                        "Translation for {request_id}: {} matches",
                        outcome.matches.len()
                    );
                } else {
                    tracing::debug!("Translation for {request_id}: no signs found");
                }

                if let Err(e) = event_tx
                    .send(AppEvent::TranslationReady { request_id, outcome })
                    .await
                {
                    tracing::debug!("Coordinator gone, dropping translation: {}", e);
                }
            }
        }
    });
}
