use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use libras_core::language::LanguageProcessor;
use libras_core::state::{StateEvent, TranslatorState};
use libras_core::types::{AppEvent, UiEvent};
use libras_detector::Classifier;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::request_context::RequestContext;
use crate::state::AppState;

pub mod detect_language;
pub mod translate;

use detect_language::spawn_detection;
use translate::spawn_translation;

/// Whether the coordinator keeps running after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Exit once the current request has settled
    CloseWhenSettled,
}

/// App's main loop. Owns the session state; every update goes through
/// [`TranslatorState::apply`] on this task.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    processor: Arc<dyn LanguageProcessor>,
    classifier: Option<Arc<dyn Classifier>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let ctx = {
        let config = state.config.read().await;
        RequestContext {
            processor,
            classifier,
            event_tx: ui_to_app_tx,
            cancel: cancel.clone(),
            processing_delay: config.processing_delay(),
            classifier_timeout: config.classifier_timeout(),
        }
    };

    let mut session = TranslatorState::new();
    let mut published = session.snapshot();
    let mut closing = false;

    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        let (next, flow) = handle_events(session, &ctx, event);
        session = next;

        let snapshot = session.snapshot();
        if snapshot != published {
            app_to_ui_tx
                .send(AppEvent::ShowState(snapshot.clone()))
                .await?;
            published = snapshot;
        }

        if flow == Flow::CloseWhenSettled {
            closing = true;
        }
        if closing && (session.request_id().is_none() || session.is_settled()) {
            tracing::info!("[EVENT_LOOP] Close requested, exiting");
            // Queued after the last snapshot, so the front-end drains it first
            app_to_ui_tx.send(AppEvent::BackendStopped).await?;
            break;
        }
    }

    Ok(())
}

fn handle_events(
    session: TranslatorState,
    ctx: &RequestContext,
    event: AppEvent,
) -> (TranslatorState, Flow) {
    let session = match event {
        AppEvent::UiEvent(UiEvent::TextInput(text)) => {
            tracing::debug!("TextInput received: '{}' chars", text.chars().count());
            session.apply(StateEvent::InputChanged(text))
        }
        AppEvent::UiEvent(UiEvent::Translate) => handle_translate_request(session, ctx),
        AppEvent::UiEvent(UiEvent::Clear) => session.apply(StateEvent::Cleared),
        AppEvent::UiEvent(UiEvent::Close) => {
            return (session, Flow::CloseWhenSettled);
        }
        AppEvent::TranslationReady {
            request_id,
            outcome,
        } => {
            tracing::debug!(
                "Translation ready for {request_id}: {} matches",
                outcome.matches.len()
            );
            session.apply(StateEvent::TranslationCompleted {
                request_id,
                outcome,
            })
        }
        AppEvent::LanguageDetected {
            request_id,
            annotation,
        } => {
            tracing::debug!(
                "Language '{}' for {request_id}, wrapped: {}",
                annotation.detection.code,
                annotation.is_wrapped()
            );
            session.apply(StateEvent::LanguageDetected {
                request_id,
                annotation,
            })
        }
        AppEvent::DetectionFailed { request_id, reason } => {
            session.apply(StateEvent::ClassifierFailed { request_id, reason })
        }
        AppEvent::ShowState(_) | AppEvent::BackendReady | AppEvent::BackendStopped => {
            // UI-only events, ignore in backend
            session
        }
    };

    (session, Flow::Continue)
}

/// Start both halves of a translate request on the text snapshot
fn handle_translate_request(session: TranslatorState, ctx: &RequestContext) -> TranslatorState {
    let request_id = Uuid::new_v4();
    let session = session.apply(StateEvent::TranslateRequested { request_id });
    let text = session.request_text().unwrap_or_default().to_string();
    tracing::info!("Translating request {request_id}: {text}");

    spawn_translation(ctx, request_id, text.clone());

    match &ctx.classifier {
        Some(classifier) => spawn_detection(ctx, classifier.clone(), request_id, text),
        None => {
            return session.apply(StateEvent::ClassifierFailed {
                request_id,
                reason: "language detection disabled".to_string(),
            });
        }
    }

    session
}
