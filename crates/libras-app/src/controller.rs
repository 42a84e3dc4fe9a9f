use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use libras_core::language::LanguageProcessor;
use libras_core::types::AppEvent;
use libras_detector::Classifier;
use tokio::task::{Id, JoinSet};
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::spawn_stdin_watcher;
use crate::state::AppState;
use crate::ui::{UiMode, ui_loop};

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    /// Zero-capacity channels would deadlock the UI and the coordinator
    /// sending to each other, so capacity is at least one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            app_to_ui: kanal::bounded_async(capacity),
            // Shared by the front-end and the request workers
            ui_to_app: kanal::bounded_async(capacity),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    processor: Arc<dyn LanguageProcessor>,
    classifier: Option<Arc<dyn Classifier>>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(
        state: Arc<AppState>,
        processor: Arc<dyn LanguageProcessor>,
        classifier: Option<Arc<dyn Classifier>>,
        channel_capacity: usize,
    ) -> Self {
        Self {
            channels: ChannelSet::new(channel_capacity),
            state,
            processor,
            classifier,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Sender the front-end uses to reach the coordinator
    pub fn ui_sender(&self) -> AsyncSender<AppEvent> {
        self.channels.ui_to_app.0.clone()
    }

    /// Receiver for state snapshots published by the coordinator
    pub fn ui_receiver(&self) -> AsyncReceiver<AppEvent> {
        self.channels.app_to_ui.1.clone()
    }

    /// Coordinator only; the front-end is whoever holds the UI channel ends
    pub fn spawn_backend(&self, tasks: &mut JoinSet<anyhow::Result<()>>) {
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.channels.app_to_ui.0.clone(),
            self.processor.clone(),
            self.classifier.clone(),
            self.cancel_token.child_token(),
        ));
    }

    /// Returns the task set and the id of the console UI task, which is the
    /// one the process waits on
    pub fn spawn_tasks(&self, mode: UiMode) -> (JoinSet<anyhow::Result<()>>, Id) {
        let mut tasks = JoinSet::new();

        // Event loop
        self.spawn_backend(&mut tasks);

        // Console UI
        let ui_task = tasks.spawn(ui_loop(self.ui_receiver(), self.ui_sender(), mode.clone()));

        // Interactive input; one-shot text is sent by the UI loop itself
        if mode == UiMode::Interactive {
            spawn_stdin_watcher(self.ui_sender(), self.cancel_token.child_token());
        }

        (tasks, ui_task.id())
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
        if let Some(classifier) = &self.classifier {
            tracing::debug!("Closing classifier '{}'", classifier.metadata().name);
            classifier.close();
        }
    }
}
