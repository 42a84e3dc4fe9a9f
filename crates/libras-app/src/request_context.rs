use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use libras_core::language::LanguageProcessor;
use libras_core::types::AppEvent;
use libras_detector::Classifier;
use tokio_util::sync::CancellationToken;

/// Dependencies shared by the per-request workers
///
/// Bundles everything a translation or detection task needs so spawning one
/// takes the context, the request id and the text snapshot.
#[derive(Clone)]
pub struct RequestContext {
    pub processor: Arc<dyn LanguageProcessor>,
    pub classifier: Option<Arc<dyn Classifier>>,
    /// Workers report back to the coordinator through this sender
    pub event_tx: AsyncSender<AppEvent>,
    pub cancel: CancellationToken,
    pub processing_delay: Duration,
    pub classifier_timeout: Duration,
}
