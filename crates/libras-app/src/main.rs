use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use libras_config::Config;
use libras_detector::{Classifier, DeeplClassifier, HeuristicClassifier};
use libras_lang_portuguese::LibrasProcessor;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod request_context;
pub mod settings;
pub mod state;
pub mod ui;


use self::controller::AppController;
use self::state::AppState;
use self::ui::UiMode;

/// Translate Portuguese text into LIBRAS gesture glosses
#[derive(Debug, Parser)]
#[command(name = "libras", version)]
struct Args {
    /// JSON config file; defaults come from the environment otherwise
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Translate this text, print the result and exit
    #[arg(short, long)]
    text: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let config = settings::load_config(args.config.as_deref())?;
    let capacity = config.channel_capacity;

    let processor = if config.dictionary.enabled {
        LibrasProcessor::with_dictionary_path(config.dictionary.path.as_deref())
    } else {
        tracing::warn!("Dictionary override disabled, using embedded table");
        LibrasProcessor::new()
    };
    let classifier = build_classifier(&config);

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state, Arc::new(processor), classifier, capacity);

    let mode = match args.text {
        Some(text) => UiMode::OneShot(text),
        None => UiMode::Interactive,
    };
    let (mut tasks, ui_task) = controller.spawn_tasks(mode);

    // The UI task ends last on a normal exit, after draining the final snapshot
    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
                break;
            }
            Some(result) = tasks.join_next_with_id() => match result {
                Ok((id, Ok(()))) if id == ui_task => {
                    tracing::info!("UI finished");
                    break;
                }
                Ok((_, Ok(()))) => tracing::info!("Coordinator finished"),
                Ok((_, Err(e))) => {
                    tracing::error!("task exited: {e}");
                    break;
                }
                Err(e) => {
                    tracing::error!("task panicked: {e}");
                    break;
                }
            },
            else => break,
        }
    }

    controller.shutdown();
    tasks.shutdown().await;

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_classifier(config: &Config) -> Option<Arc<dyn Classifier>> {
    let detector = &config.detector;
    if !detector.enabled {
        tracing::warn!("Language detection disabled");
        return None;
    }

    match detector.provider.as_str() {
        "deepl" if !detector.api_key.is_empty() => Some(Arc::new(DeeplClassifier::new(
            detector.api_key.clone(),
            detector.api_url.clone(),
        ))),
        "deepl" => {
            tracing::warn!("DeepL selected without an API key, using heuristic classifier");
            Some(Arc::new(HeuristicClassifier::new()))
        }
        "heuristic" => Some(Arc::new(HeuristicClassifier::new())),
        other => {
            tracing::warn!("Unknown detector provider '{other}', using heuristic classifier");
            Some(Arc::new(HeuristicClassifier::new()))
        }
    }
}
