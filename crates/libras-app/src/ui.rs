use std::io::Write;

use kanal::{AsyncReceiver, AsyncSender};
use libras_core::state::StateSnapshot;
use libras_core::types::{AppEvent, UiEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMode {
    /// Read lines from stdin until `:quit` or EOF
    Interactive,
    /// Translate one text, print the settled result and exit
    OneShot(String),
}

/// Console front-end: renders published snapshots to stdout
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    mode: UiMode,
) -> anyhow::Result<()> {
    let prompt = mode == UiMode::Interactive && atty::is(atty::Stream::Stdin);
    let mut previous = StateSnapshot::default();

    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::BackendReady => match &mode {
                UiMode::OneShot(text) => {
                    ui_to_app_tx
                        .send(AppEvent::UiEvent(UiEvent::TextInput(text.clone())))
                        .await?;
                    ui_to_app_tx
                        .send(AppEvent::UiEvent(UiEvent::Translate))
                        .await?;
                }
                UiMode::Interactive => {
                    if prompt {
                        println!("Digite um texto para traduzir (:clear limpa, :quit sai)");
                        print_prompt();
                    }
                }
            },
            AppEvent::ShowState(snapshot) => {
                match &mode {
                    UiMode::OneShot(_) => {
                        if snapshot.settled {
                            println!("{}", render_result(&snapshot));
                            return Ok(());
                        }
                    }
                    UiMode::Interactive => {
                        if let Some(text) = render(&snapshot, &previous) {
                            println!("{text}");
                            if prompt && !snapshot.is_loading {
                                print_prompt();
                            }
                        }
                    }
                }
                previous = snapshot;
            }
            AppEvent::BackendStopped => break,
            _ => {}
        }
    }

    Ok(())
}

fn print_prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

/// Text to print for a state change, if the change is visible
pub fn render(snapshot: &StateSnapshot, previous: &StateSnapshot) -> Option<String> {
    if *snapshot == StateSnapshot::default() {
        return (*previous != StateSnapshot::default()).then(|| "🧹 Texto limpo.".to_string());
    }

    if snapshot.is_loading {
        return (!previous.is_loading).then(|| "⏳ Traduzindo para LIBRAS...".to_string());
    }

    let changed = snapshot.translation_result != previous.translation_result
        || snapshot.detected_language != previous.detected_language
        || previous.is_loading;

    (changed && !snapshot.translation_result.is_empty()).then(|| render_result(snapshot))
}

pub fn render_result(snapshot: &StateSnapshot) -> String {
    let language = if snapshot.detected_language.is_empty() {
        "detectando..."
    } else {
        snapshot.detected_language.as_str()
    };

    format!(
        "🌐 Idioma detectado: {language}\n\n{}\n",
        snapshot.translation_result
    )
}
