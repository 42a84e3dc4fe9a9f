use std::io::BufRead;

use kanal::AsyncSender;
use libras_core::types::{AppEvent, UiEvent};
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

/// Map one input line to front-end events
pub fn parse_line(line: &str) -> Vec<UiEvent> {
    match line.trim() {
        "" => vec![],
        ":clear" => vec![UiEvent::Clear],
        ":quit" | ":q" => vec![UiEvent::Close],
        _ => vec![UiEvent::TextInput(line.trim_end().to_string()), UiEvent::Translate],
    }
}

/// Watch stdin on a dedicated thread.
///
/// Blocking reads stay off the runtime so shutdown never waits on the
/// terminal. EOF is treated like `:quit`.
pub fn spawn_stdin_watcher(event_tx: AsyncSender<AppEvent>, cancel: CancellationToken) {
    let handle = Handle::current();

    let spawned = std::thread::Builder::new()
        .name("stdin-watcher".to_string())
        .spawn(move || {
            tracing::info!("Starting stdin watcher");
            let stdin = std::io::stdin();

            for line in stdin.lock().lines() {
                if cancel.is_cancelled() {
                    break;
                }
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::error!("Failed to read stdin: {}", e);
                        break;
                    }
                };

                for event in parse_line(&line) {
                    if handle.block_on(event_tx.send(AppEvent::UiEvent(event))).is_err() {
                        tracing::debug!("Coordinator gone, stdin watcher stopping");
                        return;
                    }
                }
            }

            if !cancel.is_cancelled() {
                let _ = handle.block_on(event_tx.send(AppEvent::UiEvent(UiEvent::Close)));
            }
            tracing::info!("Stdin watcher stopping");
        });

    if let Err(e) = spawned {
        tracing::error!("Failed to spawn stdin watcher: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_line_translates() {
        let events = parse_line("Oi, tudo bem?  ");

        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], UiEvent::TextInput(text) if text == "Oi, tudo bem?"));
        assert!(matches!(events[1], UiEvent::Translate));
    }

    #[test]
    fn test_commands() {
        assert!(matches!(parse_line(":clear").as_slice(), [UiEvent::Clear]));
        assert!(matches!(parse_line(" :quit ").as_slice(), [UiEvent::Close]));
        assert!(matches!(parse_line(":q").as_slice(), [UiEvent::Close]));
    }

    #[test]
    fn test_blank_line_is_ignored() {
        assert!(parse_line("").is_empty());
        assert!(parse_line("   \t").is_empty());
    }
}
