use std::io::BufRead;
use std::thread;

use gloss_core::host::Control;
use gloss_types::{AppEvent, UiEvent};
use kanal::Sender;

/// Map one input line to an event. Lines starting with `:` are popup
/// commands, anything else is a selection for `action`.
pub fn parse_line(line: &str, action: &str) -> Option<AppEvent> {
    let Some(command) = line.trim().strip_prefix(':') else {
        return Some(AppEvent::Invoke {
            action: action.to_string(),
            selection: line.to_string(),
        });
    };

    match command {
        "p" | "prev" => Some(AppEvent::UiEvent(Control::Previous.event())),
        "n" | "next" => Some(AppEvent::UiEvent(Control::Next.event())),
        "q" | "close" => Some(AppEvent::UiEvent(UiEvent::Close)),
        other => {
            tracing::warn!("Unknown command ':{}'", other);
            None
        }
    }
}

/// Forward lines from `reader` until it ends, then request shutdown
pub fn read_input<R: BufRead>(reader: R, tx: &Sender<AppEvent>, action: &str) -> anyhow::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if let Some(event) = parse_line(&line, action) {
            tx.send(event)?;
        }
    }

    tracing::debug!("Input closed");
    tx.send(AppEvent::Shutdown)?;
    Ok(())
}

/// Stdin is read on a plain thread so a pending read never holds up
/// runtime shutdown.
pub fn spawn_stdin_reader(tx: Sender<AppEvent>, action: String) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        if let Err(e) = read_input(stdin.lock(), &tx, &action) {
            tracing::debug!("stdin reader stopped: {}", e);
        }
    })
}
