use gloss_core::GlossPlugin;
use gloss_core::host::Modal;
use gloss_core::viewer::DefinitionViewer;
use gloss_dictionary::EntrySource;
use gloss_types::{AppEvent, UiEvent};
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

use crate::ui::TerminalMenu;

/// App's main loop. Owns the one popup the terminal can show at a time.
pub async fn event_loop<S, M, F>(
    plugin: GlossPlugin<S>,
    menu: TerminalMenu,
    input_rx: AsyncReceiver<AppEvent>,
    cancel_token: CancellationToken,
    new_modal: F,
) -> anyhow::Result<()>
where
    S: EntrySource,
    M: Modal,
    F: Fn() -> M,
{
    let mut popup: Option<DefinitionViewer<M>> = None;

    tracing::info!("[EVENT_LOOP] Waiting for input");
    loop {
        let event = tokio::select! {
            _ = cancel_token.cancelled() => {
                tracing::debug!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = input_rx.recv() => event?,
        };

        match event {
            AppEvent::Invoke { action, selection } => {
                if !menu.contains(&action) {
                    tracing::warn!("Unknown action '{}'", action);
                    continue;
                }

                // a new lookup replaces whatever is on screen
                if let Some(open) = popup.take() {
                    open.dismiss();
                }
                popup = plugin.on_get_definition(&selection, &new_modal).await;
            }
            AppEvent::UiEvent(ui_event) => handle_ui_event(&mut popup, ui_event),
            AppEvent::Shutdown => break,
        }
    }

    if let Some(open) = popup.take() {
        open.dismiss();
    }
    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}

fn handle_ui_event<M: Modal>(popup: &mut Option<DefinitionViewer<M>>, event: UiEvent) {
    let Some(viewer) = popup.as_mut() else {
        tracing::debug!("{:?} with no popup open", event);
        return;
    };

    if !viewer.handle(event) {
        *popup = None;
    }
}
