use std::io;
use std::sync::Arc;

use gloss_core::GlossPlugin;
use gloss_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::spawn_stdin_reader;
use crate::state::AppState;
use crate::ui::{TerminalMenu, TerminalModal};

/// Centralized channel management
pub struct ChannelSet {
    pub input_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            input_to_app: kanal::bounded_async(capacity.max(1)),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub async fn new(state: Arc<AppState>) -> Self {
        let capacity = state.config.read().await.channel_capacity;
        Self {
            channels: ChannelSet::new(capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Register the lookup action, start reading input and run the event loop.
    /// `initial_word` is looked up before any input is read.
    pub async fn spawn_tasks(
        &self,
        initial_word: Option<String>,
    ) -> anyhow::Result<JoinSet<anyhow::Result<()>>> {
        let config = self.state.config.read().await.clone();

        let plugin = GlossPlugin::from_config(&config)?;
        let mut menu = TerminalMenu::default();
        plugin.on_load(&mut menu);
        menu.print_help(&mut io::stdout())?;

        let action = menu
            .primary()
            .map(|item| item.id.to_string())
            .ok_or_else(|| anyhow::anyhow!("No action registered"))?;

        let input_tx = &self.channels.input_to_app.0;
        if let Some(word) = initial_word {
            input_tx
                .send(AppEvent::Invoke {
                    action: action.clone(),
                    selection: word,
                })
                .await?;
        }

        // Detached: it exits with the process
        spawn_stdin_reader(input_tx.clone_sync(), action);

        let mut tasks = JoinSet::new();
        let width = config.ui.popup_width;
        tasks.spawn(event_loop(
            plugin,
            menu,
            self.channels.input_to_app.1.clone(),
            self.cancel_token.child_token(),
            move || TerminalModal::new(io::stdout(), width),
        ));

        Ok(tasks)
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
