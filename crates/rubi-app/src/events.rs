use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use rubi_jpdb::JpdbClient;

use crate::state::AppState;
use crate::types::AppEvent;

pub mod edit_key;
pub mod parse_text;

use edit_key::handle_key_edit;
use parse_text::handle_text_input;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let client = JpdbClient::new(state.prefs.clone());

    tracing::info!("event loop started, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;
        tracing::debug!("event received: {:?}", std::mem::discriminant(&event));

        match event {
            AppEvent::TextInput(text) => {
                handle_text_input(&client, text, &app_to_ui_tx).await?;
            }
            AppEvent::EditApiKey(input) => {
                handle_key_edit(&state, input, &app_to_ui_tx).await?;
            }
            AppEvent::ShowSettings => {
                let summary = state.settings.summary();
                app_to_ui_tx
                    .send(AppEvent::Notice(format!("JPDB API key: {summary}")))
                    .await?;
            }
            AppEvent::Close => {
                tracing::info!("close requested, leaving event loop");
                return Ok(());
            }
            AppEvent::ShowAnnotation(_) | AppEvent::Notice(_) => {
                // UI-only events, ignore in backend
            }
        }
    }
}
