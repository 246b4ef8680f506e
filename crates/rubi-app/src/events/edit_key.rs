use kanal::AsyncSender;

use crate::state::AppState;
use crate::types::AppEvent;

pub async fn handle_key_edit(
    state: &AppState,
    input: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let ack = state.settings.submit(&input);

    app_to_ui_tx
        .send(AppEvent::Notice(ack.notice().to_string()))
        .await?;

    Ok(())
}
