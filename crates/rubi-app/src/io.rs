use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::types::AppEvent;

/// Reads stdin lines and turns them into app events.
///
/// `:key <value>` edits the stored API key, `:key` shows its masked state,
/// `:quit` exits. Anything else is sent to the parse API.
pub async fn watcher_io(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            tracing::info!("stdin closed");
            event_tx.send(AppEvent::Close).await?;
            return Ok(());
        };

        let event = match line.trim() {
            "" => continue,
            ":quit" => AppEvent::Close,
            ":key" => AppEvent::ShowSettings,
            cmd => {
                if let Some(value) = cmd.strip_prefix(":key ") {
                    AppEvent::EditApiKey(value.to_string())
                } else {
                    AppEvent::TextInput(line.clone())
                }
            }
        };

        let close = matches!(event, AppEvent::Close);
        event_tx.send(event).await?;
        if close {
            return Ok(());
        }
    }
}
