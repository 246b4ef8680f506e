use kanal::AsyncSender;
use rubi_jpdb::{JpdbClient, format_response};

use crate::types::AppEvent;

/// Send `text` to the parse API and deliver exactly one annotation to the UI,
/// whether the request succeeded or not.
pub async fn handle_text_input(
    client: &JpdbClient,
    text: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let annotation = match client.parse(&text).await {
        Ok(body) => format_response(&body),
        Err(e) => {
            tracing::error!("jpdb parse failed: {e}");
            e.to_string()
        }
    };

    app_to_ui_tx
        .send(AppEvent::ShowAnnotation(annotation))
        .await?;

    Ok(())
}
