use kanal::AsyncReceiver;

use crate::types::AppEvent;

/// Terminal front end: prints annotations and notices as they arrive.
/// This is the designated result-delivery context, fed only through the
/// app-to-ui channel.
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::ShowAnnotation(annotation) => {
                println!("{annotation}\n");
            }
            AppEvent::Notice(notice) => {
                println!("* {notice}");
            }
            _ => {}
        }
    }

    tracing::debug!("ui channel closed");
    Ok(())
}
