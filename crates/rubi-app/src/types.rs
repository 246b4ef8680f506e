/// Events exchanged between the UI loop and the app event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Text to send to the parse API
    TextInput(String),
    /// Formatted annotation (or error text) for display
    ShowAnnotation(String),
    /// New API key submitted from the settings form
    EditApiKey(String),
    /// Show the masked credential state
    ShowSettings,
    /// Transient user-visible acknowledgment
    Notice(String),
    Close,
}
