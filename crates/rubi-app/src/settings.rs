use std::sync::Arc;

use rubi_prefs::{KEY_API_KEY, PrefStore};

/// Settings form for the JPDB API key. Shows a masked state and writes
/// edits through to the preference store.
pub struct SettingsPanel {
    prefs: Arc<dyn PrefStore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAck {
    Saved,
    EmptyInput,
}

impl SettingsAck {
    /// User-visible acknowledgment text
    pub fn notice(&self) -> &'static str {
        match self {
            SettingsAck::Saved => "API key saved successfully",
            SettingsAck::EmptyInput => "Please enter an API key",
        }
    }
}

impl SettingsPanel {
    pub fn new(prefs: Arc<dyn PrefStore>) -> Self {
        Self { prefs }
    }

    /// Masked display state; the key itself is never echoed.
    pub fn summary(&self) -> String {
        if self.prefs.get(KEY_API_KEY).is_empty() {
            "Not set".to_string()
        } else {
            "••••••••".to_string()
        }
    }

    /// Current key, used to seed the edit form.
    pub fn current(&self) -> String {
        self.prefs.get(KEY_API_KEY)
    }

    /// Validate and write through. Blank input is rejected without touching
    /// the stored value.
    pub fn submit(&self, input: &str) -> SettingsAck {
        if input.trim().is_empty() {
            return SettingsAck::EmptyInput;
        }

        self.prefs.set(KEY_API_KEY, input);
        tracing::info!("JPDB API key updated");
        SettingsAck::Saved
    }
}
