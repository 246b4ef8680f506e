use std::sync::Arc;

use rubi_prefs::PrefStore;

use crate::settings::SettingsPanel;

pub struct AppState {
    pub prefs: Arc<dyn PrefStore>,
    pub settings: SettingsPanel,
}

impl AppState {
    pub fn new(prefs: Arc<dyn PrefStore>) -> Self {
        Self {
            settings: SettingsPanel::new(prefs.clone()),
            prefs,
        }
    }
}
