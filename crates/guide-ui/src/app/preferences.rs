//! Persistence helpers for user settings.

use crate::core::settings::SettingsState;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

pub(crate) const SETTINGS_KEY: &str = "guide.settings";

pub(crate) fn load_settings() -> SettingsState {
    let Ok(raw) = LocalStorage::get::<String>(SETTINGS_KEY) else {
        return SettingsState::default();
    };
    match SettingsState::from_json(&raw) {
        Ok(settings) => settings,
        Err(err) => {
            log_storage_error("decode", SETTINGS_KEY, &err.to_string());
            SettingsState::default()
        }
    }
}

pub(crate) fn persist_settings(settings: &SettingsState) {
    match settings.to_json() {
        Ok(raw) => set_storage(SETTINGS_KEY, raw),
        Err(err) => log_storage_error("encode", SETTINGS_KEY, &err.to_string()),
    }
}

fn set_storage(key: &'static str, value: String) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
