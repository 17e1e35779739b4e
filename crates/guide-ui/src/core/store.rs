//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep user data in one store instead of an ambient context.
//! - Reducers are plain functions so they can be tested without a DOM.

use crate::core::settings::{SettingsDispatcher, SettingsFlag, SettingsState, SettingsUpdate};
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Global store for per-user data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct UserDataStore {
    /// Display preferences shown in the options panel.
    pub settings: SettingsState,
}

/// Apply a single settings change to the store.
///
/// Returns `true` when the stored value changed.
pub fn apply_settings_update(store: &mut UserDataStore, update: SettingsUpdate) -> bool {
    let changed = store.settings.set(update.flag, update.value);
    if changed {
        log_settings_change(update.flag.key(), update.value);
    }
    changed
}

/// Replace the whole settings slice, e.g. after loading persisted preferences.
pub fn replace_settings(store: &mut UserDataStore, settings: SettingsState) {
    for row in settings.rows() {
        if store.settings.get(row.flag) != row.value {
            log_settings_change(row.flag.key(), row.value);
        }
    }
    store.settings = settings;
}

#[cfg(target_arch = "wasm32")]
fn log_settings_change(flag: &'static str, value: bool) {
    gloo::console::debug!("settings flag updated", flag, value);
}

#[cfg(not(target_arch = "wasm32"))]
const fn log_settings_change(_flag: &'static str, _value: bool) {}

fn dispatch_update(dispatch: &Dispatch<UserDataStore>, flag: SettingsFlag, value: bool) {
    dispatch.reduce_mut(|store| {
        apply_settings_update(store, SettingsUpdate { flag, value });
    });
}

impl SettingsDispatcher for Dispatch<UserDataStore> {
    fn set_show_tags(&self, value: bool) {
        dispatch_update(self, SettingsFlag::ShowTags, value);
    }

    fn set_hide_difficulty(&self, value: bool) {
        dispatch_update(self, SettingsFlag::HideDifficulty, value);
    }

    fn set_hide_modules(&self, value: bool) {
        dispatch_update(self, SettingsFlag::HideModules, value);
    }

    fn set_show_ignored(&self, value: bool) {
        dispatch_update(self, SettingsFlag::ShowIgnored, value);
    }
}
