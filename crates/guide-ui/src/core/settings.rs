//! User settings primitives for the options panel.
//!
//! # Design
//! - Keep the four display flags as plain data; the store owns the value.
//! - Route every change through [`SettingsDispatcher`] so views never mutate state.
//! - Expose a stable flag order for rendering and persistence.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Errors raised while encoding or decoding user settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Persisted settings snapshot was not valid JSON for [`SettingsState`].
    #[error("failed to decode settings snapshot")]
    Decode(#[from] serde_json::Error),
}

/// Display preferences toggled from the options panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsState {
    /// Show problem tags in problem lists and search.
    pub show_tags: bool,
    /// Hide problem difficulty in problem lists and search.
    pub hide_difficulty: bool,
    /// Hide module results in problem search.
    pub hide_modules: bool,
    /// Show ignored problems and modules on the dashboard.
    pub show_ignored: bool,
}

impl SettingsState {
    /// Current value for a flag.
    #[must_use]
    pub const fn get(&self, flag: SettingsFlag) -> bool {
        match flag {
            SettingsFlag::ShowTags => self.show_tags,
            SettingsFlag::HideDifficulty => self.hide_difficulty,
            SettingsFlag::HideModules => self.hide_modules,
            SettingsFlag::ShowIgnored => self.show_ignored,
        }
    }

    /// Overwrite a flag, returning `true` when the stored value changed.
    pub fn set(&mut self, flag: SettingsFlag, value: bool) -> bool {
        let slot = match flag {
            SettingsFlag::ShowTags => &mut self.show_tags,
            SettingsFlag::HideDifficulty => &mut self.hide_difficulty,
            SettingsFlag::HideModules => &mut self.hide_modules,
            SettingsFlag::ShowIgnored => &mut self.show_ignored,
        };
        let changed = *slot != value;
        *slot = value;
        changed
    }

    /// Rows in display order, one per flag.
    #[must_use]
    pub fn rows(&self) -> [SettingsRow; 4] {
        SettingsFlag::all().map(|flag| SettingsRow {
            flag,
            value: self.get(flag),
        })
    }

    /// Encode the snapshot stored in browser storage.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Decode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a stored snapshot. Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Decode`] when the payload is not a settings object.
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Identifier for each toggle exposed by the options panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingsFlag {
    /// Problem lists and search: show tags.
    ShowTags,
    /// Problem lists and search: hide difficulty.
    HideDifficulty,
    /// Problem search: hide modules.
    HideModules,
    /// Dashboard: show ignored problems and modules.
    ShowIgnored,
}

impl SettingsFlag {
    /// All flags in the order the panel renders them.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::ShowTags,
            Self::HideDifficulty,
            Self::HideModules,
            Self::ShowIgnored,
        ]
    }

    /// Snake-case key used in persisted snapshots and DOM ids.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ShowTags => "show_tags",
            Self::HideDifficulty => "hide_difficulty",
            Self::HideModules => "hide_modules",
            Self::ShowIgnored => "show_ignored",
        }
    }

    /// Area of the product the flag affects.
    #[must_use]
    pub const fn scope(self) -> &'static str {
        match self {
            Self::ShowTags | Self::HideDifficulty => "Problem Lists and Search",
            Self::HideModules => "Problem Search",
            Self::ShowIgnored => "Dashboard",
        }
    }

    /// Short title for the toggle.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ShowTags => "Show Tags",
            Self::HideDifficulty => "Hide Difficulty",
            Self::HideModules => "Hide Modules",
            Self::ShowIgnored => "Show Ignored Problems & Modules",
        }
    }
}

impl fmt::Display for SettingsFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single requested flag change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingsUpdate {
    /// Flag being changed.
    pub flag: SettingsFlag,
    /// Requested value.
    pub value: bool,
}

/// View model for one rendered options row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingsRow {
    /// Flag the row controls.
    pub flag: SettingsFlag,
    /// Value the toggle reflects.
    pub value: bool,
}

impl SettingsRow {
    /// Full label including the scope prefix.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}: {}", self.flag.scope(), self.flag.title())
    }

    /// DOM id of the label element, referenced by the toggle's `aria-labelledby`.
    #[must_use]
    pub fn label_id(&self) -> String {
        format!("settings-option-{}-label", self.flag.key().replace('_', "-"))
    }

    /// Update emitted when the row's toggle is invoked.
    #[must_use]
    pub const fn toggled(&self) -> SettingsUpdate {
        SettingsUpdate {
            flag: self.flag,
            value: !self.value,
        }
    }
}

/// Setter bindings supplied by whatever owns [`SettingsState`].
pub trait SettingsDispatcher {
    /// Update the show-tags flag.
    fn set_show_tags(&self, value: bool);
    /// Update the hide-difficulty flag.
    fn set_hide_difficulty(&self, value: bool);
    /// Update the hide-modules flag.
    fn set_hide_modules(&self, value: bool);
    /// Update the show-ignored flag.
    fn set_show_ignored(&self, value: bool);

    /// Route a keyed update to the matching setter.
    fn set_flag(&self, flag: SettingsFlag, value: bool) {
        match flag {
            SettingsFlag::ShowTags => self.set_show_tags(value),
            SettingsFlag::HideDifficulty => self.set_hide_difficulty(value),
            SettingsFlag::HideModules => self.set_hide_modules(value),
            SettingsFlag::ShowIgnored => self.set_show_ignored(value),
        }
    }

    /// Apply an update value.
    fn apply(&self, update: SettingsUpdate) {
        self.set_flag(update.flag, update.value);
    }
}

/// Shared handle to an injected [`SettingsDispatcher`], usable as a component prop.
///
/// Equality is identity: two handles are equal when they point at the same dispatcher.
#[derive(Clone)]
pub struct SettingsDispatch(Rc<dyn SettingsDispatcher>);

impl SettingsDispatch {
    /// Wrap a dispatcher implementation.
    pub fn new(dispatcher: impl SettingsDispatcher + 'static) -> Self {
        Self(Rc::new(dispatcher))
    }

    /// Invoke the toggle for a row: calls its setter once with the negated value.
    pub fn toggle(&self, row: &SettingsRow) {
        self.0.apply(row.toggled());
    }
}

impl SettingsDispatcher for SettingsDispatch {
    fn set_show_tags(&self, value: bool) {
        self.0.set_show_tags(value);
    }

    fn set_hide_difficulty(&self, value: bool) {
        self.0.set_hide_difficulty(value);
    }

    fn set_hide_modules(&self, value: bool) {
        self.0.set_hide_modules(value);
    }

    fn set_show_ignored(&self, value: bool) {
        self.0.set_show_ignored(value);
    }
}

impl PartialEq for SettingsDispatch {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SettingsDispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsDispatch").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        SettingsDispatch, SettingsDispatcher, SettingsError, SettingsFlag, SettingsState,
        SettingsUpdate,
    };
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Dispatcher that records every setter call and mirrors it into a state copy.
    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<SettingsUpdate>>,
        state: RefCell<SettingsState>,
    }

    impl Recorder {
        fn record(&self, flag: SettingsFlag, value: bool) {
            self.calls.borrow_mut().push(SettingsUpdate { flag, value });
            self.state.borrow_mut().set(flag, value);
        }
    }

    impl SettingsDispatcher for Rc<Recorder> {
        fn set_show_tags(&self, value: bool) {
            self.record(SettingsFlag::ShowTags, value);
        }

        fn set_hide_difficulty(&self, value: bool) {
            self.record(SettingsFlag::HideDifficulty, value);
        }

        fn set_hide_modules(&self, value: bool) {
            self.record(SettingsFlag::HideModules, value);
        }

        fn set_show_ignored(&self, value: bool) {
            self.record(SettingsFlag::ShowIgnored, value);
        }
    }

    fn scenario_state() -> SettingsState {
        SettingsState {
            show_tags: true,
            hide_difficulty: false,
            hide_modules: false,
            show_ignored: false,
        }
    }

    #[test]
    fn rows_follow_display_order() {
        let flags: Vec<_> = SettingsState::default()
            .rows()
            .iter()
            .map(|row| row.flag.title())
            .collect();
        assert_eq!(
            flags,
            [
                "Show Tags",
                "Hide Difficulty",
                "Hide Modules",
                "Show Ignored Problems & Modules"
            ]
        );
    }

    #[test]
    fn rows_reflect_each_flag() {
        for flag in SettingsFlag::all() {
            let mut state = SettingsState::default();
            state.set(flag, true);
            for row in state.rows() {
                assert_eq!(row.value, row.flag == flag, "row {}", row.flag);
            }
        }
    }

    #[test]
    fn toggle_calls_setter_once_with_negated_value() {
        for flag in SettingsFlag::all() {
            for initial in [true, false] {
                let recorder = Rc::new(Recorder::default());
                let dispatch = SettingsDispatch::new(Rc::clone(&recorder));
                let mut state = SettingsState::default();
                state.set(flag, initial);
                let row = state
                    .rows()
                    .into_iter()
                    .find(|row| row.flag == flag)
                    .expect("every flag has a row");

                dispatch.toggle(&row);

                assert_eq!(
                    *recorder.calls.borrow(),
                    vec![SettingsUpdate {
                        flag,
                        value: !initial
                    }]
                );
            }
        }
    }

    #[test]
    fn toggling_hide_difficulty_touches_only_that_setter() {
        let recorder = Rc::new(Recorder::default());
        let dispatch = SettingsDispatch::new(Rc::clone(&recorder));
        let rows = scenario_state().rows();

        dispatch.toggle(&rows[1]);

        assert_eq!(
            *recorder.calls.borrow(),
            vec![SettingsUpdate {
                flag: SettingsFlag::HideDifficulty,
                value: true
            }]
        );
    }

    #[test]
    fn toggling_twice_restores_original_value() {
        let recorder = Rc::new(Recorder::default());
        *recorder.state.borrow_mut() = scenario_state();
        let dispatch = SettingsDispatch::new(Rc::clone(&recorder));

        for _ in 0..2 {
            let row = recorder.state.borrow().rows()[0];
            dispatch.toggle(&row);
        }

        assert_eq!(*recorder.state.borrow(), scenario_state());
        assert_eq!(recorder.calls.borrow().len(), 2);
    }

    #[test]
    fn set_reports_changes_only() {
        let mut state = SettingsState::default();
        assert!(state.set(SettingsFlag::HideModules, true));
        assert!(!state.set(SettingsFlag::HideModules, true));
        assert!(state.get(SettingsFlag::HideModules));
    }

    #[test]
    fn snapshot_decode_fills_missing_fields() -> Result<(), SettingsError> {
        let state = SettingsState::from_json(r#"{"hide_modules":true}"#)?;
        assert_eq!(
            state,
            SettingsState {
                hide_modules: true,
                ..SettingsState::default()
            }
        );
        assert_eq!(SettingsState::from_json(&scenario_state().to_json()?)?, scenario_state());
        Ok(())
    }

    #[test]
    fn snapshot_decode_rejects_garbage() {
        assert!(matches!(
            SettingsState::from_json("not json"),
            Err(SettingsError::Decode(_))
        ));
    }

    #[test]
    fn row_labels_carry_scope_and_stable_ids() {
        let rows = SettingsState::default().rows();
        assert_eq!(rows[0].label(), "Problem Lists and Search: Show Tags");
        assert_eq!(rows[2].label(), "Problem Search: Hide Modules");
        assert_eq!(
            rows[3].label(),
            "Dashboard: Show Ignored Problems & Modules"
        );
        assert_eq!(rows[1].label_id(), "settings-option-hide-difficulty-label");
    }

    #[test]
    fn dispatch_handles_compare_by_identity() {
        let recorder = Rc::new(Recorder::default());
        let first = SettingsDispatch::new(Rc::clone(&recorder));
        let second = SettingsDispatch::new(recorder);
        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }
}
