//! Settings options panel.
//!
//! # Design
//! - Keep the view stateless and driven by injected state.
//! - Emit flag changes through the injected dispatcher; persistence lives elsewhere.

use crate::components::daisy::Toggle;
use crate::core::settings::{SettingsDispatch, SettingsRow, SettingsState};
use yew::prelude::*;

/// Props for [`SettingsOptions`].
#[derive(Properties, PartialEq)]
pub struct SettingsOptionsProps {
    /// Current flag values.
    pub state: SettingsState,
    /// Setter bindings for the flags.
    pub dispatch: SettingsDispatch,
}

/// General options list: one switch per display preference.
#[function_component(SettingsOptions)]
pub fn settings_options(props: &SettingsOptionsProps) -> Html {
    let rows = props
        .state
        .rows()
        .into_iter()
        .map(|row| option_row(row, &props.dispatch))
        .collect::<Html>();

    html! {
        <div>
            <div class="space-y-1">
                <h3 class="text-lg leading-6 font-medium">{"Options"}</h3>
            </div>
            <ul class="divide-y divide-base-300">
                {rows}
            </ul>
        </div>
    }
}

fn row_onchange(row: SettingsRow, dispatch: &SettingsDispatch) -> Callback<bool> {
    let dispatch = dispatch.clone();
    Callback::from(move |_: bool| dispatch.toggle(&row))
}

fn option_row(row: SettingsRow, dispatch: &SettingsDispatch) -> Html {
    let label_id = row.label_id();
    let onchange = row_onchange(row, dispatch);

    html! {
        <li key={row.flag.key()} class="py-4 flex items-center justify-between" data-setting={row.flag.key()}>
            <div class="flex flex-col">
                <p class="text-sm font-medium text-base-content/70" id={label_id.clone()}>
                    {row.label()}
                </p>
            </div>
            <Toggle checked={row.value} label_id={AttrValue::from(label_id)} onchange={onchange} />
        </li>
    }
}
