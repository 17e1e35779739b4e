//! Switch control bound to a boolean.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToggleProps {
    /// Id of an external element labelling the switch.
    #[prop_or_default]
    pub label_id: Option<AttrValue>,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onchange: Callback<bool>,
}

/// Next state requested when a switch is clicked, or `None` while disabled.
#[must_use]
pub const fn next_state(checked: bool, disabled: bool) -> Option<bool> {
    if disabled { None } else { Some(!checked) }
}

/// The rendered state always mirrors `checked`; clicks only request a change.
#[function_component(Toggle)]
pub fn toggle(props: &ToggleProps) -> Html {
    let onclick = {
        let onchange = props.onchange.clone();
        let checked = props.checked;
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| {
            if let Some(next) = next_state(checked, disabled) {
                onchange.emit(next);
            }
        })
    };
    let aria_checked = if props.checked { "true" } else { "false" };

    html! {
        <label class="label cursor-pointer gap-2">
            <input
                type="checkbox"
                role="switch"
                class={classes!("toggle", props.class.clone())}
                aria-checked={aria_checked}
                aria-labelledby={props.label_id.clone()}
                checked={props.checked}
                disabled={props.disabled}
                onclick={onclick}
            />
        </label>
    }
}
