use crate::core::settings::{SettingsDispatch, SettingsState};
use crate::core::store::{UserDataStore, replace_settings};
use crate::features::settings::view::SettingsOptions;
use preferences::{load_settings, persist_settings};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod preferences;

#[function_component(GuideApp)]
pub(crate) fn guide_app() -> Html {
    let dispatch = Dispatch::<UserDataStore>::new();
    let settings_dispatch = use_memo(
        {
            let dispatch = dispatch.clone();
            move |_| SettingsDispatch::new(dispatch)
        },
        (),
    );
    let settings = use_selector(|store: &UserDataStore| store.settings);
    let loaded = use_state(|| false);

    {
        let dispatch = dispatch.clone();
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let stored = load_settings();
                dispatch.reduce_mut(|store| replace_settings(store, stored));
                loaded.set(true);
                || ()
            },
            (),
        );
    }
    {
        let settings: SettingsState = *settings;
        let ready = *loaded;
        use_effect_with_deps(
            move |(settings, ready)| {
                if *ready {
                    persist_settings(settings);
                }
                || ()
            },
            (settings, ready),
        );
    }

    html! {
        <main class="mx-auto max-w-3xl p-6">
            <SettingsOptions state={*settings} dispatch={(*settings_dispatch).clone()} />
        </main>
    }
}

/// Mount the settings shell on `#root`, falling back to `<body>`.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<GuideApp>::with_root(root).render();
    } else {
        yew::Renderer::<GuideApp>::new().render();
    }
}
