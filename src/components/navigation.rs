use dioxus::prelude::*;

use crate::components::app_view::TabType;
use crate::components::Icon;
use crate::store::JukeboxStore;

/// Bottom tab strip switching between the jukebox, library and settings surfaces.
#[component]
pub fn TabBar() -> Element {
    let mut store = use_context::<Signal<JukeboxStore>>();
    let active = store.read().active_tab();

    rsx! {
        nav { class: "flex items-center justify-center border-t border-gray-700 bg-gray-900 p-2",
            for tab in TabType::ALL {
                TabButton {
                    key: "{tab.label()}",
                    icon: tab.icon(),
                    label: tab.label(),
                    active: active == tab,
                    onclick: move |_| store.write().set_active_tab(tab),
                }
            }
        }
    }
}

#[component]
fn TabButton(icon: String, label: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let base_class = "skeuo-button flex items-center gap-2 mx-2 px-4 py-2 rounded-md transition-all duration-200";
    let active_class = if active { "skeuo-button-primary" } else { "" };

    rsx! {
        button {
            class: "{base_class} {active_class}",
            onclick: move |e| onclick.call(e),
            Icon { name: icon.clone(), class: "w-5 h-5".to_string() }
            span { "{label}" }
        }
    }
}
