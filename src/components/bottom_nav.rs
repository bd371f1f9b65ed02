use leptos::{component, view, IntoView, Signal, SignalGet};
use leptos_router::A;

use crate::components::app::app_path;
use crate::context::use_locale;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct NavTab {
    /// Path segment under `/trip/:trip_id/`
    pub path: &'static str,
    pub label_key: &'static str,
    pub icon: &'static str,
}

pub const TRIP_TABS: [NavTab; 3] = [
    NavTab { path: "schedule", label_key: "tabs.schedule", icon: "fa-regular fa-calendar" },
    NavTab { path: "shops", label_key: "tabs.shops", icon: "fa-solid fa-store" },
    NavTab { path: "info", label_key: "tabs.info", icon: "fa-solid fa-circle-info" },
];

#[must_use]
pub fn tab_href(trip_id: &str, tab: &NavTab) -> String {
    app_path(&format!("/trip/{trip_id}/{}", tab.path))
}

/// Bottom tab bar for the trip screens; the router marks the active link with `aria-current`
#[component]
#[must_use]
pub fn BottomNav(#[prop(into)] trip_id: Signal<String>) -> impl IntoView {
    let locale = use_locale();

    view! {
        <nav class="bottom-nav">
            {TRIP_TABS.into_iter().map(|tab| view! {
                <A href=move || tab_href(&trip_id.get(), &tab) class="nav-tab">
                    <i class=format!("{} nav-icon", tab.icon)></i>
                    <span class="nav-label">{move || locale.t(tab.label_key)}</span>
                </A>
            }).collect::<Vec<_>>()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_hrefs() {
        let hrefs: Vec<String> = TRIP_TABS.iter().map(|tab| tab_href("kyoto", tab)).collect();
        assert_eq!(
            hrefs,
            vec![
                app_path("/trip/kyoto/schedule"),
                app_path("/trip/kyoto/shops"),
                app_path("/trip/kyoto/info"),
            ]
        );
    }
}
