use leptos::{component, view, IntoView, SignalGet};

use crate::context::{use_locale, use_theme_context};
use crate::theme::Theme;

#[component]
#[must_use]
pub fn ThemeToggle(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    let theme = use_theme_context();
    let locale = use_locale();
    let class = class.unwrap_or_else(|| "icon-button".to_string());

    view! {
        <button
            class=class
            aria-label=move || locale.t("theme.toggle")
            on:click=move |_| theme.toggle()
        >
            {move || match theme.theme.get() {
                Theme::Dark => view! { <i class="fa-solid fa-sun"></i> },
                Theme::Light => view! { <i class="fa-solid fa-moon"></i> },
            }}
        </button>
    }
}
