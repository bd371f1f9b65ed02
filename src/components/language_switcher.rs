use leptos::{component, create_node_ref, create_signal, html, view, IntoView, SignalGet, SignalSet, SignalUpdate};
use leptos_use::on_click_outside;

use crate::context::use_locale;
use crate::i18n::Locale;

#[component]
#[must_use]
pub fn LanguageSwitcher() -> impl IntoView {
    let locale = use_locale();
    let (is_open, set_is_open) = create_signal(false);
    let dropdown_ref = create_node_ref::<html::Div>();

    let _ = on_click_outside(dropdown_ref, move |_| set_is_open.set(false));

    view! {
        <div class="language-switcher" node_ref=dropdown_ref>
            <button
                class="icon-button"
                aria-label=move || locale.t("language.change")
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                <i class="fa-solid fa-globe"></i>
            </button>

            {move || is_open.get().then(|| view! {
                <div class="language-menu">
                    {Locale::ALL.into_iter().map(|option| view! {
                        <button
                            class="language-option"
                            class:active=move || locale.locale.get() == option
                            on:click=move |_| {
                                locale.set(option);
                                set_is_open.set(false);
                            }
                        >
                            {option.native_name()}
                        </button>
                    }).collect::<Vec<_>>()}
                </div>
            })}
        </div>
    }
}
