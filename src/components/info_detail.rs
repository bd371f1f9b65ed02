use leptos::{component, create_local_resource, view, IntoView, Signal, SignalGet, SignalWith};
use leptos_router::use_params_map;

use crate::api::fetch_info_article;
use crate::context::{use_data_source, use_locale, use_trip};
use crate::markdown::{error_article, markdown_to_html};

/// Markdown reader for one info article
#[component]
#[must_use]
pub fn InfoDetail() -> impl IntoView {
    let locale = use_locale();
    let trip = use_trip();
    let source = use_data_source();
    let params = use_params_map();
    let info_id = Signal::derive(move || params.with(|p| p.get("info_id").cloned().unwrap_or_default()));

    let article = create_local_resource(
        move || (trip.trip_id(), info_id.get()),
        move |(trip_id, info_id)| {
            let source = source.clone();
            let fallback = error_article(locale.t_untracked("common.error"));
            async move {
                let Some(trip_id) = trip_id else { return fallback };
                fetch_info_article(&source, &trip_id, &info_id)
                    .await
                    .unwrap_or_else(|e| {
                        leptos::logging::error!("Failed to load article {}: {}", info_id, e);
                        fallback
                    })
            }
        },
    );

    let go_back = move |_: web_sys::MouseEvent| {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else { return };
        if history.back().is_err() {
            leptos::logging::warn!("Failed to navigate back");
        }
    };

    view! {
        <div class="info-detail">
            <div class="reader-header">
                <button class="icon-button" aria-label=move || locale.t("common.back") on:click=go_back>
                    <i class="fa-solid fa-chevron-left"></i>
                </button>
                <span class="reader-title">{move || locale.t("info.reading")}</span>
            </div>

            <div class="reader-body">
                {move || match article.get() {
                    None => view! {
                        <div class="skeleton">
                            <div class="skeleton-line wide"></div>
                            <div class="skeleton-line"></div>
                            <div class="skeleton-line"></div>
                            <div class="skeleton-line short"></div>
                        </div>
                    }.into_view(),
                    Some(markdown) => view! {
                        <div class="prose" inner_html=markdown_to_html(&markdown)></div>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}
