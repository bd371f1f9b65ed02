use leptos::{component, create_local_resource, view, IntoView, SignalGet};
use leptos_router::A;

use crate::api::fetch_info;
use crate::components::app::app_path;
use crate::context::{use_data_source, use_locale, use_trip};
use crate::models::InfoItem;
use crate::presentation::info_icon;

#[component]
#[must_use]
pub fn InfoView() -> impl IntoView {
    let locale = use_locale();
    let trip = use_trip();
    let source = use_data_source();

    let items = create_local_resource(
        move || trip.trip_id(),
        move |trip_id| {
            let source = source.clone();
            async move {
                let Some(trip_id) = trip_id else { return Vec::new() };
                fetch_info(&source, &trip_id).await.unwrap_or_else(|e| {
                    leptos::logging::error!("Failed to load info for {}: {}", trip_id, e);
                    Vec::new()
                })
            }
        },
    );

    view! {
        <div class="info">
            <h2 class="section-title">{move || locale.t("info.title")}</h2>
            <div class="info-list">
                {move || {
                    let items = items.get().unwrap_or_default();
                    let trip_id = trip.trip_id().unwrap_or_default();
                    if items.is_empty() {
                        view! { <div class="empty-state">{locale.t("info.loading")}</div> }.into_view()
                    } else {
                        items
                            .into_iter()
                            .map(|item| view! { <InfoCard item=item trip_id=trip_id.clone()/> })
                            .collect::<Vec<_>>()
                            .into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn InfoCard(item: InfoItem, trip_id: String) -> impl IntoView {
    view! {
        <div class="info-card">
            <A href=app_path(&format!("/trip/{trip_id}/info/{}", item.id)) class="info-card-header">
                <span class="info-icon"><i class=info_icon(&item.icon)></i></span>
                <h3>{item.title}</h3>
                <i class="fa-solid fa-chevron-right info-chevron"></i>
            </A>
            <div class="info-links">
                {item.links.into_iter().map(|link| view! {
                    <a class="info-link" href=link.url target="_blank" rel="noopener noreferrer">
                        <span>{link.label}</span>
                        <i class="fa-solid fa-arrow-up-right-from-square"></i>
                    </a>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
