use leptos::{component, create_local_resource, create_memo, create_rw_signal, view, IntoView, Signal, SignalGet, SignalSet, SignalWith};

use crate::api::fetch_shops;
use crate::context::{use_data_source, use_locale, use_trip};
use crate::models::Shop;
use crate::shops::{filter_shops, tag_options, TagFilter};

#[component]
#[must_use]
pub fn ShopsView() -> impl IntoView {
    let locale = use_locale();
    let trip = use_trip();
    let source = use_data_source();
    let selected = create_rw_signal(TagFilter::All);

    let shops = create_local_resource(
        move || trip.trip_id(),
        move |trip_id| {
            let source = source.clone();
            async move {
                let Some(trip_id) = trip_id else { return Vec::new() };
                fetch_shops(&source, &trip_id).await.unwrap_or_else(|e| {
                    leptos::logging::error!("Failed to load shops for {}: {}", trip_id, e);
                    Vec::new()
                })
            }
        },
    );
    let shops = Signal::derive(move || shops.get().unwrap_or_default());
    let tags = create_memo(move |_| shops.with(|shops| tag_options(shops)));

    view! {
        <div class="shops">
            <div class="tag-filter">
                {move || tags.get().into_iter().map(|tag| {
                    let label = match &tag {
                        TagFilter::All => locale.t("shops.all").to_string(),
                        TagFilter::Tag(name) => name.clone(),
                    };
                    let is_selected = {
                        let tag = tag.clone();
                        move || selected.with(|s| *s == tag)
                    };
                    view! {
                        <button
                            class="tag-chip"
                            class:active=is_selected
                            on:click=move |_| selected.set(tag.clone())
                        >
                            {label}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>

            <div class="shop-list">
                {move || {
                    let filter = selected.get();
                    shops.with(|shops| {
                        let visible = filter_shops(shops, &filter);
                        if visible.is_empty() {
                            view! { <div class="empty-state">{locale.t("shops.empty")}</div> }.into_view()
                        } else {
                            visible.into_iter().map(|shop| view! { <ShopCard shop=shop.clone()/> }).collect::<Vec<_>>().into_view()
                        }
                    })
                }}
            </div>
        </div>
    }
}

#[component]
fn ShopCard(shop: Shop) -> impl IntoView {
    view! {
        <div class="shop-card">
            <div class="shop-title-row">
                <h3>{shop.name}</h3>
                {shop.google_map_link.map(|link| view! {
                    <a class="shop-map-link" href=link target="_blank" rel="noopener noreferrer">
                        <i class="fa-solid fa-arrow-up-right-from-square"></i>
                    </a>
                })}
            </div>
            <div class="shop-meta">
                <i class="fa-solid fa-location-dot"></i>
                <span>{shop.location}</span>
            </div>
            <div class="shop-meta">
                <i class="fa-regular fa-clock"></i>
                <span>{shop.business_hours}</span>
            </div>
            <div class="shop-tags">
                {shop.tags.into_iter().map(|tag| view! { <span class="shop-tag">"#" {tag}</span> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
