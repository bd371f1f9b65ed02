use leptos::{component, create_local_resource, view, IntoView, SignalGet};
use leptos_router::A;

use crate::api::fetch_trips;
use crate::components::app::app_path;
use crate::components::language_switcher::LanguageSwitcher;
use crate::components::theme_toggle::ThemeToggle;
use crate::context::{use_data_source, use_locale};
use crate::log;
use crate::models::Trip;

#[component]
#[must_use]
pub fn Home() -> impl IntoView {
    let locale = use_locale();
    let source = use_data_source();

    let trips = create_local_resource(
        || (),
        move |()| {
            let source = source.clone();
            async move {
                match fetch_trips(&source).await {
                    Ok(trips) => {
                        log!("Loaded {} trips", trips.len());
                        trips
                    }
                    Err(e) => {
                        leptos::logging::error!("Failed to load trips: {}", e);
                        Vec::new()
                    }
                }
            }
        },
    );

    view! {
        <div class="home">
            <div class="home-hero">
                <div>
                    <h1>{move || locale.t("app.title")}</h1>
                    <p>{move || locale.t("home.subtitle")}</p>
                </div>
                <div class="hero-actions">
                    <LanguageSwitcher/>
                    <ThemeToggle class="icon-button on-hero"/>
                </div>
            </div>

            <div class="home-content">
                <h2>{move || locale.t("home.your_trips")}</h2>
                {move || {
                    let trips = trips.get().unwrap_or_default();
                    if trips.is_empty() {
                        view! { <div class="empty-state">{locale.t("home.loading")}</div> }.into_view()
                    } else {
                        trips.into_iter().map(|trip| view! { <TripCard trip=trip/> }).collect::<Vec<_>>().into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn TripCard(trip: Trip) -> impl IntoView {
    let locale = use_locale();
    let date_range = trip.date_range_label();

    view! {
        <A href=app_path(&format!("/trip/{}", trip.id)) class="trip-card">
            <div class="trip-cover">
                <img src=trip.cover_image.clone() alt=trip.name.clone()/>
                <div class="trip-cover-shade"></div>
                <div class="trip-cover-text">
                    <h3>{trip.name.clone()}</h3>
                    <div class="trip-dates">
                        <i class="fa-regular fa-calendar"></i>
                        <span>{date_range}</span>
                    </div>
                </div>
            </div>
            <div class="trip-card-footer">
                <span class="trip-card-cta">
                    <i class="fa-solid fa-location-dot"></i>
                    {move || locale.t("home.view_itinerary")}
                </span>
                <span class="trip-card-arrow"><i class="fa-solid fa-arrow-right"></i></span>
            </div>
        </A>
    }
}
