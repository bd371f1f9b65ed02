use leptos::{component, create_local_resource, provide_context, view, IntoView, Signal, SignalGet, SignalWith};
use leptos_router::{use_params_map, Outlet, A};

use crate::api::{fetch_trip, DataError};
use crate::components::app::app_path;
use crate::components::bottom_nav::BottomNav;
use crate::components::theme_toggle::ThemeToggle;
use crate::context::{use_data_source, use_locale, TripContext};

/// Shell around the trip tabs: header, tab content, bottom navigation
#[component]
#[must_use]
pub fn TripView() -> impl IntoView {
    let locale = use_locale();
    let source = use_data_source();
    let params = use_params_map();
    let trip_id = Signal::derive(move || params.with(|p| p.get("trip_id").cloned().unwrap_or_default()));

    let trip = create_local_resource(
        move || trip_id.get(),
        move |trip_id| {
            let source = source.clone();
            async move {
                fetch_trip(&source, &trip_id)
                    .await
                    .inspect_err(|e| leptos::logging::error!("Failed to load trip {}: {}", trip_id, e))
            }
        },
    );

    provide_context(TripContext {
        trip: Signal::derive(move || trip.get().and_then(Result::ok)),
    });

    view! {
        {move || match trip.get() {
            None => view! { <div class="status-message">{locale.t("common.loading")}</div> }.into_view(),
            Some(Err(DataError::NotFound { .. })) => view! {
                <div class="status-message">
                    <p>{locale.t("trip.not_found")}</p>
                    <A href=app_path("/") class="text-link">{locale.t("common.back")}</A>
                </div>
            }.into_view(),
            Some(Err(_)) => view! { <div class="status-message">{locale.t("common.error")}</div> }.into_view(),
            Some(Ok(trip)) => view! {
                <div class="trip-view">
                    <header class="trip-header">
                        <A href=app_path("/") class="icon-button">
                            <i class="fa-solid fa-chevron-left"></i>
                        </A>
                        <h1 class="trip-title">{trip.name}</h1>
                        <ThemeToggle/>
                    </header>

                    <main class="trip-content">
                        <Outlet/>
                    </main>

                    <BottomNav trip_id=trip_id/>
                </div>
            }.into_view(),
        }}
    }
}
