use leptos::{component, provide_context, view, IntoView};
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use leptos_router::{Redirect, Route, Router, Routes};

use crate::api::DataSource;
use crate::components::home::Home;
use crate::components::info_detail::InfoDetail;
use crate::components::info_view::InfoView;
use crate::components::schedule_view::ScheduleView;
use crate::components::shops_view::ShopsView;
use crate::components::trip_view::TripView;
use crate::constants::{BASE_PATH, FONT_AWESOME_URL};
use crate::context::{DataContext, LocaleContext};
use crate::theme::use_theme;

/// Router base for a deployment path: `/travel-pocket/` becomes `/travel-pocket`, `/` becomes empty
fn route_base(base_path: &str) -> String {
    let trimmed = base_path.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

fn join_app_path(base_path: &str, path: &str) -> String {
    format!("{}/{}", route_base(base_path), path.trim_start_matches('/'))
}

/// Absolute in-app path under the deployment base, e.g. `/travel-pocket/trip/x`
#[must_use]
pub fn app_path(path: &str) -> String {
    join_app_path(BASE_PATH, path)
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(use_theme());
    provide_context(LocaleContext::detect());
    provide_context(DataContext {
        source: DataSource::from_window_or_relative(),
    });

    view! {
        <Stylesheet id="font-awesome" href=FONT_AWESOME_URL/>
        <Title text="Travel Pocket"/>

        <div class="app-backdrop">
            <div class="app">
                <Router>
                    <Routes base=route_base(BASE_PATH)>
                        <Route path="/" view=Home/>
                        <Route path="/trip/:trip_id" view=TripView>
                            <Route path="" view=|| view! { <Redirect path="schedule"/> }/>
                            <Route path="schedule" view=ScheduleView/>
                            <Route path="shops" view=ShopsView/>
                            <Route path="info" view=InfoView/>
                            <Route path="info/:info_id" view=InfoDetail/>
                        </Route>
                        <Route path="/*any" view=|| view! { <Redirect path=app_path("/")/> }/>
                    </Routes>
                </Router>
            </div>
        </div>
    }
}
