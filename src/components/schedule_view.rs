use leptos::{
    component, create_effect, create_local_resource, create_memo, create_rw_signal, view, IntoView, Signal,
    SignalGet, SignalUpdate, SignalWith, SignalWithUntracked,
};

use crate::api::fetch_itinerary;
use crate::components::detail_sheet::DetailSheetView;
use crate::context::{use_data_source, use_locale, use_trip};
use crate::models::{ItineraryDay, ItineraryItem};
use crate::presentation::category_style;
use crate::schedule::{day_chip_date, day_chip_label, shows_day_selector, ScheduleSelection};
use crate::timeline::{build_timeline, Gap, TimelineEntry};

#[component]
#[must_use]
pub fn ScheduleView() -> impl IntoView {
    let locale = use_locale();
    let trip = use_trip();
    let source = use_data_source();
    let selection = create_rw_signal(ScheduleSelection::new());

    let itinerary = create_local_resource(
        move || trip.trip_id(),
        move |trip_id| {
            let source = source.clone();
            async move {
                let Some(trip_id) = trip_id else { return Vec::new() };
                fetch_itinerary(&source, &trip_id).await.unwrap_or_else(|e| {
                    leptos::logging::error!("Failed to load itinerary for {}: {}", trip_id, e);
                    Vec::new()
                })
            }
        },
    );
    let days = Signal::derive(move || itinerary.get().unwrap_or_default());

    // Selection belongs to one trip
    create_effect(move |previous: Option<Option<String>>| {
        let trip_id = trip.trip_id();
        if previous.is_some_and(|previous| previous != trip_id) {
            selection.update(ScheduleSelection::reset);
        }
        trip_id
    });

    let day_index = create_memo(move |_| selection.with(|s| s.day_index));
    let detail = create_memo(move |_| days.with(|days| selection.with(|s| s.open_detail(days))));

    let select_day = move |index: usize| {
        let day_count = days.with_untracked(Vec::len);
        selection.update(|s| s.select_day(index, day_count));
    };
    let open_item = move |item_id: String| selection.update(|s| s.open(item_id));
    let close_sheet = move || selection.update(ScheduleSelection::close_sheet);

    view! {
        <div class="schedule">
            {move || {
                let days = days.get();
                shows_day_selector(&days).then(|| view! {
                    <DaySelector days=days active=day_index.into() on_select=select_day/>
                })
            }}

            <div class="timeline">
                {move || {
                    let days = days.get();
                    let Some(day) = days.get(day_index.get()) else {
                        return view! { <div class="empty-state">{locale.t("schedule.loading")}</div> }.into_view();
                    };
                    if day.items.is_empty() {
                        return view! { <div class="empty-state">{locale.t("schedule.empty")}</div> }.into_view();
                    }
                    build_timeline(&day.items)
                        .into_iter()
                        .map(|entry| match entry {
                            TimelineEntry::Item(item) => view! {
                                <TimelineCard item=item.clone() on_open=open_item/>
                            }.into_view(),
                            TimelineEntry::Gap(gap) => view! { <GapIndicator gap=gap/> }.into_view(),
                        })
                        .collect::<Vec<_>>()
                        .into_view()
                }}
            </div>

            <DetailSheetView detail=detail.into() on_close=close_sheet/>
        </div>
    }
}

#[component]
fn DaySelector(
    days: Vec<ItineraryDay>,
    active: Signal<usize>,
    on_select: impl Fn(usize) + 'static + Copy,
) -> impl IntoView {
    view! {
        <div class="day-selector">
            {days.iter().enumerate().map(|(index, day)| view! {
                <button
                    class="day-chip"
                    class:active=move || active.get() == index
                    on:click=move |_| on_select(index)
                >
                    {day_chip_label(day)}
                    <span class="day-chip-date">"(" {day_chip_date(day)} ")"</span>
                </button>
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn TimelineCard(
    item: ItineraryItem,
    on_open: impl Fn(String) + 'static + Copy,
) -> impl IntoView {
    let style = category_style(item.category);
    let item_id = item.id.clone();

    view! {
        <div class="timeline-card" on:click=move |_| on_open(item_id.clone())>
            <div class="time-column">
                <span class="time-start">{item.start_time.clone()}</span>
                <div class="time-rule"></div>
                <span class="time-end">{item.end_time.clone()}</span>
            </div>
            <div class="card-body">
                <div class="card-title-row">
                    <h3>{item.title.clone()}</h3>
                    <span class=format!("category-badge {}", style.tone)>
                        <i class=style.icon></i>
                    </span>
                </div>
                <div class="card-location">
                    <i class="fa-solid fa-location-dot"></i>
                    <span>{item.location.clone()}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn GapIndicator(gap: Gap) -> impl IntoView {
    let locale = use_locale();

    view! {
        <div class="gap-indicator">
            <span class="gap-pill">
                <i class="fa-regular fa-clock"></i>
                {gap.label()} " " {move || locale.t("schedule.gap")}
            </span>
        </div>
    }
}
