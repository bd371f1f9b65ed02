use leptos::{component, view, IntoView, Signal, SignalGet};

use crate::components::modal_overlay::ModalOverlay;
use crate::context::use_locale;
use crate::presentation::category_style;
use crate::schedule::DetailSheet;

/// Bottom sheet with the full details of the open itinerary item
#[component]
#[must_use]
pub fn DetailSheetView(
    detail: Signal<Option<DetailSheet>>,
    on_close: impl Fn() + 'static + Copy,
) -> impl IntoView {
    let locale = use_locale();

    view! {
        {move || detail.get().map(|sheet| {
            let style = category_style(sheet.category);
            let day_label = sheet.day_label();
            let has_description = !sheet.description.is_empty();

            view! {
                <ModalOverlay on_dismiss=on_close>
                    <div class="detail-sheet">
                        <div class="sheet-handle"></div>
                        <button
                            class="sheet-close"
                            aria-label=locale.t("schedule.close")
                            on:click=move |_| on_close()
                        >
                            <i class="fa-solid fa-xmark"></i>
                        </button>

                        <div class="sheet-header">
                            <div class="sheet-category">
                                <span class=format!("category-badge large {}", style.tone)>
                                    <i class=style.icon></i>
                                </span>
                                <span class="sheet-category-label">{sheet.category_label}</span>
                            </div>
                            <h2>{sheet.title}</h2>
                        </div>

                        <div class="sheet-facts">
                            <div class="fact">
                                <span class="fact-label">{locale.t("schedule.time")}</span>
                                <div class="fact-value">{sheet.time_range}</div>
                            </div>
                            <div class="fact">
                                <span class="fact-label">{locale.t("schedule.date")}</span>
                                <div class="fact-value">{day_label}</div>
                            </div>
                        </div>

                        <div class="sheet-section">
                            <h3>{locale.t("schedule.location")}</h3>
                            <a class="location-link" href=sheet.map_url target="_blank" rel="noopener noreferrer">
                                <span>
                                    <i class="fa-solid fa-location-dot"></i>
                                    {sheet.location}
                                </span>
                                <i class="fa-solid fa-arrow-up-right-from-square"></i>
                            </a>
                        </div>

                        {has_description.then(|| view! {
                            <div class="sheet-section">
                                <h3>{locale.t("schedule.description")}</h3>
                                <div class="sheet-description">
                                    {sheet.description.into_iter().map(|paragraph| view! { <p>{paragraph}</p> }).collect::<Vec<_>>()}
                                </div>
                            </div>
                        })}
                    </div>
                </ModalOverlay>
            }
        })}
    }
}
