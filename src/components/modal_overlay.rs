use leptos::{component, view, Children, IntoView};

/// Dimmed full-screen backdrop; clicking outside the content dismisses it
#[component]
#[must_use]
pub fn ModalOverlay(
    on_dismiss: impl Fn() + 'static,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_dismiss()>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
