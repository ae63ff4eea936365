//! Transient notification overlay.

use leptos::prelude::*;

use crate::state::toasts::ToastsState;

/// Renders the shared toast stack. Toasts auto-dismiss after a few
/// seconds (scheduled at push time) and can be dismissed by click.
#[component]
pub fn ToastTray() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();

    view! {
        <div class="toast-tray">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id.clone();
                        view! {
                            <div
                                class=format!("toast toast--{}", toast.kind.css_class())
                                on:click=move |_| {
                                    toasts.update(|t| {
                                        t.dismiss(&id);
                                    });
                                }
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
