//! SOP library page: list and remove stored procedure documents.

use leptos::prelude::*;

use crate::components::protected::Protected;
use crate::net::types::SopDocument;
use crate::state::toasts::{self, ToastKind, ToastsState};

#[component]
pub fn SopPage() -> impl IntoView {
    view! {
        <Protected>
            <SopLibrary/>
        </Protected>
    }
}

#[component]
fn SopLibrary() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let documents = LocalResource::new(|| crate::net::api::fetch_sops());

    let on_delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Are you sure you want to delete this SOP?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let documents = documents.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_sop(id).await {
                    Ok(()) => {
                        toasts::notify(toasts, ToastKind::Success, "File deleted successfully!");
                        documents.refetch();
                    }
                    Err(err) => {
                        leptos::logging::warn!("SOP deletion failed: {err}");
                        toasts::notify(
                            toasts,
                            ToastKind::Error,
                            "Could not delete file. Please try again.",
                        );
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, toasts);
        }
    };

    let document_row = move |doc: SopDocument| {
        let id = doc.id;
        view! {
            <li class="sop-item">
                <span class="sop-item__name">{doc.filename}</span>
                {doc
                    .uploaded_at
                    .map(|at| view! { <span class="sop-item__date">{at}</span> })}
                <button class="sop-item__delete" on:click=move |_| on_delete(id)>
                    "Delete"
                </button>
            </li>
        }
    };

    view! {
        <div class="sop-container">
            <h1>"Standard Operating Procedures"</h1>
            <Suspense fallback=move || view! { <p>"Loading SOPs..."</p> }>
                {move || {
                    documents
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! { <p class="sop-empty">"No SOPs uploaded yet."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <ul class="sop-list">
                                            {list
                                                .into_iter()
                                                .map(document_row)
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                    .into_any()
                                }
                            }
                            Err(_) => {
                                view! {
                                    <p class="sop-error">"Could not load existing SOPs"</p>
                                }
                                .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
