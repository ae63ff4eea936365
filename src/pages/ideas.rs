//! Idea submission form.

use leptos::prelude::*;

use crate::components::protected::Protected;
use crate::net::types::IdeaRequest;
use crate::state::toasts::{self, ToastKind, ToastsState};
use crate::util::validate;

#[component]
pub fn IdeaPage() -> impl IntoView {
    view! {
        <Protected>
            <IdeaForm/>
        </Protected>
    }
}

#[component]
fn IdeaForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let title_error = RwSignal::new(None::<String>);
    let description_error = RwSignal::new(None::<String>);
    let submit_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get_untracked();
        let description_value = description.get_untracked();

        title_error.set(validate::idea_title_error(&title_value).map(str::to_owned));
        description_error
            .set(validate::idea_description_error(&description_value).map(str::to_owned));
        if title_error.get_untracked().is_some() || description_error.get_untracked().is_some() {
            return;
        }

        submit_error.set(None);
        submitting.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let payload = IdeaRequest {
                    title: title_value.trim().to_owned(),
                    description: description_value.trim().to_owned(),
                };
                match crate::net::api::submit_idea(&payload).await {
                    Ok(()) => {
                        title.set(String::new());
                        description.set(String::new());
                        toasts::notify(toasts, ToastKind::Success, "Idea submitted successfully!");
                    }
                    Err(err) => {
                        let message = match &err {
                            crate::net::http::ApiError::Server { message, .. } => message.clone(),
                            _ => "Submission failed".to_owned(),
                        };
                        toasts::notify(toasts, ToastKind::Error, message.clone());
                        submit_error.set(Some(message));
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (IdeaRequest { title: title_value, description: description_value }, toasts);
            submitting.set(false);
        }
    };

    view! {
        <div class="idea-form-container">
            <h2>"Submit a New Idea"</h2>
            <form class="idea-form" on:submit=on_submit>
                <label for="title">"Title"</label>
                <input
                    id="title"
                    placeholder="Idea title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                {move || {
                    title_error.get().map(|message| view! { <div class="error">{message}</div> })
                }}

                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    placeholder="Describe your idea"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                {move || {
                    description_error
                        .get()
                        .map(|message| view! { <div class="error">{message}</div> })
                }}

                {move || {
                    submit_error.get().map(|message| view! { <div class="error">{message}</div> })
                }}

                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                </button>
            </form>
        </div>
    }
}
