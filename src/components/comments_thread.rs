//! Comment thread for a single entity.

use leptos::prelude::*;

use crate::state::comments::CommentsState;
use crate::state::toasts::{self, ToastKind, ToastsState};

/// Loads and renders the thread for `entity_id`, with a post form.
///
/// Load and post failures show local error text plus a toast; they do
/// not touch the session (a 401 is handled by the shared pipeline like
/// everywhere else).
#[component]
pub fn CommentsThread(entity_id: String) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let comments = RwSignal::new(CommentsState { loading: true, ..Default::default() });
    let draft = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let entity_id = entity_id.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_comments(&entity_id).await {
                Ok(items) => comments.update(|c| c.set_items(items)),
                Err(err) => {
                    leptos::logging::warn!("failed to load comments: {err}");
                    comments.update(|c| c.set_error("Failed to load comments"));
                    toasts::notify(toasts, ToastKind::Error, "Could not load comments");
                }
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        submitting.set(true);
        #[cfg(feature = "hydrate")]
        {
            let entity_id = entity_id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::post_comment(&entity_id, text.trim()).await {
                    Ok(comment) => {
                        comments.update(|c| c.append(comment));
                        draft.set(String::new());
                        toasts::notify(toasts, ToastKind::Success, "Comment posted successfully");
                    }
                    Err(err) => {
                        leptos::logging::warn!("failed to post comment: {err}");
                        comments.update(|c| c.set_error("Could not post comment"));
                        toasts::notify(toasts, ToastKind::Error, "Failed to post comment");
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&entity_id, toasts);
            submitting.set(false);
        }
    };

    view! {
        <div class="comments-container">
            <h3 class="comments-title">"Comments"</h3>

            {move || {
                comments
                    .get()
                    .error
                    .map(|error| view! { <div class="error-message">{error}</div> })
            }}

            {move || {
                let state = comments.get();
                if state.loading {
                    view! { <div class="comments-loading">"Loading comments..."</div> }.into_any()
                } else if state.items.is_empty() {
                    view! {
                        <div class="no-comments">"No comments yet. Be the first to comment!"</div>
                    }
                    .into_any()
                } else {
                    view! {
                        <ul class="comments-list">
                            {state
                                .items
                                .into_iter()
                                .map(|comment| {
                                    view! {
                                        <li class="comment-item">
                                            <div class="comment-header">
                                                <span class="comment-author">
                                                    {comment.author.unwrap_or_else(|| "Anonymous".to_owned())}
                                                </span>
                                                {comment
                                                    .created_at
                                                    .map(|at| {
                                                        view! { <span class="comment-date">{at}</span> }
                                                    })}
                                            </div>
                                            <div class="comment-text">{comment.text}</div>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                    .into_any()
                }
            }}

            <form class="comment-form" on:submit=on_submit>
                <input
                    class="comment-input"
                    type="text"
                    placeholder="Add a comment"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Posting..." } else { "Post" }}
                </button>
            </form>
        </div>
    }
}
