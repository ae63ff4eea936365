//! Comment thread page for a single entity, addressed by route param.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::comments_thread::CommentsThread;
use crate::components::protected::Protected;

#[component]
pub fn CommentsPage() -> impl IntoView {
    let params = use_params_map();
    let entity_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <Protected>
            <div class="comments-wrapper">
                <h2 class="entity-title">"Comments for Entity #" {entity_id}</h2>
                {move || view! { <CommentsThread entity_id=entity_id()/> }}
            </div>
        </Protected>
    }
}
