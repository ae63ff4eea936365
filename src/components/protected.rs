//! Route guard for authenticated pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Wraps a page that requires an authenticated session.
///
/// While the startup check is in flight a spinner renders, so the guard
/// never flashes protected content (or bounces to login) before the
/// session state is definitive. Once settled, an unauthenticated
/// session is redirected to `/login`; this also covers forced logouts,
/// since expiring the session re-runs the effect.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    move || {
        let state = session.get();
        if state.loading {
            view! {
                <div class="loading-container">
                    <div class="loading-spinner"></div>
                    <p>"Loading..."</p>
                </div>
            }
            .into_any()
        } else if state.is_authenticated() {
            children().into_any()
        } else {
            ().into_any()
        }
    }
}
