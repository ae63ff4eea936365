//! Top navigation bar: brand link, feature links, notification bell,
//! and session controls.

use leptos::prelude::*;

use crate::components::notification_bell::NotificationBell;
use crate::state::session::SessionState;
use crate::state::toasts::ToastsState;
use crate::util::dark_mode;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let dark = RwSignal::new(dark_mode::init());

    let authenticated = move || session.get().is_authenticated();

    // Leaving a protected page after logout is the route guard's job;
    // the button only ends the session.
    let on_logout = move |_| {
        crate::net::auth::logout(session, toasts);
    };

    let on_toggle_dark = move |_| {
        dark.set(dark_mode::toggle(dark.get_untracked()));
    };

    view! {
        <nav class="navbar">
            <a href="/" class="nav-logo">"The Solution Desk"</a>
            <div class="nav-links">
                <a href="/ideas/new">"New Idea"</a>
                <a href="/kanban">"Kanban"</a>
                <a href="/sop">"SOPs"</a>
                <a href="/kpi">"KPI"</a>
                <button class="nav-dark-toggle" on:click=on_toggle_dark title="Toggle dark mode">
                    {move || if dark.get() { "\u{2600}" } else { "\u{1f319}" }}
                </button>
                <Show
                    when=authenticated
                    fallback=|| {
                        view! {
                            <a href="/login">"Login"</a>
                            <a href="/register">"Register"</a>
                        }
                    }
                >
                    <NotificationBell/>
                    <button class="nav-logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
