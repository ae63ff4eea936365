//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::toast_tray::ToastTray;
use crate::pages::comments::CommentsPage;
use crate::pages::home::HomePage;
use crate::pages::ideas::IdeaPage;
use crate::pages::kanban::KanbanPage;
use crate::pages::kpi::KpiPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::sops::SopPage;
use crate::state::notifications::NotificationsState;
use crate::state::session::SessionState;
use crate::state::toasts::ToastsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, installs the forced-logout hook,
/// kicks off the one-shot session restore, and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastsState::default());
    let notifications = RwSignal::new(NotificationsState::default());

    provide_context(session);
    provide_context(toasts);
    provide_context(notifications);

    // Any authenticated request answered 401 forces the session out.
    crate::net::auth::install_session_expiry_handler(session, toasts);

    // One-shot restore of a persisted session, then an opportunistic
    // token refresh so a restored credential doesn't ride out its
    // remaining lifetime.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            crate::net::auth::initialize(session).await;
            if session.get_untracked().is_authenticated() {
                crate::net::auth::refresh_token(session, toasts).await;
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/solution-desk.css"/>
        <Title text="The Solution Desk"/>

        <Router>
            <NavBar/>
            <ToastTray/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=(StaticSegment("ideas"), StaticSegment("new"))
                        view=IdeaPage
                    />
                    <Route path=StaticSegment("kanban") view=KanbanPage/>
                    <Route path=StaticSegment("sop") view=SopPage/>
                    <Route path=StaticSegment("kpi") view=KpiPage/>
                    <Route
                        path=(
                            StaticSegment("entities"),
                            ParamSegment("id"),
                            StaticSegment("comments"),
                        )
                        view=CommentsPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
