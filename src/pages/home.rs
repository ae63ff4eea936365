//! Public landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let cta = move || {
        if session.get().is_authenticated() {
            view! { <a class="btn btn--primary" href="/kanban">"Open your board"</a> }.into_any()
        } else {
            view! { <a class="btn btn--primary" href="/register">"Get Started"</a> }.into_any()
        }
    };

    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1>"Welcome to The Solution Desk"</h1>
                <p class="home-tagline">
                    "Your workspace for managing projects, procedures, and workflows in one place."
                </p>
                {cta}
            </section>

            <section class="home-features">
                <div class="feature-card">
                    <span class="feature-icon">"\u{1f4a1}"</span>
                    <h3>"Idea Intake"</h3>
                    <p>"Capture improvement ideas the moment they come up."</p>
                </div>
                <div class="feature-card">
                    <span class="feature-icon">"\u{1f4cb}"</span>
                    <h3>"Kanban Board"</h3>
                    <p>"Track work across To Do, In Progress, and Done."</p>
                </div>
                <div class="feature-card">
                    <span class="feature-icon">"\u{1f4da}"</span>
                    <h3>"SOP Library"</h3>
                    <p>"Keep standard operating procedures where the team can find them."</p>
                </div>
                <div class="feature-card">
                    <span class="feature-icon">"\u{1f4c8}"</span>
                    <h3>"KPI Dashboard"</h3>
                    <p>"Watch the numbers that matter, month over month."</p>
                </div>
            </section>
        </div>
    }
}
