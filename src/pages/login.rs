//! Login page: email/password form with inline validation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::state::toasts::ToastsState;
use crate::util::validate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        // Validation failures stay client-side; nothing is sent.
        email_error.set(validate::email_error(&email_value).map(str::to_owned));
        password_error.set(validate::password_error(&password_value).map(str::to_owned));
        if email_error.get_untracked().is_some() || password_error.get_untracked().is_some() {
            return;
        }

        submitting.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result =
                    crate::net::auth::login(session, toasts, &email_value, &password_value).await;
                submitting.set(false);
                match result {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(message) => {
                        // Attribute the server's message to the field it
                        // names, the way the server words its rejections.
                        let lowered = message.to_lowercase();
                        if lowered.contains("email") {
                            email_error.set(Some(message));
                        } else if lowered.contains("password") {
                            password_error.set(Some(message));
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, toasts);
            submitting.set(false);
        }
    };

    let disabled = move || submitting.get() || session.get().loading;

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <form class="auth-form" on:submit=on_submit>
                    <h2 class="auth-title">"Welcome Back"</h2>
                    <p class="auth-subtitle">"Sign in to your account"</p>

                    <div class="form-group">
                        <input
                            class="form-input"
                            type="email"
                            placeholder="Email address"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            disabled=disabled
                        />
                        {move || {
                            email_error
                                .get()
                                .map(|message| view! { <div class="error-message">{message}</div> })
                        }}
                    </div>

                    <div class="form-group">
                        <input
                            class="form-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=disabled
                        />
                        {move || {
                            password_error
                                .get()
                                .map(|message| view! { <div class="error-message">{message}</div> })
                        }}
                    </div>

                    <button type="submit" class="auth-button" disabled=disabled>
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </button>

                    <div class="auth-links">
                        <p>
                            "Don't have an account? " <a class="auth-link" href="/register">"Sign up"</a>
                        </p>
                    </div>
                </form>
            </div>
        </div>
    }
}
