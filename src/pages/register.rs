//! Registration page. A successful sign-up authenticates immediately.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::state::toasts::ToastsState;
use crate::util::validate;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let confirm_value = confirm.get_untracked();

        email_error.set(validate::email_error(&email_value).map(str::to_owned));
        password_error.set(validate::new_password_error(&password_value).map(str::to_owned));
        confirm_error
            .set(validate::confirm_password_error(&password_value, &confirm_value).map(str::to_owned));
        if email_error.get_untracked().is_some()
            || password_error.get_untracked().is_some()
            || confirm_error.get_untracked().is_some()
        {
            return;
        }

        submitting.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::auth::register(
                    session,
                    toasts,
                    &email_value,
                    &password_value,
                    &confirm_value,
                )
                .await;
                submitting.set(false);
                match result {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(message) => {
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
                    <h2 class="auth-title">"Create Account"</h2>
                    <p class="auth-subtitle">"Sign up to get started"</p>

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

                    <div class="form-group">
                        <input
                            class="form-input"
                            type="password"
                            placeholder="Confirm Password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                            disabled=disabled
                        />
                        {move || {
                            confirm_error
                                .get()
                                .map(|message| view! { <div class="error-message">{message}</div> })
                        }}
                    </div>

                    <button type="submit" class="auth-button" disabled=disabled>
                        {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
                    </button>

                    <div class="auth-links">
                        <p>
                            "Already have an account? " <a class="auth-link" href="/login">"Sign in"</a>
                        </p>
                    </div>
                </form>
            </div>
        </div>
    }
}
