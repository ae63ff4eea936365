//! Notification bell with unread badge and dropdown list.
//!
//! The unread count is fetched once on mount; the list only when the
//! dropdown first opens. Clicking an unread item marks it read on the
//! server and decrements the badge locally.

use leptos::prelude::*;

use crate::state::notifications::NotificationsState;

#[component]
pub fn NotificationBell() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    // Badge count, fetched once per mount.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_unread_count().await {
                Ok(count) => notifications.update(|n| n.unread_count = count),
                Err(err) => {
                    leptos::logging::warn!("failed to fetch notification count: {err}");
                    notifications.update(|n| n.set_error("Could not load notifications"));
                }
            }
        });
    }

    let on_toggle = move |_| {
        let opening = !notifications.get_untracked().open;
        notifications.update(|n| n.open = opening);
        if opening && !notifications.get_untracked().loaded {
            notifications.update(|n| n.loading = true);
            #[cfg(feature = "hydrate")]
            {
                leptos::task::spawn_local(async move {
                    match crate::net::api::fetch_notifications().await {
                        Ok(items) => notifications.update(|n| n.set_items(items)),
                        Err(err) => {
                            leptos::logging::warn!("failed to fetch notifications: {err}");
                            notifications.update(|n| n.set_error("Could not load notifications"));
                        }
                    }
                });
            }
        }
    };

    let mark_read = move |id: i64| {
        let mut changed = false;
        notifications.update(|n| changed = n.mark_read(id));
        if changed {
            #[cfg(feature = "hydrate")]
            {
                leptos::task::spawn_local(async move {
                    if let Err(err) = crate::net::api::mark_notification_read(id).await {
                        leptos::logging::warn!("failed to mark notification read: {err}");
                    }
                });
            }
        }
    };

    let badge = move || {
        let count = notifications.get().unread_count;
        (count > 0).then(|| view! { <span class="badge">{count}</span> })
    };

    view! {
        <div class="notification-bell-container">
            <button class="notification-bell" on:click=on_toggle>
                <span class="bell-icon">"\u{1f514}"</span>
                {badge}
            </button>

            <Show when=move || notifications.get().open>
                <div class="notifications-dropdown">
                    <h3 class="notifications-title">"Notifications"</h3>
                    {move || {
                        let state = notifications.get();
                        if state.loading {
                            view! { <div class="notifications-loading">"Loading..."</div> }
                                .into_any()
                        } else if let Some(error) = state.error {
                            view! { <div class="notifications-error">{error}</div> }.into_any()
                        } else if state.items.is_empty() {
                            view! { <div class="no-notifications">"No new notifications"</div> }
                                .into_any()
                        } else {
                            view! {
                                <ul class="notifications-list">
                                    {state
                                        .items
                                        .into_iter()
                                        .map(|item| {
                                            let id = item.id;
                                            let read = item.read;
                                            let class = if read {
                                                "notification-item read"
                                            } else {
                                                "notification-item unread"
                                            };
                                            view! {
                                                <li
                                                    class=class
                                                    on:click=move |_| {
                                                        if !read {
                                                            mark_read(id);
                                                        }
                                                    }
                                                >
                                                    <span class="notification-text">{item.message}</span>
                                                    {item
                                                        .timestamp
                                                        .map(|ts| {
                                                            view! { <span class="notification-time">{ts}</span> }
                                                        })}
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                            .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
