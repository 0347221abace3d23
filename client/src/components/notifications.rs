//! Toast stack for `UiState::notifications`.
//!
//! Each notification gets one dismissal timer when it first appears; the
//! close button removes it early.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn Notifications() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let scheduled = StoredValue::new(HashSet::<String>::new());

    Effect::new(move || {
        let ids: Vec<String> = ui.with(|u| u.notifications.iter().map(|n| n.id.clone()).collect());
        scheduled.update_value(|set| set.retain(|id| ids.contains(id)));
        for id in ids {
            if scheduled.with_value(|set| set.contains(&id)) {
                continue;
            }
            scheduled.update_value(|set| {
                set.insert(id.clone());
            });
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(crate::state::ui::NOTIFICATION_TTL).await;
                ui.update(|u| u.remove_notification(&id));
            });
        }
    });

    view! {
        <div class="notifications" aria-live="polite">
            <For
                each=move || ui.get().notifications
                key=|n| n.id.clone()
                children=move |n| {
                    let id = n.id.clone();
                    view! {
                        <div class=format!("notification notification--{}", n.kind.as_str())>
                            <span class="notification__icon" aria-hidden="true">{n.kind.icon()}</span>
                            <p class="notification__message">{n.message}</p>
                            <button
                                class="notification__close"
                                aria-label="Dismiss"
                                on:click=move |_| ui.update(|u| u.remove_notification(&id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
