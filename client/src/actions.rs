//! Async actions binding REST calls to state slices.
//!
//! DESIGN
//! ======
//! Each action runs the slice's `*_pending` reducer synchronously, spawns the
//! request, and finishes with `*_fulfilled` or `*_rejected`. Pages call these
//! from event handlers and effects, which only run in the browser; SSR builds
//! keep the synchronous half so signatures match across features.
//!
//! ERROR HANDLING
//! ==============
//! Failures land in the slice's `error` field. Writes that the user started
//! (booking, cancel, sign-in) also raise a notification.

use leptos::prelude::*;
use marina::{PreferencesUpdate, ReservationDraft};

use crate::state::auth::AuthState;
use crate::state::ports::PortsState;
use crate::state::reservations::ReservationsState;
use crate::state::ui::{LoadingKey, NotificationKind, UiState, now_ms};

/// Queue a notification; the notifications component dismisses it later.
pub fn notify(ui: RwSignal<UiState>, kind: NotificationKind, message: impl Into<String>) {
    let message = message.into();
    ui.update(|u| {
        u.add_notification(kind, message, now_ms());
    });
}

/// Load the port catalog unless it is already loaded or loading.
pub fn ensure_ports(ports: RwSignal<PortsState>) {
    let state = ports.get_untracked();
    if state.loading || !state.ports.is_empty() {
        return;
    }
    load_ports(ports);
}

pub fn load_ports(ports: RwSignal<PortsState>) {
    ports.update(PortsState::fetch_pending);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_ports().await {
            Ok(list) => {
                log::debug!("loaded {} ports", list.len());
                ports.update(|s| s.fetch_fulfilled(list));
            }
            Err(e) => {
                log::warn!("fetch ports failed: {e}");
                ports.update(|s| s.fetch_rejected(Some(e)));
            }
        }
    });
}

/// Resolve a port missing from the loaded catalog and select it.
pub fn load_port(ports: RwSignal<PortsState>, port_id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_port(&port_id).await {
            Ok(port) => ports.update(|s| s.set_selected_port(Some(port))),
            Err(e) => {
                log::warn!("fetch port {port_id} failed: {e}");
                ports.update(|s| s.error = Some(e));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ports, port_id);
    }
}

pub fn load_reservations(reservations: RwSignal<ReservationsState>, user_id: String) {
    reservations.update(ReservationsState::fetch_pending);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_user_reservations(&user_id).await {
            Ok(list) => reservations.update(|s| s.fetch_fulfilled(list)),
            Err(e) => {
                log::warn!("fetch reservations failed: {e}");
                reservations.update(|s| s.fetch_rejected(Some(e)));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
    }
}

/// Submit a booking. `on_done` runs with the new reservation id on success.
pub fn create_reservation(
    reservations: RwSignal<ReservationsState>,
    ui: RwSignal<UiState>,
    draft: ReservationDraft,
    on_done: Callback<String>,
) {
    reservations.update(ReservationsState::create_pending);
    ui.update(|u| u.set_loading(LoadingKey::Booking, true));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::create_reservation(&draft).await;
        ui.update(|u| u.set_loading(LoadingKey::Booking, false));
        match result {
            Ok(reservation) => {
                reservations.update(|s| s.create_fulfilled(reservation));
                let id = reservations
                    .get_untracked()
                    .current_reservation
                    .map(|r| r.id)
                    .unwrap_or_default();
                notify(ui, NotificationKind::Success, "Reservation created successfully!");
                on_done.run(id);
            }
            Err(e) => {
                log::warn!("create reservation failed: {e}");
                reservations.update(|s| s.create_rejected(Some(e.clone())));
                notify(ui, NotificationKind::Error, format!("Failed to create reservation: {e}"));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (draft, on_done);
    }
}

pub fn cancel_reservation(reservations: RwSignal<ReservationsState>, ui: RwSignal<UiState>, reservation_id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::cancel_reservation(&reservation_id).await {
            Ok(id) => {
                reservations.update(|s| s.cancel_fulfilled(&id));
                notify(ui, NotificationKind::Success, "Reservation cancelled successfully");
            }
            Err(e) => {
                log::warn!("cancel {reservation_id} failed: {e}");
                notify(ui, NotificationKind::Error, "Failed to cancel reservation");
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (reservations, ui, reservation_id);
    }
}

pub fn sign_in(auth: RwSignal<AuthState>, ui: RwSignal<UiState>, email: String, password: String, on_done: Callback<()>) {
    auth.update(AuthState::request_pending);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::sign_in(&email, &password).await {
            Ok(user) => {
                let name = user.name.clone();
                auth.update(|a| a.request_fulfilled(user));
                notify(ui, NotificationKind::Success, format!("Welcome back, {name}!"));
                on_done.run(());
            }
            Err(e) => auth.update(|a| a.sign_in_rejected(Some(e))),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ui, email, password, on_done);
    }
}

pub fn sign_up(
    auth: RwSignal<AuthState>,
    ui: RwSignal<UiState>,
    form: marina::validate::SignUpForm,
    on_done: Callback<()>,
) {
    auth.update(AuthState::request_pending);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::sign_up(&form.name, &form.email, &form.password, &form.confirm_password).await {
            Ok(user) => {
                auth.update(|a| a.request_fulfilled(user));
                notify(ui, NotificationKind::Success, "Account created successfully!");
                on_done.run(());
            }
            Err(e) => auth.update(|a| a.sign_up_rejected(Some(e))),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ui, form, on_done);
    }
}

/// Sign out and drop any reservations loaded for the previous user.
pub fn sign_out(auth: RwSignal<AuthState>, reservations: RwSignal<ReservationsState>, ui: RwSignal<UiState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::sign_out().await {
            log::warn!("sign out failed: {e}");
            return;
        }
        auth.update(AuthState::sign_out_fulfilled);
        reservations.update(ReservationsState::clear_reservations);
        notify(ui, NotificationKind::Info, "You have been signed out");
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, reservations, ui);
    }
}

/// Change the UI language and remember it on the signed-in user.
pub fn set_language(auth: RwSignal<AuthState>, ui: RwSignal<UiState>, language: marina::Language) {
    ui.update(|u| u.set_language(language));
    auth.update(|a| a.update_user_preferences(PreferencesUpdate { language: Some(language), currency: None }));
    crate::util::document::apply_language(language);
}

/// Change the display currency and remember it on the signed-in user.
pub fn set_currency(auth: RwSignal<AuthState>, ui: RwSignal<UiState>, currency: String) {
    ui.update(|u| u.set_currency(currency.clone()));
    auth.update(|a| a.update_user_preferences(PreferencesUpdate { language: None, currency: Some(currency) }));
}
