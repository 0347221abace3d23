//! Reservation history for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is fetched whenever the signed-in user changes. Cancelling marks
//! the reservation in the slice; the mock API keeps no record of it, so a
//! reload brings back the original history.

#[cfg(test)]
#[path = "reservations_test.rs"]
mod reservations_test;

use leptos::prelude::*;
use marina::format::{format_date, format_price};
use marina::i18n::t;
use marina::mock::port_summary;
use marina::pricing::nights;
use marina::{Reservation, ReservationStatus};

use crate::actions;
use crate::state::auth::AuthState;
use crate::state::reservations::ReservationsState;
use crate::state::ui::UiState;

pub const STATUS_CHOICES: [ReservationStatus; 4] = [
    ReservationStatus::Pending,
    ReservationStatus::Confirmed,
    ReservationStatus::Cancelled,
    ReservationStatus::Completed,
];

/// Reservations with `status`, or all of them.
pub fn with_status(list: &[Reservation], status: Option<ReservationStatus>) -> Vec<Reservation> {
    list.iter().filter(|r| status.is_none_or(|s| r.status == s)).cloned().collect()
}

pub fn status_label(status: ReservationStatus) -> String {
    let raw = status.as_str();
    let mut chars = raw.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

#[component]
pub fn ReservationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let reservations = expect_context::<RwSignal<ReservationsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let tr = move |key: &'static str| t(ui.get().language, key);
    let status_filter = RwSignal::new(None::<ReservationStatus>);

    let user_id = Memo::new(move |_| auth.with(|a| a.user_id().map(str::to_owned)));
    Effect::new(move || {
        if let Some(id) = user_id.get() {
            actions::load_reservations(reservations, id);
        }
    });

    let shown = Memo::new(move |_| {
        let status = status_filter.get();
        reservations.with(|s| with_status(&s.reservations, status))
    });

    let on_status = move |ev| {
        let raw = event_target_value(&ev);
        status_filter.set(STATUS_CHOICES.into_iter().find(|s| s.as_str() == raw));
    };

    view! {
        <div class="reservations-page">
            <Show
                when=move || auth.with(|a| a.is_authenticated)
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <h2>"Sign In Required"</h2>
                            <p>"Please sign in to view your reservations."</p>
                            <a class="btn btn--primary" href="/auth/signin">{move || tr("navigation.signIn")}</a>
                        </div>
                    }
                }
            >
                <header class="reservations-page__header">
                    <h1>{move || tr("reservations.title")}</h1>
                    <p>{move || format!("{} reservations", reservations.with(|s| s.reservations.len()))}</p>
                    <select aria-label="Status" on:change=on_status>
                        <option value="">"All statuses"</option>
                        {STATUS_CHOICES
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <option value=s.as_str()>
                                        {move || format!("{} ({})", status_label(s), reservations.with(|r| r.count_with_status(s)))}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <a class="btn btn--primary" href="/ports">"New reservation"</a>
                </header>

                <Show when=move || reservations.with(|s| s.error.is_some())>
                    <p class="error-banner">{move || reservations.get().error.unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || !reservations.with(|s| s.loading)
                    fallback=move || view! { <p class="loading">{move || tr("common.loading")}</p> }
                >
                    <Show
                        when=move || !shown.with(Vec::is_empty)
                        fallback=move || view! { <p class="empty-state">{move || tr("reservations.empty")}</p> }
                    >
                        <div class="reservation-list">
                            <For
                                each=move || shown.get()
                                key=|r| (r.id.clone(), r.status)
                                children=move |r| view! { <ReservationCard reservation=r/> }
                            />
                        </div>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn ReservationCard(reservation: Reservation) -> impl IntoView {
    let reservations = expect_context::<RwSignal<ReservationsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let tr = move |key: &'static str| t(ui.get().language, key);
    let confirming = RwSignal::new(false);

    let summary = port_summary(&reservation.port_id);
    let (port_name, port_location, image) = summary
        .map(|s| (s.name, s.location, s.image))
        .unwrap_or_else(|| (format!("Port {}", reservation.port_id), String::new(), String::new()));
    let stay = nights(&reservation.check_in, &reservation.check_out);
    let total = reservation.total_price;
    let status = reservation.status;
    let id = reservation.id.clone();
    let boat = &reservation.boat_details;

    let on_cancel = move |_| {
        if !confirming.get_untracked() {
            confirming.set(true);
            return;
        }
        confirming.set(false);
        actions::cancel_reservation(reservations, ui, id.clone());
    };

    view! {
        <article class="reservation-card">
            <img class="reservation-card__image" src=image alt=port_name.clone() loading="lazy"/>
            <div class="reservation-card__body">
                <div class="reservation-card__title-row">
                    <h3>{port_name}</h3>
                    <span class=format!("status-badge status-badge--{}", status.as_str())>{status_label(status)}</span>
                </div>
                <p class="reservation-card__location">{port_location}</p>
                <p class="reservation-card__dates">
                    {format!(
                        "{} → {} · {} {}",
                        format_date(&reservation.check_in),
                        format_date(&reservation.check_out),
                        stay,
                        if stay == 1 { "night" } else { "nights" },
                    )}
                </p>
                <p class="reservation-card__boat">
                    {format!("{} • {} • {}ft · {} guests", boat.name, boat.boat_type, boat.length, reservation.guest_count)}
                </p>
                <p class="reservation-card__total">
                    <strong>{move || format_price(total, &ui.get().currency)}</strong>
                    {format!(" · payment {}", reservation.payment_status.as_str())}
                </p>
                <Show when=move || status.is_cancellable()>
                    <button class="btn btn--danger" on:click=on_cancel.clone()>
                        {move || if confirming.get() { "Click again to confirm" } else { tr("reservations.cancel") }}
                    </button>
                </Show>
            </div>
        </article>
    }
}
