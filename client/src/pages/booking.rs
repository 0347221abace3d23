//! Three-step booking wizard.
//!
//! DESIGN
//! ======
//! Step 1 collects dates and guests, step 2 the boat, step 3 guest contact
//! and the price breakdown. The wizard holds a `BookingForm` of raw input
//! strings; `BookingForm::to_draft` turns it into a `ReservationDraft`
//! priced with `marina::pricing::quote_stay`, and
//! `marina::validate::check_booking` gates submission.
//!
//! Signed-out visitors are sent to sign-in. An id missing from the loaded
//! catalog sends the visitor back to the ports list.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use marina::format::format_price;
use marina::i18n::t;
use marina::pricing::{Quote, quote_stay};
use marina::validate::{BookingError, check_booking};
use marina::{BoatDetails, PaymentStatus, Port, ReservationDraft, ReservationStatus, User};

use crate::actions;
use crate::state::auth::AuthState;
use crate::state::ports::PortsState;
use crate::state::reservations::ReservationsState;
use crate::state::ui::UiState;
use crate::util::document::scroll_to_top;

pub const BOAT_TYPES: [&str; 5] = ["Sailboat", "Motor Yacht", "Catamaran", "Fishing Boat", "Other"];
pub const MAX_GUESTS: u32 = 8;
pub const LAST_STEP: u8 = 3;

/// Berth assignment is not modelled; every booking takes the first space.
const DEFAULT_SPACE_ID: &str = "1";

#[derive(Clone, Debug, PartialEq)]
pub struct BookingForm {
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    pub boat_name: String,
    pub boat_type: String,
    pub boat_length: String,
    pub boat_width: String,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            check_in: String::new(),
            check_out: String::new(),
            guests: 1,
            boat_name: String::new(),
            boat_type: BOAT_TYPES[0].to_owned(),
            boat_length: String::new(),
            boat_width: String::new(),
            guest_name: String::new(),
            guest_email: String::new(),
            guest_phone: String::new(),
        }
    }
}

impl BookingForm {
    /// Prefill guest contact from the signed-in user.
    pub fn for_user(user: Option<&User>) -> Self {
        let mut form = Self::default();
        if let Some(user) = user {
            form.guest_name.clone_from(&user.name);
            form.guest_email.clone_from(&user.email);
            form.guest_phone = user.phone.clone().unwrap_or_default();
        }
        form
    }

    pub fn quote(&self, price_per_night: f64) -> Quote {
        quote_stay(price_per_night, &self.check_in, &self.check_out)
    }

    /// Unparsable boat dimensions are stored as zero.
    pub fn to_draft(&self, user_id: &str, port: &Port) -> ReservationDraft {
        let dimension = |raw: &str| raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0);
        ReservationDraft {
            user_id: user_id.to_owned(),
            port_id: port.id.clone(),
            space_id: DEFAULT_SPACE_ID.to_owned(),
            check_in: self.check_in.clone(),
            check_out: self.check_out.clone(),
            total_price: self.quote(port.price_per_night).total,
            status: ReservationStatus::Pending,
            guest_count: self.guests,
            boat_details: BoatDetails {
                name: self.boat_name.trim().to_owned(),
                length: dimension(&self.boat_length),
                width: dimension(&self.boat_width),
                boat_type: self.boat_type.clone(),
            },
            payment_status: PaymentStatus::Pending,
        }
    }
}

/// Whether `step` has enough input to move on.
pub fn step_complete(form: &BookingForm, step: u8) -> bool {
    match step {
        1 => !form.check_in.is_empty() && !form.check_out.is_empty() && form.guests >= 1,
        2 => !form.boat_name.trim().is_empty(),
        _ => true,
    }
}

#[component]
pub fn BookingPage() -> impl IntoView {
    let ports = expect_context::<RwSignal<PortsState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let reservations = expect_context::<RwSignal<ReservationsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let tr = move |key: &'static str| t(ui.get().language, key);
    let params = use_params_map();
    let navigate = use_navigate();

    let port = Memo::new(move |_| {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        ports.with(|s| s.find(&id).cloned())
    });
    let form = RwSignal::new(BookingForm::for_user(auth.get_untracked().user.as_ref()));
    let step = RwSignal::new(1_u8);
    let error = RwSignal::new(None::<BookingError>);

    Effect::new(move || actions::ensure_ports(ports));

    let redirect = navigate.clone();
    Effect::new(move || {
        if !auth.with(|a| a.is_authenticated) {
            redirect("/auth/signin", NavigateOptions::default());
            return;
        }
        let catalog_ready = ports.with(|s| !s.loading && !s.ports.is_empty());
        if catalog_ready && port.with(Option::is_none) {
            redirect("/ports", NavigateOptions::default());
        }
    });

    let quote = Memo::new(move |_| {
        let price = port.with(|p| p.as_ref().map_or(0.0, |p| p.price_per_night));
        form.with(|f| f.quote(price))
    });

    let on_done = Callback::new(move |_id: String| navigate("/reservations", NavigateOptions::default()));
    let on_confirm = move |_| {
        let (Some(port), Some(user_id)) = (port.get_untracked(), auth.with_untracked(|a| a.user_id().map(str::to_owned)))
        else {
            return;
        };
        let draft = form.with_untracked(|f| f.to_draft(&user_id, &port));
        if let Err(e) = check_booking(&draft) {
            error.set(Some(e));
            return;
        }
        error.set(None);
        actions::create_reservation(reservations, ui, draft, on_done);
    };

    let money = move |amount: f64| format_price(amount, &ui.get().currency);

    view! {
        <div class="booking-page">
            <Show
                when=move || port.with(Option::is_some)
                fallback=move || view! { <p class="loading">{move || tr("common.loading")}</p> }
            >
                <header class="booking-page__header">
                    <h1>{move || tr("booking.title")}</h1>
                    <p>{move || port.get().map(|p| format!("{} · {}, {}", p.name, p.location.city, p.location.country))}</p>
                    <ol class="stepper">
                        {[(1_u8, "booking.dates"), (2, "booking.boat"), (3, "booking.guest")]
                            .into_iter()
                            .map(|(n, key)| {
                                view! {
                                    <li class:active=move || step.get() == n class:done={move || step.get() > n}>
                                        {move || tr(key)}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </header>

                <div class="booking-page__layout">
                    <section class="booking-page__step">
                        <Show when=move || step.get() == 1>
                            <label>
                                {move || tr("home.checkIn")}
                                <input
                                    type="date"
                                    prop:value=move || form.with(|f| f.check_in.clone())
                                    on:input=move |ev| form.update(|f| f.check_in = event_target_value(&ev))
                                />
                            </label>
                            <label>
                                {move || tr("home.checkOut")}
                                <input
                                    type="date"
                                    prop:value=move || form.with(|f| f.check_out.clone())
                                    on:input=move |ev| form.update(|f| f.check_out = event_target_value(&ev))
                                />
                            </label>
                            <label>
                                {move || tr("home.guests")}
                                <select
                                    prop:value=move || form.with(|f| f.guests.to_string())
                                    on:change=move |ev| {
                                        if let Ok(n) = event_target_value(&ev).parse() {
                                            form.update(|f| f.guests = n);
                                        }
                                    }
                                >
                                    {(1..=MAX_GUESTS)
                                        .map(|n| {
                                            let label = if n == 1 { "1 Guest".to_owned() } else { format!("{n} Guests") };
                                            view! { <option value=n.to_string()>{label}</option> }
                                        })
                                        .collect_view()}
                                </select>
                            </label>
                        </Show>

                        <Show when=move || step.get() == 2>
                            <label>
                                "Boat name"
                                <input
                                    type="text"
                                    prop:value=move || form.with(|f| f.boat_name.clone())
                                    on:input=move |ev| form.update(|f| f.boat_name = event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Boat type"
                                <select
                                    prop:value=move || form.with(|f| f.boat_type.clone())
                                    on:change=move |ev| form.update(|f| f.boat_type = event_target_value(&ev))
                                >
                                    {BOAT_TYPES.into_iter().map(|kind| view! { <option value=kind>{kind}</option> }).collect_view()}
                                </select>
                            </label>
                            <label>
                                "Length (ft)"
                                <input
                                    type="number"
                                    min="0"
                                    prop:value=move || form.with(|f| f.boat_length.clone())
                                    on:input=move |ev| form.update(|f| f.boat_length = event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Width (ft)"
                                <input
                                    type="number"
                                    min="0"
                                    prop:value=move || form.with(|f| f.boat_width.clone())
                                    on:input=move |ev| form.update(|f| f.boat_width = event_target_value(&ev))
                                />
                            </label>
                        </Show>

                        <Show when=move || step.get() == LAST_STEP>
                            <label>
                                {move || tr("auth.name")}
                                <input
                                    type="text"
                                    prop:value=move || form.with(|f| f.guest_name.clone())
                                    on:input=move |ev| form.update(|f| f.guest_name = event_target_value(&ev))
                                />
                            </label>
                            <label>
                                {move || tr("auth.email")}
                                <input
                                    type="email"
                                    prop:value=move || form.with(|f| f.guest_email.clone())
                                    on:input=move |ev| form.update(|f| f.guest_email = event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Phone"
                                <input
                                    type="tel"
                                    prop:value=move || form.with(|f| f.guest_phone.clone())
                                    on:input=move |ev| form.update(|f| f.guest_phone = event_target_value(&ev))
                                />
                            </label>
                        </Show>

                        <Show when=move || error.with(Option::is_some)>
                            <p class="form-error">{move || error.get().map(|e| e.to_string())}</p>
                        </Show>

                        <div class="booking-page__nav">
                            <Show when=move || { step.get() > 1 }>
                                <button class="btn" on:click=move |_| {
                                    step.update(|s| *s -= 1);
                                    scroll_to_top();
                                }>
                                    {move || tr("common.back")}
                                </button>
                            </Show>
                            <Show
                                when=move || { step.get() < LAST_STEP }
                                fallback=move || {
                                    view! {
                                        <button
                                            class="btn btn--primary"
                                            disabled=move || ui.get().loading.booking
                                            on:click=on_confirm
                                        >
                                            {move || {
                                                if ui.get().loading.booking { tr("common.loading") } else { tr("booking.confirm") }
                                            }}
                                        </button>
                                    }
                                }
                            >
                                <button
                                    class="btn btn--primary"
                                    disabled=move || form.with(|f| !step_complete(f, step.get()))
                                    on:click=move |_| {
                                        step.update(|s| *s += 1);
                                        scroll_to_top();
                                    }
                                >
                                    {move || tr("common.next")}
                                </button>
                            </Show>
                        </div>
                    </section>

                    <aside class="price-summary">
                        <p>{move || {
                            let q = quote.get();
                            let nightly = port.with(|p| p.as_ref().map_or(0.0, |p| p.price_per_night));
                            format!("{} × {} nights", money(nightly), q.nights)
                        }}</p>
                        <p class="price-summary__row">
                            <span>"Subtotal"</span>
                            <span>{move || money(quote.get().subtotal)}</span>
                        </p>
                        <p class="price-summary__row">
                            <span>{move || tr("booking.taxes")}</span>
                            <span>{move || money(quote.get().taxes)}</span>
                        </p>
                        <p class="price-summary__row price-summary__total">
                            <span>{move || tr("booking.total")}</span>
                            <span>{move || money(quote.get().total)}</span>
                        </p>
                    </aside>
                </div>
            </Show>
        </div>
    }
}
