//! Port detail: gallery, amenities, specifications, reviews, and host.
//!
//! The port comes from the loaded catalog when available. A deep link
//! before the catalog loads asks the API for just that port and stores it
//! as the selected port.

#[cfg(test)]
#[path = "port_detail_test.rs"]
mod port_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use marina::format::{format_date, format_price, format_rating};
use marina::i18n::t;
use marina::{Port, Specifications};

use crate::actions;
use crate::state::ports::PortsState;
use crate::state::ui::UiState;

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_owned()
}

/// Label/value rows for the specifications table.
pub fn spec_rows(specs: &Specifications) -> Vec<(&'static str, String)> {
    vec![
        ("Max boat length", format!("{} ft", specs.max_boat_length)),
        ("Depth", format!("{} ft", specs.depth)),
        ("Electricity", yes_no(specs.electricity)),
        ("Water", yes_no(specs.water)),
        ("WiFi", yes_no(specs.wifi)),
        ("Fuel", yes_no(specs.fuel)),
        ("Security", yes_no(specs.security)),
    ]
}

/// Resolve `port_id` against the catalog first, then the selected port.
pub fn resolve(state: &PortsState, port_id: &str) -> Option<Port> {
    state
        .find(port_id)
        .or_else(|| state.selected_port.as_ref().filter(|p| p.id == port_id))
        .cloned()
}

#[component]
pub fn PortDetailPage() -> impl IntoView {
    let ports = expect_context::<RwSignal<PortsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let tr = move |key: &'static str| t(ui.get().language, key);
    let params = use_params_map();
    let port_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let port = Memo::new(move |_| {
        let id = port_id();
        ports.with(|s| resolve(s, &id))
    });

    Effect::new(move || {
        let id = port_id();
        if id.is_empty() || port.get().is_some() {
            return;
        }
        actions::load_port(ports, id);
    });

    view! {
        <div class="port-detail">
            <Show
                when=move || port.with(Option::is_some)
                fallback=move || {
                    view! {
                        <p class="loading">
                            {move || ports.get().error.unwrap_or_else(|| tr("common.loading").to_owned())}
                        </p>
                    }
                }
            >
                {move || port.get().map(|port| view! { <PortDetailBody port=port/> })}
            </Show>
        </div>
    }
}

#[component]
fn PortDetailBody(port: Port) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let tr = move |key: &'static str| t(ui.get().language, key);
    let active_image = RwSignal::new(0_usize);

    let images = port.images.clone();
    let thumbs = port.images.clone();
    let price = port.price_per_night;
    let book_href = format!("/booking/{}", port.id);
    let owner = port.owner.clone().filter(|_| port.is_private());
    let website = port.contact.website.clone();

    view! {
        <a class="port-detail__back" href="/ports">{move || tr("common.back")}</a>
        <header class="port-detail__header">
            <h1>{port.name.clone()}</h1>
            <p class="port-detail__location">
                {format!("{}, {} · {}", port.location.city, port.location.country, port.location.address)}
            </p>
            <p class="port-detail__rating">
                {format!("★ {} ({} reviews)", format_rating(port.rating), port.reviews.len())}
            </p>
        </header>

        <section class="gallery">
            <img
                class="gallery__main"
                src=move || images.get(active_image.get()).cloned().unwrap_or_default()
                alt=port.name.clone()
            />
            <div class="gallery__thumbs">
                {thumbs
                    .into_iter()
                    .enumerate()
                    .map(|(i, src)| {
                        view! {
                            <button
                                class="gallery__thumb"
                                class:active=move || active_image.get() == i
                                on:click=move |_| active_image.set(i)
                            >
                                <img src=src alt="" loading="lazy"/>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <div class="port-detail__layout">
            <div class="port-detail__main">
                <p class="port-detail__description">{port.description.clone()}</p>

                <section>
                    <h2>{move || tr("ports.amenities")}</h2>
                    <ul class="amenity-list">
                        {port.amenities.iter().map(|a| view! { <li>{a.clone()}</li> }).collect_view()}
                    </ul>
                </section>

                <section>
                    <h2>{move || tr("ports.specifications")}</h2>
                    <dl class="spec-table">
                        {spec_rows(&port.specifications)
                            .into_iter()
                            .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                            .collect_view()}
                    </dl>
                </section>

                <section>
                    <h2>{move || tr("ports.reviews")}</h2>
                    {port
                        .reviews
                        .iter()
                        .map(|review| {
                            view! {
                                <article class="review">
                                    <div class="review__header">
                                        {review.user_avatar.clone().map(|src| view! { <img class="review__avatar" src=src alt=""/> })}
                                        <strong>{review.user_name.clone()}</strong>
                                        <span class="review__rating">{format!("★ {}", format_rating(review.rating))}</span>
                                        <span class="review__date">{format_date(&review.created_at)}</span>
                                    </div>
                                    <p>{review.comment.clone()}</p>
                                    <p class="review__helpful">{format!("{} found this helpful", review.helpful)}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </section>
            </div>

            <aside class="booking-card">
                <p class="booking-card__price">
                    <strong>{move || format_price(price, &ui.get().currency)}</strong>
                    " " {move || tr("ports.pricePerNight")}
                </p>
                <p>{format!("{} of {} spaces available", port.available_spaces, port.capacity)}</p>
                <a class="btn btn--primary btn--block" href=book_href>{move || tr("ports.bookNow")}</a>

                {owner.map(|owner| {
                    view! {
                        <div class="booking-card__owner">
                            <h3>{move || tr("ports.owner")}</h3>
                            <p>{owner.name}</p>
                            <p><a href=format!("mailto:{}", owner.email)>{owner.email.clone()}</a></p>
                            <p>{owner.phone}</p>
                        </div>
                    }
                })}

                <div class="booking-card__contact">
                    <h3>{move || tr("ports.contact")}</h3>
                    <p>{port.contact.phone.clone()}</p>
                    <p>{port.contact.email.clone()}</p>
                    {website
                        .map(|url| {
                            let text = url.clone();
                            view! { <p><a href=url target="_blank" rel="noopener">{text}</a></p> }
                        })}
                </div>
            </aside>
        </div>
    }
}
