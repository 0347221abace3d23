//! Card for one port in lists and the featured section.

use leptos::prelude::*;
use marina::Port;
use marina::format::{format_price, format_rating};
use marina::i18n::t;

use crate::state::ui::UiState;

/// Number of amenities shown before collapsing into "+N more".
const AMENITY_PREVIEW: usize = 3;

#[component]
pub fn PortCard(port: Port, #[prop(optional)] compact: bool) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let tr = move |key: &'static str| t(ui.get().language, key);

    let detail_href = format!("/ports/{}", port.id);
    let book_href = format!("/booking/{}", port.id);
    let image = port.cover_image().unwrap_or_default().to_owned();
    let price = port.price_per_night;
    let is_private = port.is_private();
    let instant = port.is_instant_book.unwrap_or(false);
    let location = format!("{}, {}", port.location.city, port.location.country);
    let hidden_amenities = port.amenities.len().saturating_sub(AMENITY_PREVIEW);
    let amenities: Vec<String> = port.amenities.iter().take(AMENITY_PREVIEW).cloned().collect();
    let review_count = port.reviews.len();

    view! {
        <article class="port-card" class:port-card--compact=compact>
            <a class="port-card__image" href=detail_href.clone()>
                <img src=image alt=port.name.clone() loading="lazy"/>
                <Show when=move || is_private>
                    <span class="port-card__badge">"Private"</span>
                </Show>
                <Show when=move || instant>
                    <span class="port-card__badge port-card__badge--instant">{move || tr("ports.instantBook")}</span>
                </Show>
            </a>
            <div class="port-card__body">
                <div class="port-card__title-row">
                    <a class="port-card__name" href=detail_href.clone()>{port.name.clone()}</a>
                    <span class="port-card__rating">
                        "★ " {format_rating(port.rating)}
                        <span class="port-card__reviews">{format!(" ({review_count})")}</span>
                    </span>
                </div>
                <p class="port-card__location">{location}</p>
                <p class="port-card__spaces">
                    {format!("{} of {} spaces available", port.available_spaces, port.capacity)}
                </p>
                <ul class="port-card__amenities">
                    {amenities.into_iter().map(|a| view! { <li>{a}</li> }).collect_view()}
                    <Show when=move || { hidden_amenities > 0 }>
                        <li class="port-card__more">{format!("+{hidden_amenities} more")}</li>
                    </Show>
                </ul>
                <div class="port-card__footer">
                    <span class="port-card__price">
                        <strong>{move || format_price(price, &ui.get().currency)}</strong>
                        " " {move || tr("ports.pricePerNight")}
                    </span>
                    <a class="btn btn--primary" href=book_href>{move || tr("ports.bookNow")}</a>
                </div>
            </div>
        </article>
    }
}
