//! Landing page: hero search, featured private ports, call to action.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use marina::i18n::t;
use marina::{Port, SearchFilters};

use crate::actions;
use crate::components::port_card::PortCard;
use crate::state::ports::PortsState;
use crate::state::ui::UiState;

const FEATURED_COUNT: usize = 3;

/// Raw hero search inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeroSearch {
    pub location: String,
    pub check_in: String,
    pub check_out: String,
    pub boat_length: String,
}

impl HeroSearch {
    /// Filters for the ports list. Blank fields stay unset; the current
    /// price, rating, and amenity choices carry over.
    pub fn to_filters(&self, base: &SearchFilters) -> SearchFilters {
        let text = |s: &str| Some(s.trim().to_owned()).filter(|s| !s.is_empty());
        SearchFilters {
            location: text(&self.location),
            check_in: text(&self.check_in),
            check_out: text(&self.check_out),
            boat_length: self.boat_length.trim().parse::<f64>().ok().filter(|v| *v > 0.0),
            ..base.clone()
        }
    }
}

/// Private ports to feature, best rated first.
pub fn featured(ports: &[Port], count: usize) -> Vec<Port> {
    let mut private: Vec<Port> = ports.iter().filter(|p| p.is_private()).cloned().collect();
    private.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    private.truncate(count);
    private
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ports = expect_context::<RwSignal<PortsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let tr = move |key: &'static str| t(ui.get().language, key);
    let search = RwSignal::new(HeroSearch::default());
    let navigate = use_navigate();

    Effect::new(move || actions::ensure_ports(ports));

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let filters = search.with_untracked(|s| s.to_filters(&ports.get_untracked().search_filters));
        ports.update(|s| s.set_search_filters(filters));
        navigate("/ports", leptos_router::NavigateOptions::default());
    };

    let field = move |label: &'static str, kind: &'static str, get: fn(&HeroSearch) -> String, set: fn(&mut HeroSearch, String)| {
        view! {
            <label class="hero-search__field">
                <span>{move || tr(label)}</span>
                <input
                    type=kind
                    prop:value=move || search.with(get)
                    on:input=move |ev| search.update(|s| set(s, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">{move || tr("home.title")}</h1>
                <p class="hero__subtitle">{move || tr("home.subtitle")}</p>
                <form class="hero-search" on:submit=on_search>
                    <label class="hero-search__field hero-search__field--wide">
                        <span>{move || tr("common.search")}</span>
                        <input
                            type="text"
                            placeholder=move || tr("home.searchPlaceholder")
                            prop:value=move || search.with(|s| s.location.clone())
                            on:input=move |ev| search.update(|s| s.location = event_target_value(&ev))
                        />
                    </label>
                    {field("home.checkIn", "date", |s| s.check_in.clone(), |s, v| s.check_in = v)}
                    {field("home.checkOut", "date", |s| s.check_out.clone(), |s, v| s.check_out = v)}
                    {field("home.boatLength", "number", |s| s.boat_length.clone(), |s, v| s.boat_length = v)}
                    <button class="btn btn--primary" type="submit">{move || tr("common.search")}</button>
                </form>
            </section>

            <section class="featured">
                <h2>{move || tr("home.featuredPrivate")}</h2>
                <Show
                    when=move || !ports.with(|s| s.loading)
                    fallback=move || view! { <p class="loading">{move || tr("common.loading")}</p> }
                >
                    <div class="port-grid">
                        <For
                            each=move || ports.with(|s| featured(&s.ports, FEATURED_COUNT))
                            key=|port| port.id.clone()
                            children=move |port| view! { <PortCard port=port/> }
                        />
                    </div>
                </Show>
            </section>

            <section class="cta">
                <h2>{move || tr("home.cta")}</h2>
                <a class="btn btn--primary" href="/ports">{move || tr("navigation.ports")}</a>
            </section>
        </div>
    }
}
