//! Filters sidebar for the ports list.
//!
//! DESIGN
//! ======
//! Edits happen on a local [`FilterForm`]; "Apply" hands the parsed
//! `SearchFilters` to the ports slice, which recomputes `filtered_ports`.
//! Port type is stored with the filters but narrowed at view level.

#[cfg(test)]
#[path = "port_filters_test.rs"]
mod port_filters_test;

use leptos::prelude::*;
use marina::i18n::t;
use marina::{PortTypeFilter, SearchFilters};

use crate::state::ports::PortsState;
use crate::state::ui::UiState;

pub const RATING_CHOICES: [f64; 4] = [3.0, 4.0, 4.5, 4.8];

/// Raw text inputs of the filters sidebar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterForm {
    pub min_price: String,
    pub max_price: String,
    pub rating: String,
    pub boat_length: String,
    pub amenities: Vec<String>,
    pub port_type: PortTypeFilter,
}

impl FilterForm {
    #[must_use]
    pub fn from_filters(filters: &SearchFilters) -> Self {
        let text = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();
        Self {
            min_price: text(filters.min_price),
            max_price: text(filters.max_price),
            rating: text(filters.rating),
            boat_length: text(filters.boat_length),
            amenities: filters.amenities.clone(),
            port_type: filters.port_type.unwrap_or_default(),
        }
    }

    /// Merge the form into `base`, keeping fields the sidebar does not edit
    /// (location, dates). Blank, zero, or unparsable numbers become unset.
    #[must_use]
    pub fn to_filters(&self, base: &SearchFilters) -> SearchFilters {
        SearchFilters {
            min_price: parse_positive(&self.min_price),
            max_price: parse_positive(&self.max_price),
            rating: parse_positive(&self.rating),
            boat_length: parse_positive(&self.boat_length),
            amenities: self.amenities.clone(),
            port_type: (self.port_type != PortTypeFilter::All).then_some(self.port_type),
            ..base.clone()
        }
    }
}

#[must_use]
pub fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite() && *n > 0.0)
}

#[component]
pub fn PortFilters() -> impl IntoView {
    let ports = expect_context::<RwSignal<PortsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let tr = move |key: &'static str| t(ui.get().language, key);

    let form = RwSignal::new(FilterForm::from_filters(&ports.get_untracked().search_filters));
    let catalog = Memo::new(move |_| ports.with(|s| marina::filter::amenity_catalog(&s.ports)));

    let on_apply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let filters = form.with(|f| f.to_filters(&ports.get_untracked().search_filters));
        ports.update(|s| s.set_search_filters(filters));
    };
    let on_clear = move |_| {
        ports.update(PortsState::clear_filters);
        form.set(FilterForm::default());
    };

    let text_input = move |label: &'static str, get: fn(&FilterForm) -> String, set: fn(&mut FilterForm, String)| {
        view! {
            <label class="filters__field">
                <span>{move || tr(label)}</span>
                <input
                    type="number"
                    min="0"
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <form class="filters" on:submit=on_apply>
            <div class="filters__header">
                <h2>{move || tr("filters.title")}</h2>
                <button type="button" class="filters__clear" on:click=on_clear>{move || tr("filters.clearAll")}</button>
            </div>

            <fieldset class="filters__group">
                <legend>{move || tr("filters.priceRange")}</legend>
                {text_input("filters.minPrice", |f| f.min_price.clone(), |f, v| f.min_price = v)}
                {text_input("filters.maxPrice", |f| f.max_price.clone(), |f, v| f.max_price = v)}
            </fieldset>

            <fieldset class="filters__group">
                <legend>{move || tr("filters.portType")}</legend>
                {[(PortTypeFilter::All, "All"), (PortTypeFilter::Marina, "Marinas"), (PortTypeFilter::PrivatePort, "Private ports")]
                    .into_iter()
                    .map(|(kind, label)| {
                        view! {
                            <label class="filters__radio">
                                <input
                                    type="radio"
                                    name="port-type"
                                    prop:checked=move || form.with(|f| f.port_type == kind)
                                    on:change=move |_| form.update(|f| f.port_type = kind)
                                />
                                {label}
                            </label>
                        }
                    })
                    .collect_view()}
            </fieldset>

            <fieldset class="filters__group">
                <legend>{move || tr("filters.rating")}</legend>
                <select
                    prop:value=move || form.with(|f| f.rating.clone())
                    on:change=move |ev| form.update(|f| f.rating = event_target_value(&ev))
                >
                    <option value="">"Any"</option>
                    {RATING_CHOICES
                        .into_iter()
                        .map(|r| view! { <option value=r.to_string()>{format!("{r}+ ★")}</option> })
                        .collect_view()}
                </select>
            </fieldset>

            <fieldset class="filters__group">
                {text_input("home.boatLength", |f| f.boat_length.clone(), |f, v| f.boat_length = v)}
            </fieldset>

            <fieldset class="filters__group">
                <legend>{move || tr("filters.amenities")}</legend>
                <For
                    each=move || catalog.get()
                    key=|a| a.clone()
                    children=move |amenity| {
                        let for_checked = amenity.clone();
                        let for_toggle = amenity.clone();
                        view! {
                            <label class="filters__check">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.with(|f| f.amenities.contains(&for_checked))
                                    on:change=move |_| {
                                        form.update(|f| {
                                            if let Some(pos) = f.amenities.iter().position(|a| *a == for_toggle) {
                                                f.amenities.remove(pos);
                                            } else {
                                                f.amenities.push(for_toggle.clone());
                                            }
                                        });
                                    }
                                />
                                {amenity}
                            </label>
                        }
                    }
                />
            </fieldset>

            <button type="submit" class="btn btn--primary filters__apply">"Apply filters"</button>
        </form>
    }
}
