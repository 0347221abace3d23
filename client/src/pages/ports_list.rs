//! Ports list with filters sidebar and a list/map toggle.

#[cfg(test)]
#[path = "ports_list_test.rs"]
mod ports_list_test;

use leptos::prelude::*;
use marina::i18n::t;

use crate::actions;
use crate::components::port_card::PortCard;
use crate::components::port_filters::PortFilters;
use crate::components::ports_map::PortsMap;
use crate::state::ports::PortsState;
use crate::state::ui::UiState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    List,
    Map,
}

pub fn result_label(count: usize) -> String {
    match count {
        0 => "No ports match your search".to_owned(),
        1 => "1 port found".to_owned(),
        n => format!("{n} ports found"),
    }
}

#[component]
pub fn PortsListPage() -> impl IntoView {
    let ports = expect_context::<RwSignal<PortsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let tr = move |key: &'static str| t(ui.get().language, key);
    let layout = RwSignal::new(Layout::default());
    let query = RwSignal::new(String::new());

    Effect::new(move || actions::ensure_ports(ports));

    // Query box and port-type selector narrow the slice's filtered list
    // without writing back into it.
    let shown = Memo::new(move |_| {
        let needle = query.get();
        ports.with(|s| marina::filter::narrow(&s.filtered_ports, &needle, s.search_filters.port_type))
    });

    view! {
        <div class="ports-page">
            <div class="ports-page__header">
                <h1>{move || tr("ports.title")}</h1>
                <input
                    class="ports-page__query"
                    type="search"
                    placeholder=move || tr("home.searchPlaceholder")
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn ports-page__filters-toggle" on:click=move |_| ui.update(UiState::toggle_filters)>
                    {move || tr("filters.title")}
                </button>
                <div class="segmented">
                    <button
                        class:active=move || layout.get() == Layout::List
                        on:click=move |_| layout.set(Layout::List)
                    >
                        {move || tr("ports.listView")}
                    </button>
                    <button
                        class:active=move || layout.get() == Layout::Map
                        on:click=move |_| layout.set(Layout::Map)
                    >
                        {move || tr("ports.mapView")}
                    </button>
                </div>
            </div>

            <div class="ports-page__body" class:ports-page__body--filters=move || ui.get().show_filters>
                <Show when=move || ui.get().show_filters>
                    <aside class="ports-page__sidebar">
                        <PortFilters/>
                    </aside>
                </Show>

                <section class="ports-page__results">
                    <Show when=move || ports.with(|s| s.error.is_some())>
                        <p class="error-banner">{move || ports.get().error.unwrap_or_default()}</p>
                    </Show>
                    <Show
                        when=move || !ports.with(|s| s.loading)
                        fallback=move || view! { <p class="loading">{move || tr("common.loading")}</p> }
                    >
                        <p class="ports-page__count">{move || result_label(shown.with(Vec::len))}</p>
                        <Show
                            when=move || layout.get() == Layout::List
                            fallback=move || view! { <PortsMap ports_to_show=shown/> }
                        >
                            <div class="port-grid">
                                <For
                                    each=move || shown.get()
                                    key=|port| port.id.clone()
                                    children=move |port| view! { <PortCard port=port/> }
                                />
                            </div>
                        </Show>
                        <Show when=move || shown.with(Vec::is_empty)>
                            <p class="empty-state">{move || tr("ports.noResults")}</p>
                        </Show>
                    </Show>
                </section>
            </div>
        </div>
    }
}
