//! Ports map with two renderers.
//!
//! DESIGN
//! ======
//! Both renderers draw the same viewport: `map_bounds` from the ports slice,
//! or a fit around the ports on show until the user zooms. The schematic
//! renderer projects lat/lng linearly into an SVG; the tile renderer lays
//! OpenStreetMap raster tiles under absolutely positioned markers using Web
//! Mercator math from `util::map_math`. Positions are percentages of the
//! fixed `MAP_WIDTH`×`MAP_HEIGHT` frame so both scale with the container.
//!
//! Selecting a marker opens a popup with the port card. When the server
//! exposes a maps API key the popup also embeds the provider map.

use leptos::prelude::*;
use marina::i18n::t;
use marina::{MapBounds, Port, PublicConfig};

use crate::components::port_card::PortCard;
use crate::state::ports::PortsState;
use crate::state::ui::{MapKind, MapView, UiState};
use crate::util::map_math::{self, MAP_HEIGHT, MAP_WIDTH, TILE_SIZE, TileViewport};

const FIT_PADDING_DEG: f64 = 6.0;

fn percent(value: f64, of: f64) -> f64 {
    value / of * 100.0
}

#[component]
pub fn PortsMap(#[prop(into)] ports_to_show: Signal<Vec<Port>>) -> impl IntoView {
    let ports = expect_context::<RwSignal<PortsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let bounds = Memo::new(move |_| {
        ports.with(|s| s.map_bounds).unwrap_or_else(|| {
            let points: Vec<(f64, f64)> =
                ports_to_show.with(|list| list.iter().map(|p| (p.location.lat, p.location.lng)).collect());
            map_math::fit(&points, FIT_PADDING_DEG).unwrap_or_else(map_math::world_bounds)
        })
    });
    let kind = Memo::new(move |_| ui.with(|u| u.map_kind));
    let view_mode = Memo::new(move |_| ui.with(|u| u.map_view));

    let zoom_by = move |factor: f64| {
        let next = map_math::zoom(&bounds.get_untracked(), factor);
        ports.update(|s| s.set_map_bounds(next));
    };
    let reset = move |_| ports.update(|s| s.set_map_bounds(map_math::world_bounds()));

    view! {
        <div class="ports-map" class:ports-map--street=move || view_mode.get() == MapView::Street>
            <div class="ports-map__controls">
                <button on:click=move |_| zoom_by(0.5) aria-label="Zoom in">"+"</button>
                <button on:click=move |_| zoom_by(2.0) aria-label="Zoom out">"−"</button>
                <button on:click=reset>"World"</button>
                <button
                    class:active=move || kind.get() == MapKind::Schematic
                    on:click=move |_| ui.update(|u| u.set_map_kind(MapKind::Schematic))
                >
                    "Schematic"
                </button>
                <button
                    class:active=move || kind.get() == MapKind::Tiles
                    on:click=move |_| ui.update(|u| u.set_map_kind(MapKind::Tiles))
                >
                    "Tiles"
                </button>
                <button
                    class:active=move || view_mode.get() == MapView::Satellite
                    on:click=move |_| ui.update(|u| u.set_map_view(MapView::Satellite))
                >
                    "Satellite"
                </button>
                <button
                    class:active=move || view_mode.get() == MapView::Street
                    on:click=move |_| ui.update(|u| u.set_map_view(MapView::Street))
                >
                    "Street"
                </button>
            </div>
            {move || match kind.get() {
                MapKind::Schematic => view! { <SchematicMap bounds=bounds ports_to_show=ports_to_show/> }.into_any(),
                MapKind::Tiles => view! { <TileMap bounds=bounds ports_to_show=ports_to_show/> }.into_any(),
            }}
            <MapPopup/>
        </div>
    }
}

#[component]
fn SchematicMap(bounds: Memo<MapBounds>, ports_to_show: Signal<Vec<Port>>) -> impl IntoView {
    let ports = expect_context::<RwSignal<PortsState>>();

    let markers = move || {
        let b = bounds.get();
        let selected = ports.with(|s| s.selected_port.as_ref().map(|p| p.id.clone()));
        ports_to_show
            .get()
            .into_iter()
            .filter(|p| b.contains(p.location.lat, p.location.lng))
            .map(|port| {
                let (x, y) = map_math::project(&b, port.location.lat, port.location.lng, MAP_WIDTH, MAP_HEIGHT);
                let is_selected = selected.as_deref() == Some(port.id.as_str());
                let class = if port.is_private() { "map-marker map-marker--private" } else { "map-marker" };
                let title = port.name.clone();
                view! {
                    <g
                        class=class
                        class:map-marker--selected=is_selected
                        transform=format!("translate({x:.1},{y:.1})")
                        aria-label=title
                        on:click=move |_| ports.update(|s| s.set_selected_port(Some(port.clone())))
                    >
                        <circle r="9"></circle>
                    </g>
                }
            })
            .collect_view()
    };

    view! {
        <svg
            class="ports-map__canvas"
            viewBox=format!("0 0 {MAP_WIDTH} {MAP_HEIGHT}")
            preserveAspectRatio="xMidYMid meet"
            role="img"
            aria-label="Map of ports"
        >
            <rect class="ports-map__water" width=MAP_WIDTH height=MAP_HEIGHT></rect>
            {markers}
        </svg>
    }
}

/// OpenStreetMap raster layer. Tiles are plain images; no map script runs.
#[component]
fn TileMap(bounds: Memo<MapBounds>, ports_to_show: Signal<Vec<Port>>) -> impl IntoView {
    let ports = expect_context::<RwSignal<PortsState>>();
    let viewport = Memo::new(move |_| bounds.with(|b| TileViewport::centered(b, MAP_WIDTH, MAP_HEIGHT)));
    let tile_w = percent(TILE_SIZE, MAP_WIDTH);
    let tile_h = percent(TILE_SIZE, MAP_HEIGHT);

    let tiles = move || {
        viewport
            .get()
            .tiles()
            .into_iter()
            .map(|tile| {
                let style = format!(
                    "left:{:.4}%;top:{:.4}%;width:{tile_w:.4}%;height:{tile_h:.4}%",
                    percent(tile.left, MAP_WIDTH),
                    percent(tile.top, MAP_HEIGHT),
                );
                view! { <img class="tile-map__tile" src=tile.url() alt="" style=style/> }
            })
            .collect_view()
    };

    let markers = move || {
        let frame = viewport.get();
        let selected = ports.with(|s| s.selected_port.as_ref().map(|p| p.id.clone()));
        ports_to_show
            .get()
            .into_iter()
            .filter_map(|port| {
                let (x, y) = frame.locate(port.location.lat, port.location.lng);
                let on_screen = (0.0..=MAP_WIDTH).contains(&x) && (0.0..=MAP_HEIGHT).contains(&y);
                on_screen.then_some((port, x, y))
            })
            .map(|(port, x, y)| {
                let is_selected = selected.as_deref() == Some(port.id.as_str());
                let class = if port.is_private() { "tile-map__marker tile-map__marker--private" } else { "tile-map__marker" };
                let style = format!("left:{:.4}%;top:{:.4}%", percent(x, MAP_WIDTH), percent(y, MAP_HEIGHT));
                let title = port.name.clone();
                view! {
                    <button
                        class=class
                        class:tile-map__marker--selected=is_selected
                        style=style
                        aria-label=title
                        on:click=move |_| ports.update(|s| s.set_selected_port(Some(port.clone())))
                    ></button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="tile-map" role="img" aria-label="Map of ports">
            <div class="tile-map__tiles">{tiles}</div>
            {markers}
            <a class="tile-map__attribution" href="https://www.openstreetmap.org/copyright" target="_blank" rel="noopener">
                "© OpenStreetMap contributors"
            </a>
        </div>
    }
}

#[component]
fn MapPopup() -> impl IntoView {
    let ports = expect_context::<RwSignal<PortsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<RwSignal<PublicConfig>>();

    let embed = move || {
        let key = config.get().maps_api_key?;
        let port = ports.get().selected_port?;
        let satellite = ui.with(|u| u.map_view) == MapView::Satellite;
        Some(map_math::embed_url(&key, port.location.lat, port.location.lng, satellite))
    };

    view! {
        <Show when=move || ports.with(|s| s.selected_port.is_some())>
            <div class="ports-map__popup">
                <button
                    class="ports-map__popup-close"
                    aria-label="Close"
                    on:click=move |_| ports.update(|s| s.set_selected_port(None))
                >
                    "✕"
                </button>
                {move || ports.get().selected_port.map(|port| view! { <PortCard port=port compact=true/> }.into_any())}
                {move || {
                    embed()
                        .map(|src| {
                            view! {
                                <iframe
                                    class="ports-map__embed"
                                    src=src
                                    referrerpolicy="no-referrer-when-downgrade"
                                    title=move || t(ui.with(|u| u.language), "ports.mapView")
                                ></iframe>
                            }
                                .into_any()
                        })
                }}
            </div>
        </Show>
    }
}
