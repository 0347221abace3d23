//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use marina::PublicConfig;

use crate::components::{header::Header, notifications::Notifications};
use crate::pages::{
    about::AboutPage, booking::BookingPage, home::HomePage, port_detail::PortDetailPage, ports_list::PortsListPage,
    reservations::ReservationsPage, sign_in::SignInPage, sign_up::SignUpPage,
};
use crate::state::{auth::AuthState, ports::PortsState, reservations::ReservationsState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the four state slices plus the server's public config, then sets
/// up client-side routing. Nothing is persisted, so a reload starts from the
/// defaults again.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ports = RwSignal::new(PortsState::default());
    let reservations = RwSignal::new(ReservationsState::default());
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let config = RwSignal::new(PublicConfig::default());

    provide_context(ports);
    provide_context(reservations);
    provide_context(auth);
    provide_context(ui);
    provide_context(config);

    // Maps key and payment flags; defaults stand in if the request fails.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(fetched) = crate::net::api::fetch_public_config().await {
                config.set(fetched);
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/docknow.css"/>
        <Title text="DockNow"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("ports") view=PortsListPage/>
                    <Route path=(StaticSegment("ports"), ParamSegment("id")) view=PortDetailPage/>
                    <Route path=(StaticSegment("booking"), ParamSegment("id")) view=BookingPage/>
                    <Route path=StaticSegment("reservations") view=ReservationsPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("signin")) view=SignInPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignUpPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                </Routes>
            </main>
            <Notifications/>
        </Router>
    }
}
