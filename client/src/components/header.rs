//! Site header with navigation, language and currency pickers, and the
//! signed-in user's menu.
//!
//! The user menu closes on any click outside its wrapper. The window
//! listener is installed on mount and removed on cleanup.

use leptos::prelude::*;
use marina::Language;
use marina::format::CURRENCIES;
use marina::i18n::t;

use crate::actions;
use crate::state::auth::AuthState;
use crate::state::reservations::ReservationsState;
use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let reservations = expect_context::<RwSignal<ReservationsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let menu_open = RwSignal::new(false);
    let menu_ref = NodeRef::<leptos::html::Div>::new();
    let tr = move |key: &'static str| t(ui.get().language, key);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;
        let handle = window_event_listener(leptos::ev::click, move |ev| {
            if !menu_open.get_untracked() {
                return;
            }
            let Some(wrapper) = menu_ref.get_untracked() else {
                return;
            };
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .is_some_and(|node| wrapper.contains(Some(&node)));
            if !inside {
                menu_open.set(false);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_language = move |ev| {
        if let Some(language) = Language::from_code(&event_target_value(&ev)) {
            actions::set_language(auth, ui, language);
        }
    };
    let on_currency = move |ev| actions::set_currency(auth, ui, event_target_value(&ev));
    let on_sign_out = move |_| {
        menu_open.set(false);
        actions::sign_out(auth, reservations, ui);
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                <span class="site-header__logo" aria-hidden="true">"⚓"</span>
                "DockNow"
            </a>
            <button
                class="site-header__burger"
                aria-label="Toggle navigation"
                on:click=move |_| ui.update(UiState::toggle_sidebar)
            >
                "☰"
            </button>
            <nav class="site-header__nav" class:site-header__nav--open=move || ui.get().sidebar_open>
                <a href="/" on:click=move |_| ui.update(|u| u.set_sidebar_open(false))>{move || tr("navigation.home")}</a>
                <a href="/ports" on:click=move |_| ui.update(|u| u.set_sidebar_open(false))>{move || tr("navigation.ports")}</a>
                <a href="/reservations" on:click=move |_| ui.update(|u| u.set_sidebar_open(false))>
                    {move || tr("navigation.reservations")}
                </a>
                <a href="/about" on:click=move |_| ui.update(|u| u.set_sidebar_open(false))>{move || tr("navigation.about")}</a>
            </nav>

            <div class="site-header__pickers">
                <select class="site-header__select" aria-label="Language" on:change=on_language>
                    {Language::ALL
                        .into_iter()
                        .map(|lang| {
                            view! {
                                <option value=lang.code() selected=move || ui.get().language == lang>
                                    {lang.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <select class="site-header__select" aria-label="Currency" on:change=on_currency>
                    {CURRENCIES
                        .into_iter()
                        .map(|code| {
                            view! {
                                <option value=code selected=move || ui.get().currency == code>
                                    {code}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <Show
                when=move || auth.get().is_authenticated
                fallback=move || {
                    view! {
                        <div class="site-header__auth">
                            <a class="btn" href="/auth/signin">{move || tr("navigation.signIn")}</a>
                            <a class="btn btn--primary" href="/auth/signup">{move || tr("navigation.signUp")}</a>
                        </div>
                    }
                }
            >
                <div class="user-menu" node_ref=menu_ref>
                    <button class="user-menu__toggle" on:click=move |_| menu_open.update(|o| *o = !*o)>
                        {move || {
                            auth.get()
                                .user
                                .and_then(|u| u.avatar)
                                .map(|src| view! { <img class="user-menu__avatar" src=src alt=""/> }.into_any())
                                .unwrap_or_else(|| view! { <span class="user-menu__avatar user-menu__avatar--blank"></span> }.into_any())
                        }}
                        <span class="user-menu__name">{move || auth.get().user.map(|u| u.name).unwrap_or_default()}</span>
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="user-menu__dropdown">
                            <p class="user-menu__email">{move || auth.get().user.map(|u| u.email).unwrap_or_default()}</p>
                            <a href="/reservations" on:click=move |_| menu_open.set(false)>
                                {move || tr("navigation.reservations")}
                            </a>
                            <button class="user-menu__signout" on:click=on_sign_out>
                                {move || tr("navigation.signOut")}
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </header>
    }
}
