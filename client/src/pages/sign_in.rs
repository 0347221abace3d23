//! Email + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use marina::i18n::t;
use marina::validate::check_sign_in;

use crate::actions;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let tr = move |key: &'static str| t(ui.get().language, key);
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let local_error = RwSignal::new(None::<String>);

    auth.update(AuthState::clear_error);

    let on_done = Callback::new(move |()| navigate("/", NavigateOptions::default()));
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|a| a.loading) {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(e) = check_sign_in(&email_value, &password_value) {
            local_error.set(Some(e.to_string()));
            return;
        }
        local_error.set(None);
        actions::sign_in(auth, ui, email_value, password_value, on_done);
    };

    let error = move || local_error.get().or_else(|| auth.get().error);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{move || tr("auth.signIn")}</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label>
                        {move || tr("auth.email")}
                        <input
                            type="email"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        {move || tr("auth.password")}
                        <input
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error().is_some()>
                        <p class="form-error">{move || error().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || auth.get().loading>
                        {move || if auth.get().loading { tr("common.loading") } else { tr("auth.signIn") }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    {move || tr("auth.noAccount")} " " <a href="/auth/signup">{move || tr("navigation.signUp")}</a>
                </p>
            </div>
        </div>
    }
}
