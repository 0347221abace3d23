//! Account creation with per-field validation.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use marina::i18n::t;
use marina::validate::{AuthInputError, SignUpErrors, SignUpForm, check_sign_up};

use crate::actions;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    fn value(self, form: &SignUpForm) -> String {
        match self {
            Self::Name => form.name.clone(),
            Self::Email => form.email.clone(),
            Self::Password => form.password.clone(),
            Self::ConfirmPassword => form.confirm_password.clone(),
        }
    }

    fn set(self, form: &mut SignUpForm, value: String) {
        match self {
            Self::Name => form.name = value,
            Self::Email => form.email = value,
            Self::Password => form.password = value,
            Self::ConfirmPassword => form.confirm_password = value,
        }
    }

    /// Drop the error for this field once the user edits it.
    fn clear(self, errors: &mut SignUpErrors) {
        let slot = match self {
            Self::Name => &mut errors.name,
            Self::Email => &mut errors.email,
            Self::Password => &mut errors.password,
            Self::ConfirmPassword => &mut errors.confirm_password,
        };
        *slot = None;
    }

    pub fn error(self, errors: &SignUpErrors) -> Option<&AuthInputError> {
        match self {
            Self::Name => errors.name.as_ref(),
            Self::Email => errors.email.as_ref(),
            Self::Password => errors.password.as_ref(),
            Self::ConfirmPassword => errors.confirm_password.as_ref(),
        }
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let tr = move |key: &'static str| t(ui.get().language, key);
    let navigate = use_navigate();

    let form = RwSignal::new(SignUpForm::default());
    let errors = RwSignal::new(SignUpErrors::default());

    auth.update(AuthState::clear_error);

    let on_done = Callback::new(move |()| navigate("/", NavigateOptions::default()));
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|a| a.loading) {
            return;
        }
        let values = form.get();
        let found = check_sign_up(&values);
        let valid = found.is_empty();
        errors.set(found);
        if valid {
            actions::sign_up(auth, ui, values, on_done);
        }
    };

    let input = move |field: Field, label: &'static str, kind: &'static str, autocomplete: &'static str| {
        view! {
            <label class:has-error=move || errors.with(|e| field.error(e).is_some())>
                {move || tr(label)}
                <input
                    type=kind
                    autocomplete=autocomplete
                    prop:value=move || form.with(|f| field.value(f))
                    on:input=move |ev| {
                        form.update(|f| field.set(f, event_target_value(&ev)));
                        errors.update(|e| field.clear(e));
                    }
                />
                <span class="field-error">{move || errors.with(|e| field.error(e).map(ToString::to_string))}</span>
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{move || tr("auth.signUp")}</h1>
                <form class="auth-form" on:submit=on_submit>
                    {input(Field::Name, "auth.name", "text", "name")}
                    {input(Field::Email, "auth.email", "email", "email")}
                    {input(Field::Password, "auth.password", "password", "new-password")}
                    {input(Field::ConfirmPassword, "auth.confirmPassword", "password", "new-password")}
                    <Show when=move || auth.with(|a| a.error.is_some())>
                        <p class="form-error">{move || auth.get().error.unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || auth.get().loading>
                        {move || if auth.get().loading { tr("common.loading") } else { tr("auth.signUp") }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    {move || tr("auth.hasAccount")} " " <a href="/auth/signin">{move || tr("navigation.signIn")}</a>
                </p>
            </div>
        </div>
    }
}
