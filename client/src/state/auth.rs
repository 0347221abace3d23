//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every fresh page load starts signed in as the demo user. Route guards on
//! booking and reservations read `is_authenticated`; the header reads `user`
//! for the avatar menu and preferred currency.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use marina::{PreferencesUpdate, User};

pub const SIGN_IN_FAILED: &str = "Sign in failed";
pub const SIGN_UP_FAILED: &str = "Sign up failed";

#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: Some(marina::mock::default_user()), is_authenticated: true, loading: false, error: None }
    }
}

impl AuthState {
    /// Shared by sign-in and sign-up.
    pub fn request_pending(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Shared by sign-in and sign-up.
    pub fn request_fulfilled(&mut self, user: User) {
        self.loading = false;
        self.user = Some(user);
        self.is_authenticated = true;
    }

    pub fn sign_in_rejected(&mut self, message: Option<String>) {
        self.reject(message, SIGN_IN_FAILED);
    }

    pub fn sign_up_rejected(&mut self, message: Option<String>) {
        self.reject(message, SIGN_UP_FAILED);
    }

    pub fn sign_out_fulfilled(&mut self) {
        self.user = None;
        self.is_authenticated = false;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Merge a partial preference update into the signed-in user. No-op when
    /// signed out.
    pub fn update_user_preferences(&mut self, update: PreferencesUpdate) {
        if let Some(user) = self.user.as_mut() {
            user.preferences.apply(update);
        }
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    fn reject(&mut self, message: Option<String>, default: &str) {
        self.loading = false;
        self.error = Some(message.filter(|m| !m.is_empty()).unwrap_or_else(|| default.to_owned()));
    }
}
