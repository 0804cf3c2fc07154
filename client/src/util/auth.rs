//! Client-side route gates for the admin and voter screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin pages and the ballot page apply identical redirect behavior. These
//! gates are UX only; the backend enforces authorization. Pages also skip
//! their initial fetch when the gate is about to redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{AdminSession, VoterSession};
use crate::util::storage::{BrowserSession, SessionStore};

pub const ADMIN_LOGIN_ROUTE: &str = "/app/admin/login";
pub const VOTER_LOGIN_ROUTE: &str = "/app/voter/login";

pub fn should_redirect_admin(store: &impl SessionStore) -> bool {
    !AdminSession::is_logged_in(store)
}

pub fn should_redirect_voter(store: &impl SessionStore) -> bool {
    VoterSession::load(store).is_none()
}

/// Redirect to the admin login once mounted if the admin flag is missing.
pub fn install_admin_redirect<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_admin(&BrowserSession) {
            navigate(ADMIN_LOGIN_ROUTE, NavigateOptions { replace: true, ..Default::default() });
        }
    });
}

/// Redirect to the voter login once mounted if no verified voter is present.
pub fn install_voter_redirect<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_voter(&BrowserSession) {
            navigate(VOTER_LOGIN_ROUTE, NavigateOptions { replace: true, ..Default::default() });
        }
    });
}

/// Clear the admin flag and return to the login screen.
pub fn logout_admin<F>(navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    AdminSession::clear(&BrowserSession);
    navigate(ADMIN_LOGIN_ROUTE, NavigateOptions::default());
}
