//! Bootstrap route: sends the visitor to admin setup or admin login.
//!
//! SYSTEM CONTEXT
//! ==============
//! A fresh backend has no administrator. The landing page asks the backend
//! whether one exists and forwards accordingly, so first-run setup is never
//! reachable once an admin is registered.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

pub const CONNECT_FAILED: &str = "Cannot connect to server";

/// Route for a given `check_admin` answer.
pub fn bootstrap_route(admin_exists: bool) -> &'static str {
    if admin_exists { "/app/admin/login" } else { "/app/admin/setup" }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let info = RwSignal::new("Checking server...".to_owned());
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::check_admin().await {
            Ok(exists) => {
                navigate(bootstrap_route(exists), NavigateOptions { replace: true, ..Default::default() });
            }
            Err(e) => {
                leptos::logging::warn!("check_admin failed: {e}");
                info.set(CONNECT_FAILED.to_owned());
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = navigate;

    view! {
        <div class="landing-page">
            <div class="landing-card">
                <h1>"Ballot Desk"</h1>
                <p class="landing-card__info">{move || info.get()}</p>
                <a class="landing-card__link" href="/app/voter/login">"Voter login"</a>
            </div>
        </div>
    }
}
