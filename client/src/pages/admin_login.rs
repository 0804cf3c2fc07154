//! Admin password login.

#[cfg(test)]
#[path = "admin_login_test.rs"]
mod admin_login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::status_line::StatusLine;
use crate::state::status::StatusMessage;

pub const CREDENTIALS_REQUIRED: &str = "Username & password required";
pub const SERVER_ERROR: &str = "Server error";

/// Trimmed username plus the password as typed.
///
/// # Errors
///
/// Returns the user-facing message when either field is blank.
pub fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return Err(CREDENTIALS_REQUIRED);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(StatusMessage::default());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_credentials(&username.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                status.set(StatusMessage::error(msg));
                return;
            }
        };
        busy.set(true);
        status.set(StatusMessage::info("Signing in..."));

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::state::session::AdminSession;
                use crate::util::storage::BrowserSession;

                let outcome = crate::net::api::admin_login(&user, &pass).await;
                match AdminSession::persist_on_success(&BrowserSession, outcome) {
                    Ok(()) => navigate("/app/admin", leptos_router::NavigateOptions::default()),
                    Err(e) => {
                        leptos::logging::warn!("admin login failed: {e}");
                        status.set(StatusMessage::error(e.user_message(SERVER_ERROR)));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (user, pass, &navigate);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <StatusLine status=status/>
            </div>
        </div>
    }
}
