//! Voter face login.
//!
//! SYSTEM CONTEXT
//! ==============
//! The voter enters username and enrollment, then a short capture is sent
//! for face verification. Only a verified identity is written to session
//! storage; the ballot page reads it back.

#[cfg(test)]
#[path = "voter_login_test.rs"]
mod voter_login_test;

use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::camera_preview::CameraPreview;
use crate::components::status_line::StatusLine;
use crate::state::status::StatusMessage;

pub const IDENTITY_REQUIRED: &str = "Username & enrollment required";
pub const CAMERA_OR_SERVER: &str = "Camera or server error";
/// Pause between a successful verification and opening the ballot.
pub const REDIRECT_DELAY_MS: u64 = 1000;

/// Trimmed `(username, enrollment)`.
///
/// # Errors
///
/// Returns the user-facing message when either field is blank.
pub fn validate_identity(username: &str, enrollment: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    let enrollment = enrollment.trim();
    if username.is_empty() || enrollment.is_empty() {
        return Err(IDENTITY_REQUIRED);
    }
    Ok((username.to_owned(), enrollment.to_owned()))
}

#[component]
pub fn VoterLoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let enrollment = RwSignal::new(String::new());
    let status = RwSignal::new(StatusMessage::default());
    let busy = RwSignal::new(false);
    let video_ref = NodeRef::<html::Video>::new();
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, enroll) = match validate_identity(&username.get(), &enrollment.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                status.set(StatusMessage::error(msg));
                return;
            }
        };
        busy.set(true);
        status.set(StatusMessage::info("Verifying face..."));

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::state::session::VoterSession;
                use crate::util::camera::capture_faces;
                use crate::util::capture::CapturePlan;
                use crate::util::storage::BrowserSession;

                let Some(video) = video_ref.get_untracked() else {
                    busy.set(false);
                    return;
                };
                let frames = match capture_faces(video, canvas_ref.get_untracked(), &CapturePlan::AUTHENTICATION).await {
                    Ok(frames) => frames,
                    Err(e) => {
                        leptos::logging::warn!("voter capture failed: {e}");
                        status.set(StatusMessage::error(CAMERA_OR_SERVER));
                        busy.set(false);
                        return;
                    }
                };
                let outcome = crate::net::api::authenticate_voter(&user, &enroll, &frames).await;
                match VoterSession::persist_on_success(&BrowserSession, outcome) {
                    Ok(session) => {
                        status.set(StatusMessage::success(format!("Welcome, {}", session.display_name())));
                        gloo_timers::future::sleep(std::time::Duration::from_millis(REDIRECT_DELAY_MS)).await;
                        navigate("/app/vote", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("voter authentication failed: {e}");
                        status.set(StatusMessage::error(e.user_message(CAMERA_OR_SERVER)));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (user, enroll, &navigate);
    };

    view! {
        <div class="login-page">
            <div class="login-card login-card--wide">
                <h1>"Voter Login"</h1>
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
                        type="text"
                        placeholder="Enrollment"
                        prop:value=move || enrollment.get()
                        on:input=move |ev| enrollment.set(event_target_value(&ev))
                    />
                    <CameraPreview video_ref=video_ref canvas_ref=canvas_ref/>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Verifying..." } else { "Verify face & continue" }}
                    </button>
                </form>
                <StatusLine status=status/>
            </div>
        </div>
    }
}
