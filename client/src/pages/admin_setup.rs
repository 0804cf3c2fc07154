//! First-run administrator registration with face enrollment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the landing page only while no admin exists. The admin's
//! face frames are captured with the same plan as voter registration.

use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::admin_login::validate_credentials;
use crate::components::camera_preview::CameraPreview;
use crate::components::status_line::StatusLine;
use crate::state::status::StatusMessage;

#[component]
pub fn AdminSetupPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(StatusMessage::default());
    let busy = RwSignal::new(false);
    let already_exists = RwSignal::new(false);
    let video_ref = NodeRef::<html::Video>::new();
    let canvas_ref = NodeRef::<html::Canvas>::new();
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
        status.set(StatusMessage::info("Look at the camera..."));

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use super::admin_login::SERVER_ERROR;
                use crate::net::api::SetupOutcome;
                use crate::util::camera::{CameraError, capture_faces};
                use crate::util::capture::CapturePlan;

                let Some(video) = video_ref.get_untracked() else {
                    busy.set(false);
                    return;
                };
                let frames = match capture_faces(video, canvas_ref.get_untracked(), &CapturePlan::REGISTRATION).await {
                    Ok(frames) => frames,
                    Err(e) => {
                        if e == CameraError::Denied {
                            crate::util::browser::alert(&e.to_string());
                        }
                        status.set(StatusMessage::error(e.to_string()));
                        busy.set(false);
                        return;
                    }
                };
                status.set(StatusMessage::info("Registering admin..."));
                match crate::net::api::setup_admin(&user, &pass, &frames).await {
                    Ok(SetupOutcome::Created) => {
                        navigate("/app/admin/login", leptos_router::NavigateOptions::default());
                    }
                    Ok(SetupOutcome::AlreadyExists(message)) => {
                        already_exists.set(true);
                        status.set(StatusMessage::warning(message));
                    }
                    Err(e) => status.set(StatusMessage::error(e.user_message(SERVER_ERROR))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (user, pass, &navigate, already_exists);
    };

    view! {
        <div class="login-page">
            <div class="login-card login-card--wide">
                <h1>"Admin Setup"</h1>
                <p class="login-card__subtitle">"Register the election administrator"</p>
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
                    <CameraPreview video_ref=video_ref canvas_ref=canvas_ref/>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Capturing..." } else { "Capture face & register" }}
                    </button>
                </form>
                <StatusLine status=status/>
                <Show when=move || already_exists.get()>
                    <a class="login-card__link" href="/app/admin/login">"Go to admin login"</a>
                </Show>
            </div>
        </div>
    }
}
