//! Voter registration by face capture and the registered-voter table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Registration opens the camera, captures the registration plan's frames,
//! and submits either the whole set or just the first frame as a photo. The
//! camera is released inside `capture_faces` on every exit path.

use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::admin_nav::AdminNav;
use crate::components::camera_preview::CameraPreview;
use crate::components::status_line::StatusLine;
use crate::components::voter_row::VoterRow;
use crate::state::status::StatusMessage;
use crate::state::voters::{RegistrationForm, RegistrationMode, VotersState};
use crate::util::auth::install_admin_redirect;

#[cfg(feature = "hydrate")]
fn load_voters(table: RwSignal<VotersState>) {
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_voters().await;
        if let Err(e) = &result {
            leptos::logging::warn!("voter list failed: {e}");
        }
        table.set(VotersState::from_result(result));
    });
}

#[component]
pub fn VotersPage() -> impl IntoView {
    let form = RwSignal::new(RegistrationForm::default());
    let mode = RwSignal::new(RegistrationMode::default());
    let table = RwSignal::new(VotersState::default());
    let status = RwSignal::new(StatusMessage::default());
    let busy = RwSignal::new(false);
    let video_ref = NodeRef::<html::Video>::new();
    let canvas_ref = NodeRef::<html::Canvas>::new();
    install_admin_redirect(use_navigate());

    #[cfg(feature = "hydrate")]
    {
        if !crate::util::auth::should_redirect_admin(&crate::util::storage::BrowserSession) {
            load_voters(table);
        }
    }

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name, enrollment) = match form.get().validate() {
            Ok(pair) => pair,
            Err(msg) => {
                status.set(StatusMessage::error(msg));
                return;
            }
        };
        busy.set(true);
        status.set(StatusMessage::info("Look at the camera..."));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
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
            status.set(StatusMessage::info("Registering voter..."));
            let outcome = match (mode.get_untracked(), frames.first()) {
                (RegistrationMode::Faces, _) => crate::net::api::register_voter_faces(&name, &enrollment, &frames).await,
                (RegistrationMode::SingleImage, Some(frame)) => {
                    crate::net::api::register_voter_image(&name, &enrollment, frame).await.map(|_| ())
                }
                (RegistrationMode::SingleImage, None) => {
                    Err(crate::net::error::ApiError::Decode("no frame captured".to_owned()))
                }
            };
            match outcome {
                Ok(()) => {
                    status.set(StatusMessage::success(format!("Voter {name} registered")));
                    form.update(RegistrationForm::clear);
                    load_voters(table);
                }
                Err(e) => {
                    leptos::logging::warn!("voter registration failed: {e}");
                    status.set(StatusMessage::error(e.user_message("Server error")));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (name, enrollment);
    };

    let on_delete = Callback::new(move |id: i64| {
        if !crate::util::browser::confirm("Delete this voter?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_voter(id).await {
                Ok(()) => load_voters(table),
                Err(e) => crate::util::browser::alert(&e.user_message(crate::state::voters::DELETE_FAILED)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let mode_option = move |value: RegistrationMode| {
        view! {
            <label class="register-mode">
                <input
                    type="radio"
                    name="register-mode"
                    prop:checked=move || mode.get() == value
                    on:change=move |_| mode.set(value)
                />
                {value.label()}
            </label>
        }
    };

    view! {
        <div class="admin-page">
            <AdminNav unlocked=true/>
            <h1>"Voters"</h1>
            <form class="register-form" on:submit=on_register>
                <input
                    type="text"
                    placeholder="Full name"
                    prop:value=move || form.get().name
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Enrollment"
                    prop:value=move || form.get().enrollment
                    on:input=move |ev| form.update(|f| f.enrollment = event_target_value(&ev))
                />
                {mode_option(RegistrationMode::Faces)}
                {mode_option(RegistrationMode::SingleImage)}
                <CameraPreview video_ref=video_ref canvas_ref=canvas_ref/>
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Capturing..." } else { "Register Voter" }}
                </button>
            </form>
            <StatusLine status=status/>
            <table class="voter-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Enrollment"</th>
                        <th>"Status"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let state = table.get();
                        match state.placeholder() {
                            Some(text) => {
                                view! {
                                    <tr>
                                        <td colspan="5">{text}</td>
                                    </tr>
                                }
                                    .into_any()
                            }
                            None => {
                                state
                                    .rows()
                                    .iter()
                                    .cloned()
                                    .map(|row| view! { <VoterRow row=row on_delete=on_delete/> })
                                    .collect_view()
                                    .into_any()
                            }
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
