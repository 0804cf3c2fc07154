//! Candidate manager for the active election.
//!
//! SYSTEM CONTEXT
//! ==============
//! Candidates belong to the active election. Without one the page warns and
//! sends the admin back to the dashboard. Adds either prepend the returned
//! card or reload the list, see `state::candidates::add_outcome`.

use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::admin_nav::AdminNav;
use crate::components::candidate_card::CandidateCard;
use crate::components::status_line::StatusLine;
use crate::state::candidates::{CandidateForm, CandidatesState, QUALIFICATIONS};
use crate::state::status::StatusMessage;
use crate::util::auth::install_admin_redirect;

pub const NO_ELECTION: &str = "No election exists! Please create one first.";
pub const NO_CANDIDATES: &str = "No candidates added yet.";

#[cfg(feature = "hydrate")]
fn load_candidates(list: RwSignal<CandidatesState>) {
    list.update(|s| s.loading = true);
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_candidates().await {
            Ok(candidates) => list.update(|s| s.replace_all(&candidates)),
            Err(e) => list.update(|s| {
                s.loading = false;
                s.error = Some(e.user_message("Failed to load candidates"));
            }),
        }
    });
}

#[component]
pub fn CandidatesPage() -> impl IntoView {
    let form = RwSignal::new(CandidateForm::default());
    let list = RwSignal::new(CandidatesState::loading());
    let status = RwSignal::new(StatusMessage::default());
    let photo_ref = NodeRef::<html::Input>::new();
    let navigate = use_navigate();
    install_admin_redirect(navigate.clone());

    #[cfg(feature = "hydrate")]
    {
        if !crate::util::auth::should_redirect_admin(&crate::util::storage::BrowserSession) {
            leptos::task::spawn_local(async move {
                match crate::net::api::current_election().await {
                    Ok(Some(_)) => load_candidates(list),
                    Ok(None) => {
                        crate::util::browser::alert(NO_ELECTION);
                        navigate("/app/admin", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        list.update(|s| s.loading = false);
                        status.set(StatusMessage::error(e.user_message("Server error")));
                    }
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = navigate;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if list.get().submitting {
            return;
        }
        let submitted = form.get();
        if let Err(msg) = submitted.validate() {
            status.set(StatusMessage::error(msg));
            return;
        }
        list.update(|s| s.submitting = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::candidates::{AddOutcome, add_outcome};

            let photo_input = photo_ref.get_untracked();
            let photo = photo_input.as_ref().and_then(|input| input.files()).and_then(|files| files.get(0));
            match crate::net::api::add_candidate(&submitted, photo).await {
                Ok(resp) => {
                    status.set(StatusMessage::success(
                        resp.message.clone().unwrap_or_else(|| "Candidate added".to_owned()),
                    ));
                    form.set(CandidateForm::default());
                    if let Some(input) = photo_input {
                        input.set_value("");
                    }
                    match add_outcome(&resp, &submitted) {
                        AddOutcome::Prepend(card) => list.update(|s| s.prepend(card)),
                        AddOutcome::Reload => load_candidates(list),
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("add candidate failed: {e}");
                    status.set(StatusMessage::error(e.user_message("Error adding candidate")));
                }
            }
            list.update(|s| s.submitting = false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (submitted, photo_ref);
    };

    let on_delete = Callback::new(move |id: i64| {
        if !crate::util::browser::confirm("Delete this candidate?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_candidate(id).await {
                Ok(()) => load_candidates(list),
                Err(e) => crate::util::browser::alert(&e.user_message("Delete failed")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="admin-page">
            <AdminNav unlocked=true/>
            <h1>"Candidates"</h1>
            <form class="candidate-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || form.get().name
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Party"
                    prop:value=move || form.get().party
                    on:input=move |ev| form.update(|f| f.party = event_target_value(&ev))
                />
                <input
                    type="number"
                    placeholder="Age"
                    prop:value=move || form.get().age
                    on:input=move |ev| form.update(|f| f.age = event_target_value(&ev))
                />
                <select
                    prop:value=move || form.get().qualification
                    on:change=move |ev| form.update(|f| f.qualification = event_target_value(&ev))
                >
                    {QUALIFICATIONS
                        .iter()
                        .copied()
                        .map(|q| {
                            let label = if q.is_empty() { "Qualification" } else { q };
                            view! { <option value=q>{label}</option> }
                        })
                        .collect_view()}
                </select>
                <Show when=move || form.get().shows_other_field()>
                    <input
                        type="text"
                        placeholder="Specify qualification"
                        prop:value=move || form.get().qualification_other
                        on:input=move |ev| form.update(|f| f.qualification_other = event_target_value(&ev))
                    />
                </Show>
                <input type="file" accept="image/*" node_ref=photo_ref/>
                <button type="submit" disabled=move || list.get().submitting>
                    "Add Candidate"
                </button>
            </form>
            <StatusLine status=status/>
            <Show when=move || list.get().error.is_some()>
                <p class="status-line status status--error">{move || list.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || list.get().shows_empty_placeholder()>
                <p class="candidate-grid__empty">{NO_CANDIDATES}</p>
            </Show>
            <div class="candidate-grid">
                <For
                    each=move || list.get().cards
                    key=|card| card.id
                    children=move |card| view! { <CandidateCard card=card on_delete=on_delete/> }
                />
            </div>
        </div>
    }
}
