//! Admin dashboard: create or delete the election and view the tally.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is at most one active election. Candidate and voter management are
//! locked until one exists; the nav reads `ElectionState::unlocked`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::admin_nav::AdminNav;
use crate::components::status_line::StatusLine;
use crate::state::election::{ElectionState, validate_title};
use crate::state::status::StatusMessage;
use crate::util::auth::install_admin_redirect;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let election = RwSignal::new(ElectionState::default());
    let title = RwSignal::new(String::new());
    install_admin_redirect(use_navigate());

    #[cfg(feature = "hydrate")]
    {
        if !crate::util::auth::should_redirect_admin(&crate::util::storage::BrowserSession) {
            leptos::task::spawn_local(async move {
                match crate::net::api::current_election().await {
                    Ok(current) => election.update(|s| s.current = current),
                    Err(e) => {
                        leptos::logging::warn!("current election lookup failed: {e}");
                        election.update(|s| s.status = StatusMessage::error(e.user_message("Server error")));
                    }
                }
            });
        }
    }

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if election.get().busy {
            return;
        }
        let value = match validate_title(&title.get()) {
            Ok(value) => value,
            Err(msg) => {
                election.update(|s| s.status = StatusMessage::error(msg));
                return;
            }
        };
        election.update(|s| {
            s.busy = true;
            s.status = StatusMessage::info("Creating election...");
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_election(&value).await {
                Ok(resp) => {
                    election.update(|s| s.apply_created(&value, resp));
                    title.set(String::new());
                }
                Err(e) => {
                    leptos::logging::warn!("create election failed: {e}");
                    election.update(|s| s.apply_create_error(&e));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = value;
    };

    let on_delete = move |_| {
        let Some(current) = election.get().current else {
            return;
        };
        if !crate::util::browser::confirm(&format!("Delete election \"{}\"?", current.title)) {
            return;
        }
        election.update(|s| s.busy = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::delete_election(current.id).await;
            election.update(|s| s.apply_deleted(outcome));
        });
    };

    let on_results = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_results().await;
            election.update(|s| s.apply_results(outcome));
        });
    };

    let unlocked = Signal::derive(move || election.get().unlocked());
    let status = Signal::derive(move || election.get().status);

    view! {
        <div class="admin-page">
            <AdminNav unlocked=unlocked/>
            <h1>"Election Manager"</h1>
            <Show when=move || election.get().banner().is_some()>
                <p class="election-banner">{move || election.get().banner().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || unlocked.get()
                fallback=move || {
                    view! {
                        <form class="election-form" on:submit=on_create>
                            <input
                                class="election-form__title"
                                type="text"
                                placeholder="Election name"
                                prop:value=move || title.get()
                                on:input=move |ev| title.set(event_target_value(&ev))
                            />
                            <button type="submit" disabled=move || election.get().busy>
                                "Create Election"
                            </button>
                        </form>
                    }
                }
            >
                <div class="election-actions">
                    <button class="election-actions__results" on:click=on_results>
                        "Show results"
                    </button>
                    <button
                        class="election-actions__delete"
                        on:click=on_delete
                        disabled=move || election.get().busy
                    >
                        "Delete Election"
                    </button>
                </div>
            </Show>
            <StatusLine status=status/>
            <Show when=move || election.get().results.is_some()>
                <table class="results-table">
                    <thead>
                        <tr>
                            <th>"Candidate"</th>
                            <th>"Votes"</th>
                            <th>"Active"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || election.get().results.unwrap_or_default()
                            key=|row| row.candidate_id
                            children=move |row| {
                                view! {
                                    <tr>
                                        <td>{row.name}</td>
                                        <td>{row.vote_count}</td>
                                        <td>{if row.is_active { "Yes" } else { "No" }}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
