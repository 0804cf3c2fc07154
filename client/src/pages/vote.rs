//! Ballot page for a face-verified voter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requires a `VoterSession`. Loads the active election's ballot, lets the
//! voter pick one candidate, and submits the candidate's on-chain id. After
//! a recorded vote the voter identity is cleared from the tab.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::ballot::{BallotPhase, BallotState, NO_CANDIDATES};
use crate::state::session::VoterSession;
use crate::util::auth::install_voter_redirect;
use crate::util::storage::BrowserSession;

#[component]
pub fn VotePage() -> impl IntoView {
    let ballot = RwSignal::new(BallotState::default());
    let greeting = RwSignal::new(String::new());
    install_voter_redirect(use_navigate());
    Effect::new(move || {
        if let Some(voter) = VoterSession::load(&BrowserSession) {
            greeting.set(format!("Welcome, {}", voter.display_name()));
        }
    });

    #[cfg(feature = "hydrate")]
    {
        if !crate::util::auth::should_redirect_voter(&BrowserSession) {
            leptos::task::spawn_local(async move {
                let election = match crate::net::api::current_election().await {
                    Ok(Some(election)) => election,
                    Ok(None) => {
                        ballot.update(|s| s.phase = BallotPhase::Failed("No active election".to_owned()));
                        return;
                    }
                    Err(e) => {
                        ballot.update(|s| s.phase = BallotPhase::Failed(e.user_message("Server error")));
                        return;
                    }
                };
                match crate::net::api::fetch_ballot(election.id).await {
                    Ok(candidates) => ballot.update(|s| s.load(&candidates)),
                    Err(e) => ballot.update(|s| s.phase = BallotPhase::Failed(e.user_message("Failed to load ballot"))),
                }
            });
        }
    }

    let on_vote = move |_| {
        let state = ballot.get();
        if !state.can_submit() {
            return;
        }
        let Ok(choice) = state.selection().cloned() else {
            return;
        };
        let Some(voter_id) = VoterSession::load(&BrowserSession).and_then(|v| v.voter_id_number()) else {
            return;
        };
        if !crate::util::browser::confirm(&format!("Cast your vote for {}?", choice.name)) {
            return;
        }
        ballot.update(|s| s.phase = BallotPhase::Submitting);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::cast_vote(voter_id, choice.on_chain_id).await {
                Ok(tx_hash) => {
                    VoterSession::clear(&BrowserSession);
                    ballot.update(|s| s.phase = BallotPhase::Cast(tx_hash));
                }
                Err(e) => {
                    leptos::logging::warn!("vote failed: {e}");
                    ballot.update(|s| s.phase = BallotPhase::Failed(e.user_message("Server error")));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = voter_id;
    };

    view! {
        <div class="ballot-page">
            <h1>"Cast Your Vote"</h1>
            <p class="ballot-page__greeting">{move || greeting.get()}</p>
            {move || match ballot.get().phase {
                BallotPhase::Loading => view! { <p>"Loading ballot..."</p> }.into_any(),
                BallotPhase::Cast(tx_hash) => {
                    view! {
                        <div class="ballot-receipt">
                            <p>"Your vote has been recorded."</p>
                            {tx_hash
                                .map(|hash| {
                                    view! { <p class="ballot-receipt__tx">"Transaction: " {hash}</p> }
                                })}
                        </div>
                    }
                        .into_any()
                }
                BallotPhase::Failed(message) => {
                    view! { <p class="status-line status status--error">{message}</p> }.into_any()
                }
                BallotPhase::Choosing | BallotPhase::Submitting => ().into_any(),
            }}
            <Show when=move || {
                let state = ballot.get();
                !state.is_closed() && state.phase != BallotPhase::Loading
            }>
                <Show
                    when=move || !ballot.get().options.is_empty()
                    fallback=|| view! { <p>{NO_CANDIDATES}</p> }
                >
                    <div class="ballot-options">
                        <For
                            each=move || ballot.get().options
                            key=|option| option.id
                            children=move |option| {
                                let id = option.id;
                                view! {
                                    <label
                                        class="ballot-option"
                                        class:ballot-option--selected=move || ballot.get().selected == Some(id)
                                    >
                                        <input
                                            type="radio"
                                            name="ballot"
                                            prop:checked=move || ballot.get().selected == Some(id)
                                            on:change=move |_| ballot.update(|s| s.select(id))
                                        />
                                        <img class="ballot-option__photo" src=option.photo_url alt=option.name.clone()/>
                                        <span class="ballot-option__name">{option.name}</span>
                                        <span class="ballot-option__party">{option.party}</span>
                                    </label>
                                }
                            }
                        />
                    </div>
                    <button
                        class="ballot-submit"
                        on:click=on_vote
                        disabled=move || !ballot.get().can_submit()
                    >
                        {move || if ballot.get().phase == BallotPhase::Submitting { "Submitting..." } else { "Submit Vote" }}
                    </button>
                </Show>
            </Show>
        </div>
    }
}
