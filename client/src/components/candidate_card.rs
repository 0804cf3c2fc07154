//! Card for one candidate in the admin candidate grid.

use leptos::prelude::*;

use crate::state::candidates::CandidateCard as Card;

#[component]
pub fn CandidateCard(card: Card, on_delete: Callback<i64>) -> impl IntoView {
    let id = card.id;
    view! {
        <div class="candidate-card">
            <img class="candidate-card__photo" src=card.photo_url alt=card.name.clone()/>
            <h3 class="candidate-card__name">{card.name}</h3>
            <p class="candidate-card__party">{card.party}</p>
            <p class="candidate-card__meta">"Age: " {card.age}</p>
            <p class="candidate-card__meta">"Qualification: " {card.qualification}</p>
            <button class="candidate-card__delete" on:click=move |_| on_delete.run(id)>
                "Delete"
            </button>
        </div>
    }
}
