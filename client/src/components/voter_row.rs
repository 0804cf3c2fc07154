//! Table row for one registered voter.
//!
//! Voters who have already voted get a dash instead of a delete button.

use leptos::prelude::*;

use crate::state::voters::VoterRow as Row;

#[component]
pub fn VoterRow(row: Row, on_delete: Callback<i64>) -> impl IntoView {
    let id = row.id;
    let status_class = if row.has_voted { "voter-status voter-status--voted" } else { "voter-status" };
    let action = if row.can_delete() {
        view! {
            <button class="voter-row__delete" on:click=move |_| on_delete.run(id)>
                "Delete"
            </button>
        }
        .into_any()
    } else {
        view! { <span class="voter-row__locked">"—"</span> }.into_any()
    };

    view! {
        <tr class="voter-row">
            <td>{row.id}</td>
            <td>{row.name.clone()}</td>
            <td>{row.enrollment.clone()}</td>
            <td class=status_class>{row.status_label()}</td>
            <td>{action}</td>
        </tr>
    }
}
