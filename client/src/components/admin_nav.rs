//! Admin header with section links and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::util::auth::logout_admin;

/// `unlocked` controls whether the candidate and voter links are active.
#[component]
pub fn AdminNav(#[prop(into)] unlocked: Signal<bool>) -> impl IntoView {
    let navigate = use_navigate();
    let on_logout = move |_| logout_admin(&navigate);

    view! {
        <nav class="admin-nav">
            <a class="admin-nav__link" href="/app/admin">"Dashboard"</a>
            <a
                class="admin-nav__link"
                class:admin-nav__link--locked=move || !unlocked.get()
                href=move || if unlocked.get() { "/app/admin/candidates" } else { "#" }
            >
                "Candidates"
            </a>
            <a
                class="admin-nav__link"
                class:admin-nav__link--locked=move || !unlocked.get()
                href=move || if unlocked.get() { "/app/admin/voters" } else { "#" }
            >
                "Voters"
            </a>
            <button class="admin-nav__logout" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}
