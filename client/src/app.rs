//! Root application component with routing.
//!
//! Every client route lives under `/app` so it never collides with the
//! backend paths the host proxies (`/admin/*`, `/voter/*`).

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin_dashboard::AdminDashboardPage, admin_login::AdminLoginPage, admin_setup::AdminSetupPage,
    candidates::CandidatesPage, landing::LandingPage, vote::VotePage, voter_login::VoterLoginPage,
    voters::VotersPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/ballot-desk.css"/>
        <Title text="Ballot Desk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("app") view=LandingPage/>
                <Route path=(StaticSegment("app"), StaticSegment("admin")) view=AdminDashboardPage/>
                <Route path=(StaticSegment("app"), StaticSegment("admin"), StaticSegment("setup")) view=AdminSetupPage/>
                <Route path=(StaticSegment("app"), StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                <Route
                    path=(StaticSegment("app"), StaticSegment("admin"), StaticSegment("candidates"))
                    view=CandidatesPage
                />
                <Route path=(StaticSegment("app"), StaticSegment("admin"), StaticSegment("voters")) view=VotersPage/>
                <Route path=(StaticSegment("app"), StaticSegment("voter"), StaticSegment("login")) view=VoterLoginPage/>
                <Route path=(StaticSegment("app"), StaticSegment("vote")) view=VotePage/>
            </Routes>
        </Router>
    }
}
