//! Dashboard page — the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the advisor's client roster with links into prospect detail and
//! the FNA form. Protected: the guard mirror re-checks the session on
//! mount for client-side transitions that bypass the server middleware.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::page_header::PageHeader;
use crate::state::fna::CLIENT_ROSTER;
use crate::util::guard::install_route_guard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let navigate = use_navigate();
    install_route_guard(navigate);

    view! {
        <div class="dashboard-page">
            <PageHeader
                title="Advisor Dashboard"
                subtitle="Pick a client to review, or start a Financial Needs Analysis."
            />

            <section class="dashboard-panel">
                <h3 class="dashboard-heading">"Clients"</h3>
                <ul class="client-list">
                    {CLIENT_ROSTER
                        .iter()
                        .map(|(id, name)| {
                            view! {
                                <li class="client-list__row">
                                    <span class="client-list__name">{*name}</span>
                                    <a href=format!("/prospect/{id}") class="client-list__link">
                                        "View prospect"
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <a href="/fna" class="dashboard-cta">
                    "Start Financial Needs Analysis"
                </a>
            </section>
        </div>
    }
}
