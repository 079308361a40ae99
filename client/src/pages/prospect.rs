//! Prospect detail page — placeholder profile under `/prospect/{id}`.
//!
//! Protected sub-path route; exercises the guard's literal prefix
//! semantics (any `/prospect...` path requires authentication).

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::page_header::PageHeader;
use crate::state::fna::client_name;
use crate::util::guard::install_route_guard;

#[component]
pub fn ProspectPage() -> impl IntoView {
    let navigate = use_navigate();
    install_route_guard(navigate);

    let params = use_params_map();
    let heading = move || {
        let id = params.get().get("id").unwrap_or_default();
        client_name(&id).map_or_else(|| format!("Prospect {id}"), str::to_owned)
    };

    view! {
        <div class="prospect-page">
            <PageHeader
                title="Prospect"
                subtitle="Prospect profile and FNA history will appear here."
            />

            <section class="prospect-panel">
                <h3 class="prospect-heading">{heading}</h3>
                <p class="prospect-placeholder">
                    "Profile details for this prospect will go here..."
                </p>
                <a href="/fna" class="prospect-cta">
                    "Start FNA for this client"
                </a>
            </section>
        </div>
    }
}
