//! Financial Needs Analysis form page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. The advisor picks a client, then works through six
//! placeholder sections; section selection, save feedback, and the
//! transient banner all go through the `FnaState` reducer. Nothing is
//! persisted — answers live only while the page is mounted.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::banner::TransientBanner;
use crate::components::page_header::PageHeader;
use crate::components::section_grid::SectionGrid;
use crate::state::fna::{CLIENT_ROSTER, FnaAction, FnaState};
use crate::util::guard::install_route_guard;

#[component]
pub fn FnaPage() -> impl IntoView {
    let navigate = use_navigate();
    install_route_guard(navigate);

    let state = RwSignal::new(FnaState::default());

    let has_client = move || state.with(|s| s.selected_client.is_some());
    let section_heading = move || {
        state.with(|s| format!("Section {}: {}", s.current_section, s.current_section_title()))
    };

    let on_select_client = move |ev| {
        state.update(|s| s.apply(FnaAction::SelectClient(event_target_value(&ev))));
    };
    let on_save = move |_| {
        state.update(|s| s.apply(FnaAction::ShowSuccess("Section saved successfully!".to_owned())));
    };
    let on_next = move |_| {
        state.update(|s| {
            if s.has_next_section() {
                s.apply(FnaAction::NextSection);
                s.apply(FnaAction::ShowSuccess("Moving to next section".to_owned()));
            }
        });
    };

    view! {
        <div class="fna-page">
            <PageHeader
                title="Financial Needs Analysis"
                subtitle="Select a client and complete all six sections of the FNA."
            />
            <TransientBanner state=state/>

            <section class="fna-panel">
                <label class="fna-label" for="client-select">"Select Client"</label>
                <select
                    id="client-select"
                    class="fna-select"
                    prop:value=move || state.with(|s| s.selected_client.clone().unwrap_or_default())
                    on:change=on_select_client
                >
                    <option value="">"Choose a client..."</option>
                    {CLIENT_ROSTER
                        .iter()
                        .map(|(id, name)| view! { <option value=*id>{*name}</option> })
                        .collect_view()}
                </select>

                <Show
                    when=has_client
                    fallback=|| {
                        view! {
                            <p class="fna-empty">
                                "Please select a client to begin the Financial Needs Analysis"
                            </p>
                        }
                    }
                >
                    <h3 class="fna-heading">"FNA Sections Progress"</h3>
                    <SectionGrid state=state/>

                    <div class="fna-section-panel">
                        <h4 class="fna-section-panel__heading">{section_heading}</h4>
                        <p class="fna-section-panel__placeholder">
                            "Form fields for this section will go here..."
                        </p>
                        <div class="fna-section-panel__actions">
                            <button type="button" class="fna-button fna-button--save" on:click=on_save>
                                "Save Section"
                            </button>
                            <button
                                type="button"
                                class="fna-button fna-button--next"
                                disabled=move || state.with(|s| !s.has_next_section())
                                on:click=on_next
                            >
                                "Next Section"
                            </button>
                        </div>
                    </div>
                </Show>
            </section>
        </div>
    }
}
