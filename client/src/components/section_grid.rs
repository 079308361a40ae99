//! Section progress grid for the FNA form.

use leptos::prelude::*;

use crate::state::fna::{FnaAction, FnaState, SECTION_TITLES};

#[component]
pub fn SectionGrid(state: RwSignal<FnaState>) -> impl IntoView {
    view! {
        <div class="section-grid">
            {SECTION_TITLES
                .iter()
                .enumerate()
                .map(|(index, title)| {
                    let section = u8::try_from(index + 1).unwrap_or(u8::MAX);
                    let is_current = move || state.with(|s| s.current_section == section);
                    view! {
                        <button
                            type="button"
                            class="section-card"
                            class=("section-card--current", is_current)
                            on:click=move |_| state.update(|s| s.apply(FnaAction::SelectSection(section)))
                        >
                            <div class="section-card__number">{format!("Section {section}")}</div>
                            <div class="section-card__title">{*title}</div>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
