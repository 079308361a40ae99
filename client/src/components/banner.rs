//! Transient message banner.
//!
//! DESIGN
//! ======
//! Fire-and-forget auto-clear: each visible banner schedules a timeout
//! that feeds `ClearBanner` back into the reducer. A newer banner cancels
//! the pending timeout and starts its own — last write wins, nothing is
//! queued.

use leptos::prelude::*;

use crate::state::fna::{Banner, FnaState};

#[component]
pub fn TransientBanner(state: RwSignal<FnaState>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;

        use crate::state::fna::{BANNER_CLEAR_MS, FnaAction};

        let pending = StoredValue::new_local(None::<Timeout>);
        Effect::new(move || {
            let visible = state.with(|s| s.banner.is_visible());
            // The latest banner owns the clock.
            pending.update_value(|slot| {
                if let Some(timeout) = slot.take() {
                    timeout.cancel();
                }
            });
            if visible {
                let timeout = Timeout::new(BANNER_CLEAR_MS, move || {
                    state.update(|s| s.apply(FnaAction::ClearBanner));
                });
                pending.set_value(Some(timeout));
            }
        });
    }

    view! {
        <Show when=move || state.with(|s| s.banner.is_visible())>
            {move || match state.with(|s| s.banner.clone()) {
                Banner::Error(text) => {
                    view! { <div class="banner banner--error">{text}</div> }.into_any()
                }
                Banner::Success(text) => {
                    view! { <div class="banner banner--success">{text}</div> }.into_any()
                }
                Banner::None => view! { <div class="banner"></div> }.into_any(),
            }}
        </Show>
    }
}
