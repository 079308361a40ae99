//! Login page — advisor access-code entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only public page. Submits the access code to the auth API; the
//! server answers by setting the session cookie, after which the page does
//! a full navigation to the `next` target so the server-side guard sees
//! the fresh cookie. Already-authenticated visitors are bounced to the
//! dashboard by the guard mirror.

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::util::guard::install_route_guard;

/// Trimmed access code, or a form message when empty.
fn validate_access_code_input(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Enter your advisor access code first.");
    }
    Ok(trimmed.to_owned())
}

/// Post-login destination: the `next` query parameter when present,
/// otherwise the default authenticated landing route.
fn next_target(next_param: Option<String>) -> String {
    match next_param {
        Some(path) if !path.is_empty() => path,
        _ => routing::HOME_ROUTE.to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();
    install_route_guard(navigate);

    let query = use_query_map();
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let code_value = match validate_access_code_input(&code.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let target = next_target(query.get_untracked().get(routing::NEXT_PARAM));
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&code_value).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&target);
                    }
                }
                Err(message) => {
                    info.set(message);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (code_value, target);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"CAN Financial Solutions"</h1>
                <p class="login-card__subtitle">"Financial Needs Analysis — Advisor Sign In"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Access code"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
