//! Shared header for authenticated pages: branding plus logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::session;

#[component]
pub fn PageHeader(
    /// Page title shown next to the logo.
    title: &'static str,
    /// One-line description under the title.
    subtitle: &'static str,
) -> impl IntoView {
    let navigate = use_navigate();

    let on_logout = move |_| {
        // Clear the cookie locally first so the guard mirror reports
        // unauthenticated immediately, then tell the server.
        session::clear_auth_cookie();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async {
            crate::net::api::logout().await;
        });
        navigate(routing::LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <header class="page-header">
            <div class="page-header__brand">
                <img src="/can-logo.png" alt="CAN Financial Solutions" class="page-header__logo"/>
                <div>
                    <div class="page-header__title">{title}</div>
                    <div class="page-header__subtitle">{subtitle}</div>
                </div>
            </div>
            <button type="button" class="page-header__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
