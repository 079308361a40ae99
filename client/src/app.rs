//! Application shell and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route paths registered here are the same ones the server-side guard
//! classifies: `/auth` is the public login surface, everything under
//! `/dashboard`, `/fna`, and `/prospect` is protected. Each protected page
//! installs the client-side guard mirror on mount.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::dashboard::DashboardPage;
use crate::pages::fna::FnaPage;
use crate::pages::login::LoginPage;
use crate::pages::prospect::ProspectPage;

/// HTML document shell used by SSR.
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

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/canfs.css"/>
        <Title text="CAN Financial Solutions — FNA"/>
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/auth") view=LoginPage/>
                <Route path=path!("/dashboard") view=DashboardPage/>
                <Route path=path!("/fna") view=FnaPage/>
                <Route path=path!("/prospect/:id") view=ProspectPage/>
            </Routes>
        </Router>
    }
}
