//! Application root: document shell, context provision, and routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session service, auth signal, filter state, and toast stack are all
//! constructed here and provided via context, so every page shares one
//! instance of each. The service restores the persisted session in a mount
//! effect; SSR renders the loading state and hydration settles it.

use std::sync::Arc;

use leptos::hydration::{AutoReload, HydrationScripts};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::toast_stack::ToastStack;
use crate::pages::admin::AdminDashboardPage;
use crate::pages::home::HomePage;
use crate::pages::profile::ProfilePage;
use crate::pages::prompt_detail::PromptDetailPage;
use crate::pages::signin::SignInPage;
use crate::pages::signup::SignUpPage;
use crate::pages::submit::SubmitPromptPage;
use crate::session::service::SessionService;
use crate::session::store::BrowserStore;
use crate::state::filters::FilterState;
use crate::state::toasts::ToastState;

/// HTML shell rendered by the server.
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

/// Application root component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionService::new(Arc::new(BrowserStore));
    provide_context(session.clone());
    provide_context(session.state());
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(RwSignal::new(FilterState::default()));

    // Settle the persisted session once the app is mounted in a browser.
    let restore = session.clone();
    Effect::new(move || restore.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/promptlib.css"/>
        <Title text="Prompt Library"/>
        <Router>
            <Routes fallback=|| "Page not found.">
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/prompt/:id") view=PromptDetailPage/>
                <Route path=path!("/submit") view=SubmitPromptPage/>
                <Route path=path!("/signin") view=SignInPage/>
                <Route path=path!("/signup") view=SignUpPage/>
                <Route path=path!("/profile") view=ProfilePage/>
                <Route path=path!("/admin") view=AdminDashboardPage/>
            </Routes>
            <ToastStack/>
        </Router>
    }
}
