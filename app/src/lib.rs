pub mod catalog;
pub mod components;
pub mod config;
pub mod context;
pub mod errors;
pub mod links;
pub mod pages;

pub use errors::{Error, Result};

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    SsrMode, StaticSegment,
};

pub const TITLE: &str = "AI Agents From Scratch \u{2014} Interactive Tutorial";
pub const DESCRIPTION: &str = "Learn to build AI agents locally without frameworks. Understand function calling, memory, and ReAct patterns from first principles.";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=DESCRIPTION/>
                <AutoReload options=options.clone() />
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
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/ai-agents-site.css"/>

        <Title text=TITLE/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                // The page is static, render it fully on the server.
                <Route
                    path=StaticSegment("")
                    view=pages::home::Index
                    ssr=SsrMode::Async
                />
            </Routes>
        </Router>
    }
}
