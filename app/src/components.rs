use leptos::prelude::*;

use crate::context::use_links;

pub const SITE_NAME: &str = "AI Agents From Scratch";

#[component]
pub fn Header() -> impl IntoView {
    let repo_url = use_links().repo_url().to_string();

    view! {
        <header class="site-header">
            <div class="container">
                <span class="site-name">{SITE_NAME}</span>
                <a class="button button-outline" href=repo_url target="_blank" rel="noopener noreferrer">
                    "View Source Code"
                </a>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let repo_url = use_links().repo_url().to_string();

    view! {
        <footer class="site-footer">
            <a href=repo_url target="_blank" rel="noopener noreferrer">"View source on GitHub"</a>
            <span class="separator">{"\u{b7}"}</span>
            <span>{SITE_NAME} " \u{2014} Learn by building."</span>
        </footer>
    }
}

/// A bulleted list of static items.
#[component]
pub fn Bullets(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="bullets">
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
}

/// A list of static items, each prefixed with a check mark.
#[component]
pub fn Checklist(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="checklist">
            {items
                .iter()
                .map(|item| view! { <li><span class="check">{"\u{2713}"}</span> " " {*item}</li> })
                .collect_view()}
        </ul>
    }
}
