#![recursion_limit = "256"]

use anyhow::Context as _;
use leptos::prelude::*;

use landing::catalog::Catalog;
use landing::config::{RepoUrl, REPO_URL_ENV};
use landing::context::Context;
use landing::links::LinkResolver;

mod feeds;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let conf = get_configuration(None).context("Could not load the Leptos configuration")?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;

    let repo_url = RepoUrl::resolve(std::env::var(REPO_URL_ENV).ok().as_deref());
    if !repo_url.looks_absolute() {
        log::warn!(
            "{}=\"{}\" does not look like an absolute URL, tutorial links will be broken",
            REPO_URL_ENV,
            repo_url
        );
    }
    log::info!("tutorial links point to {}", repo_url);

    let ctx = Context {
        leptos_options: leptos_options.clone(),
        links: LinkResolver::new(repo_url, Catalog::learning_path()),
    };
    // Generate the list of routes in your Leptos App
    let leptos_routes = generate_route_list(landing::App);
    let ctx_fn = {
        let ctx = ctx.clone();
        move || provide_context(ctx.links.clone())
    };
    let app_fn = {
        let ctx = ctx.clone();
        move || landing::shell(ctx.leptos_options.clone())
    };

    let app = routes::routes::<Context>()
        .leptos_routes_with_context(&ctx, leptos_routes, ctx_fn, app_fn)
        .fallback(leptos_axum::file_and_error_handler::<Context, _>(landing::shell))
        .with_state(ctx);

    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}
