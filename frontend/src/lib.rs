#![recursion_limit = "256"]

// The repository override is read at build time here, the server reads the
// same variable when it starts: build and run with the same value or the
// hydrated links will differ from the rendered ones.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use landing::catalog::Catalog;
    use landing::config::RepoUrl;
    use landing::links::LinkResolver;
    use landing::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    if let Err(error) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("Could not initialize logging: {}", error);
    }

    let links = LinkResolver::new(
        RepoUrl::resolve(option_env!("AGENTS_REPO_URL")),
        Catalog::learning_path(),
    );
    leptos::mount::hydrate_body(move || {
        provide_context(links);
        view! { <App/> }
    });
}
