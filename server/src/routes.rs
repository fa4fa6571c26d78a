use axum::extract::FromRef;
use axum::routing::get;

use landing::links::LinkResolver;

use crate::feeds;

/// Routes served next to the Leptos pages, for any state that can hand out
/// a [`LinkResolver`].
pub fn routes<S>() -> axum::Router<S>
where
    S: Clone + Send + Sync + 'static,
    LinkResolver: FromRef<S>,
{
    axum::Router::new()
        .route(feeds::json::URL_PATH, get(feeds::json::handler))
        .route(feeds::rss::URL_PATH, get(feeds::rss::handler))
}
