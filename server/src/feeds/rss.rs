use axum::extract::State;
use axum::response::IntoResponse;

use landing::links::LinkResolver;

use super::{entries, DESCRIPTION, LANGUAGE, TITLE};

pub const URL_PATH: &str = "/feed.rss";

pub async fn handler(State(links): State<LinkResolver>) -> axum::response::Response {
    (
        axum::http::StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "application/rss+xml")],
        channel(&links).to_string(),
    )
        .into_response()
}

pub fn channel(links: &LinkResolver) -> rss::Channel {
    let items = entries(links)
        .into_iter()
        .map(|entry| {
            let mut item = rss::Item::default();
            item.set_title(entry.title);
            item.set_link(entry.url);
            item.set_description(entry.description);
            item.set_categories(
                entry
                    .tags
                    .into_iter()
                    .map(|name| rss::Category { name, domain: None })
                    .collect::<Vec<rss::Category>>(),
            );
            item
        })
        .collect::<Vec<rss::Item>>();

    rss::ChannelBuilder::default()
        .title(TITLE)
        .link(links.repo_url())
        .description(DESCRIPTION)
        .language(String::from(LANGUAGE))
        .items(items)
        .build()
}
