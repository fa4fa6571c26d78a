use axum::extract::State;

use landing::links::LinkResolver;

use super::{entries, DESCRIPTION, LANGUAGE, TITLE};

pub const URL_PATH: &str = "/feed.json";

pub async fn handler(State(links): State<LinkResolver>) -> axum::Json<json_feed_model::Feed> {
    axum::Json(feed(&links))
}

pub fn feed(links: &LinkResolver) -> json_feed_model::Feed {
    let mut feed = json_feed_model::Feed::new();
    feed.set_title(TITLE);
    feed.set_home_page_url(links.repo_url());
    feed.set_description(DESCRIPTION);
    feed.set_language(LANGUAGE);
    let mut items: Vec<json_feed_model::Item> = vec![];
    for entry in entries(links) {
        let mut item = json_feed_model::Item::new();
        item.set_id(&entry.id);
        item.set_url(&entry.url);
        item.set_title(&entry.title);
        item.set_content_text(&entry.description);
        if !entry.tags.is_empty() {
            item.set_tags(entry.tags);
        }
        items.push(item);
    }
    feed.set_items(items);

    feed
}

#[cfg(test)]
mod tests {
    use landing::catalog::Catalog;
    use landing::config::RepoUrl;
    use landing::links::LinkResolver;

    #[test]
    fn feed_lists_every_lesson() {
        let links = LinkResolver::new(
            RepoUrl::resolve(Some("https://example.com/org/repo")),
            Catalog::learning_path(),
        );
        let feed = serde_json::to_value(super::feed(&links)).unwrap();

        assert_eq!("https://example.com/org/repo", feed["home_page_url"]);
        let items = feed["items"].as_array().unwrap();
        assert_eq!(11, items.len());
        assert_eq!(
            "https://example.com/org/repo/tree/main/examples/10_aot-agent",
            items[9]["url"]
        );
        assert_eq!("Expert", items[9]["tags"][0]);
        assert_eq!(
            "\"SQL for Reasoning\" \u{2014} structured, executable plans.",
            items[9]["content_text"]
        );
        assert!(items.iter().all(|item| item.get("content_html").is_none()));
        assert_eq!("https://example.com/org/repo/tree/main/tutorial", items[10]["url"]);
    }
}
