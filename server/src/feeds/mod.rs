//! The learning path as syndication feeds, one entry per lesson plus one for
//! the follow-on curriculum.

pub mod json;
pub mod rss;

use landing::links::LinkResolver;

pub const DESCRIPTION: &str = landing::DESCRIPTION;
pub const LANGUAGE: &str = "en";
pub const TITLE: &str = "AI Agents From Scratch :: Learning Path";

pub struct Entry {
    pub id: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

pub fn entries(links: &LinkResolver) -> Vec<Entry> {
    let catalog = links.catalog();
    let phase = catalog.secondary_phase();
    catalog
        .steps()
        .iter()
        .map(|step| Entry {
            id: step.folder.clone(),
            url: links.example_url(&step.folder),
            title: format!("{}. {}: {}", step.number, step.title, step.subtitle),
            description: step.description.clone(),
            tags: step.tag.iter().cloned().collect(),
        })
        .chain(std::iter::once(Entry {
            id: phase.path.clone(),
            url: links.secondary_phase_url(),
            title: format!("{}: {}", phase.title, phase.subtitle),
            description: phase.description.clone(),
            tags: vec![],
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use landing::links::LinkResolver;

    #[test]
    fn entries_follow_the_learning_path() {
        let links = LinkResolver::default();
        let entries = super::entries(&links);

        assert_eq!(links.catalog().len() + 1, entries.len());
        assert_eq!("01_intro", entries[0].id);
        assert_eq!("1. Foundation: Basic LLM Interaction", entries[0].title);
        assert!(entries[0].tags.is_empty());
        assert_eq!(vec![String::from("Key concept")], entries[6].tags);
        assert_eq!(
            "https://github.com/ali-0407/ai-agents-build/tree/main/examples/07_simple-agent",
            entries[6].url
        );

        let last = entries.last().unwrap();
        assert_eq!("tutorial", last.id);
        assert_eq!("Phase 2: Building a Production Framework", last.title);
        assert_eq!(links.secondary_phase_url(), last.url);
    }
}
