use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::RepoUrl;
use crate::{Error, Result};

/// Lesson 1 always points at this folder, whatever the first catalog entry is.
pub const FIRST_LESSON_FOLDER: &str = "01_intro";

/// Derives outbound links to the tutorial sources from the repository
/// address and the learning path, both frozen at startup.
#[derive(Clone, Debug, Default)]
pub struct LinkResolver {
    repo_url: RepoUrl,
    catalog: Arc<Catalog>,
}

impl LinkResolver {
    pub fn new(repo_url: RepoUrl, catalog: Catalog) -> Self {
        Self {
            repo_url,
            catalog: Arc::new(catalog),
        }
    }

    pub fn repo_url(&self) -> &str {
        self.repo_url.as_str()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Link to an example folder. The folder is not checked against the catalog.
    pub fn example_url(&self, folder: &str) -> String {
        format!("{}/tree/main/examples/{}", self.repo_url, folder)
    }

    /// Link to the follow-on curriculum.
    pub fn secondary_phase_url(&self) -> String {
        format!(
            "{}/tree/main/{}",
            self.repo_url,
            self.catalog.secondary_phase().path
        )
    }

    /// Link to lesson `number` (1-based).
    ///
    /// Numbers past the end of the learning path all lead to the secondary
    /// phase; numbers below 1 are rejected with [`Error::OutOfRange`].
    pub fn lesson_url(&self, number: i64) -> Result<String> {
        if number < 1 {
            return Err(Error::OutOfRange {
                number,
                len: self.catalog.len(),
            });
        }
        if number == 1 {
            return Ok(self.example_url(FIRST_LESSON_FOLDER));
        }

        let step = usize::try_from(number)
            .ok()
            .and_then(|number| self.catalog.get(number));
        Ok(match step {
            Some(step) => self.example_url(&step.folder),
            None => self.secondary_phase_url(),
        })
    }
}
