//! Startup configuration shared by the server and the browser bundle.

use serde::{Deserialize, Serialize};

pub const DEFAULT_REPO_URL: &str = "https://github.com/ali-0407/ai-agents-build";

/// Name of the environment variable overriding [`DEFAULT_REPO_URL`].
///
/// The server reads it when it starts, the frontend reads it at build time
/// with `option_env!` (which needs the literal name).
pub const REPO_URL_ENV: &str = "AGENTS_REPO_URL";

/// Base address of the repository holding the tutorial sources.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RepoUrl(String);

impl RepoUrl {
    /// Use `override_url` when it is set and non-empty, otherwise the default.
    ///
    /// The override is taken as is: a malformed value only yields broken
    /// links, see [`RepoUrl::looks_absolute`] to warn about it.
    pub fn resolve(override_url: Option<&str>) -> Self {
        match override_url {
            Some(url) if !url.is_empty() => Self(String::from(url)),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn looks_absolute(&self) -> bool {
        self.0.starts_with("https://") || self.0.starts_with("http://")
    }
}

impl Default for RepoUrl {
    fn default() -> Self {
        Self(String::from(DEFAULT_REPO_URL))
    }
}

impl std::fmt::Display for RepoUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RepoUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
