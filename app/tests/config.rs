use landing::config::{RepoUrl, DEFAULT_REPO_URL};

#[test]
fn falls_back_to_the_default() {
    assert_eq!(DEFAULT_REPO_URL, RepoUrl::resolve(None).as_str());
    assert_eq!(DEFAULT_REPO_URL, RepoUrl::resolve(Some("")).as_str());
    assert_eq!(RepoUrl::default(), RepoUrl::resolve(None));
    assert_eq!(
        "https://github.com/ali-0407/ai-agents-build",
        RepoUrl::default().to_string()
    );
}

#[test]
fn override_is_kept_verbatim() {
    let url = RepoUrl::resolve(Some("https://example.com/org/repo"));
    assert_eq!("https://example.com/org/repo", url.as_str());
    assert!(url.looks_absolute());

    // Not trimmed, not validated.
    let url = RepoUrl::resolve(Some(" example.com/"));
    assert_eq!(" example.com/", url.as_str());
    assert!(!url.looks_absolute());
}
