use landing::catalog::{Catalog, SecondaryPhase, Step};
use landing::config::RepoUrl;
use landing::links::LinkResolver;
use landing::Error;

const DEFAULT: &str = "https://github.com/ali-0407/ai-agents-build";
const OVERRIDE: &str = "https://example.com/org/repo";

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn resolver(override_url: Option<&str>) -> LinkResolver {
    LinkResolver::new(RepoUrl::resolve(override_url), Catalog::learning_path())
}

#[test]
fn example_url_is_a_template() {
    setup();

    let links = resolver(None);
    assert_eq!(
        format!("{DEFAULT}/tree/main/examples/07_simple-agent"),
        links.example_url("07_simple-agent")
    );
    // Folders missing from the catalog are not rejected.
    for folder in ["", "no-such-lesson", "a/b", "99_nope"] {
        assert_eq!(
            format!("{DEFAULT}/tree/main/examples/{folder}"),
            links.example_url(folder)
        );
    }
}

#[test]
fn lessons_within_the_catalog_use_their_folder() {
    setup();

    let links = resolver(None);
    for number in 2..=10 {
        let step = links.catalog().get(number as usize).unwrap();
        assert_eq!(
            links.example_url(&step.folder),
            links.lesson_url(number).unwrap()
        );
    }
    assert_eq!(
        format!("{DEFAULT}/tree/main/examples/10_aot-agent"),
        links.lesson_url(10).unwrap()
    );
}

#[test]
fn lesson_one_is_always_the_intro() {
    setup();

    let first = Step {
        id: 1,
        number: 1,
        title: String::from("Something else"),
        subtitle: String::from("Not the intro"),
        description: String::from("Replaced first lesson"),
        folder: String::from("00_other"),
        tag: None,
    };
    let catalog = Catalog::new(
        vec![first],
        SecondaryPhase {
            title: String::from("Next"),
            subtitle: String::from("More"),
            description: String::from("Keep going"),
            path: String::from("next"),
        },
    )
    .unwrap();
    let links = LinkResolver::new(RepoUrl::resolve(Some(OVERRIDE)), catalog);

    assert_eq!(
        format!("{OVERRIDE}/tree/main/examples/01_intro"),
        links.lesson_url(1).unwrap()
    );
    assert_eq!(
        format!("{OVERRIDE}/tree/main/next"),
        links.lesson_url(2).unwrap()
    );
}

#[test]
fn lessons_past_the_catalog_lead_to_the_tutorial() {
    setup();

    let links = resolver(Some(OVERRIDE));
    let tutorial = format!("{OVERRIDE}/tree/main/tutorial");
    assert_eq!(tutorial, links.secondary_phase_url());
    for number in [11, 12, 100, i64::MAX] {
        assert_eq!(tutorial, links.lesson_url(number).unwrap());
    }
}

#[test]
fn lessons_below_one_are_out_of_range() {
    setup();

    let links = resolver(None);
    for number in [0, -1, -10, i64::MIN] {
        assert_eq!(
            Err(Error::OutOfRange { number, len: 10 }),
            links.lesson_url(number)
        );
    }
}

#[test]
fn default_resolver_uses_the_default_repository() {
    setup();

    let links = LinkResolver::default();
    assert_eq!(DEFAULT, links.repo_url());
    assert_eq!(10, links.catalog().len());
    assert_eq!(
        format!("{DEFAULT}/tree/main/examples/01_intro"),
        links.lesson_url(1).unwrap()
    );
}

#[test]
fn malformed_override_is_passed_through() {
    setup();

    let links = resolver(Some("not a url"));
    assert_eq!("not a url/tree/main/examples/04_think", links.lesson_url(4).unwrap());
}
