//! GitHub Actions E2E tests

mod helper;

use std::sync::Arc;

use tempfile::TempDir;

use actions_updater::updater::{ActionsUpdater, ScanError, UpdateSuggestion};
use helper::{MockRegistry, write_workflow};

fn suggestion(reference: &str, latest: &str) -> UpdateSuggestion {
    UpdateSuggestion {
        reference: reference.to_string(),
        latest: latest.to_string(),
    }
}

#[tokio::test]
async fn scan_file_resolves_shared_repository_once_across_jobs() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_workflow(
        temp_dir.path(),
        "ci.yml",
        r#"name: CI
on: push
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v3
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
"#,
    );

    // oldest first, newest last
    let registry = Arc::new(
        MockRegistry::new().with_tags("actions/checkout", vec!["v3.6.0", "v4.0.0", "v4.2.2"]),
    );
    let mut updater = ActionsUpdater::new(registry.clone());

    let suggestions = updater.scan_file(&path).await.unwrap();

    assert_eq!(
        suggestions,
        vec![
            suggestion("actions/checkout@v3", "v4.2.2"),
            suggestion("actions/checkout@v4", "v4.2.2"),
        ]
    );
    assert_eq!(registry.calls(), vec!["actions/checkout"]);
}

#[tokio::test]
async fn scan_file_reports_nothing_for_latest_tags() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_workflow(
        temp_dir.path(),
        "ci.yml",
        r#"jobs:
  build:
    steps:
      - uses: actions/checkout@v4.2.2
      - uses: actions/setup-go@v6
"#,
    );

    let registry = Arc::new(
        MockRegistry::new()
            .with_tags("actions/checkout", vec!["v4.1.0", "v4.2.2"])
            .with_tags("actions/setup-go", vec!["v5.0.0", "v5.1.0"]),
    );
    let mut updater = ActionsUpdater::new(registry.clone());

    let suggestions = updater.scan_file(&path).await.unwrap();

    assert!(suggestions.is_empty());
    assert_eq!(
        registry.calls(),
        vec!["actions/checkout", "actions/setup-go"]
    );
}

#[tokio::test]
async fn scan_file_skips_local_and_unpinned_references() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_workflow(
        temp_dir.path(),
        "ci.yml",
        r#"jobs:
  build:
    steps:
      - uses: ./.github/actions/setup
      - uses: actions/checkout
      - uses: docker://alpine:3.18
      - run: echo done
"#,
    );

    let registry = Arc::new(MockRegistry::new());
    let mut updater = ActionsUpdater::new(registry.clone());

    let suggestions = updater.scan_file(&path).await.unwrap();

    assert!(suggestions.is_empty());
    assert!(registry.calls().is_empty());
}

#[tokio::test]
async fn cache_is_shared_across_files_in_one_run() {
    let temp_dir = TempDir::new().unwrap();
    let ci = write_workflow(
        temp_dir.path(),
        "ci.yml",
        r#"jobs:
  build:
    steps:
      - uses: actions/checkout@v3
      - uses: actions/cache/restore@v3
"#,
    );
    let release = write_workflow(
        temp_dir.path(),
        "release.yml",
        r#"jobs:
  publish:
    steps:
      - uses: actions/checkout@v4
      - uses: actions/cache/save@v4
"#,
    );

    let registry = Arc::new(
        MockRegistry::new()
            .with_tags("actions/checkout", vec!["v3.0.0", "v4.0.0"])
            .with_tags("actions/cache", vec!["v3.0.0", "v4.0.0", "v4.1.0"]),
    );
    let mut updater = ActionsUpdater::new(registry.clone());

    let first = updater.scan_file(&ci).await.unwrap();
    let second = updater.scan_file(&release).await.unwrap();

    assert_eq!(
        first,
        vec![
            suggestion("actions/checkout@v3", "v4.0.0"),
            suggestion("actions/cache/restore@v3", "v4.1.0"),
        ]
    );
    assert_eq!(second, vec![suggestion("actions/cache/save@v4", "v4.1.0")]);
    assert_eq!(registry.calls(), vec!["actions/checkout", "actions/cache"]);
}

#[tokio::test]
async fn failing_file_does_not_poison_later_files() {
    let temp_dir = TempDir::new().unwrap();
    let broken = write_workflow(temp_dir.path(), "broken.yml", "jobs: [unclosed\n");
    let unknown = write_workflow(
        temp_dir.path(),
        "unknown.yml",
        r#"jobs:
  build:
    steps:
      - uses: nobody/missing@v1
"#,
    );
    let good = write_workflow(
        temp_dir.path(),
        "good.yml",
        r#"jobs:
  build:
    steps:
      - uses: actions/checkout@v3
"#,
    );
    let missing = temp_dir.path().join("missing.yml");

    let registry =
        Arc::new(MockRegistry::new().with_tags("actions/checkout", vec!["v3.0.0", "v4.0.0"]));
    let mut updater = ActionsUpdater::new(registry.clone());

    assert!(matches!(
        updater.scan_file(&missing).await,
        Err(ScanError::Io { .. })
    ));
    assert!(matches!(
        updater.scan_file(&broken).await,
        Err(ScanError::Parse(_))
    ));
    assert!(matches!(
        updater.scan_file(&unknown).await,
        Err(ScanError::Resolution { .. })
    ));
    assert_eq!(
        updater.scan_file(&good).await.unwrap(),
        vec![suggestion("actions/checkout@v3", "v4.0.0")]
    );
}

#[tokio::test]
async fn repository_without_tags_yields_no_suggestion() {
    let registry = Arc::new(MockRegistry::new().with_tags("owner/untagged", vec![]));
    let mut updater = ActionsUpdater::new(registry.clone());

    let content = br#"jobs:
  build:
    steps:
      - uses: owner/untagged@v1
      - uses: owner/untagged/sub@main
"#;
    let suggestions = updater.scan_content(content).await.unwrap();

    assert!(suggestions.is_empty());
    assert_eq!(registry.calls(), vec!["owner/untagged"]);
}
