//! End-to-end tests: clone a local repository, pick endpoints, archive.

#[path = "common/mod.rs"]
mod common;

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use common::selector::Answer;
use common::{ScriptedSelector, TestRepo};
use gitcompare::app::{App, AppError};
use gitcompare::config::Config;
use gitcompare::git::{self, GitError};
use gitcompare::pipeline::{CompareError, Outcome};
use tempfile::TempDir;

/// `main` with two commits (tagged v1 and v2) and `feature` one commit ahead of v2
fn source() -> TestRepo {
    let repo = TestRepo::new();
    repo.write_file("README.md", "# demo\n");
    repo.write_file("src/lib.rs", "pub fn one() {}\n");
    repo.write_file("obsolete.txt", "bye\n");
    repo.commit("Initial commit");
    repo.tag("v1");

    repo.write_file("src/lib.rs", "pub fn one() {}\npub fn two() {}\n");
    repo.remove_file("obsolete.txt");
    repo.write_file("docs/guide.md", "guide\n");
    repo.commit("Second commit");
    repo.tag("v2");

    repo.branch("feature");
    repo.checkout("feature");
    repo.write_file("feature.txt", "feature\n");
    repo.commit("Feature commit");

    repo.checkout("main");
    repo
}

fn config(source: &TestRepo, output: &Path) -> Config {
    let mut config = Config::new(source.url());
    config.output = Some(output.to_path_buf());
    config
}

fn entry_names(path: &Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}

fn entry_content(path: &Path, name: &str) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

fn text(output: &[u8]) -> String {
    String::from_utf8_lossy(output).into_owned()
}

#[test]
fn test_endpoints_from_config() {
    let source = source();
    let out = TempDir::new().unwrap();
    let output = out.path().join("changes.zip");
    let mut config = config(&source, &output);
    config.start = Some("v1".to_string());
    config.end = Some("main".to_string());

    let mut app = App::new(config, Vec::new(), ScriptedSelector::default());
    let outcome = app.run().unwrap();

    let Outcome::Archived(report) = outcome else {
        panic!("expected an archive");
    };
    assert_eq!(report.changes.len(), 3);
    assert_eq!(entry_names(&output), vec!["docs/guide.md", "src/lib.rs"]);
    assert_eq!(
        entry_content(&output, "src/lib.rs"),
        "pub fn one() {}\npub fn two() {}\n"
    );
    assert!(app.selector().asked.is_empty());

    let printed = text(app.output());
    assert!(printed.contains("Comparison Summary"));
    assert!(printed.contains("Archive created"));
    assert!(printed.contains("- obsolete.txt"));
}

#[test]
fn test_remote_only_branch_as_end() {
    let source = source();
    let out = TempDir::new().unwrap();
    let output = out.path().join("feature.zip");
    let mut config = config(&source, &output);
    config.start = Some("v2".to_string());
    config.end = Some("feature".to_string());

    let mut app = App::new(config, Vec::new(), ScriptedSelector::default());
    app.run().unwrap();

    assert_eq!(entry_names(&output), vec!["feature.txt"]);
}

#[test]
fn test_interactive_selection() {
    let source = source();
    let out = TempDir::new().unwrap();
    let output = out.path().join("picked.zip");

    let selector = ScriptedSelector::picking(&["feature", "Initial commit", "Feature commit"]);
    let mut app = App::new(config(&source, &output), Vec::new(), selector);
    app.run().unwrap();

    assert_eq!(
        entry_names(&output),
        vec!["docs/guide.md", "feature.txt", "src/lib.rs"]
    );

    let asked = &app.selector().asked;
    assert_eq!(asked.len(), 3);
    assert_eq!(asked[1].0, "Select START commit (older commit):");
    assert_eq!(asked[2].0, "Select END commit (newer commit):");
    assert_eq!(asked[1].1.len(), 3);
}

#[test]
fn test_end_given_start_selected() {
    let source = source();
    let out = TempDir::new().unwrap();
    let output = out.path().join("half.zip");
    let mut config = config(&source, &output);
    config.end = Some("main".to_string());

    let selector = ScriptedSelector::new([Answer::Index(1)]);
    let mut app = App::new(config, Vec::new(), selector);
    app.run().unwrap();

    // main has two commits; index 1 is the initial one
    assert_eq!(entry_names(&output), vec!["docs/guide.md", "src/lib.rs"]);
    assert_eq!(app.selector().asked.len(), 1);
}

#[test]
fn test_cancelled_selection() {
    let source = source();
    let out = TempDir::new().unwrap();
    let output = out.path().join("never.zip");

    let selector = ScriptedSelector::new([Answer::Cancel]);
    let mut app = App::new(config(&source, &output), Vec::new(), selector);

    assert!(matches!(app.run(), Err(AppError::SelectionCancelled)));
    assert!(!output.exists());
}

#[test]
fn test_same_ref_has_no_changes() {
    let source = source();
    let out = TempDir::new().unwrap();
    let output = out.path().join("none.zip");
    let mut config = config(&source, &output);
    config.start = Some("main".to_string());
    config.end = Some("v2".to_string());

    let mut app = App::new(config, Vec::new(), ScriptedSelector::default());
    let outcome = app.run().unwrap();

    assert!(matches!(outcome, Outcome::NoChanges { start, end } if start == end));
    assert!(!output.exists());
    assert!(text(app.output()).contains("No changes between"));
}

#[test]
fn test_unknown_ref_fails_without_output() {
    let source = source();
    let out = TempDir::new().unwrap();
    let output = out.path().join("bad.zip");
    let mut config = config(&source, &output);
    config.start = Some("v1".to_string());
    config.end = Some("no-such-branch".to_string());

    let mut app = App::new(config, Vec::new(), ScriptedSelector::default());
    let result = app.run();

    assert!(matches!(
        result,
        Err(AppError::Compare(CompareError::Git(GitError::RefNotFound(ref name)))) if name == "no-such-branch"
    ));
    assert!(!output.exists());
}

#[test]
fn test_reversed_endpoints_are_rejected() {
    let source = source();
    let out = TempDir::new().unwrap();
    let output = out.path().join("reversed.zip");
    let mut config = config(&source, &output);
    config.start = Some("main".to_string());
    config.end = Some("v1".to_string());

    let mut app = App::new(config, Vec::new(), ScriptedSelector::default());
    assert!(matches!(
        app.run(),
        Err(AppError::Compare(CompareError::Git(GitError::NotAncestor { .. })))
    ));
    assert!(!output.exists());
}

#[test]
fn test_runs_are_repeatable() {
    let source = source();
    let out = TempDir::new().unwrap();
    let mut archives = Vec::new();

    for name in ["first.zip", "second.zip"] {
        let output = out.path().join(name);
        let mut config = config(&source, &output);
        config.start = Some("v1".to_string());
        config.end = Some("feature".to_string());
        App::new(config, Vec::new(), ScriptedSelector::default())
            .run()
            .unwrap();
        archives.push(fs::read(output).unwrap());
    }

    assert_eq!(archives[0], archives[1]);
}

#[test]
fn test_retained_workspace() {
    let source = source();
    let out = TempDir::new().unwrap();
    let output = out.path().join("kept.zip");
    let mut config = config(&source, &output);
    config.start = Some("v1".to_string());
    config.end = Some("v2".to_string());
    config.keep_workspace = true;

    let mut app = App::new(config, Vec::new(), ScriptedSelector::default());
    app.run().unwrap();

    let printed = text(app.output());
    let kept = printed
        .lines()
        .find_map(|line| line.strip_prefix("ℹ Working copy kept at "))
        .expect("kept path is printed")
        .to_string();
    // the kept working copy is left at the end commit
    let repo = git::open(Path::new(&kept).join("repo")).unwrap();
    assert!(repo.head_detached().unwrap());
    assert_eq!(
        repo.head().unwrap().target(),
        Some(source.repo().revparse_single("v2").unwrap().id())
    );
    drop(repo);
    fs::remove_dir_all(kept).unwrap();
}

#[test]
fn test_invalid_url() {
    let out = TempDir::new().unwrap();
    let mut config = Config::new("not-a-url");
    config.output = Some(out.path().join("x.zip"));

    let mut app = App::new(config, Vec::new(), ScriptedSelector::default());
    assert!(matches!(app.run(), Err(AppError::Url(_))));
}

#[cfg(unix)]
#[test]
fn test_committed_symlink_does_not_leak_host_file() {
    let host = TempDir::new().unwrap();
    let secret = host.path().join("secret.txt");
    fs::write(&secret, "host file").unwrap();

    let source = TestRepo::new();
    source.write_file("README.md", "# demo\n");
    source.commit("Initial commit");
    source.tag("base");
    std::os::unix::fs::symlink(&secret, source.path().join("link")).unwrap();
    source.commit("Add link");

    let out = TempDir::new().unwrap();
    let output = out.path().join("changes.zip");
    let mut config = config(&source, &output);
    config.start = Some("base".to_string());
    config.end = Some("main".to_string());

    let mut app = App::new(config, Vec::new(), ScriptedSelector::default());
    assert!(matches!(app.run().unwrap(), Outcome::Archived(_)));

    assert_eq!(entry_names(&output), vec!["link"]);
    assert_eq!(entry_content(&output, "link"), secret.to_string_lossy());
}

