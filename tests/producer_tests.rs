use chrono::{Local, TimeZone};
use muxline::producers::{ClockProducer, GitBranchProducer, SessionProducer, SessionSource};
use muxline::utils::Cache;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::fs;

#[test]
fn test_clock_format_under_fixed_time() {
    let clock = ClockProducer::new();
    let time = Local.with_ymd_and_hms(2026, 8, 23, 9, 30, 5).unwrap();

    assert_eq!(clock.format_at(time), "2026-08-23 09:30:05");
}

#[test]
fn test_clock_custom_format() {
    let clock = ClockProducer::with_format("%H:%M");
    let time = Local.with_ymd_and_hms(2026, 8, 23, 21, 4, 59).unwrap();

    assert_eq!(clock.format_at(time), "21:04");
}

#[test]
fn test_clock_resolve_matches_default_pattern() {
    let rendered = ClockProducer::new().resolve();

    // YYYY-MM-DD HH:MM:SS
    assert_eq!(rendered.len(), 19);
    assert_eq!(&rendered[4..5], "-");
    assert_eq!(&rendered[10..11], " ");
    assert_eq!(&rendered[13..14], ":");
}

fn git(repo: &std::path::Path, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .expect("Failed to run git");
    assert!(output.status.success(), "git {:?} failed: {}", args, String::from_utf8_lossy(&output.stderr));
}

async fn setup_repo_on_branch(branch: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let repo = temp_dir.path();

    git(repo, &["init"]);
    git(repo, &["config", "user.email", "test@example.com"]);
    git(repo, &["config", "user.name", "Test User"]);
    git(repo, &["checkout", "-b", branch]);

    fs::write(repo.join("test.txt"), "test content").await.unwrap();
    git(repo, &["add", "."]);
    git(repo, &["commit", "-m", "Initial commit"]);

    temp_dir
}

#[tokio::test]
async fn test_git_branch_lookup_in_repository() {
    let temp_dir = setup_repo_on_branch("feature-x").await;

    let producer = GitBranchProducer::new();
    let branch = producer.branch_in(temp_dir.path()).await;

    assert_eq!(branch.as_deref(), Some("feature-x"));
    assert!(!branch.unwrap().ends_with('\n'));
}

#[tokio::test]
async fn test_git_branch_outside_repository_is_absent() {
    let temp_dir = TempDir::new().unwrap();

    let producer = GitBranchProducer::new();
    assert_eq!(producer.branch_in(temp_dir.path()).await, None);
}

#[tokio::test]
async fn test_git_branch_with_missing_executable_is_absent() {
    let temp_dir = setup_repo_on_branch("feature-x").await;

    let producer = GitBranchProducer::with_command("definitely-not-a-vcs-binary");
    assert_eq!(producer.branch_in(temp_dir.path()).await, None);
}

#[tokio::test]
async fn test_git_branch_lookup_is_cached() {
    let temp_dir = setup_repo_on_branch("cached-branch").await;

    let producer = GitBranchProducer::new();
    assert_eq!(producer.branch_in(temp_dir.path()).await.as_deref(), Some("cached-branch"));

    // A branch switch within the TTL is not observed until the entry expires.
    git(temp_dir.path(), &["checkout", "-b", "other-branch"]);
    assert_eq!(producer.branch_in(temp_dir.path()).await.as_deref(), Some("cached-branch"));
}

struct FixedSession(Option<&'static str>);

impl SessionSource for FixedSession {
    fn active_session(&self) -> Option<String> {
        self.0.map(|s| s.to_string())
    }
}

#[test]
fn test_session_producer_passes_through_name() {
    let producer = SessionProducer::new(Arc::new(FixedSession(Some("main-session"))));
    assert_eq!(producer.resolve().as_deref(), Some("main-session"));
}

#[test]
fn test_session_producer_treats_empty_name_as_absent() {
    let producer = SessionProducer::new(Arc::new(FixedSession(Some(""))));
    assert_eq!(producer.resolve(), None);
}

#[test]
fn test_cache_expires_entries_after_ttl() {
    let cache: Cache<String, String> = Cache::new(Duration::from_millis(20));
    cache.insert("key".to_string(), "value".to_string());

    assert_eq!(cache.get(&"key".to_string()).as_deref(), Some("value"));

    std::thread::sleep(Duration::from_millis(40));
    assert_eq!(cache.get(&"key".to_string()), None);
}
