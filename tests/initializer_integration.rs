//! Integration tests for the initializer / release-guard pairing
//!
//! These tests verify the multi-run file growth scenario and that the guard
//! releases on every exit path of the scope that owns it.

use dropmark::initializer::{EXISTS_LINE, INITIAL_LINE, MARKER_FILE_NAME};
use dropmark::{FileInitializer, ReleaseGuard, Releasable, RunOutcome};
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

struct TrackedResource {
    releases: Arc<AtomicUsize>,
}

impl Releasable for TrackedResource {
    fn on_release(&mut self, _explicit: bool) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_three_runs_grow_file_by_one_line_each() {
    let dir = TempDir::new().unwrap();
    let init = FileInitializer::with_target(dir.path().join(MARKER_FILE_NAME));

    assert_eq!(init.exec().unwrap(), RunOutcome::Created);
    assert_eq!(init.exec().unwrap(), RunOutcome::Appended);
    assert_eq!(init.exec().unwrap(), RunOutcome::Appended);

    let content = fs::read_to_string(init.target()).unwrap();
    let expected = format!("{}{}{}", INITIAL_LINE, EXISTS_LINE, EXISTS_LINE);
    assert_eq!(content, expected);
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn test_guard_releases_exactly_once_around_successful_run() {
    let dir = TempDir::new().unwrap();
    let releases = Arc::new(AtomicUsize::new(0));

    {
        let mut guard = ReleaseGuard::new(TrackedResource {
            releases: Arc::clone(&releases),
        });

        let init = FileInitializer::with_target(dir.path().join(MARKER_FILE_NAME));
        init.exec().unwrap();

        guard.release();
    }

    // Explicit release happened; the drop fallback must not re-run cleanup
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn test_guard_releases_when_initializer_fails() {
    let dir = TempDir::new().unwrap();
    let releases = Arc::new(AtomicUsize::new(0));

    let run = || -> dropmark::Result<()> {
        let _guard = ReleaseGuard::new(TrackedResource {
            releases: Arc::clone(&releases),
        });

        // Missing parent directory: creation fails with something other
        // than AlreadyExists, so the error propagates past the guard scope
        let init =
            FileInitializer::with_target(dir.path().join("missing").join(MARKER_FILE_NAME));
        init.exec()?;
        Ok(())
    };

    assert!(run().is_err());
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}
