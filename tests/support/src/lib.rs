//! test-support: helpers for robust, nextest-friendly tests.
//!
//! Add as a dev-dependency in your top-level `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test_support = { path = "tests/support" }
//! ```
//!
//! Then in tests:
//! ```rust,ignore
//! use test_support::{init_repo, commit_file};
//!
//! #[test]
//! fn example() {
//!     let td = test_support::tempdir();
//!     init_repo(td.path(), "Fixture Bot");
//!     commit_file(td.path(), "a.txt", "feat: a");
//! }
//! ```

use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, EnvFilter};

use std::path::Path;
use std::process::Command;

/// Initialize `tracing` once, honoring `RUST_LOG` and writing via the test writer.
///
/// Safe to call from multiple tests; only the first call configures the global subscriber.
pub fn init_tracing() {
    static INIT: Lazy<()> = Lazy::new(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("warn,test=info"))
            .unwrap();
        // with_test_writer() causes logs to appear alongside failing tests only (cargo/nextest)
        let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
    });
    Lazy::force(&INIT);
}

/// Create a temp directory that deletes on drop.
pub fn tempdir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create tempdir")
}

/// Run a binary target with `assert_cmd`, returning the ready-to-run `Command`.
///
/// The command is isolated from the user's git configuration and cannot
/// discover repositories above its working directory's parent.
pub fn cmd_bin(bin: &str, cwd: &Path) -> assert_cmd::Command {
    init_tracing();
    let mut cmd = assert_cmd::Command::cargo_bin(bin).expect("binary target not found");
    let ceiling = cwd.parent().unwrap_or(cwd);
    cmd.current_dir(cwd)
        .env("GIT_CEILING_DIRECTORIES", ceiling)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env_remove("GIT_STANDUP_LOG");
    cmd
}

/// Run git in `dir`, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) {
    git_with_env(dir, args, &[]);
}

fn git_with_env(dir: &Path, args: &[&str], env: &[(&str, &str)]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .envs(env.iter().cloned())
        .status()
        .unwrap();
    assert!(status.success(), "git {:?} failed", args);
}

/// `git init` a repository at `dir` (created if missing) owned by `user`.
pub fn init_repo(dir: &Path, user: &str) {
    std::fs::create_dir_all(dir).unwrap();
    git(dir, &["init", "-q", "-b", "main"]);
    git(dir, &["config", "user.name", user]);
    let email = format!("{}@example.com", user.to_lowercase().replace(' ', "."));
    git(dir, &["config", "user.email", &email]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

/// Write `file` and commit it with `message`, dated now.
pub fn commit_file(dir: &Path, file: &str, message: &str) {
    std::fs::write(dir.join(file), format!("{message}\n")).unwrap();
    git(dir, &["add", file]);
    git(dir, &["commit", "-q", "-m", message]);
}

/// Write `file` and commit it with `message`, author and committer dated `date`.
pub fn commit_file_at(dir: &Path, file: &str, message: &str, date: &str) {
    std::fs::write(dir.join(file), format!("{message}\n")).unwrap();
    git(dir, &["add", file]);
    git_with_env(
        dir,
        &["commit", "-q", "-m", message],
        &[("GIT_AUTHOR_DATE", date), ("GIT_COMMITTER_DATE", date)],
    );
}
