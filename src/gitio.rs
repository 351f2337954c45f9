use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::locate::MARKER;
use crate::query::LogQuery;
use crate::util::run_git;

/// Top-level directory of the repository containing `dir`, if any.
pub fn show_toplevel(dir: &Path) -> Option<PathBuf> {
    let out = run_git(dir, &["rev-parse".into(), "--show-toplevel".into()]).ok()?;
    let top = out.trim_end_matches(['\n', '\r']);
    if top.is_empty() { None } else { Some(PathBuf::from(top)) }
}

/// Whether `dir` is still a repository root git can read.
///
/// The marker must sit in `dir` itself: without it git would resolve an
/// enclosing repository and report that one's history instead.
pub fn is_repository(dir: &Path) -> bool {
    let marker = dir.join(MARKER);
    if !(marker.is_dir() || marker.is_file()) {
        return false;
    }
    run_git(dir, &["rev-parse".into(), "--git-dir".into()]).is_ok()
}

/// `user.name` as configured for `dir` (repository config overrides global).
pub fn configured_author(dir: &Path) -> Option<String> {
    let out = run_git(dir, &["config".into(), "user.name".into()]).ok()?;
    let name = out.trim();
    if name.is_empty() { None } else { Some(name.to_string()) }
}

pub fn log(dir: &Path, query: &LogQuery) -> Result<String> {
    run_git(dir, &query.to_args())
}

/// `git fetch --all`; output discarded, failures ignored.
pub fn fetch_all(dir: &Path) {
    if let Err(err) = run_git(dir, &["fetch".into(), "--all".into()]) {
        let reason = format!("{:#}", err);
        tracing::debug!(dir = %dir.display(), error = %reason, "fetch failed, continuing");
    }
}
