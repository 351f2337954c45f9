// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Discover the repository roots a run reports on
// role: discovery
// inputs: starting directory, Options (max_depth, force_recursion, follow_symlinks), optional whitelist file
// outputs: ordered Vec<RepositoryRef>
// side_effects: Reads the filesystem; may run `git rev-parse --show-toplevel`
// invariants:
// - walk depth is max_depth + 1 with the search root at depth 0
// - siblings are visited in file-name order; roots in whitelist order
// - a `.git` directory is never descended into
// - an empty result means "not inside a git repository", never an error
// errors: Only an unreadable whitelist file is surfaced
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::gitio;
use crate::model::{Options, RepositoryRef};

/// Name of the entry marking a repository root (directory, or file for worktrees/submodules).
pub const MARKER: &str = ".git";

/// Optional file in the starting directory listing search roots, one per line.
pub const WHITELIST_FILE: &str = ".git-standup-whitelist";

/// Search roots for a recursive walk: the whitelist entries, or `start` itself.
pub fn search_roots(start: &Path) -> Result<Vec<PathBuf>> {
  let whitelist = start.join(WHITELIST_FILE);
  if !whitelist.is_file() {
    return Ok(vec![start.to_path_buf()]);
  }
  let text = std::fs::read_to_string(&whitelist)
    .with_context(|| format!("reading {}", whitelist.display()))?;
  Ok(
    text
      .lines()
      .map(str::trim)
      .filter(|l| !l.is_empty())
      .map(|l| if l == "." { start.to_path_buf() } else { start.join(l) })
      .collect(),
  )
}

/// Every `.git` entry under `root` within `max_depth + 1` levels.
pub fn find_markers(root: &Path, max_depth: usize, follow_symlinks: bool) -> Vec<PathBuf> {
  let mut markers = Vec::new();
  let mut it = WalkDir::new(root)
    .follow_links(follow_symlinks)
    .max_depth(max_depth + 1)
    .sort_by_file_name()
    .into_iter();

  while let Some(entry) = it.next() {
    let entry = match entry {
      Ok(e) => e,
      Err(err) => {
        tracing::debug!(error = %err, "skipping unreadable entry");
        continue;
      }
    };
    if entry.file_name() != MARKER {
      continue;
    }
    if entry.file_type().is_dir() {
      it.skip_current_dir();
    }
    markers.push(entry.into_path());
  }
  markers
}

fn has_marker(dir: &Path) -> bool {
  let marker = dir.join(MARKER);
  marker.is_dir() || marker.is_file()
}

/// Repositories to report on, in visiting order.
pub fn locate(start: &Path, opts: &Options) -> Result<Vec<RepositoryRef>> {
  let mut markers: Vec<PathBuf> = Vec::new();

  if opts.force_recursion || !has_marker(start) {
    for root in search_roots(start)? {
      tracing::debug!(root = %root.display(), depth = opts.max_depth, "searching");
      markers.extend(find_markers(&root, opts.max_depth, opts.follow_symlinks));
    }
  } else {
    markers.push(start.join(MARKER));
  }

  if markers.is_empty() {
    if let Some(top) = gitio::show_toplevel(start) {
      tracing::debug!(toplevel = %top.display(), "falling back to enclosing repository");
      markers.push(top.join(MARKER));
    }
  }

  Ok(markers.iter().filter_map(|m| RepositoryRef::from_marker(m)).collect())
}
