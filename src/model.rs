use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Match-everything author pattern handed to `git log --author`.
pub const ANY_AUTHOR: &str = ".*";

/// Which commits to attribute to "you".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthorFilter {
  /// No `-a`: each repository's own `user.name`.
  Configured,
  /// `-a all`
  Everyone,
  Named(String),
}

impl AuthorFilter {
  pub fn from_arg(arg: Option<&str>) -> Self {
    match arg {
      None => AuthorFilter::Configured,
      Some("all") => AuthorFilter::Everyone,
      Some(name) => AuthorFilter::Named(name.to_string()),
    }
  }
}

/// Normalized, immutable run options. Built once by `cli::normalize`.
#[derive(Clone, Debug)]
pub struct Options {
  pub author: AuthorFilter,
  pub branch: Option<String>,
  pub days_since: Option<u32>,
  pub days_until: Option<u32>,
  pub after: Option<String>,
  pub before: Option<String>,
  pub weekdays: Option<String>,
  pub max_depth: usize,
  pub force_recursion: bool,
  pub follow_symlinks: bool,
  pub date_format: String,
  pub diff_stat: bool,
  pub report: bool,
  pub silent: bool,
  pub show_signature: bool,
  pub author_date: bool,
  pub fetch: bool,
  pub colorize: bool,
  pub now_override: Option<DateTime<Local>>,
}

impl Default for Options {
  fn default() -> Self {
    Self {
      author: AuthorFilter::Configured,
      branch: None,
      days_since: None,
      days_until: None,
      after: None,
      before: None,
      weekdays: None,
      max_depth: 2,
      force_recursion: false,
      follow_symlinks: false,
      date_format: "relative".into(),
      diff_stat: false,
      report: false,
      silent: false,
      show_signature: false,
      author_date: false,
      fetch: false,
      colorize: false,
      now_override: None,
    }
  }
}

/// The period every repository is queried for. Values are git approxidate expressions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateWindow {
  pub since: String,
  pub until: Option<String>,
  pub after: Option<String>,
}

/// A directory believed to hold a repository root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositoryRef {
  path: PathBuf,
}

impl RepositoryRef {
  /// Build from a `.git` marker path; the repository is the marker's parent.
  pub fn from_marker(marker: &Path) -> Option<Self> {
    let parent = marker.parent()?;
    let path = if parent.as_os_str().is_empty() {
      PathBuf::from(".")
    } else {
      parent.to_path_buf()
    };
    Some(Self { path })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl fmt::Display for RepositoryRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.path.display())
  }
}
