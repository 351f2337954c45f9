use std::path::Path;

use crate::gitio;
use crate::model::{AuthorFilter, DateWindow, Options, ANY_AUTHOR};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BranchScope {
  /// Every ref (`--all`).
  All,
  /// First-parent history of one branch.
  FirstParent(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct LogFormat {
  pub color: bool,
  pub signature: bool,
  pub author_date: bool,
}

impl LogFormat {
  /// The `--pretty=format:` template.
  pub fn template(&self) -> String {
    let date = if self.author_date { "%ad" } else { "%cd" };
    let mut fmt = if self.color {
      format!("%Cred%h%Creset - %s %Cgreen({date}) %C(bold blue)<%an>%Creset")
    } else {
      format!("%h - %s ({date}) <%an>")
    };
    if self.signature {
      if self.color {
        fmt.push_str(" %C(yellow)gpg: %G?%Creset");
      } else {
        fmt.push_str(" gpg: %G?");
      }
    }
    fmt
  }
}

/// A structured `git log` request. Serialized by `to_args`, never through a shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogQuery {
  pub branch: BranchScope,
  pub since: String,
  pub until: Option<String>,
  pub after: Option<String>,
  pub author: String,
  pub format: LogFormat,
  pub date_format: String,
  pub stat: bool,
}

impl LogQuery {
  pub fn new(window: &DateWindow, author: String, opts: &Options) -> Self {
    let branch = match &opts.branch {
      Some(name) => BranchScope::FirstParent(name.clone()),
      None => BranchScope::All,
    };
    Self {
      branch,
      since: window.since.clone(),
      until: window.until.clone(),
      after: window.after.clone(),
      author,
      format: LogFormat {
        color: opts.colorize,
        signature: opts.show_signature,
        author_date: opts.author_date,
      },
      date_format: opts.date_format.clone(),
      stat: opts.diff_stat,
    }
  }

  pub fn to_args(&self) -> Vec<String> {
    let mut args: Vec<String> = vec!["--no-pager".into(), "log".into()];
    match &self.branch {
      BranchScope::All => args.push("--all".into()),
      BranchScope::FirstParent(_) => args.push("--first-parent".into()),
    }
    args.push("--no-merges".into());
    args.push(format!("--since={}", self.since));
    if let Some(until) = &self.until {
      args.push(format!("--until={}", until));
    }
    if let Some(after) = &self.after {
      args.push(format!("--after={}", after));
    }
    args.push(format!("--author={}", self.author));
    args.push("--abbrev-commit".into());
    args.push("--oneline".into());
    args.push(format!("--pretty=format:{}", self.format.template()));
    args.push(format!("--date={}", self.date_format));
    args.push(if self.format.color { "--color=always".into() } else { "--no-color".into() });
    if self.stat {
      args.push("--stat".into());
    }
    if let BranchScope::FirstParent(name) = &self.branch {
      args.push("--end-of-options".into());
      args.push(name.clone());
      args.push("--".into());
    }
    args
  }
}

/// The author pattern for one repository.
///
/// Without an explicit filter this is the repository's own `user.name`;
/// an unset identity widens to everyone.
pub fn resolve_author(filter: &AuthorFilter, repo: &Path) -> String {
  match filter {
    AuthorFilter::Named(name) => name.clone(),
    AuthorFilter::Everyone => ANY_AUTHOR.to_string(),
    AuthorFilter::Configured => gitio::configured_author(repo).unwrap_or_else(|| ANY_AUTHOR.to_string()),
  }
}

pub fn build_query(repo: &Path, window: &DateWindow, opts: &Options) -> LogQuery {
  let author = resolve_author(&opts.author, repo);
  LogQuery::new(window, author, opts)
}
