use std::io::IsTerminal;

use clap::Parser;

use crate::model::{AuthorFilter, Options};
use crate::window::parse_now_override;

const EXAMPLES: &str = "\
Examples:
  git standup -a \"John Doe\" -w \"MON-FRI\" -m 3
  git standup -a all -d 7 -D iso
  git standup -b release -c
  git standup -r -s -F";

#[derive(Parser, Debug)]
#[command(
    name = "git-standup",
    version,
    about = "Recall what you did on the last working day",
    long_about = None,
    after_help = EXAMPLES
)]
pub struct Cli {
  /// Author whose commits to show; "all" for everyone (default: user.name of each repository)
  #[arg(short = 'a', long = "author", value_name = "AUTHOR")]
  pub author: Option<String>,

  /// Show the first-parent history of this branch instead of all refs
  #[arg(short = 'b', long = "branch", value_name = "BRANCH")]
  pub branch: Option<String>,

  /// Week range; on its first day the window reaches back to its last day
  #[arg(short = 'w', long = "week", value_name = "START-END")]
  pub weekdays: Option<String>,

  /// How deep to search for repositories below the current directory
  #[arg(short = 'm', long = "max-depth", value_name = "DEPTH", default_value_t = 2)]
  pub max_depth: usize,

  /// Search for repositories even when the current directory is one
  #[arg(short = 'F', long = "force-recursion")]
  pub force_recursion: bool,

  /// Follow symbolic links while searching
  #[arg(short = 'L', long = "symlinks")]
  pub follow_symlinks: bool,

  /// Show commits from the last DAYS days (0 = default weekday window)
  #[arg(short = 'd', long = "days", value_name = "DAYS")]
  pub days: Option<u32>,

  /// Hide commits newer than UNTIL days ago
  #[arg(short = 'u', long = "until", value_name = "UNTIL")]
  pub until: Option<u32>,

  /// Date format passed to git log: relative, local, default, iso, rfc, short, raw
  #[arg(short = 'D', long = "date-format", value_name = "FORMAT", default_value = "relative")]
  pub date_format: String,

  /// Show GPG signature status of each commit
  #[arg(short = 'g', long = "signature")]
  pub show_signature: bool,

  /// Run `git fetch --all` in each repository first
  #[arg(short = 'f', long = "fetch")]
  pub fetch: bool,

  /// Do not report repositories without activity
  #[arg(short = 's', long = "silent")]
  pub silent: bool,

  /// Write git-standup-report.txt in the current directory instead of printing
  #[arg(short = 'r', long = "report")]
  pub report: bool,

  /// Show a diffstat for each commit
  #[arg(short = 'c', long = "diff-stat")]
  pub diff_stat: bool,

  /// Only commits after this date (git date syntax)
  #[arg(short = 'A', long = "after", value_name = "DATE")]
  pub after: Option<String>,

  /// Only commits before this date (git date syntax)
  #[arg(short = 'B', long = "before", value_name = "DATE")]
  pub before: Option<String>,

  /// Show author date instead of committer date
  #[arg(short = 'R', long = "author-date")]
  pub author_date: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override the "now" instant used for the weekday window (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

pub fn normalize(cli: Cli) -> Options {
  // colors only make sense on a terminal, and never in the report file
  let colorize = !cli.report && std::io::stdout().is_terminal();

  Options {
    author: AuthorFilter::from_arg(cli.author.as_deref()),
    branch: cli.branch,
    days_since: cli.days,
    days_until: cli.until,
    after: cli.after,
    before: cli.before,
    weekdays: cli.weekdays,
    max_depth: cli.max_depth,
    force_recursion: cli.force_recursion,
    follow_symlinks: cli.follow_symlinks,
    date_format: cli.date_format,
    diff_stat: cli.diff_stat,
    report: cli.report,
    silent: cli.silent,
    show_signature: cli.show_signature,
    author_date: cli.author_date,
    fetch: cli.fetch,
    colorize,
    now_override: parse_now_override(cli.now_override.as_deref()),
  }
}
