// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Orchestrate a run: resolve the window once, discover repositories, query and render each in order
// role: processing/orchestrator
// inputs: Options, starting directory
// outputs: Terminal blocks or the report file; RunOutcome for the caller
// side_effects: Spawns git; truncates and appends the report file in report mode
// invariants:
// - the date window is computed once and shared by every repository
// - the process working directory is never changed; git runs with current_dir
// - an invalid repository is skipped, a failed log renders as empty; neither stops the loop
// - the report file is truncated once per run, not per repository
// errors: Only report file and output stream IO errors propagate
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::gitio;
use crate::locate;
use crate::model::{DateWindow, Options, RepositoryRef};
use crate::query::build_query;
use crate::render::{Outcome, Renderer};
use crate::window;

/// Terminal state of one repository visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
  Skipped,
  Rendered,
  Suppressed,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
  pub rendered: usize,
  pub suppressed: usize,
  pub skipped: usize,
}

impl Tally {
  fn record(&mut self, visit: Visit) {
    match visit {
      Visit::Rendered => self.rendered += 1,
      Visit::Suppressed => self.suppressed += 1,
      Visit::Skipped => self.skipped += 1,
    }
  }
}

#[derive(Debug)]
pub enum RunOutcome {
  NotInRepository,
  Completed { tally: Tally, report: Option<PathBuf> },
}

pub fn run(opts: &Options, start: &Path) -> Result<RunOutcome> {
  let window = window::resolve_window(opts);
  tracing::debug!(?window, "resolved date window");

  let repos = locate::locate(start, opts)?;
  if repos.is_empty() {
    return Ok(RunOutcome::NotInRepository);
  }

  if opts.report {
    let (mut renderer, path) = Renderer::report(start, opts.silent)?;
    let tally = visit_all(&mut renderer, &repos, &window, opts)?;
    renderer.flush()?;
    tracing::info!(path = %path.display(), "report written");
    Ok(RunOutcome::Completed { tally, report: Some(path) })
  } else {
    let mut renderer = Renderer::terminal(opts.colorize, opts.silent);
    let tally = visit_all(&mut renderer, &repos, &window, opts)?;
    renderer.flush()?;
    Ok(RunOutcome::Completed { tally, report: None })
  }
}

pub fn visit_all<W: Write>(
  renderer: &mut Renderer<W>,
  repos: &[RepositoryRef],
  window: &DateWindow,
  opts: &Options,
) -> Result<Tally> {
  let mut tally = Tally::default();
  for repo in repos {
    tally.record(visit(renderer, repo, window, opts)?);
  }
  Ok(tally)
}

/// Validate, optionally fetch, query and render a single repository.
pub fn visit<W: Write>(
  renderer: &mut Renderer<W>,
  repo: &RepositoryRef,
  window: &DateWindow,
  opts: &Options,
) -> Result<Visit> {
  let dir = repo.path();
  if !gitio::is_repository(dir) {
    tracing::debug!(repo = %repo, "not a readable repository, skipping");
    return Ok(Visit::Skipped);
  }

  if opts.fetch {
    gitio::fetch_all(dir);
  }

  let query = build_query(dir, window, opts);
  tracing::debug!(repo = %repo, args = ?query.to_args(), "querying");

  let output = gitio::log(dir, &query).unwrap_or_else(|err| {
    let reason = format!("{:#}", err);
    tracing::debug!(repo = %repo, error = %reason, "log failed, treating as empty");
    String::new()
  });

  Ok(match renderer.emit(&repo.to_string(), &output, &query.author)? {
    Outcome::Rendered => Visit::Rendered,
    Outcome::Suppressed => Visit::Suppressed,
  })
}
