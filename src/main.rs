use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

mod cli;
mod gitio;
mod locate;
mod model;
mod query;
mod render;
mod standup;
mod util;
mod window;

use crate::cli::{normalize, Cli};
use crate::standup::RunOutcome;

fn main() -> Result<()> {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
    Err(err) => {
      eprint!("{}", err);
      eprintln!("Use \"git standup -h\" to see the usage.");
      std::process::exit(1);
    }
  };

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  util::init_logging();

  // Phase 1: normalize CLI
  let opts = normalize(cli);

  // Phase 2: discover, query and render from the invocation directory
  let start = std::env::current_dir().context("reading current directory")?;
  match standup::run(&opts, &start)? {
    RunOutcome::NotInRepository => {
      println!("Not inside a git repository, nothing to report.");
    }
    RunOutcome::Completed { tally, report } => {
      tracing::debug!(
        rendered = tally.rendered,
        suppressed = tally.suppressed,
        skipped = tally.skipped,
        "run complete"
      );
      if let Some(path) = report {
        println!("Report written to {}", path.display());
      }
    }
  }
  Ok(())
}
