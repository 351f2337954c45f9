use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::model::ANY_AUTHOR;

/// Report artifact written in the invocation directory.
pub const REPORT_FILE: &str = "git-standup-report.txt";
pub const NO_ACTIVITY: &str = "No activity found!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    /// Empty output hidden by `-s`.
    Suppressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Terminal { color: bool },
    Report,
}

pub struct Renderer<W: Write> {
    out: W,
    style: Style,
    silent: bool,
}

impl Renderer<io::Stdout> {
    pub fn terminal(color: bool, silent: bool) -> Self {
        Renderer::new(io::stdout(), Style::Terminal { color }, silent)
    }
}

impl Renderer<File> {
    /// Create (truncating) the report file in `dir`.
    pub fn report(dir: &Path, silent: bool) -> Result<(Self, PathBuf)> {
        let path = dir.join(REPORT_FILE);
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        Ok((Renderer::new(file, Style::Report, silent), path))
    }
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, style: Style, silent: bool) -> Self {
        Self { out, style, silent }
    }

    /// Emit one repository's block. `author` is the pattern its query used.
    pub fn emit(&mut self, dir: &str, output: &str, author: &str) -> Result<Outcome> {
        let output = output.trim_end();
        if output.is_empty() && self.silent {
            return Ok(Outcome::Suppressed);
        }
        match self.style {
            Style::Report => {
                let body = if output.is_empty() { NO_ACTIVITY } else { output };
                write!(self.out, "{}\n{}\n", dir, body)?;
            }
            Style::Terminal { color } => {
                if color {
                    writeln!(self.out, "{}", dir.bold().underline().yellow())?;
                } else {
                    writeln!(self.out, "{}", dir)?;
                }
                if output.is_empty() {
                    let msg = no_commits_message(author);
                    if color {
                        writeln!(self.out, "{}", msg.as_str().yellow())?;
                    } else {
                        writeln!(self.out, "{}", msg)?;
                    }
                } else {
                    writeln!(self.out, "{}", output)?;
                }
                writeln!(self.out)?;
            }
        }
        Ok(Outcome::Rendered)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

pub fn no_commits_message(author: &str) -> String {
    if author == ANY_AUTHOR {
        "No commits found during this period.".to_string()
    } else {
        format!("No commits from {} during this period.", author)
    }
}
