//! Interactive session: edit one field at a time and recompute after each
//! change.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use hold_core::{compute_hold, HoldError, HoldRules, HoldSolution, InputField, RawInputs};

use crate::render::{render_svg, RenderConfig};

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(InputField, String),
    Show,
    Reset,
    Quit,
}

/// Parse `field=value`, `show`, `reset` or `quit`. Blank lines and `#`
/// comments give `None`.
pub fn parse_command(line: &str) -> Option<std::result::Result<Command, HoldError>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let command = match line.split_once('=') {
        Some((field, value)) => field
            .parse::<InputField>()
            .map(|field| Command::Set(field, value.trim().to_string())),
        None => match line.to_ascii_lowercase().as_str() {
            "show" => Ok(Command::Show),
            "reset" => Ok(Command::Reset),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(HoldError::UnknownCommand(other.to_string())),
        },
    };
    Some(command)
}

pub struct Session {
    raw: RawInputs,
    rules: HoldRules,
    svg_path: Option<PathBuf>,
    render: RenderConfig,
}

impl Session {
    pub fn new(raw: RawInputs, rules: HoldRules) -> Self {
        Self {
            raw,
            rules,
            svg_path: None,
            render: RenderConfig::default(),
        }
    }

    /// Rewrite an SVG file after every recomputation.
    pub fn with_svg(mut self, path: PathBuf, render: RenderConfig) -> Self {
        self.svg_path = Some(path);
        self.render = render;
        self
    }

    pub fn inputs(&self) -> &RawInputs {
        &self.raw
    }

    pub fn solve(&self) -> HoldSolution {
        compute_hold(&self.raw.to_inputs(), &self.rules)
    }

    /// Read commands until `quit` or end of input, printing the summary
    /// after every change.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, out: &mut W) -> Result<()> {
        self.recompute(out)?;
        for line in reader.lines() {
            let line = line.context("reading session input")?;
            let command = match parse_command(&line) {
                None => continue,
                Some(Ok(command)) => command,
                Some(Err(err)) => {
                    tracing::warn!(%err, "ignoring session line");
                    writeln!(out, "? {err}")?;
                    continue;
                }
            };
            match command {
                Command::Set(field, value) => {
                    tracing::info!(field = %field, value = %value, "input changed");
                    self.raw.set(field, &value);
                    self.recompute(out)?;
                }
                Command::Show => self.recompute(out)?,
                Command::Reset => {
                    self.raw = RawInputs::default();
                    self.recompute(out)?;
                }
                Command::Quit => break,
            }
        }
        Ok(())
    }

    fn recompute<W: Write>(&self, out: &mut W) -> Result<()> {
        let solution = self.solve();
        writeln!(out, "{}", solution.display())?;
        writeln!(out)?;
        if let Some(path) = &self.svg_path {
            let svg = render_svg(&solution, &self.render)?;
            std::fs::write(path, svg)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Ok(())
    }
}
