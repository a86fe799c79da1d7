use std::fs::File;
use std::io::{self, BufRead, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::console;
use crate::error::ReadError;
use crate::transform::{output_name, uppercase};

/// How a run ended. Every variant is a normal end of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The uppercase content was written to `output`.
    Saved { output: String },
    /// `input` does not exist.
    NotFound { input: String },
    /// `input` exists but could not be opened for reading.
    PermissionDenied { input: String },
    /// Any other failure while reading, transforming or writing.
    Failed { message: String },
    /// Input was closed before a file name was entered.
    NoInput,
}

/// One read → uppercase → write run.
///
/// File names are used exactly as entered in every message. On disk they are
/// resolved against `base_dir`, which is empty (the working directory) unless
/// set with [`Session::with_base_dir`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    base_dir: PathBuf,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Prompt for a file name on `input`, then process it.
    ///
    /// Only failures writing to `console` are returned as errors; everything
    /// that goes wrong reading the name or handling the files is reported
    /// and folded into the [`Outcome`].
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, console: &mut W) -> io::Result<Outcome> {
        console::write_prompt(console)?;
        match console::read_filename(input) {
            Ok(Some(name)) => self.process(&name, console),
            Ok(None) => {
                warn!("input closed before a file name was entered");
                console::report_no_input(console)?;
                Ok(Outcome::NoInput)
            }
            Err(err) => {
                let err = anyhow::Error::new(err).context("failed to read the file name");
                fail(console, err)
            }
        }
    }

    /// Process `name` without prompting.
    pub fn process<W: Write>(&self, name: &str, console: &mut W) -> io::Result<Outcome> {
        let source = self.resolve(name);
        debug!(input = name, path = %source.display(), "reading input file");

        let content = match read_source(&source) {
            Ok(content) => content,
            Err(ReadError::NotFound(err)) => {
                warn!(input = name, error = %err, "input file not found");
                console::report_not_found(console, name)?;
                return Ok(Outcome::NotFound {
                    input: name.to_string(),
                });
            }
            Err(ReadError::PermissionDenied(err)) => {
                warn!(input = name, error = %err, "permission denied reading input file");
                console::report_permission_denied(console, name)?;
                return Ok(Outcome::PermissionDenied {
                    input: name.to_string(),
                });
            }
            Err(ReadError::Io(err)) => {
                let err = anyhow::Error::new(err).context(format!("failed to read '{name}'"));
                return fail(console, err);
            }
        };
        debug!(bytes = content.len(), "read input file");
        console::report_content(console, name, &content)?;

        let modified = uppercase(&content);
        console::report_modified(console)?;

        let output = output_name(name);
        let target = self.resolve(&output);
        debug!(output = %output, path = %target.display(), "writing output file");

        match write_output(&target, &output, &modified) {
            Ok(()) => {
                info!(output = %output, bytes = modified.len(), "saved modified content");
                console::report_saved(console, &output)?;
                Ok(Outcome::Saved { output })
            }
            Err(err) => fail(console, err),
        }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        // Joining "" would name the base directory itself.
        if name.is_empty() {
            PathBuf::new()
        } else {
            self.base_dir.join(name)
        }
    }
}

fn read_source(path: &Path) -> std::result::Result<String, ReadError> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

fn write_output(path: &Path, name: &str, content: &str) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create '{name}'"))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .with_context(|| format!("failed to write '{name}'"))?;
    writer
        .flush()
        .with_context(|| format!("failed to flush '{name}'"))?;
    Ok(())
}

fn fail<W: Write>(console: &mut W, err: anyhow::Error) -> io::Result<Outcome> {
    let message = format!("{err:#}");
    warn!(error = %message, "run failed");
    console::report_unexpected(console, &message)?;
    Ok(Outcome::Failed { message })
}
