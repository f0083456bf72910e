//! Workflow command facade.
//!
//! [`Core`] speaks the runner's stdout command protocol (`::debug::`,
//! `::warning::`, `::add-mask::`, ...) and appends `key=value` records to the
//! files the runner names in `GITHUB_OUTPUT` and `GITHUB_ENV`. It also reads
//! action inputs from `INPUT_*` variables.
//!
//! The facade holds no state beyond where it reads from and writes to. The
//! process facade ([`Core::new`]) uses the real environment and stdout; tests
//! inject an in-memory environment and writer.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use crate::env::{EnvSource, ProcessEnv};
use crate::ToolkitError;

const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT";
const ENV_FILE_VAR: &str = "GITHUB_ENV";

/// Handle for emitting workflow commands and reading action inputs.
pub struct Core {
    env: Arc<dyn EnvSource>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl Core {
    /// A facade over the process environment writing to stdout.
    pub fn new() -> Self {
        Self::with_env(Arc::new(ProcessEnv))
    }

    /// A facade over `env` writing to stdout.
    pub fn with_env(env: Arc<dyn EnvSource>) -> Self {
        Self::with_writer(env, io::stdout())
    }

    /// A facade over `env` writing commands to `out`.
    pub fn with_writer(env: Arc<dyn EnvSource>, out: impl Write + Send + 'static) -> Self {
        Self {
            env,
            out: Mutex::new(Box::new(out)),
        }
    }

    /// The environment this facade reads inputs and command-file paths from.
    pub fn env(&self) -> &Arc<dyn EnvSource> {
        &self.env
    }

    // -----------------------------------------------------------------------
    // Log annotations
    // -----------------------------------------------------------------------

    /// Writes a `::debug::` annotation, shown only with step debug logging.
    pub fn debug(&self, message: impl fmt::Display) {
        self.command("debug", message);
    }

    /// Writes `message` as a plain log line.
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(format_args!("{message}"));
    }

    /// Writes a `::notice::` annotation.
    pub fn notice(&self, message: impl fmt::Display) {
        self.command("notice", message);
    }

    /// Writes a `::warning::` annotation.
    pub fn warning(&self, message: impl fmt::Display) {
        self.command("warning", message);
    }

    /// Writes an `::error::` annotation without failing the step.
    pub fn error(&self, message: impl fmt::Display) {
        self.command("error", message);
    }

    /// Emits an error annotation and terminates the process with status 1.
    pub fn set_failed(&self, message: impl fmt::Display) -> ! {
        self.error(message);
        std::process::exit(1)
    }

    /// Asks the runner to mask `secret` in all later log output.
    pub fn set_secret(&self, secret: impl fmt::Display) {
        self.command("add-mask", secret);
    }

    /// Opens a collapsible log group.
    pub fn start_group(&self, name: impl fmt::Display) {
        self.command("group", name);
    }

    /// Closes the innermost log group.
    pub fn end_group(&self) {
        self.emit(format_args!("::endgroup::"));
    }

    // -----------------------------------------------------------------------
    // Command files
    // -----------------------------------------------------------------------

    /// Appends a step output record to the `GITHUB_OUTPUT` file.
    ///
    /// Does nothing when `GITHUB_OUTPUT` is unset.
    pub fn set_output(&self, name: &str, value: impl fmt::Display) -> Result<(), ToolkitError> {
        self.append_record(OUTPUT_FILE_VAR, name, &value.to_string())
    }

    /// Appends an environment export record to the `GITHUB_ENV` file, making
    /// the variable visible to later steps of the job.
    ///
    /// Does nothing when `GITHUB_ENV` is unset.
    pub fn export_variable(
        &self,
        name: &str,
        value: impl fmt::Display,
    ) -> Result<(), ToolkitError> {
        self.append_record(ENV_FILE_VAR, name, &value.to_string())
    }

    // -----------------------------------------------------------------------
    // Inputs
    // -----------------------------------------------------------------------

    /// Reads the action input `name` from `INPUT_<NAME>`.
    ///
    /// The variable name is `name` uppercased with `-` replaced by `_`. The
    /// value is returned exactly as set. An absent optional input reads as an
    /// empty string.
    pub fn get_input(&self, name: &str, required: bool) -> Result<String, ToolkitError> {
        let value = self.env.var(&input_variable(name)).unwrap_or_default();
        if required && value.is_empty() {
            return Err(ToolkitError::InputRequired {
                name: name.to_string(),
            });
        }
        Ok(value)
    }

    /// Reads a boolean input using the YAML 1.2 core schema spellings.
    ///
    /// An absent optional input reads as `false`.
    pub fn get_boolean_input(&self, name: &str, required: bool) -> Result<bool, ToolkitError> {
        let value = self.get_input(name, required)?;
        match value.as_str() {
            "true" | "True" | "TRUE" => Ok(true),
            "false" | "False" | "FALSE" | "" => Ok(false),
            _ => Err(ToolkitError::InvalidBooleanInput {
                name: name.to_string(),
                value,
            }),
        }
    }

    /// Reads an input as a list of its non-empty lines.
    pub fn get_multiline_input(
        &self,
        name: &str,
        required: bool,
    ) -> Result<Vec<String>, ToolkitError> {
        let value = self.get_input(name, required)?;
        Ok(value
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn command(&self, command: &str, message: impl fmt::Display) {
        self.emit(format_args!("::{command}::{message}"));
    }

    fn emit(&self, line: fmt::Arguments<'_>) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            tracing::warn!(error = %err, "failed to write workflow command");
        }
    }

    fn append_record(&self, file_var: &str, name: &str, value: &str) -> Result<(), ToolkitError> {
        let Some(path) = self.env.var(file_var).filter(|p| !p.is_empty()) else {
            return Ok(());
        };
        let record = format_record(name, value)?;

        let io_err = |source| ToolkitError::Io {
            path: PathBuf::from(&path),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(io_err)?;
        file.write_all(record.as_bytes()).map_err(io_err)?;

        tracing::debug!(file = file_var, name, "appended command record");
        Ok(())
    }
}

impl Default for Core {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Core").finish_non_exhaustive()
    }
}

/// `INPUT_` + name uppercased with dashes as underscores.
fn input_variable(name: &str) -> String {
    format!("INPUT_{}", name.to_uppercase().replace('-', "_"))
}

fn format_record(name: &str, value: &str) -> Result<String, ToolkitError> {
    if !value.contains(['\n', '\r']) {
        return Ok(format!("{name}={value}\n"));
    }

    // Multi-line values use the delimited block form.
    let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
    format_block(name, value, delimiter)
}

fn format_block(name: &str, value: &str, delimiter: String) -> Result<String, ToolkitError> {
    if name.contains(&delimiter) || value.contains(&delimiter) {
        return Err(ToolkitError::DelimiterCollision {
            name: name.to_string(),
            delimiter,
        });
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}
