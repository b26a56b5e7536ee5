//! Declare-once command runtime.
//!
//! A type implementing [`Command`] supplies its [`Schema`] and the logic to
//! run once its fields are populated. [`run_with`] drives parse, validation
//! and execution and turns the outcome into an exit status; it never exits
//! the process itself.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::config::RunConfig;
use crate::error::{ArgParseError, Result};
use crate::help::render_help;
use crate::parser::{Outcome, parse_into};
use crate::slot::Schema;

/// A command-line program with a declared schema.
///
/// Field names of the implementing type must match the slot names of
/// [`schema`](Command::schema); positional slots decode as `String`, flags
/// as `bool`.
///
/// # Examples
///
/// ```
/// use argslot_core::{ArgParseError, Command, Name, RunConfig, Schema, run_with};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Greet {
///     name: String,
///     shout: bool,
/// }
///
/// impl Command for Greet {
///     fn schema() -> Schema {
///         Schema::new("greet")
///             .argument("name", "Who to greet")
///             .flag("shout", Name::Short('s'), false, "Use capitals")
///     }
///
///     fn run(&mut self) -> Result<(), ArgParseError> {
///         if self.shout {
///             self.name = self.name.to_uppercase();
///         }
///         Ok(())
///     }
/// }
///
/// let mut out = Vec::<u8>::new();
/// let mut err = Vec::<u8>::new();
/// let code = run_with::<Greet, _, _>(["greet", "ada", "-s"], &RunConfig::default(), &mut out, &mut err)
///     .unwrap();
/// assert_eq!(code, 0);
/// ```
pub trait Command: DeserializeOwned {
    /// Slots this command accepts.
    fn schema() -> Schema;

    /// Checks business rules after a successful parse.
    ///
    /// Failures are reported like usage errors, followed by the help text.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Runs the command.
    fn run(&mut self) -> Result<()>;
}

/// Parses `argv`, then validates and runs `C`, returning the exit status.
///
/// The first element of `argv` is the program name and replaces the
/// schema's program token in help output. Help output goes to `out`;
/// error messages, and the help text that follows them, go to `err`.
///
/// # Errors
///
/// Only I/O failures while writing to `out` or `err` are returned.
pub fn run_with<C, I, S>(
    argv: I,
    config: &RunConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<u8>
where
    C: Command,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut argv = argv.into_iter().map(Into::<String>::into);
    let mut schema = C::schema();
    if let Some(program) = argv.next() {
        schema = schema.with_program(program);
    }

    let mut command = match parse_into::<C, _, _>(&schema, argv) {
        Outcome::Parsed(command) => command,
        Outcome::HelpRequested => {
            write!(out, "{}", render_help(&schema))?;
            return Ok(0);
        }
        Outcome::Failed(e) => return report_usage_error(&schema, &e, config, err),
    };

    if let Err(e) = command.validate() {
        return report_usage_error(&schema, &e, config, err);
    }

    if let Err(e) = command.run() {
        debug!(error = %e, "Command failed");
        writeln!(err, "ERROR: {e}")?;
        return Ok(config.runtime_exit_code);
    }

    Ok(0)
}

/// Runs `C` against the process arguments with default settings.
///
/// Intended to be returned straight from a binary's `main`.
///
/// An argument that is not valid UTF-8 is reported on stderr and ends the
/// run with the usage exit status.
pub fn run_main<C: Command>() -> ExitCode {
    let config = RunConfig::default();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut err = stderr.lock();

    let status = match utf8_args(std::env::args_os()) {
        Ok(argv) => run_with::<C, _, _>(argv, &config, &mut stdout.lock(), &mut err),
        Err(e) => {
            debug!(error = %e, "Rejected command line");
            writeln!(err, "ERROR: {e}").map(|()| config.usage_exit_code)
        }
    };

    match status {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!(error = %e, "Failed to write command output");
            ExitCode::FAILURE
        }
    }
}

/// Converts process arguments to strings, failing on the first one that is
/// not valid UTF-8.
fn utf8_args<I>(args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|bad| ArgParseError::InvalidEncoding(bad.to_string_lossy().into_owned()))
        })
        .collect()
}

fn report_usage_error(
    schema: &Schema,
    error: &ArgParseError,
    config: &RunConfig,
    err: &mut impl Write,
) -> io::Result<u8> {
    debug!(error = %error, usage = error.is_usage_error(), "Rejected command line");
    writeln!(err, "ERROR: {error}\n")?;
    if config.help_on_error {
        write!(err, "{}", render_help(schema))?;
    }
    Ok(config.usage_exit_code)
}
