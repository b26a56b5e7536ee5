//! Declarative command-line argument parsing.
//!
//! A caller declares a [`Schema`] of ordered positional arguments and
//! boolean flags, then hands the process arguments to [`parse`]:
//!
//! - [`PositionalSlot`]: a required string value read from a fixed token
//!   position (its declaration index).
//! - [`FlagSlot`]: an optional boolean toggled by `-k` or `--key` anywhere
//!   in the input.
//! - [`TokenStream`]: the tokens being consumed; matched entries are
//!   tombstoned so positions never shift.
//! - [`Outcome`]: parsed values, a help request (`-h`), or an
//!   [`ArgParseError`].
//!
//! Positional values are addressed by absolute position, so flags must
//! follow every positional value on the command line.
//!
//! [`render_help`] produces the usage text, and the [`Command`] trait with
//! [`run_with`] wires parsing, validation and execution into exit statuses.
//!
//! # Example
//!
//! ```
//! use argslot_core::*;
//!
//! let schema = Schema::new("mycli")
//!     .argument("input", "File to read")
//!     .flag("verbose", Name::long("verbose"), false, "Enable verbose output")
//!     .flag("quiet", Name::Short('q'), false, "Suppress output");
//!
//! let args = parse(&schema, ["data.txt", "--verbose"]).into_result().unwrap().unwrap();
//! assert_eq!(args.text("input"), Some("data.txt"));
//! assert_eq!(args.switch("verbose"), Some(true));
//! assert_eq!(args.switch("quiet"), Some(false));
//!
//! let err = parse(&schema, ["data.txt", "-x"]).into_result().unwrap_err();
//! assert!(matches!(err, ArgParseError::UnknownArguments(_)));
//!
//! assert!(matches!(parse(&schema, ["-h"]), Outcome::HelpRequested));
//! assert!(render_help(&schema).starts_with("USAGE: mycli <input> [<options>]"));
//! ```

mod command;
mod config;
mod error;
mod help;
mod matcher;
mod name;
mod parser;
mod slot;
mod tokens;

pub use command::{Command, run_main, run_with};
pub use config::{DEFAULT_RUNTIME_EXIT_CODE, DEFAULT_USAGE_EXIT_CODE, RunConfig};
pub use error::{ArgParseError, Result};
pub use help::render_help;
pub use matcher::{match_flag, match_positional};
pub use name::Name;
pub use parser::{HELP_TOKEN, Outcome, ParsedArgs, Value, parse, parse_into};
pub use slot::{FlagSlot, PositionalSlot, Schema, Slot};
pub use tokens::{Token, TokenStream};
