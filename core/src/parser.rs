//! Parse orchestration.
//!
//! [`parse`] walks a schema's slots in declaration order against one shared
//! [`TokenStream`], then rejects any token nothing claimed. A `-h` anywhere
//! in the input short-circuits to [`Outcome::HelpRequested`] before any
//! matching happens.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use crate::error::{ArgParseError, Result};
use crate::matcher::{match_flag, match_positional};
use crate::slot::{Schema, Slot};
use crate::tokens::TokenStream;

/// Token that requests help output.
pub const HELP_TOKEN: &str = "-h";

/// Result of one parse attempt.
#[derive(Debug)]
pub enum Outcome<T> {
    /// Every slot matched and no tokens were left over.
    Parsed(T),
    /// `-h` was present; nothing was matched.
    HelpRequested,
    /// Matching or leftover validation failed.
    Failed(ArgParseError),
}

impl<T> Outcome<T> {
    /// Folds the help signal into `Ok(None)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use argslot_core::{Schema, parse};
    ///
    /// let schema = Schema::new("tool").argument("input", "Input file");
    /// let parsed = parse(&schema, ["data.txt"]).into_result().unwrap();
    /// assert_eq!(parsed.unwrap().text("input"), Some("data.txt"));
    ///
    /// assert!(parse(&schema, ["-h"]).into_result().unwrap().is_none());
    /// ```
    pub fn into_result(self) -> Result<Option<T>> {
        match self {
            Self::Parsed(value) => Ok(Some(value)),
            Self::HelpRequested => Ok(None),
            Self::Failed(err) => Err(err),
        }
    }

    /// Maps the parsed value, leaving help and failure untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Parsed(value) => Outcome::Parsed(f(value)),
            Self::HelpRequested => Outcome::HelpRequested,
            Self::Failed(err) => Outcome::Failed(err),
        }
    }
}

/// Final value of one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Positional value.
    Text(String),
    /// Flag value.
    Switch(bool),
}

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Text(s) => JsonValue::String(s.clone()),
            Value::Switch(b) => JsonValue::Bool(*b),
        }
    }
}

/// Populated values of a successfully parsed schema, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    values: Vec<(String, Value)>,
}

impl ParsedArgs {
    fn from_schema(schema: &Schema) -> Self {
        let values = schema
            .slots()
            .iter()
            .map(|slot| match slot {
                Slot::Positional(p) => (p.name.clone(), Value::Text(p.value.clone())),
                Slot::Flag(f) => (f.name.clone(), Value::Switch(f.value)),
            })
            .collect();
        Self { values }
    }

    /// Value of field `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Positional value of field `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            Value::Text(s) => Some(s),
            Value::Switch(_) => None,
        }
    }

    /// Flag value of field `name`.
    pub fn switch(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            Value::Switch(b) => Some(*b),
            Value::Text(_) => None,
        }
    }

    /// Number of populated fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the schema declared no slots.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fields and values in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// JSON object keyed by field name.
    pub fn to_json(&self) -> JsonValue {
        let map: Map<String, JsonValue> = self
            .values
            .iter()
            .map(|(name, value)| (name.clone(), JsonValue::from(value)))
            .collect();
        JsonValue::Object(map)
    }

    /// Decodes the values into a caller-defined type.
    ///
    /// # Errors
    ///
    /// Returns [`ArgParseError::Decode`] when field names or types do not
    /// line up with `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.to_json())?)
    }
}

/// Parses `args` against a fresh copy of `schema`.
///
/// `args` must not include the program name.
///
/// # Examples
///
/// ```
/// use argslot_core::{Name, Outcome, Schema, parse};
///
/// let schema = Schema::new("tool")
///     .argument("arg1", "First")
///     .argument("arg2", "Second")
///     .flag("verbose", Name::long("verbose"), false, "Print more");
///
/// let Outcome::Parsed(args) = parse(&schema, ["value1", "value2", "--verbose"]) else {
///     panic!("expected a successful parse");
/// };
/// assert_eq!(args.text("arg1"), Some("value1"));
/// assert_eq!(args.text("arg2"), Some("value2"));
/// assert_eq!(args.switch("verbose"), Some(true));
/// ```
pub fn parse<I, S>(schema: &Schema, args: I) -> Outcome<ParsedArgs>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut tokens = TokenStream::from_args(args);
    if tokens.contains(HELP_TOKEN) {
        debug!(program = %schema.program, "Help requested");
        return Outcome::HelpRequested;
    }

    let mut working = schema.clone();
    match populate(&mut working, &mut tokens) {
        Ok(()) => {
            debug!(program = %schema.program, slots = working.len(), "Parsed command line");
            Outcome::Parsed(ParsedArgs::from_schema(&working))
        }
        Err(err) => Outcome::Failed(err),
    }
}

/// Parses `args` and decodes the result into `T`.
///
/// # Examples
///
/// ```
/// use argslot_core::{Name, Outcome, Schema, parse_into};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Args {
///     input: String,
///     force: bool,
/// }
///
/// let schema = Schema::new("tool")
///     .argument("input", "Input file")
///     .flag("force", Name::Short('f'), false, "Overwrite");
///
/// let Outcome::Parsed(args) = parse_into::<Args, _, _>(&schema, ["in.txt", "-f"]) else {
///     panic!("expected a successful parse");
/// };
/// assert_eq!(args.input, "in.txt");
/// assert!(args.force);
/// ```
pub fn parse_into<T, I, S>(schema: &Schema, args: I) -> Outcome<T>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    match parse(schema, args) {
        Outcome::Parsed(parsed) => match parsed.deserialize() {
            Ok(value) => Outcome::Parsed(value),
            Err(err) => Outcome::Failed(err),
        },
        Outcome::HelpRequested => Outcome::HelpRequested,
        Outcome::Failed(err) => Outcome::Failed(err),
    }
}

fn populate(schema: &mut Schema, tokens: &mut TokenStream) -> Result<()> {
    for slot in schema.slots_mut() {
        match slot {
            Slot::Positional(p) => match_positional(p, tokens)?,
            Slot::Flag(f) => match_flag(f, tokens)?,
        }
    }

    let leftover: Vec<String> = tokens.unmatched().into_iter().map(String::from).collect();
    if !leftover.is_empty() {
        debug!(?leftover, "Unmatched tokens");
        return Err(ArgParseError::UnknownArguments(leftover));
    }

    Ok(())
}
