//! Slot matchers.
//!
//! Positional slots read the token at their fixed declaration index. Flags
//! are matched by scanning the whole stream, so a flag may sit anywhere as
//! long as it does not occupy a position a later positional slot reads.
//! Callers should therefore put flags after all positional values.

use tracing::trace;

use crate::error::{ArgParseError, Result};
use crate::slot::{FlagSlot, PositionalSlot};
use crate::tokens::TokenStream;

/// Fills `slot` from the token at its declaration index.
///
/// A consumed entry at that index reads as an empty value.
///
/// # Examples
///
/// ```
/// use argslot_core::{Schema, TokenStream, match_positional};
///
/// let schema = Schema::new("tool").argument("input", "Input file");
/// let mut slot = schema.positionals().next().unwrap().clone();
/// let mut tokens = TokenStream::from_args(["data.txt", "extra"]);
///
/// match_positional(&mut slot, &mut tokens).unwrap();
/// assert_eq!(slot.value, "data.txt");
/// assert_eq!(tokens.remaining(), vec!["extra"]);
/// ```
pub fn match_positional(slot: &mut PositionalSlot, tokens: &mut TokenStream) -> Result<()> {
    let Some(token) = tokens.get(slot.index) else {
        return Err(ArgParseError::MissingArgument {
            name: slot.name.clone(),
            index: slot.index,
        });
    };

    let text = token.text();
    if text.starts_with('-') {
        return Err(ArgParseError::InvalidArgument {
            name: slot.name.clone(),
            index: slot.index,
            token: text.to_string(),
        });
    }

    slot.value = tokens.consume(slot.index).unwrap_or_default();
    trace!(name = %slot.name, index = slot.index, value = %slot.value, "Matched positional argument");
    Ok(())
}

/// Toggles `slot` for an occurrence of its key anywhere in the stream.
///
/// The value is toggled on every match; a second match fails with
/// [`ArgParseError::RepeatedFlag`] after toggling.
///
/// # Examples
///
/// ```
/// use argslot_core::{Name, Schema, TokenStream, match_flag};
///
/// let schema = Schema::new("tool").flag("force", Name::Short('f'), false, "Force");
/// let mut slot = schema.flags().next().unwrap().clone();
/// let mut tokens = TokenStream::from_args(["a", "-f"]);
///
/// match_flag(&mut slot, &mut tokens).unwrap();
/// assert!(slot.value);
/// assert_eq!(tokens.remaining(), vec!["a"]);
/// ```
pub fn match_flag(slot: &mut FlagSlot, tokens: &mut TokenStream) -> Result<()> {
    let hits: Vec<usize> = tokens
        .pending()
        .filter(|(_, text)| slot.key.matches(text))
        .map(|(index, _)| index)
        .collect();

    let mut seen = false;
    for index in hits {
        slot.value = !slot.value;
        if seen {
            return Err(ArgParseError::RepeatedFlag {
                flag: slot.key.token(),
            });
        }
        tokens.consume(index);
        seen = true;
        trace!(name = %slot.name, index, value = slot.value, "Matched flag");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Name, Schema};

    fn positional(name: &str, index: usize) -> PositionalSlot {
        PositionalSlot {
            name: name.to_string(),
            index,
            help: String::new(),
            value: String::new(),
        }
    }

    fn flag(key: Name, default: bool) -> FlagSlot {
        Schema::new("tool")
            .flag("flag", key, default, "Test flag")
            .flags()
            .next()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_positional_takes_first_value() {
        let mut slot = positional("input", 0);
        let mut tokens = TokenStream::from_args(["value1", "value2", "value3"]);

        match_positional(&mut slot, &mut tokens).unwrap();

        assert_eq!(slot.value, "value1");
        assert_eq!(tokens.remaining(), vec!["value2", "value3"]);
    }

    #[test]
    fn test_positional_missing() {
        let mut slot = positional("input", 0);
        let mut tokens = TokenStream::from_args(Vec::<String>::new());

        let err = match_positional(&mut slot, &mut tokens).unwrap_err();
        assert!(matches!(err, ArgParseError::MissingArgument { index: 0, .. }));
        assert_eq!(err.to_string(), "Expected argument <input> at position 0");
    }

    #[test]
    fn test_positional_rejects_flag_shaped_token() {
        let mut slot = positional("input", 0);
        let mut tokens = TokenStream::from_args(["-f"]);

        let err = match_positional(&mut slot, &mut tokens).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected argument <input> at position 0. Got Flag -f"
        );
        assert_eq!(tokens.remaining(), vec!["-f"]);
    }

    #[test]
    fn test_positional_reads_consumed_position_as_empty() {
        let mut slot = positional("second", 1);
        let mut tokens = TokenStream::from_args(["a", "-v", "b"]);
        tokens.consume(1);

        match_positional(&mut slot, &mut tokens).unwrap();
        assert_eq!(slot.value, "");
        assert_eq!(tokens.remaining(), vec!["a", "b"]);
    }

    #[test]
    fn test_flag_short_and_long() {
        let mut short = flag(Name::Short('f'), false);
        let mut long = flag(Name::long("flag"), false);
        let mut tokens = TokenStream::from_args(["--flag", "-f"]);

        match_flag(&mut short, &mut tokens).unwrap();
        match_flag(&mut long, &mut tokens).unwrap();

        assert!(short.value);
        assert!(long.value);
        assert!(tokens.is_exhausted());
    }

    #[test]
    fn test_flag_toggles_true_default() {
        let mut slot = flag(Name::Short('f'), true);
        let mut tokens = TokenStream::from_args(["-f"]);

        match_flag(&mut slot, &mut tokens).unwrap();
        assert!(!slot.value);
    }

    #[test]
    fn test_flag_absent_keeps_default() {
        let mut slot = flag(Name::long("flag"), true);
        let mut tokens = TokenStream::from_args(["-f", "flag"]);

        match_flag(&mut slot, &mut tokens).unwrap();
        assert!(slot.value);
        assert_eq!(tokens.remaining(), vec!["-f", "flag"]);
    }

    #[test]
    fn test_flag_repeated() {
        let mut slot = flag(Name::Short('f'), false);
        let mut tokens = TokenStream::from_args(["-f", "-f"]);

        let err = match_flag(&mut slot, &mut tokens).unwrap_err();
        assert_eq!(err.to_string(), "Flag -f is passed more than once");
    }
}
