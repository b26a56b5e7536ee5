//! Index-preserving token stream.
//!
//! Matched tokens are tombstoned rather than removed so that positional
//! slots can keep addressing the stream by absolute index.

/// One entry of a [`TokenStream`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Not yet claimed by any slot.
    Pending(String),
    /// Claimed by a slot.
    Consumed,
}

impl Token {
    /// Text of a pending token; a consumed entry reads as empty.
    pub fn text(&self) -> &str {
        match self {
            Self::Pending(s) => s,
            Self::Consumed => "",
        }
    }
}

/// Mutable working list of raw command-line tokens for one parse.
///
/// # Examples
///
/// ```
/// use argslot_core::TokenStream;
///
/// let mut tokens = TokenStream::from_args(["a", "-v", "b"]);
/// assert_eq!(tokens.consume(1).as_deref(), Some("-v"));
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens.remaining(), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Builds a stream from argument strings, program name already removed.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: args.into_iter().map(|s| Token::Pending(s.into())).collect(),
        }
    }

    /// Number of positions, consumed or not.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the stream has no positions at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Marks `index` consumed, returning the text it held if it was pending.
    pub fn consume(&mut self, index: usize) -> Option<String> {
        let slot = self.tokens.get_mut(index)?;
        match std::mem::replace(slot, Token::Consumed) {
            Token::Pending(s) => Some(s),
            Token::Consumed => None,
        }
    }

    /// Whether a pending token equals `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.tokens
            .iter()
            .any(|t| matches!(t, Token::Pending(s) if s == needle))
    }

    /// Pending entries with their positions, in stream order.
    pub fn pending(&self) -> impl Iterator<Item = (usize, &str)> {
        self.tokens.iter().enumerate().filter_map(|(i, t)| match t {
            Token::Pending(s) => Some((i, s.as_str())),
            Token::Consumed => None,
        })
    }

    /// Text of every pending token, in stream order.
    pub fn remaining(&self) -> Vec<&str> {
        self.pending().map(|(_, s)| s).collect()
    }

    /// Pending tokens with text, in stream order; empty arguments are skipped.
    pub fn unmatched(&self) -> Vec<&str> {
        self.pending().map(|(_, s)| s).filter(|s| !s.is_empty()).collect()
    }

    /// Returns `true` once every position has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.tokens.iter().all(|t| *t == Token::Consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_keeps_positions() {
        let mut tokens = TokenStream::from_args(["one", "two", "three"]);
        tokens.consume(0);

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens.get(0), Some(&Token::Consumed));
        assert_eq!(tokens.get(1).map(Token::text), Some("two"));
    }

    #[test]
    fn test_consume_twice_returns_none() {
        let mut tokens = TokenStream::from_args(["x"]);
        assert_eq!(tokens.consume(0), Some("x".to_string()));
        assert_eq!(tokens.consume(0), None);
        assert_eq!(tokens.consume(5), None);
    }

    #[test]
    fn test_empty_argument_is_still_pending() {
        let tokens = TokenStream::from_args([""]);
        assert!(!tokens.is_exhausted());
        assert_eq!(tokens.remaining(), vec![""]);
    }

    #[test]
    fn test_unmatched_skips_empty_arguments() {
        let mut tokens = TokenStream::from_args(["a", "", "-x", ""]);
        tokens.consume(0);
        assert_eq!(tokens.unmatched(), vec!["-x"]);
        assert_eq!(tokens.remaining(), vec!["", "-x", ""]);
    }

    #[test]
    fn test_contains_ignores_consumed() {
        let mut tokens = TokenStream::from_args(["-h"]);
        assert!(tokens.contains("-h"));
        tokens.consume(0);
        assert!(!tokens.contains("-h"));
        assert!(tokens.is_exhausted());
    }
}
