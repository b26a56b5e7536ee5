//! Flag key classification.
//!
//! A flag is addressed on the command line either by a single character
//! after one dash (`-v`) or by a multi-character word after two dashes
//! (`--verbose`). [`Name`] fixes that classification at declaration time.

use std::fmt;

/// Key of a flag, classified as short or long.
///
/// # Examples
///
/// ```
/// use argslot_core::Name;
///
/// let short = Name::Short('s');
/// assert_eq!(short.key(), "s");
/// assert_eq!(short.token(), "-s");
///
/// let long = Name::long("verbose");
/// assert!(long.is_long());
/// assert_eq!(long.token(), "--verbose");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Name {
    /// Single-character key, matched as `-k`.
    Short(char),
    /// Multi-character key, matched as `--key`.
    Long(String),
}

impl Name {
    /// Creates a long name.
    pub fn long(key: impl Into<String>) -> Self {
        Self::Long(key.into())
    }

    /// Classifies a bare key by its length.
    ///
    /// One character yields [`Name::Short`], more yields [`Name::Long`].
    /// Returns `None` for an empty key.
    ///
    /// # Examples
    ///
    /// ```
    /// use argslot_core::Name;
    ///
    /// assert_eq!(Name::parse("f"), Some(Name::Short('f')));
    /// assert_eq!(Name::parse("force"), Some(Name::long("force")));
    /// assert_eq!(Name::parse(""), None);
    /// ```
    pub fn parse(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        let first = chars.next()?;
        if chars.next().is_none() {
            Some(Self::Short(first))
        } else {
            Some(Self::Long(key.to_string()))
        }
    }

    /// Literal key text without dashes.
    pub fn key(&self) -> String {
        match self {
            Self::Short(c) => c.to_string(),
            Self::Long(s) => s.clone(),
        }
    }

    /// Whether the key uses the two-dash form.
    pub fn is_long(&self) -> bool {
        matches!(self, Self::Long(_))
    }

    /// Exact command-line token that selects this flag.
    pub fn token(&self) -> String {
        match self {
            Self::Short(c) => format!("-{c}"),
            Self::Long(s) => format!("--{s}"),
        }
    }

    /// Whether `token` selects this flag.
    pub fn matches(&self, token: &str) -> bool {
        match self {
            Self::Short(c) => token
                .strip_prefix('-')
                .is_some_and(|rest| rest.chars().eq(std::iter::once(*c))),
            Self::Long(s) => token.strip_prefix("--") == Some(s.as_str()),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_matches_single_dash_only() {
        let name = Name::Short('f');
        assert!(name.matches("-f"));
        assert!(!name.matches("--f"));
        assert!(!name.matches("f"));
        assert!(!name.matches("-ff"));
    }

    #[test]
    fn test_long_name_matches_double_dash_only() {
        let name = Name::long("flag");
        assert!(name.matches("--flag"));
        assert!(!name.matches("-flag"));
        assert!(!name.matches("--flags"));
    }

    #[test]
    fn test_name_matches_its_own_token() {
        let dash = Name::Short('-');
        assert_eq!(dash.token(), "--");
        assert!(dash.matches(&dash.token()));
        assert!(!dash.matches("-"));
        assert!(!dash.matches("---"));

        for name in [Name::Short('f'), Name::Short('é'), Name::long("flag")] {
            assert!(name.matches(&name.token()));
        }
    }

    #[test]
    fn test_parse_classifies_by_length() {
        assert_eq!(Name::parse("x"), Some(Name::Short('x')));
        assert!(Name::parse("xy").is_some_and(|n| n.is_long()));
        assert_eq!(Name::parse("é"), Some(Name::Short('é')));
    }
}
