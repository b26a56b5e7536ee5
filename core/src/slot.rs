//! Schema declaration model.
//!
//! A [`Schema`] is an ordered list of [`Slot`]s. Positional slots are
//! matched by their declaration index; flag slots are matched by key
//! anywhere in the remaining tokens. Indices are handed out by the schema
//! itself as arguments are declared, so two schemas never share a counter.

use crate::Name;

/// A required, string-valued input identified by its declaration order.
///
/// # Examples
///
/// ```
/// use argslot_core::Schema;
///
/// let schema = Schema::new("cp")
///     .argument("source", "File to copy")
///     .argument("dest", "Where to copy it");
///
/// let indices: Vec<usize> = schema.positionals().map(|p| p.index).collect();
/// assert_eq!(indices, vec![0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalSlot {
    /// Field name, also shown as `<name>` in help output.
    pub name: String,
    /// Token position this slot reads from.
    pub index: usize,
    /// Help text.
    pub help: String,
    /// Matched value; empty until parsed.
    pub value: String,
}

/// An optional, boolean-valued input identified by a short or long key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSlot {
    /// Field name the value is reported under.
    pub name: String,
    /// Key and its short/long classification.
    pub key: Name,
    /// Help text.
    pub help: String,
    /// Value before any token is matched.
    pub default: bool,
    /// Current value.
    pub value: bool,
}

/// One declared input unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Positional(PositionalSlot),
    Flag(FlagSlot),
}

impl Slot {
    /// Field name of the slot.
    pub fn name(&self) -> &str {
        match self {
            Self::Positional(p) => &p.name,
            Self::Flag(f) => &f.name,
        }
    }

    /// Help text of the slot.
    pub fn help(&self) -> &str {
        match self {
            Self::Positional(p) => &p.help,
            Self::Flag(f) => &f.help,
        }
    }
}

/// Ordered set of slots describing a command line.
///
/// Build one with [`Schema::new`] and chain [`argument`](Schema::argument)
/// and [`flag`](Schema::flag). Collisions between flag keys, or with the
/// reserved `-h`, are not checked.
///
/// # Examples
///
/// ```
/// use argslot_core::{Name, Schema};
///
/// let schema = Schema::new("tool")
///     .argument("input", "Input file")
///     .flag("verbose", Name::long("verbose"), false, "Print more")
///     .flag("quiet", Name::Short('q'), false, "Print less");
///
/// assert_eq!(schema.len(), 3);
/// assert_eq!(schema.positionals().count(), 1);
/// assert_eq!(schema.flags().count(), 2);
/// assert!(schema.find("quiet").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    /// Program token shown on the usage line.
    pub program: String,
    slots: Vec<Slot>,
    next_index: usize,
}

impl Schema {
    /// Creates an empty schema for `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    /// Replaces the program token used in the usage line.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Declares a positional argument at the next index.
    pub fn argument(mut self, name: impl Into<String>, help: impl Into<String>) -> Self {
        let index = self.next_index;
        self.next_index += 1;
        self.slots.push(Slot::Positional(PositionalSlot {
            name: name.into(),
            index,
            help: help.into(),
            value: String::new(),
        }));
        self
    }

    /// Declares a boolean flag.
    pub fn flag(
        mut self,
        name: impl Into<String>,
        key: Name,
        default: bool,
        help: impl Into<String>,
    ) -> Self {
        self.slots.push(Slot::Flag(FlagSlot {
            name: name.into(),
            key,
            help: help.into(),
            default,
            value: default,
        }));
        self
    }

    /// All slots in declaration order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Slot] {
        &mut self.slots
    }

    /// Number of declared slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if nothing was declared.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Positional slots in declaration order.
    pub fn positionals(&self) -> impl Iterator<Item = &PositionalSlot> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Positional(p) => Some(p),
            Slot::Flag(_) => None,
        })
    }

    /// Flag slots in declaration order.
    pub fn flags(&self) -> impl Iterator<Item = &FlagSlot> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Flag(f) => Some(f),
            Slot::Positional(_) => None,
        })
    }

    /// Finds a slot by field name.
    pub fn find(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.name() == name)
    }
}
