//! Single-character type tags.
//!
//! Generated nodes expose a `char type() const` accessor for lightweight
//! runtime identification. The tags are hand-maintained here; nodes missing
//! from the table fall back to [`TypeTag::Sentinel`].

use std::collections::BTreeMap;
use std::fmt;

/// Type tag resolved for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Tag character from the table.
    Tag(char),
    /// Node has no table entry.
    Sentinel,
}

impl TypeTag {
    /// Returns the tag as a C++ character literal, e.g. `'b'` or `'\0'`.
    #[must_use]
    pub fn cpp_literal(&self) -> String {
        match self {
            Self::Tag('\'') => "'\\''".to_string(),
            Self::Tag('\\') => "'\\\\'".to_string(),
            Self::Tag(c) => format!("'{}'", c),
            Self::Sentinel => "'\\0'".to_string(),
        }
    }

    /// Returns true if this is the sentinel tag.
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        matches!(self, Self::Sentinel)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cpp_literal())
    }
}

/// Mapping from node name to type tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeTagTable {
    tags: BTreeMap<String, char>,
}

impl TypeTagTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the tag for a node.
    #[must_use]
    pub fn with(mut self, node: impl Into<String>, tag: char) -> Self {
        self.insert(node, tag);
        self
    }

    /// Adds (or replaces) the tag for a node.
    pub fn insert(&mut self, node: impl Into<String>, tag: char) {
        self.tags.insert(node.into(), tag);
    }

    /// Looks up the tag for a node, falling back to the sentinel.
    #[must_use]
    pub fn lookup(&self, node: &str) -> TypeTag {
        self.tags
            .get(node)
            .map_or(TypeTag::Sentinel, |&c| TypeTag::Tag(c))
    }

    /// Returns true if the node has an entry.
    #[must_use]
    pub fn contains(&self, node: &str) -> bool {
        self.tags.contains_key(node)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterates over `(node, tag)` entries in node-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, char)> {
        self.tags.iter().map(|(name, &tag)| (name.as_str(), tag))
    }

    /// Returns the tag table used by the Croix interpreter.
    #[must_use]
    pub fn croix() -> Self {
        [
            ("Binary", 'b'),
            ("Unary", 'U'),
            ("Grouping", 'G'),
            ("Boolean", 'B'),
            ("Number", 'N'),
            ("String", 's'),
            ("Expression", 'E'),
            ("Print", 'P'),
            ("Var", 'V'),
            ("Variable", 'v'),
            ("Block", '{'),
            ("If", 'i'),
            ("Logical", 'L'),
            ("While", 'W'),
            ("Call", 'C'),
            ("Function", 'F'),
            ("Return", 'R'),
            ("Class", 'c'),
            ("Get", 'g'),
            ("Set", 'S'),
            ("This", 'T'),
            ("Super", 'p'),
        ]
        .into_iter()
        .fold(Self::new(), |table, (node, tag)| table.with(node, tag))
    }
}
