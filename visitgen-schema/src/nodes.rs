//! Node and field definitions.
//!
//! This module contains the data structures describing one concrete node
//! kind and the fields it carries.

use std::fmt;

/// Node schema entry: one concrete node kind of a family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDef {
    /// Node (and generated class) name.
    pub name: String,
    /// Name of the family base class the node derives from.
    pub family: String,
    /// Raw comma-separated field list, e.g. `Expr* left, Token op`.
    pub fields_raw: String,
}

impl NodeDef {
    /// Creates a new node definition.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        family: impl Into<String>,
        fields_raw: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            family: family.into(),
            fields_raw: fields_raw.into(),
        }
    }

    /// Returns true if the node declares no fields.
    #[must_use]
    pub fn has_no_fields(&self) -> bool {
        self.fields_raw.trim().is_empty()
    }
}

/// What a generated node must release when it is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// Exclusively owned pointer to a single child.
    Owned,
    /// Exclusively owned collection of child pointers.
    OwnedCollection,
    /// Plain value, nothing to release.
    Value,
}

impl Ownership {
    /// Classifies a declared type.
    ///
    /// A pointer marker without a generic marker owns one child, a pointer
    /// inside a generic owns every element, anything else is a value.
    #[must_use]
    pub fn classify(type_name: &str) -> Self {
        let pointer = type_name.contains('*');
        let generic = type_name.contains('>');
        match (pointer, generic) {
            (true, false) => Self::Owned,
            (true, true) => Self::OwnedCollection,
            _ => Self::Value,
        }
    }

    /// Returns true if the destructor has to release something.
    #[must_use]
    pub const fn needs_release(&self) -> bool {
        !matches!(self, Self::Value)
    }
}

/// Parsed field of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Declared C++ type, e.g. `vector < Expr* >`.
    pub type_name: String,
    /// Member (and constructor parameter) name.
    pub name: String,
    /// Ownership classification of the declared type.
    pub ownership: Ownership,
}

impl FieldDef {
    /// Creates a new field, classifying its ownership from the type.
    #[must_use]
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        let ownership = Ownership::classify(&type_name);
        Self {
            type_name,
            name: name.into(),
            ownership,
        }
    }

    /// Returns the declaration text, e.g. `Expr* left`.
    #[must_use]
    pub fn declaration(&self) -> String {
        format!("{} {}", self.type_name, self.name)
    }
}

impl fmt::Display for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.name)
    }
}
