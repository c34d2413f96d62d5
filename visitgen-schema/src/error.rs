//! Error types for schema parsing and validation.

use thiserror::Error;

/// Error type for schema entry and field-list parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Schema entry without the `Name : fields` separator.
    #[error("schema entry '{entry}' is missing the ':' separator")]
    MissingSeparator {
        /// Offending entry text.
        entry: String,
    },

    /// Node name is empty or not a valid identifier.
    #[error("invalid node name '{name}' in schema entry '{entry}'")]
    InvalidNodeName {
        /// Offending name.
        name: String,
        /// Entry the name was read from.
        entry: String,
    },

    /// Field could not be split into a type and a name.
    #[error("cannot split field '{field}' into type and name")]
    MalformedField {
        /// Offending field text.
        field: String,
    },

    /// Field name is not a valid identifier.
    #[error("invalid field name '{name}' in field '{field}'")]
    InvalidFieldName {
        /// Offending name.
        name: String,
        /// Field the name was read from.
        field: String,
    },

    /// Generic type with mismatched angle brackets.
    #[error("unbalanced angle brackets in field '{field}'")]
    UnbalancedGeneric {
        /// Offending field text.
        field: String,
    },

    /// Empty field between two separators.
    #[error("empty field at position {position} in field list '{list}'")]
    EmptyField {
        /// Zero-based field position.
        position: usize,
        /// The whole field list.
        list: String,
    },

    /// Field list of a specific node failed to parse.
    #[error("node '{node}': {source}")]
    Node {
        /// Node name.
        node: String,
        /// Underlying parse error.
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Creates a malformed field error.
    pub fn malformed(field: impl Into<String>) -> Self {
        Self::MalformedField {
            field: field.into(),
        }
    }

    /// Wraps this error with the node it belongs to.
    #[must_use]
    pub fn in_node(self, node: impl Into<String>) -> Self {
        Self::Node {
            node: node.into(),
            source: Box::new(self),
        }
    }
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Family declared without a name.
    #[error("family has an empty name")]
    EmptyFamilyName,

    /// Family declared without any return type.
    #[error("family '{family}' declares no return types")]
    NoReturnTypes {
        /// Family name.
        family: String,
    },

    /// Return type listed more than once.
    #[error("family '{family}' declares return type '{return_type}' more than once")]
    DuplicateReturnType {
        /// Family name.
        family: String,
        /// Repeated return type.
        return_type: String,
    },

    /// Duplicate family definition.
    #[error("duplicate family definition: '{name}'")]
    DuplicateFamily {
        /// Family name.
        name: String,
    },

    /// Duplicate node within a family.
    #[error("duplicate node '{node}' in family '{family}'")]
    DuplicateNode {
        /// Family name.
        family: String,
        /// Node name.
        node: String,
    },

    /// Node declared under a family other than the one holding it.
    #[error("node '{node}' declares base '{declared}' but belongs to family '{family}'")]
    FamilyMismatch {
        /// Node name.
        node: String,
        /// Base family written in the node entry.
        declared: String,
        /// Family that holds the node.
        family: String,
    },

    /// Node absent from the type tag table under a deny policy.
    #[error("node '{node}' in family '{family}' has no type tag")]
    Untagged {
        /// Family name.
        family: String,
        /// Node name.
        node: String,
    },

    /// Family imports a family that is not part of the schema.
    #[error("family '{family}' imports unknown family '{import}'")]
    UnknownImport {
        /// Family name.
        family: String,
        /// Imported family name.
        import: String,
    },
}
