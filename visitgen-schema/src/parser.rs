//! Node schema parser.
//!
//! This module parses the compact `Name : type name, type name` notation the
//! built-in schemas are written in, and the field lists it carries.

use crate::error::ParseError;
use crate::nodes::{FieldDef, NodeDef};

/// Separator between node name and field list in a schema entry.
const ENTRY_SEPARATOR: char = ':';

/// Parses a schema entry such as `Binary : Expr* left, Token op, Expr* right`.
///
/// # Arguments
/// * `family` - Family the node belongs to
/// * `entry` - Entry text
///
/// # Returns
/// The node definition with its raw field list.
///
/// # Errors
/// Returns `ParseError` if the separator is missing or the name is not an
/// identifier.
pub fn parse_entry(family: &str, entry: &str) -> Result<NodeDef, ParseError> {
    let (name, fields) =
        entry
            .split_once(ENTRY_SEPARATOR)
            .ok_or_else(|| ParseError::MissingSeparator {
                entry: entry.to_string(),
            })?;

    let name = name.trim();
    if !is_identifier(name) {
        return Err(ParseError::InvalidNodeName {
            name: name.to_string(),
            entry: entry.to_string(),
        });
    }

    Ok(NodeDef::new(name, family, fields.trim()))
}

/// Parses a field list such as `Token name, vector < Expr* > arguments`.
///
/// An empty (or blank) list yields no fields.
///
/// # Errors
/// Returns `ParseError` if any field cannot be split into a type and a name.
pub fn parse_fields(list: &str) -> Result<Vec<FieldDef>, ParseError> {
    let list = list.trim();
    if list.is_empty() {
        return Ok(Vec::new());
    }

    split_top_level(list)
        .into_iter()
        .enumerate()
        .map(|(position, field)| {
            let field = field.trim();
            if field.is_empty() {
                return Err(ParseError::EmptyField {
                    position,
                    list: list.to_string(),
                });
            }
            parse_field(field)
        })
        .collect()
}

/// Parses one `type name` pair.
///
/// For generic types the name is whatever follows the last closing angle
/// bracket; otherwise it is the last whitespace-separated token.
///
/// # Errors
/// Returns `ParseError` if the field has no name, no type, an invalid name or
/// unbalanced angle brackets.
pub fn parse_field(field: &str) -> Result<FieldDef, ParseError> {
    let field = field.trim();

    let (type_name, name) = if let Some(close) = field.rfind('>') {
        if !balanced_generics(field) {
            return Err(ParseError::UnbalancedGeneric {
                field: field.to_string(),
            });
        }
        (&field[..=close], &field[close + 1..])
    } else if field.contains('<') {
        return Err(ParseError::UnbalancedGeneric {
            field: field.to_string(),
        });
    } else {
        field
            .rsplit_once(char::is_whitespace)
            .ok_or_else(|| ParseError::malformed(field))?
    };

    let type_name = type_name.trim();
    let name = name.trim();
    if type_name.is_empty() || name.is_empty() {
        return Err(ParseError::malformed(field));
    }
    if !is_identifier(name) {
        return Err(ParseError::InvalidFieldName {
            name: name.to_string(),
            field: field.to_string(),
        });
    }

    Ok(FieldDef::new(type_name, name))
}

/// Returns true if `s` is a C-style identifier.
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Splits on commas that are not nested inside angle brackets.
fn split_top_level(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, c) in list.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&list[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&list[start..]);

    parts
}

/// Checks that every `<` is closed and no `>` comes first.
fn balanced_generics(field: &str) -> bool {
    let mut depth = 0i32;
    for c in field.chars() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}
