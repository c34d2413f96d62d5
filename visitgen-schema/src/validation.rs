//! Schema validation utilities.
//!
//! This module checks a schema for consistency before any text is emitted.
//! Structural problems are errors; drift between the node lists and the type
//! tag table is reported according to an [`UntaggedPolicy`].

use crate::error::SchemaError;
use crate::parser::parse_fields;
use crate::types::{FamilyDef, Schema};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// How to treat nodes that have no type tag table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UntaggedPolicy {
    /// Accept the sentinel tag silently.
    Allow,
    /// Accept the sentinel tag and report a warning.
    #[default]
    Warn,
    /// Reject the schema.
    Deny,
}

/// Non-fatal finding of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Node falls back to the sentinel tag.
    Untagged {
        /// Family name.
        family: String,
        /// Node name.
        node: String,
    },
    /// Several nodes share one tag character.
    DuplicateTag {
        /// Shared tag.
        tag: char,
        /// Nodes using it, in name order.
        nodes: Vec<String>,
    },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Untagged { family, node } => write!(
                f,
                "node '{}' in family '{}' has no type tag, using sentinel",
                node, family
            ),
            Self::DuplicateTag { tag, nodes } => {
                write!(f, "type tag '{}' is shared by {}", tag, nodes.join(", "))
            }
        }
    }
}

/// Outcome of a successful validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Warnings, in discovery order.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Returns true if no warnings were raised.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Validates a schema for correctness.
///
/// # Arguments
/// * `schema` - The schema to validate
/// * `policy` - Treatment of nodes missing from the tag table
///
/// # Returns
/// A report of non-fatal findings.
///
/// # Errors
/// Returns `SchemaError` describing the first structural problem found.
pub fn validate_schema(
    schema: &Schema,
    policy: UntaggedPolicy,
) -> Result<ValidationReport, SchemaError> {
    let mut report = ValidationReport::default();
    let mut seen_families = HashSet::new();

    for family in schema.families() {
        if !seen_families.insert(family.name.as_str()) {
            return Err(SchemaError::DuplicateFamily {
                name: family.name.clone(),
            });
        }

        validate_family(schema, family)?;
        validate_nodes(family)?;
        validate_tags(schema, family, policy, &mut report)?;
    }

    report.warnings.extend(duplicate_tags(schema));

    Ok(report)
}

/// Validates the family-level settings.
fn validate_family(schema: &Schema, family: &FamilyDef) -> Result<(), SchemaError> {
    if family.name.trim().is_empty() {
        return Err(SchemaError::EmptyFamilyName);
    }

    if family.return_types.is_empty() {
        return Err(SchemaError::NoReturnTypes {
            family: family.name.clone(),
        });
    }

    let mut seen = HashSet::new();
    for return_type in &family.return_types {
        if !seen.insert(return_type) {
            return Err(SchemaError::DuplicateReturnType {
                family: family.name.clone(),
                return_type: return_type.to_string(),
            });
        }
    }

    for import in family.imports() {
        if !schema.has_family(import) {
            return Err(SchemaError::UnknownImport {
                family: family.name.clone(),
                import: import.to_string(),
            });
        }
    }

    Ok(())
}

/// Validates the nodes of a family.
fn validate_nodes(family: &FamilyDef) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for node in &family.nodes {
        if !seen.insert(node.name.as_str()) {
            return Err(SchemaError::DuplicateNode {
                family: family.name.clone(),
                node: node.name.clone(),
            });
        }

        if node.family != family.name {
            return Err(SchemaError::FamilyMismatch {
                node: node.name.clone(),
                declared: node.family.clone(),
                family: family.name.clone(),
            });
        }

        parse_fields(&node.fields_raw).map_err(|e| e.in_node(&node.name))?;
    }

    Ok(())
}

/// Checks every node of a family against the tag table.
fn validate_tags(
    schema: &Schema,
    family: &FamilyDef,
    policy: UntaggedPolicy,
    report: &mut ValidationReport,
) -> Result<(), SchemaError> {
    for node in family.node_names().filter(|n| !schema.tags.contains(n)) {
        match policy {
            UntaggedPolicy::Allow => {}
            UntaggedPolicy::Warn => report.warnings.push(ValidationWarning::Untagged {
                family: family.name.clone(),
                node: node.to_string(),
            }),
            UntaggedPolicy::Deny => {
                return Err(SchemaError::Untagged {
                    family: family.name.clone(),
                    node: node.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Finds tag characters assigned to more than one node.
fn duplicate_tags(schema: &Schema) -> Vec<ValidationWarning> {
    let mut by_tag: BTreeMap<char, Vec<String>> = BTreeMap::new();
    for (node, tag) in schema.tags.iter() {
        by_tag.entry(tag).or_default().push(node.to_string());
    }

    by_tag
        .into_iter()
        .filter(|(_, nodes)| nodes.len() > 1)
        .map(|(tag, nodes)| ValidationWarning::DuplicateTag { tag, nodes })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use crate::nodes::NodeDef;
    use crate::tags::TypeTagTable;
    use crate::types::{FamilyKind, Include, ReturnType};

    fn single_family(tags: TypeTagTable, nodes: &[(&str, &str)]) -> Schema {
        let mut family =
            FamilyDef::new("Expr", FamilyKind::Expression).with_return(ReturnType::new("string"));
        for (name, fields) in nodes {
            family.add_node(NodeDef::new(*name, "Expr", *fields));
        }
        let mut schema = Schema::new(tags);
        schema.add_family(family);
        schema
    }

    #[test]
    fn test_validate_builtin_schema() {
        let schema = builtin::croix_schema().expect("Failed to build");
        let report = validate_schema(&schema, UntaggedPolicy::Warn).expect("Failed to validate");

        // Assign and Nil are deliberately untagged.
        assert_eq!(
            report.warnings,
            vec![
                ValidationWarning::Untagged {
                    family: "Expr".to_string(),
                    node: "Assign".to_string(),
                },
                ValidationWarning::Untagged {
                    family: "Expr".to_string(),
                    node: "Nil".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_untagged_policies() {
        let schema = single_family(TypeTagTable::new(), &[("Nil", "")]);

        let report = validate_schema(&schema, UntaggedPolicy::Allow).expect("Failed to validate");
        assert!(report.is_clean());

        let report = validate_schema(&schema, UntaggedPolicy::Warn).expect("Failed to validate");
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].to_string().contains("Nil"));

        let result = validate_schema(&schema, UntaggedPolicy::Deny);
        assert!(matches!(result, Err(SchemaError::Untagged { ref node, .. }) if node == "Nil"));
    }

    #[test]
    fn test_duplicate_node() {
        let schema = single_family(
            TypeTagTable::new(),
            &[("Number", "double value"), ("Number", "int value")],
        );
        let result = validate_schema(&schema, UntaggedPolicy::Allow);
        assert!(matches!(result, Err(SchemaError::DuplicateNode { .. })));
    }

    #[test]
    fn test_malformed_field() {
        let schema = single_family(TypeTagTable::new(), &[("Grouping", "Expr*")]);
        let result = validate_schema(&schema, UntaggedPolicy::Allow);
        assert!(matches!(result, Err(SchemaError::Parse(_))));
    }

    #[test]
    fn test_family_mismatch() {
        let mut family =
            FamilyDef::new("Stmt", FamilyKind::Statement).with_return(ReturnType::void());
        family.add_node(NodeDef::new("Print", "Expr", "Expr* expr"));
        let mut schema = Schema::new(TypeTagTable::croix());
        schema.add_family(family);

        let result = validate_schema(&schema, UntaggedPolicy::Allow);
        assert!(matches!(result, Err(SchemaError::FamilyMismatch { .. })));
    }

    #[test]
    fn test_return_types() {
        let mut schema = Schema::new(TypeTagTable::new());
        schema.add_family(FamilyDef::new("Expr", FamilyKind::Expression));
        assert!(matches!(
            validate_schema(&schema, UntaggedPolicy::Allow),
            Err(SchemaError::NoReturnTypes { .. })
        ));

        let mut schema = Schema::new(TypeTagTable::new());
        schema.add_family(
            FamilyDef::new("Expr", FamilyKind::Expression)
                .with_return(ReturnType::void())
                .with_return(ReturnType::void()),
        );
        assert!(matches!(
            validate_schema(&schema, UntaggedPolicy::Allow),
            Err(SchemaError::DuplicateReturnType { .. })
        ));
    }

    #[test]
    fn test_unknown_import() {
        let mut schema = Schema::new(TypeTagTable::new());
        schema.add_family(
            FamilyDef::new("Stmt", FamilyKind::Statement)
                .with_return(ReturnType::void())
                .with_include(Include::family("Expr")),
        );
        assert!(matches!(
            validate_schema(&schema, UntaggedPolicy::Allow),
            Err(SchemaError::UnknownImport { .. })
        ));
    }

    #[test]
    fn test_duplicate_family() {
        let mut schema = Schema::new(TypeTagTable::new());
        for _ in 0..2 {
            schema.add_family(
                FamilyDef::new("Expr", FamilyKind::Expression).with_return(ReturnType::void()),
            );
        }
        assert!(matches!(
            validate_schema(&schema, UntaggedPolicy::Allow),
            Err(SchemaError::DuplicateFamily { .. })
        ));
    }

    #[test]
    fn test_duplicate_tags_warn() {
        let tags = TypeTagTable::new().with("Number", 'N').with("Nil", 'N');
        let schema = single_family(tags, &[("Number", "double value"), ("Nil", "")]);

        let report = validate_schema(&schema, UntaggedPolicy::Deny).expect("Failed to validate");
        assert_eq!(
            report.warnings,
            vec![ValidationWarning::DuplicateTag {
                tag: 'N',
                nodes: vec!["Nil".to_string(), "Number".to_string()],
            }]
        );
    }
}
