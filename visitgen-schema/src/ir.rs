//! Intermediate representation for code generation.
//!
//! This module provides a resolved representation of the schema: field lists
//! are parsed and type tags looked up, so emitters never touch raw text.

use crate::error::ParseError;
use crate::nodes::{FieldDef, Ownership};
use crate::parser::parse_fields;
use crate::tags::{TypeTag, TypeTagTable};
use crate::types::{FamilyDef, FamilyKind, Include, ReturnType, Schema};

/// Intermediate representation of a whole schema.
#[derive(Debug, Clone)]
pub struct SchemaIr {
    /// Resolved families, in generation order.
    pub families: Vec<FamilyIr>,
}

impl SchemaIr {
    /// Resolves every family of a schema.
    ///
    /// # Errors
    /// Returns `ParseError` if any node's field list is malformed.
    pub fn from_schema(schema: &Schema) -> Result<Self, ParseError> {
        let families = schema
            .families()
            .iter()
            .map(|f| FamilyIr::from_family(f, &schema.tags))
            .collect::<Result<_, _>>()?;

        Ok(Self { families })
    }

    /// Gets a resolved family by name.
    #[must_use]
    pub fn get_family(&self, name: &str) -> Option<&FamilyIr> {
        self.families.iter().find(|f| f.name == name)
    }
}

/// Resolved node family.
#[derive(Debug, Clone)]
pub struct FamilyIr {
    /// Family (and abstract base class) name.
    pub name: String,
    /// Family kind.
    pub kind: FamilyKind,
    /// Visitor interface name.
    pub visitor_name: String,
    /// Visitable template name.
    pub visitable_name: String,
    /// Supported visitor return types.
    pub return_types: Vec<ReturnType>,
    /// Header includes.
    pub includes: Vec<Include>,
    /// Whether the base class is a storable value.
    pub storable: bool,
    /// Resolved nodes, in declaration order.
    pub nodes: Vec<ResolvedNode>,
}

impl FamilyIr {
    /// Resolves a family definition against the tag table.
    ///
    /// # Errors
    /// Returns `ParseError` naming the first node whose field list is
    /// malformed.
    pub fn from_family(family: &FamilyDef, tags: &TypeTagTable) -> Result<Self, ParseError> {
        let nodes = family
            .nodes
            .iter()
            .map(|node| {
                let fields = parse_fields(&node.fields_raw).map_err(|e| e.in_node(&node.name))?;
                Ok(ResolvedNode {
                    visit_method: visit_method_name(&node.name, &family.name),
                    tag: tags.lookup(&node.name),
                    name: node.name.clone(),
                    fields,
                })
            })
            .collect::<Result<_, ParseError>>()?;

        Ok(Self {
            name: family.name.clone(),
            kind: family.kind,
            visitor_name: family.visitor_name(),
            visitable_name: family.visitable_name.clone(),
            return_types: family.return_types.clone(),
            includes: family.includes.clone(),
            storable: family.storable,
            nodes,
        })
    }

    /// Returns the node names in declaration order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.name.as_str())
    }

    /// Gets a resolved node by name.
    #[must_use]
    pub fn get_node(&self, name: &str) -> Option<&ResolvedNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Returns the generated header file name.
    #[must_use]
    pub fn artifact_name(&self) -> String {
        crate::types::artifact_name(&self.name)
    }
}

/// Resolved node information.
#[derive(Debug, Clone)]
pub struct ResolvedNode {
    /// Node (and class) name.
    pub name: String,
    /// Parsed fields, in declaration order.
    pub fields: Vec<FieldDef>,
    /// Type tag (or sentinel).
    pub tag: TypeTag,
    /// Visitor method dispatched to, e.g. `visitBinaryExpr`.
    pub visit_method: String,
}

impl ResolvedNode {
    /// Returns the fields the destructor has to release.
    pub fn owned_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.ownership.needs_release())
    }

    /// Returns true if any field owns a collection of children.
    #[must_use]
    pub fn owns_collection(&self) -> bool {
        self.fields
            .iter()
            .any(|f| f.ownership == Ownership::OwnedCollection)
    }
}

/// Returns the visitor method name for a node, e.g. `visitBinaryExpr`.
#[must_use]
pub fn visit_method_name(node: &str, family: &str) -> String {
    format!("visit{}{}", node, family)
}
