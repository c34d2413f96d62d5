//! Schema type definitions.
//!
//! This module contains the data structures describing a generation run:
//! the schema as a whole, node families, return types and header includes.

use crate::nodes::NodeDef;
use crate::tags::TypeTagTable;
use std::collections::HashMap;
use std::fmt;

/// Complete generation schema: every node family plus the type tag table.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Node families, in generation order.
    families: Vec<FamilyDef>,
    /// Single-character type tags shared by all families.
    pub tags: TypeTagTable,
    /// Family lookup map (built as families are added).
    family_map: HashMap<String, usize>,
}

impl Schema {
    /// Creates a new schema with no families.
    #[must_use]
    pub fn new(tags: TypeTagTable) -> Self {
        Self {
            families: Vec::new(),
            tags,
            family_map: HashMap::new(),
        }
    }

    /// Adds a family to the schema.
    pub fn add_family(&mut self, family: FamilyDef) {
        let index = self.families.len();
        self.family_map.insert(family.name.clone(), index);
        self.families.push(family);
    }

    /// Returns the families in generation order.
    #[must_use]
    pub fn families(&self) -> &[FamilyDef] {
        &self.families
    }

    /// Looks up a family by name.
    #[must_use]
    pub fn get_family(&self, name: &str) -> Option<&FamilyDef> {
        self.family_map
            .get(name)
            .and_then(|&idx| self.families.get(idx))
    }

    /// Returns true if a family with the given name exists.
    #[must_use]
    pub fn has_family(&self, name: &str) -> bool {
        self.family_map.contains_key(name)
    }
}

/// Which side of the AST a family describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyKind {
    /// Expression nodes.
    Expression,
    /// Statement nodes.
    Statement,
}

/// A group of node kinds sharing one abstract base and one visitor interface.
#[derive(Debug, Clone)]
pub struct FamilyDef {
    /// Family (and abstract base class) name, e.g. `Expr`.
    pub name: String,
    /// Family kind.
    pub kind: FamilyKind,
    /// Name of the multi-dispatch visitable template.
    pub visitable_name: String,
    /// Supported visitor return types, in declaration order.
    pub return_types: Vec<ReturnType>,
    /// Header includes, in emission order.
    pub includes: Vec<Include>,
    /// Whether the base class implements the storable-value marker.
    pub storable: bool,
    /// Concrete node kinds, in declaration order.
    pub nodes: Vec<NodeDef>,
}

impl FamilyDef {
    /// Creates a new family with no nodes.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FamilyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            visitable_name: "Visitable".to_string(),
            return_types: Vec::new(),
            includes: Vec::new(),
            storable: false,
            nodes: Vec::new(),
        }
    }

    /// Sets the visitable template name.
    #[must_use]
    pub fn with_visitable(mut self, name: impl Into<String>) -> Self {
        self.visitable_name = name.into();
        self
    }

    /// Adds a supported return type.
    #[must_use]
    pub fn with_return(mut self, return_type: ReturnType) -> Self {
        self.return_types.push(return_type);
        self
    }

    /// Adds a header include.
    #[must_use]
    pub fn with_include(mut self, include: Include) -> Self {
        self.includes.push(include);
        self
    }

    /// Marks the base class as a storable value.
    #[must_use]
    pub fn storable(mut self) -> Self {
        self.storable = true;
        self
    }

    /// Adds a node to the family.
    pub fn add_node(&mut self, node: NodeDef) {
        self.nodes.push(node);
    }

    /// Returns the node names in declaration order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.name.as_str())
    }

    /// Returns the visitor interface name, e.g. `ExprVisitor`.
    #[must_use]
    pub fn visitor_name(&self) -> String {
        format!("{}Visitor", self.name)
    }

    /// Returns the generated header file name, e.g. `Expr.h`.
    #[must_use]
    pub fn artifact_name(&self) -> String {
        artifact_name(&self.name)
    }

    /// Returns the names of families whose artifacts this family includes.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.includes.iter().filter_map(|i| match i {
            Include::Family(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

/// Returns the generated header file name for a family.
#[must_use]
pub fn artifact_name(family: &str) -> String {
    format!("{}.h", family)
}

/// Visitor return type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReturnType(String);

impl ReturnType {
    /// The "no value" return type.
    pub const VOID: &'static str = "void";

    /// Creates a return type from its C++ spelling.
    #[must_use]
    pub fn new(spelling: impl Into<String>) -> Self {
        Self(spelling.into())
    }

    /// Creates the `void` return type.
    #[must_use]
    pub fn void() -> Self {
        Self::new(Self::VOID)
    }

    /// Returns the C++ spelling.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the "no value" type.
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.0 == Self::VOID
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Header include line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Include {
    /// `#include <name>`
    System(String),
    /// `#include "name"`
    Local(String),
    /// `#include "<Family>.h"`, the artifact of another family.
    Family(String),
}

impl Include {
    /// Creates a system include.
    pub fn system(name: impl Into<String>) -> Self {
        Self::System(name.into())
    }

    /// Creates a local include.
    pub fn local(name: impl Into<String>) -> Self {
        Self::Local(name.into())
    }

    /// Creates an include of another family's artifact.
    pub fn family(name: impl Into<String>) -> Self {
        Self::Family(name.into())
    }
}

impl fmt::Display for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System(name) => write!(f, "#include <{}>", name),
            Self::Local(name) => write!(f, "#include \"{}\"", name),
            Self::Family(name) => write!(f, "#include \"{}\"", artifact_name(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_type_void() {
        assert!(ReturnType::void().is_void());
        assert!(!ReturnType::new("string").is_void());
        assert!(!ReturnType::new("Storable *").is_void());
        assert_eq!(ReturnType::new("Storable *").to_string(), "Storable *");
    }

    #[test]
    fn test_include_display() {
        assert_eq!(Include::system("string").to_string(), "#include <string>");
        assert_eq!(Include::local("Token.h").to_string(), "#include \"Token.h\"");
        assert_eq!(Include::family("Expr").to_string(), "#include \"Expr.h\"");
    }

    #[test]
    fn test_family_names() {
        let mut family = FamilyDef::new("Stmt", FamilyKind::Statement)
            .with_visitable("VisitableStmt")
            .with_return(ReturnType::void())
            .with_include(Include::family("Expr"));
        family.add_node(NodeDef::new("Print", "Stmt", "Expr* expr"));
        family.add_node(NodeDef::new("Var", "Stmt", "Token name, Expr* initValue"));

        assert_eq!(family.visitor_name(), "StmtVisitor");
        assert_eq!(family.artifact_name(), "Stmt.h");
        assert_eq!(family.node_names().collect::<Vec<_>>(), ["Print", "Var"]);
        assert_eq!(family.imports().collect::<Vec<_>>(), ["Expr"]);
        assert!(!family.storable);
    }

    #[test]
    fn test_schema_lookup_follows_insertion() {
        let mut schema = Schema::new(TypeTagTable::new());
        schema.add_family(FamilyDef::new("Expr", FamilyKind::Expression));
        schema.add_family(FamilyDef::new("Stmt", FamilyKind::Statement));

        let names: Vec<_> = schema.families().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Expr", "Stmt"]);
        for family in schema.families() {
            let found = schema.get_family(&family.name).expect("family is indexed");
            assert_eq!(found.kind, family.kind);
        }
        assert!(schema.get_family("Decl").is_none());
    }

    #[test]
    fn test_schema_lookup() {
        let mut schema = Schema::new(TypeTagTable::new());
        schema.add_family(FamilyDef::new("Expr", FamilyKind::Expression));

        assert!(schema.has_family("Expr"));
        assert!(!schema.has_family("Stmt"));
        assert_eq!(
            schema.get_family("Expr").map(|f| f.kind),
            Some(FamilyKind::Expression)
        );
    }
}
