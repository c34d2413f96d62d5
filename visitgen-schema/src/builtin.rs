//! Compiled-in node schemas for the Croix interpreter.
//!
//! Changing the generated hierarchy means editing the entries below and
//! rerunning the generator.

use crate::error::ParseError;
use crate::parser::parse_entry;
use crate::tags::TypeTagTable;
use crate::types::{FamilyDef, FamilyKind, Include, ReturnType, Schema};

/// Expression family name.
pub const EXPR: &str = "Expr";

/// Statement family name.
pub const STMT: &str = "Stmt";

/// Expression node entries.
pub const EXPR_NODES: &[&str] = &[
    "Assign       :  Token name, Expr* value",
    "Binary       :  Expr* left, Token op, Expr* right",
    "Unary        :  Token op, Expr* right",
    "Grouping     :  Expr* expr",
    "Boolean      :  bool value",
    "Number       :  double value",
    "String       :  string value",
    "Nil          :",
    "Variable     :  Token name",
    "Logical      :  Expr* left, Token op, Expr* right",
    "Call         :  Expr* callee, Token rParen, vector < Expr* > arguments",
    "Get          :  Expr* object, Token name",
    "Set          :  Expr* object, Token name, Expr* value",
    "This         :  Token keyword",
    "Super        :  Token keyword, Token property",
];

/// Statement node entries.
pub const STMT_NODES: &[&str] = &[
    "Expression   :  Expr* expr",
    "Print        :  Expr* expr",
    "Var          :  Token name, Expr* initValue",
    "Block        :  vector < Stmt* > stmts",
    "If           :  Expr* cond, Stmt* then, Stmt* else_",
    "While        :  Expr* cond, Stmt* body",
    "Function     :  Token fnName, vector < Token > params, Block* body",
    "Return       :  Token ret, Expr* value",
    "Class        :  Token name, Variable* superclass, vector < Function* > methods",
];

/// Builds the expression family.
///
/// Expressions are visited by the printer (`string`), the evaluator
/// (`Storable *`) and the resolver (`void`). `Call` holds a `vector`, so the
/// header includes it itself.
///
/// # Errors
/// Returns `ParseError` if an entry is malformed.
pub fn expr_family() -> Result<FamilyDef, ParseError> {
    let family = FamilyDef::new(EXPR, FamilyKind::Expression)
        .with_visitable("Visitable")
        .with_return(ReturnType::new("string"))
        .with_return(ReturnType::new("Storable *"))
        .with_return(ReturnType::void())
        .with_include(Include::system("iostream"))
        .with_include(Include::system("string"))
        .with_include(Include::system("vector"))
        .with_include(Include::local("Token.h"))
        .storable();

    with_entries(family, EXPR_NODES)
}

/// Builds the statement family.
///
/// # Errors
/// Returns `ParseError` if an entry is malformed.
pub fn stmt_family() -> Result<FamilyDef, ParseError> {
    let family = FamilyDef::new(STMT, FamilyKind::Statement)
        .with_visitable("VisitableStmt")
        .with_return(ReturnType::void())
        .with_include(Include::system("iostream"))
        .with_include(Include::system("string"))
        .with_include(Include::local("Token.h"))
        .with_include(Include::family(EXPR))
        .with_include(Include::system("vector"));

    with_entries(family, STMT_NODES)
}

/// Builds the complete Croix schema: expressions, then statements.
///
/// # Errors
/// Returns `ParseError` if an entry is malformed.
pub fn croix_schema() -> Result<Schema, ParseError> {
    let mut schema = Schema::new(TypeTagTable::croix());
    schema.add_family(expr_family()?);
    schema.add_family(stmt_family()?);
    Ok(schema)
}

fn with_entries(mut family: FamilyDef, entries: &[&str]) -> Result<FamilyDef, ParseError> {
    for entry in entries {
        let node = parse_entry(&family.name, entry)?;
        family.add_node(node);
    }
    Ok(family)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expr_family() {
        let family = expr_family().expect("Failed to build");
        assert_eq!(family.name, "Expr");
        assert_eq!(family.nodes.len(), EXPR_NODES.len());
        assert_eq!(family.nodes[0].name, "Assign");
        assert_eq!(family.return_types[1].as_str(), "Storable *");
        assert!(family.storable);
        assert_eq!(family.imports().count(), 0);
    }

    #[test]
    fn test_stmt_family() {
        let family = stmt_family().expect("Failed to build");
        assert_eq!(family.visitable_name, "VisitableStmt");
        assert_eq!(family.return_types, [ReturnType::void()]);
        assert_eq!(family.imports().collect::<Vec<_>>(), ["Expr"]);
        assert!(family.nodes.iter().all(|n| n.family == "Stmt"));
    }

    #[test]
    fn test_croix_schema_order() {
        let schema = croix_schema().expect("Failed to build");
        let names: Vec<_> = schema.families().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Expr", "Stmt"]);
    }
}
