//! Concrete node class emission.

use crate::writer::CodeWriter;
use visitgen_schema::ir::{FamilyIr, ResolvedNode};
use visitgen_schema::nodes::{FieldDef, Ownership};
use visitgen_schema::types::ReturnType;

/// Emits one class per concrete node of a family.
pub struct ClassEmitter<'a> {
    family: &'a FamilyIr,
}

impl<'a> ClassEmitter<'a> {
    /// Creates a new class emitter for a family.
    #[must_use]
    pub fn new(family: &'a FamilyIr) -> Self {
        Self { family }
    }

    /// Emits the full class definition of `node`.
    ///
    /// Layout: constructor, destructor, one `accept` per return type, the
    /// type-tag accessor, then the members in declaration order.
    pub fn emit(&self, w: &mut CodeWriter, node: &ResolvedNode) {
        w.insert(&format!("class {} : public {} {{", node.name, self.family.name));
        w.insert("public:");
        w.indent();

        self.emit_constructor(w, node);
        w.blank();
        self.emit_destructor(w, node);

        for return_type in &self.family.return_types {
            w.blank();
            self.emit_accept(w, node, return_type);
        }

        w.blank();
        w.insert("char type() const {");
        w.indent_insert_dedent(&format!("return {};", node.tag.cpp_literal()));
        w.insert("}");
        w.dedent();

        w.blank();
        if node.fields.is_empty() {
            w.remove_last_line();
        }
        for field in &node.fields {
            w.indent_insert_dedent(&format!("{};", field.declaration()));
        }

        w.insert("};");
    }

    fn emit_constructor(&self, w: &mut CodeWriter, node: &ResolvedNode) {
        let params = node
            .fields
            .iter()
            .map(FieldDef::declaration)
            .collect::<Vec<_>>()
            .join(", ");

        w.insert(&format!("{}({}) {{", node.name, params));
        for field in &node.fields {
            w.indent_insert_dedent(&format!("this->{0} = {0};", field.name));
        }
        w.insert("}");
    }

    fn emit_destructor(&self, w: &mut CodeWriter, node: &ResolvedNode) {
        w.insert(&format!("~{}() {{", node.name));
        for field in node.owned_fields() {
            match field.ownership {
                Ownership::Owned => {
                    w.indent_insert_dedent(&format!("delete this->{};", field.name));
                }
                Ownership::OwnedCollection => {
                    w.indent_insert_dedent(&format!(
                        "for(int i = 0; i < {}.size(); ++i) {{",
                        field.name
                    ));
                    w.indent();
                    w.indent_insert_dedent(&format!("delete {}[i];", field.name));
                    w.dedent();
                    w.indent_insert_dedent("}");
                }
                Ownership::Value => {}
            }
        }
        w.insert("}");
    }

    fn emit_accept(&self, w: &mut CodeWriter, node: &ResolvedNode, return_type: &ReturnType) {
        w.insert(&format!(
            "{0} accept({1}< {0} >* ev) {{",
            return_type, self.family.visitor_name
        ));
        if return_type.is_void() {
            w.indent_insert_dedent(&format!("ev->{}(this);", node.visit_method));
        } else {
            w.indent_insert_dedent(&format!("return ev->{}(this);", node.visit_method));
        }
        w.insert("}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visitgen_schema::nodes::NodeDef;
    use visitgen_schema::tags::TypeTagTable;
    use visitgen_schema::types::{FamilyDef, FamilyKind};

    fn expr_family(nodes: &[(&str, &str)]) -> FamilyIr {
        let mut family = FamilyDef::new("Expr", FamilyKind::Expression)
            .with_return(ReturnType::new("string"))
            .with_return(ReturnType::new("Storable *"))
            .with_return(ReturnType::void());
        for (name, fields) in nodes {
            family.add_node(NodeDef::new(*name, "Expr", *fields));
        }
        FamilyIr::from_family(&family, &TypeTagTable::croix()).expect("Failed to resolve")
    }

    fn emit(family: &FamilyIr, node: &str) -> String {
        let mut w = CodeWriter::new();
        let node = family.get_node(node).expect("node exists");
        ClassEmitter::new(family).emit(&mut w, node);
        w.render()
    }

    #[test]
    fn test_emit_boolean() {
        let family = expr_family(&[("Boolean", "bool value")]);
        let expected = concat!(
            "class Boolean : public Expr {\n",
            "public:\n",
            "    Boolean(bool value) {\n",
            "        this->value = value;\n",
            "    }\n",
            "    \n",
            "    ~Boolean() {\n",
            "    }\n",
            "    \n",
            "    string accept(ExprVisitor< string >* ev) {\n",
            "        return ev->visitBooleanExpr(this);\n",
            "    }\n",
            "    \n",
            "    Storable * accept(ExprVisitor< Storable * >* ev) {\n",
            "        return ev->visitBooleanExpr(this);\n",
            "    }\n",
            "    \n",
            "    void accept(ExprVisitor< void >* ev) {\n",
            "        ev->visitBooleanExpr(this);\n",
            "    }\n",
            "    \n",
            "    char type() const {\n",
            "        return 'B';\n",
            "    }\n",
            "\n",
            "    bool value;\n",
            "};\n",
        );
        assert_eq!(emit(&family, "Boolean"), expected);
    }

    #[test]
    fn test_emit_zero_fields() {
        let family = expr_family(&[("Nil", "")]);
        let out = emit(&family, "Nil");

        assert!(out.contains("    Nil() {\n    }\n"));
        assert!(out.contains("    ~Nil() {\n    }\n"));
        assert!(out.contains("return '\\0';"));
        // The type accessor closes directly into the end of the class.
        assert!(out.ends_with("        return '\\0';\n    }\n};\n"));
    }

    #[test]
    fn test_emit_single_pointer_release() {
        let family = expr_family(&[("Grouping", "Expr* expr")]);
        let out = emit(&family, "Grouping");

        assert_eq!(out.matches("delete").count(), 1);
        assert!(out.contains("        delete this->expr;\n"));
        assert!(out.contains("    Expr* expr;\n"));
    }

    #[test]
    fn test_emit_collection_release() {
        let family = expr_family(&[("Call", "Expr* callee, Token rParen, vector<Expr*> arguments")]);
        let out = emit(&family, "Call");

        let destructor = "    ~Call() {
        delete this->callee;
        for(int i = 0; i < arguments.size(); ++i) {
            delete arguments[i];
        }
    }
";
        assert!(out.contains(destructor));
        assert!(!out.contains("delete this->arguments"));
        assert!(!out.contains("delete this->rParen"));
        assert!(out.contains("    Call(Expr* callee, Token rParen, vector<Expr*> arguments) {\n"));
    }

    #[test]
    fn test_emit_statement_accept() {
        let mut family = FamilyDef::new("Stmt", FamilyKind::Statement).with_return(ReturnType::void());
        family.add_node(NodeDef::new("Print", "Stmt", "Expr* expr"));
        let family = FamilyIr::from_family(&family, &TypeTagTable::croix()).expect("Failed to resolve");
        let out = emit(&family, "Print");

        assert!(out.starts_with("class Print : public Stmt {\n"));
        assert!(out.contains("    void accept(StmtVisitor< void >* ev) {\n        ev->visitPrintStmt(this);\n    }\n"));
        assert_eq!(out.matches("accept(").count(), 1);
        assert!(out.contains("return 'P';"));
    }

    #[test]
    fn test_emit_leaves_depth_at_zero() {
        let family = expr_family(&[("Binary", "Expr* left, Token op, Expr* right")]);
        let mut w = CodeWriter::new();
        ClassEmitter::new(&family).emit(&mut w, &family.nodes[0]);
        assert_eq!(w.depth(), 0);
    }
}
