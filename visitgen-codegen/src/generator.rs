//! Main code generator.

use crate::config::Banner;
use crate::cpp::{ClassEmitter, HierarchyEmitter};
use crate::error::CodegenError;
use crate::writer::{CodeWriter, DEFAULT_INDENT_WIDTH};
use visitgen_schema::ir::FamilyIr;

/// Header generator for one node family.
pub struct Generator<'a> {
    family: &'a FamilyIr,
    banner: &'a Banner,
    indent_width: usize,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for the given family.
    #[must_use]
    pub fn new(family: &'a FamilyIr, banner: &'a Banner) -> Self {
        Self {
            family,
            banner,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }

    /// Sets the indentation unit in spaces.
    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Generates the complete header text for the family.
    ///
    /// # Returns
    /// The header: shared scaffolding, then one class per node in
    /// declaration order.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` if the family declares no return
    /// types, since no visitable template can be instantiated.
    pub fn generate(&self) -> Result<String, CodegenError> {
        if self.family.return_types.is_empty() {
            return Err(CodegenError::generation(format!(
                "family '{}' has no return types",
                self.family.name
            )));
        }

        let mut w = CodeWriter::with_indent_width(self.indent_width);
        HierarchyEmitter::new(self.family).emit(&mut w, self.banner);

        let classes = ClassEmitter::new(self.family);
        for node in &self.family.nodes {
            tracing::debug!(family = %self.family.name, node = %node.name, "emitting class");
            w.blank();
            classes.emit(&mut w, node);
        }

        Ok(w.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use visitgen_schema::builtin;
    use visitgen_schema::nodes::NodeDef;
    use visitgen_schema::tags::TypeTagTable;
    use visitgen_schema::types::{FamilyDef, FamilyKind, ReturnType};

    fn banner() -> Banner {
        Banner::new(NaiveDate::from_ymd_opt(2022, 1, 8).expect("valid date"))
    }

    fn resolve(def: &FamilyDef) -> FamilyIr {
        FamilyIr::from_family(def, &TypeTagTable::croix()).expect("Failed to resolve")
    }

    #[test]
    fn test_generate_expr_layout() {
        let family = resolve(&builtin::expr_family().expect("Failed to build"));
        let banner = banner();
        let out = Generator::new(&family, &banner).generate().expect("Failed to generate");

        let storable = out.find("class Storable {").expect("storable interface");
        let visitor = out.find("class ExprVisitor {").expect("visitor interface");
        let base = out.find("class Expr : ").expect("base class");
        let assign = out.find("class Assign : public Expr {").expect("first node");
        let sup = out.find("class Super : public Expr {").expect("last node");

        assert!(visitor < storable);
        assert!(storable < base);
        assert!(base < assign);
        assert!(assign < sup);
        assert!(out.ends_with("};\n"));
    }

    #[test]
    fn test_generate_class_per_node() {
        let family = resolve(&builtin::stmt_family().expect("Failed to build"));
        let banner = banner();
        let out = Generator::new(&family, &banner).generate().expect("Failed to generate");

        for node in &family.nodes {
            let header = format!("class {} : public Stmt {{\n", node.name);
            assert_eq!(out.matches(&header).count(), 1, "{}", node.name);
        }
    }

    #[test]
    fn test_generate_indent_width() {
        let mut def = FamilyDef::new("Expr", FamilyKind::Expression).with_return(ReturnType::void());
        def.add_node(NodeDef::new("Number", "Expr", "double value"));
        let family = resolve(&def);
        let banner = banner();
        let out = Generator::new(&family, &banner)
            .with_indent_width(2)
            .generate()
            .expect("Failed to generate");

        assert!(out.contains("\n  Number(double value) {\n    this->value = value;\n  }\n"));
    }

    #[test]
    fn test_generate_without_return_types() {
        let mut def = FamilyDef::new("Expr", FamilyKind::Expression);
        def.add_node(NodeDef::new("Nil", "Expr", ""));
        let family = resolve(&def);
        let banner = banner();
        let result = Generator::new(&family, &banner).generate();

        assert!(matches!(result, Err(CodegenError::Generation { .. })));
    }
}
