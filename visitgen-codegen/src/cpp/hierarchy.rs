//! Shared per-family scaffolding.
//!
//! Everything a family needs exactly once, ahead of the concrete node
//! classes: preamble, forward declarations, the visitable template, the
//! visitor interface, the storable interface and the abstract base class.

use crate::config::Banner;
use crate::writer::CodeWriter;
use visitgen_schema::ir::FamilyIr;

/// Name of the storable-value interface.
pub const STORABLE: &str = "Storable";

/// Generator for the family-wide declarations.
pub struct HierarchyEmitter<'a> {
    family: &'a FamilyIr,
}

impl<'a> HierarchyEmitter<'a> {
    /// Creates a new hierarchy emitter.
    #[must_use]
    pub fn new(family: &'a FamilyIr) -> Self {
        Self { family }
    }

    /// Emits every shared declaration, in dependency order.
    pub fn emit(&self, w: &mut CodeWriter, banner: &Banner) {
        self.emit_preamble(w, banner);
        self.emit_forward_declarations(w);
        self.emit_visitable(w);
        self.emit_visitor(w);
        if self.family.storable {
            emit_storable_interface(w);
        }
        self.emit_base_class(w);
    }

    /// Emits the banner, include guard and includes.
    pub fn emit_preamble(&self, w: &mut CodeWriter, banner: &Banner) {
        w.insert("//");
        w.insert(&format!("// {}", self.family.artifact_name()));
        w.insert(&format!("// {}", banner.project));
        w.insert("//");
        w.insert(&format!(
            "// Auto-generated by {} on {}.",
            banner.author,
            banner.date_string()
        ));
        w.insert("// CAUTION: Do not hand edit! Edit the node schema and regenerate.");
        w.insert("//");
        w.blank();
        w.insert("#pragma once");
        w.blank();

        for include in &self.family.includes {
            w.insert(&include.to_string());
        }
        w.blank();
        w.insert("using namespace std;");
    }

    /// Forward-declares every concrete node so the visitor can name them.
    pub fn emit_forward_declarations(&self, w: &mut CodeWriter) {
        w.blank();
        for name in self.family.node_names() {
            w.insert(&format!("class {};", name));
        }
    }

    /// Emits the template carrying one `accept` per (visitor, return) pair.
    pub fn emit_visitable(&self, w: &mut CodeWriter) {
        let pairs = self.family.return_types.len();

        w.blank();
        w.insert("// Inherited by the abstract base class. Each pair (Vn, Rn)");
        w.insert("// lets visitor type Vn visit the node and return an Rn:");
        for i in 1..=pairs {
            w.insert(&format!("//   visited by V{0}, returns R{0}", i));
        }

        let params = (1..=pairs)
            .map(|i| format!("typename V{0}, typename R{0}", i))
            .collect::<Vec<_>>()
            .join(", ");
        w.insert(&format!("template < {} >", params));
        w.insert(&format!("class {} {{", self.family.visitable_name));
        w.insert("public:");
        for i in 1..=pairs {
            w.indent_insert_dedent(&format!("virtual R{0} accept(V{0}) = 0;", i));
        }
        w.insert("};");
    }

    /// Emits the visitor interface: one `visit` method per concrete node.
    pub fn emit_visitor(&self, w: &mut CodeWriter) {
        w.blank();
        w.insert("// Implemented by every pass that walks this family.");
        w.insert("template < typename ReturnValue >");
        w.insert(&format!("class {} {{", self.family.visitor_name));
        w.insert("public:");
        for node in &self.family.nodes {
            w.indent_insert_dedent(&format!(
                "virtual ReturnValue {}({}*) = 0;",
                node.visit_method, node.name
            ));
        }
        w.insert("};");
    }

    /// Emits the abstract base class of the family.
    pub fn emit_base_class(&self, w: &mut CodeWriter) {
        let visitor = &self.family.visitor_name;
        let pairs = self
            .family
            .return_types
            .iter()
            .map(|r| format!("{} < {} > *, {}", visitor, r, r))
            .collect::<Vec<_>>()
            .join(", ");
        let mut bases = format!("public {} < {} >", self.family.visitable_name, pairs);
        if self.family.storable {
            bases.push_str(&format!(", public {}", STORABLE));
        }

        w.blank();
        w.insert(&format!("// Any {} can visit this class.", visitor));
        w.insert(&format!("class {} : {} {{", self.family.name, bases));
        w.insert("public:");
        w.indent_insert_dedent("virtual char type() const = 0;");

        if self.family.storable {
            w.blank();
            w.indent_insert_dedent("string storedType() {");
            w.indent();
            w.indent_insert_dedent(&format!("return \"{}\";", self.family.name));
            w.dedent();
            w.indent_insert_dedent("}");
        }

        w.blank();
        w.indent_insert_dedent(&format!("virtual ~{}() {{ }}", self.family.name));
        w.insert("};");
    }
}

/// Emits the interface shared by everything an environment can store:
/// expressions as well as native and user-defined callables.
pub fn emit_storable_interface(w: &mut CodeWriter) {
    w.blank();
    w.insert("// Common interface of values an environment can hold:");
    w.insert("// expressions, native functions and user-defined callables.");
    w.insert(&format!("class {} {{", STORABLE));
    w.insert("public:");
    w.indent_insert_dedent("virtual string storedType() = 0;");
    w.insert("};");
}
