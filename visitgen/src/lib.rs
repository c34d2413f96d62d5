//! # visitgen
//!
//! Schema-driven generator for C++ visitor-pattern AST hierarchies.
//!
//! visitgen turns a declarative list of node descriptors (a name plus a typed
//! field list) into one header per node family. Each header holds the
//! visitable template, the visitor interface, the abstract base class and one
//! concrete class per node, with ownership-aware destructors and one `accept`
//! per visitor return type.
//!
//! ## Features
//!
//! - **Compiled-in schemas** - Expression and statement families of the Croix interpreter
//! - **Validation before emission** - Malformed entries abort before any file is touched
//! - **Ownership-aware cleanup** - Pointer and pointer-collection fields are released
//! - **Reproducible output** - The banner date is configurable
//!
//! ## Quick Start
//!
//! ```ignore
//! use visitgen::prelude::*;
//!
//! let schema = croix_schema()?;
//! let config = GeneratorConfig::builder("include/ast").build();
//! let report = run(&schema, &config)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Node schema model, parsing, tag table and validation
//! - [`codegen`] - Text assembly, C++ emission and generation pipelines

pub mod prelude;

/// Node schema model, parsing and validation.
pub mod schema {
    pub use visitgen_schema::*;
}

/// C++ header generation from node schemas.
pub mod codegen {
    pub use visitgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use visitgen_codegen::{
    CodegenError, GenerationReport, GeneratorConfig, run, run_expr_pipeline, run_stmt_pipeline,
};
pub use visitgen_schema::builtin::croix_schema;
