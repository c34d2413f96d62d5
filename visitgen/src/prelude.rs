//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use visitgen::prelude::*;
//! ```

// Schema types
pub use visitgen_schema::builtin::{croix_schema, expr_family, stmt_family};
pub use visitgen_schema::{
    FamilyDef, FamilyKind, FieldDef, Include, NodeDef, Ownership, ParseError, ReturnType, Schema,
    SchemaError, TypeTag, TypeTagTable, UntaggedPolicy, ValidationWarning, validate_schema,
};

// Codegen types
pub use visitgen_codegen::{
    Artifact, Banner, CodeWriter, CodegenError, GenerationReport, Generator, GeneratorConfig,
    generate_family, generate_header, run, run_expr_pipeline, run_family, run_stmt_pipeline,
    write_artifact,
};
