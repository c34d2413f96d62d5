//! # Visitgen Codegen
//!
//! C++ visitor-pattern header generation from node schemas.
//!
//! This crate provides:
//! - An indentation-aware text assembler
//! - Class and hierarchy emitters for one node family
//! - Per-family header generation
//! - Pipelines writing `<Family>.h` into an output directory

pub mod config;
pub mod cpp;
pub mod error;
pub mod generator;
pub mod pipeline;
pub mod writer;

pub use config::{Banner, GeneratorConfig, GeneratorConfigBuilder};
pub use error::CodegenError;
pub use generator::Generator;
pub use pipeline::{
    Artifact, GenerationReport, generate_family, run, run_expr_pipeline, run_family,
    run_stmt_pipeline, write_artifact,
};
pub use writer::CodeWriter;

use visitgen_schema::ir::FamilyIr;
use visitgen_schema::types::Schema;

/// Generates the header text of one family of a schema.
///
/// # Arguments
/// * `schema` - The node schema
/// * `family` - Name of the family to generate
/// * `banner` - Generation notice for the preamble
///
/// # Returns
/// Generated header as a string.
///
/// # Errors
/// Returns `CodegenError` if the family is unknown or its nodes are malformed.
pub fn generate_header(
    schema: &Schema,
    family: &str,
    banner: &Banner,
) -> Result<String, CodegenError> {
    let def = schema
        .get_family(family)
        .ok_or_else(|| CodegenError::UnknownFamily {
            name: family.to_string(),
        })?;
    let ir = FamilyIr::from_family(def, &schema.tags)?;
    Generator::new(&ir, banner).generate()
}
