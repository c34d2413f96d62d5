//! Generation pipelines.
//!
//! A run checks the output directory, validates the schema, resolves it,
//! assembles every artifact in memory and only then writes them, one file
//! per family, overwriting previous output.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::generator::Generator;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use visitgen_schema::builtin;
use visitgen_schema::ir::{FamilyIr, SchemaIr};
use visitgen_schema::types::Schema;
use visitgen_schema::validation::{ValidationReport, ValidationWarning, validate_schema};

/// Fully assembled header for one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Family the header defines.
    pub family: String,
    /// File name inside the output directory.
    pub file_name: String,
    /// Header text.
    pub contents: String,
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Paths written, in generation order.
    pub written: Vec<PathBuf>,
    /// Validation warnings raised before emission.
    pub warnings: Vec<ValidationWarning>,
}

/// Generates the header of a resolved family.
///
/// # Errors
/// Returns `CodegenError` if the family cannot be generated.
pub fn generate_family(
    family: &FamilyIr,
    config: &GeneratorConfig,
) -> Result<Artifact, CodegenError> {
    let contents = Generator::new(family, config.banner())
        .with_indent_width(config.indent_width())
        .generate()?;

    Ok(Artifact {
        family: family.name.clone(),
        file_name: family.artifact_name(),
        contents,
    })
}

/// Writes an artifact into `dir`, replacing any existing file.
///
/// The text goes to a temporary file in `dir` first, which is then renamed
/// over the destination, so the destination holds either the previous
/// contents or the complete new ones.
///
/// # Returns
/// The path written.
///
/// # Errors
/// Returns `CodegenError::Write` if the file cannot be written.
pub fn write_artifact(dir: &Path, artifact: &Artifact) -> Result<PathBuf, CodegenError> {
    let path = dir.join(&artifact.file_name);
    let write_error = |source| CodegenError::Write {
        path: path.clone(),
        source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(artifact.contents.as_bytes()).map_err(write_error)?;
    set_artifact_permissions(&file).map_err(write_error)?;
    file.persist(&path).map_err(|e| write_error(e.error))?;

    tracing::info!(
        family = %artifact.family,
        bytes = artifact.contents.len(),
        "wrote {}",
        path.display()
    );
    Ok(path)
}

/// Generates and writes every family of a schema, in schema order.
///
/// # Arguments
/// * `schema` - The node schema
/// * `config` - Output directory and generation settings
///
/// # Returns
/// The written paths and any validation warnings.
///
/// # Errors
/// Returns `CodegenError` if the output directory is missing, the schema is
/// invalid, or a write fails. Nothing is written unless every artifact was
/// assembled.
pub fn run(schema: &Schema, config: &GeneratorConfig) -> Result<GenerationReport, CodegenError> {
    check_output_dir(config.output_dir())?;
    let report = validate(schema, config)?;

    let ir = SchemaIr::from_schema(schema)?;
    let artifacts = ir
        .families
        .iter()
        .map(|family| generate_family(family, config))
        .collect::<Result<Vec<_>, _>>()?;

    let written = artifacts
        .iter()
        .map(|artifact| write_artifact(config.output_dir(), artifact))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GenerationReport {
        written,
        warnings: report.warnings,
    })
}

/// Generates and writes a single family of a schema.
///
/// The whole schema is validated, since a family may import another.
///
/// # Errors
/// Returns `CodegenError::UnknownFamily` if `name` is not in the schema, or
/// any error [`run`] can return.
pub fn run_family(
    schema: &Schema,
    name: &str,
    config: &GeneratorConfig,
) -> Result<PathBuf, CodegenError> {
    check_output_dir(config.output_dir())?;

    let family = schema
        .get_family(name)
        .ok_or_else(|| CodegenError::UnknownFamily {
            name: name.to_string(),
        })?;
    validate(schema, config)?;

    let ir = FamilyIr::from_family(family, &schema.tags)?;
    let artifact = generate_family(&ir, config)?;
    write_artifact(config.output_dir(), &artifact)
}

/// Generates `Expr.h` from the compiled-in schema.
///
/// # Errors
/// Returns `CodegenError` if generation or the write fails.
pub fn run_expr_pipeline(config: &GeneratorConfig) -> Result<PathBuf, CodegenError> {
    run_family(&builtin::croix_schema()?, builtin::EXPR, config)
}

/// Generates `Stmt.h` from the compiled-in schema.
///
/// # Errors
/// Returns `CodegenError` if generation or the write fails.
pub fn run_stmt_pipeline(config: &GeneratorConfig) -> Result<PathBuf, CodegenError> {
    run_family(&builtin::croix_schema()?, builtin::STMT, config)
}

#[cfg(unix)]
fn set_artifact_permissions(file: &NamedTempFile) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    // Temporary files are created owner-only.
    file.as_file().set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_artifact_permissions(_file: &NamedTempFile) -> std::io::Result<()> {
    Ok(())
}

fn check_output_dir(dir: &Path) -> Result<(), CodegenError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(CodegenError::OutputDir {
            path: dir.to_path_buf(),
        })
    }
}

fn validate(schema: &Schema, config: &GeneratorConfig) -> Result<ValidationReport, CodegenError> {
    let report = validate_schema(schema, config.untagged_policy())?;
    for warning in &report.warnings {
        tracing::warn!("{}", warning);
    }
    Ok(report)
}
