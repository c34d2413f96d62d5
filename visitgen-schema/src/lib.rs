//! # Visitgen Schema
//!
//! Node schema model for the visitor hierarchy generator.
//!
//! This crate provides:
//! - Node family and node definitions
//! - Schema entry and field-list parsing
//! - The type tag table
//! - Schema validation
//! - Intermediate representation for code generation
//! - The compiled-in Croix schemas

pub mod builtin;
pub mod error;
pub mod ir;
pub mod nodes;
pub mod parser;
pub mod tags;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use ir::{FamilyIr, ResolvedNode, SchemaIr};
pub use nodes::{FieldDef, NodeDef, Ownership};
pub use parser::{parse_entry, parse_fields};
pub use tags::{TypeTag, TypeTagTable};
pub use types::{FamilyDef, FamilyKind, Include, ReturnType, Schema};
pub use validation::{UntaggedPolicy, ValidationReport, ValidationWarning, validate_schema};
