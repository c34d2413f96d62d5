//! C++ header generation.
//!
//! The emitters produce a visitor hierarchy for one node family: shared
//! scaffolding from [`HierarchyEmitter`], then one class per node from
//! [`ClassEmitter`].

pub mod class;
pub mod hierarchy;

pub use class::ClassEmitter;
pub use hierarchy::HierarchyEmitter;
