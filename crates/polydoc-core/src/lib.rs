//! # polydoc-core
//!
//! Core types shared across all polydoc crates:
//! - The analyzer snapshot model consumed by extraction (declared entities,
//!   raw members, parameters, syntax nodes)
//! - The normalized output records (properties, methods, entities) and the
//!   top-level `ExtractionResult` printed by the CLI

pub mod analysis;
pub mod records;

pub use analysis::{
    AccessorKind, AnalysisSnapshot, DeclaredEntity, DocumentRecord, EntityKind, Parameter,
    RawMember, ReturnAnnotation, SyntaxNode, ValueNode,
};
pub use records::{
    ElementRecord, ExtractionResult, MethodArgument, NormalizedEntity, NormalizedMethod,
    NormalizedProperty,
};
