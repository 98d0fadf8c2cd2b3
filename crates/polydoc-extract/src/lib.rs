//! # polydoc-extract
//!
//! Normalizes the custom elements and behaviors one source file declares,
//! given the analyzer's snapshot.
//!
//! Per declared entity:
//! - **Classification** drops private (`_`-prefixed) members and the reserved
//!   `extends` member, and splits the rest into fields and methods
//! - **Property merging** folds getter/setter fragments into one property
//!   with read/write capability
//! - **Method building** produces typed argument lists and void-ness
//! - **Extends resolution** reports the supertype by name only
//!
//! Extraction is a pure function of `(snapshot, path, options)`. Repeated
//! declarations are dropped, never merged: the first one wins everywhere.

pub mod classify;
pub mod extends;
pub mod methods;
pub mod properties;
pub mod select;

use indexmap::map::Entry;
use polydoc_core::{
    AnalysisSnapshot, DeclaredEntity, ElementRecord, EntityKind, ExtractionResult,
    NormalizedEntity,
};

pub use extends::resolve_extends;
pub use methods::build_methods;
pub use properties::build_properties;
pub use select::{behavior_key, element_key};

/// Namespace stripped from behavior names unless configured otherwise.
pub const DEFAULT_BEHAVIOR_NAMESPACE: &str = "Polymer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Behavior names lose a leading `<behavior_namespace>.`.
    pub behavior_namespace: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            behavior_namespace: DEFAULT_BEHAVIOR_NAMESPACE.to_string(),
        }
    }
}

/// Extract every element and behavior declared in `path`.
///
/// `imports` is the pass-through import list of the document record for
/// `path`, empty when the snapshot has none.
#[must_use]
pub fn extract(
    snapshot: &AnalysisSnapshot,
    path: &str,
    options: &ExtractOptions,
) -> ExtractionResult {
    let mut result = ExtractionResult::new(path);

    if let Some(document) = snapshot.document(path) {
        result.imports.clone_from(&document.dep_hrefs);
    }

    for entity in select::entities_in_file(snapshot.entities(EntityKind::Element), path) {
        match result.elements.entry(element_key(&entity.declared_name)) {
            Entry::Vacant(slot) => {
                slot.insert(ElementRecord {
                    extends_name: resolve_extends(&entity.members),
                    entity: normalize_entity(entity, entity.declared_name.clone()),
                });
            }
            Entry::Occupied(_) => skip_duplicate(EntityKind::Element, entity),
        }
    }

    for entity in select::entities_in_file(snapshot.entities(EntityKind::Behavior), path) {
        let name = behavior_key(&entity.declared_name, &options.behavior_namespace).to_string();
        match result.behaviors.entry(name) {
            Entry::Vacant(slot) => {
                let name = slot.key().clone();
                slot.insert(normalize_entity(entity, name));
            }
            Entry::Occupied(_) => skip_duplicate(EntityKind::Behavior, entity),
        }
    }

    tracing::debug!(
        path,
        elements = result.elements.len(),
        behaviors = result.behaviors.len(),
        "extraction complete"
    );
    result
}

/// Normalize one declaration under the given output name.
#[must_use]
pub fn normalize_entity(entity: &DeclaredEntity, name: String) -> NormalizedEntity {
    NormalizedEntity {
        name,
        properties: build_properties(&entity.members),
        methods: build_methods(&entity.members),
        description: entity.description.clone().unwrap_or_default(),
        behaviors: entity.composed_behaviors.clone(),
    }
}

fn skip_duplicate(kind: EntityKind, entity: &DeclaredEntity) {
    tracing::debug!(%kind, name = %entity.declared_name, "skipping repeated declaration");
}

#[cfg(test)]
mod tests;
