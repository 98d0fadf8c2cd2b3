//! Normalized records printed by `polydoc`.
//!
//! Field names and field order define the stable JSON shape consumed by
//! downstream documentation tooling. Maps keep insertion order so identical
//! snapshots always serialize to identical bytes.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One property per distinct public field name, with accessors merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProperty {
    pub has_getter: bool,
    pub has_setter: bool,
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub description: String,
}

/// One method per distinct public method name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedMethod {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub description: String,
    /// True iff the method carries no return annotation.
    pub is_void: bool,
    /// Parameters in declaration order.
    pub args: Vec<MethodArgument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MethodArgument {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
}

/// Fields shared by element and behavior records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NormalizedEntity {
    pub name: String,
    pub properties: IndexMap<String, NormalizedProperty>,
    pub methods: IndexMap<String, NormalizedMethod>,
    pub description: String,
    pub behaviors: Vec<String>,
}

/// An element record: an entity plus its `extends` name, always emitted
/// (as `null` when the element has none).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ElementRecord {
    #[serde(rename = "extendsName")]
    pub extends_name: Option<String>,
    #[serde(flatten)]
    pub entity: NormalizedEntity,
}

/// Everything extracted from one target file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExtractionResult {
    pub path: String,
    pub imports: Vec<String>,
    /// Keyed by the capitalized-camel form of the element name.
    pub elements: IndexMap<String, ElementRecord>,
    /// Keyed by the behavior name without its namespace prefix.
    pub behaviors: IndexMap<String, NormalizedEntity>,
}

impl ExtractionResult {
    /// An empty result for `path`.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            imports: Vec::new(),
            elements: IndexMap::new(),
            behaviors: IndexMap::new(),
        }
    }
}
