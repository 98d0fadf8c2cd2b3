//! Analyzer snapshot model.
//!
//! These types mirror the JSON dump of the external analyzer's result. They
//! are read-only inputs to extraction: one snapshot is decoded in full before
//! any entity is normalized, and nothing mutates it afterwards.
//!
//! Optional collections decode as empty whether the analyzer omits them or
//! writes `null`, and unknown fields are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` the same way as an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The full analyzer output for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    /// Per-document records keyed by file path.
    #[serde(default, deserialize_with = "nullable")]
    pub html: BTreeMap<String, DocumentRecord>,

    /// Element-kind declarations across all analyzed files.
    #[serde(default, deserialize_with = "nullable")]
    pub elements: Vec<DeclaredEntity>,

    /// Behavior-kind declarations across all analyzed files.
    #[serde(default, deserialize_with = "nullable")]
    pub behaviors: Vec<DeclaredEntity>,
}

impl AnalysisSnapshot {
    /// All declarations of the given kind, in analyzer order.
    #[must_use]
    pub fn entities(&self, kind: EntityKind) -> &[DeclaredEntity] {
        match kind {
            EntityKind::Element => &self.elements,
            EntityKind::Behavior => &self.behaviors,
        }
    }

    /// The document record for `path`, if the analyzer produced one.
    #[must_use]
    pub fn document(&self, path: &str) -> Option<&DocumentRecord> {
        self.html.get(path)
    }
}

/// What the analyzer knows about one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Import references, passed through to the output untouched.
    #[serde(rename = "depHrefs", default, deserialize_with = "nullable")]
    pub dep_hrefs: Vec<String>,
}

/// Which list of the snapshot a declaration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Element,
    Behavior,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Element => "element",
            Self::Behavior => "behavior",
        };
        write!(f, "{s}")
    }
}

/// A named element or behavior declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclaredEntity {
    /// File the declaration came from.
    #[serde(rename = "contentHref", default, deserialize_with = "nullable")]
    pub origin_file: String,

    /// Declared identifier (`my-element`, `Polymer.SomeBehavior`).
    #[serde(rename = "is", default, deserialize_with = "nullable")]
    pub declared_name: String,

    /// Raw members in declaration order. Names may repeat.
    #[serde(rename = "properties", default, deserialize_with = "nullable")]
    pub members: Vec<RawMember>,

    /// Names of the behaviors this declaration composes.
    #[serde(rename = "behaviors", default, deserialize_with = "nullable")]
    pub composed_behaviors: Vec<String>,

    #[serde(rename = "desc", default)]
    pub description: Option<String>,
}

/// Getter/setter marker of a member's syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    None,
    Get,
    Set,
}

/// One member attached to a declaration, as the analyzer reports it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMember {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    #[serde(rename = "function", default, deserialize_with = "nullable")]
    pub is_function: bool,

    /// Declared type of a plain field.
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,

    #[serde(rename = "params", default, deserialize_with = "nullable")]
    pub parameters: Vec<Parameter>,

    #[serde(rename = "return", default)]
    pub return_type: Option<ReturnAnnotation>,

    #[serde(rename = "desc", default)]
    pub description: Option<String>,

    /// The declaration's syntax node.
    #[serde(rename = "javascriptNode", default)]
    pub syntax: Option<SyntaxNode>,
}

impl RawMember {
    /// Accessor kind of this member. Only function-valued members can be
    /// accessors; any node kind other than `get`/`set` is [`AccessorKind::None`].
    #[must_use]
    pub fn accessor_kind(&self) -> AccessorKind {
        if !self.is_function {
            return AccessorKind::None;
        }
        match self.syntax.as_ref().and_then(|node| node.kind.as_deref()) {
            Some("get") => AccessorKind::Get,
            Some("set") => AccessorKind::Set,
            _ => AccessorKind::None,
        }
    }

    /// Type carried by the return annotation, if any.
    #[must_use]
    pub fn return_type_name(&self) -> Option<&str> {
        self.return_type
            .as_ref()
            .and_then(|annotation| annotation.type_name.as_deref())
    }

    /// String literal held by the syntax node's value sub-node.
    #[must_use]
    pub fn literal_value(&self) -> Option<&str> {
        self.syntax
            .as_ref()
            .and_then(|node| node.value.as_ref())
            .and_then(|value| value.value.as_ref())
            .and_then(serde_json::Value::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    #[serde(rename = "type", default)]
    pub type_name: Option<String>,

    #[serde(rename = "desc", default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnAnnotation {
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
}

/// The subset of a member's syntax node that extraction reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntaxNode {
    /// `get`, `set`, `init`, ...
    #[serde(default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub value: Option<ValueNode>,
}

/// Value-holding sub-node; `value` is the literal when the node is one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueNode {
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn member(json: &str) -> RawMember {
        serde_json::from_str(json).expect("member should decode")
    }

    #[test]
    fn absent_and_null_collections_decode_empty() {
        let snapshot: AnalysisSnapshot =
            serde_json::from_str(r#"{"html":{},"elements":null}"#).expect("snapshot decodes");
        assert!(snapshot.elements.is_empty());
        assert!(snapshot.behaviors.is_empty());
        assert!(snapshot.entities(EntityKind::Behavior).is_empty());
    }

    #[test]
    fn entity_fields_map_from_analyzer_names() {
        let entity: DeclaredEntity = serde_json::from_str(
            r#"{"contentHref":"a.html","is":"x-a","desc":"doc","behaviors":["B"],"properties":[{"name":"p"}],"extra":1}"#,
        )
        .expect("entity decodes");
        assert_eq!(entity.origin_file, "a.html");
        assert_eq!(entity.declared_name, "x-a");
        assert_eq!(entity.description.as_deref(), Some("doc"));
        assert_eq!(entity.composed_behaviors, vec!["B".to_string()]);
        assert_eq!(entity.members.len(), 1);
    }

    #[test]
    fn accessor_kind_requires_function() {
        let getter = member(r#"{"name":"x","function":true,"javascriptNode":{"kind":"get"}}"#);
        let setter = member(r#"{"name":"x","function":true,"javascriptNode":{"kind":"set"}}"#);
        let init = member(r#"{"name":"x","function":true,"javascriptNode":{"kind":"init"}}"#);
        let field = member(r#"{"name":"x","javascriptNode":{"kind":"get"}}"#);
        assert_eq!(getter.accessor_kind(), AccessorKind::Get);
        assert_eq!(setter.accessor_kind(), AccessorKind::Set);
        assert_eq!(init.accessor_kind(), AccessorKind::None);
        assert_eq!(field.accessor_kind(), AccessorKind::None);
    }

    #[test]
    fn literal_value_reads_only_strings() {
        let text = member(r#"{"name":"extends","javascriptNode":{"value":{"value":"input"}}}"#);
        let number = member(r#"{"name":"extends","javascriptNode":{"value":{"value":3}}}"#);
        let bare = member(r#"{"name":"extends"}"#);
        assert_eq!(text.literal_value(), Some("input"));
        assert_eq!(number.literal_value(), None);
        assert_eq!(bare.literal_value(), None);
    }

    #[test]
    fn return_type_name_tolerates_untyped_annotation() {
        let typed = member(r#"{"name":"f","function":true,"return":{"type":"string"}}"#);
        let untyped = member(r#"{"name":"f","function":true,"return":{}}"#);
        assert_eq!(typed.return_type_name(), Some("string"));
        assert!(untyped.return_type.is_some());
        assert_eq!(untyped.return_type_name(), None);
    }
}
