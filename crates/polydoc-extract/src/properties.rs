//! Property merging.
//!
//! Getter/setter fragments describe one logical property. A first pass
//! indexes which accessor kinds exist per name; the second pass emits one
//! record per distinct field name in declaration order, first-seen wins.

use std::collections::HashMap;

use indexmap::IndexMap;
use indexmap::map::Entry;
use polydoc_core::{AccessorKind, NormalizedProperty, RawMember};

use crate::classify::{MemberKind, classify};

#[derive(Debug, Clone, Copy, Default)]
struct AccessorPresence {
    getter: bool,
    setter: bool,
}

/// Name -> accessor kinds present anywhere in a member list.
///
/// Plain fields are not recorded: only real `get`/`set` members make a
/// sibling accessor.
#[derive(Debug, Default)]
pub(crate) struct AccessorIndex<'a> {
    by_name: HashMap<&'a str, AccessorPresence>,
}

impl<'a> AccessorIndex<'a> {
    pub(crate) fn build(members: &'a [RawMember]) -> Self {
        let mut by_name: HashMap<&'a str, AccessorPresence> = HashMap::new();
        for member in members {
            match member.accessor_kind() {
                AccessorKind::Get => by_name.entry(member.name.as_str()).or_default().getter = true,
                AccessorKind::Set => by_name.entry(member.name.as_str()).or_default().setter = true,
                AccessorKind::None => {}
            }
        }
        Self { by_name }
    }

    pub(crate) fn has_getter(&self, name: &str) -> bool {
        self.by_name.get(name).is_some_and(|presence| presence.getter)
    }

    pub(crate) fn has_setter(&self, name: &str) -> bool {
        self.by_name.get(name).is_some_and(|presence| presence.setter)
    }
}

/// Build the property map of one entity's member list.
#[must_use]
pub fn build_properties(members: &[RawMember]) -> IndexMap<String, NormalizedProperty> {
    let accessors = AccessorIndex::build(members);
    let mut properties = IndexMap::new();

    for member in members
        .iter()
        .filter(|member| classify(member) == Some(MemberKind::Field))
    {
        match properties.entry(member.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(normalize_property(member, &accessors));
            }
            Entry::Occupied(_) => {
                tracing::debug!(property = %member.name, "skipping repeated property declaration");
            }
        }
    }

    properties
}

fn normalize_property(member: &RawMember, accessors: &AccessorIndex<'_>) -> NormalizedProperty {
    let (has_getter, has_setter) = match member.accessor_kind() {
        AccessorKind::Get => (true, accessors.has_setter(&member.name)),
        AccessorKind::Set => (accessors.has_getter(&member.name), true),
        AccessorKind::None => (true, true),
    };

    NormalizedProperty {
        has_getter,
        has_setter,
        name: member.name.clone(),
        type_name: field_type(member),
        description: member.description.clone().unwrap_or_default(),
    }
}

/// Getter: return annotation. Setter: first parameter. Plain field: its own
/// declared type.
fn field_type(member: &RawMember) -> Option<String> {
    match member.accessor_kind() {
        AccessorKind::Get => member.return_type_name().map(str::to_owned),
        AccessorKind::Set => {
            let Some(value) = member.parameters.first() else {
                tracing::debug!(property = %member.name, "setter declares no parameter; type unknown");
                return None;
            };
            value.type_name.clone()
        }
        AccessorKind::None => member.type_name.clone(),
    }
}
