//! Method and argument records.

use indexmap::IndexMap;
use indexmap::map::Entry;
use polydoc_core::{MethodArgument, NormalizedMethod, Parameter, RawMember};

use crate::classify::{MemberKind, classify};

/// Build the method map of one entity's member list, first-seen wins.
#[must_use]
pub fn build_methods(members: &[RawMember]) -> IndexMap<String, NormalizedMethod> {
    let mut methods = IndexMap::new();

    for member in members
        .iter()
        .filter(|member| classify(member) == Some(MemberKind::Method))
    {
        match methods.entry(member.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(normalize_method(member));
            }
            Entry::Occupied(_) => {
                tracing::debug!(method = %member.name, "skipping repeated method declaration");
            }
        }
    }

    methods
}

fn normalize_method(member: &RawMember) -> NormalizedMethod {
    NormalizedMethod {
        name: member.name.clone(),
        type_name: member.return_type_name().map(str::to_owned),
        description: member.description.clone().unwrap_or_default(),
        is_void: member.return_type.is_none(),
        args: member.parameters.iter().map(build_argument).collect(),
    }
}

fn build_argument(parameter: &Parameter) -> MethodArgument {
    MethodArgument {
        name: parameter.name.clone(),
        description: parameter.description.clone().unwrap_or_default(),
        type_name: parameter.type_name.clone(),
    }
}
