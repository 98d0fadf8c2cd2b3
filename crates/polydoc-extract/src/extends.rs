//! Supertype lookup.

use polydoc_core::RawMember;

use crate::classify::EXTENDS_MEMBER;

/// Literal value of the first `extends` member, if any.
///
/// Base elements have no `extends`; a declaration whose value is not a string
/// literal resolves to `None` as well.
#[must_use]
pub fn resolve_extends(members: &[RawMember]) -> Option<String> {
    members
        .iter()
        .find(|member| member.name == EXTENDS_MEMBER)
        .and_then(RawMember::literal_value)
        .map(str::to_owned)
}
