//! Member classification: visibility and field/method kind.

use polydoc_core::{AccessorKind, RawMember};

/// Member name reserved for the element's supertype declaration.
pub const EXTENDS_MEMBER: &str = "extends";

/// Naming-convention visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// What a member contributes to the normalized entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Plain data field or accessor fragment.
    Field,
    Method,
}

#[must_use]
pub fn visibility(member: &RawMember) -> Visibility {
    if member.name.starts_with('_') {
        Visibility::Private
    } else {
        Visibility::Public
    }
}

/// Accessors count as fields; only non-accessor functions are methods.
#[must_use]
pub fn member_kind(member: &RawMember) -> MemberKind {
    if member.is_function && member.accessor_kind() == AccessorKind::None {
        MemberKind::Method
    } else {
        MemberKind::Field
    }
}

/// Kind of a member that belongs in the output, or `None` for private
/// members and the reserved `extends` declaration.
#[must_use]
pub fn classify(member: &RawMember) -> Option<MemberKind> {
    if visibility(member) == Visibility::Private || member.name == EXTENDS_MEMBER {
        return None;
    }
    Some(member_kind(member))
}
