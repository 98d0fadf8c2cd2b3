//! Entity selection and output naming.

use polydoc_core::DeclaredEntity;

/// Declarations whose origin is exactly `path`, in analyzer order.
pub fn entities_in_file<'a>(
    entities: &'a [DeclaredEntity],
    path: &'a str,
) -> impl Iterator<Item = &'a DeclaredEntity> + 'a {
    entities
        .iter()
        .filter(move |entity| entity.origin_file == path)
}

/// `paper-icon-button` -> `PaperIconButton`.
///
/// Each hyphen-delimited segment has its first character upper-cased; empty
/// segments vanish.
#[must_use]
pub fn element_key(declared_name: &str) -> String {
    declared_name
        .split('-')
        .flat_map(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .map(char::to_uppercase)
                .into_iter()
                .flatten()
                .chain(chars)
        })
        .collect()
}

/// Strip `<namespace>.` from a behavior name. An empty namespace or a name
/// without the prefix is returned unchanged.
#[must_use]
pub fn behavior_key<'a>(declared_name: &'a str, namespace: &str) -> &'a str {
    if namespace.is_empty() {
        return declared_name;
    }
    declared_name
        .strip_prefix(namespace)
        .and_then(|rest| rest.strip_prefix('.'))
        .unwrap_or(declared_name)
}
