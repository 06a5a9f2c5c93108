//! # Member Matching
//!
//! Decides whether a fully-qualified store member name belongs to a channel
//! prefix, and recovers the bare channel name from a matched member.
//!
//! Matching is case- and punctuation-insensitive: both sides are compared in
//! normalized form (letters/digits only, lowercased), so `socketOn_Message`,
//! `socketOnMessage`, and `module/socketOnMessage` all behave alike.

use super::format::{normalize, to_pascal_case};

/// Check whether `member` matches `prefix`, either directly or through one of
/// the store's module namespaces.
///
/// A member qualifies when its normalized name starts with the normalized
/// prefix, or when it contains some module namespace immediately followed by
/// the normalized prefix. The leftmost occurrence of the first such namespace
/// (in `module_namespaces` iteration order) delimits the remainder; callers
/// should not rely on precedence between namespaces that overlap as
/// substrings of each other.
///
/// `module_namespaces` entries must already be normalized.
pub fn member_matches(member: &str, prefix: &str, module_namespaces: &[String]) -> bool {
    let member = normalize(member);
    let prefix = normalize(prefix);

    let qualified = module_namespaces
        .iter()
        .find(|ns| member.contains(&format!("{ns}{prefix}")));
    if let Some(ns) = qualified {
        // Re-check from the first namespace occurrence; in practice true by
        // construction unless the namespace repeats earlier in the name.
        return match member.find(ns.as_str()) {
            Some(at) => member[at + ns.len()..].starts_with(&prefix),
            None => false,
        };
    }

    member.starts_with(&prefix)
}

/// Recover the bare channel name from a matched member: everything after the
/// prefix once both are Pascal-cased.
///
/// `channel_suffix("module/socketOnSendMessage", "socketOn")` → `"SendMessage"`.
///
/// Returns an empty string when the prefix does not occur in the member after
/// the transform. That is a caller configuration error (the prefix must be a
/// true substring of every bound member name post-format), not a runtime data
/// error, so no diagnostic is raised here.
pub fn channel_suffix(member: &str, prefix: &str) -> String {
    let member = to_pascal_case(member);
    let prefix = to_pascal_case(prefix);
    match member.find(&prefix) {
        Some(at) => member[at + prefix.len()..].to_string(),
        None => String::new(),
    }
}
