//! The vertex-name model shared by the graph builder and the query engine.
//!
//! Three disjoint families of names appear in the graph:
//!
//! 1. **Concrete glyph names**: opaque identifiers from the glyph
//!    repository, e.g. `u4e00-j` or `koseki-001700`.
//! 2. **Abstract entity references**: `abst:`-prefixed names denoting a
//!    Unicode code point (`abst:u4e2d`), an external CDP glyph
//!    (`abst:cdp-8c42`), or an unencoded component.
//! 3. **Merged names**: the `=`-joined members of an alias group once
//!    aliasing has collapsed equivalent vertices, e.g.
//!    `abst:u2e95=abst:cdp-8b68`.

/// Prefix marking an abstract entity reference.
pub const ABSTRACT_PREFIX: &str = "abst:";

/// Separator joining alias-group members into a merged vertex name.
pub const ALIAS_SEPARATOR: char = '=';

/// Normalized code-point token for a character: `u` + lowercase hex, padded
/// to four digits (`一` → `u4e00`).
pub fn codepoint_token(c: char) -> String {
    format!("u{:04x}", c as u32)
}

/// Abstract entity reference for a character's code point.
pub fn abstract_codepoint(c: char) -> String {
    format!("{}{}", ABSTRACT_PREFIX, codepoint_token(c))
}

/// Abstract entity reference for an already-normalized token
/// (`u4e2d`, `cdp-8c42`, …).
pub fn abstract_entity(token: &str) -> String {
    format!("{ABSTRACT_PREFIX}{token}")
}

/// True if `name` is an abstract entity reference.
pub fn is_abstract(name: &str) -> bool {
    name.starts_with(ABSTRACT_PREFIX)
}

/// Splits a (possibly merged) vertex name into its alias members.
///
/// A name without [`ALIAS_SEPARATOR`] yields itself as the only member.
pub fn split_aliases(name: &str) -> Vec<String> {
    name.split(ALIAS_SEPARATOR).map(str::to_string).collect()
}

/// Joins alias-group members into a merged vertex name.
pub fn join_aliases<S: AsRef<str>>(members: &[S]) -> String {
    members
        .iter()
        .map(|m| m.as_ref())
        .collect::<Vec<_>>()
        .join("=")
}
