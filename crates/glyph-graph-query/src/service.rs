//! Consumer-facing query operations.
//!
//! The lookup front end speaks in `Desc` records: a vertex's alias names
//! plus the children available for one-step expansion. `QueryService`
//! borrows a loaded [`CompiledGraph`]: construct the graph once at startup
//! and hand a reference to every handler.

use std::cmp::Ordering;

use glyph_ids::name::split_aliases;

use crate::graph::CompiledGraph;

/// One result vertex: its alias names and its direct successors, each as an
/// alias list, ready for incremental expansion by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Desc {
    /// Alias members of the vertex name, in merged order.
    pub names: Vec<String>,
    /// Direct successors, each as its own alias list, in display order.
    pub children: Vec<Vec<String>>,
}

/// Read-only query operations over a loaded graph.
pub struct QueryService<'a> {
    graph: &'a CompiledGraph,
}

impl<'a> QueryService<'a> {
    /// Creates a service over a loaded graph.
    pub fn new(graph: &'a CompiledGraph) -> Self {
        Self { graph }
    }

    /// Runs a highest-common-descendant search for the given component
    /// names and describes each hit.
    ///
    /// Empty queries and queries naming unknown vertices yield an empty
    /// result, never an error. Results are in display order.
    pub fn query<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<Desc> {
        let mut hits = self.graph.highest_common_descendants(tokens);
        hits.sort_by(|&a, &b| display_order(self.graph.name(a), self.graph.name(b)));
        hits.into_iter()
            .map(|vertex| self.describe(vertex))
            .collect()
    }

    /// Describes the immediate successors of each given name, pairing every
    /// input with its resolved alias list. Unknown names come back with
    /// their bare name and no children.
    pub fn children<S: AsRef<str>>(&self, names: &[S]) -> Vec<Desc> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                match self.graph.resolve(name) {
                    Some(vertex) => self.describe(vertex),
                    None => Desc {
                        names: vec![name.to_string()],
                        children: Vec::new(),
                    },
                }
            })
            .collect()
    }

    fn describe(&self, vertex: usize) -> Desc {
        let mut child_names: Vec<&str> = self
            .graph
            .successors(vertex)
            .iter()
            .map(|&succ| self.graph.name(succ))
            .collect();
        child_names.sort_by(|a, b| display_order(a, b));
        Desc {
            names: self.graph.aliases(vertex),
            children: child_names
                .into_iter()
                .map(split_aliases)
                .collect(),
        }
    }
}

/// Display ordering for vertex names.
///
/// Abstract entities come first, then unowned glyphs before `_`-owned ones,
/// plain names before `u2ff*-` description-sequence names, code-point
/// bearing names in numeric order, and lexicographic order as the final
/// tie-break.
pub fn display_order(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}

fn sort_key(name: &str) -> (bool, bool, bool, bool, u64) {
    let codepoint = leading_codepoint(name);
    (
        !name.starts_with("abst:"),
        name.contains('_'),
        is_ids_sequence_name(name),
        codepoint.is_none(),
        codepoint.unwrap_or(0),
    )
}

/// Matches `u2ff[0-9ab]-` prefixes: names that are themselves flattened
/// description sequences.
fn is_ids_sequence_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() > 5
        && bytes.starts_with(b"u2ff")
        && (bytes[4].is_ascii_digit() || bytes[4] == b'a' || bytes[4] == b'b')
        && bytes[5] == b'-'
}

/// Parses the code point out of a `uXXXX…` or `abst:uXXXX…` name: at least
/// four lowercase hex digits after the `u`.
fn leading_codepoint(name: &str) -> Option<u64> {
    let rest = name.strip_prefix("abst:").unwrap_or(name);
    let hex = rest.strip_prefix('u')?;
    let digits: String = hex
        .chars()
        .take_while(|c| c.is_ascii_digit() || ('a'..='f').contains(c))
        .collect();
    if digits.len() < 4 {
        return None;
    }
    u64::from_str_radix(&digits, 16).ok()
}
