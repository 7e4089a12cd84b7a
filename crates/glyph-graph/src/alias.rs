//! Alias groups: names known to denote the same glyph entity.
//!
//! `AliasUnion` is a union-find over vertex names whose observable state is
//! an *ordered* member list per group. Groups live in an arena of records;
//! each name maps to its record's slot, and merging moves the smaller
//! record's members into the larger one and re-points their slots. The
//! weighted merge gives amortized near-linear cost without path compression;
//! there is no separate find step because every member holds its slot
//! directly.
//!
//! # Example
//!
//! ```rust
//! use glyph_graph::AliasUnion;
//!
//! let mut aliases = AliasUnion::new();
//! aliases.union("abst:u2e95", "abst:cdp-8b68");
//! aliases.union("abst:cdp-8b68", "abst:u5f50");
//!
//! assert_eq!(
//!     aliases.group("abst:u5f50"),
//!     vec!["abst:u2e95", "abst:cdp-8b68", "abst:u5f50"],
//! );
//! assert_eq!(aliases.merged_name("abst:u2e95"), "abst:u2e95=abst:cdp-8b68=abst:u5f50");
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use glyph_ids::name::join_aliases;

use crate::error::{GraphError, GraphResult};

/// Union-find over glyph names with ordered, observable groups.
#[derive(Debug, Default)]
pub struct AliasUnion {
    /// Arena of group records; a merged-away record is left empty.
    groups: Vec<Vec<String>>,
    /// Name to arena slot. Ungrouped names have no entry.
    slots: HashMap<String, usize>,
}

impl AliasUnion {
    /// Creates an empty union.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `a` and `b` denote the same entity. No-op if `a == b`
    /// or both already share a group.
    ///
    /// Member order after the call follows the original merge rules: a lone
    /// `a` joins at the front of `b`'s group, a lone `b` at the back of
    /// `a`'s; when two groups meet, a strictly smaller `a`-group is
    /// prepended into `b`'s, otherwise `b`'s group is appended onto `a`'s.
    pub fn union(&mut self, a: &str, b: &str) {
        if a == b {
            return;
        }
        match (self.slots.get(a).copied(), self.slots.get(b).copied()) {
            (None, None) => {
                let slot = self.groups.len();
                self.groups.push(vec![a.to_string(), b.to_string()]);
                self.slots.insert(a.to_string(), slot);
                self.slots.insert(b.to_string(), slot);
            }
            (None, Some(gb)) => {
                self.groups[gb].insert(0, a.to_string());
                self.slots.insert(a.to_string(), gb);
            }
            (Some(ga), None) => {
                self.groups[ga].push(b.to_string());
                self.slots.insert(b.to_string(), ga);
            }
            (Some(ga), Some(gb)) if ga == gb => {}
            (Some(ga), Some(gb)) => {
                if self.groups[ga].len() < self.groups[gb].len() {
                    let moved = std::mem::take(&mut self.groups[ga]);
                    for name in &moved {
                        self.slots.insert(name.clone(), gb);
                    }
                    let mut merged = moved;
                    merged.append(&mut self.groups[gb]);
                    self.groups[gb] = merged;
                } else {
                    let moved = std::mem::take(&mut self.groups[gb]);
                    for name in &moved {
                        self.slots.insert(name.clone(), ga);
                    }
                    self.groups[ga].extend(moved);
                }
            }
        }
    }

    /// Returns a copy of `name`'s group, or `[name]` if it is ungrouped.
    pub fn group(&self, name: &str) -> Vec<String> {
        match self.slots.get(name) {
            Some(&slot) => self.groups[slot].clone(),
            None => vec![name.to_string()],
        }
    }

    /// The `=`-joined merged vertex name for `name`'s group.
    ///
    /// Ungrouped names fold to themselves, so this is directly usable as the
    /// normalization hook of
    /// [`GraphStore::undump_with`](crate::GraphStore::undump_with).
    pub fn merged_name(&self, name: &str) -> String {
        match self.slots.get(name) {
            Some(&slot) => join_aliases(&self.groups[slot]),
            None => name.to_string(),
        }
    }

    /// Number of distinct multi-member groups.
    pub fn group_count(&self) -> usize {
        self.groups.iter().filter(|g| !g.is_empty()).count()
    }

    /// Writes one line per distinct group: space-separated members.
    ///
    /// Merged-away records are skipped, so each group is emitted exactly
    /// once no matter how many members it has.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> GraphResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| GraphError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        for group in self.groups.iter().filter(|g| !g.is_empty()) {
            writeln!(writer, "{}", group.join(" ")).map_err(|e| GraphError::io(path, e))?;
        }
        writer.flush().map_err(|e| GraphError::io(path, e))
    }

    /// Reads groups written by [`save`](Self::save), unioning every member
    /// of a line with its first column. Lines starting with `#` are
    /// comments; lines with fewer than two columns are skipped.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> GraphResult<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| GraphError::io(path, e))?;
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| GraphError::io(path, e))?;
            if line.starts_with('#') {
                continue;
            }
            let mut columns = line.split_whitespace();
            let Some(pivot) = columns.next() else {
                continue;
            };
            for member in columns {
                self.union(pivot, member);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(group: &[String]) -> Vec<&str> {
        group.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_union_self_is_noop() {
        let mut u = AliasUnion::new();
        u.union("u4e00", "u4e00");
        assert_eq!(u.group("u4e00"), vec!["u4e00"]);
        assert_eq!(u.group_count(), 0);
    }

    #[test]
    fn test_fresh_pair_forms_ordered_group() {
        let mut u = AliasUnion::new();
        u.union("a-name", "b-name");
        assert_eq!(names(&u.group("a-name")), ["a-name", "b-name"]);
        assert_eq!(names(&u.group("b-name")), ["a-name", "b-name"]);
    }

    #[test]
    fn test_lone_a_joins_at_front_lone_b_at_back() {
        let mut u = AliasUnion::new();
        u.union("a-name", "b-name");
        u.union("c-name", "b-name");
        assert_eq!(names(&u.group("b-name")), ["c-name", "a-name", "b-name"]);
        u.union("a-name", "d-name");
        assert_eq!(
            names(&u.group("a-name")),
            ["c-name", "a-name", "b-name", "d-name"]
        );
    }

    #[test]
    fn test_merge_smaller_into_larger() {
        let mut u = AliasUnion::new();
        u.union("a1", "a2");
        u.union("b1", "b2");
        u.union("b1", "b3");
        // |a| = 2 < |b| = 3: a's members are prepended into b's group.
        u.union("a1", "b1");
        for name in ["a1", "a2", "b1", "b2", "b3"] {
            assert_eq!(names(&u.group(name)), ["a1", "a2", "b1", "b2", "b3"]);
        }
    }

    #[test]
    fn test_merge_tie_appends_b_group() {
        let mut u = AliasUnion::new();
        u.union("a1", "a2");
        u.union("b1", "b2");
        u.union("a1", "b1");
        assert_eq!(names(&u.group("b2")), ["a1", "a2", "b1", "b2"]);
    }

    #[test]
    fn test_merged_group_size_is_sum() {
        let mut u = AliasUnion::new();
        u.union("a1", "a2");
        u.union("a1", "a3");
        u.union("b1", "b2");
        u.union("a2", "b1");
        assert_eq!(u.group("b2").len(), 5);
        assert_eq!(u.group_count(), 1);
    }

    #[test]
    fn test_transitivity_in_any_order() {
        let mut left = AliasUnion::new();
        left.union("x-one", "y-two");
        left.union("y-two", "z-three");

        let mut right = AliasUnion::new();
        right.union("y-two", "z-three");
        right.union("x-one", "y-two");

        let mut a = left.group("x-one");
        let mut b = right.group("z-three");
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_group_returns_copy() {
        let mut u = AliasUnion::new();
        u.union("a-name", "b-name");
        let mut copy = u.group("a-name");
        copy.push("intruder".to_string());
        assert_eq!(u.group("a-name").len(), 2);
    }

    #[test]
    fn test_merged_name() {
        let mut u = AliasUnion::new();
        assert_eq!(u.merged_name("loner"), "loner");
        u.union("abst:u2e95", "abst:cdp-8b68");
        assert_eq!(u.merged_name("abst:cdp-8b68"), "abst:u2e95=abst:cdp-8b68");
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut u = AliasUnion::new();
        u.union("a1", "a2");
        u.union("a1", "a3");
        u.union("b1", "b2");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.txt");
        u.save(&path).unwrap();

        let mut restored = AliasUnion::new();
        restored.load(&path).unwrap();
        assert_eq!(restored.group("a2"), u.group("a2"));
        assert_eq!(restored.group("b1"), u.group("b1"));
        assert_eq!(restored.group_count(), 2);
    }

    #[test]
    fn test_load_skips_comments_and_short_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.txt");
        std::fs::write(&path, "# comment\nsingle\nu4e00 u4e01\n").unwrap();

        let mut u = AliasUnion::new();
        u.load(&path).unwrap();
        assert_eq!(u.group("single"), vec!["single"]);
        assert_eq!(u.group("u4e00").len(), 2);
    }
}
