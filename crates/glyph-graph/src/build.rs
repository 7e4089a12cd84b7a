//! One-call compile pipeline: uncompiled dump → queryable artifact.

use std::path::Path;

use crate::alias::AliasUnion;
use crate::error::GraphResult;
use crate::store::GraphStore;

/// Compiles an uncompiled edge dump into the indexed artifact.
///
/// When an alias file is given, its groups are loaded first and every vertex
/// name in the dump is folded to its merged name before edges are recorded;
/// edges collapsing to self-references disappear in the process. Any I/O
/// failure is fatal and aborts the compilation.
///
/// # Example
///
/// ```ignore
/// use glyph_graph::compile_dump;
///
/// compile_dump("edges.txt", Some("aliases.txt"), "graph.txt")?;
/// ```
pub fn compile_dump<P, Q, R>(dump: P, aliases: Option<Q>, out: R) -> GraphResult<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let mut store = GraphStore::new();
    match aliases {
        Some(alias_path) => {
            let mut union = AliasUnion::new();
            union.load(alias_path)?;
            store.undump_with(dump, |name| union.merged_name(name))?;
        }
        None => store.undump(dump)?,
    }
    store.save(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_without_aliases() {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("edges.txt");
        let out = dir.path().join("graph.txt");
        std::fs::write(&dump, "u4e00 u4e02\nu4e01 u4e02\nu4e02 u4e03\n").unwrap();

        compile_dump(&dump, None::<&Path>, &out).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text, "u4e02 C\nu4e03 \nu4e00 A\nu4e01 A\n");
    }

    #[test]
    fn test_compile_folds_alias_groups() {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("edges.txt");
        let aliases = dir.path().join("aliases.txt");
        let out = dir.path().join("graph.txt");
        // Both spellings of the component point at the same composite; the
        // alias file folds them into one merged vertex.
        std::fs::write(&dump, "abst:u2e95 u5f50-j\nabst:cdp-8b68 u5f50-j\n").unwrap();
        std::fs::write(&aliases, "# cdp aliases\nabst:u2e95 abst:cdp-8b68\n").unwrap();

        compile_dump(&dump, Some(&aliases), &out).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text, "u5f50-j \nabst:u2e95=abst:cdp-8b68 A\n");
    }

    #[test]
    fn test_compile_missing_dump_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("graph.txt");
        let missing = dir.path().join("does-not-exist.txt");
        assert!(compile_dump(&missing, None::<&Path>, &out).is_err());
    }
}
