//! End-to-end tests: build a graph with `glyph-graph`, write the artifact
//! through a real file, load it back and query it.

use glyph_graph::{AliasUnion, GraphStore};
use glyph_graph_query::{CompiledGraph, QueryService};
use glyph_ids::parse_ids;

/// Builds a small decomposition graph:
///
/// ```text
///   u4e00 (one) ─┐
///                ├─> u4e02 (P) ──> u4e03 (Q)
///   u4e01 (two) ─┘
///   u53e3 ──> u56de
/// ```
fn build_artifact() -> CompiledGraph {
    let mut store = GraphStore::new();
    store.add_edge("u4e00", "u4e02");
    store.add_edge("u4e01", "u4e02");
    store.add_edge("u4e02", "u4e03");
    store.add_edge("u53e3", "u56de");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    store.save(&path).unwrap();
    CompiledGraph::load(&path).unwrap()
}

#[test]
fn test_round_trip_preserves_names_and_children() {
    let graph = build_artifact();
    assert_eq!(graph.len(), 6);
    assert_eq!(graph.children("u4e00"), vec!["u4e02"]);
    assert_eq!(graph.children("u4e02"), vec!["u4e03"]);
    assert_eq!(graph.children("u53e3"), vec!["u56de"]);
    assert!(graph.children("u56de").is_empty());
}

#[test]
fn test_round_trip_preserves_reachability_after_cycle_breaking() {
    let mut store = GraphStore::new();
    store.add_edge("aaa", "bbb");
    store.add_edge("bbb", "ccc");
    store.add_edge("ccc", "aaa");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    store.save(&path).unwrap();

    // After saving, the in-memory store is the acyclic graph; the loaded
    // artifact must expose exactly its edges.
    let graph = CompiledGraph::load(&path).unwrap();
    for source in ["aaa", "bbb", "ccc"] {
        let loaded = graph.children(source);
        for target in ["aaa", "bbb", "ccc"] {
            assert_eq!(
                loaded.contains(&target),
                store.contains_edge(source, target),
                "edge {source} -> {target} disagrees after round trip"
            );
        }
    }
}

#[test]
fn test_hcd_example_from_two_components() {
    let graph = build_artifact();
    let service = QueryService::new(&graph);
    let results = service.query(&["u4e00", "u4e01"]);
    // P is the tightest combination; Q is pruned as P's direct successor.
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].names, vec!["u4e02"]);
    assert_eq!(results[0].children, vec![vec!["u4e03".to_string()]]);
}

#[test]
fn test_queries_never_error() {
    let graph = build_artifact();
    let service = QueryService::new(&graph);
    assert!(service.query(&Vec::<String>::new()).is_empty());
    assert!(service.query(&["u9999"]).is_empty());
    assert!(service.query(&["u4e00", "u9999"]).is_empty());
}

#[test]
fn test_alias_folding_through_full_pipeline() {
    // Two spellings of the same component are unified before edges land.
    let mut aliases = AliasUnion::new();
    aliases.union("abst:u2e95", "abst:cdp-8b68");

    let dir = tempfile::tempdir().unwrap();
    let edges = dir.path().join("edges.txt");
    let alias_file = dir.path().join("aliases.txt");
    let artifact = dir.path().join("graph.txt");

    std::fs::write(
        &edges,
        "abst:u2e95 u5f50-j\nabst:cdp-8b68 u5f50-j,u5f51-j\n",
    )
    .unwrap();
    aliases.save(&alias_file).unwrap();

    glyph_graph::compile_dump(&edges, Some(&alias_file), &artifact).unwrap();
    let graph = CompiledGraph::load(&artifact).unwrap();

    // Either alias finds the merged vertex, and the duplicate edge from the
    // second spelling collapsed into it.
    let merged = graph.resolve("abst:u2e95").unwrap();
    assert_eq!(graph.resolve("abst:cdp-8b68"), Some(merged));
    assert_eq!(
        graph.children("abst:u2e95"),
        vec!["u5f50-j", "u5f51-j"]
    );

    let service = QueryService::new(&graph);
    let results = service.children(&["abst:cdp-8b68"]);
    assert_eq!(
        results[0].names,
        vec!["abst:u2e95".to_string(), "abst:cdp-8b68".to_string()]
    );
}

#[test]
fn test_ids_parsing_feeds_the_store() {
    // A composite described as ⿱⿰一丁口 contributes one edge per leaf.
    let tree = parse_ids(&["u2ff1", "u2ff0", "u4e00", "u4e01", "u53e3"]).unwrap();
    let mut store = GraphStore::new();
    for component in tree.components("u4e2d") {
        store.add_edge(&component, "abst:u4e2d");
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    store.save(&path).unwrap();
    let graph = CompiledGraph::load(&path).unwrap();

    let service = QueryService::new(&graph);
    let results = service.query(&["u4e00", "u53e3"]);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].names, vec!["abst:u4e2d"]);
}

#[test]
fn test_larger_fanout_query_stays_minimal() {
    // Components shared by many composites: the pruning step must drop
    // every composite that is one hop downstream of another hit.
    let mut store = GraphStore::new();
    // radical + phonetic both appear in p1; p1 is used inside p2 and p3.
    store.add_edge("rad-1", "p1-glyph");
    store.add_edge("pho-1", "p1-glyph");
    store.add_edge("p1-glyph", "p2-glyph");
    store.add_edge("p1-glyph", "p3-glyph");
    // Both components also reach p4 directly, bypassing p1.
    store.add_edge("rad-1", "p4-glyph");
    store.add_edge("pho-1", "p4-glyph");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    store.save(&path).unwrap();
    let graph = CompiledGraph::load(&path).unwrap();

    let service = QueryService::new(&graph);
    let results = service.query(&["rad-1", "pho-1"]);
    let names: Vec<&str> = results.iter().map(|d| d.names[0].as_str()).collect();
    // p1 and p4 are both minimal; p2/p3 sit below p1.
    assert_eq!(names, vec!["p1-glyph", "p4-glyph"]);
}
