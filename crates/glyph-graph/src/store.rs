//! Edge accumulation and graph compilation.
//!
//! `GraphStore` collects directed `component → composite` edges from the
//! source extractors, then compiles them into the indexed text artifact the
//! query engine loads:
//!
//! 1. **break cycles**: depth-first traversal deleting every back edge, so
//!    the compiled graph is acyclic;
//! 2. **order vertices**: descending in-degree, packing heavily referenced
//!    components at low indices to keep encoded successor lists short;
//! 3. **serialize**: one line per vertex, `<name> <VLQ successor indices>`.
//!
//! Iteration is lexicographic by vertex name throughout (adjacency is held
//! in ordered maps), so the removed feedback edge set and the artifact bytes
//! are identical across runs and platforms.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::warn;

use crate::error::{GraphError, GraphResult};
use crate::vlq;

/// Accumulates decomposition edges and compiles them into an artifact.
///
/// Edges point from component to composite: `add_edge("u4e00", "u4e09")`
/// records that 三 is built using 一. The adjacency structure is set-valued,
/// so duplicate edges collapse; self-edges are rejected at insertion.
#[derive(Debug, Default)]
pub struct GraphStore {
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl GraphStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the edge `component → composite`. Self-edges are dropped.
    pub fn add_edge(&mut self, component: &str, composite: &str) {
        if component == composite {
            return;
        }
        self.edges
            .entry(component.to_string())
            .or_default()
            .insert(composite.to_string());
    }

    /// True if the edge is currently recorded.
    pub fn contains_edge(&self, component: &str, composite: &str) -> bool {
        self.edges
            .get(component)
            .is_some_and(|targets| targets.contains(composite))
    }

    /// Total number of recorded edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// True if no edge has been recorded.
    pub fn is_empty(&self) -> bool {
        self.edges.values().all(BTreeSet::is_empty)
    }

    /// Writes the uncompiled edge set: one line per source vertex with
    /// recorded edges, `<name> <dest1>,<dest2>,…`.
    pub fn dump<P: AsRef<Path>>(&self, path: P) -> GraphResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| GraphError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        for (source, targets) in &self.edges {
            if targets.is_empty() {
                continue;
            }
            let joined = targets.iter().cloned().collect::<Vec<_>>().join(",");
            writeln!(writer, "{source} {joined}").map_err(|e| GraphError::io(path, e))?;
        }
        writer.flush().map_err(|e| GraphError::io(path, e))
    }

    /// Reads an uncompiled dump back into the store.
    pub fn undump<P: AsRef<Path>>(&mut self, path: P) -> GraphResult<()> {
        self.undump_with(path, |name| name.to_string())
    }

    /// Reads an uncompiled dump, passing every vertex name through
    /// `normalize` first: used to fold alias groups into merged names.
    /// Edges that become self-edges after normalization are dropped; lines
    /// without exactly one space-delimited field after the name are skipped
    /// with a warning.
    pub fn undump_with<P, F>(&mut self, path: P, normalize: F) -> GraphResult<()>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> String,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| GraphError::io(path, e))?;
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| GraphError::io(path, e))?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let columns: Vec<&str> = trimmed.split(' ').collect();
            let [source, targets] = columns[..] else {
                warn!(line = line_no + 1, "skipping malformed dump line");
                continue;
            };
            let source = normalize(source);
            for target in targets.split(',') {
                let target = normalize(target);
                if source == target {
                    continue;
                }
                self.add_edge(&source, &target);
            }
        }
        Ok(())
    }

    /// Deletes every back edge found by a depth-first traversal from each
    /// source vertex, leaving the graph acyclic.
    ///
    /// Vertices and out-edges are visited in name order, so the sacrificed
    /// edge set is deterministic. The traversal keeps an explicit frame
    /// stack; recursion depth is bounded by the heap, not the call stack.
    pub fn break_cycles(&mut self) {
        let mut visited: HashSet<String> = HashSet::new();
        let mut behind: HashSet<String> = HashSet::new();
        let roots: Vec<String> = self.edges.keys().cloned().collect();
        // frame: (vertex, out-edge snapshot, next position)
        let mut stack: Vec<(String, Vec<String>, usize)> = Vec::new();

        for root in roots {
            if visited.contains(&root) {
                continue;
            }
            visited.insert(root.clone());
            behind.insert(root.clone());
            let snapshot = self.out_snapshot(&root);
            stack.push((root, snapshot, 0));

            while let Some(frame) = stack.last_mut() {
                if frame.2 >= frame.1.len() {
                    behind.remove(frame.0.as_str());
                    stack.pop();
                    continue;
                }
                let target = frame.1[frame.2].clone();
                frame.2 += 1;
                let vertex = frame.0.clone();

                if behind.contains(&target) {
                    warn!(source = %vertex, target = %target, "removing edge to break cycle");
                    if let Some(targets) = self.edges.get_mut(&vertex) {
                        targets.remove(&target);
                    }
                } else if !visited.contains(&target) {
                    visited.insert(target.clone());
                    behind.insert(target.clone());
                    let snapshot = self.out_snapshot(&target);
                    stack.push((target, snapshot, 0));
                }
            }
        }
    }

    fn out_snapshot(&self, vertex: &str) -> Vec<String> {
        self.edges
            .get(vertex)
            .map(|targets| targets.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// All vertices (sources and targets) ordered by descending in-degree.
    ///
    /// In-degree counts distinct direct predecessors. The sort is stable
    /// over name-ordered vertices, so equal-degree vertices stay in
    /// lexicographic order. Low indices go to heavily referenced vertices,
    /// which keeps the encoded successor lists short.
    pub fn vertex_order(&self) -> Vec<String> {
        let mut in_degree: BTreeMap<&str, usize> = BTreeMap::new();
        for (source, targets) in &self.edges {
            in_degree.entry(source.as_str()).or_insert(0);
            for target in targets {
                *in_degree.entry(target.as_str()).or_insert(0) += 1;
            }
        }
        let mut vertices: Vec<&str> = in_degree.keys().copied().collect();
        vertices.sort_by_key(|v| std::cmp::Reverse(in_degree[v]));
        vertices.into_iter().map(str::to_string).collect()
    }

    /// Compiles the store and writes the indexed artifact.
    ///
    /// Breaks cycles, assigns the in-degree vertex order, and emits one line
    /// per vertex: its name, a space, and its successor indices as
    /// concatenated VLQ digits. The vertex index is the zero-based line
    /// number.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> GraphResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| GraphError::io(path, e))?;
        let mut writer = BufWriter::new(file);

        self.break_cycles();

        let order = self.vertex_order();
        let index: HashMap<&str, i64> = order
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i as i64))
            .collect();
        for source in &order {
            let successors: Vec<i64> = self
                .edges
                .get(source)
                .map(|targets| targets.iter().map(|t| index[t.as_str()]).collect())
                .unwrap_or_default();
            writeln!(writer, "{source} {}", vlq::encode(&successors))
                .map_err(|e| GraphError::io(path, e))?;
        }
        writer.flush().map_err(|e| GraphError::io(path, e))
    }
}
