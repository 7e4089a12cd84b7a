//! The compiled decomposition graph and its query operations.
//!
//! A `CompiledGraph` is loaded once from the artifact written by the
//! builder and is immutable afterwards: every query method takes `&self`,
//! so any number of lookups may run concurrently without locking.
//!
//! Edges read "is used inside": following successors from a component
//! reaches every composite built on top of it.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fs;
use std::path::Path;

use glyph_graph::vlq;
use glyph_ids::name::split_aliases;

use crate::error::{LoadError, LoadResult};

/// An immutable, index-addressed decomposition graph.
///
/// Vertex index = zero-based line number in the artifact. A vertex name may
/// be a merged `=`-joined alias list; every member resolves to the same
/// index.
#[derive(Debug)]
pub struct CompiledGraph {
    /// Full (possibly merged) vertex names, in artifact order.
    names: Vec<String>,
    /// Successor indices per vertex.
    edges: Vec<Vec<usize>>,
    /// Every alias member of every vertex, mapped to its index.
    index: HashMap<String, usize>,
}

impl CompiledGraph {
    /// Loads a compiled artifact from disk.
    ///
    /// The artifact is machine-written, so any malformed line, undecodable
    /// successor list or out-of-range index is fatal: either the whole
    /// graph loads or none of it does.
    pub fn load<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        Self::parse(&text)
    }

    /// Parses artifact text into a graph.
    pub fn parse(text: &str) -> LoadResult<Self> {
        let mut names = Vec::new();
        let mut raw_edges = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let Some((name, encoded)) = line.split_once(' ') else {
                return Err(LoadError::MalformedLine { line: line_no + 1 });
            };
            let successors = vlq::decode(encoded).map_err(|source| LoadError::InvalidEncoding {
                line: line_no + 1,
                source,
            })?;
            names.push(name.to_string());
            raw_edges.push(successors);
        }

        // Successor lists may reference vertices on later lines, so range
        // checking has to wait until the whole artifact is read.
        let vertices = names.len();
        let mut edges = Vec::with_capacity(vertices);
        for (line_no, successors) in raw_edges.into_iter().enumerate() {
            let mut checked = Vec::with_capacity(successors.len());
            for value in successors {
                if value < 0 || value as usize >= vertices {
                    return Err(LoadError::IndexOutOfRange {
                        line: line_no + 1,
                        index: value,
                        vertices,
                    });
                }
                checked.push(value as usize);
            }
            edges.push(checked);
        }

        let mut index = HashMap::new();
        for (i, name) in names.iter().enumerate() {
            for alias in name.split('=') {
                index.insert(alias.to_string(), i);
            }
        }

        Ok(Self {
            names,
            edges,
            index,
        })
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolves a name (any alias member or a full merged name) to its
    /// vertex index.
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// The full (possibly merged) name of a vertex.
    pub fn name(&self, vertex: usize) -> &str {
        &self.names[vertex]
    }

    /// The alias members of a vertex's name.
    pub fn aliases(&self, vertex: usize) -> Vec<String> {
        split_aliases(&self.names[vertex])
    }

    /// Successor indices of a vertex.
    pub fn successors(&self, vertex: usize) -> &[usize] {
        &self.edges[vertex]
    }

    /// Immediate successors of `name` as full vertex names, or empty if the
    /// name is unknown.
    pub fn children(&self, name: &str) -> Vec<&str> {
        match self.resolve(name) {
            Some(vertex) => self.edges[vertex]
                .iter()
                .map(|&succ| self.names[succ].as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    /// The minimal vertices reachable from *every* query vertex: the
    /// characters that most tightly combine all the queried components.
    ///
    /// Returns an empty result for an empty query or one naming an unknown
    /// vertex. Otherwise each query vertex grows a reachable set via a
    /// round-robin breadth-first expansion (one step per source in
    /// rotation, and a vertex every source has already visited is not
    /// expanded further); the sets are intersected and any member that is a
    /// direct successor of another member is pruned away.
    ///
    /// Result indices are in ascending order.
    pub fn highest_common_descendants<S: AsRef<str>>(&self, query: &[S]) -> Vec<usize> {
        if query.is_empty() {
            return Vec::new();
        }
        let mut sources = Vec::with_capacity(query.len());
        for name in query {
            match self.resolve(name.as_ref()) {
                Some(vertex) => sources.push(vertex),
                None => return Vec::new(),
            }
        }

        let mut visited: Vec<HashSet<usize>> = sources
            .iter()
            .map(|&vertex| HashSet::from([vertex]))
            .collect();
        let mut queues: Vec<VecDeque<usize>> = sources
            .iter()
            .map(|&vertex| VecDeque::from([vertex]))
            .collect();

        let mut pending: usize = sources.len();
        let mut turn = 0usize;
        while pending > 0 {
            let current = turn % queues.len();
            turn += 1;
            let Some(vertex) = queues[current].pop_front() else {
                continue;
            };
            pending -= 1;
            if visited.iter().all(|set| set.contains(&vertex)) {
                continue;
            }
            for &succ in &self.edges[vertex] {
                if visited[current].insert(succ) {
                    queues[current].push_back(succ);
                    pending += 1;
                }
            }
        }

        // Intersect, scanning the smallest set.
        let smallest = visited
            .iter()
            .min_by_key(|set| set.len())
            .expect("at least one query vertex");
        let common: Vec<usize> = smallest
            .iter()
            .copied()
            .filter(|vertex| visited.iter().all(|set| set.contains(vertex)))
            .collect();

        // Keep only members that are not one hop downstream of another.
        let mut result: HashSet<usize> = common.iter().copied().collect();
        for &vertex in &common {
            for succ in &self.edges[vertex] {
                result.remove(succ);
            }
        }

        let mut result: Vec<usize> = result.into_iter().collect();
        result.sort_unstable();
        result
    }
}
