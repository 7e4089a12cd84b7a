//! # glyph-graph
//!
//! Build-time layer of the glyph decomposition graph: accumulate
//! `component → composite` edges from the source extractors, merge alias
//! names, break cycles, and serialize the compact indexed artifact served by
//! `glyph-graph-query`.
//!
//! The whole compilation is a single-threaded batch job: read the dumps,
//! transform in memory, write the artifact. There is no incremental update;
//! the graph is rebuilt wholesale from source data on every run.
//!
//! ## Quick Start
//!
//! ```rust
//! use glyph_graph::{AliasUnion, GraphStore};
//!
//! let mut aliases = AliasUnion::new();
//! aliases.union("abst:u2e95", "abst:cdp-8b68");
//!
//! let mut store = GraphStore::new();
//! // 三 is built from 一 (twice over, deduplicated).
//! store.add_edge("abst:u4e00", "abst:u4e09");
//! store.add_edge("abst:u4e00", "abst:u4e09");
//! assert_eq!(store.edge_count(), 1);
//! ```
//!
//! Compiling a dump file end to end:
//!
//! ```ignore
//! use glyph_graph::compile_dump;
//!
//! compile_dump("edges.txt", Some("aliases.txt"), "graph.txt")?;
//! ```
//!
//! ## Failure model
//!
//! Malformed source lines are skipped with a `tracing` warning and the run
//! continues; cycles are resolved by deleting back edges (also warned);
//! only artifact I/O errors are fatal.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod alias;
mod build;
mod error;
mod store;
pub mod vlq;

pub use alias::AliasUnion;
pub use build::compile_dump;
pub use error::{GraphError, GraphResult};
pub use store::GraphStore;
