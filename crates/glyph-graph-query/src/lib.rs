//! # glyph-graph-query
//!
//! Serve-time layer of the glyph decomposition graph: load the compiled
//! artifact once, then answer "which characters are built from all of these
//! components" searches and single-step expansions.
//!
//! ## Key Properties
//!
//! - **Immutable after load**: every query takes `&self`; share one
//!   [`CompiledGraph`] across threads without locking
//! - **Queries never fail**: empty and unknown-name queries return empty
//!   results; only artifact loading can error, and it fails fast
//! - **Alias-aware**: every member of a merged `a=b=c` vertex name
//!   resolves to the same vertex
//!
//! ## Quick Start
//!
//! ```rust
//! use glyph_graph_query::{CompiledGraph, QueryService};
//!
//! // One line per vertex: name, space, VLQ-encoded successor indices.
//! let graph = CompiledGraph::parse("u4e02 C\nu4e03 \nu4e00 A\nu4e01 A\n").unwrap();
//! let service = QueryService::new(&graph);
//!
//! // Which characters use both u4e00 and u4e01?
//! let results = service.query(&["u4e00", "u4e01"]);
//! assert_eq!(results[0].names, vec!["u4e02"]);
//!
//! // Expand a result one step.
//! let expanded = service.children(&["u4e02"]);
//! assert_eq!(expanded[0].children, vec![vec!["u4e03".to_string()]]);
//! ```
//!
//! Loading from the artifact written by `glyph-graph`:
//!
//! ```ignore
//! let graph = CompiledGraph::load("graph.txt")?;
//! ```
//!
//! A caller juggling overlapping searches (a user typing quickly) is
//! responsible for dropping responses to queries it no longer cares about;
//! the engine itself has no cancellation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod graph;
mod service;

pub use error::{LoadError, LoadResult};
pub use graph::CompiledGraph;
pub use service::{display_order, Desc, QueryService};
