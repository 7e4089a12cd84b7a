//! # glyph-ids
//!
//! Parsing layer for the glyph decomposition graph: Ideographic Description
//! Sequences (IDS), the structural-operator table, and the vertex-name model
//! shared by the graph builder and the query engine.
//!
//! This crate provides:
//! - **IDS parser**: turn a prefix-ordered token sequence into a
//!   decomposition tree and extract its leaf components
//! - **Operator table**: the fixed-arity ideographic description characters
//! - **Name model**: concrete glyph names, `abst:` entity references and
//!   `=`-merged alias names
//! - **Query-token grammar**: map search-box text to vertex names
//!
//! ## IDS Usage
//!
//! ```rust
//! use glyph_ids::{parse_ids, Idc, IdsTree};
//!
//! // ⿰一丁: "left-to-right of 一 and 丁", tokens in prefix order
//! let tree = parse_ids(&["u2ff0", "u4e00", "u4e01"]).unwrap();
//!
//! match &tree {
//!     IdsTree::Node { idc, operands } => {
//!         assert_eq!(*idc, Idc::LeftToRight);
//!         assert_eq!(operands.len(), 2);
//!     }
//!     IdsTree::Leaf(_) => unreachable!(),
//! }
//!
//! // Leaf components, left to right
//! assert_eq!(tree.components("u4e02"), vec!["u4e00", "u4e01"]);
//! ```
//!
//! ## Query Tokens
//!
//! ```rust
//! use glyph_ids::parse_query;
//!
//! assert_eq!(parse_query("中"), vec!["abst:u4e2d"]);
//! assert_eq!(parse_query("u4e00-j"), vec!["u4e00-j"]);
//! ```
//!
//! ## Operator Quick Reference
//!
//! | token | meaning | arity |
//! |-------|---------|-------|
//! | `u2ff0`/`u2ff1` | left-right / above-below | 2 |
//! | `u2ff2`/`u2ff3` | three-way splits | 3 |
//! | `u2ff4`…`u2ffd` | surrounds and overlay | 2 |
//! | `u2ffe`/`u2fff`/`u303e` | reflection / rotation / variation | 1 |
//! | `u31ef` | subtraction | 2 |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod idc;
pub mod name;
mod token;
mod tree;

pub use error::{IdsError, IdsResult};
pub use idc::Idc;
pub use token::parse_query;
pub use tree::{parse_ids, IdsTree, UNREPRESENTABLE};
