//! Decomposition trees and the description-sequence parser.
//!
//! A description sequence is a prefix expression over the [`Idc`] operator
//! table: `u2ff0 u4e00 u4e01` reads "left-to-right of 一 and 丁". Parsing
//! scans the tokens from the end toward the beginning, pushing formed nodes
//! on a stack and folding exactly `arity` of them whenever an operator is
//! reached.
//!
//! # Example
//!
//! ```rust
//! use glyph_ids::parse_ids;
//!
//! let tree = parse_ids(&["u2ff1", "u2ff0", "u4e00", "u4e01", "u4e02"]).unwrap();
//! assert_eq!(
//!     tree.components("u4e09"),
//!     vec!["u4e00".to_string(), "u4e01".to_string(), "u4e02".to_string()],
//! );
//! ```

use crate::error::{IdsError, IdsResult};
use crate::idc::Idc;

/// Sentinel component emitted in place of a subtraction subtree.
///
/// "A minus B" contains neither A nor B as a structural part, so the whole
/// subtree collapses to this single vertex name during component extraction.
pub const UNREPRESENTABLE: &str = "unrepresentable";

/// A parsed decomposition tree.
///
/// Either a leaf component or an operator node whose operand count always
/// equals the operator's arity (enforced at parse time).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IdsTree {
    /// A leaf component token.
    Leaf(String),
    /// An operator applied to exactly `idc.arity()` operands, left to right.
    Node {
        /// The structural operator.
        idc: Idc,
        /// Operands in left-to-right order.
        operands: Vec<IdsTree>,
    },
}

/// Parses a description sequence into a decomposition tree.
///
/// Tokens are scanned from the end toward the beginning; leaves are pushed
/// onto a working stack and each operator folds the topmost `arity` nodes
/// back into a single node. The sequence must reduce to exactly one root.
///
/// # Errors
///
/// [`IdsError::MissingOperands`] if an operator finds too few formed nodes,
/// [`IdsError::LeftoverOperands`] if more than one root remains, and
/// [`IdsError::EmptyDescription`] for an empty sequence.
pub fn parse_ids<S: AsRef<str>>(tokens: &[S]) -> IdsResult<IdsTree> {
    let mut stack: Vec<IdsTree> = Vec::new();
    for token in tokens.iter().rev() {
        let token = token.as_ref();
        let Some(idc) = Idc::from_token(token) else {
            stack.push(IdsTree::Leaf(token.to_string()));
            continue;
        };
        let arity = idc.arity();
        if stack.len() < arity {
            return Err(IdsError::MissingOperands {
                idc,
                expected: arity,
                available: stack.len(),
            });
        }
        // The topmost node is the leftmost operand of this operator.
        let mut operands = stack.split_off(stack.len() - arity);
        operands.reverse();
        stack.push(IdsTree::Node { idc, operands });
    }
    if stack.len() > 1 {
        return Err(IdsError::LeftoverOperands { roots: stack.len() });
    }
    stack.pop().ok_or(IdsError::EmptyDescription)
}

impl IdsTree {
    /// Extracts the leaf components of this decomposition, left to right.
    ///
    /// Placeholder leaves (circled numerals and the fullwidth question mark)
    /// are dropped, subtraction subtrees collapse to [`UNREPRESENTABLE`], and
    /// a decomposition that is just `composite` itself yields nothing: a
    /// self-reference carries no structural information.
    pub fn components(&self, composite: &str) -> Vec<String> {
        if let IdsTree::Leaf(name) = self {
            if name == composite {
                return Vec::new();
            }
        }
        let mut out = Vec::new();
        self.collect_components(&mut out);
        out
    }

    fn collect_components(&self, out: &mut Vec<String>) {
        match self {
            IdsTree::Leaf(name) => {
                if !is_placeholder(name) {
                    out.push(name.clone());
                }
            }
            IdsTree::Node {
                idc: Idc::Subtraction,
                ..
            } => out.push(UNREPRESENTABLE.to_string()),
            IdsTree::Node { operands, .. } => {
                for operand in operands {
                    operand.collect_components(out);
                }
            }
        }
    }

    /// True if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, IdsTree::Leaf(_))
    }
}

/// Placeholder components that carry no structural content: the circled
/// numerals U+2460–U+2473 used for unencodable pieces, and the fullwidth
/// question mark U+FF1F wildcard.
fn is_placeholder(token: &str) -> bool {
    let Some(cp) = token
        .strip_prefix('u')
        .and_then(|hex| u32::from_str_radix(hex, 16).ok())
    else {
        return false;
    };
    (0x2460..=0x2473).contains(&cp) || cp == 0xff1f
}
