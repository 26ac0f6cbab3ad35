//! Caret handling for the formula editor.
//!
//! Re-rendering replaces every node on the editable surface, so a caret
//! expressed as `(node, offset)` does not survive it. The editor captures the
//! caret as flat character offsets before rendering and restores it into the
//! new tree afterwards.
//!
//! - [`CaretSelection`]: flat offsets into the formula text
//! - [`BoundaryPoint`] / [`NodeSelection`]: node-relative positions
//! - [`capture`] / [`restore`]: conversions between the two
//!
//! # Example
//!
//! ```ignore
//! use formula_input::editable::{capture, restore, CaretSelection};
//! use formula_input::syntax::{highlight, Vocabulary};
//!
//! let tree = highlight("x*2", &Vocabulary::parse("x"));
//! let selection = restore(tree.nodes(), CaretSelection::collapsed(2));
//! assert_eq!(capture(tree.nodes(), &selection), CaretSelection::collapsed(2));
//! ```

mod caret;
mod mapper;
mod selection;

pub use caret::CaretSelection;
pub use mapper::{capture, flat_offset, locate, restore};
pub use selection::{BoundaryPoint, NodeSelection};
