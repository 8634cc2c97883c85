//! Layout module: the window-split tree and its geometry primitive.
//!
//! A [`LayoutNode`] tree is queried fresh from the host for every
//! preview and discarded afterwards. [`Rect`]s are computed top-down
//! during rendering and never stored.

mod rect;
mod tree;

pub use rect::Rect;
pub use tree::{LayoutNode, TreeError};
