//! Layout tree: the recursive split description of one tab.
//!
//! Mirrors the host editor's window layout: a window occupies a leaf,
//! `Row` splits its rectangle left to right, `Col` splits it top to
//! bottom. Trees nest to arbitrary depth and a leaf's window id is
//! unique within one tree (one tree describes one tab).

use thiserror::Error;

use crate::host::WindowId;

/// Error returned when a layout tree fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A `Row` or `Col` node has no children.
    #[error("row/col split has no children")]
    EmptySplit,
}

/// A node in a tab's window-split tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutNode {
    /// A single window.
    Leaf(WindowId),
    /// Children share the width equally, left to right.
    Row(Vec<LayoutNode>),
    /// Children share the height equally, top to bottom.
    Col(Vec<LayoutNode>),
}

impl LayoutNode {
    /// Create a leaf node.
    #[inline]
    pub const fn leaf(win: WindowId) -> Self {
        Self::Leaf(win)
    }

    /// Create a row split. Fails on an empty child list.
    pub fn row(children: Vec<Self>) -> Result<Self, TreeError> {
        if children.is_empty() {
            return Err(TreeError::EmptySplit);
        }
        Ok(Self::Row(children))
    }

    /// Create a column split. Fails on an empty child list.
    pub fn col(children: Vec<Self>) -> Result<Self, TreeError> {
        if children.is_empty() {
            return Err(TreeError::EmptySplit);
        }
        Ok(Self::Col(children))
    }

    /// Check that every split in the tree has at least one child.
    ///
    /// Rendering subdivides by child count, so empty splits are
    /// rejected here and never reached mid-render.
    pub fn validate(&self) -> Result<(), TreeError> {
        match self {
            Self::Leaf(_) => Ok(()),
            Self::Row(children) | Self::Col(children) => {
                if children.is_empty() {
                    return Err(TreeError::EmptySplit);
                }
                for child in children {
                    child.validate()?;
                }
                Ok(())
            }
        }
    }

    /// Collect leaf window ids in depth-first pre-order.
    ///
    /// This is the order rendering visits (and draws) the leaves.
    pub fn leaf_ids(&self) -> Vec<WindowId> {
        let mut ids = Vec::new();
        self.collect_leaves(&mut ids);
        ids
    }

    fn collect_leaves(&self, ids: &mut Vec<WindowId>) {
        match self {
            Self::Leaf(win) => ids.push(*win),
            Self::Row(children) | Self::Col(children) => {
                for child in children {
                    child.collect_leaves(ids);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> LayoutNode {
        LayoutNode::row(vec![
            LayoutNode::leaf(WindowId(1)),
            LayoutNode::col(vec![
                LayoutNode::leaf(WindowId(2)),
                LayoutNode::leaf(WindowId(3)),
            ])
            .unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_constructors_reject_empty_splits() {
        assert_eq!(LayoutNode::row(vec![]), Err(TreeError::EmptySplit));
        assert_eq!(LayoutNode::col(vec![]), Err(TreeError::EmptySplit));
    }

    #[test]
    fn test_validate_accepts_nested_tree() {
        assert_eq!(sample_tree().validate(), Ok(()));
        assert_eq!(LayoutNode::leaf(WindowId(9)).validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_hand_built_empty_split() {
        // The enum is open, so a malformed tree can be assembled
        // directly; validation still catches it before rendering.
        let tree = LayoutNode::Row(vec![
            LayoutNode::leaf(WindowId(1)),
            LayoutNode::Col(vec![]),
        ]);
        assert_eq!(tree.validate(), Err(TreeError::EmptySplit));
    }

    #[test]
    fn test_leaf_ids_are_preorder() {
        assert_eq!(
            sample_tree().leaf_ids(),
            vec![WindowId(1), WindowId(2), WindowId(3)]
        );
    }
}
