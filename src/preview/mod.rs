//! Preview module: box-drawn window-layout previews.
//!
//! The pipeline, leaves first:
//! - [`BorderPalette`]: 1–8 user glyphs normalized to the eight border
//!   slots by cyclic repetition
//! - [`Canvas`]: the character grid one preview is painted onto
//! - [`draw_box`]: one bordered, titled rectangle, clipped to the grid
//! - [`LayoutRenderer`]: recursive equal subdivision of the canvas
//!   over a layout tree, leaves dispatched to the painter
//!
//! [`render_layout`] ties the pipeline to a [`Host`] for label
//! resolution; [`preview_item`] is the selection-facing entry.

mod border;
mod canvas;
mod painter;
mod render;

pub use border::{BorderError, BorderPalette};
pub use canvas::Canvas;
pub use painter::draw_box;
pub use render::{render_layout, resolve_labels, LabelMap, LayoutRenderer};

use thiserror::Error;

use crate::host::{Host, HostError};
use crate::layout::TreeError;
use crate::source::ActionData;

/// Title shown for windows whose buffer has no name.
pub const NO_NAME: &str = "[No Name]";

/// Dimensions of the preview area, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewContext {
    /// Canvas width in columns.
    pub width: u16,
    /// Canvas height in rows.
    pub height: u16,
}

/// Border configuration for previews.
///
/// Defaults to single-line boxes with the focused window double-lined.
/// Specs shorter than eight glyphs repeat cyclically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Glyph spec for unfocused windows.
    pub border: Vec<char>,
    /// Glyph spec for the focused window.
    pub focus_border: Vec<char>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            border: BorderPalette::SINGLE.glyphs().to_vec(),
            focus_border: BorderPalette::DOUBLE.glyphs().to_vec(),
        }
    }
}

/// Errors from the preview entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    /// Invalid border glyph spec.
    #[error(transparent)]
    Border(#[from] BorderError),
    /// Malformed layout tree.
    #[error(transparent)]
    Tree(#[from] TreeError),
    /// The host failed a query.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Preview the tab behind a listing item.
///
/// A tab item previews with no focused window; a window item previews
/// its tab with that window's box in the focus style.
pub fn preview_item<H: Host + ?Sized>(
    host: &H,
    ctx: PreviewContext,
    action: ActionData,
    config: &PreviewConfig,
) -> Result<Vec<String>, PreviewError> {
    let (tab, focused) = match action {
        ActionData::Tab(tab) => (tab, None),
        ActionData::Window { tab, win } => (tab, Some(win)),
    };
    let tree = host.layout_tree(tab)?;
    render_layout(host, ctx.width, ctx.height, &tree, focused, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{FakeHost, TabId, WindowId};
    use crate::layout::LayoutNode;

    fn host() -> FakeHost {
        let mut host = FakeHost::new();
        host.push_tab(LayoutNode::Row(vec![
            LayoutNode::leaf(WindowId(1)),
            LayoutNode::leaf(WindowId(2)),
        ]));
        host.set_label(WindowId(1), "a");
        host.set_label(WindowId(2), "b");
        host
    }

    #[test]
    fn test_preview_tab_item_has_no_focus() {
        let ctx = PreviewContext {
            width: 10,
            height: 4,
        };
        let lines = preview_item(
            &host(),
            ctx,
            ActionData::Tab(TabId(1)),
            &PreviewConfig::default(),
        )
        .unwrap();
        assert_eq!(lines[0], "┌───┐┌───┐");
    }

    #[test]
    fn test_preview_window_item_focuses_its_box() {
        let ctx = PreviewContext {
            width: 10,
            height: 4,
        };
        let lines = preview_item(
            &host(),
            ctx,
            ActionData::Window {
                tab: TabId(1),
                win: WindowId(1),
            },
            &PreviewConfig::default(),
        )
        .unwrap();
        assert_eq!(lines[0], "╔═══╗┌───┐");
    }

    #[test]
    fn test_preview_of_missing_tab_fails() {
        let ctx = PreviewContext {
            width: 10,
            height: 4,
        };
        let result = preview_item(
            &host(),
            ctx,
            ActionData::Tab(TabId(9)),
            &PreviewConfig::default(),
        );
        assert!(matches!(result, Err(PreviewError::Host(HostError::Query(_)))));
    }
}
