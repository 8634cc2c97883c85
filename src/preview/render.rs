//! Layout renderer: recursive subdivision of the canvas into boxes.
//!
//! Rendering is two-phase. Labels resolve through the host first, in
//! the same depth-first pre-order the drawing walk uses; the walk
//! itself is then purely geometric. That keeps every host suspension
//! out of the drawing code.

use std::collections::HashMap;

use super::border::{BorderError, BorderPalette};
use super::canvas::Canvas;
use super::painter::draw_box;
use super::{PreviewConfig, PreviewError, NO_NAME};
use crate::host::{Host, HostError, WindowId};
use crate::layout::{LayoutNode, Rect};

/// Resolved labels for the leaves of one tree, keyed by window id.
pub type LabelMap = HashMap<WindowId, String>;

/// Paints a layout tree as nested boxes: one palette for ordinary
/// windows, one for the focused window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRenderer {
    normal: BorderPalette,
    focus: BorderPalette,
}

impl Default for LayoutRenderer {
    fn default() -> Self {
        Self::new(BorderPalette::SINGLE, BorderPalette::DOUBLE)
    }
}

impl LayoutRenderer {
    /// Renderer over two ready-made palettes.
    pub const fn new(normal: BorderPalette, focus: BorderPalette) -> Self {
        Self { normal, focus }
    }

    /// Renderer over raw glyph specs, cyclically expanded to eight
    /// slots each.
    pub fn from_specs(border: &[char], focus_border: &[char]) -> Result<Self, BorderError> {
        Ok(Self::new(
            BorderPalette::normalize(border)?,
            BorderPalette::normalize(focus_border)?,
        ))
    }

    /// Draw `tree` over the whole canvas.
    ///
    /// Purely geometric: labels must already be resolved (see
    /// [`resolve_labels`]). Leaves missing from `labels`, or whose
    /// label is empty, are titled `[No Name]`. The leaf matching
    /// `focused` gets the focus palette. A zero-row canvas is left
    /// untouched.
    pub fn render(
        &self,
        canvas: &mut Canvas,
        tree: &LayoutNode,
        focused: Option<WindowId>,
        labels: &LabelMap,
    ) {
        if canvas.height() == 0 {
            return;
        }
        let full = Rect::from_size(canvas.width(), canvas.height());
        self.render_node(canvas, tree, full, focused, labels);
    }

    fn render_node(
        &self,
        canvas: &mut Canvas,
        node: &LayoutNode,
        rect: Rect,
        focused: Option<WindowId>,
        labels: &LabelMap,
    ) {
        match node {
            LayoutNode::Leaf(win) => {
                let title = labels
                    .get(win)
                    .map(String::as_str)
                    .filter(|label| !label.is_empty())
                    .unwrap_or(NO_NAME);
                let palette = if focused == Some(*win) {
                    &self.focus
                } else {
                    &self.normal
                };
                draw_box(canvas, rect.x, rect.y, rect.width, rect.height, title, palette);
            }
            LayoutNode::Col(children) => {
                // Equal slices; the integer-division remainder goes
                // unused rather than widening the last child.
                let count = u16::try_from(children.len()).unwrap_or(u16::MAX).max(1);
                let child_height = rect.height / count;
                for (k, child) in children.iter().enumerate() {
                    let k = u16::try_from(k).unwrap_or(u16::MAX);
                    let child_rect = Rect::new(
                        rect.x,
                        rect.y.saturating_add(child_height.saturating_mul(k)),
                        rect.width,
                        child_height,
                    );
                    self.render_node(canvas, child, child_rect, focused, labels);
                }
            }
            LayoutNode::Row(children) => {
                let count = u16::try_from(children.len()).unwrap_or(u16::MAX).max(1);
                let child_width = rect.width / count;
                for (k, child) in children.iter().enumerate() {
                    let k = u16::try_from(k).unwrap_or(u16::MAX);
                    let child_rect = Rect::new(
                        rect.x.saturating_add(child_width.saturating_mul(k)),
                        rect.y,
                        child_width,
                        rect.height,
                    );
                    self.render_node(canvas, child, child_rect, focused, labels);
                }
            }
        }
    }
}

/// Resolve every leaf's label through the host, in draw order.
///
/// Lookups run sequentially in depth-first pre-order, the order the
/// drawing walk visits leaves. A failed query aborts the whole
/// resolution; no canvas exists yet to corrupt.
pub fn resolve_labels<H: Host + ?Sized>(
    host: &H,
    tree: &LayoutNode,
) -> Result<LabelMap, HostError> {
    let mut labels = LabelMap::new();
    for win in tree.leaf_ids() {
        let label = host.leaf_label(win)?;
        labels.insert(win, label);
    }
    Ok(labels)
}

/// Render a layout tree through a host: the entry point behind one
/// preview request.
///
/// Returns one `String` per canvas row, each exactly `width` chars.
/// A zero-row canvas yields an empty vec without a single label
/// lookup.
pub fn render_layout<H: Host + ?Sized>(
    host: &H,
    width: u16,
    height: u16,
    tree: &LayoutNode,
    focused: Option<WindowId>,
    config: &PreviewConfig,
) -> Result<Vec<String>, PreviewError> {
    if height == 0 {
        return Ok(Vec::new());
    }
    tree.validate()?;
    let renderer = LayoutRenderer::from_specs(&config.border, &config.focus_border)?;
    let labels = resolve_labels(host, tree)?;
    log::trace!("rendering {width}x{height} preview, {} leaves", labels.len());
    let mut canvas = Canvas::new(width, height);
    renderer.render(&mut canvas, tree, focused, &labels);
    Ok(canvas.into_lines())
}
