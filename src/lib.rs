//! # Paneview
//!
//! Text-mode previews of editor tab layouts, plus the listing and
//! action glue to drive a tab switcher from them.
//!
//! Paneview renders a tab's window-split tree as nested box-drawn
//! rectangles, each leaf titled with its buffer name and the focused
//! window framed in a distinct style.
//!
//! ## Core Concepts
//!
//! - **Layout tree**: leaf windows under nested row/column splits,
//!   queried fresh from the host editor per preview
//! - **Recursive subdivision**: every split shares its rectangle
//!   equally among its children; leaves become bordered boxes
//! - **Two-phase rendering**: labels resolve through the host first,
//!   then a pure walk paints the canvas
//! - **Host boundary**: all editor access goes through the [`Host`]
//!   trait; [`ChannelHost`] bridges to an editor event-loop thread
//!
//! ## Example
//!
//! ```rust
//! use paneview::{render_layout, FakeHost, Host, LayoutNode, PreviewConfig, WindowId};
//!
//! let mut host = FakeHost::new();
//! let tab = host.push_tab(LayoutNode::row(vec![
//!     LayoutNode::leaf(WindowId(1)),
//!     LayoutNode::leaf(WindowId(2)),
//! ])?);
//! host.set_label(WindowId(1), "main.rs");
//!
//! let tree = host.layout_tree(tab)?;
//! let lines = render_layout(&host, 80, 24, &tree, None, &PreviewConfig::default())?;
//! assert_eq!(lines.len(), 24);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod action;
pub mod host;
pub mod layout;
pub mod preview;
pub mod source;

// Re-exports for convenience
pub use action::{close, open, ActionFlags, ActionOutcome};
pub use host::{
    ChannelHost, FakeHost, Host, HostError, TabId, TabRecord, WindowId, WindowRecord,
};
pub use layout::{LayoutNode, Rect, TreeError};
pub use preview::{
    preview_item, render_layout, BorderPalette, Canvas, LayoutRenderer, PreviewConfig,
    PreviewContext, PreviewError,
};
pub use source::{ActionData, Item, TabSource, WindowSource};
