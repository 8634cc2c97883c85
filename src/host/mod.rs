//! Host module: the contract with the embedding editor.
//!
//! The crate never talks to an editor directly. Everything it needs —
//! layout queries, buffer names, tab/window enumeration, focus and
//! close commands — goes through the [`Host`] trait. [`ChannelHost`]
//! implements the trait over a channel pair so the editor side can
//! live on its own event-loop thread; [`FakeHost`] backs tests and
//! demos with plain collections.

mod bridge;
mod fake;
mod messages;

pub use bridge::{serve, ChannelHost, HostCall};
pub use fake::FakeHost;
pub use messages::{HostReply, HostRequest};

use std::fmt;

use thiserror::Error;

use crate::layout::LayoutNode;

/// Handle for a tab, as numbered by the host editor.
///
/// Tab numbers are positional: closing a tab renumbers every tab after
/// it. The action layer's shift map exists to track exactly that.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct TabId(pub u16);

impl TabId {
    /// Create a new tab handle.
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle for a window. Stable across tab renumbering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct WindowId(pub u32);

impl WindowId {
    /// Create a new window handle.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tab as enumerated by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabRecord {
    /// The tab's current number.
    pub tab: TabId,
    /// Windows in the tab, in layout order.
    pub windows: Vec<WindowId>,
}

/// One window as enumerated by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowRecord {
    /// The tab holding the window.
    pub tab: TabId,
    /// The window itself.
    pub win: WindowId,
}

/// Errors crossing the host boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// A query (layout, label, listing) failed on the host side.
    #[error("host query failed: {0}")]
    Query(String),
    /// A command (focus, close) was refused by the host.
    #[error("host command failed: {0}")]
    Command(String),
    /// The channel to the host side is gone.
    #[error("host disconnected")]
    Disconnected,
    /// The host answered a request with a reply of the wrong shape.
    #[error("unexpected host reply")]
    Protocol,
}

/// The contract with the embedding editor.
///
/// Queries take `&self`; commands that change editor state take
/// `&mut self`. Implementations may block inside any method — the
/// render path keeps all host calls out of its geometry code, so a
/// slow editor delays the preview but never corrupts it.
pub trait Host {
    /// Current split structure of a tab.
    fn layout_tree(&self, tab: TabId) -> Result<LayoutNode, HostError>;

    /// Raw name of the buffer shown in a window.
    ///
    /// May be empty for unnamed buffers; the preview layer substitutes
    /// its placeholder, not the host.
    fn leaf_label(&self, win: WindowId) -> Result<String, HostError>;

    /// Decorated tab name, or an empty string when the host has none.
    fn tab_name(&self, tab: TabId) -> Result<String, HostError>;

    /// Enumerate tabs in display order.
    fn list_tabs(&self) -> Result<Vec<TabRecord>, HostError>;

    /// Enumerate the windows of one tab.
    fn list_windows(&self, tab: TabId) -> Result<Vec<WindowRecord>, HostError>;

    /// Make a tab current.
    fn focus_tab(&mut self, tab: TabId) -> Result<(), HostError>;

    /// Give a window the cursor.
    fn focus_window(&mut self, win: WindowId) -> Result<(), HostError>;

    /// Close a tab. Refusal ("cannot close last tab") surfaces as
    /// [`HostError::Command`].
    fn close_tab(&mut self, tab: TabId) -> Result<(), HostError>;

    /// Close a window. Refusal surfaces as [`HostError::Command`].
    fn close_window(&mut self, win: WindowId) -> Result<(), HostError>;
}
