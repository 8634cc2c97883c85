//! Message types for the host bridge.
//!
//! These enums define the request/reply protocol between the crate and
//! the editor side of a [`ChannelHost`](super::ChannelHost) pair. One
//! request gets exactly one reply.

use super::{HostError, TabId, TabRecord, WindowId, WindowRecord};
use crate::layout::LayoutNode;

/// Requests sent to the editor side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequest {
    /// Split structure of a tab.
    LayoutTree(TabId),
    /// Buffer name of a window.
    LeafLabel(WindowId),
    /// Decorated tab name.
    TabName(TabId),
    /// Enumerate tabs.
    ListTabs,
    /// Enumerate the windows of one tab.
    ListWindows(TabId),
    /// Make a tab current.
    FocusTab(TabId),
    /// Give a window the cursor.
    FocusWindow(WindowId),
    /// Close a tab.
    CloseTab(TabId),
    /// Close a window.
    CloseWindow(WindowId),
}

/// Replies from the editor side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostReply {
    /// Answer to [`HostRequest::LayoutTree`].
    Tree(LayoutNode),
    /// Answer to [`HostRequest::LeafLabel`] and [`HostRequest::TabName`].
    Text(String),
    /// Answer to [`HostRequest::ListTabs`].
    Tabs(Vec<TabRecord>),
    /// Answer to [`HostRequest::ListWindows`].
    Windows(Vec<WindowRecord>),
    /// A command was carried out.
    Done,
    /// The request failed on the host side.
    Failed(HostError),
}
