//! Channel bridge: a [`Host`] implementation over crossbeam channels.
//!
//! The editor side owns a `Receiver<HostCall>` and drains it on its
//! own event-loop thread; each call carries a bounded reply channel
//! the bridge blocks on. The caller never shares state with the
//! editor, only messages.

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};

use super::messages::{HostReply, HostRequest};
use super::{Host, HostError, TabId, TabRecord, WindowId, WindowRecord};
use crate::layout::LayoutNode;

/// One in-flight request plus the channel its reply goes back on.
#[derive(Debug)]
pub struct HostCall {
    /// The request to service.
    pub request: HostRequest,
    /// Where to send exactly one reply.
    pub reply: Sender<HostReply>,
}

/// A [`Host`] whose editor lives across a channel pair.
///
/// Cloning is cheap; every clone feeds the same receiver. A dropped
/// receiver turns every method into [`HostError::Disconnected`].
#[derive(Debug, Clone)]
pub struct ChannelHost {
    calls: Sender<HostCall>,
}

impl ChannelHost {
    /// Create a bridge and the call receiver the editor side drains.
    pub fn new() -> (Self, Receiver<HostCall>) {
        let (calls, rx) = unbounded();
        (Self { calls }, rx)
    }

    fn call(&self, request: HostRequest) -> Result<HostReply, HostError> {
        let (reply, reply_rx) = bounded(1);
        self.calls
            .send(HostCall { request, reply })
            .map_err(|_| HostError::Disconnected)?;
        reply_rx.recv().map_err(|_| HostError::Disconnected)
    }

    fn call_text(&self, request: HostRequest) -> Result<String, HostError> {
        match self.call(request)? {
            HostReply::Text(text) => Ok(text),
            HostReply::Failed(err) => Err(err),
            _ => Err(HostError::Protocol),
        }
    }

    fn call_done(&self, request: HostRequest) -> Result<(), HostError> {
        match self.call(request)? {
            HostReply::Done => Ok(()),
            HostReply::Failed(err) => Err(err),
            _ => Err(HostError::Protocol),
        }
    }
}

impl Host for ChannelHost {
    fn layout_tree(&self, tab: TabId) -> Result<LayoutNode, HostError> {
        match self.call(HostRequest::LayoutTree(tab))? {
            HostReply::Tree(tree) => Ok(tree),
            HostReply::Failed(err) => Err(err),
            _ => Err(HostError::Protocol),
        }
    }

    fn leaf_label(&self, win: WindowId) -> Result<String, HostError> {
        self.call_text(HostRequest::LeafLabel(win))
    }

    fn tab_name(&self, tab: TabId) -> Result<String, HostError> {
        self.call_text(HostRequest::TabName(tab))
    }

    fn list_tabs(&self) -> Result<Vec<TabRecord>, HostError> {
        match self.call(HostRequest::ListTabs)? {
            HostReply::Tabs(tabs) => Ok(tabs),
            HostReply::Failed(err) => Err(err),
            _ => Err(HostError::Protocol),
        }
    }

    fn list_windows(&self, tab: TabId) -> Result<Vec<WindowRecord>, HostError> {
        match self.call(HostRequest::ListWindows(tab))? {
            HostReply::Windows(windows) => Ok(windows),
            HostReply::Failed(err) => Err(err),
            _ => Err(HostError::Protocol),
        }
    }

    fn focus_tab(&mut self, tab: TabId) -> Result<(), HostError> {
        self.call_done(HostRequest::FocusTab(tab))
    }

    fn focus_window(&mut self, win: WindowId) -> Result<(), HostError> {
        self.call_done(HostRequest::FocusWindow(win))
    }

    fn close_tab(&mut self, tab: TabId) -> Result<(), HostError> {
        self.call_done(HostRequest::CloseTab(tab))
    }

    fn close_window(&mut self, win: WindowId) -> Result<(), HostError> {
        self.call_done(HostRequest::CloseWindow(win))
    }
}

/// Service calls against a concrete host until the channel closes.
///
/// This is the editor side's drain loop. Real embeddings do the same
/// dispatch against their scripting API; tests run it on a thread over
/// a [`FakeHost`](super::FakeHost).
pub fn serve<H: Host>(mut host: H, calls: &Receiver<HostCall>) {
    for call in calls {
        let reply = dispatch(&mut host, call.request);
        // A gone receiver means the caller stopped waiting.
        let _ = call.reply.send(reply);
    }
}

fn dispatch<H: Host>(host: &mut H, request: HostRequest) -> HostReply {
    let outcome = match request {
        HostRequest::LayoutTree(tab) => host.layout_tree(tab).map(HostReply::Tree),
        HostRequest::LeafLabel(win) => host.leaf_label(win).map(HostReply::Text),
        HostRequest::TabName(tab) => host.tab_name(tab).map(HostReply::Text),
        HostRequest::ListTabs => host.list_tabs().map(HostReply::Tabs),
        HostRequest::ListWindows(tab) => host.list_windows(tab).map(HostReply::Windows),
        HostRequest::FocusTab(tab) => host.focus_tab(tab).map(|()| HostReply::Done),
        HostRequest::FocusWindow(win) => host.focus_window(win).map(|()| HostReply::Done),
        HostRequest::CloseTab(tab) => host.close_tab(tab).map(|()| HostReply::Done),
        HostRequest::CloseWindow(win) => host.close_window(win).map(|()| HostReply::Done),
    };
    outcome.unwrap_or_else(HostReply::Failed)
}
