//! In-memory host: a scripted editor for tests and demos.

use std::cell::Cell;
use std::collections::HashMap;

use super::{Host, HostError, TabId, TabRecord, WindowId, WindowRecord};
use crate::layout::LayoutNode;

/// A [`Host`] backed by plain collections.
///
/// Tabs number from 1 in insertion order and renumber when one closes,
/// the way real editors do. The last remaining tab, and the last
/// window of the last tab, refuse to close with
/// [`HostError::Command`]. Label lookups are counted so tests can
/// assert how many the render path made.
#[derive(Debug, Default)]
pub struct FakeHost {
    /// Position in this vec + 1 is the tab's current number.
    tabs: Vec<LayoutNode>,
    labels: HashMap<WindowId, String>,
    names: HashMap<TabId, String>,
    focused_tab: Option<TabId>,
    focused_window: Option<WindowId>,
    label_lookups: Cell<usize>,
}

impl FakeHost {
    /// Create an empty host with no tabs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tab with the given layout and return its number.
    pub fn push_tab(&mut self, tree: LayoutNode) -> TabId {
        self.tabs.push(tree);
        TabId(u16::try_from(self.tabs.len()).unwrap_or(u16::MAX))
    }

    /// Name the buffer shown in a window.
    pub fn set_label(&mut self, win: WindowId, label: impl Into<String>) {
        self.labels.insert(win, label.into());
    }

    /// Give a tab a decorated name, keyed by its current number.
    pub fn set_tab_name(&mut self, tab: TabId, name: impl Into<String>) {
        self.names.insert(tab, name.into());
    }

    /// The tab last focused through [`Host::focus_tab`].
    pub fn focused_tab(&self) -> Option<TabId> {
        self.focused_tab
    }

    /// The window last focused through [`Host::focus_window`].
    pub fn focused_window(&self) -> Option<WindowId> {
        self.focused_window
    }

    /// How many [`Host::leaf_label`] calls this host has answered.
    pub fn label_lookups(&self) -> usize {
        self.label_lookups.get()
    }

    /// Number of tabs currently open.
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn index(&self, tab: TabId) -> Option<usize> {
        usize::from(tab.0)
            .checked_sub(1)
            .filter(|&i| i < self.tabs.len())
    }

    fn tree(&self, tab: TabId) -> Result<&LayoutNode, HostError> {
        self.index(tab)
            .map(|i| &self.tabs[i])
            .ok_or_else(|| HostError::Query(format!("no tab {tab}")))
    }
}

/// Remove one leaf, collapsing splits left with a single child.
fn prune(node: &LayoutNode, win: WindowId) -> Option<LayoutNode> {
    match node {
        LayoutNode::Leaf(w) => (*w != win).then_some(LayoutNode::Leaf(*w)),
        LayoutNode::Row(children) => rebuild(children, win, LayoutNode::Row),
        LayoutNode::Col(children) => rebuild(children, win, LayoutNode::Col),
    }
}

fn rebuild(
    children: &[LayoutNode],
    win: WindowId,
    split: fn(Vec<LayoutNode>) -> LayoutNode,
) -> Option<LayoutNode> {
    let mut kept: Vec<LayoutNode> = children.iter().filter_map(|c| prune(c, win)).collect();
    if kept.len() == 1 {
        return kept.pop();
    }
    if kept.is_empty() {
        return None;
    }
    Some(split(kept))
}

impl Host for FakeHost {
    fn layout_tree(&self, tab: TabId) -> Result<LayoutNode, HostError> {
        self.tree(tab).cloned()
    }

    fn leaf_label(&self, win: WindowId) -> Result<String, HostError> {
        self.label_lookups.set(self.label_lookups.get() + 1);
        Ok(self.labels.get(&win).cloned().unwrap_or_default())
    }

    fn tab_name(&self, tab: TabId) -> Result<String, HostError> {
        Ok(self.names.get(&tab).cloned().unwrap_or_default())
    }

    fn list_tabs(&self) -> Result<Vec<TabRecord>, HostError> {
        Ok(self
            .tabs
            .iter()
            .enumerate()
            .map(|(i, tree)| TabRecord {
                tab: TabId(u16::try_from(i + 1).unwrap_or(u16::MAX)),
                windows: tree.leaf_ids(),
            })
            .collect())
    }

    fn list_windows(&self, tab: TabId) -> Result<Vec<WindowRecord>, HostError> {
        let tree = self.tree(tab)?;
        Ok(tree
            .leaf_ids()
            .into_iter()
            .map(|win| WindowRecord { tab, win })
            .collect())
    }

    fn focus_tab(&mut self, tab: TabId) -> Result<(), HostError> {
        if self.index(tab).is_none() {
            return Err(HostError::Command(format!("no tab {tab}")));
        }
        self.focused_tab = Some(tab);
        Ok(())
    }

    fn focus_window(&mut self, win: WindowId) -> Result<(), HostError> {
        if !self.tabs.iter().any(|t| t.leaf_ids().contains(&win)) {
            return Err(HostError::Command(format!("no window {win}")));
        }
        self.focused_window = Some(win);
        Ok(())
    }

    fn close_tab(&mut self, tab: TabId) -> Result<(), HostError> {
        let Some(index) = self.index(tab) else {
            return Err(HostError::Command(format!("no tab {tab}")));
        };
        if self.tabs.len() == 1 {
            return Err(HostError::Command("cannot close last tab page".into()));
        }
        self.tabs.remove(index);
        Ok(())
    }

    fn close_window(&mut self, win: WindowId) -> Result<(), HostError> {
        let Some(index) = self
            .tabs
            .iter()
            .position(|t| t.leaf_ids().contains(&win))
        else {
            return Err(HostError::Command(format!("no window {win}")));
        };
        match prune(&self.tabs[index], win) {
            Some(tree) => {
                self.tabs[index] = tree;
                Ok(())
            }
            None if self.tabs.len() == 1 => {
                Err(HostError::Command("cannot close last window".into()))
            }
            None => {
                self.tabs.remove(index);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tab_host() -> FakeHost {
        let mut host = FakeHost::new();
        host.push_tab(LayoutNode::Row(vec![
            LayoutNode::leaf(WindowId(10)),
            LayoutNode::leaf(WindowId(11)),
        ]));
        host.push_tab(LayoutNode::leaf(WindowId(20)));
        host
    }

    #[test]
    fn test_tabs_renumber_after_close() {
        let mut host = two_tab_host();
        host.close_tab(TabId(1)).unwrap();
        let tabs = host.list_tabs().unwrap();
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].tab, TabId(1));
        assert_eq!(tabs[0].windows, vec![WindowId(20)]);
    }

    #[test]
    fn test_last_tab_refuses_to_close() {
        let mut host = two_tab_host();
        host.close_tab(TabId(2)).unwrap();
        assert!(matches!(
            host.close_tab(TabId(1)),
            Err(HostError::Command(_))
        ));
        assert_eq!(host.tab_count(), 1);
    }

    #[test]
    fn test_close_window_collapses_split() {
        let mut host = two_tab_host();
        host.close_window(WindowId(11)).unwrap();
        assert_eq!(
            host.layout_tree(TabId(1)).unwrap(),
            LayoutNode::leaf(WindowId(10))
        );
    }

    #[test]
    fn test_closing_only_window_closes_tab() {
        let mut host = two_tab_host();
        host.close_window(WindowId(20)).unwrap();
        assert_eq!(host.tab_count(), 1);
    }

    #[test]
    fn test_last_window_of_last_tab_refuses() {
        let mut host = FakeHost::new();
        host.push_tab(LayoutNode::leaf(WindowId(1)));
        assert!(matches!(
            host.close_window(WindowId(1)),
            Err(HostError::Command(_))
        ));
    }

    #[test]
    fn test_label_lookup_counter() {
        let mut host = FakeHost::new();
        host.push_tab(LayoutNode::leaf(WindowId(1)));
        host.set_label(WindowId(1), "main.rs");
        assert_eq!(host.label_lookups(), 0);
        assert_eq!(host.leaf_label(WindowId(1)).unwrap(), "main.rs");
        assert_eq!(host.leaf_label(WindowId(2)).unwrap(), "");
        assert_eq!(host.label_lookups(), 2);
    }
}
