//! Tab-number shift bookkeeping for batch closes.
//!
//! Host editors renumber tabs when one closes: every tab after it
//! slides down by one. A batch close therefore maps each item's
//! original number to its current one before issuing the command.

use std::collections::BTreeMap;

use crate::host::{TabId, TabRecord, WindowId};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    current: Option<TabId>,
    windows: Vec<WindowId>,
}

/// Maps original tab numbers to current ones across a batch of closes.
///
/// Keys are the tab numbers as they stood when the snapshot was taken;
/// values track where those tabs are now, or that they are gone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabShiftMap {
    entries: BTreeMap<TabId, Entry>,
}

impl TabShiftMap {
    /// Snapshot the current tab list.
    pub fn new(tabs: &[TabRecord]) -> Self {
        let entries = tabs
            .iter()
            .map(|record| {
                (
                    record.tab,
                    Entry {
                        current: Some(record.tab),
                        windows: record.windows.clone(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Current number of a tab by its original number, or `None` once
    /// it is closed (or was never listed).
    pub fn current(&self, tab: TabId) -> Option<TabId> {
        self.entries.get(&tab).and_then(|entry| entry.current)
    }

    /// Record that the tab originally numbered `tab` is gone: its
    /// entry empties and every current number above `tab` slides down
    /// by one.
    pub fn retire(&mut self, tab: TabId) {
        if let Some(entry) = self.entries.get_mut(&tab) {
            entry.current = None;
            entry.windows.clear();
        }
        for entry in self.entries.values_mut() {
            if let Some(current) = entry.current {
                if current > tab {
                    entry.current = Some(TabId(current.0 - 1));
                }
            }
        }
    }

    /// Drop a window from its tab's list.
    ///
    /// Returns `true` when the list just became empty — the caller
    /// should retire the tab, since an editor closes a tab along with
    /// its last window.
    pub fn remove_window(&mut self, tab: TabId, win: WindowId) -> bool {
        let Some(entry) = self.entries.get_mut(&tab) else {
            return false;
        };
        let had_windows = !entry.windows.is_empty();
        entry.windows.retain(|w| *w != win);
        had_windows && entry.windows.is_empty()
    }
}
