//! Source module: tabs and windows as selectable list items.
//!
//! A source gathers host state into flat [`Item`]s: a display word
//! built from a `%`-placeholder format, plus the [`ActionData`] the
//! action layer needs to focus or close the thing later.

mod format;

pub use format::{format_tab_word, format_window_word};

use crate::host::{Host, HostError, TabId, WindowId};

/// What selecting an item acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionData {
    /// A whole tab.
    Tab(TabId),
    /// One window, remembering the tab that holds it.
    Window {
        /// The holding tab.
        tab: TabId,
        /// The window itself.
        win: WindowId,
    },
}

/// One selectable list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Display text.
    pub word: String,
    /// What the item acts on.
    pub action: ActionData,
}

/// Lists tabs, one item per tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSource {
    /// Word format. `%n` tab number, `%T` tab name, `%w` buffer names.
    pub format: String,
}

impl Default for TabSource {
    fn default() -> Self {
        Self {
            format: "tab:%n:%w".into(),
        }
    }
}

impl TabSource {
    /// Gather one item per tab.
    ///
    /// Buffer names for `%w` come from walking the tab's layout in
    /// draw order, so the word lists windows the way the preview shows
    /// them. A failed tab-name lookup degrades to an empty `%T`
    /// rather than failing the listing.
    pub fn gather<H: Host + ?Sized>(&self, host: &H) -> Result<Vec<Item>, HostError> {
        let mut items = Vec::new();
        for record in host.list_tabs()? {
            let tab_name = host.tab_name(record.tab).unwrap_or_else(|err| {
                log::debug!("tab name lookup failed for tab {}: {err}", record.tab);
                String::new()
            });
            let tree = host.layout_tree(record.tab)?;
            let mut bufnames = Vec::new();
            for win in tree.leaf_ids() {
                bufnames.push(host.leaf_label(win)?);
            }
            items.push(Item {
                word: format_tab_word(&self.format, record.tab, &tab_name, &bufnames),
                action: ActionData::Tab(record.tab),
            });
        }
        log::debug!("gathered {} tab items", items.len());
        Ok(items)
    }
}

/// Lists windows across all tabs, one item per window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSource {
    /// Word format. `%n` tab number, `%i` window id, `%w` buffer name.
    pub format: String,
}

impl Default for WindowSource {
    fn default() -> Self {
        Self {
            format: "win:%n:%i:%w".into(),
        }
    }
}

impl WindowSource {
    /// Gather one item per window, tabs in display order.
    pub fn gather<H: Host + ?Sized>(&self, host: &H) -> Result<Vec<Item>, HostError> {
        let mut items = Vec::new();
        for tab in host.list_tabs()? {
            for record in host.list_windows(tab.tab)? {
                let bufname = host.leaf_label(record.win)?;
                items.push(Item {
                    word: format_window_word(&self.format, record.tab, record.win, &bufname),
                    action: ActionData::Window {
                        tab: record.tab,
                        win: record.win,
                    },
                });
            }
        }
        log::debug!("gathered {} window items", items.len());
        Ok(items)
    }
}
