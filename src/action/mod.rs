//! Action module: focus and close operations over list items.
//!
//! Actions run in batches over the items the user picked. Query
//! failures abort the batch; command refusals (an editor will not
//! close its last tab or window) become notices and the batch keeps
//! going.

mod shift;

pub use shift::TabShiftMap;

use bitflags::bitflags;

use crate::host::{Host, HostError};
use crate::source::{ActionData, Item};

bitflags! {
    /// What the caller should refresh after an action.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ActionFlags: u8 {
        /// Item list contents changed; re-gather sources.
        const REFRESH_ITEMS = 1 << 0;
        /// Display needs a redraw.
        const REDRAW = 1 << 1;
    }
}

/// Result of one batch action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionOutcome {
    /// Refresh hints for the caller.
    pub flags: ActionFlags,
    /// Human-readable messages for refused commands.
    pub notices: Vec<String>,
}

/// Focus each item in turn: tabs via [`Host::focus_tab`], windows via
/// [`Host::focus_window`].
///
/// A refused focus becomes a notice; remaining items still run.
pub fn open<H: Host + ?Sized>(host: &mut H, items: &[Item]) -> Result<ActionOutcome, HostError> {
    let mut outcome = ActionOutcome::default();
    for item in items {
        let result = match item.action {
            ActionData::Tab(tab) => host.focus_tab(tab),
            ActionData::Window { win, .. } => host.focus_window(win),
        };
        if let Err(err) = result {
            note_or_bail(err, &mut outcome)?;
        }
    }
    Ok(outcome)
}

/// Close each item, correcting tab numbers as earlier closes shift
/// later tabs.
///
/// Refusals become notices and the shift bookkeeping still advances,
/// so remaining items keep closing the tabs the user pointed at.
pub fn close<H: Host + ?Sized>(host: &mut H, items: &[Item]) -> Result<ActionOutcome, HostError> {
    let mut outcome = ActionOutcome {
        flags: ActionFlags::REFRESH_ITEMS,
        notices: Vec::new(),
    };
    let mut map = TabShiftMap::new(&host.list_tabs()?);
    for item in items {
        match item.action {
            ActionData::Tab(tab) => {
                match map.current(tab) {
                    Some(current) => {
                        if let Err(err) = host.close_tab(current) {
                            note_or_bail(err, &mut outcome)?;
                        }
                    }
                    None => outcome.notices.push(format!("tab {tab} is already closed")),
                }
                map.retire(tab);
            }
            ActionData::Window { tab, win } => {
                if let Err(err) = host.close_window(win) {
                    note_or_bail(err, &mut outcome)?;
                }
                // The bookkeeping advances even when the host refused
                // the close.
                if map.remove_window(tab, win) {
                    map.retire(tab);
                }
            }
        }
    }
    Ok(outcome)
}

/// Command refusals turn into notices; anything else aborts the batch.
fn note_or_bail(err: HostError, outcome: &mut ActionOutcome) -> Result<(), HostError> {
    match err {
        HostError::Command(_) => {
            log::warn!("{err}");
            outcome.notices.push(err.to_string());
            Ok(())
        }
        other => Err(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{FakeHost, TabId, WindowId};
    use crate::layout::LayoutNode;
    use crate::source::TabSource;

    fn three_tab_host() -> FakeHost {
        let mut host = FakeHost::new();
        host.push_tab(LayoutNode::leaf(WindowId(10)));
        host.push_tab(LayoutNode::Row(vec![
            LayoutNode::leaf(WindowId(20)),
            LayoutNode::leaf(WindowId(21)),
        ]));
        host.push_tab(LayoutNode::leaf(WindowId(30)));
        host
    }

    fn tab_item(n: u16) -> Item {
        Item {
            word: format!("tab:{n}:"),
            action: ActionData::Tab(TabId(n)),
        }
    }

    fn window_item(tab: u16, win: u32) -> Item {
        Item {
            word: format!("win:{tab}:{win}:"),
            action: ActionData::Window {
                tab: TabId(tab),
                win: WindowId(win),
            },
        }
    }

    #[test]
    fn test_open_focuses_tab_and_window() {
        let mut host = three_tab_host();
        let outcome = open(&mut host, &[tab_item(2), window_item(3, 30)]).unwrap();
        assert!(outcome.notices.is_empty());
        assert_eq!(host.focused_tab(), Some(TabId(2)));
        assert_eq!(host.focused_window(), Some(WindowId(30)));
    }

    #[test]
    fn test_open_converts_refusal_to_notice() {
        let mut host = three_tab_host();
        let outcome = open(&mut host, &[tab_item(9), tab_item(1)]).unwrap();
        assert_eq!(outcome.notices.len(), 1);
        assert_eq!(host.focused_tab(), Some(TabId(1)));
    }

    #[test]
    fn test_close_batch_corrects_shifted_numbers() {
        let mut host = three_tab_host();
        // Closing tab 1 renumbers tab 3 to 2; the second item must
        // close the tab originally numbered 3, not whatever now sits
        // at 3.
        let outcome = close(&mut host, &[tab_item(1), tab_item(3)]).unwrap();
        assert!(outcome.notices.is_empty());
        assert!(outcome.flags.contains(ActionFlags::REFRESH_ITEMS));
        let remaining = TabSource::default().gather(&host).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(host.layout_tree(TabId(1)).unwrap().leaf_ids().len(), 2);
    }

    #[test]
    fn test_close_last_tab_is_a_notice_not_an_error() {
        let mut host = FakeHost::new();
        host.push_tab(LayoutNode::leaf(WindowId(1)));
        host.push_tab(LayoutNode::leaf(WindowId(2)));
        let outcome = close(&mut host, &[tab_item(1), tab_item(2)]).unwrap();
        assert_eq!(outcome.notices.len(), 1);
        assert_eq!(host.tab_count(), 1);
    }

    #[test]
    fn test_close_windows_retires_emptied_tab() {
        let mut host = three_tab_host();
        let outcome = close(
            &mut host,
            &[window_item(2, 20), window_item(2, 21), tab_item(3)],
        )
        .unwrap();
        assert!(outcome.notices.is_empty());
        // Closing both of tab 2's windows closed the tab itself, so
        // tab 3's close had to land on current number 2.
        assert_eq!(host.tab_count(), 1);
        assert_eq!(
            host.layout_tree(TabId(1)).unwrap(),
            LayoutNode::leaf(WindowId(10))
        );
    }

    #[test]
    fn test_duplicate_tab_item_is_noticed() {
        let mut host = three_tab_host();
        let outcome = close(&mut host, &[tab_item(2), tab_item(2)]).unwrap();
        assert_eq!(outcome.notices.len(), 1);
        assert_eq!(host.tab_count(), 2);
    }
}
