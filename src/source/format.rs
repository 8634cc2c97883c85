//! Item formatting: `%`-placeholder expansion for list words.

use crate::host::{TabId, WindowId};

/// Collapse every whitespace character in a format to a plain space.
///
/// Formats come from user configuration and may carry tabs or
/// newlines; a list item must stay on one line.
fn squash_whitespace(format: &str) -> String {
    format
        .chars()
        .map(|ch| if ch.is_whitespace() { ' ' } else { ch })
        .collect()
}

/// Expand a tab item format: `%n` tab number, `%T` tab name, `%w`
/// buffer names joined by single spaces.
pub fn format_tab_word(format: &str, tab: TabId, tab_name: &str, bufnames: &[String]) -> String {
    squash_whitespace(format)
        .replace("%n", &tab.to_string())
        .replace("%T", tab_name)
        .replace("%w", &bufnames.join(" "))
}

/// Expand a window item format: `%n` tab number, `%i` window id, `%w`
/// the window's buffer name.
pub fn format_window_word(format: &str, tab: TabId, win: WindowId, bufname: &str) -> String {
    squash_whitespace(format)
        .replace("%n", &tab.to_string())
        .replace("%i", &win.to_string())
        .replace("%w", bufname)
}
