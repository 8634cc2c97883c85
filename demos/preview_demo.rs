//! Preview demo: render a sample tab layout, sized to the terminal.
//!
//! Run with `cargo run --example preview_demo`.

use crossterm::terminal;
use paneview::{render_layout, FakeHost, Host, LayoutNode, PreviewConfig, WindowId};

fn main() {
    let (cols, rows) = terminal::size().unwrap_or((80, 24));
    // Leave a line for the shell prompt.
    let rows = rows.saturating_sub(1);

    let mut host = FakeHost::new();
    let tab = host.push_tab(LayoutNode::Row(vec![
        LayoutNode::leaf(WindowId(1)),
        LayoutNode::Col(vec![
            LayoutNode::leaf(WindowId(2)),
            LayoutNode::leaf(WindowId(3)),
        ]),
    ]));
    host.set_label(WindowId(1), "src/main.rs");
    host.set_label(WindowId(2), "Cargo.toml");

    let tree = host.layout_tree(tab).expect("tab exists");
    let lines = render_layout(
        &host,
        cols,
        rows,
        &tree,
        Some(WindowId(2)),
        &PreviewConfig::default(),
    )
    .expect("render sample layout");

    for line in lines {
        println!("{line}");
    }
}
