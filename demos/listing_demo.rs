//! Listing demo: gather tab and window items, act on them, re-list.
//!
//! Run with `cargo run --example listing_demo`.

use paneview::{close, open, FakeHost, LayoutNode, TabSource, WindowId, WindowSource};

fn main() {
    let mut host = FakeHost::new();
    host.push_tab(LayoutNode::Row(vec![
        LayoutNode::leaf(WindowId(10)),
        LayoutNode::leaf(WindowId(11)),
    ]));
    host.push_tab(LayoutNode::leaf(WindowId(20)));
    host.set_label(WindowId(10), "src/main.rs");
    host.set_label(WindowId(11), "src/lib.rs");
    host.set_label(WindowId(20), "notes.md");

    let tabs = TabSource::default().gather(&host).expect("list tabs");
    println!("tabs:");
    for item in &tabs {
        println!("  {}", item.word);
    }

    let windows = WindowSource::default().gather(&host).expect("list windows");
    println!("windows:");
    for item in &windows {
        println!("  {}", item.word);
    }

    let outcome = open(&mut host, &tabs[1..2]).expect("focus second tab");
    println!("focused tab: {:?}", host.focused_tab());
    for notice in &outcome.notices {
        println!("notice: {notice}");
    }

    let outcome = close(&mut host, &tabs).expect("close every tab");
    println!("after closing everything:");
    for notice in &outcome.notices {
        println!("  notice: {notice}");
    }
    for item in TabSource::default().gather(&host).expect("list tabs") {
        println!("  {}", item.word);
    }
}
