//! Render benchmark: Measure layout preview rendering performance.
//!
//! Target: a full-screen preview well under a millisecond, so a
//! preview can re-render on every cursor move.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use paneview::preview::LabelMap;
use paneview::{Canvas, LayoutNode, LayoutRenderer, WindowId};

fn deep_tree(depth: u32, next_id: &mut u32) -> LayoutNode {
    if depth == 0 {
        *next_id += 1;
        return LayoutNode::leaf(WindowId(*next_id));
    }
    let children = vec![
        deep_tree(depth - 1, next_id),
        deep_tree(depth - 1, next_id),
    ];
    if depth % 2 == 0 {
        LayoutNode::Row(children)
    } else {
        LayoutNode::Col(children)
    }
}

fn labels_for(tree: &LayoutNode) -> LabelMap {
    tree.leaf_ids()
        .into_iter()
        .map(|win| (win, format!("buffer-{win}")))
        .collect()
}

fn render_single_leaf(c: &mut Criterion) {
    let tree = LayoutNode::leaf(WindowId(1));
    let labels = labels_for(&tree);
    let renderer = LayoutRenderer::default();

    c.bench_function("render_single_leaf_80x24", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new(80, 24);
            renderer.render(&mut canvas, black_box(&tree), None, &labels);
            canvas.into_lines()
        });
    });
}

fn render_deep_tree(c: &mut Criterion) {
    let mut next_id = 0;
    let tree = deep_tree(5, &mut next_id);
    let labels = labels_for(&tree);
    let renderer = LayoutRenderer::default();

    c.bench_function("render_32_leaves_200x60", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new(200, 60);
            renderer.render(&mut canvas, black_box(&tree), Some(WindowId(17)), &labels);
            canvas.into_lines()
        });
    });
}

fn render_wide_row(c: &mut Criterion) {
    let tree = LayoutNode::Row((1u32..=16).map(|i| LayoutNode::leaf(WindowId(i))).collect());
    let labels = labels_for(&tree);
    let renderer = LayoutRenderer::default();

    c.bench_function("render_16_columns_160x40", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new(160, 40);
            renderer.render(&mut canvas, black_box(&tree), None, &labels);
            canvas.into_lines()
        });
    });
}

criterion_group!(benches, render_single_leaf, render_deep_tree, render_wide_row);
criterion_main!(benches);
