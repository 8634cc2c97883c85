//! Box painter: one bordered rectangle with a centered title.
//!
//! Bottom edges clip at `rows - 1`, so the last canvas row is never
//! painted, and degenerate or off-canvas rectangles are silent no-ops
//! rather than errors. A preview squeezed too small shows less; it
//! does not fail.

use std::iter;

use super::border::BorderPalette;
use super::canvas::Canvas;

/// Draw one bordered box onto the canvas, `title` centered on the
/// middle interior row.
///
/// Writes touch exactly the `[x, x + width)` span of each painted row;
/// neighboring cells keep their contents, which is what lets sibling
/// boxes compose onto one canvas. Calls with `x`/`y` off the canvas or
/// `width`/`height` below 2 draw nothing. Overlap is allowed: later
/// boxes overwrite earlier ones in their span.
pub fn draw_box(
    canvas: &mut Canvas,
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    title: &str,
    palette: &BorderPalette,
) {
    if y >= canvas.height() || x >= canvas.width() {
        return;
    }
    if width < 2 || height < 2 {
        return;
    }

    // Bottom edges stop one row short of the canvas.
    let limit = u16::min(y.saturating_add(height), canvas.height() - 1);
    let title_row = (usize::from(y) + usize::from(limit)) / 2;
    let inner = usize::from(width - 2);

    for row in y..limit {
        if row == y {
            put_span(
                canvas,
                x,
                row,
                edge(palette.top_left(), palette.top(), palette.top_right(), inner),
            );
        } else if row == limit - 1 {
            put_span(
                canvas,
                x,
                row,
                edge(
                    palette.bottom_left(),
                    palette.bottom(),
                    palette.bottom_right(),
                    inner,
                ),
            );
        } else if usize::from(row) == title_row {
            let cells = title_cells(title, inner);
            put_span(
                canvas,
                x,
                row,
                iter::once(palette.left())
                    .chain(cells)
                    .chain(iter::once(palette.right())),
            );
        } else {
            put_span(
                canvas,
                x,
                row,
                edge(palette.left(), ' ', palette.right(), inner),
            );
        }
    }
}

/// Left glyph, `inner` copies of the fill, right glyph.
fn edge(left: char, fill: char, right: char, inner: usize) -> impl Iterator<Item = char> {
    iter::once(left)
        .chain(iter::repeat(fill).take(inner))
        .chain(iter::once(right))
}

/// Exactly `inner` cells of title text: over-long titles keep their
/// trailing chars, shorter ones center with the extra space split
/// leading-first.
fn title_cells(title: &str, inner: usize) -> Vec<char> {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() > inner {
        return chars[chars.len() - inner..].to_vec();
    }
    let lead = (inner - chars.len()) / 2;
    let mut cells = Vec::with_capacity(inner);
    cells.resize(lead, ' ');
    cells.extend(&chars);
    cells.resize(inner, ' ');
    cells
}

/// Write consecutive cells starting at (x, y), stopping at the canvas
/// edge.
fn put_span<I>(canvas: &mut Canvas, x: u16, y: u16, glyphs: I)
where
    I: IntoIterator<Item = char>,
{
    let mut col = x;
    for ch in glyphs {
        if !canvas.set(col, y, ch) {
            return;
        }
        let Some(next) = col.checked_add(1) else {
            return;
        };
        col = next;
    }
}
