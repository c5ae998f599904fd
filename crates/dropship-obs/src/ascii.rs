//! Fixed-width text rendering of the board, for logs and debugging.

use dropship_core::{Tile, NO_DRONE};
use dropship_grid::{Cell, WorldState};

/// Render the board as a bordered text grid.
///
/// Each cell shows the drone index (suffixed `<p` while carrying) or the
/// ground object under open sky: `p` packet, `(z)` dropzone, `@` station,
/// `#` skyscraper. Cell width adapts to the widest entry so large drone
/// indices stay aligned.
pub fn render(state: &WorldState) -> String {
    let side = state.side();
    let mut glyphs = Vec::with_capacity((side * side) as usize);
    for y in 0..side as i32 {
        for x in 0..side as i32 {
            glyphs.push(cell_glyph(state, Cell::new(y, x)));
        }
    }

    let width = glyphs.iter().map(String::len).max().unwrap_or(0).max(3);
    let row_sep = format!("{}+", format!("+{}", "-".repeat(width)).repeat(side as usize));

    let mut lines = vec![row_sep.clone()];
    for row in glyphs.chunks(side as usize) {
        let mut line = String::from("|");
        for glyph in row {
            let pad = (width - glyph.len()) / 2;
            line.push_str(&" ".repeat(pad));
            line.push_str(glyph);
            line.push_str(&" ".repeat(width - glyph.len() - pad));
            line.push('|');
        }
        lines.push(line);
        lines.push(row_sep.clone());
    }
    lines.join("\n")
}

fn cell_glyph(state: &WorldState, cell: Cell) -> String {
    let id = state.air.get(cell);
    if id != NO_DRONE {
        return if state.carrying[(id - 1) as usize] {
            format!("{id}<p")
        } else {
            id.to_string()
        };
    }
    match state.ground.get(cell) {
        Tile::Empty => String::new(),
        Tile::Skyscraper => "#".to_string(),
        Tile::Station => "@".to_string(),
        Tile::Dropzone => "(z)".to_string(),
        Tile::Packet => "p".to_string(),
    }
}
