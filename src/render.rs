//! Turning a [CellGrid] into text.
use crate::{cell::CellState, cell_grid::CellGrid};
use core::fmt;

/// Glyph table used when displaying a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlyphSet {
    #[default]
    Emoji,
    /// Single character per cell, handy for terminals without emoji and for tests.
    Ascii,
}

impl GlyphSet {
    /// Glyph for a cell. Cells that are neither obstacles nor part of the solution,
    /// including leftover [CellState::Closed] cells, share the default glyph.
    pub fn glyph(self, cell: CellState) -> &'static str {
        match self {
            GlyphSet::Emoji => match cell {
                CellState::Obstacle => "⛰️   ",
                CellState::Path => "🚗   ",
                CellState::Start => "🚦   ",
                CellState::Finish => "🏁   ",
                _ => "0   ",
            },
            GlyphSet::Ascii => match cell {
                CellState::Obstacle => "#",
                CellState::Path => "*",
                CellState::Start => "S",
                CellState::Finish => "G",
                _ => ".",
            },
        }
    }
}

/// A grid paired with the glyphs to display it with.
pub struct Render<'a> {
    grid: &'a CellGrid,
    glyphs: GlyphSet,
}

impl<'a> Render<'a> {
    pub fn new(grid: &'a CellGrid, glyphs: GlyphSet) -> Render<'a> {
        Render { grid, glyphs }
    }
}

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.grid.rows() {
            for &cell in row {
                f.write_str(self.glyphs.glyph(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&Render::new(self, GlyphSet::Emoji), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::*;

    #[test]
    fn ascii_rendering() {
        let grid = CellGrid::from_rows(vec![
            vec![Start, Path, Obstacle],
            vec![Closed, Finish],
            vec![],
            vec![Empty],
        ]);
        let text = Render::new(&grid, GlyphSet::Ascii).to_string();
        assert_eq!(text, "S*#\n.G\n\n.\n");
    }

    #[test]
    fn emoji_rendering() {
        let grid = CellGrid::from_rows(vec![vec![Start, Obstacle, Closed], vec![Path, Finish]]);
        assert_eq!(grid.to_string(), "🚦   ⛰️   0   \n🚗   🏁   \n");
    }
}
