use std::collections::HashSet;
use std::fmt::Write as _;

use crossterm::style::{Color, Stylize, style};
use maze_core::{CellKind, Grid, Position};

/// Symbol drawn on path cells other than the start and goal.
pub const PATH_SYMBOL: char = '*';

/// Whether [`render`] emits terminal color sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    #[default]
    Plain,
    Color,
}

/// Draw `grid` one row per line, each cell as its symbol plus a space.
///
/// Cells on `path` are drawn as [`PATH_SYMBOL`], except the start and goal
/// which keep their own symbols.
pub fn render(grid: &Grid, path: Option<&[Position]>, mode: RenderStyle) -> String {
    let on_path: HashSet<Position> = path.unwrap_or_default().iter().copied().collect();
    let mut out = String::with_capacity(grid.len() * 2 + grid.rows());

    for p in grid.positions() {
        let kind = grid.at(p).unwrap_or_default();
        let marked = kind == CellKind::Empty && on_path.contains(&p);
        let symbol = if marked { PATH_SYMBOL } else { kind.symbol() };

        match mode {
            RenderStyle::Plain => write!(out, "{symbol} ").ok(),
            RenderStyle::Color => write!(out, "{} ", styled(symbol, kind, marked)).ok(),
        };
        if p.col + 1 == grid.cols() {
            out.push('\n');
        }
    }
    out
}

fn styled(symbol: char, kind: CellKind, marked: bool) -> impl std::fmt::Display {
    if marked {
        return style(symbol).with(Color::Yellow).bold();
    }
    match kind {
        CellKind::Empty => style(symbol).with(Color::DarkGrey),
        CellKind::Wall => style(symbol).with(Color::Grey),
        CellKind::Start => style(symbol).with(Color::Green).bold(),
        CellKind::Goal => style(symbol).with(Color::Red).bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Grid {
        Grid::new(&[vec![2, 0, 1], vec![1, 0, 1], vec![1, 0, 3]]).unwrap()
    }

    #[test]
    fn plain_without_path() {
        let out = render(&corridor(), None, RenderStyle::Plain);
        assert_eq!(out, "S . # \n# . # \n# . M \n");
    }

    #[test]
    fn plain_with_path_keeps_endpoints() {
        let path: Vec<Position> = [(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)]
            .into_iter()
            .map(Position::from)
            .collect();
        let out = render(&corridor(), Some(&path), RenderStyle::Plain);
        assert_eq!(out, "S * # \n# * # \n# * M \n");
    }

    #[test]
    fn path_marks_only_empty_cells() {
        // A bogus path through walls leaves them drawn as walls.
        let path: Vec<Position> = [(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]
            .into_iter()
            .map(Position::from)
            .collect();
        let out = render(&corridor(), Some(&path), RenderStyle::Plain);
        assert_eq!(out, "S * # \n# . # \n# . M \n");
    }

    #[test]
    fn color_output_keeps_layout() {
        let plain = render(&corridor(), None, RenderStyle::Plain);
        let colored = render(&corridor(), None, RenderStyle::Color);
        assert!(colored.contains('S') && colored.contains('M'));
        assert!(colored.len() >= plain.len());
        assert_eq!(colored.lines().count(), 3);
    }
}
