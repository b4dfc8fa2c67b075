//! Console presentation for mazes and search results.
//!
//! [`render`] draws a grid with an optional path overlay, plain or styled
//! with crossterm colors. [`write_result`] and [`write_comparison`] format
//! per-algorithm reports and the side-by-side comparison table into any
//! [`std::io::Write`].

mod render;
mod report;

pub use render::{PATH_SYMBOL, RenderStyle, render};
pub use report::{ReportRow, write_comparison, write_result};
