//! Text heatmap of the score matrix
//!
//! Read-only consumer of the score matrix: renders the pairwise scores as
//! a labeled grid, one row per catalog item, two decimals per cell.

use cinerec_core::{Catalog, ScoreMatrix};
use std::fmt::Write;

/// Render the pairwise similarity grid with titles as row labels
///
/// Columns are numbered; each row ends with its own number so the grid
/// stays readable for long titles.
#[must_use]
pub fn render(catalog: &Catalog, scores: &ScoreMatrix) -> String {
    let label_width = catalog
        .items()
        .iter()
        .map(|item| item.title.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = write!(out, "{:>label_width$}", "");
    for j in 0..scores.len() {
        let _ = write!(out, "  [{j}]");
    }
    out.push('\n');

    for (i, item) in catalog.items().iter().enumerate() {
        let _ = write!(out, "{:>label_width$}", item.title);
        for j in 0..scores.len() {
            let _ = write!(out, " {:.2}", scores.get(i, j));
        }
        let _ = writeln!(out, "  [{i}]");
    }

    out
}
