//! Built-in sample catalog
//!
//! Used by the CLI when no catalog file is supplied.

use cinerec_core::{Catalog, Item};

/// Eight well-known movies with their genre tags
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Item::new(1, "The Dark Knight", ["Action", "Drama", "Crime"]),
        Item::new(2, "Inception", ["Action", "Sci-Fi", "Thriller"]),
        Item::new(3, "Interstellar", ["Adventure", "Drama", "Sci-Fi"]),
        Item::new(4, "Avengers: Endgame", ["Action", "Adventure", "Sci-Fi"]),
        Item::new(5, "Titanic", ["Romance", "Drama"]),
        Item::new(6, "The Notebook", ["Romance", "Drama"]),
        Item::new(7, "The Matrix", ["Sci-Fi", "Action"]),
        Item::new(8, "Joker", ["Crime", "Drama", "Thriller"]),
    ])
}
