//! # cinerec
//!
//! A small content-based movie recommender.
//!
//! cinerec encodes each catalog item's genre tags as a binary vector over
//! the global tag vocabulary, computes pairwise cosine similarity, and
//! serves ranked top-N lookups against a query title.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install cinerec
//! cinerec --top-n 3 --heatmap
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use cinerec::prelude::*;
//!
//! let recommender = Recommender::new(cinerec::dataset::sample_catalog()).unwrap();
//! let results = recommender.recommend("Inception", 3).unwrap();
//! for rec in results {
//!     println!("{:.2}  {}", rec.score, rec.title);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - [`cinerec-core`](https://docs.rs/cinerec-core) - Catalog, tag
//!   vectorizer, similarity matrix and recommender
//! - This crate - CLI binary, built-in sample catalog and the text heatmap
//!   renderer

// Re-export core types
pub use cinerec_core::{
    Catalog, Error, FeatureMatrix, Item, Recommendation, Recommender, Result, ScoreMatrix, Vector,
    Vocabulary,
};

pub mod dataset;
pub mod heatmap;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, Error, FeatureMatrix, Item, Recommendation, Recommender, Result, ScoreMatrix,
        Vector, Vocabulary,
    };
}
