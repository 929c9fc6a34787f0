//! # cinerec Core
//!
//! Core library for the cinerec content-based recommender.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`Catalog`] - Ordered, immutable item catalog with title lookup
//! - [`Vocabulary`] / [`FeatureMatrix`] - Tag vectorizer (binary encoding)
//! - [`ScoreMatrix`] - Pairwise cosine similarity over all items
//! - [`Recommender`] - Ranked top-N lookup against a query title
//!
//! ## Example
//!
//! ```rust
//! use cinerec_core::{Catalog, Item, Recommender};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new(1, "Inception", ["Action", "Sci-Fi", "Thriller"]),
//!     Item::new(2, "The Matrix", ["Sci-Fi", "Action"]),
//!     Item::new(3, "Titanic", ["Romance", "Drama"]),
//! ]);
//!
//! let recommender = Recommender::new(catalog).unwrap();
//! let results = recommender.recommend("Inception", 2).unwrap();
//! assert_eq!(results[0].title, "The Matrix");
//! ```

pub mod catalog;
pub mod error;
pub mod recommend;
pub mod similarity;
pub mod vector;
pub mod vectorizer;

pub use catalog::{Catalog, Item};
pub use error::{Error, Result};
pub use recommend::{Recommendation, Recommender};
pub use similarity::ScoreMatrix;
pub use vector::Vector;
pub use vectorizer::{FeatureMatrix, Vocabulary};
