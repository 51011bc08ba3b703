//! # Tembea Core
//!
//! Core library for the Tembea hotel and restaurant recommender.
//!
//! This crate provides the item table and the content-based similarity index:
//!
//! - [`Item`] - One hotel or restaurant row, with its derived `combined_features`
//! - [`Catalog`] - The immutable item table, loaded from CSV
//! - [`TfidfVectorizer`] - TF-IDF weighting over the combined features
//! - [`SparseVector`] - L2-normalized sparse term vectors
//! - [`NearestNeighbors`] - Exact cosine k-nearest-neighbor search
//! - [`Recommender`] - Similarity and town queries over all of the above
//!
//! ## Example
//!
//! ```rust
//! use tembea_core::{Catalog, Item, Recommender, RecommenderConfig, DEFAULT_TOWN_RECOMMENDATIONS};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("Carnivore", "restaurant", "Nairobi")
//!         .with_features("nyama choma outdoor seating")
//!         .with_rating(4.5),
//!     Item::new("Serena Beach", "hotel", "Shanzu")
//!         .with_features("beach pool spa")
//!         .with_rating(4.6),
//! ]);
//! let recommender = Recommender::build(catalog, RecommenderConfig::default()).unwrap();
//!
//! let similar = recommender.recommend_hotels_restaurants("pool by the beach", 5);
//! assert_eq!(similar[0].name, "Serena Beach");
//!
//! let in_town = recommender.recommend_town_hotels("nairobi", DEFAULT_TOWN_RECOMMENDATIONS).unwrap();
//! assert_eq!(in_town[0].name, "Carnivore");
//! ```

pub mod catalog;
pub mod error;
pub mod item;
pub mod neighbors;
pub mod recommender;
pub mod tfidf;
pub mod tokenize;
pub mod vector;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use item::{combine_features, Item, SimilarItem, TownItem, REQUIRED_COLUMNS};
pub use neighbors::{NearestNeighbors, Neighbor};
pub use recommender::{Recommender, RecommenderConfig, DEFAULT_NEIGHBORS, DEFAULT_TOWN_RECOMMENDATIONS};
pub use tfidf::TfidfVectorizer;
pub use vector::SparseVector;
