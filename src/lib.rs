//! # Tembea
//!
//! A content-based hotel and restaurant recommender.
//!
//! Tembea loads a static table of hotels and restaurants, fits a TF-IDF index
//! over each item's combined text (features, cuisine, town, name, category) and
//! answers two kinds of query:
//!
//! - **By features**: free text is vectorized and matched to the nearest items
//!   by cosine distance.
//! - **By town**: items in a town, best rated first, cheapest first among
//!   equal ratings.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install tembea
//! tembea --dataset final.csv --http-port 5000
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use tembea::prelude::*;
//!
//! let recommender = Recommender::from_csv("final.csv", RecommenderConfig::default()).unwrap();
//!
//! for item in recommender.recommend_hotels_restaurants("swimming pool free wifi", 5) {
//!     println!("{} ({:.3})", item.name, item.distance);
//! }
//!
//! match recommender.recommend_town_hotels("Nairobi", DEFAULT_TOWN_RECOMMENDATIONS) {
//!     Some(items) => println!("{} places in Nairobi", items.len()),
//!     None => println!("No matches"),
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - [`tembea-core`](https://docs.rs/tembea-core) - Item table, TF-IDF, nearest neighbors, recommender
//! - [`tembea-api`](https://docs.rs/tembea-api) - REST API

// Re-export core types
pub use tembea_core::{
    Catalog, Item, SimilarItem, TownItem,
    Recommender, RecommenderConfig, DEFAULT_NEIGHBORS, DEFAULT_TOWN_RECOMMENDATIONS,
    TfidfVectorizer, NearestNeighbors, Neighbor, SparseVector,
    Error, Result,
};

// Re-export API
pub use tembea_api::{RestApi, RestConfig, KNOWN_TOWNS};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, Item, SimilarItem, TownItem,
        Recommender, RecommenderConfig, DEFAULT_TOWN_RECOMMENDATIONS,
        Error, Result,
        RestApi, RestConfig,
    };
}
