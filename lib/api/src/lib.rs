//! # Tembea API
//!
//! HTTP surface for the Tembea recommender: the known town list, the free-text
//! similarity form and the town form. Handlers share one read-only
//! [`Recommender`](tembea_core::Recommender) built before the server starts.

pub mod rest;
pub mod towns;

pub use rest::{AppState, RestApi, RestConfig};
pub use towns::KNOWN_TOWNS;
