use crate::{Catalog, Item, NearestNeighbors, Result, SimilarItem, TfidfVectorizer, TownItem};
use std::cmp::Ordering;
use std::path::Path;
use std::time::Instant;

/// Default number of neighbors the index is fitted for
pub const DEFAULT_NEIGHBORS: usize = 10;

/// Customary row cap for [`Recommender::recommend_town_hotels`]
pub const DEFAULT_TOWN_RECOMMENDATIONS: usize = 30;

/// Configuration for building a recommender
#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    /// Upper bound on similarity results per query
    pub n_neighbors: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            n_neighbors: DEFAULT_NEIGHBORS,
        }
    }
}

/// Item table plus the similarity indexes fitted over it.
///
/// All three are built together in [`Recommender::build`] and never change
/// afterwards, so every query is a pure read and the recommender can be shared
/// across threads behind an `Arc`.
#[derive(Debug)]
pub struct Recommender {
    catalog: Catalog,
    vectorizer: TfidfVectorizer,
    index: NearestNeighbors,
}

impl Recommender {
    /// Fit the vectorizer and neighbor index over the catalog's combined features
    pub fn build(catalog: Catalog, config: RecommenderConfig) -> Result<Self> {
        let started = Instant::now();

        let corpus = catalog.combined_features();
        let (vectorizer, vectors) = TfidfVectorizer::fit_transform(&corpus)?;
        let index = NearestNeighbors::fit(vectors, config.n_neighbors)?;

        tracing::info!(
            "Indexed {} items, vocabulary {} terms, {} neighbors in {:?}",
            catalog.len(),
            vectorizer.vocabulary_size(),
            index.n_neighbors(),
            started.elapsed()
        );

        Ok(Self {
            catalog,
            vectorizer,
            index,
        })
    }

    /// Load a CSV dataset and build over it
    pub fn from_csv<P: AsRef<Path>>(path: P, config: RecommenderConfig) -> Result<Self> {
        let catalog = Catalog::from_path(path)?;
        Self::build(catalog, config)
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    #[inline]
    #[must_use]
    pub fn n_neighbors(&self) -> usize {
        self.index.n_neighbors()
    }

    /// Items most similar to free-text `input_features`, nearest first.
    ///
    /// At most `min(n_recommendations, n_neighbors)` items are returned. Input
    /// with no known terms matches nothing in particular and yields the first rows.
    pub fn recommend_hotels_restaurants(
        &self,
        input_features: &str,
        n_recommendations: usize,
    ) -> Vec<SimilarItem> {
        let query = self.vectorizer.transform(input_features);
        if query.is_zero() {
            tracing::debug!("Query {:?} has no known terms", input_features);
        }

        self.index
            .kneighbors(&query, n_recommendations)
            .into_iter()
            .filter_map(|neighbor| {
                self.catalog
                    .get(neighbor.index)
                    .map(|item| SimilarItem::from_item(item, neighbor.distance))
            })
            .collect()
    }

    /// Top rated items in `town` (case-insensitive exact match), cheapest first among equal ratings.
    ///
    /// Returns `None` when no item is in that town.
    pub fn recommend_town_hotels(&self, town: &str, n_recommendations: usize) -> Option<Vec<TownItem>> {
        let town = town.to_lowercase();

        let mut matches: Vec<&Item> = self
            .catalog
            .iter()
            .filter(|item| item.town.to_lowercase() == town)
            .collect();

        if matches.is_empty() {
            tracing::debug!("No items in town {:?}", town);
            return None;
        }

        // stable: equal rating and price keep table order
        matches.sort_by(|a, b| town_order(a, b));

        Some(
            matches
                .into_iter()
                .take(n_recommendations)
                .map(TownItem::from)
                .collect(),
        )
    }
}

/// Rating descending, then average price ascending; missing values last for both keys
fn town_order(a: &Item, b: &Item) -> Ordering {
    compare_missing_last(a.rating, b.rating, |x, y| y.total_cmp(&x))
        .then_with(|| compare_missing_last(a.average_price, b.average_price, |x, y| x.total_cmp(&y)))
}

fn compare_missing_last(a: Option<f64>, b: Option<f64>, present: impl Fn(f64, f64) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => present(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
