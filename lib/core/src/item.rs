use serde::{Deserialize, Serialize};

/// Columns every dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "name",
    "category",
    "website",
    "rating",
    "phone",
    "locationString",
    "average_price",
    "town",
    "cuisine",
    "features",
];

/// One hotel or restaurant row
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub name: String,
    pub category: String,
    pub website: String,
    pub rating: Option<f64>,
    pub phone: String,
    #[serde(rename = "locationString")]
    pub location_string: String,
    pub average_price: Option<f64>,
    pub town: String,
    pub cuisine: String,
    pub features: String,
    /// Derived text the similarity index is built over.
    /// Filled in when the item enters a [`Catalog`](crate::Catalog).
    #[serde(default)]
    pub combined_features: String,
}

impl Item {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>, town: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            town: town.into(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_average_price(mut self, price: f64) -> Self {
        self.average_price = Some(price);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_features(mut self, features: impl Into<String>) -> Self {
        self.features = features.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_contact(
        mut self,
        website: impl Into<String>,
        phone: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        self.website = website.into();
        self.phone = phone.into();
        self.location_string = location.into();
        self
    }

    /// Recompute `combined_features` from the source text fields
    pub fn derive_combined_features(&mut self) {
        self.combined_features = combine_features(
            &self.features,
            &self.cuisine,
            &self.town,
            &self.name,
            &self.category,
        );
    }
}

/// Space-join the source fields in index order: features, cuisine, town, name, category.
/// Missing fields are empty strings, so the separators are always present.
pub fn combine_features(
    features: &str,
    cuisine: &str,
    town: &str,
    name: &str,
    category: &str,
) -> String {
    [features, cuisine, town, name, category].join(" ")
}

/// Similarity query hit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarItem {
    pub name: String,
    pub category: String,
    pub website: String,
    pub rating: Option<f64>,
    pub phone: String,
    pub combined_features: String,
    #[serde(rename = "locationString")]
    pub location_string: String,
    pub average_price: Option<f64>,
    /// Cosine distance to the query, 0.0 is identical
    pub distance: f32,
}

impl SimilarItem {
    pub fn from_item(item: &Item, distance: f32) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            website: item.website.clone(),
            rating: item.rating,
            phone: item.phone.clone(),
            combined_features: item.combined_features.clone(),
            location_string: item.location_string.clone(),
            average_price: item.average_price,
            distance,
        }
    }
}

/// Town query hit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TownItem {
    pub name: String,
    pub category: String,
    pub town: String,
    pub rating: Option<f64>,
    pub combined_features: String,
    #[serde(rename = "locationString")]
    pub location_string: String,
    pub average_price: Option<f64>,
    pub website: String,
    pub phone: String,
}

impl From<&Item> for TownItem {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            town: item.town.clone(),
            rating: item.rating,
            combined_features: item.combined_features.clone(),
            location_string: item.location_string.clone(),
            average_price: item.average_price,
            website: item.website.clone(),
            phone: item.phone.clone(),
        }
    }
}
