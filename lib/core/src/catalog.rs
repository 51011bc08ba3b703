use crate::item::{Item, REQUIRED_COLUMNS};
use crate::{Error, Result};
use csv::StringRecord;
use std::io::Read;
use std::path::Path;

/// Ordered, read-only item table.
///
/// Row position is the key shared with the vector and neighbor indexes,
/// so the table is never reordered or mutated once built.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

/// Header positions of the required columns
struct ColumnMap {
    name: usize,
    category: usize,
    website: usize,
    rating: usize,
    phone: usize,
    location_string: usize,
    average_price: usize,
    town: usize,
    cuisine: usize,
    features: usize,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let positions = REQUIRED_COLUMNS.map(|column| headers.iter().position(|h| h.trim() == column));

        match positions {
            [Some(name), Some(category), Some(website), Some(rating), Some(phone), Some(location_string), Some(average_price), Some(town), Some(cuisine), Some(features)] => {
                Ok(Self {
                    name,
                    category,
                    website,
                    rating,
                    phone,
                    location_string,
                    average_price,
                    town,
                    cuisine,
                    features,
                })
            }
            _ => Err(Error::MissingColumns(
                REQUIRED_COLUMNS
                    .iter()
                    .zip(positions)
                    .filter(|(_, position)| position.is_none())
                    .map(|(column, _)| column.to_string())
                    .collect(),
            )),
        }
    }

    fn item(&self, record: &StringRecord, row: usize) -> Result<Item> {
        let text = |idx: usize| record.get(idx).unwrap_or("").to_string();
        let number = |idx: usize, column: &str| parse_number(record.get(idx).unwrap_or(""), row, column);

        Ok(Item {
            name: text(self.name),
            category: text(self.category),
            website: text(self.website),
            rating: number(self.rating, "rating")?,
            phone: text(self.phone),
            location_string: text(self.location_string),
            average_price: number(self.average_price, "average_price")?,
            town: text(self.town),
            cuisine: text(self.cuisine),
            features: text(self.features),
            combined_features: String::new(),
        })
    }
}

/// Cells read as missing numbers, the usual NA spellings of CSV exports
const NA_VALUES: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn parse_number(raw: &str, row: usize, column: &str) -> Result<Option<f64>> {
    let raw = raw.trim();
    if NA_VALUES.contains(&raw) {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        // f64 parsing accepts any casing of "nan"
        Ok(value) if value.is_nan() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(Error::InvalidNumber {
            row,
            column: column.to_string(),
            value: raw.to_string(),
        }),
    }
}

impl Catalog {
    /// Build a catalog from in-memory items, deriving `combined_features` for each
    pub fn new(mut items: Vec<Item>) -> Self {
        for item in &mut items {
            item.derive_combined_features();
        }
        Self { items }
    }

    /// Load a CSV dataset with a header row
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading dataset from {:?}", path);
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnMap::from_headers(reader.headers()?)?;

        let mut items = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            // Header is line 1
            items.push(columns.item(&record, idx + 2)?);
        }

        Ok(Self::new(items))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Item> {
        self.items.get(idx)
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Corpus the vectorizer is fitted on, positionally aligned with the items
    pub fn combined_features(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.combined_features.as_str()).collect()
    }
}
