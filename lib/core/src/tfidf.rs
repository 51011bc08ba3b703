use crate::tokenize::tokenize;
use crate::vector::SparseVector;
use crate::{Error, Result};
use ahash::AHashMap;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// TF-IDF text vectorizer.
///
/// ```text
/// idf(t)    = ln((1 + n) / (1 + df(t))) + 1
/// w(t, d)   = count(t, d) * idf(t)
/// vector(d) = w(., d) / ||w(., d)||
/// ```
///
/// The vocabulary is fixed at fit time; terms seen only at query time are ignored.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    // term -> column, columns assigned in lexicographic term order
    vocabulary: AHashMap<String, usize>,
    // column -> inverse document frequency
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Learn vocabulary and document frequencies from a corpus
    pub fn fit<S: AsRef<str> + Sync>(documents: &[S]) -> Result<Self> {
        if documents.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let doc_terms: Vec<BTreeSet<String>> = documents
            .par_iter()
            .map(|doc| tokenize(doc.as_ref()).into_iter().collect())
            .collect();

        let mut doc_freq: AHashMap<&str, u32> = AHashMap::new();
        for terms in &doc_terms {
            for term in terms {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<&str> = doc_freq.keys().copied().collect();
        terms.sort_unstable();

        let n = documents.len() as f64;
        let idf: Vec<f32> = terms
            .iter()
            .map(|term| {
                let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
                (((1.0 + n) / (1.0 + df)).ln() + 1.0) as f32
            })
            .collect();

        let vocabulary: AHashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(column, term)| (term.to_string(), column))
            .collect();

        Ok(Self {
            vocabulary,
            idf,
        })
    }

    /// Fit on a corpus and vectorize every document of it
    pub fn fit_transform<S: AsRef<str> + Sync>(documents: &[S]) -> Result<(Self, Vec<SparseVector>)> {
        let vectorizer = Self::fit(documents)?;
        let vectors = vectorizer.transform_batch(documents);
        Ok((vectorizer, vectors))
    }

    /// Vectorize one document into an L2-normalized sparse vector.
    /// Returns the zero vector when no token is in the vocabulary.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: AHashMap<usize, u32> = AHashMap::new();
        for token in tokenize(text) {
            if let Some(&column) = self.vocabulary.get(&token) {
                *counts.entry(column).or_insert(0) += 1;
            }
        }

        let pairs: Vec<(usize, f32)> = counts
            .into_iter()
            .map(|(column, count)| (column, count as f32 * self.idf[column]))
            .collect();

        let mut vector = SparseVector::from_pairs(pairs);
        vector.normalize();
        vector
    }

    pub fn transform_batch<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Vec<SparseVector> {
        documents
            .par_iter()
            .map(|doc| self.transform(doc.as_ref()))
            .collect()
    }

    /// Number of distinct terms, also the vector dimension
    #[inline]
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Column assigned to `term`, if it was seen during fitting
    pub fn column(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.column(term).map(|column| self.idf[column])
    }
}
