use crate::vector::SparseVector;
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One nearest-neighbor hit: row index into the fitted vectors and its cosine distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f32,
}

/// Candidate kept in the bounded max-heap during selection.
/// Ordered by (distance, index) so the heap top is the worst kept hit.
#[derive(Clone, Copy, PartialEq, Eq)]
struct Candidate {
    dist: OrderedFloat<f32>,
    idx: usize,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist.cmp(&other.dist).then(self.idx.cmp(&other.idx))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Exact k-nearest-neighbor index under cosine distance.
///
/// Every query scans all fitted vectors; distances are computed in parallel.
/// The index is read-only after [`NearestNeighbors::fit`], so it can be shared
/// between threads without locking.
#[derive(Debug, Clone)]
pub struct NearestNeighbors {
    vectors: Vec<SparseVector>,
    norms: Vec<f32>,
    n_neighbors: usize,
}

impl NearestNeighbors {
    /// Index `vectors` with `n_neighbors` as the cap on results per query
    pub fn fit(vectors: Vec<SparseVector>, n_neighbors: usize) -> Result<Self> {
        if n_neighbors == 0 {
            return Err(Error::InvalidConfig(
                "n_neighbors must be at least 1".to_string(),
            ));
        }
        let norms = vectors.par_iter().map(SparseVector::norm).collect();
        Ok(Self {
            vectors,
            norms,
            n_neighbors,
        })
    }

    #[inline]
    #[must_use]
    pub fn n_neighbors(&self) -> usize {
        self.n_neighbors
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Up to `k` nearest vectors, closest first.
    ///
    /// `k` is capped at the fitted neighbor count and at the number of vectors.
    /// Equal distances keep row order, so the result is deterministic; a zero
    /// query is at distance 1 from everything and yields the first rows.
    pub fn kneighbors(&self, query: &SparseVector, k: usize) -> Vec<Neighbor> {
        let k = k.min(self.n_neighbors).min(self.vectors.len());
        if k == 0 {
            return Vec::new();
        }

        let query_norm = query.norm();
        let distances: Vec<f32> = self
            .vectors
            .par_iter()
            .zip(self.norms.par_iter())
            .map(|(vector, &norm)| cosine_distance(query, query_norm, vector, norm))
            .collect();

        let mut heap: BinaryHeap<Candidate> = BinaryHeap::with_capacity(k + 1);
        for (idx, &dist) in distances.iter().enumerate() {
            let candidate = Candidate { dist: OrderedFloat(dist), idx };
            if heap.len() < k {
                heap.push(candidate);
            } else if let Some(worst) = heap.peek() {
                if candidate < *worst {
                    heap.pop();
                    heap.push(candidate);
                }
            }
        }

        heap.into_sorted_vec()
            .into_iter()
            .map(|c| Neighbor {
                index: c.idx,
                distance: c.dist.into_inner(),
            })
            .collect()
    }
}

#[inline]
fn cosine_distance(a: &SparseVector, norm_a: f32, b: &SparseVector, norm_b: f32) -> f32 {
    let similarity = if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        a.dot(b) / (norm_a * norm_b)
    };
    (1.0 - similarity).clamp(0.0, 2.0)
}
