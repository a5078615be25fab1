//! Brute-force k-nearest-neighbors classification.

use std::hash::Hash;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator as _};

#[cfg(feature = "tracing")]
use tracing::{debug, instrument, warn};

use crate::{euclidean, mode, Dataset, Error, Idx, LabeledPoint, MinK, Neighbor, Result};

/// How distances to the dataset rows are computed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    /// Compute every distance on the calling thread.
    Sequential,
    /// Spread distance computations over the rayon thread pool.
    #[default]
    Parallel,
}

/// Outcome of a single classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction<L> {
    /// Labels of the selected neighbors, closest first.
    pub labels: Vec<L>,
    /// Distances of the selected neighbors to the query, closest first.
    pub distances: Vec<f64>,
    /// Dataset positions of the selected neighbors, closest first.
    pub keys: Vec<Idx>,
    /// Majority label among `labels`.
    pub predicted: L,
}

/// Classifies one query against a labeled dataset.
#[derive(Debug, Clone)]
pub struct Classifier<L> {
    k: usize,
    dataset: Dataset<L>,
    query: Vec<f64>,
    execution: Execution,
}

impl<L> Classifier<L> {
    pub fn new(k: usize, dataset: Dataset<L>, query: Vec<f64>) -> Self {
        Self {
            k,
            dataset,
            query,
            execution: Execution::default(),
        }
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub const fn k(&self) -> usize {
        self.k
    }

    pub fn dataset(&self) -> &Dataset<L> {
        &self.dataset
    }

    pub fn query(&self) -> &[f64] {
        &self.query
    }

    pub const fn execution(&self) -> Execution {
        self.execution
    }
}

impl<L> Classifier<L>
where
    L: Clone + Eq + Hash + Sync,
{
    /// Returns the labels of the `k` closest rows and their majority label.
    pub fn nearest_neighbors(&self) -> Result<Prediction<L>> {
        classify(self.k, &self.dataset, &self.query, self.execution)
    }
}

/// Classifies `query` sequentially. See [`classify`].
pub fn nearest_neighbors<L>(
    k: usize,
    dataset: &Dataset<L>,
    query: &[f64],
) -> Result<Prediction<L>>
where
    L: Clone + Eq + Hash + Sync,
{
    classify(k, dataset, query, Execution::Sequential)
}

/// Classifies `query` by majority vote among its `k` nearest rows.
///
/// If `k` exceeds the dataset size every row takes part in the vote.
#[cfg_attr(
    feature = "tracing",
    instrument(skip(dataset, query), fields(size = dataset.size(), dimensions = query.len()))
)]
pub fn classify<L>(
    k: usize,
    dataset: &Dataset<L>,
    query: &[f64],
    execution: Execution,
) -> Result<Prediction<L>>
where
    L: Clone + Eq + Hash + Sync,
{
    if k == 0 {
        return Err(Error::InvalidK(k));
    }
    if dataset.is_empty() {
        return Err(Error::EmptyInput);
    }
    if query.is_empty() {
        return Err(Error::DimensionMismatch {
            expected: dataset[0].dimensions(),
            actual: 0,
        });
    }

    #[cfg(feature = "tracing")]
    if k > dataset.size() {
        warn!(
            k,
            size = dataset.size(),
            "`k` exceeds dataset size, using every row"
        );
    }

    let neighbors = ranked(k, &distances(dataset, query, execution)?, dataset);

    let labels = neighbors
        .iter()
        .map(|n| n.label().clone())
        .collect::<Vec<_>>();
    let distances = neighbors.iter().map(Neighbor::distance).collect();
    let keys = neighbors.iter().map(Neighbor::key).collect();
    let predicted = mode(labels.iter())?.clone();

    #[cfg(feature = "tracing")]
    debug!(neighbors = labels.len(), "Voted");

    Ok(Prediction {
        labels,
        distances,
        keys,
        predicted,
    })
}

/// Distance from `query` to every row, in dataset order.
///
/// Fails on the first row, in dataset order, whose dimension disagrees with
/// the query.
fn distances<L: Sync>(
    dataset: &Dataset<L>,
    query: &[f64],
    execution: Execution,
) -> Result<Vec<f64>> {
    let distance = |point: &LabeledPoint<L>| euclidean(&point.features, query);

    let results: Vec<Result<f64>> = match execution {
        Execution::Sequential => dataset.iter().map(distance).collect(),
        Execution::Parallel => {
            #[cfg(feature = "tracing")]
            debug!(threads = rayon::current_num_threads());
            dataset.points().par_iter().map(distance).collect()
        }
    };

    results.into_iter().collect()
}

fn ranked<'a, L>(k: usize, distances: &[f64], dataset: &'a Dataset<L>) -> Vec<Neighbor<'a, L>> {
    distances
        .iter()
        .zip(dataset.iter())
        .enumerate()
        .map(|(key, (&distance, point))| Neighbor::new(distance, key, point))
        .min_k(k)
}
