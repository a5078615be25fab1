use std::{fs, path::Path};

use anyhow::{Context, Result};
use knn_vote::{Classifier, Dataset, Execution, Prediction};
use nanoserde::{DeJson, SerJson};

/// Number of neighbors used when neither the problem file nor the command line
/// gives one.
pub const DEFAULT_K: usize = 3;

/// A classification task read from a JSON file.
///
/// ```json
/// { "k": 3, "rows": [[22, 1], [45, 0]], "query": [33] }
/// ```
///
/// Each row is `[feature..., label]` with a whole-number label.
#[derive(DeJson, SerJson, Debug, Clone, PartialEq)]
pub struct Problem {
    pub k: Option<usize>,
    pub rows: Vec<Vec<f64>>,
    pub query: Vec<f64>,
}

impl Problem {
    /// Ages and whether that person likes pineapple on pizza, asked about a
    /// 33 year old.
    pub fn pineapple() -> Self {
        Self {
            k: Some(DEFAULT_K),
            rows: [
                [22.0, 1.0],
                [23.0, 1.0],
                [21.0, 1.0],
                [18.0, 1.0],
                [19.0, 1.0],
                [25.0, 0.0],
                [27.0, 0.0],
                [29.0, 0.0],
                [31.0, 0.0],
                [45.0, 0.0],
            ]
            .iter()
            .map(|row| row.to_vec())
            .collect(),
            query: vec![33.0],
        }
    }

    pub fn open(path: &impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.as_ref().display()))?;
        Self::parse(&text)
            .with_context(|| format!("Could not parse {}", path.as_ref().display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(Self::deserialize_json(text)?)
    }

    pub fn k(&self) -> usize {
        self.k.unwrap_or(DEFAULT_K)
    }

    pub fn classifier(&self, execution: Execution) -> Result<Classifier<i64>> {
        let dataset = Dataset::from_rows(&self.rows)?;
        Ok(Classifier::new(self.k(), dataset, self.query.clone()).with_execution(execution))
    }
}

/// Machine-readable form of a [`Prediction`].
#[derive(SerJson, DeJson, Debug, Clone, PartialEq)]
pub struct Report {
    pub labels: Vec<i64>,
    pub distances: Vec<f64>,
    pub indices: Vec<usize>,
    pub predicted: i64,
}

impl From<Prediction<i64>> for Report {
    fn from(value: Prediction<i64>) -> Self {
        Self {
            labels: value.labels,
            distances: value.distances,
            indices: value.keys,
            predicted: value.predicted,
        }
    }
}
