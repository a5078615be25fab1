use std::ops::Index;

use crate::{Error, Idx, Result};

/// A training sample: its measured features and the class it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoint<L> {
    pub features: Vec<f64>,
    pub label: L,
}

impl<L> LabeledPoint<L> {
    pub fn new(features: Vec<f64>, label: L) -> Self {
        Self { features, label }
    }

    pub fn dimensions(&self) -> usize {
        self.features.len()
    }
}

/// Ordered collection of labeled points.
///
/// Rows are kept in insertion order, which is also the order used to break
/// ties between equally distant neighbors. Dimensions are not checked here;
/// a mismatch surfaces when the dataset is queried.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<L> {
    points: Vec<LabeledPoint<L>>,
}

impl<L> Default for Dataset<L> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<L> Dataset<L> {
    pub const fn empty() -> Self {
        Self { points: vec![] }
    }

    pub fn new(points: Vec<LabeledPoint<L>>) -> Self {
        Self { points }
    }

    pub fn push(&mut self, point: LabeledPoint<L>) {
        self.points.push(point);
    }

    pub fn get(&self, key: Idx) -> Option<&LabeledPoint<L>> {
        self.points.get(key)
    }

    pub fn size(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[LabeledPoint<L>] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabeledPoint<L>> {
        self.points.iter()
    }
}

impl Dataset<i64> {
    /// Builds a dataset from raw `[feature..., label]` rows.
    ///
    /// The trailing value of each row is the label and must be a whole number.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: AsRef<[f64]>,
    {
        rows.into_iter()
            .enumerate()
            .map(|(row, values)| {
                let (label, features) =
                    values
                        .as_ref()
                        .split_last()
                        .ok_or_else(|| Error::InvalidRow {
                            row,
                            reason: String::from("row has no label"),
                        })?;

                if label.fract() != 0.0 || !label.is_finite() {
                    return Err(Error::InvalidRow {
                        row,
                        reason: format!("label {label} is not a whole number"),
                    });
                }
                // `i64::MAX as f64` rounds up to 2^63, which does not fit.
                if *label >= i64::MAX as f64 || *label < i64::MIN as f64 {
                    return Err(Error::InvalidRow {
                        row,
                        reason: format!("label {label} does not fit in an i64"),
                    });
                }

                Ok(LabeledPoint::new(features.to_vec(), *label as i64))
            })
            .collect()
    }
}

impl<L> Index<Idx> for Dataset<L> {
    type Output = LabeledPoint<L>;

    fn index(&self, key: Idx) -> &Self::Output {
        &self.points[key]
    }
}

impl<L> FromIterator<LabeledPoint<L>> for Dataset<L> {
    fn from_iter<T: IntoIterator<Item = LabeledPoint<L>>>(iter: T) -> Self {
        let mut this = Self::empty();
        this.extend(iter);
        this
    }
}

impl<L> Extend<LabeledPoint<L>> for Dataset<L> {
    fn extend<T: IntoIterator<Item = LabeledPoint<L>>>(&mut self, iter: T) {
        for p in iter {
            self.push(p);
        }
    }
}

impl<'a, L> IntoIterator for &'a Dataset<L> {
    type Item = &'a LabeledPoint<L>;
    type IntoIter = std::slice::Iter<'a, LabeledPoint<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
