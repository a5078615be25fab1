use std::cmp::Ordering;

use crate::{Idx, LabeledPoint};

/// A dataset row paired with its distance to the query.
///
/// Neighbors order by distance, and equally distant neighbors by their
/// position in the dataset.
#[derive(Debug)]
pub struct Neighbor<'a, L> {
    distance: f64,
    key: Idx,
    point: &'a LabeledPoint<L>,
}

impl<'a, L> Clone for Neighbor<'a, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, L> Copy for Neighbor<'a, L> {}

impl<'a, L> Neighbor<'a, L> {
    pub const fn new(distance: f64, key: Idx, point: &'a LabeledPoint<L>) -> Self {
        Self {
            distance,
            key,
            point,
        }
    }

    pub const fn distance(&self) -> f64 {
        self.distance
    }

    pub const fn key(&self) -> Idx {
        self.key
    }

    pub const fn point(&self) -> &'a LabeledPoint<L> {
        self.point
    }

    pub const fn label(&self) -> &'a L {
        &self.point.label
    }
}

impl<'a, L> PartialEq for Neighbor<'a, L> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<'a, L> Eq for Neighbor<'a, L> {}

impl<'a, L> PartialOrd for Neighbor<'a, L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, L> Ord for Neighbor<'a, L> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.distance.total_cmp(&other.distance) {
            Ordering::Equal => self.key.cmp(&other.key),
            ordering => ordering,
        }
    }
}
