//! Majority vote over neighbor labels.

use std::{collections::HashMap, hash::Hash};

use crate::{Error, Result};

/// Returns the most frequent label.
///
/// Labels tied for the highest count are resolved in favor of the one that
/// occurs first in `labels`.
pub fn mode<L, I>(labels: I) -> Result<L>
where
    L: Eq + Hash,
    I: IntoIterator<Item = L>,
{
    let mut labels = labels.into_iter().collect::<Vec<_>>();

    // Position of each distinct label's first occurrence, in first-seen order.
    let mut first_seen = Vec::<usize>::new();
    let mut counts = HashMap::<&L, usize>::new();

    for (i, label) in labels.iter().enumerate() {
        *counts.entry(label).or_insert_with(|| {
            first_seen.push(i);
            0
        }) += 1;
    }

    let winner = first_seen
        .iter()
        .map(|&i| (i, counts[&labels[i]]))
        .fold(None, |best: Option<(usize, usize)>, (i, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((i, count)),
        })
        .map(|(i, _)| i)
        .ok_or(Error::EmptyInput)?;

    Ok(labels.swap_remove(winner))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_majority() {
        assert_eq!(mode(vec![1, 1, 2, 3]), Ok(1));
        assert_eq!(mode(vec![3, 2, 2, 2, 1]), Ok(2));
    }

    #[test]
    fn tie_goes_to_first_seen() {
        assert_eq!(mode(vec![1, 2, 2, 3, 3]), Ok(2));
        assert_eq!(mode(vec![3, 3, 1, 2, 2]), Ok(3));
        assert_eq!(mode(vec!["b", "a", "a", "b"]), Ok("b"));
        assert_eq!(mode(vec![0, 1]), Ok(0));
    }

    #[test]
    fn later_label_overtakes() {
        assert_eq!(mode(vec![1, 2, 3, 3, 2, 3]), Ok(3));
        assert_eq!(mode(vec![5, 4, 4, 5, 4]), Ok(4));
    }

    #[test]
    fn single() {
        assert_eq!(mode(vec![String::from("yes")]), Ok(String::from("yes")));
    }

    #[test]
    fn empty() {
        assert_eq!(mode(Vec::<i64>::new()), Err(Error::EmptyInput));
    }

    #[test]
    fn borrowed_labels() {
        let labels = [String::from("x"), String::from("y"), String::from("y")];
        assert_eq!(mode(labels.iter()), Ok(&labels[1]));
    }
}
