use crate::{Error, Result};

/// Straight-line distance between two points.
///
/// Both slices must have the same length, otherwise
/// [`Error::DimensionMismatch`] is returned with `a`'s length as the expected
/// dimension.
pub fn euclidean(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    Ok(a.iter()
        .zip(b.iter())
        .fold(0.0, |acc, (lhs, rhs)| acc + (lhs - rhs).powi(2))
        .sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx_eq;

    #[test]
    fn single_dimension() {
        assert_eq!(euclidean(&[31.0], &[33.0]), Ok(2.0));
        assert_eq!(euclidean(&[45.0], &[33.0]), Ok(12.0));
    }

    #[test]
    fn pythagoras() {
        assert_eq!(euclidean(&[0.0, 0.0], &[3.0, 4.0]), Ok(5.0));
        let d = euclidean(&[1.0, 2.0, 3.0], &[4.0, 6.0, 3.0]).unwrap();
        assert!(approx_eq(d, 5.0));
    }

    #[test]
    fn symmetric() {
        let points = [
            vec![0.5, -1.25, 8.0],
            vec![3.0, 0.0, -2.5],
            vec![-7.75, 4.0, 1.0],
        ];
        for a in &points {
            for b in &points {
                assert_eq!(euclidean(a, b), euclidean(b, a));
            }
        }
    }

    #[test]
    fn identity_and_non_negative() {
        let a = [1.5, -2.0, 9.25];
        let b = [-3.0, 4.0, 0.0];
        assert_eq!(euclidean(&a, &a), Ok(0.0));
        assert!(euclidean(&a, &b).unwrap() >= 0.0);
    }

    #[test]
    fn mismatch() {
        assert_eq!(
            euclidean(&[33.0, 5.0], &[22.0]),
            Err(Error::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            euclidean(&[22.0], &[33.0, 5.0]),
            Err(Error::DimensionMismatch {
                expected: 1,
                actual: 2
            })
        );
    }
}
