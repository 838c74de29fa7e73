//! Unbiased k-of-n sampling.

use alloc::vec::Vec;

use crate::entropy::{uniform_below, EntropySource};
use crate::error::{DomainError, Error};

/// Takes `n` distinct elements from a shuffled copy of `elements`.
///
/// A partial Fisher-Yates shuffle over the first `n` positions: every
/// n-subset (and every ordering of it) is equally likely, and the cost is a
/// single pass with no collision retries.
pub fn take_n_random<T: Clone, R: EntropySource + ?Sized>(
    n: usize,
    elements: &[T],
    rng: &mut R,
) -> Result<Vec<T>, Error> {
    if n > elements.len() {
        return Err(DomainError::TakeExceedsLength.into());
    }

    let mut shuf: Vec<T> = elements.to_vec();
    let len = shuf.len();
    for i in 0..n {
        let j = i + uniform_below(rng, (len - i) as u32)? as usize;
        shuf.swap(i, j);
    }
    shuf.truncate(n);
    Ok(shuf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::testing::MockEntropy;

    #[test]
    fn test_take_all() {
        let mut rng = MockEntropy { fill_val: 7 };
        let arr = [1, 2, 3, 4, 5];
        let mut ret = take_n_random(5, &arr, &mut rng).unwrap();
        assert_eq!(ret.len(), 5);
        ret.sort_unstable();
        assert_eq!(ret, arr);
    }

    #[test]
    fn test_take_some() {
        let mut rng = MockEntropy { fill_val: 3 };
        let arr = [1, 2, 3, 4, 5];
        let ret = take_n_random(3, &arr, &mut rng).unwrap();
        assert_eq!(ret.len(), 3);
        assert!(ret.iter().all(|v| arr.contains(v)));
        for (i, a) in ret.iter().enumerate() {
            assert!(!ret[i + 1..].contains(a), "duplicate element {}", a);
        }
    }

    #[test]
    fn test_take_none() {
        let mut rng = MockEntropy { fill_val: 0 };
        let ret = take_n_random(0, &[1, 2, 3], &mut rng).unwrap();
        assert!(ret.is_empty());
    }

    #[test]
    fn test_take_too_many() {
        let mut rng = MockEntropy { fill_val: 0 };
        assert_eq!(
            take_n_random(4, &[1, 2, 3], &mut rng),
            Err(Error::Domain(DomainError::TakeExceedsLength))
        );
    }
}
