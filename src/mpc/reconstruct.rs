//! Secret reconstruction from shares.
//!
//! Lagrange interpolation at x = 0, one secret byte at a time.
//!
//! Combining fewer shares than the split's threshold, or shares from
//! different splits, returns a secret of the right length with the wrong
//! contents. That is a property of the math, not a detectable error: nothing
//! in a raw share records `t` or which split it came from.

use alloc::vec::Vec;
use zeroize::Zeroizing;

use crate::error::DomainError;
use crate::mpc::polynomial::Polynomial;

/// Recombines a secret from shares produced by [`crate::mpc::split`].
///
/// # Failure Modes
/// - fewer than 2 shares: `NotEnoughShares`
/// - shares of differing lengths: `UnequalShareLengths`
/// - zero-length shares: `EmptyShare`
/// - repeated x-coordinate: `DuplicateX`
pub fn combine<S: AsRef<[u8]>>(shares: &[S]) -> Result<Zeroizing<Vec<u8>>, DomainError> {
    if shares.len() < 2 {
        return Err(DomainError::NotEnoughShares);
    }

    let share_len = shares[0].as_ref().len();
    if shares.iter().any(|s| s.as_ref().len() != share_len) {
        return Err(DomainError::UnequalShareLengths);
    }
    if share_len == 0 {
        return Err(DomainError::EmptyShare);
    }

    let secret_len = share_len - 1;
    let mut xs: Vec<u8> = Vec::with_capacity(shares.len());
    // x-coordinates are public, so a plain membership check is fine here.
    for share in shares {
        let x = share.as_ref()[secret_len];
        if xs.contains(&x) {
            return Err(DomainError::DuplicateX);
        }
        xs.push(x);
    }

    let mut secret = Zeroizing::new(Vec::with_capacity(secret_len));
    let mut ys = Zeroizing::new(alloc::vec![0u8; shares.len()]);
    for c in 0..secret_len {
        for (y, share) in ys.iter_mut().zip(shares.iter()) {
            *y = share.as_ref()[c];
        }
        secret.push(Polynomial::interpolate(&xs, &ys, 0)?);
    }

    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::testing::MockEntropy;
    use crate::mpc::{share::Share, split};

    const HELLO: [u8; 5] = [0x68, 0x65, 0x6c, 0x6c, 0x6f];

    // "hello" split 3-of-5 by an independent implementation using the same field tables.
    const KNOWN_SHARES: [[u8; 6]; 5] = [
        [0xe7, 0xa3, 0xc6, 0xab, 0xde, 0x58],
        [0xc1, 0xf2, 0x5f, 0x83, 0x62, 0x7a],
        [0xd5, 0xf0, 0x58, 0x2a, 0xf1, 0x74],
        [0x71, 0x47, 0x25, 0x86, 0x35, 0x8b],
        [0x6b, 0xbe, 0x70, 0x7b, 0xf4, 0xc3],
    ];

    #[test]
    fn test_known_shares_three_of_five() {
        assert_eq!(combine(&KNOWN_SHARES[0..3]).unwrap().as_slice(), &HELLO);
        assert_eq!(combine(&KNOWN_SHARES[1..4]).unwrap().as_slice(), &HELLO);
        assert_eq!(combine(&KNOWN_SHARES[2..5]).unwrap().as_slice(), &HELLO);
        let reordered = [KNOWN_SHARES[4], KNOWN_SHARES[2], KNOWN_SHARES[0]];
        assert_eq!(combine(&reordered).unwrap().as_slice(), &HELLO);
    }

    #[test]
    fn test_known_shares_every_triple() {
        for a in 0..5 {
            for b in 0..5 {
                for c in 0..5 {
                    if a == b || b == c || a == c {
                        continue;
                    }
                    let subset = [KNOWN_SHARES[a], KNOWN_SHARES[b], KNOWN_SHARES[c]];
                    assert_eq!(combine(&subset).unwrap().as_slice(), &HELLO, "{} {} {}", a, b, c);
                }
            }
        }
    }

    #[test]
    fn test_known_shares_all_five() {
        assert_eq!(combine(&KNOWN_SHARES).unwrap().as_slice(), &HELLO);
    }

    #[test]
    fn test_known_shares_below_threshold() {
        let reassembled = combine(&KNOWN_SHARES[0..2]).unwrap();
        assert_eq!(reassembled.len(), 5);
        assert_ne!(reassembled.as_slice(), &HELLO);
    }

    #[test]
    fn test_split_then_combine() {
        let mut rng = MockEntropy { fill_val: 0x10 };
        let secret = alloc::vec![0x42, 0x99, 0xAB];
        let shares = split(&secret, 5, 3, &mut rng).unwrap();

        assert_eq!(combine(&shares).unwrap().as_slice(), secret.as_slice());
        assert_eq!(combine(&shares[0..3]).unwrap().as_slice(), secret.as_slice());
        let subset = [shares[1].clone(), shares[3].clone(), shares[4].clone()];
        assert_eq!(combine(&subset).unwrap().as_slice(), secret.as_slice());
    }

    #[test]
    fn test_reconstruct_errors() {
        let none: [Share; 0] = [];
        assert_eq!(combine(&none), Err(DomainError::NotEnoughShares));
        assert_eq!(combine(&KNOWN_SHARES[0..1]), Err(DomainError::NotEnoughShares));

        let duplicate_x: [&[u8]; 2] = [&[0x01, 0x02, 0x10], &[0x03, 0x04, 0x10]];
        assert_eq!(combine(&duplicate_x), Err(DomainError::DuplicateX));

        let mismatched: [&[u8]; 2] = [&[0x01, 0x02, 0x03], &[0x04, 0x05]];
        assert_eq!(combine(&mismatched), Err(DomainError::UnequalShareLengths));

        let empty: [&[u8]; 2] = [&[], &[]];
        assert_eq!(combine(&empty), Err(DomainError::EmptyShare));
    }

    mod roundtrip {
        use super::*;
        use crate::entropy::OsEntropy;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn any_threshold_subset_recombines(
                secret in prop::collection::vec(any::<u8>(), 1..64),
                t in 2u8..16,
                extra in 0u8..16,
                offset in 0usize..16,
            ) {
                let n = t + extra;
                let shares = split(&secret, n, t, &mut OsEntropy::new()).unwrap();
                prop_assert_eq!(shares.len(), n as usize);

                // A window of t shares, starting anywhere in [0, n - t].
                let start = offset % (extra as usize + 1);
                let subset = &shares[start..start + t as usize];
                let recombined = combine(subset).unwrap();
                prop_assert_eq!(recombined.as_slice(), secret.as_slice());
            }

            #[test]
            fn below_threshold_keeps_length(
                secret in prop::collection::vec(any::<u8>(), 1..64),
                t in 3u8..16,
            ) {
                let shares = split(&secret, t, t, &mut OsEntropy::new()).unwrap();
                let recombined = combine(&shares[..t as usize - 1]).unwrap();
                prop_assert_eq!(recombined.len(), secret.len());
            }
        }
    }
}
