//! Splitting a secret into shares.
//!
//! # Security
//! - **Constant-Time**: uses `GF256` arithmetic, which is branch-free on secret bytes.
//! - **Zeroization**: polynomial coefficients and in-progress share buffers are wiped,
//!   including on an early return.
//! - **Distinct x-coordinates**: chosen as a random n-subset of `1..=255`, never 0.

use alloc::vec::Vec;
use zeroize::Zeroizing;

use crate::core::gf256::ORDER;
use crate::entropy::EntropySource;
use crate::error::{DomainError, Error};
use crate::mpc::{polynomial::Polynomial, share::Share};
use crate::util::take_n_random;

/// Largest supported share count. x ranges over the 255 nonzero field elements,
/// and `n` is kept strictly below that.
pub const MAX_SHARES: u8 = (ORDER - 1) as u8;

/// Splits `data` into `n` shares, any `t` of which reconstruct it.
///
/// Each share is one byte longer than `data`: `(y[0..len(data)], x)` for a
/// unique `x` in `1..=255`.
///
/// # Failure Modes
/// - `t > n`: `ThresholdExceedsCount`
/// - `t < 2`: `ThresholdTooLow`
/// - empty `data`: `EmptySecret`
/// - `n > 254`: `TooManyShares`
/// - entropy source failure: `Error::Entropy`
pub fn split<R: EntropySource + ?Sized>(
    data: &[u8],
    n: u8,
    t: u8,
    rng: &mut R,
) -> Result<Vec<Share>, Error> {
    if t > n {
        return Err(DomainError::ThresholdExceedsCount.into());
    }
    if t < 2 {
        return Err(DomainError::ThresholdTooLow.into());
    }
    if data.is_empty() {
        return Err(DomainError::EmptySecret.into());
    }
    if n > MAX_SHARES {
        return Err(DomainError::TooManyShares.into());
    }

    log::debug!("split: t={} n={} secret_len={}", t, n, data.len());

    // 0 ..= 254, shifted to 1 ..= 255 below.
    let candidates: Vec<u8> = (0..ORDER as u8).collect();
    let xs: Vec<u8> = take_n_random(n as usize, &candidates, rng)?
        .into_iter()
        .map(|x| x + 1)
        .collect();

    let mut buffers: Vec<Zeroizing<Vec<u8>>> = xs
        .iter()
        .map(|&x| {
            let mut buf = Zeroizing::new(alloc::vec![0u8; data.len() + 1]);
            buf[data.len()] = x;
            buf
        })
        .collect();

    for (idx, &byte) in data.iter().enumerate() {
        let p = Polynomial::random(byte, t - 1, rng)?;
        for (buf, &x) in buffers.iter_mut().zip(xs.iter()) {
            buf[idx] = p.evaluate(x);
        }
    }

    Ok(buffers
        .iter_mut()
        .map(|buf| Share::from_bytes(core::mem::take(&mut **buf)))
        .collect())
}
