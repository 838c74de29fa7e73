#![forbid(unsafe_code)]
// Constant-time helpers.
// - No early exit on the first differing byte; the loop length depends only on public lengths.

/// Constant-time equality for byte slices.
///
/// The length difference is folded into the accumulator, so unequal lengths
/// compare as unequal without short-circuiting on the shorter slice.
#[inline(never)]
pub fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    let (short, long) = if a.len() < b.len() { (a, b) } else { (b, a) };

    let mut acc = (a.len() ^ b.len()) as u64;
    for (x, y) in short.iter().zip(long.iter()) {
        acc |= u64::from(x ^ y);
    }
    acc == 0
}
