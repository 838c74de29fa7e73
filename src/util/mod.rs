//! Small helpers used across the crate: a sequential byte cursor for
//! deserialization and an unbiased k-of-n sampler.

pub mod sample;
pub mod slicer;

pub use sample::take_n_random;
pub use slicer::Slicer;
