//! Field arithmetic and constant-time helpers shared by every layer.

pub mod ct;
pub mod gf256;
