//! Shamir's Secret Sharing over GF(256).
//!
//! # Components
//! - `polynomial`: random polynomial construction, Horner evaluation, Lagrange interpolation.
//! - `share`: one share in its wire form, `y[0..len(secret)] ‖ x`.
//! - `quorum`: splitting a secret into `n` shares with threshold `t`.
//! - `reconstruct`: recombining shares by interpolating every byte at x = 0.
//!
//! # Security
//! - **Constant-Time**: all arithmetic on secret bytes goes through the branch-free `GF256` ops.
//! - **Zeroization**: polynomials, shares and recombined secrets are wiped on drop.
//! - **No Integrity**: shares carry no authentication. Combining fewer than `t` shares,
//!   or shares from different splits, silently yields the wrong secret. Use
//!   [`crate::protocol`] when that matters.

pub mod polynomial;
pub mod quorum;
pub mod reconstruct;
pub mod share;

pub use quorum::split;
pub use reconstruct::combine;
