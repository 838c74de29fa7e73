//! Polynomials over GF(256).
//!
//! A `Polynomial` is created per secret byte during a split and dropped as soon
//! as its evaluations are written out. Its coefficients are secret-equivalent:
//! they are zeroized on drop and never printed.

use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::gf256::GF256;
use crate::entropy::{EntropyError, EntropySource};
use crate::error::DomainError;

/// A polynomial `c[0] + c[1]*x + ... + c[d]*x^d`, where `c[0]` is the intercept.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Polynomial {
    coefficients: Vec<GF256>,
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("degree", &self.degree())
            .field("coefficients", &"***SENSITIVE***")
            .finish()
    }
}

impl Polynomial {
    /// Constructs a random polynomial of degree `degree` with `f(0) == intercept`.
    pub fn random<R: EntropySource + ?Sized>(
        intercept: u8,
        degree: u8,
        rng: &mut R,
    ) -> Result<Self, EntropyError> {
        let mut coefficients = Vec::with_capacity(degree as usize + 1);
        coefficients.push(GF256(intercept));
        coefficients.resize(degree as usize + 1, GF256::ZERO);

        let mut random_buf = zeroize::Zeroizing::new(alloc::vec![0u8; degree as usize]);
        if let Err(e) = rng.fill(&mut random_buf) {
            coefficients.zeroize();
            return Err(e);
        }
        for (c, &r) in coefficients[1..].iter_mut().zip(random_buf.iter()) {
            *c = GF256(r);
        }

        Ok(Self { coefficients })
    }

    /// Builds a polynomial from explicit coefficients, intercept first.
    pub fn from_coefficients(coefficients: Vec<GF256>) -> Self {
        Self { coefficients }
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluates the polynomial at `x` via Horner's method.
    ///
    /// `x == 0` returns the intercept directly; x = 0 is never a share coordinate.
    pub fn evaluate(&self, x: u8) -> u8 {
        let Some((&top, rest)) = self.coefficients.split_last() else {
            return 0;
        };
        if x == 0 {
            return self.coefficients[0].0;
        }

        let x = GF256(x);
        let mut out = top;
        for &c in rest.iter().rev() {
            out = out * x + c;
        }
        out.0
    }

    /// Lagrange interpolation of the samples `(xs[i], ys[i])`, evaluated at `x`.
    ///
    /// Every `xs[i]` must be distinct; a repeated x-coordinate surfaces as
    /// `DomainError::DivisionByZero`. Cost is O(k^2) field operations for k samples.
    pub fn interpolate(xs: &[u8], ys: &[u8], x: u8) -> Result<u8, DomainError> {
        if xs.len() != ys.len() {
            return Err(DomainError::SampleLengthMismatch);
        }

        let x = GF256(x);
        let mut result = GF256::ZERO;
        for (i, (&xi, &yi)) in xs.iter().zip(ys.iter()).enumerate() {
            let xi = GF256(xi);
            let mut basis = GF256::ONE;
            for (j, &xj) in xs.iter().enumerate() {
                if i == j {
                    continue;
                }
                let xj = GF256(xj);
                basis *= (x + xj).div(xi + xj)?;
            }
            result += GF256(yi) * basis;
        }

        Ok(result.0)
    }
}
