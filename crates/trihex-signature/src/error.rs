//! Error types for signature arithmetic.

use thiserror::Error;

use crate::Signature;

/// Result type for signature operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the signature transforms.
///
/// Every operation is a pure function of its integer inputs, so an error
/// recurs identically on retry. It marks a malformed or out-of-domain
/// signature, never a transient condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No `x` in `[1, n]` satisfies `a·x ≡ r (mod n)`.
    #[error("no solution to {a}·x ≡ {r} (mod {n}) in [1, {n}]")]
    NoSolution {
        /// Coefficient
        a: u64,
        /// Right-hand side
        r: u64,
        /// Modulus
        n: u64,
    },

    /// The belt-count division in the alternate transform left a remainder.
    #[error("non-integral belt count for {signature}: {numerator} / {denominator}")]
    NonIntegralTransform {
        /// Input signature of the transform
        signature: Signature,
        /// Dividend `h - 2n'`
        numerator: i128,
        /// Divisor `2n' + 2`
        denominator: i128,
    },

    /// Triple violates `0 ≤ k ≤ n`.
    #[error("invalid signature ({n}, {r}, {k}): offset must not exceed spine length")]
    InvalidSignature {
        /// Spine length
        n: u64,
        /// Belt count
        r: u64,
        /// Offset
        k: u64,
    },

    /// Vertex count or transform arithmetic left the `u64` range.
    #[error("arithmetic overflow for {signature}")]
    Overflow {
        /// Offending signature
        signature: Signature,
    },
}
