//! Period of a class from return paths in successive matrix powers.

use chainscope_matrix::Matrix;
use tracing::trace;

/// Greatest common divisor of two integers; `gcd(0, b) == b`.
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Greatest common divisor of all values, or 0 for an empty slice.
pub fn gcd_all(values: &[usize]) -> usize {
    values.iter().fold(0, |acc, &v| gcd(acc, v))
}

/// Computes the period of a class from its transition submatrix.
///
/// Walks `P^1 .. P^n` for an `n`-state class and records every power `k`
/// with a positive diagonal entry, i.e. a return path of length `k`. The
/// period is the gcd of those lengths: 1 for an aperiodic class, `d > 1`
/// for a periodic one. A class with no return path within `n` steps (a
/// single state without a self-loop) yields 0.
#[tracing::instrument(skip_all, fields(n = sub.size()))]
pub fn period(sub: &Matrix) -> usize {
    let n = sub.size();
    let mut lengths = Vec::new();
    let mut power = sub.clone();
    for k in 1..=n {
        if power.diagonal().any(|d| d > 0.0) {
            lengths.push(k);
        }
        if k < n {
            power = power
                .multiply(sub)
                .expect("powers of a matrix share its size");
        }
    }
    let d = gcd_all(&lengths);
    trace!(?lengths, period = d, "return lengths collected");
    d
}
