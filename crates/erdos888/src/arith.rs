//! Number-theoretic primitives
//!
//! Everything above single-element size is computed in `u128` with checked
//! multiplication, so products of four elements never wrap silently.

use crate::error::{Erdos888Error, Result};
use crate::hypergraph::Quadruple;

/// Largest bound accepted by [`sieve_square_free`].
pub const MAX_SIEVE_BOUND: u64 = 10_000_000;

/// Greatest common divisor.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Floor of the square root of `n`, exact for every `u128`.
pub fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }

    // Float estimate, then correct in both directions.
    let mut root = (n as f64).sqrt() as u128;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1)
        .checked_mul(root + 1)
        .is_some_and(|sq| sq <= n)
    {
        root += 1;
    }
    root
}

/// Whether `n` is a perfect square.
pub fn is_square(n: u128) -> bool {
    let root = isqrt(n);
    root * root == n
}

/// All square-free integers in `1..=n`, ascending.
///
/// # Example
///
/// ```
/// use erdos888::arith::sieve_square_free;
///
/// assert_eq!(
///     sieve_square_free(12).unwrap(),
///     vec![1, 2, 3, 5, 6, 7, 10, 11]
/// );
/// ```
pub fn sieve_square_free(n: u64) -> Result<Vec<u64>> {
    if n > MAX_SIEVE_BOUND {
        return Err(Erdos888Error::BoundTooLarge {
            bound: n,
            max: MAX_SIEVE_BOUND,
        });
    }

    let len = n as usize + 1;
    let mut square_free = vec![true; len];
    let mut i = 2usize;
    while i * i < len {
        for multiple in (i * i..len).step_by(i * i) {
            square_free[multiple] = false;
        }
        i += 1;
    }

    Ok((1..len)
        .filter(|&x| square_free[x])
        .map(|x| x as u64)
        .collect())
}

/// Square-free part of `m`: the unique square-free `k` with `m = k * s^2`.
///
/// This is the kernel `kappa(m)` used throughout: scaling an element by a
/// square leaves it unchanged. `square_free_part(0)` is 0.
///
/// Trial division, so the cost grows with the square root of the largest
/// prime factor: instant for `m <= MAX_SIEVE_BOUND`, up to ~4e9 steps for a
/// large prime `u64`. Callers taking user input cap it first.
///
/// ```
/// use erdos888::arith::square_free_part;
///
/// assert_eq!(square_free_part(126), 14);
/// assert_eq!(square_free_part(72), 2);
/// ```
pub fn square_free_part(m: u64) -> u64 {
    if m == 0 {
        return 0;
    }

    let mut part = 1;
    let mut rest = m;
    let mut d = 2;
    while d <= rest / d {
        let mut odd = false;
        while rest % d == 0 {
            rest /= d;
            odd = !odd;
        }
        if odd {
            part *= d;
        }
        d += 1;
    }
    if rest > 1 {
        part *= rest;
    }
    part
}

/// `core(a, b) = ab / gcd(a, b)^2`.
pub fn core(a: u64, b: u64) -> Result<u64> {
    if a == 0 || b == 0 {
        return Err(Erdos888Error::ZeroElement("core argument"));
    }
    let g = gcd(a, b);
    (a / g)
        .checked_mul(b / g)
        .ok_or(Erdos888Error::Overflow("core"))
}

/// Product of a quadruple.
pub fn product4(q: &Quadruple) -> Result<u128> {
    q.iter().try_fold(1u128, |acc, &x| {
        acc.checked_mul(x as u128)
            .ok_or(Erdos888Error::Overflow("quadruple product"))
    })
}

/// `(a * d, b * c)` for a sorted quadruple `[a, b, c, d]`.
pub fn cross_products(q: &Quadruple) -> (u128, u128) {
    (q[0] as u128 * q[3] as u128, q[1] as u128 * q[2] as u128)
}
