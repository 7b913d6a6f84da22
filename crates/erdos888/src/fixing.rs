//! Repairing a bad kernel quadruple by scaling with squares
//!
//! Multiplying an element by a square leaves its kernel alone and keeps a
//! square product square, but it can move the elements so that `ad = bc`.

use std::collections::BTreeSet;

use crate::arith::{cross_products, is_square, isqrt, product4, MAX_SIEVE_BOUND};
use crate::error::{Erdos888Error, Result};
use crate::hypergraph::Quadruple;

/// Most scale vectors a single repair search will try.
pub const MAX_SCALE_VECTORS: u128 = 100_000_000;

/// Search for scales `s_i` making `{k_i * s_i^2}` a good quadruple `<= bound`.
///
/// Kernels are deduplicated and sorted; exactly four are required. Scale
/// vectors are tried with the last kernel's scale varying fastest, and the
/// all-ones vector is skipped. The first candidate that has four distinct
/// elements, a square product and `ad = bc` is returned in kernel order.
///
/// Bounds above [`MAX_SIEVE_BOUND`] and searches over more than
/// [`MAX_SCALE_VECTORS`] vectors are rejected up front.
///
/// # Example
///
/// ```
/// use erdos888::fixing_opportunity;
///
/// let fixed = fixing_opportunity(210, &[3, 5, 14, 210]).unwrap();
/// assert_eq!(fixed, Some([3, 5, 126, 210]));
/// ```
pub fn fixing_opportunity(bound: u64, kernels: &[u64]) -> Result<Option<Quadruple>> {
    if bound > MAX_SIEVE_BOUND {
        return Err(Erdos888Error::BoundTooLarge {
            bound,
            max: MAX_SIEVE_BOUND,
        });
    }
    let kernels = distinct_kernels(kernels)?;
    let max_scales = kernels.map(|k| max_scale(k, bound));
    if max_scales.contains(&0) {
        return Ok(None);
    }
    let vectors: u128 = max_scales.iter().map(|&s| s as u128).product();
    if vectors > MAX_SCALE_VECTORS {
        return Err(Erdos888Error::SearchSpaceTooLarge {
            vectors,
            max: MAX_SCALE_VECTORS,
        });
    }

    let mut scales = [1u64; 4];
    while advance(&mut scales, &max_scales) {
        let mut candidate = [0u64; 4];
        for (slot, (&k, &s)) in candidate.iter_mut().zip(kernels.iter().zip(&scales)) {
            // k * s^2 <= bound by construction of max_scales.
            *slot = k * s * s;
        }

        let distinct: BTreeSet<u64> = candidate.iter().copied().collect();
        if distinct.len() != 4 {
            continue;
        }

        let mut sorted = candidate;
        sorted.sort_unstable();
        if !is_square(product4(&sorted)?) {
            continue;
        }
        let (ad, bc) = cross_products(&sorted);
        if ad == bc {
            tracing::debug!(?kernels, ?scales, ?candidate, "found fixing scales");
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

fn distinct_kernels(kernels: &[u64]) -> Result<Quadruple> {
    let distinct: BTreeSet<u64> = kernels.iter().copied().collect();
    if distinct.contains(&0) {
        return Err(Erdos888Error::ZeroElement("kernel"));
    }
    let sorted: Vec<u64> = distinct.into_iter().collect();
    let got = sorted.len();
    sorted
        .try_into()
        .map_err(|_| Erdos888Error::KernelCount { expected: 4, got })
}

/// Largest `s` with `k * s^2 <= bound`.
fn max_scale(k: u64, bound: u64) -> u64 {
    isqrt((bound / k) as u128) as u64
}

/// Step `scales` to the next vector in product order. Returns false once
/// every vector has been produced.
fn advance(scales: &mut Quadruple, max_scales: &Quadruple) -> bool {
    for i in (0..scales.len()).rev() {
        if scales[i] < max_scales[i] {
            scales[i] += 1;
            return true;
        }
        scales[i] = 1;
    }
    false
}
