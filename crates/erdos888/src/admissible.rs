//! The Erdős #888 admissibility condition
//!
//! A set is admissible when every `a <= b <= c <= d` drawn from it with a
//! perfect-square product satisfies `ad = bc`. Checked here: all quadruples
//! of distinct elements, and the repeated forms `(x, x, x, y)` and
//! `(x, y, y, y)`, which reduce to "`xy` is a perfect square".

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::arith::{cross_products, is_square, product4};
use crate::error::{Erdos888Error, Result};
use crate::hypergraph::Quadruple;

/// A witness that a set is not admissible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Four distinct elements with square product and `ad != bc`
    Quadruple {
        /// Sorted elements `[a, b, c, d]`
        elements: Quadruple,
    },

    /// Two distinct elements whose product is a perfect square
    SquarePair {
        /// Smaller element
        x: u64,
        /// Larger element
        y: u64,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Quadruple { elements: [a, b, c, d] } => write!(
                f,
                "{{{a}, {b}, {c}, {d}}} has square product but ad = {} != bc = {}",
                *a as u128 * *d as u128,
                *b as u128 * *c as u128
            ),
            Violation::SquarePair { x, y } => {
                write!(f, "{x} * {y} is a perfect square")
            }
        }
    }
}

/// Find the first violation of the admissibility condition, if any.
///
/// Duplicates in `set` are ignored. Quadruples are examined before pairs,
/// each in lexicographic order of the sorted elements.
///
/// # Example
///
/// ```
/// use erdos888::admissible::{find_violation, Violation};
///
/// let found = find_violation(&[3, 5, 14, 210]).unwrap();
/// assert_eq!(found, Some(Violation::Quadruple { elements: [3, 5, 14, 210] }));
/// ```
pub fn find_violation(set: &[u64]) -> Result<Option<Violation>> {
    let elements = normalize(set)?;
    let m = elements.len();

    for i in 0..m {
        for j in i + 1..m {
            for k in j + 1..m {
                for l in k + 1..m {
                    let quad = [elements[i], elements[j], elements[k], elements[l]];
                    if is_square(product4(&quad)?) {
                        let (ad, bc) = cross_products(&quad);
                        if ad != bc {
                            return Ok(Some(Violation::Quadruple { elements: quad }));
                        }
                    }
                }
            }
        }
    }

    for (i, &x) in elements.iter().enumerate() {
        for &y in &elements[i + 1..] {
            // x^3 y and x y^3 are squares exactly when x y is.
            if is_square(x as u128 * y as u128) {
                return Ok(Some(Violation::SquarePair { x, y }));
            }
        }
    }

    Ok(None)
}

/// Whether `set` satisfies the admissibility condition.
pub fn is_admissible(set: &[u64]) -> Result<bool> {
    Ok(find_violation(set)?.is_none())
}

fn normalize(set: &[u64]) -> Result<Vec<u64>> {
    let elements: BTreeSet<u64> = set.iter().copied().collect();
    if elements.contains(&0) {
        return Err(Erdos888Error::ZeroElement("set element"));
    }
    Ok(elements.into_iter().collect())
}
