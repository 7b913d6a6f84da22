//! Kernel counterexample verification
//!
//! An admissible quadruple can have a kernel set that is not admissible:
//! `{3, 5, 126, 210}` is good, its kernels `{3, 5, 14, 210}` are not. The
//! report checks both sides and whether the kernels can be scaled back to
//! a good quadruple within the bound.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::arith::{
    cross_products, is_square, isqrt, product4, square_free_part, MAX_SIEVE_BOUND,
};
use crate::error::{Erdos888Error, Result};
use crate::fixing::fixing_opportunity;
use crate::hypergraph::Quadruple;

/// The quadruple behind Theorem 3.
pub const THEOREM_3_SET: Quadruple = [3, 5, 126, 210];

/// The bound the Theorem 3 kernels are repaired within.
pub const THEOREM_3_BOUND: u64 = 210;

const RULE_WIDTH: usize = 60;

/// Arithmetic facts about one sorted quadruple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuadrupleCheck {
    /// Sorted elements `[a, b, c, d]`
    pub elements: Quadruple,

    /// `abcd`
    pub product: u128,

    /// Square root of the product when it is a perfect square
    pub root: Option<u128>,

    /// `ad`
    pub ad: u128,

    /// `bc`
    pub bc: u128,
}

impl QuadrupleCheck {
    /// Evaluate a quadruple (sorted internally).
    pub fn new(mut elements: Quadruple) -> Result<Self> {
        elements.sort_unstable();
        let product = product4(&elements)?;
        let root = is_square(product).then(|| isqrt(product));
        let (ad, bc) = cross_products(&elements);
        Ok(Self {
            elements,
            product,
            root,
            ad,
            bc,
        })
    }

    /// Whether the quadruple alone satisfies the #888 condition.
    pub fn admissible(&self) -> bool {
        self.root.is_none() || self.ad == self.bc
    }
}

/// Result of checking a quadruple against its kernel set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KernelReport {
    /// The quadruple as given
    pub set: Quadruple,

    /// Bound used for the repair search
    pub bound: u64,

    /// Facts about the quadruple
    pub set_check: QuadrupleCheck,

    /// Facts about its kernel quadruple
    pub kernel_check: QuadrupleCheck,

    /// A square-scaled repair of the kernels, if one exists
    pub fix: Option<Quadruple>,
}

impl KernelReport {
    /// Heading of the printed report.
    pub fn title(&self) -> &'static str {
        if self.set == THEOREM_3_SET {
            "VERIFICATION OF THEOREM 3"
        } else {
            "VERIFICATION OF KERNEL COUNTEREXAMPLE"
        }
    }

    /// The set is good but its kernels are bad.
    pub fn is_counterexample(&self) -> bool {
        self.set_check.admissible() && !self.kernel_check.admissible()
    }
}

/// Check `set`, its kernels, and whether the kernels can be repaired
/// within `bound`.
///
/// The elements of `set` must be nonzero, at most [`MAX_SIEVE_BOUND`]
/// (kernels are found by trial division), and have four distinct kernels.
pub fn verify_kernel_counterexample(set: Quadruple, bound: u64) -> Result<KernelReport> {
    if set.contains(&0) {
        return Err(Erdos888Error::ZeroElement("set element"));
    }
    if let Some(&largest) = set.iter().max().filter(|&&x| x > MAX_SIEVE_BOUND) {
        return Err(Erdos888Error::BoundTooLarge {
            bound: largest,
            max: MAX_SIEVE_BOUND,
        });
    }

    let kernels: BTreeSet<u64> = set.iter().map(|&x| square_free_part(x)).collect();
    let got = kernels.len();
    let kernels: Quadruple = kernels
        .into_iter()
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| Erdos888Error::KernelCount { expected: 4, got })?;

    let report = KernelReport {
        set,
        bound,
        set_check: QuadrupleCheck::new(set)?,
        kernel_check: QuadrupleCheck::new(kernels)?,
        fix: fixing_opportunity(bound, &kernels)?,
    };
    tracing::info!(
        ?set,
        ?kernels,
        counterexample = report.is_counterexample(),
        fixable = report.fix.is_some(),
        "verified kernel quadruple"
    );
    Ok(report)
}

/// [`verify_kernel_counterexample`] on [`THEOREM_3_SET`].
pub fn verify_theorem_3() -> Result<KernelReport> {
    verify_kernel_counterexample(THEOREM_3_SET, THEOREM_3_BOUND)
}

fn write_set(f: &mut fmt::Formatter<'_>, elements: &[u64]) -> fmt::Result {
    write!(f, "{{")?;
    for (i, x) in elements.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{x}")?;
    }
    write!(f, "}}")
}

fn write_check(f: &mut fmt::Formatter<'_>, label: &str, check: &QuadrupleCheck) -> fmt::Result {
    write!(f, "Checking {label} = ")?;
    write_set(f, &check.elements)?;
    writeln!(f, ":")?;
    match check.root {
        Some(root) => writeln!(f, "  Product: {} = {root}^2", check.product)?,
        None => writeln!(f, "  Product: {} (not a square)", check.product)?,
    }
    writeln!(f, "  ad = {}, bc = {}", check.ad, check.bc)?;
    writeln!(f, "  Admissible: {}", check.admissible())
}

impl fmt::Display for KernelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "{}", self.title())?;
        writeln!(f, "{rule}")?;
        write!(f, "A = ")?;
        write_set(f, &self.set)?;
        write!(f, "\nkappa(A) = K = ")?;
        write_set(f, &self.kernel_check.elements)?;
        writeln!(f, "\n")?;

        write_check(f, "A", &self.set_check)?;
        writeln!(f)?;
        write_check(f, "K", &self.kernel_check)?;
        writeln!(f)?;

        writeln!(
            f,
            "Can fix K via scaling within {}: {}",
            self.bound,
            self.fix.is_some()
        )?;
        if let Some(fix) = self.fix {
            let mut sorted = fix;
            sorted.sort_unstable();
            write!(f, "Fixed set: ")?;
            write_set(f, &sorted)?;
            writeln!(f)?;
        }
        write!(f, "{rule}")
    }
}
