//! # erdos888
//!
//! Computational experiments on Erdős Problem #888.
//!
//! A set `A` of positive integers is *admissible* when every
//! `a <= b <= c <= d` in `A` whose product is a perfect square satisfies
//! `ad = bc`. The problem asks how large an admissible subset of
//! `{1, ..., n}` can be. This crate studies the square-free version
//! `f_sf(n)` and the behaviour of kernels under square scaling.
//!
//! ## Architecture
//!
//! - **Arithmetic**: square-free sieve, square-free part, `core(a, b)`
//! - **Admissibility**: first-violation check for arbitrary sets
//! - **Hypergraph**: bad quadruples over the square-free integers `<= n`
//! - **Cover**: branch-and-bound minimum vertex cover, giving `f_sf(n)`
//! - **Fixing**: repairing a bad kernel quadruple by scaling with squares
//! - **Theorem / Survey**: the kernel counterexample report and the
//!   `f_sf(n)` table
//!
//! ## Status
//!
//! Part of an ongoing log of attempts, made together with AI models, on
//! open problems from the Erdős problems site.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod admissible;
pub mod arith;
pub mod context;
pub mod cover;
pub mod error;
pub mod fixing;
pub mod hypergraph;
pub mod survey;
pub mod theorem;

// Re-export main types
pub use admissible::{find_violation, is_admissible, Violation};
pub use context::{SearchContext, DEFAULT_NODE_BUDGET};
pub use cover::{max_admissible_square_free, minimum_vertex_cover, Extremal, VertexCover};
pub use error::{Erdos888Error, Result};
pub use fixing::fixing_opportunity;
pub use hypergraph::{Hypergraph, Quadruple};
pub use survey::{survey, survey_row, SurveyOptions, SurveyRow, SurveyTable, DEFAULT_BOUNDS};
pub use theorem::{
    verify_kernel_counterexample, verify_theorem_3, KernelReport, QuadrupleCheck, THEOREM_3_BOUND,
    THEOREM_3_SET,
};

/// erdos888 version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_error_display() {
        let err = Erdos888Error::KernelCount {
            expected: 4,
            got: 3,
        };
        assert_eq!(err.to_string(), "Expected 4 distinct kernels, got 3");
    }
}
