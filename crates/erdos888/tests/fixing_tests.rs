//! Square-scaling repair tests

use erdos888::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════
// Repairs found
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_theorem_kernels_repair() {
    assert_eq!(
        fixing_opportunity(210, &[3, 5, 14, 210]).unwrap(),
        Some([3, 5, 126, 210])
    );
}

#[test]
fn test_kernel_order_is_irrelevant() {
    assert_eq!(
        fixing_opportunity(210, &[210, 14, 5, 3]).unwrap(),
        Some([3, 5, 126, 210])
    );
}

#[test]
fn test_first_edge_repair() {
    // 4 * 6 * 10 * 15 = 3600 and 4 * 15 = 6 * 10
    assert_eq!(
        fixing_opportunity(15, &[1, 6, 10, 15]).unwrap(),
        Some([4, 6, 10, 15])
    );
}

#[test]
fn test_last_scale_varies_fastest() {
    // Scaling 5 by 4 is reached before scaling 3 or 2.
    assert_eq!(
        fixing_opportunity(30, &[2, 3, 5, 30]).unwrap(),
        Some([2, 3, 20, 30])
    );
}

// ═══════════════════════════════════════════════════════════════════════
// No repair
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_kernel_above_bound() {
    assert_eq!(fixing_opportunity(100, &[3, 5, 14, 210]).unwrap(), None);
    assert_eq!(fixing_opportunity(14, &[1, 6, 10, 15]).unwrap(), None);
}

#[test]
fn test_only_unit_scales_available() {
    assert_eq!(fixing_opportunity(30, &[10, 14, 15, 21]).unwrap(), None);
}

// ═══════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_requires_four_distinct_kernels() {
    assert_eq!(
        fixing_opportunity(100, &[1, 2, 3]).unwrap_err(),
        Erdos888Error::KernelCount {
            expected: 4,
            got: 3
        }
    );
    assert_eq!(
        fixing_opportunity(100, &[1, 1, 2, 3]).unwrap_err(),
        Erdos888Error::KernelCount {
            expected: 4,
            got: 3
        }
    );
    assert_eq!(
        fixing_opportunity(100, &[1, 2, 3, 5, 6]).unwrap_err(),
        Erdos888Error::KernelCount {
            expected: 4,
            got: 5
        }
    );
}

#[test]
fn test_zero_kernel_rejected() {
    assert_eq!(
        fixing_opportunity(100, &[0, 1, 2, 3]).unwrap_err(),
        Erdos888Error::ZeroElement("kernel")
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Search limits
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_huge_bound_rejected() {
    assert_eq!(
        fixing_opportunity(u64::MAX, &[1, 2, 3, u64::MAX]).unwrap_err(),
        Erdos888Error::BoundTooLarge {
            bound: u64::MAX,
            max: erdos888::arith::MAX_SIEVE_BOUND,
        }
    );
}

#[test]
fn test_oversized_scaling_search_rejected() {
    // 3162 * 2236 * 1825 * 1414 scale vectors at the largest bound.
    assert_eq!(
        fixing_opportunity(erdos888::arith::MAX_SIEVE_BOUND, &[1, 2, 3, 5]).unwrap_err(),
        Erdos888Error::SearchSpaceTooLarge {
            vectors: 18_245_087_187_600,
            max: erdos888::fixing::MAX_SCALE_VECTORS,
        }
    );
}
