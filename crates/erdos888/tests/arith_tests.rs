//! Arithmetic primitive tests

use erdos888::arith::*;
use erdos888::Erdos888Error;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════
// gcd / isqrt / is_square
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_gcd() {
    assert_eq!(gcd(12, 18), 6);
    assert_eq!(gcd(17, 5), 1);
    assert_eq!(gcd(0, 5), 5);
    assert_eq!(gcd(7, 0), 7);
}

#[test]
fn test_isqrt_small_values() {
    assert_eq!(isqrt(0), 0);
    assert_eq!(isqrt(1), 1);
    assert_eq!(isqrt(3), 1);
    assert_eq!(isqrt(15), 3);
    assert_eq!(isqrt(16), 4);
    assert_eq!(isqrt(17), 4);
}

#[test]
fn test_isqrt_extremes() {
    assert_eq!(isqrt(u128::MAX), u64::MAX as u128);
    let big = (u64::MAX as u128) * (u64::MAX as u128);
    assert_eq!(isqrt(big), u64::MAX as u128);
    assert_eq!(isqrt(big - 1), u64::MAX as u128 - 1);
}

#[test]
fn test_is_square() {
    assert!(is_square(0));
    assert!(is_square(1));
    assert!(is_square(396_900));
    assert!(is_square(44_100));
    assert!(!is_square(2));
    assert!(!is_square(132_300));
}

// ═══════════════════════════════════════════════════════════════════════
// Square-free sieve
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_sieve_empty_and_one() {
    assert_eq!(sieve_square_free(0).unwrap(), Vec::<u64>::new());
    assert_eq!(sieve_square_free(1).unwrap(), vec![1]);
}

#[test]
fn test_sieve_up_to_thirty() {
    assert_eq!(
        sieve_square_free(30).unwrap(),
        vec![1, 2, 3, 5, 6, 7, 10, 11, 13, 14, 15, 17, 19, 21, 22, 23, 26, 29, 30]
    );
}

#[test]
fn test_sieve_counts() {
    assert_eq!(sieve_square_free(15).unwrap().len(), 11);
    assert_eq!(sieve_square_free(100).unwrap().len(), 61);
}

#[test]
fn test_sieve_rejects_huge_bound() {
    let err = sieve_square_free(MAX_SIEVE_BOUND + 1).unwrap_err();
    assert_eq!(
        err,
        Erdos888Error::BoundTooLarge {
            bound: MAX_SIEVE_BOUND + 1,
            max: MAX_SIEVE_BOUND,
        }
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Square-free part and core
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_square_free_part() {
    assert_eq!(square_free_part(0), 0);
    assert_eq!(square_free_part(1), 1);
    assert_eq!(square_free_part(49), 1);
    assert_eq!(square_free_part(72), 2);
    assert_eq!(square_free_part(97), 97);
    assert_eq!(square_free_part(126), 14);
    assert_eq!(square_free_part(210), 210);
}

#[test]
fn test_square_free_part_large_powers() {
    assert_eq!(square_free_part(1 << 40), 1);
    assert_eq!(square_free_part(3 << 41), 6);
}

#[test]
fn test_core() {
    assert_eq!(core(6, 10).unwrap(), 15);
    assert_eq!(core(3, 5).unwrap(), 15);
    assert_eq!(core(1, 15).unwrap(), 15);
    assert_eq!(core(4, 4).unwrap(), 1);
}

#[test]
fn test_core_rejects_zero() {
    assert_eq!(
        core(0, 3).unwrap_err(),
        Erdos888Error::ZeroElement("core argument")
    );
}

#[test]
fn test_core_overflow() {
    let err = core(u64::MAX, u64::MAX - 1).unwrap_err();
    assert_eq!(err, Erdos888Error::Overflow("core"));
}

// ═══════════════════════════════════════════════════════════════════════
// Quadruple products
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_product4() {
    assert_eq!(product4(&[3, 5, 126, 210]).unwrap(), 396_900);
}

#[test]
fn test_product4_overflow() {
    let err = product4(&[u64::MAX; 4]).unwrap_err();
    assert_eq!(err, Erdos888Error::Overflow("quadruple product"));
}

#[test]
fn test_cross_products() {
    assert_eq!(cross_products(&[3, 5, 14, 210]), (630, 70));
    assert_eq!(cross_products(&[3, 5, 126, 210]), (630, 630));
}
