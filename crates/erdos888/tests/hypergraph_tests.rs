//! Bad-quadruple hypergraph tests

use std::collections::HashSet;

use erdos888::arith::{cross_products, is_square, product4, square_free_part};
use erdos888::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════
// Small bounds
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_zero_bound_is_empty() {
    let graph = Hypergraph::square_free(0).unwrap();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_no_edges_below_fifteen() {
    let graph = Hypergraph::square_free(14).unwrap();
    assert_eq!(graph.bound(), 14);
    assert_eq!(graph.vertices(), &[1, 2, 3, 5, 6, 7, 10, 11, 13, 14]);
    assert!(graph.edges().is_empty());
}

#[test]
fn test_first_edge_at_fifteen() {
    let graph = Hypergraph::square_free(15).unwrap();
    assert_eq!(graph.vertex_count(), 11);
    // Reachable through three pairings, stored once.
    assert_eq!(graph.edges(), &[[1, 6, 10, 15]]);
}

#[test]
fn test_degrees() {
    let graph = Hypergraph::square_free(15).unwrap();
    let degrees = graph.degrees();
    assert_eq!(degrees.len(), 4);
    for v in [1u64, 6, 10, 15] {
        assert_eq!(degrees[&v], 1);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Edge properties
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_edges_are_bad_quadruples() {
    let graph = Hypergraph::square_free(100).unwrap();
    assert!(graph.edge_count() > 0);
    for edge in graph.edges() {
        assert!(edge.windows(2).all(|w| w[0] < w[1]), "unsorted {edge:?}");
        assert!(edge.iter().all(|&v| square_free_part(v) == v));
        assert!(is_square(product4(edge).unwrap()));
        let (ad, bc) = cross_products(edge);
        assert_ne!(ad, bc);
    }
}

#[test]
fn test_edges_are_distinct() {
    let graph = Hypergraph::square_free(100).unwrap();
    let unique: HashSet<Quadruple> = graph.edges().iter().copied().collect();
    assert_eq!(unique.len(), graph.edge_count());
}

#[test]
fn test_every_bad_quadruple_is_an_edge() {
    let graph = Hypergraph::square_free(40).unwrap();
    let edges: HashSet<Quadruple> = graph.edges().iter().copied().collect();
    let v = graph.vertices();
    let mut expected = 0;
    for i in 0..v.len() {
        for j in i + 1..v.len() {
            for k in j + 1..v.len() {
                for l in k + 1..v.len() {
                    let quad = [v[i], v[j], v[k], v[l]];
                    let (ad, bc) = cross_products(&quad);
                    if is_square(product4(&quad).unwrap()) && ad != bc {
                        expected += 1;
                        assert!(edges.contains(&quad), "missing {quad:?}");
                    }
                }
            }
        }
    }
    assert_eq!(expected, graph.edge_count());
}

#[test]
fn test_from_parts_sorts_edges() {
    let graph = Hypergraph::from_parts(10, vec![1, 2, 3, 4], vec![[4, 3, 2, 1]]);
    assert_eq!(graph.edges(), &[[1, 2, 3, 4]]);
    assert_eq!(graph.bound(), 10);
}
