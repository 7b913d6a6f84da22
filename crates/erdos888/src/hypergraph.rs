//! The hypergraph of bad quadruples over square-free integers
//!
//! Vertices are the square-free integers up to a bound. A hyperedge is a
//! set of four of them whose product is a perfect square while `ad != bc`,
//! that is, a quadruple no admissible set may contain entirely.
//!
//! For square-free `u` and `v`, `core(u, v)` is the square-free part of
//! `uv`, so two disjoint pairs with the same core multiply to a square.
//! Grouping pairs by core enumerates exactly those quadruples.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::arith::{core, cross_products, sieve_square_free};
use crate::error::Result;

/// Four integers, sorted ascending where the context requires it.
pub type Quadruple = [u64; 4];

/// Square-free vertices up to a bound and the bad quadruples among them.
#[derive(Debug, Clone, Serialize)]
pub struct Hypergraph {
    bound: u64,
    vertices: Vec<u64>,
    edges: Vec<Quadruple>,
}

impl Hypergraph {
    /// Build the bad-quadruple hypergraph on the square-free integers `<= n`.
    ///
    /// Edges appear in discovery order: core groups in order of first
    /// appearance, pairs in ascending order within a group. A quadruple
    /// reachable through several pairings is kept once.
    pub fn square_free(n: u64) -> Result<Self> {
        let vertices = sieve_square_free(n)?;

        let mut groups: IndexMap<u64, Vec<(u64, u64)>> = IndexMap::new();
        for (i, &u) in vertices.iter().enumerate() {
            for &v in &vertices[i + 1..] {
                groups.entry(core(u, v)?).or_default().push((u, v));
            }
        }

        let mut edges: IndexSet<Quadruple> = IndexSet::new();
        for pairs in groups.values().filter(|pairs| pairs.len() >= 2) {
            for (i, &(a, b)) in pairs.iter().enumerate() {
                for &(c, d) in &pairs[i + 1..] {
                    if c == a || c == b || d == a || d == b {
                        continue;
                    }
                    let mut quad = [a, b, c, d];
                    quad.sort_unstable();
                    let (ad, bc) = cross_products(&quad);
                    if ad != bc {
                        edges.insert(quad);
                    }
                }
            }
        }

        tracing::debug!(
            bound = n,
            vertices = vertices.len(),
            core_groups = groups.len(),
            edges = edges.len(),
            "built square-free hypergraph"
        );

        Ok(Self {
            bound: n,
            vertices,
            edges: edges.into_iter().collect(),
        })
    }

    /// Build a hypergraph from explicit parts.
    ///
    /// Each edge is sorted; vertices are kept as given.
    pub fn from_parts(bound: u64, vertices: Vec<u64>, edges: Vec<Quadruple>) -> Self {
        let edges = edges
            .into_iter()
            .map(|mut quad| {
                quad.sort_unstable();
                quad
            })
            .collect();
        Self {
            bound,
            vertices,
            edges,
        }
    }

    /// The bound `n` the vertices were drawn from.
    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// Vertices, ascending.
    pub fn vertices(&self) -> &[u64] {
        &self.vertices
    }

    /// Hyperedges, each sorted ascending.
    pub fn edges(&self) -> &[Quadruple] {
        &self.edges
    }

    /// Number of vertices (`Q(n)` for a square-free hypergraph).
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct hyperedges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges incident to each vertex that lies on at least one edge.
    pub fn degrees(&self) -> HashMap<u64, usize> {
        let mut degrees = HashMap::new();
        for edge in &self.edges {
            for &v in edge {
                *degrees.entry(v).or_insert(0) += 1;
            }
        }
        degrees
    }
}
