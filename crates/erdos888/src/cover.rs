//! Minimum vertex cover of the bad-quadruple hypergraph
//!
//! Removing a vertex cover leaves a set containing no bad quadruple, so
//! `f_sf(n) = Q(n) - |minimum cover|`.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::Serialize;

use crate::context::SearchContext;
use crate::error::{Erdos888Error, Result};
use crate::hypergraph::{Hypergraph, Quadruple};

/// A vertex cover together with how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexCover {
    /// Cover vertices
    pub vertices: BTreeSet<u64>,

    /// Whether the search proved this cover minimum
    pub optimal: bool,

    /// Search nodes visited
    pub nodes: u64,
}

impl VertexCover {
    /// Number of cover vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the cover is empty.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether every edge of `graph` meets the cover.
    pub fn covers(&self, graph: &Hypergraph) -> bool {
        graph
            .edges()
            .iter()
            .all(|edge| edge.iter().any(|v| self.vertices.contains(v)))
    }

    /// Vertices of `graph` outside the cover, ascending.
    pub fn complement(&self, graph: &Hypergraph) -> Vec<u64> {
        graph
            .vertices()
            .iter()
            .copied()
            .filter(|v| !self.vertices.contains(v))
            .collect()
    }
}

/// The largest admissible square-free set found below a bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extremal {
    /// The bound `n`
    pub bound: u64,

    /// `Q(n)`, the number of square-free integers `<= n`
    pub square_free_count: usize,

    /// Number of bad quadruples
    pub edge_count: usize,

    /// `f_sf(n)`, or a lower bound on it when the cover is not optimal
    pub f_sf: usize,

    /// An admissible square-free set of size `f_sf`
    pub witness: Vec<u64>,

    /// The cover removed to obtain the witness
    pub cover: VertexCover,
}

impl Extremal {
    /// `f_sf(n) / n`.
    pub fn density(&self) -> f64 {
        if self.bound == 0 {
            0.0
        } else {
            self.f_sf as f64 / self.bound as f64
        }
    }
}

/// Compute `f_sf(n)` and a witness set.
pub fn max_admissible_square_free(n: u64, ctx: &SearchContext) -> Result<Extremal> {
    let graph = Hypergraph::square_free(n)?;
    extremal_from_graph(&graph, ctx)
}

/// Compute the extremal set for an already built hypergraph.
pub fn extremal_from_graph(graph: &Hypergraph, ctx: &SearchContext) -> Result<Extremal> {
    let cover = minimum_vertex_cover(graph, ctx)?;
    let witness = cover.complement(graph);
    Ok(Extremal {
        bound: graph.bound(),
        square_free_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        f_sf: witness.len(),
        witness,
        cover,
    })
}

/// Minimum vertex cover by branch and bound.
///
/// The search starts from a greedy cover and branches on the first
/// uncovered edge, trying its vertices in order of decreasing degree.
/// A node is cut when its cover plus a packing of disjoint uncovered edges
/// cannot beat the incumbent. If the context's node budget runs out the
/// best cover found so far is returned with `optimal` unset.
///
/// # Example
///
/// ```
/// use erdos888::{minimum_vertex_cover, Hypergraph, SearchContext};
///
/// let graph = Hypergraph::square_free(15).unwrap();
/// let cover = minimum_vertex_cover(&graph, &SearchContext::new()).unwrap();
/// assert_eq!(cover.len(), 1);
/// assert!(cover.optimal);
/// ```
pub fn minimum_vertex_cover(graph: &Hypergraph, ctx: &SearchContext) -> Result<VertexCover> {
    let edges = graph.edges();
    if edges.is_empty() {
        return Ok(VertexCover {
            vertices: BTreeSet::new(),
            optimal: true,
            nodes: 0,
        });
    }

    let best = greedy_cover(edges);
    tracing::debug!(
        bound = graph.bound(),
        edges = edges.len(),
        greedy = best.len(),
        "starting branch and bound"
    );

    let mut search = Search {
        edges,
        degrees: graph.degrees(),
        ctx,
        cover: HashSet::new(),
        best,
        nodes: 0,
        exhausted: false,
    };
    search.branch(0)?;

    if search.exhausted {
        tracing::warn!(
            bound = graph.bound(),
            nodes = search.nodes,
            cover = search.best.len(),
            "node budget exhausted, cover may not be minimum"
        );
    }

    Ok(VertexCover {
        vertices: search.best,
        optimal: !search.exhausted,
        nodes: search.nodes,
    })
}

/// Greedy cover: repeatedly take the vertex on the most uncovered edges,
/// the smallest such vertex on ties.
fn greedy_cover(edges: &[Quadruple]) -> BTreeSet<u64> {
    let mut cover = BTreeSet::new();
    let mut uncovered: Vec<&Quadruple> = edges.iter().collect();

    while !uncovered.is_empty() {
        let mut counts: BTreeMap<u64, usize> = BTreeMap::new();
        for edge in &uncovered {
            for &v in edge.iter() {
                *counts.entry(v).or_insert(0) += 1;
            }
        }
        let Some((&pick, _)) = counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
        else {
            break;
        };
        cover.insert(pick);
        uncovered.retain(|edge| !edge.contains(&pick));
    }

    cover
}

const PACKING_SCAN_LIMIT: usize = 512;

struct Search<'a> {
    edges: &'a [Quadruple],
    degrees: HashMap<u64, usize>,
    ctx: &'a SearchContext,
    cover: HashSet<u64>,
    best: BTreeSet<u64>,
    nodes: u64,
    exhausted: bool,
}

impl Search<'_> {
    fn branch(&mut self, start: usize) -> Result<()> {
        if self.cover.len() >= self.best.len() {
            return Ok(());
        }

        self.nodes += 1;
        if self.ctx.is_interrupted() {
            return Err(Erdos888Error::Interrupted);
        }
        if self.ctx.budget_exhausted(self.nodes) {
            self.exhausted = true;
            return Ok(());
        }

        let next = (start..self.edges.len())
            .find(|&i| !self.edges[i].iter().any(|v| self.cover.contains(v)));
        let Some(index) = next else {
            tracing::trace!(size = self.cover.len(), nodes = self.nodes, "improved cover");
            self.best = self.cover.iter().copied().collect();
            return Ok(());
        };

        if self.cover.len() + self.packing_bound(index) >= self.best.len() {
            return Ok(());
        }

        let mut order = self.edges[index];
        // Stable, so equal degrees keep ascending vertex order.
        order.sort_by(|a, b| self.degrees[b].cmp(&self.degrees[a]));

        for v in order {
            self.cover.insert(v);
            let result = self.branch(index + 1);
            self.cover.remove(&v);
            result?;
            if self.exhausted {
                break;
            }
        }
        Ok(())
    }

    /// Lower bound on the vertices still needed: uncovered edges from
    /// `start` on that are pairwise disjoint each need their own vertex.
    ///
    /// Any packing is a valid bound, so the scan stops once the bound
    /// already prunes or after `PACKING_SCAN_LIMIT` edges.
    fn packing_bound(&self, start: usize) -> usize {
        let needed = self.best.len() - self.cover.len();
        let mut used: HashSet<u64> = HashSet::new();
        let mut packed = 0;

        for edge in self.edges[start..].iter().take(PACKING_SCAN_LIMIT) {
            if edge
                .iter()
                .any(|v| self.cover.contains(v) || used.contains(v))
            {
                continue;
            }
            used.extend(edge.iter().copied());
            packed += 1;
            if packed >= needed {
                break;
            }
        }
        packed
    }
}
