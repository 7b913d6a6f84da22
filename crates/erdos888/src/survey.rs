//! Tabulating `f_sf(n)` across bounds

use std::fmt;

use serde::Serialize;

use crate::context::SearchContext;
use crate::cover::extremal_from_graph;
use crate::error::Result;
use crate::fixing::fixing_opportunity;
use crate::hypergraph::Hypergraph;

/// Bounds surveyed when none are given.
pub const DEFAULT_BOUNDS: [u64; 9] = [65, 100, 150, 200, 210, 300, 500, 750, 1000];

/// Number of leading edges checked for a fixing opportunity by default.
pub const DEFAULT_FIXABLE_SAMPLE: usize = 100;

const RULE_WIDTH: usize = 65;

/// Options for a survey.
#[derive(Debug, Clone)]
pub struct SurveyOptions {
    /// How many leading edges to check for a fixing opportunity
    pub fixable_sample: usize,

    /// Context for each cover search; bounded to
    /// [`DEFAULT_NODE_BUDGET`](crate::context::DEFAULT_NODE_BUDGET) by default
    pub context: SearchContext,
}

impl Default for SurveyOptions {
    fn default() -> Self {
        Self {
            fixable_sample: DEFAULT_FIXABLE_SAMPLE,
            context: SearchContext::bounded(),
        }
    }
}

/// One line of the survey table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyRow {
    /// The bound `n`
    pub n: u64,

    /// `Q(n)`, square-free integers `<= n`
    pub square_free_count: usize,

    /// `f_sf(n)` (a lower bound when `optimal` is false)
    pub f_sf: usize,

    /// `f_sf(n) / n`
    pub density: f64,

    /// Number of bad quadruples
    pub edge_count: usize,

    /// Whether one of the sampled edges can be repaired by square scaling
    pub fixable: bool,

    /// Whether the cover search ran to completion
    pub optimal: bool,
}

/// Compute one survey row.
pub fn survey_row(n: u64, options: &SurveyOptions) -> Result<SurveyRow> {
    let graph = Hypergraph::square_free(n)?;
    let extremal = extremal_from_graph(&graph, &options.context)?;

    let mut fixable = false;
    for edge in graph.edges().iter().take(options.fixable_sample) {
        if fixing_opportunity(n, edge)?.is_some() {
            fixable = true;
            break;
        }
    }

    let row = SurveyRow {
        n,
        square_free_count: extremal.square_free_count,
        f_sf: extremal.f_sf,
        density: extremal.density(),
        edge_count: extremal.edge_count,
        fixable,
        optimal: extremal.cover.optimal,
    };
    tracing::info!(
        n,
        q = row.square_free_count,
        f_sf = row.f_sf,
        edges = row.edge_count,
        fixable,
        nodes = extremal.cover.nodes,
        "survey row complete"
    );
    Ok(row)
}

/// Compute a row for each bound, in the order given.
pub fn survey(bounds: &[u64], options: &SurveyOptions) -> Result<Vec<SurveyRow>> {
    bounds.iter().map(|&n| survey_row(n, options)).collect()
}

/// Text table over survey rows.
pub struct SurveyTable<'a>(pub &'a [SurveyRow]);

impl fmt::Display for SurveyTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>6} | {:>6} | {:>7} | {:>8} | {:>7} | {:>7}",
            "n", "Q(n)", "f_sf(n)", "density", "#edges", "fixable"
        )?;
        write!(f, "{}", "-".repeat(RULE_WIDTH))?;

        for row in self.0 {
            let f_sf = if row.optimal {
                row.f_sf.to_string()
            } else {
                format!("{}*", row.f_sf)
            };
            write!(
                f,
                "\n{:>6} | {:>6} | {:>7} | {:>8.4} | {:>7} | {:>7}",
                row.n,
                row.square_free_count,
                f_sf,
                row.density,
                row.edge_count,
                row.fixable
            )?;
        }

        if self.0.iter().any(|row| !row.optimal) {
            write!(f, "\n* node budget exhausted; value is a lower bound")?;
        }
        Ok(())
    }
}
