//! erdos888 command-line driver
//!
//! Runs the Problem #888 experiments: the kernel counterexample check,
//! the `f_sf(n)` survey, and single-set queries.

use std::fmt::Write as _;
use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use erdos888::{
    find_violation, fixing_opportunity, max_admissible_square_free, survey,
    verify_kernel_counterexample, SearchContext, SurveyOptions, SurveyTable, DEFAULT_BOUNDS,
    DEFAULT_NODE_BUDGET, THEOREM_3_BOUND, THEOREM_3_SET,
};

#[derive(Parser)]
#[command(name = "erdos888")]
#[command(version, about = "Computational experiments on Erdos Problem #888")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Stop each cover search after this many nodes
    #[arg(long, global = true, env = "ERDOS888_NODE_BUDGET", default_value_t = DEFAULT_NODE_BUDGET)]
    node_budget: u64,

    /// Search covers to completion, ignoring the node budget
    #[arg(long, global = true)]
    exhaustive: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a quadruple against its kernels and try to repair the kernels
    Verify {
        /// The quadruple to check
        #[arg(long, num_args = 4, value_names = ["A", "B", "C", "D"])]
        set: Option<Vec<u64>>,
        /// Bound for the repair search
        #[arg(long, default_value_t = THEOREM_3_BOUND)]
        bound: u64,
    },
    /// Tabulate f_sf(n) over a list of bounds
    Survey {
        /// Bounds to survey (defaults to the standard list)
        bounds: Vec<u64>,
        /// Leading edges checked for a fixing opportunity
        #[arg(long, default_value_t = erdos888::survey::DEFAULT_FIXABLE_SAMPLE)]
        fixable_sample: usize,
    },
    /// Check whether a set is admissible
    Check {
        /// Set elements
        #[arg(required = true)]
        elements: Vec<u64>,
    },
    /// Compute f_sf(n) and a largest admissible square-free set
    Extremal {
        /// The bound n
        n: u64,
    },
    /// Repair four kernels by square scaling within a bound
    Fix {
        /// The bound
        bound: u64,
        /// The four kernels
        #[arg(num_args = 4, required = true)]
        kernels: Vec<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(
        node_budget = cli.node_budget,
        exhaustive = cli.exhaustive,
        json = cli.json,
        "parsed arguments"
    );

    let context = if cli.exhaustive {
        SearchContext::new()
    } else {
        SearchContext::with_node_budget(cli.node_budget)
    };

    let output = match cli.command {
        None => {
            let options = SurveyOptions {
                context,
                ..Default::default()
            };
            render_default(&DEFAULT_BOUNDS, &options, cli.json)?
        }
        Some(Commands::Verify { set, bound }) => {
            let set = match set {
                Some(values) => to_quadruple(values, "--set")?,
                None => THEOREM_3_SET,
            };
            render_verify(set, bound, cli.json)?
        }
        Some(Commands::Survey {
            bounds,
            fixable_sample,
        }) => {
            let bounds = if bounds.is_empty() {
                DEFAULT_BOUNDS.to_vec()
            } else {
                bounds
            };
            let options = SurveyOptions {
                fixable_sample,
                context,
            };
            render_survey(&bounds, &options, cli.json)?
        }
        Some(Commands::Check { elements }) => render_check(&elements, cli.json)?,
        Some(Commands::Extremal { n }) => render_extremal(n, &context, cli.json)?,
        Some(Commands::Fix { bound, kernels }) => render_fix(bound, &kernels, cli.json)?,
    };
    println!("{output}");
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn to_quadruple(values: Vec<u64>, what: &str) -> Result<[u64; 4]> {
    let count = values.len();
    values
        .try_into()
        .map_err(|_| anyhow::anyhow!("{what} takes exactly 4 values, got {count}"))
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

/// The verification report followed by the survey table.
fn render_default(bounds: &[u64], options: &SurveyOptions, json: bool) -> Result<String> {
    let report = verify_kernel_counterexample(THEOREM_3_SET, THEOREM_3_BOUND)
        .context("Failed to verify Theorem 3")?;
    let rows = survey(bounds, options).context("Survey failed")?;
    if json {
        return to_json(&serde_json::json!({ "verification": report, "survey": rows }));
    }
    Ok(format!("{report}\n\n{}", SurveyTable(&rows)))
}

fn render_verify(set: [u64; 4], bound: u64, json: bool) -> Result<String> {
    let report = verify_kernel_counterexample(set, bound)
        .with_context(|| format!("Failed to verify kernel quadruple {set:?}"))?;
    if json {
        return to_json(&report);
    }
    Ok(report.to_string())
}

fn render_survey(bounds: &[u64], options: &SurveyOptions, json: bool) -> Result<String> {
    let rows = survey(bounds, options).context("Survey failed")?;
    if json {
        return to_json(&rows);
    }
    Ok(SurveyTable(&rows).to_string())
}

fn render_check(elements: &[u64], json: bool) -> Result<String> {
    let violation = find_violation(elements).context("Failed to check admissibility")?;
    if json {
        return to_json(&violation);
    }
    Ok(match violation {
        Some(violation) => format!("not admissible: {violation}"),
        None => "admissible".to_string(),
    })
}

fn render_extremal(n: u64, context: &SearchContext, json: bool) -> Result<String> {
    let extremal = max_admissible_square_free(n, context)
        .with_context(|| format!("Failed to compute f_sf({n})"))?;
    if json {
        return to_json(&extremal);
    }
    let qualifier = if extremal.cover.optimal { "" } else { " (lower bound)" };
    let mut out = format!(
        "n = {n}: Q(n) = {}, #edges = {}, f_sf(n) = {}{qualifier}",
        extremal.square_free_count, extremal.edge_count, extremal.f_sf
    );
    write!(out, "\nremoved: {:?}", extremal.cover.vertices)?;
    write!(out, "\nwitness: {:?}", extremal.witness)?;
    Ok(out)
}

fn render_fix(bound: u64, kernels: &[u64], json: bool) -> Result<String> {
    let fixed = fixing_opportunity(bound, kernels)
        .with_context(|| format!("Failed to search scalings of {kernels:?}"))?;
    if json {
        return to_json(&fixed);
    }
    Ok(match fixed {
        Some(set) => format!("fixed: {set:?}"),
        None => "none".to_string(),
    })
}
