//! CLI driver: loads a graph, runs one or all exact solver variants, prints
//! a results line per algorithm, and optionally writes a CSV report.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use log::info;
use serde::Serialize;

use maxclique_bench::loader::{load_graph, Format as LoaderFormat};
use maxclique_bench::search::skeleton::OrderKind;
use maxclique_bench::search::DeadlineToken;
use maxclique_bench::seed::greedy_seed_clique;
use maxclique_bench::solvers::{find_maximum_clique, validate_clique, Variant};
use maxclique_bench::{MaxCliqueError, Options};

/// benchmark exact maximum clique solvers against a graph instance.
#[derive(Parser, Debug)]
#[command(name = "maxclique_bench", version, about)]
struct Cli {
    /// path to the input graph file
    instance: PathBuf,

    /// input file format
    #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
    format: FormatArg,

    /// which exact variant(s) to run
    #[arg(long, value_enum, default_value_t = VariantArg::All)]
    variant: VariantArg,

    /// branching order for BkBasic/Tomita/DegeneracyTomita (ignored by the
    /// coloring-bounded variants)
    #[arg(long, value_enum, default_value_t = OrderArg::Natural)]
    order: OrderArg,

    /// optional path to write the CSV report to
    #[arg(long)]
    csv: Option<PathBuf>,

    /// optional deadline in milliseconds; on expiry the best clique found
    /// so far is reported, unproven
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// also run and report the greedy seed heuristic's clique size
    #[arg(long)]
    seed_heuristic: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FormatArg {
    Auto,
    Edgelist,
    Dimacs,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum VariantArg {
    BkBasic,
    Tomita,
    DegeneracyTomita,
    Ostergard,
    Bbmc,
    All,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OrderArg {
    Natural,
    DegreeDesc,
}

#[derive(Serialize)]
struct CsvRow {
    dataset: String,
    algorithm: String,
    time_us: u128,
    time_ms: f64,
    clique_size: usize,
    num_vertices: usize,
    num_edges: usize,
    density: String,
    valid: bool,
    proven: bool,
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{}", prefixed(&e));
        std::process::exit(1);
    }
}

fn prefixed(e: &MaxCliqueError) -> String {
    let kind = match e {
        MaxCliqueError::InvalidInput(_) => "InvalidInput",
        MaxCliqueError::OutOfRange { .. } => "OutOfRange",
        MaxCliqueError::ResourceExhausted(_) => "ResourceExhausted",
        MaxCliqueError::Interrupted => "Interrupted",
        MaxCliqueError::Io(_) => "Io",
        MaxCliqueError::Csv(_) => "Csv",
    };
    format!("[{kind}] {e}")
}

fn run() -> Result<(), MaxCliqueError> {
    let cli = Cli::parse();

    let format = match cli.format {
        FormatArg::Auto => LoaderFormat::Auto,
        FormatArg::Edgelist => LoaderFormat::EdgeList,
        FormatArg::Dimacs => LoaderFormat::Dimacs,
    };
    info!("loading {}", cli.instance.display());
    let g = load_graph(&cli.instance, format)?;
    info!(
        "loaded graph: n={} m={} density={:.6}",
        g.vertex_count(),
        g.edge_count(),
        g.density()
    );
    println!("=======================");
    println!("{}\tvertices", g.vertex_count());
    println!("{}\tedges", g.edge_count());
    println!("{:.6}\tdensity", g.density());
    println!("=======================");

    if cli.seed_heuristic {
        let seed = greedy_seed_clique(&g);
        println!("seed heuristic: clique size {}", seed.len());
    }

    let variants: Vec<Variant> = match cli.variant {
        VariantArg::All => Variant::ALL.to_vec(),
        VariantArg::BkBasic => vec![Variant::BkBasic],
        VariantArg::Tomita => vec![Variant::Tomita],
        VariantArg::DegeneracyTomita => vec![Variant::DegeneracyTomita],
        VariantArg::Ostergard => vec![Variant::Ostergard],
        VariantArg::Bbmc => vec![Variant::Bbmc],
    };
    let order_override = match cli.order {
        OrderArg::Natural => OrderKind::Natural,
        OrderArg::DegreeDesc => OrderKind::DegreeDesc,
    };

    let dataset = cli
        .instance
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| cli.instance.display().to_string());

    let mut rows = Vec::with_capacity(variants.len());
    for variant in variants {
        let mut options = Options { order_override: Some(order_override), ..Options::default() };
        if let Some(ms) = cli.timeout_ms {
            options.cancel =
                Some(Box::new(DeadlineToken { deadline: Instant::now() + Duration::from_millis(ms) }));
        }

        let start = Instant::now();
        let (clique, stats) = find_maximum_clique(&g, variant, &options)?;
        let elapsed = start.elapsed();
        let valid = validate_clique(&g, &clique);

        println!(
            "{:<20} size={:<5} time={:>10.3}ms valid={} proven={}",
            variant.name(),
            clique.len(),
            elapsed.as_secs_f64() * 1000.0,
            valid,
            stats.proven
        );

        rows.push(CsvRow {
            dataset: dataset.clone(),
            algorithm: variant.name().to_string(),
            time_us: elapsed.as_micros(),
            time_ms: elapsed.as_secs_f64() * 1000.0,
            clique_size: clique.len(),
            num_vertices: g.vertex_count(),
            num_edges: g.edge_count(),
            density: format!("{:.6}", g.density()),
            valid,
            proven: stats.proven,
        });
    }

    if let Some(path) = &cli.csv {
        let mut writer = csv::Writer::from_path(path)?;
        for row in &rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
