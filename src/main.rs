//! Benchmark runner: colors one DIMACS instance with one strategy and
//! reports the outcome.

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]

use std::path::Path;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use color_bench::dimacs::write_coloring;
use color_bench::error::Result;
use color_bench::instance::Instance;
use color_bench::logging::init_logging;
use color_bench::metrics::{append_result_csv, BenchmarkResult};
use color_bench::runner::{run, Algorithm, RunConfig};
use color_bench::search::exact::ExactParams;
use color_bench::search::genetic::GaParams;
use color_bench::search::simulated_annealing::SaParams;
use color_bench::search::tabucol::TabuParams;
use color_bench::snapshot::SnapshotRecorder;
use color_bench::util::export_stats;

/// Command line of the benchmark runner.
#[derive(Debug, Parser)]
#[command(name = "color-bench", about = "Compare graph colouring strategies on DIMACS instances.")]
struct Cli {
    /// strategy to run: welsh_powell, dsatur, simulated_annealing, genetic,
    /// tabu_search or exact_solver
    #[arg(long, short = 'a')]
    algorithm: String,

    /// DIMACS instance to color
    #[arg(long, short = 'i')]
    input: String,

    /// write the coloring to this file
    #[arg(long, short = 'o')]
    output: Option<String>,

    /// append metrics to this CSV file
    #[arg(long, short = 'r')]
    results: Option<String>,

    /// override the graph identifier (defaults to the input file name)
    #[arg(long, short = 'g')]
    graph_name: Option<String>,

    /// known chromatic number, copied into the metrics row
    #[arg(long)]
    known_optimal: Option<i64>,

    /// record coloring states under snapshots-colouring/
    #[arg(long)]
    save_snapshots: bool,

    /// write run statistics as JSON to this file
    #[arg(long)]
    perf: Option<String>,

    /// deterministic RNG seed for the metaheuristics
    #[arg(long)]
    seed: Option<u64>,

    /// genetic algorithm: individuals per generation
    #[arg(long)]
    population_size: Option<usize>,

    /// genetic algorithm: generations per palette size
    #[arg(long)]
    max_generations: Option<usize>,

    /// genetic algorithm: initial mutation probability
    #[arg(long)]
    mutation_rate: Option<f64>,

    /// tabu search: iteration cap per palette size
    #[arg(long)]
    tabu_iterations: Option<usize>,

    /// tabu search: tenure of a reverted move
    #[arg(long)]
    tabu_tenure: Option<usize>,

    /// simulated annealing: iteration cap per palette size
    #[arg(long)]
    sa_iterations: Option<usize>,
}

pub fn main() {
    init_logging();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{}", e);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    if let Err(e) = run_benchmark(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_benchmark(cli: Cli) -> Result<()> {
    let algorithm: Algorithm = cli.algorithm.parse()?;
    let inst = Instance::from_file(&cli.input)?;
    inst.display_statistics();
    let graph_name = cli.graph_name.unwrap_or_else(|| {
        Path::new(&cli.input)
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| cli.input.clone())
    });

    let ga_defaults = GaParams::default();
    let exact = match algorithm {
        Algorithm::ExactSolver => ExactParams::from_env()?,
        _ => ExactParams::default(),
    };
    let config = RunConfig {
        seed: cli.seed,
        tabu: TabuParams {
            max_iterations: cli.tabu_iterations,
            tenure: cli.tabu_tenure,
        },
        annealing: SaParams { max_iterations: cli.sa_iterations, ..SaParams::default() },
        genetic: GaParams {
            population_size: cli.population_size.unwrap_or(ga_defaults.population_size),
            max_generations: cli.max_generations.unwrap_or(ga_defaults.max_generations),
            initial_mutation_rate: cli
                .mutation_rate
                .unwrap_or(ga_defaults.initial_mutation_rate),
        },
        exact,
    };

    let mut recorder = match cli.save_snapshots {
        false => None,
        true => Some(SnapshotRecorder::create(&SnapshotRecorder::default_path(
            algorithm.name(),
            &graph_name,
        ))?),
    };
    let report = run(&inst, algorithm, &config, recorder.as_mut())?;
    if let Some(rec) = recorder.as_mut() {
        rec.finish()?;
    }

    if let Some(output) = &cli.output {
        write_coloring(output, algorithm.name(), &inst, &report.coloring)?;
    }
    let result = BenchmarkResult {
        algorithm: algorithm.name().to_string(),
        graph_name,
        vertices: inst.nb_vertices(),
        edges: inst.nb_edges(),
        colors_used: report.colors_used,
        known_optimal: cli.known_optimal,
        runtime_ms: report.runtime_ms,
    };
    if let Some(results) = &cli.results {
        append_result_csv(results, &result)?;
    }
    if let Some(perf) = &cli.perf {
        export_stats(perf, &result)?;
    }
    println!("Algorithm {} completed in {:.3} ms", algorithm, report.runtime_ms);
    Ok(())
}
