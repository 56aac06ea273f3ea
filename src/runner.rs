use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use fastrand::Rng;
use tracing::info;

use crate::color::{nb_colors, Coloring};
use crate::error::{Error, Result};
use crate::instance::Instance;
use crate::search::exact::{exact_solver, ExactParams};
use crate::search::dsatur::dsatur;
use crate::search::genetic::{genetic, GaParams};
use crate::search::simulated_annealing::{simulated_annealing, SaParams};
use crate::search::tabucol::{tabucol, TabuParams};
use crate::search::welsh_powell::welsh_powell;
use crate::snapshot::SnapshotRecorder;

/** the closed set of strategies the engine knows about. */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// degree-ordered greedy
    WelshPowell,
    /// saturation-priority greedy
    Dsatur,
    /// temperature-driven k-descent
    SimulatedAnnealing,
    /// population-based k-descent
    Genetic,
    /// tabu-driven k-descent
    TabuSearch,
    /// branch & bound achieving the chromatic number
    ExactSolver,
}

impl Algorithm {
    /// every strategy, in the order the benchmarks report them
    pub const ALL: [Algorithm; 6] = [
        Algorithm::WelshPowell,
        Algorithm::Dsatur,
        Algorithm::SimulatedAnnealing,
        Algorithm::Genetic,
        Algorithm::TabuSearch,
        Algorithm::ExactSolver,
    ];

    /// the name accepted on the command line and written to the CSV
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::WelshPowell => "welsh_powell",
            Algorithm::Dsatur => "dsatur",
            Algorithm::SimulatedAnnealing => "simulated_annealing",
            Algorithm::Genetic => "genetic",
            Algorithm::TabuSearch => "tabu_search",
            Algorithm::ExactSolver => "exact_solver",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/** per-run configuration forwarded to the strategies. */
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// deterministic RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
    /// TabuCol knobs
    pub tabu: TabuParams,
    /// simulated annealing knobs
    pub annealing: SaParams,
    /// genetic algorithm knobs
    pub genetic: GaParams,
    /// exact solver knobs
    pub exact: ExactParams,
}

/** what a dispatched run produced. */
#[derive(Debug)]
pub struct RunReport {
    /// the coloring, one entry per vertex
    pub coloring: Coloring,
    /// number of distinct colors used
    pub colors_used: usize,
    /// wall-clock runtime in milliseconds
    pub runtime_ms: f64,
}

/** invokes exactly one strategy on the instance, timing it with a
monotonic clock and checking the returned length. Each strategy receives a
freshly built RNG by value; nothing is shared across runs. */
pub fn run(
    inst: &Instance,
    algorithm: Algorithm,
    config: &RunConfig,
    snapshots: Option<&mut SnapshotRecorder>,
) -> Result<RunReport> {
    let rng = match config.seed {
        None => Rng::new(),
        Some(seed) => Rng::with_seed(seed),
    };
    let start = Instant::now();
    let coloring = match algorithm {
        Algorithm::WelshPowell => welsh_powell(inst, snapshots)?,
        Algorithm::Dsatur => dsatur(inst, snapshots)?,
        Algorithm::SimulatedAnnealing => {
            simulated_annealing(inst, &config.annealing, rng, snapshots)?
        }
        Algorithm::Genetic => genetic(inst, &config.genetic, rng, snapshots)?,
        Algorithm::TabuSearch => tabucol(inst, &config.tabu, rng, snapshots)?,
        Algorithm::ExactSolver => exact_solver(inst, &config.exact, snapshots)?,
    };
    let runtime_ms = start.elapsed().as_secs_f64() * 1000.0;
    if coloring.len() != inst.nb_vertices() {
        return Err(Error::ResultSizeMismatch {
            expected: inst.nb_vertices(),
            got: coloring.len(),
        });
    }
    let colors_used = nb_colors(&coloring);
    info!(algorithm = %algorithm, colors_used, runtime_ms, "run finished");
    Ok(RunReport { coloring, colors_used, runtime_ms })
}
