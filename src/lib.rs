//! Benchmark engine for the Graph Coloring problem
//!
//! Six strategies (Welsh-Powell, DSATUR, TabuCol, simulated annealing,
//! a genetic algorithm and an exact branch & bound) behind one dispatcher,
//! on DIMACS benchmark instances.

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// colorings, conflict queries and the solution checker
pub mod color;

/// error kinds terminal to a run
pub mod error;

/// read DIMACS instances, write colorings
pub mod dimacs;

/// compact immutable graph representation
pub mod instance;

/// tracing subscriber installation
pub mod logging;

/// benchmark results CSV appender
pub mod metrics;

/// strategy dispatch, timing, result validation
pub mod runner;

/// coloring-state recorder for visualisation
pub mod snapshot;

/// search strategies for the graph coloring problem
pub mod search;

/// helper and utility methods for executables
pub mod util;

#[cfg(test)]
pub(crate) mod testing;
