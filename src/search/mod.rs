//! Search strategies for the graph coloring problem.
//!
//! All strategies expose the same contract: instance in, coloring of length
//! n out. The greedy and exact strategies always return a proper coloring;
//! the metaheuristics return the best valid coloring recorded during their
//! k-descent, falling back to their best-conflict state otherwise.

/// Welsh-Powell degree-ordered greedy
pub mod welsh_powell;

/// DSATUR saturation-priority greedy
pub mod dsatur;

/// greedy repair under a bounded palette
pub mod greedy_repair;

/// TABUCOL implementation
pub mod tabucol;

/// simulated annealing with geometric cooling
pub mod simulated_annealing;

/// genetic algorithm with palette-bounded crossover and repair
pub mod genetic;

/// DSATUR-seeded exact branch & bound
pub mod exact;
