use fastrand::Rng;
use tracing::debug;

use crate::color::{
    conflicts_with_color, count_conflicts, nb_colors, Coloring,
};
use crate::error::{Error, Result};
use crate::instance::Instance;
use crate::search::greedy_repair::greedy_repair;
use crate::snapshot::SnapshotRecorder;

/// individuals competing in one tournament round
const TOURNAMENT_SIZE: usize = 3;
/// best individuals carried to the next generation unchanged
const ELITE_COUNT: usize = 2;
/// per-generation decay applied to the mutation rate
const MUTATION_DECAY: f64 = 0.98;
/// floor under the decayed mutation rate
const MUTATION_FLOOR: f64 = 0.005;

/** genetic algorithm tuning knobs. */
#[derive(Debug, Clone)]
pub struct GaParams {
    /// individuals per generation (at least 2)
    pub population_size: usize,
    /// generations per palette size (at least 1)
    pub max_generations: usize,
    /// probability of mutating a child, decayed each generation
    pub initial_mutation_rate: f64,
}

impl Default for GaParams {
    fn default() -> Self {
        Self { population_size: 64, max_generations: 500, initial_mutation_rate: 0.03 }
    }
}

impl GaParams {
    /// rejects parameter values outside their accepted ranges
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::InvalidConfiguration(format!(
                "population_size must be at least 2 (got {})",
                self.population_size
            )));
        }
        if self.max_generations < 1 {
            return Err(Error::InvalidConfiguration(
                "max_generations must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.initial_mutation_rate) {
            return Err(Error::InvalidConfiguration(format!(
                "initial_mutation_rate must lie in [0,1] (got {})",
                self.initial_mutation_rate
            )));
        }
        Ok(())
    }
}

/// a coloring with its cached evaluation
#[derive(Debug, Clone)]
struct Individual {
    colors: Coloring,
    conflicts: usize,
    /// conflicts·n² + colors used; lower is better
    fitness: u64,
}

impl Individual {
    fn evaluated(inst: &Instance, colors: Coloring) -> Self {
        let n = inst.nb_vertices() as u64;
        let conflicts = count_conflicts(inst, &colors);
        let fitness = conflicts as u64 * n * n + nb_colors(&colors) as u64;
        Self { colors, conflicts, fitness }
    }
}

/** palette-bounded evolution over the same k-descent as TabuCol.

Each palette size evolves a population of repair-legalised colorings:
tournament selection, uniform parent-choice crossover, conflict-minimising
mutation, greedy repair of every child, two elites per generation and a
decaying mutation rate. A stage whose best individual is conflict-free
records K and the descent continues; a failed stage ends it. Falls back to
the fittest individual seen when no palette size was legalised. */
pub fn genetic(
    inst: &Instance,
    params: &GaParams,
    mut rng: Rng,
    mut snapshots: Option<&mut SnapshotRecorder>,
) -> Result<Coloring> {
    params.validate()?;
    let n = inst.nb_vertices();
    if n == 0 {
        return Ok(Vec::new());
    }
    let start_k = n.min(inst.max_degree() + 1);
    let mut best_valid: Option<Coloring> = None;
    let mut global_best: Option<Individual> = None;
    for k in (1..=start_k).rev() {
        let mut mutation_rate = params.initial_mutation_rate;
        let mut population: Vec<Individual> = (0..params.population_size)
            .map(|_| {
                let seed: Coloring = (0..n).map(|_| rng.usize(0..k) as i32).collect();
                Individual::evaluated(inst, greedy_repair(inst, &seed, k))
            })
            .collect();
        population.sort_by_key(|ind| ind.fitness);
        record_improvement(&mut global_best, &population[0], &mut snapshots)?;
        for generation in 0..params.max_generations {
            if population[0].conflicts == 0 {
                debug!(k, generation, "conflict-free individual reached");
                break;
            }
            let mut next: Vec<Individual> =
                population.iter().take(ELITE_COUNT).cloned().collect();
            while next.len() < params.population_size {
                let parent_a = tournament_select(&population, &mut rng);
                let parent_b = tournament_select(&population, &mut rng);
                let mut child = crossover(parent_a, parent_b, k, &mut rng);
                mutate(inst, &mut child, k, mutation_rate, &mut rng);
                let repaired = greedy_repair(inst, &child, k);
                next.push(Individual::evaluated(inst, repaired));
            }
            population = next;
            population.sort_by_key(|ind| ind.fitness);
            record_improvement(&mut global_best, &population[0], &mut snapshots)?;
            mutation_rate = (mutation_rate * MUTATION_DECAY).max(MUTATION_FLOOR);
        }
        if population[0].conflicts > 0 {
            debug!(k, "no proper coloring evolved, stopping the descent");
            break;
        }
        let leader = &population[0];
        let improves = best_valid
            .as_ref()
            .map_or(true, |b| nb_colors(&leader.colors) < nb_colors(b));
        if improves {
            best_valid = Some(leader.colors.clone());
        }
    }
    let result = match (best_valid, global_best) {
        (Some(colors), _) => colors,
        (None, Some(ind)) => ind.colors,
        (None, None) => Vec::new(),
    };
    if let Some(rec) = snapshots.as_deref_mut() {
        rec.record(&result)?;
    }
    Ok(result)
}

/// records the population leader as global best when it strictly improves
fn record_improvement(
    global_best: &mut Option<Individual>,
    candidate: &Individual,
    snapshots: &mut Option<&mut SnapshotRecorder>,
) -> Result<()> {
    let improved = match global_best {
        None => true,
        Some(best) => candidate.fitness < best.fitness,
    };
    if improved {
        *global_best = Some(candidate.clone());
        if let Some(rec) = snapshots.as_deref_mut() {
            rec.record(&candidate.colors)?;
        }
    }
    Ok(())
}

/// uniform sampling with replacement; the fittest of the sample wins
fn tournament_select<'a>(population: &'a [Individual], rng: &mut Rng) -> &'a Individual {
    let mut best = &population[rng.usize(0..population.len())];
    for _ in 1..TOURNAMENT_SIZE {
        let candidate = &population[rng.usize(0..population.len())];
        if candidate.fitness < best.fitness {
            best = candidate;
        }
    }
    best
}

/// per-position uniform parent choice; out-of-palette values are resampled
fn crossover(parent_a: &Individual, parent_b: &Individual, k: usize, rng: &mut Rng) -> Coloring {
    parent_a
        .colors
        .iter()
        .zip(&parent_b.colors)
        .map(|(a, b)| {
            let gene = if rng.bool() { *a } else { *b };
            if (0..k as i32).contains(&gene) {
                gene
            } else {
                rng.usize(0..k) as i32
            }
        })
        .collect()
}

/// with probability `rate`, moves one random vertex to its least
/// conflicting palette color
fn mutate(inst: &Instance, colors: &mut Coloring, k: usize, rate: f64, rng: &mut Rng) {
    if rng.f64() >= rate {
        return;
    }
    let v = rng.usize(0..colors.len());
    let best = (0..k)
        .min_by_key(|c| conflicts_with_color(inst, colors, v, *c as i32))
        .unwrap_or(0);
    colors[v] = best as i32;
}
