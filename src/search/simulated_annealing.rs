use fastrand::Rng;
use tracing::debug;

use crate::color::{
    conflicts_with_color, count_conflicts, nb_colors, vertex_conflicts, Coloring,
};
use crate::error::Result;
use crate::instance::Instance;
use crate::search::greedy_repair::greedy_repair;
use crate::snapshot::SnapshotRecorder;

/** simulated annealing tuning knobs. */
#[derive(Debug, Clone)]
pub struct SaParams {
    /// iteration cap per palette size (default max(1000, 50·n))
    pub max_iterations: Option<usize>,
    /// starting temperature
    pub initial_temperature: f64,
    /// temperature reached at the end of the schedule
    pub min_temperature: f64,
}

impl Default for SaParams {
    fn default() -> Self {
        Self { max_iterations: None, initial_temperature: 1.0, min_temperature: 1e-4 }
    }
}

impl SaParams {
    fn resolved_iterations(&self, n: usize) -> usize {
        self.max_iterations.unwrap_or_else(|| 1000.max(50 * n))
    }
}

/** simulated annealing over the same k-descent as TabuCol.

Each palette size starts from a repaired random assignment and runs a
geometric cooling schedule: a uniformly chosen vertex proposes a uniformly
chosen different color, improving or neutral moves are always accepted,
worsening ones with probability exp(-Δ/T). A conflict-free stage records K
and the descent continues; a failed stage ends it. Falls back to the best
state seen overall, ordered by (conflicts, colors used). */
pub fn simulated_annealing(
    inst: &Instance,
    params: &SaParams,
    mut rng: Rng,
    mut snapshots: Option<&mut SnapshotRecorder>,
) -> Result<Coloring> {
    let n = inst.nb_vertices();
    if n == 0 {
        return Ok(Vec::new());
    }
    let iterations = params.resolved_iterations(n);
    let start_k = n.min(inst.max_degree() + 1);
    let mut best_valid: Option<Coloring> = None;
    // best state across all stages, by (conflicts, colors used)
    let mut best_overall: Option<(i64, usize, Coloring)> = None;
    for k in (1..=start_k).rev() {
        let seed: Coloring = (0..n).map(|_| rng.usize(0..k) as i32).collect();
        let mut colors = greedy_repair(inst, &seed, k);
        let mut conflicts = count_conflicts(inst, &colors) as i64;
        track_best(&mut best_overall, conflicts, &colors);
        if conflicts > 0 && k >= 2 {
            let t_floor = params.min_temperature.max(f64::MIN_POSITIVE);
            let alpha = (t_floor / params.initial_temperature).powf(1.0 / iterations as f64);
            let mut temperature = params.initial_temperature;
            for _ in 0..iterations {
                if conflicts == 0 {
                    break;
                }
                let v = rng.usize(0..n);
                let mut proposal = rng.usize(0..k - 1) as i32;
                if proposal >= colors[v] {
                    proposal += 1;
                }
                let delta =
                    conflicts_with_color(inst, &colors, v, proposal) as i64
                        - vertex_conflicts(inst, &colors, v) as i64;
                let accepted =
                    delta <= 0 || rng.f64() < (-(delta as f64) / temperature).exp();
                if accepted {
                    colors[v] = proposal;
                    conflicts += delta;
                    if let Some(rec) = snapshots.as_deref_mut() {
                        rec.record(&colors)?;
                    }
                    track_best(&mut best_overall, conflicts, &colors);
                }
                temperature *= alpha;
            }
        }
        if conflicts > 0 {
            debug!(k, conflicts, "cooling ended with conflicts, stopping the descent");
            break;
        }
        debug!(k, "proper coloring found");
        let improves = best_valid
            .as_ref()
            .map_or(true, |b| nb_colors(&colors) < nb_colors(b));
        if improves {
            best_valid = Some(colors);
        }
    }
    let result = match (best_valid, best_overall) {
        (Some(colors), _) => colors,
        (None, Some((_, _, colors))) => colors,
        (None, None) => Vec::new(),
    };
    if let Some(rec) = snapshots.as_deref_mut() {
        rec.record(&result)?;
    }
    Ok(result)
}

fn track_best(best: &mut Option<(i64, usize, Coloring)>, conflicts: i64, colors: &[i32]) {
    let used = nb_colors(colors);
    let improved = match best {
        None => true,
        Some((bc, bu, _)) => (conflicts, used) < (*bc, *bu),
    };
    if improved {
        *best = Some((conflicts, used, colors.to_vec()));
    }
}
