use fastrand::Rng;
use tracing::debug;

use crate::color::{
    conflicting_vertices, conflicts_with_color, count_conflicts, vertex_conflicts, Coloring,
    UNCOLORED,
};
use crate::error::Result;
use crate::instance::Instance;
use crate::snapshot::SnapshotRecorder;

/** TabuCol tuning knobs. `None` resolves to the instance-size defaults. */
#[derive(Debug, Clone, Default)]
pub struct TabuParams {
    /// iteration cap per palette size (default max(10_000, 100·n))
    pub max_iterations: Option<usize>,
    /// how long a reverted move stays forbidden (default max(7, n/10))
    pub tenure: Option<usize>,
}

impl TabuParams {
    fn resolved_iterations(&self, n: usize) -> i64 {
        self.max_iterations.unwrap_or_else(|| 10_000.max(100 * n)) as i64
    }

    fn resolved_tenure(&self, n: usize) -> i64 {
        self.tenure.unwrap_or_else(|| 7.max(n / 10)) as i64
    }
}

/** (see https://doi.org/10.1007/BF02239976)
Implements the TabuCol local search with a k-descent outer loop.

For each palette size K, starting from Δ+1:
 1. build a randomised greedy K-assignment
 2. while conflicts remain, move one conflicting vertex to the color with
    the best conflict delta; moving a vertex back to a color it just left
    is tabu for a tenure, unless the move beats the stage's best
    (aspiration criterion)
 3. a conflict-free stage records K as achieved and the descent continues
    with K-1; a stage that exhausts its iterations ends the descent

Returns the last recorded proper coloring, or a first-fit greedy one when
no palette size could be made conflict-free. */
pub fn tabucol(
    inst: &Instance,
    params: &TabuParams,
    mut rng: Rng,
    mut snapshots: Option<&mut SnapshotRecorder>,
) -> Result<Coloring> {
    let n = inst.nb_vertices();
    if n == 0 {
        return Ok(Vec::new());
    }
    let max_iterations = params.resolved_iterations(n);
    let tenure = params.resolved_tenure(n);
    let start_k = n.min(inst.max_degree() + 1);
    let mut best_solution: Option<Coloring> = None;
    for k in (1..=start_k).rev() {
        let mut colors = initialize_coloring(inst, k, &mut rng);
        let mut conflicts = count_conflicts(inst, &colors) as i64;
        if conflicts == 0 {
            debug!(k, "initial assignment already proper");
            keep_if_fewer_colors(&mut best_solution, colors);
            continue;
        }
        // tabu[v][c]: iteration until which moving v to c stays forbidden
        let mut tabu = vec![vec![0i64; k]; n];
        let mut best_conflicts_this_k = conflicts;
        for iter in 1..=max_iterations {
            let conflicting = conflicting_vertices(inst, &colors);
            if conflicting.is_empty() {
                break;
            }
            let mut best_move: Option<(usize, i32)> = None;
            let mut best_delta = i64::MAX;
            let mut best_is_tabu = true;
            for &v in &conflicting {
                let old_conf = vertex_conflicts(inst, &colors, v) as i64;
                for c in 0..k as i32 {
                    if c == colors[v] {
                        continue;
                    }
                    let delta = conflicts_with_color(inst, &colors, v, c) as i64 - old_conf;
                    let is_tabu = tabu[v][c as usize] > iter;
                    let aspiration = conflicts + delta < best_conflicts_this_k;
                    let selected = if delta < best_delta {
                        !is_tabu || aspiration
                    } else {
                        // equal delta: a non-tabu move displaces a tabu one
                        delta == best_delta && best_is_tabu && !is_tabu
                    };
                    if selected {
                        best_move = Some((v, c));
                        best_delta = delta;
                        best_is_tabu = is_tabu && !aspiration;
                    }
                }
            }
            let (v, c) = match best_move {
                None => break, // every move is tabu and none aspirates
                Some(m) => m,
            };
            let old_color = colors[v];
            colors[v] = c;
            conflicts += best_delta;
            tabu[v][old_color as usize] = iter + tenure;
            if conflicts < best_conflicts_this_k {
                best_conflicts_this_k = conflicts;
                if let Some(rec) = snapshots.as_deref_mut() {
                    rec.record(&colors)?;
                }
            }
            if conflicts == 0 {
                break;
            }
        }
        if conflicts > 0 {
            debug!(k, conflicts, "palette exhausted, stopping the descent");
            break;
        }
        debug!(k, "proper coloring found");
        keep_if_fewer_colors(&mut best_solution, colors);
    }
    let result = match best_solution {
        Some(colors) => colors,
        None => first_fit(inst),
    };
    if let Some(rec) = snapshots.as_deref_mut() {
        rec.record(&result)?;
    }
    Ok(result)
}

/// later stages run under a smaller palette but may still use more colors
/// than an earlier result; only a strictly smaller coloring replaces it
fn keep_if_fewer_colors(best: &mut Option<Coloring>, candidate: Coloring) {
    let improves = best
        .as_ref()
        .map_or(true, |b| crate::color::nb_colors(&candidate) < crate::color::nb_colors(b));
    if improves {
        *best = Some(candidate);
    }
}

/** randomised greedy construction: vertices in decreasing degree order each
take a uniformly random allowed color, falling back to a conflict-minimising
one when the whole palette is blocked. May leave conflicts. */
fn initialize_coloring(inst: &Instance, k: usize, rng: &mut Rng) -> Coloring {
    let n = inst.nb_vertices();
    let mut colors: Coloring = vec![UNCOLORED; n];
    let mut banned = vec![false; k];
    let mut available = Vec::with_capacity(k);
    for v in inst.degree_ordered_vertices() {
        for b in banned.iter_mut() {
            *b = false;
        }
        for &w in inst.neighbors(v) {
            let c = colors[w];
            if c >= 0 && (c as usize) < k {
                banned[c as usize] = true;
            }
        }
        available.clear();
        available.extend((0..k).filter(|c| !banned[*c]));
        colors[v] = match available.is_empty() {
            false => available[rng.usize(0..available.len())] as i32,
            true => (0..k)
                .min_by_key(|c| conflicts_with_color(inst, &colors, v, *c as i32))
                .unwrap_or(0) as i32,
        };
    }
    colors
}

/// plain first-fit greedy, used when no palette size could be legalised
fn first_fit(inst: &Instance) -> Coloring {
    let n = inst.nb_vertices();
    let mut colors: Coloring = vec![UNCOLORED; n];
    let mut banned = vec![false; inst.max_degree() + 1];
    for v in inst.vertices() {
        for b in banned.iter_mut() {
            *b = false;
        }
        for &w in inst.neighbors(v) {
            if colors[w] >= 0 {
                banned[colors[w] as usize] = true;
            }
        }
        let free = banned.iter().position(|b| !*b);
        colors[v] = free.unwrap_or(0) as i32;
    }
    colors
}
