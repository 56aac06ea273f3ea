use crate::color::{conflicts_with_color, Coloring, UNCOLORED};
use crate::instance::Instance;

/** legalises an arbitrary seed assignment against a bounded palette.
Vertices are visited in decreasing degree order (ties by id). Each vertex
keeps its seed color when it lies in [0,palette) and no earlier-colored
neighbor already uses it; otherwise it takes the smallest free palette
color, and when the whole palette is blocked, the color conflicting with
the fewest already-colored neighbors (ties by the smaller color).

Never uses a color outside [0,palette); introduces at most one conflict
per vertex it has to force. */
pub fn greedy_repair(inst: &Instance, seed: &[i32], palette: usize) -> Coloring {
    debug_assert!(palette >= 1);
    let n = inst.nb_vertices();
    let mut colors: Coloring = vec![UNCOLORED; n];
    let mut banned = vec![false; palette];
    for v in inst.degree_ordered_vertices() {
        for b in banned.iter_mut() {
            *b = false;
        }
        for &w in inst.neighbors(v) {
            let c = colors[w];
            if c >= 0 && (c as usize) < palette {
                banned[c as usize] = true;
            }
        }
        let preferred = seed[v];
        if preferred >= 0 && (preferred as usize) < palette && !banned[preferred as usize] {
            colors[v] = preferred;
            continue;
        }
        match banned.iter().position(|b| !*b) {
            Some(free) => colors[v] = free as i32,
            None => {
                // full palette blocked: minimise the damage
                let best = (0..palette)
                    .min_by_key(|c| conflicts_with_color(inst, &colors, v, *c as i32))
                    .unwrap_or(0);
                colors[v] = best as i32;
            }
        }
    }
    colors
}
