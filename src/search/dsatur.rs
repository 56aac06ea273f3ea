use std::cmp::Ordering;

use bit_set::BitSet;
use priority_queue::PriorityQueue;

use crate::color::{Coloring, VertexId, UNCOLORED};
use crate::error::Result;
use crate::instance::Instance;
use crate::snapshot::SnapshotRecorder;

/// DSATUR priority: saturation first, then remaining degree, then smaller id
#[derive(Debug, PartialEq, Eq)]
struct DSatInfo {
    dsat: usize,
    degree: usize,
    v: VertexId,
}

impl Ord for DSatInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dsat
            .cmp(&other.dsat)
            .then_with(|| self.degree.cmp(&other.degree))
            .then_with(|| other.v.cmp(&self.v))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for DSatInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** implements the DSATUR greedy algorithm.
    1. choose the uncolored vertex that sees the most colors (break ties by
       the largest number of uncolored neighbors, then by the smallest id)
    2. assign it the smallest color absent from its neighborhood
    3. update the saturation of its uncolored neighbors
    4. repeat until a proper coloring is found

Always produces a proper coloring with at most Δ+1 colors; also serves as
the exact solver's initial upper bound. */
pub fn dsatur(inst: &Instance, mut snapshots: Option<&mut SnapshotRecorder>) -> Result<Coloring> {
    let n = inst.nb_vertices();
    let mut colors: Coloring = vec![UNCOLORED; n];
    let mut remaining: PriorityQueue<VertexId, DSatInfo> = PriorityQueue::new();
    for v in inst.vertices() {
        remaining.push(v, DSatInfo { dsat: 0, degree: inst.degree(v), v });
    }
    // adj_colors[v]: colors already present in v's neighborhood
    let mut adj_colors: Vec<BitSet> = vec![BitSet::default(); n];
    while let Some((current_vertex, _)) = remaining.pop() {
        let mut color = 0;
        while adj_colors[current_vertex].contains(color) {
            color += 1;
        }
        colors[current_vertex] = color as i32;
        for &w in inst.neighbors(current_vertex) {
            if colors[w] != UNCOLORED {
                continue;
            }
            let newly_seen = !adj_colors[w].contains(color);
            if newly_seen {
                adj_colors[w].insert(color);
            }
            remaining.change_priority_by(&w, |p| {
                if newly_seen {
                    p.dsat += 1;
                }
                p.degree -= 1;
            });
        }
        if let Some(rec) = snapshots.as_deref_mut() {
            rec.record(&colors)?;
        }
    }
    Ok(colors)
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{check_coloring, nb_colors, CheckerResult};
    use crate::testing::{
        complete, complete_bipartite, cycle, edgeless, myciel3, path, permuted, queen5_5, triangle,
    };

    #[test]
    fn test_empty_graph() {
        assert!(dsatur(&edgeless(0), None).unwrap().is_empty());
    }

    #[test]
    fn test_single_vertex() {
        assert_eq!(dsatur(&edgeless(1), None).unwrap(), vec![0]);
    }

    #[test]
    fn test_triangle() {
        let inst = triangle();
        let colors = dsatur(&inst, None).unwrap();
        assert_eq!(check_coloring(&inst, &colors), CheckerResult::Ok(3));
    }

    #[test]
    fn test_path_two_colors() {
        let inst = path(5);
        let colors = dsatur(&inst, None).unwrap();
        assert_eq!(check_coloring(&inst, &colors), CheckerResult::Ok(2));
    }

    #[test]
    fn test_odd_cycle_three_colors() {
        let inst = cycle(5);
        let colors = dsatur(&inst, None).unwrap();
        assert_eq!(check_coloring(&inst, &colors), CheckerResult::Ok(3));
    }

    #[test]
    fn test_bipartite_two_colors() {
        let inst = complete_bipartite(4, 3);
        let colors = dsatur(&inst, None).unwrap();
        assert_eq!(check_coloring(&inst, &colors), CheckerResult::Ok(2));
    }

    #[test]
    fn test_complete_graph() {
        let inst = complete(7);
        let colors = dsatur(&inst, None).unwrap();
        assert_eq!(check_coloring(&inst, &colors), CheckerResult::Ok(7));
    }

    #[test]
    fn test_myciel3_four_colors() {
        let inst = myciel3();
        let colors = dsatur(&inst, None).unwrap();
        assert_eq!(check_coloring(&inst, &colors), CheckerResult::Ok(4));
    }

    #[test]
    fn test_queen5_5_within_bound() {
        let inst = queen5_5();
        let colors = dsatur(&inst, None).unwrap();
        assert!(matches!(check_coloring(&inst, &colors), CheckerResult::Ok(_)));
        assert!(nb_colors(&colors) <= 7);
    }

    #[test]
    fn test_isomorphism_invariance_on_even_cycle() {
        // the 2-coloring of an even cycle is unique up to relabelling, so the
        // partitions must match under any vertex permutation
        let inst = cycle(6);
        let perm: Vec<usize> = vec![3, 0, 5, 1, 4, 2];
        let shuffled = permuted(&inst, &perm);
        let colors = dsatur(&inst, None).unwrap();
        let colors_shuffled = dsatur(&shuffled, None).unwrap();
        assert_eq!(nb_colors(&colors), 2);
        assert_eq!(nb_colors(&colors_shuffled), 2);
        for u in inst.vertices() {
            for v in inst.vertices() {
                assert_eq!(
                    colors[u] == colors[v],
                    colors_shuffled[perm[u]] == colors_shuffled[perm[v]]
                );
            }
        }
    }

    #[test]
    fn test_snapshot_final_coherence() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("dsatur.txt");
        let inst = myciel3();
        let mut rec = SnapshotRecorder::create(file.to_str().unwrap()).unwrap();
        let colors = dsatur(&inst, Some(&mut rec)).unwrap();
        rec.finish().unwrap();
        let content = std::fs::read_to_string(&file).unwrap();
        let last: Vec<i32> = content
            .lines()
            .last()
            .unwrap()
            .split(' ')
            .map(|x| x.parse().unwrap())
            .collect();
        assert_eq!(last, colors);
    }
}
