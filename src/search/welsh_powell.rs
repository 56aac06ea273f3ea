use crate::color::{Coloring, UNCOLORED};
use crate::error::Result;
use crate::instance::Instance;
use crate::snapshot::SnapshotRecorder;

/** implements the Welsh-Powell greedy algorithm.
    1. sort the vertices by decreasing degree (ties by id)
    2. assign the current color to the first uncolored vertex, then sweep
       the remaining uncolored vertices in the same order, coloring every
       one with no neighbor on the current color
    3. move to the next color and repeat until everything is colored

Always produces a proper coloring with at most Δ+1 colors. */
pub fn welsh_powell(
    inst: &Instance,
    mut snapshots: Option<&mut SnapshotRecorder>,
) -> Result<Coloring> {
    let n = inst.nb_vertices();
    let mut colors: Coloring = vec![UNCOLORED; n];
    if n == 0 {
        return Ok(colors);
    }
    let order = inst.degree_ordered_vertices();
    let mut nb_colored = 0;
    let mut current_color = 0;
    while nb_colored < n {
        for &v in &order {
            if colors[v] != UNCOLORED {
                continue;
            }
            let blocked = inst.neighbors(v).iter().any(|w| colors[*w] == current_color);
            if blocked {
                continue;
            }
            colors[v] = current_color;
            nb_colored += 1;
            if let Some(rec) = snapshots.as_deref_mut() {
                rec.record(&colors)?;
            }
        }
        current_color += 1;
    }
    Ok(colors)
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{check_coloring, nb_colors, CheckerResult};
    use crate::testing::{complete, complete_bipartite, cycle, edgeless, path, triangle};

    #[test]
    fn test_empty_graph() {
        let inst = edgeless(0);
        assert!(welsh_powell(&inst, None).unwrap().is_empty());
    }

    #[test]
    fn test_single_vertex() {
        let inst = edgeless(1);
        assert_eq!(welsh_powell(&inst, None).unwrap(), vec![0]);
    }

    #[test]
    fn test_edgeless_graph_uses_one_color() {
        let inst = edgeless(6);
        assert_eq!(welsh_powell(&inst, None).unwrap(), vec![0; 6]);
    }

    #[test]
    fn test_triangle_needs_three_colors() {
        let inst = triangle();
        let colors = welsh_powell(&inst, None).unwrap();
        assert_eq!(check_coloring(&inst, &colors), CheckerResult::Ok(3));
    }

    #[test]
    fn test_path_two_colors() {
        let inst = path(5);
        let colors = welsh_powell(&inst, None).unwrap();
        assert_eq!(check_coloring(&inst, &colors), CheckerResult::Ok(2));
    }

    #[test]
    fn test_complete_graph() {
        let inst = complete(6);
        let colors = welsh_powell(&inst, None).unwrap();
        assert_eq!(check_coloring(&inst, &colors), CheckerResult::Ok(6));
    }

    #[test]
    fn test_bipartite_two_colors() {
        let inst = complete_bipartite(3, 4);
        let colors = welsh_powell(&inst, None).unwrap();
        assert_eq!(check_coloring(&inst, &colors), CheckerResult::Ok(2));
    }

    #[test]
    fn test_palette_bound() {
        let inst = cycle(7);
        let colors = welsh_powell(&inst, None).unwrap();
        assert!(nb_colors(&colors) <= inst.max_degree() + 1);
        assert!(matches!(check_coloring(&inst, &colors), CheckerResult::Ok(_)));
    }

    #[test]
    fn test_snapshot_per_assignment_and_final_coherence() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("wp.txt");
        let inst = cycle(5);
        let mut rec = SnapshotRecorder::create(file.to_str().unwrap()).unwrap();
        let colors = welsh_powell(&inst, Some(&mut rec)).unwrap();
        rec.finish().unwrap();
        let content = std::fs::read_to_string(&file).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5); // one snapshot per vertex assignment
        let last: Vec<i32> = lines[4].split(' ').map(|x| x.parse().unwrap()).collect();
        assert_eq!(last, colors);
    }
}
