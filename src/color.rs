use crate::instance::Instance;

/** Vertex Id */
pub type VertexId = usize;

/** Coloring of a graph: colors[v] is the color of vertex v.
Colors are non-negative; [`UNCOLORED`] appears only while a strategy is
still constructing its assignment. */
pub type Coloring = Vec<i32>;

/// sentinel for a vertex without a color yet
pub const UNCOLORED: i32 = -1;

/// number of colors used by a coloring: max + 1 over non-negative entries
pub fn nb_colors(colors: &[i32]) -> usize {
    match colors.iter().filter(|c| **c >= 0).max() {
        None => 0,
        Some(max) => *max as usize + 1,
    }
}

/// total number of conflicting edges (counted once, u < v)
pub fn count_conflicts(inst: &Instance, colors: &[i32]) -> usize {
    let mut conflicts = 0;
    for u in inst.vertices() {
        for &v in inst.neighbors(u) {
            if u < v && colors[u] == colors[v] {
                conflicts += 1;
            }
        }
    }
    conflicts
}

/// number of neighbors of v sharing v's current color
pub fn vertex_conflicts(inst: &Instance, colors: &[i32], v: VertexId) -> usize {
    conflicts_with_color(inst, colors, v, colors[v])
}

/// number of neighbors of v that carry color c
pub fn conflicts_with_color(inst: &Instance, colors: &[i32], v: VertexId, c: i32) -> usize {
    inst.neighbors(v).iter().filter(|w| colors[**w] == c).count()
}

/// vertices participating in at least one conflict, in increasing id order
pub fn conflicting_vertices(inst: &Instance, colors: &[i32]) -> Vec<VertexId> {
    inst.vertices()
        .filter(|v| vertex_conflicts(inst, colors, *v) > 0)
        .collect()
}

/** checker result.
Returns the number of colors if the coloring is proper,
otherwise, provides an explanation on why it is not. */
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CheckerResult {
    /// coloring is proper and uses this many colors
    Ok(usize),
    /// the coloring length differs from the vertex count
    WrongLength(usize),
    /// some vertex is not colored
    VertexNotColored(VertexId),
    /// conflicting edge
    ConflictingEdge(VertexId, VertexId),
}

/**
returns [`CheckerResult::Ok`] with the number of colors if the coloring is
proper, and the first violation found otherwise.
*/
pub fn check_coloring(inst: &Instance, colors: &[i32]) -> CheckerResult {
    if colors.len() != inst.nb_vertices() {
        return CheckerResult::WrongLength(colors.len());
    }
    for (v, c) in colors.iter().enumerate() {
        if *c < 0 {
            return CheckerResult::VertexNotColored(v);
        }
    }
    for u in inst.vertices() {
        for &v in inst.neighbors(u) {
            if u < v && colors[u] == colors[v] {
                return CheckerResult::ConflictingEdge(u, v);
            }
        }
    }
    CheckerResult::Ok(nb_colors(colors))
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::triangle;

    #[test]
    fn test_nb_colors_empty() {
        assert_eq!(nb_colors(&[]), 0);
    }

    #[test]
    fn test_nb_colors_ignores_uncolored() {
        assert_eq!(nb_colors(&[UNCOLORED, 2, 0]), 3);
    }

    #[test]
    fn test_count_conflicts_triangle() {
        let inst = triangle();
        assert_eq!(count_conflicts(&inst, &[0, 0, 0]), 3);
        assert_eq!(count_conflicts(&inst, &[0, 0, 1]), 1);
        assert_eq!(count_conflicts(&inst, &[0, 1, 2]), 0);
    }

    #[test]
    fn test_vertex_conflict_queries() {
        let inst = triangle();
        let colors = vec![0, 0, 1];
        assert_eq!(vertex_conflicts(&inst, &colors, 0), 1);
        assert_eq!(vertex_conflicts(&inst, &colors, 2), 0);
        assert_eq!(conflicts_with_color(&inst, &colors, 2, 0), 2);
        assert_eq!(conflicting_vertices(&inst, &colors), vec![0, 1]);
    }

    #[test]
    fn test_checker_detects_violations() {
        let inst = triangle();
        assert_eq!(check_coloring(&inst, &[0, 1]), CheckerResult::WrongLength(2));
        assert_eq!(
            check_coloring(&inst, &[0, UNCOLORED, 1]),
            CheckerResult::VertexNotColored(1)
        );
        assert_eq!(
            check_coloring(&inst, &[0, 0, 1]),
            CheckerResult::ConflictingEdge(0, 1)
        );
        assert_eq!(check_coloring(&inst, &[0, 1, 2]), CheckerResult::Ok(3));
    }
}
