//! Instance builders shared by the unit tests.

use crate::color::VertexId;
use crate::instance::Instance;

/// builds an instance from 0-based undirected edges
pub fn from_edges(n: usize, edges: &[(VertexId, VertexId)]) -> Instance {
    let mut adj_list = vec![Vec::new(); n];
    for &(u, v) in edges {
        adj_list[u].push(v);
        adj_list[v].push(u);
    }
    Instance::new(adj_list)
}

/// K3
pub fn triangle() -> Instance {
    from_edges(3, &[(0, 1), (0, 2), (1, 2)])
}

/// path graph P_n
pub fn path(n: usize) -> Instance {
    let edges: Vec<(VertexId, VertexId)> = (0..n.saturating_sub(1)).map(|i| (i, i + 1)).collect();
    from_edges(n, &edges)
}

/// cycle graph C_n
pub fn cycle(n: usize) -> Instance {
    let mut edges: Vec<(VertexId, VertexId)> = (0..n - 1).map(|i| (i, i + 1)).collect();
    edges.push((n - 1, 0));
    from_edges(n, &edges)
}

/// complete graph K_n
pub fn complete(n: usize) -> Instance {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            edges.push((u, v));
        }
    }
    from_edges(n, &edges)
}

/// complete bipartite graph K_{a,b}
pub fn complete_bipartite(a: usize, b: usize) -> Instance {
    let mut edges = Vec::new();
    for u in 0..a {
        for v in 0..b {
            edges.push((u, a + v));
        }
    }
    from_edges(a + b, &edges)
}

/// graph without edges
pub fn edgeless(n: usize) -> Instance {
    from_edges(n, &[])
}

/// myciel3 (n=11, m=20, chromatic number 4, triangle-free)
pub fn myciel3() -> Instance {
    let edges_1based = [
        (1, 2), (1, 4), (1, 7), (1, 9),
        (2, 3), (2, 6), (2, 8),
        (3, 5), (3, 7), (3, 10),
        (4, 5), (4, 6), (4, 10),
        (5, 8), (5, 9),
        (6, 11), (7, 11), (8, 11), (9, 11), (10, 11),
    ];
    let edges: Vec<(VertexId, VertexId)> =
        edges_1based.iter().map(|(u, v)| (u - 1, v - 1)).collect();
    from_edges(11, &edges)
}

/// queen5_5 (n=25, chromatic number 5): cells of a 5x5 board, adjacent when
/// they share a row, column or diagonal
pub fn queen5_5() -> Instance {
    let n = 5;
    let mut edges = Vec::new();
    for a in 0..n * n {
        for b in (a + 1)..n * n {
            let (ra, ca) = (a / n, a % n);
            let (rb, cb) = (b / n, b % n);
            let same_diag = (ra as i64 - rb as i64).abs() == (ca as i64 - cb as i64).abs();
            if ra == rb || ca == cb || same_diag {
                edges.push((a, b));
            }
        }
    }
    from_edges(n * n, &edges)
}

/// K7 with the edge between the first two vertices removed (chromatic number 6)
pub fn k7_minus_edge() -> Instance {
    let mut edges = Vec::new();
    for u in 0..7 {
        for v in (u + 1)..7 {
            if (u, v) != (0, 1) {
                edges.push((u, v));
            }
        }
    }
    from_edges(7, &edges)
}

/// applies a vertex permutation: vertex v of the input becomes perm[v]
pub fn permuted(inst: &Instance, perm: &[VertexId]) -> Instance {
    let mut adj_list = vec![Vec::new(); inst.nb_vertices()];
    for &(u, v) in inst.edges() {
        adj_list[perm[u]].push(perm[v]);
        adj_list[perm[v]].push(perm[u]);
    }
    Instance::new(adj_list)
}
