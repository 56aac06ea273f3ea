use bit_set::BitSet;
use tracing::info;

use crate::color::VertexId;
use crate::dimacs::read_from_file;
use crate::error::Result;

/** models a Graph Coloring instance.
Immutable for the lifetime of a run; owned by the caller and passed by
reference to the strategies. */
#[derive(Debug)]
pub struct Instance {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// edges of the graph
    edges: Vec<(VertexId, VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// if exists: adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Option<Vec<BitSet>>,
}

impl Instance {
    /** constructor using an adjacency list */
    pub fn new(adj_list: Vec<Vec<VertexId>>) -> Self {
        let n = adj_list.len();
        // compute nb edges
        let mut m = 0;
        for e in &adj_list { // at the end: m = ∑ d(v)
            m += e.len();
        }
        m /= 2; // m = (∑ d(v)) / 2
        let edges = Self::build_edges(&adj_list);
        Self { n, m, edges, adj_list, adj_matrix: None }
    }

    /// creates an instance from a DIMACS file
    pub fn from_file(filename: &str) -> Result<Self> {
        let (_, _, adj_list) = read_from_file(filename)?;
        Ok(Self::new(adj_list))
    }

    /// returns the number of vertices in the graph
    pub fn nb_vertices(&self) -> usize { self.n }

    /// returns the number of edges in the graph
    pub fn nb_edges(&self) -> usize { self.m }

    /// number of neighbors of vertex u
    pub fn degree(&self, u: VertexId) -> usize { self.adj_list[u].len() }

    /// returns the neighbors of vertex u
    pub fn neighbors(&self, u: VertexId) -> &[VertexId] { &self.adj_list[u] }

    /// returns true iff u and v are adjacent
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        match &self.adj_matrix { // if the matrix representation does not exist, iterate over
            None => self.adj_list[u].iter().any(|c| &v == c),
            Some(matrix) => matrix[u].contains(v), // otherwise, use it
        }
    }

    /// returns all edges in the instance
    pub fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }

    /// iterator over vertices of the graph
    pub fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.n }

    /// largest vertex degree (0 on an empty graph)
    pub fn max_degree(&self) -> usize {
        self.adj_list.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// vertices sorted by decreasing degree, ties broken by smaller id
    pub fn degree_ordered_vertices(&self) -> Vec<VertexId> {
        let mut order: Vec<VertexId> = (0..self.n).collect();
        order.sort_by_key(|v| (std::cmp::Reverse(self.degree(*v)), *v));
        order
    }

    /// if called, populate the adj_matrix
    pub fn populate_adj_matrix(&mut self) {
        let mut res = vec![BitSet::default(); self.n];
        for (a, resa) in res.iter_mut().enumerate() {
            for b in &self.adj_list[a] {
                resa.insert(*b);
            }
        }
        self.adj_matrix = Some(res);
    }

    /// logs various information about the instance
    pub fn display_statistics(&self) {
        info!(vertices = self.n, edges = self.m, max_degree = self.max_degree(), "instance loaded");
    }

    /// builds the edge list
    fn build_edges(adj_list: &[Vec<VertexId>]) -> Vec<(VertexId, VertexId)> {
        let mut res = Vec::new();
        for (i, l) in adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i, *j));
                }
            }
        }
        res
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::{path, triangle};

    #[test]
    fn test_counts() {
        let inst = triangle();
        assert_eq!(inst.nb_vertices(), 3);
        assert_eq!(inst.nb_edges(), 3);
        assert_eq!(inst.edges(), &[(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_degrees() {
        let inst = path(5);
        assert_eq!(inst.degree(0), 1);
        assert_eq!(inst.degree(2), 2);
        assert_eq!(inst.max_degree(), 2);
    }

    #[test]
    fn test_adjacency_with_and_without_matrix() {
        let mut inst = path(3);
        assert!(inst.are_adjacent(0, 1));
        assert!(!inst.are_adjacent(0, 2));
        inst.populate_adj_matrix();
        assert!(inst.are_adjacent(0, 1));
        assert!(!inst.are_adjacent(0, 2));
    }

    #[test]
    fn test_degree_order_is_stable() {
        // star center first, leaves by id
        let inst = Instance::new(vec![vec![1, 2, 3], vec![0], vec![0], vec![0]]);
        assert_eq!(inst.degree_ordered_vertices(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_graph() {
        let inst = Instance::new(Vec::new());
        assert_eq!(inst.nb_vertices(), 0);
        assert_eq!(inst.max_degree(), 0);
        assert!(inst.degree_ordered_vertices().is_empty());
    }
}
