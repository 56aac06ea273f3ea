use std::fs;

use bit_set::BitSet;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, space1};
use nom::combinator::map_res;
use nom::sequence::{preceded, separated_pair, terminated};

use crate::color::VertexId;
use crate::error::{Error, Result};
use crate::instance::Instance;

/// reads a base-10 integer
fn integer(s: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse)(s)
}

/// reads two numbers separated by spaces
fn two_integers(s: &str) -> IResult<&str, (usize, usize)> {
    separated_pair(integer, space1, integer)(s)
}

/// reads a header line containing (n,m)
pub fn read_header(s: &str) -> IResult<&str, (usize, usize)> {
    preceded(
        terminated(tag("p"), space1),
        preceded(
            // "edges" before "edge": the shorter tag would match its prefix
            terminated(alt((tag("edges"), tag("edge"), tag("col"))), space1),
            two_integers,
        ),
    )(s)
}

/// reads an edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s: &str) -> IResult<&str, (usize, usize)> {
    preceded(terminated(tag("e"), space1), two_integers)(s)
}

/** parses the text of a DIMACS instance, returning (n, m, adj_list).
Comment lines lead with `c`, `%` or `#`. Self-loops are silently dropped,
duplicate edges silently deduplicated; the returned m is the deduplicated
count. Vertices are translated to 0-based indices. */
pub fn parse_instance(content: &str) -> Result<(usize, usize, Vec<Vec<VertexId>>)> {
    let mut nb_vertices: Option<usize> = None;
    let mut adj_list: Vec<Vec<VertexId>> = Vec::new();
    let mut seen: Vec<BitSet> = Vec::new();
    let mut nb_edges = 0;
    for (i, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        match line.as_bytes()[0] {
            b'c' | b'%' | b'#' => continue,
            b'p' => {
                let (_, (n, _)) = read_header(line).map_err(|_| {
                    Error::MalformedGraph(format!("line {}: invalid problem line", i + 1))
                })?;
                nb_vertices = Some(n);
                adj_list = vec![Vec::new(); n];
                seen = vec![BitSet::with_capacity(n); n];
            }
            b'e' => {
                let n = nb_vertices.ok_or_else(|| {
                    Error::MalformedGraph(format!("line {}: edge before problem line", i + 1))
                })?;
                let (_, (u, v)) = read_edge(line).map_err(|_| {
                    Error::MalformedGraph(format!("line {}: invalid edge line", i + 1))
                })?;
                if u == 0 || v == 0 || u > n || v > n {
                    return Err(Error::MalformedGraph(format!(
                        "line {}: edge ({},{}) references an out-of-range vertex (n={})",
                        i + 1, u, v, n
                    )));
                }
                if u == v {
                    continue;
                }
                let (a, b) = (u - 1, v - 1);
                if seen[a].contains(b) {
                    continue;
                }
                seen[a].insert(b);
                seen[b].insert(a);
                adj_list[a].push(b);
                adj_list[b].push(a);
                nb_edges += 1;
            }
            _ => continue,
        }
    }
    match nb_vertices {
        None => Err(Error::MalformedGraph("missing problem line".to_string())),
        Some(n) => Ok((n, nb_edges, adj_list)),
    }
}

/// reads an instance from file, returns (n,m,adj_list)
pub fn read_from_file(filename: &str) -> Result<(usize, usize, Vec<Vec<VertexId>>)> {
    let content = fs::read_to_string(filename).map_err(|e| {
        Error::MalformedGraph(format!("unable to read {}: {}", filename, e))
    })?;
    parse_instance(&content)
}

/** writes a coloring into a file: a comment naming the producing algorithm,
the problem line, then one `v <vertex> <color>` line per vertex
(vertices 1-indexed, colors 0-indexed). */
pub fn write_coloring(
    filename: &str,
    algorithm: &str,
    inst: &Instance,
    colors: &[i32],
) -> Result<()> {
    let mut out = String::new();
    out.push_str(&format!("c colouring produced by {}\n", algorithm));
    out.push_str(&format!("p edge {} {}\n", inst.nb_vertices(), inst.nb_edges()));
    for (v, c) in colors.iter().enumerate() {
        out.push_str(&format!("v {} {}\n", v + 1, c));
    }
    fs::write(filename, out).map_err(|e| Error::io(filename, e))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_header() {
        let s = "p edge 2 1";
        assert_eq!(read_header(s).unwrap().1, (2, 1));
    }

    #[test]
    fn test_read_header_col() {
        let s = "p col 2 1";
        assert_eq!(read_header(s).unwrap().1, (2, 1));
    }

    #[test]
    fn test_read_header_edges() {
        let s = "p edges 11 20";
        assert_eq!(read_header(s).unwrap().1, (11, 20));
    }

    #[test]
    fn test_read_edge() {
        let s = "e 1 2";
        assert_eq!(read_edge(s).unwrap().1, (1, 2));
        assert_eq!(read_edge(s).unwrap().0, "");
    }

    #[test]
    fn test_parse_small_instance() {
        let s = "c a comment\np edge 3 3\ne 1 2\ne 2 3\ne 1 3\n";
        let (n, m, adj) = parse_instance(s).unwrap();
        assert_eq!(n, 3);
        assert_eq!(m, 3);
        assert_eq!(adj[0], vec![1, 2]);
    }

    #[test]
    fn test_parse_comment_styles() {
        let s = "c one\n% two\n# three\np edge 2 1\ne 1 2\n";
        let (n, m, _) = parse_instance(s).unwrap();
        assert_eq!((n, m), (2, 1));
    }

    #[test]
    fn test_parse_drops_self_loops_and_duplicates() {
        let s = "p edge 3 5\ne 1 1\ne 1 2\ne 2 1\ne 1 2\ne 2 3\n";
        let (n, m, adj) = parse_instance(s).unwrap();
        assert_eq!(n, 3);
        assert_eq!(m, 2); // stored count reflects the deduplicated edges
        assert_eq!(adj[0], vec![1]);
        assert_eq!(adj[1], vec![0, 2]);
    }

    #[test]
    fn test_parse_edge_before_problem_line() {
        let err = parse_instance("e 1 2\np edge 2 1\n").unwrap_err();
        assert!(matches!(err, Error::MalformedGraph(_)));
    }

    #[test]
    fn test_parse_out_of_range_vertex() {
        let err = parse_instance("p edge 2 1\ne 1 5\n").unwrap_err();
        assert!(matches!(err, Error::MalformedGraph(_)));
    }

    #[test]
    fn test_parse_missing_problem_line() {
        let err = parse_instance("c nothing here\n").unwrap_err();
        assert!(matches!(err, Error::MalformedGraph(_)));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_from_file("/nonexistent/graph.col").unwrap_err();
        assert!(matches!(err, Error::MalformedGraph(_)));
    }

    #[test]
    fn test_write_coloring_format() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("out.col");
        let inst = Instance::new(vec![vec![1], vec![0]]);
        write_coloring(file.to_str().unwrap(), "dsatur", &inst, &[0, 1]).unwrap();
        let content = fs::read_to_string(&file).unwrap();
        assert_eq!(
            content,
            "c colouring produced by dsatur\np edge 2 1\nv 1 0\nv 2 1\n"
        );
    }
}
