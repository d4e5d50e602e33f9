use std::fs;
use std::io::{BufRead, BufReader, Write};

use nom::IResult;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, space1};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::{preceded, separated_pair, tuple};
use tracing::warn;

use crate::cover::{Cover, VertexId};
use crate::error::CoverError;
use crate::graph::{Graph, Header};

/// reads a non-negative integer
fn integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two integers separated by spaces
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    separated_pair(integer, space1, integer)(s)
}

/// reads the header line "n m"
pub fn read_header(s:&str) -> IResult<&str, Header> {
    let (remaining, (nb_vertices, nb_edges)) = all_consuming(read_two_integers)(s.trim())?;
    Ok((remaining, Header { nb_vertices, nb_edges }))
}

/// reads an edge line "u v"
pub fn read_edge(s:&str) -> IResult<&str, (VertexId,VertexId)> {
    all_consuming(read_two_integers)(s.trim())
}

/// reads a cover header line "s vc n k"
pub fn read_cover_header(s:&str) -> IResult<&str, (usize,usize)> {
    all_consuming(preceded(
        tuple((tag("s"), space1, tag("vc"), space1)),
        read_two_integers,
    ))(s.trim())
}

/// reads a covered vertex line
pub fn read_vertex(s:&str) -> IResult<&str, VertexId> {
    all_consuming(integer)(s.trim())
}

fn malformed(line:usize, reason:&str) -> CoverError {
    CoverError::MalformedInput { line, reason: reason.to_string() }
}

/** reads a graph description:
 - first line: declared number of vertices and edges (kept as metadata, not validated)
 - next lines: one edge "u v" per line (blank lines are skipped)
*/
pub fn read_graph<R:BufRead>(source:R) -> Result<Graph, CoverError> {
    let mut lines = source.lines();
    let header = match lines.next() {
        None => return Err(malformed(1, "missing header")),
        Some(line) => read_header(&line?)
            .map_err(|_| malformed(1, "expected header \"<nb vertices> <nb edges>\""))?.1,
    };
    let mut graph = Graph::new();
    for (i,line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let (u,v) = read_edge(&line)
            .map_err(|_| malformed(i+2, "expected edge \"<node1> <node2>\""))?.1;
        graph.add_edge(u, v);
    }
    if header.nb_vertices < graph.vertex_count() || header.nb_edges != graph.nb_edges() {
        warn!(
            "header declares {} vertices and {} edges, found {} vertices and {} edges",
            header.nb_vertices, header.nb_edges, graph.vertex_count(), graph.nb_edges()
        );
    }
    graph.set_header(header);
    Ok(graph)
}

/// reads a graph description from a file
pub fn read_graph_file(filename:&str) -> Result<Graph, CoverError> {
    read_graph(BufReader::new(fs::File::open(filename)?))
}

/** writes a string encoding the cover: "s vc <nb vertices> <cover size>" then one vertex per line */
pub fn cover_to_string(cover:&Cover, nb_vertices:usize) -> String {
    let mut res = format!("s vc {} {}\n", nb_vertices, cover.len());
    for v in cover {
        res += format!("{}\n", v).as_str();
    }
    res
}

/** writes the cover into a sink (the whole content is written at once) */
pub fn write_cover<W:Write>(cover:&Cover, nb_vertices:usize, mut sink:W) -> Result<(), CoverError> {
    sink.write_all(cover_to_string(cover, nb_vertices).as_bytes())?;
    sink.flush()?;
    Ok(())
}

/// writes the cover into a file
pub fn write_cover_file(filename:&str, cover:&Cover, nb_vertices:usize) -> Result<(), CoverError> {
    fs::write(filename, cover_to_string(cover, nb_vertices))?;
    Ok(())
}

/** reads a vertex cover description, returns (nb vertices, cover).
The number of listed vertices must match the declared cover size.
*/
pub fn read_cover<R:BufRead>(source:R) -> Result<(usize, Cover), CoverError> {
    let mut lines = source.lines();
    let (nb_vertices, cover_size) = match lines.next() {
        None => return Err(malformed(1, "missing header")),
        Some(line) => read_cover_header(&line?)
            .map_err(|_| malformed(1, "expected header \"s vc <nb vertices> <cover size>\""))?.1,
    };
    let mut cover = Cover::new();
    let mut nb_listed = 0;
    let mut last_line = 1;
    for (i,line) in lines.enumerate() {
        let line = line?;
        last_line = i+2;
        if line.trim().is_empty() { continue; }
        let v = read_vertex(&line)
            .map_err(|_| malformed(i+2, "expected a vertex id"))?.1;
        if !cover.insert(v) {
            return Err(malformed(i+2, format!("vertex {} listed twice", v).as_str()));
        }
        nb_listed += 1;
    }
    if nb_listed != cover_size {
        return Err(malformed(
            last_line,
            format!("declared cover size {} but {} vertices listed", cover_size, nb_listed).as_str()
        ));
    }
    Ok((nb_vertices, cover))
}

/// reads a vertex cover description from a file
pub fn read_cover_file(filename:&str) -> Result<(usize, Cover), CoverError> {
    read_cover(BufReader::new(fs::File::open(filename)?))
}


#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use tempfile::TempDir;

    #[test]
    fn test_read_instance() {
        let g = read_graph_file("insts/square.gr").unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.nb_edges(), 4);
        assert_eq!(g.header(), Some(Header { nb_vertices: 4, nb_edges: 4 }));
    }

    #[test]
    fn test_read_header() {
        assert_eq!(read_header("4 4").unwrap().1, Header { nb_vertices: 4, nb_edges: 4 });
        assert_eq!(read_header("  12\t30 \r").unwrap().1, Header { nb_vertices: 12, nb_edges: 30 });
        assert!(read_header("4").is_err());
        assert!(read_header("4 4 4").is_err());
    }

    #[test]
    fn test_read_edge() {
        assert_eq!(read_edge("1 2").unwrap().1, (1,2));
        assert_eq!(read_edge("10   3\r").unwrap().1, (10,3));
        assert!(read_edge("-1 2").is_err());
        assert!(read_edge("a b").is_err());
    }

    #[test]
    fn test_read_cover_header() {
        assert_eq!(read_cover_header("s vc 120 47").unwrap().1, (120,47));
        assert!(read_cover_header("s td 120 47").is_err());
    }

    #[test]
    fn test_duplicate_edges_in_file() {
        let once = read_graph("3 2\n1 2\n2 3\n".as_bytes()).unwrap();
        let twice = read_graph("3 4\n1 2\n2 1\n2 3\n1 2\n".as_bytes()).unwrap();
        assert_eq!(once.edges().collect::<Vec<_>>(), twice.edges().collect::<Vec<_>>());
        assert_eq!(once.vertex_count(), twice.vertex_count());
    }

    #[test]
    fn test_header_only() {
        let g = read_graph("5 0\n".as_bytes()).unwrap();
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.header(), Some(Header { nb_vertices: 5, nb_edges: 0 }));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let g = read_graph("2 1\n\n1 2\n   \n".as_bytes()).unwrap();
        assert_eq!(g.nb_edges(), 1);
    }

    #[rstest]
    #[case("", 1)]
    #[case("4\n1 2\n", 1)]
    #[case("4 4\n1 2\n2\n", 3)]
    #[case("4 4\n1 2\n2 3 4\n", 3)]
    #[case("4 4\n1 2\n2 3\nx y\n", 4)]
    fn test_malformed_input(#[case] content:&str, #[case] expected_line:usize) {
        match read_graph(content.as_bytes()) {
            Err(CoverError::MalformedInput { line, .. }) => assert_eq!(line, expected_line),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_cover_to_string() {
        let cover:Cover = [4,1,3].iter().copied().collect();
        assert_eq!(cover_to_string(&cover, 120), "s vc 120 3\n1\n3\n4\n");
        assert_eq!(cover_to_string(&Cover::new(), 0), "s vc 0 0\n");
    }

    #[test]
    fn test_write_cover() {
        let cover:Cover = [2,7].iter().copied().collect();
        let mut sink = Vec::new();
        write_cover(&cover, 9, &mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "s vc 9 2\n2\n7\n");
    }

    #[test]
    fn test_cover_file_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cover.vc");
        let filename = path.to_str().unwrap();
        let cover:Cover = [1,5,8].iter().copied().collect();
        write_cover_file(filename, &cover, 10).unwrap();
        assert_eq!(read_cover_file(filename).unwrap(), (10, cover));
    }

    #[test]
    fn test_read_cover_size_mismatch() {
        match read_cover("s vc 4 3\n1\n2\n".as_bytes()) {
            Err(CoverError::MalformedInput { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_cover_repeated_vertex() {
        match read_cover("s vc 4 2\n1\n1\n".as_bytes()) {
            Err(CoverError::MalformedInput { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unreadable_file() {
        match read_graph_file("insts/does-not-exist.gr") {
            Err(CoverError::Io(_)) => {},
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
