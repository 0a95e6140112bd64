use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, space0, space1};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::{preceded, terminated, tuple};

use crate::error::{Error, Result};
use crate::graph::VertexId;


/// reads an instance from file, returns (n, edges) with 0-based vertex ids
pub fn read_from_file(filename:&str) -> Result<(usize, Vec<(VertexId,VertexId)>)> {
    let content = fs::read_to_string(filename).map_err(|e| Error::io(filename, e))?;
    read_from_str(&content)
}

/** reads a DIMACS instance (`p edge n m` header followed by `e u v` lines).
Comment lines (starting by 'c') and empty lines are skipped.
The number of edge lines must be m (or 2m if both directions are listed).
*/
pub fn read_from_str(content:&str) -> Result<(usize, Vec<(VertexId,VertexId)>)> {
    let mut header:Option<(usize,usize)> = None;
    let mut edges = Vec::new();
    for (i,raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('c') { continue; }
        let parse_error = |reason:&str| Error::Parse { line: i+1, reason: reason.to_string() };
        match header {
            None => {
                let (_,(n,m)) = all_consuming(read_header)(line)
                    .map_err(|_| parse_error("expected header 'p edge <n> <m>'"))?;
                header = Some((n,m));
            },
            Some((n,_)) => {
                let (_,(a,b)) = all_consuming(read_edge)(line)
                    .map_err(|_| parse_error("expected edge 'e <u> <v>'"))?;
                // WARNING: indices start at 1 in the DIMACS format
                if a == 0 || b == 0 || a > n || b > n {
                    return Err(parse_error("vertex id out of range"));
                }
                edges.push((a-1, b-1));
            }
        }
    }
    match header {
        None => Err(Error::Parse { line: 0, reason: "missing header".to_string() }),
        Some((n,m)) => {
            if edges.len() != m && edges.len() != 2*m {
                return Err(Error::Parse {
                    line: 0,
                    reason: format!("header announces {} edges, found {}", m, edges.len())
                });
            }
            Ok((n, edges))
        }
    }
}

/// reads an unsigned integer
fn integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two integers separated by spaces (trailing spaces allowed)
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    tuple((terminated(integer, space1), terminated(integer, space0)))(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(
        tuple((tag("p"), space1, alt((tag("edges"), tag("edge"), tag("col"))), space1)),
        read_two_integers
    )(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(tuple((tag("e"), space1)), read_two_integers)(s)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_header() {
        let s = "p edge 2 1";
        assert_eq!(read_header(s).unwrap(), ("", (2,1)));
    }

    #[test]
    fn test_read_header_col() {
        let s = "p col 12 30 ";
        assert_eq!(read_header(s).unwrap(), ("", (12,30)));
    }

    #[test]
    fn test_read_edge() {
        assert_eq!(read_edge("e 1 2").unwrap().1, (1,2));
        assert!(read_edge("e 1").is_err());
        assert!(read_edge("x 1 2").is_err());
    }

    #[test]
    fn test_read_with_comments() {
        let s = "c this is a test comment\np edge 3 2\nc another one\ne 1 2\n\ne 2 3\n";
        let (n, edges) = read_from_str(s).unwrap();
        assert_eq!(n, 3);
        assert_eq!(edges, vec![(0,1), (1,2)]);
    }

    #[test]
    fn test_windows_line_endings() {
        let s = "p edge 2 1\r\ne 1 2\r\n";
        assert_eq!(read_from_str(s).unwrap(), (2, vec![(0,1)]));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(read_from_str("e 1 2\n"), Err(Error::Parse { line: 1, .. })));
        assert!(matches!(read_from_str("p edge 2 1\ne 1 3\n"), Err(Error::Parse { line: 2, .. })));
        assert!(matches!(read_from_str("p edge 2 2\ne 1 2\ne 1 2\ne 2 1\n"), Err(Error::Parse { line: 0, .. })));
        assert!(matches!(read_from_str("c only comments\n"), Err(Error::Parse { line: 0, .. })));
        assert!(matches!(read_from_file("insts/does-not-exist.col"), Err(Error::Io { .. })));
    }

    #[test]
    fn test_read_file() {
        let (n, edges) = read_from_file("insts/cycle5.col").unwrap();
        assert_eq!(n, 5);
        assert_eq!(edges.len(), 5);
        assert!(edges.contains(&(4,0)));
    }
}
