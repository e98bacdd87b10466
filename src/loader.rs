//! Dataset loader for two line-oriented text formats: SNAP-like edge
//! lists and DIMACS. Per-line auto-detection means both formats can even
//! be mixed within one file (DIMACS comment and header lines are simply
//! skipped, edge lines recognized by a leading `e `, everything else
//! parsed as a plain `u v` pair).
//!
//! Parses the grammar with `nom` combinators (`tag`, `digit1`,
//! `multispace1`), building a `Vec<(i64, i64)>` edge list and handing it to
//! [`Graph::build`], which performs the dense id remapping — since the
//! graph substrate accepts arbitrary external ids directly, there's no
//! special-casing needed here beyond recognizing line shapes.

use std::fmt;
use std::fs;
use std::path::Path;

use nom::character::complete::{digit1, multispace0, multispace1};
use nom::IResult;

use crate::error::{MaxCliqueError, Result};
use crate::graph::Graph;

/// which text format to expect. `Auto` (the default) detects per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// detect SNAP-like vs. DIMACS per line.
    Auto,
    /// force SNAP-like edge-list parsing.
    EdgeList,
    /// force DIMACS parsing.
    Dimacs,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Auto => "auto",
            Format::EdgeList => "edgelist",
            Format::Dimacs => "dimacs",
        })
    }
}

impl std::str::FromStr for Format {
    type Err = MaxCliqueError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(Format::Auto),
            "edgelist" => Ok(Format::EdgeList),
            "dimacs" => Ok(Format::Dimacs),
            other => Err(MaxCliqueError::InvalidInput(format!("unknown format: {other}"))),
        }
    }
}

/// reads a graph from `path`, auto-detecting or forcing `format`.
pub fn load_graph(path: &Path, format: Format) -> Result<Graph> {
    let text = fs::read_to_string(path)?;
    let edges = parse_edges(&text, format)?;
    Graph::build(edges)
}

/// parses edges out of `text` per `format`'s line rules.
pub fn parse_edges(text: &str, format: Format) -> Result<Vec<(i64, i64)>> {
    let mut edges = Vec::new();
    for (lineno, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        match classify_line(format, line) {
            Line::Comment | Line::Header => {}
            Line::Edge(a, b) => edges.push((a, b)),
            Line::Invalid => {
                return Err(MaxCliqueError::InvalidInput(format!(
                    "unparsable line {}: {raw_line:?}",
                    lineno + 1
                )))
            }
        }
    }
    Ok(edges)
}

enum Line {
    Comment,
    Header,
    Edge(i64, i64),
    Invalid,
}

fn classify_line(format: Format, line: &str) -> Line {
    match format {
        Format::EdgeList => parse_pair(line).map_or(Line::Invalid, |(a, b)| Line::Edge(a, b)),
        Format::Dimacs | Format::Auto => {
            if line.starts_with('#') {
                return Line::Comment;
            }
            if line.starts_with('c') && line[1..].starts_with(|c: char| c.is_whitespace()) {
                return Line::Comment;
            }
            if let Some(rest) = line.strip_prefix('p') {
                if rest.starts_with(|c: char| c.is_whitespace()) {
                    return Line::Header;
                }
            }
            if let Some(rest) = line.strip_prefix('e') {
                if rest.starts_with(|c: char| c.is_whitespace()) {
                    return parse_pair(rest).map_or(Line::Invalid, |(a, b)| Line::Edge(a, b));
                }
            }
            if format == Format::Dimacs {
                return Line::Invalid;
            }
            // Format::Auto falls through to plain "u v" parsing.
            parse_pair(line).map_or(Line::Invalid, |(a, b)| Line::Edge(a, b))
        }
    }
}

fn parse_pair(s: &str) -> Option<(i64, i64)> {
    fn pair(s: &str) -> IResult<&str, (i64, i64)> {
        let (s, _) = multispace0(s)?;
        let (s, a) = digit1(s)?;
        let (s, _) = multispace1(s)?;
        let (s, b) = digit1(s)?;
        let (s, _) = multispace0(s)?;
        Ok((s, (a.parse().unwrap(), b.parse().unwrap())))
    }
    pair(s).ok().map(|(_, p)| p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snap_like_edge_list_with_comments() {
        let text = "# a comment\n0 1\n\n1 2\n";
        let edges = parse_edges(text, Format::Auto).unwrap();
        assert_eq!(edges, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn parses_dimacs_format() {
        let text = "c a comment\np edge 3 2\ne 1 2\ne 2 3\n";
        let edges = parse_edges(text, Format::Auto).unwrap();
        assert_eq!(edges, vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn forced_dimacs_rejects_plain_edge_lines() {
        let text = "0 1\n";
        assert!(parse_edges(text, Format::Dimacs).is_err());
    }

    #[test]
    fn builds_a_graph_end_to_end() {
        let text = "e 1 2\ne 2 3\ne 1 3\n";
        let edges = parse_edges(text, Format::Auto).unwrap();
        let g = Graph::build(edges).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn unparsable_line_is_invalid_input() {
        let text = "not an edge\n";
        let err = parse_edges(text, Format::Auto).unwrap_err();
        assert!(matches!(err, MaxCliqueError::InvalidInput(_)));
    }

    #[test]
    fn format_from_str_roundtrips() {
        assert_eq!("dimacs".parse::<Format>().unwrap(), Format::Dimacs);
        assert!("bogus".parse::<Format>().is_err());
    }
}
