/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Reading graphs from whitespace-separated text.
//!
//! All formats start with the number of vertices `n`; the vertices
//! `0..n` are created up front and a record naming a vertex outside that
//! range is a [`Error::Data`] error.
//!
//! - [`read_edge_list`]: records `u v`, one directed edge each.
//! - [`read_weighted`]: records `u v weight`, one undirected (twinned)
//!   edge each.
//! - [`read_balanced`]: `n` balance values, one per vertex in id order,
//!   followed by records `u v cost capacity`, one directed edge each.
//! - [`read_adjacency_matrix`]: `n * n` entries in row-major order, a
//!   directed edge `r -> c` for every non-zero entry.
//!
//! # Example
//!
//! ```
//! use flowgraph::loader::read_balanced;
//!
//! let input = "4
//! 2  0  0 -2
//! 0 1 1 2
//! 1 2 1 2
//! 2 3 1 2
//! ";
//! let g = read_balanced::<f64, _>(input.as_bytes()).unwrap();
//! assert_eq!(g.num_nodes(), 4);
//! assert_eq!(g.num_edges(), 3);
//! assert_eq!(g.balance(0), 2.0);
//! assert_eq!(g.balance(3), -2.0);
//! ```

use std::error;
use std::fmt;
use std::io::{self, BufRead, BufReader, Read};
use std::str::FromStr;

use crate::graph::Graph;
use crate::num::traits::Float;

/// Error when reading a graph from text.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Format { line: usize, msg: String },
    Data { line: usize, msg: String },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            Io(err) => err.fmt(fmt),
            Format { line, msg } => write!(fmt, "Format error on line {}: {}", line, msg),
            Data { line, msg } => write!(fmt, "Data error on line {}: {}", line, msg),
        }
    }
}

impl error::Error for Error {
    fn cause(&self) -> Option<&dyn error::Error> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Splits a reader into whitespace-separated tokens, tracking the
/// current line for error messages.
struct TokenReader<R: Read> {
    io: BufReader<R>,
    line: String,
    line_number: usize,
    pos: usize,
}

impl<R: Read> TokenReader<R> {
    fn new(reader: R) -> Self {
        TokenReader {
            io: BufReader::new(reader),
            line: String::new(),
            line_number: 0,
            pos: 0,
        }
    }

    /// The byte range of the next token in `self.line`, reading more
    /// lines as needed. `None` at end of input.
    fn token_range(&mut self) -> Result<Option<(usize, usize)>> {
        loop {
            if let Some(off) = self.line[self.pos..].find(|c: char| !c.is_whitespace()) {
                let start = self.pos + off;
                let len = self.line[start..]
                    .find(char::is_whitespace)
                    .unwrap_or(self.line.len() - start);
                self.pos = start + len;
                return Ok(Some((start, start + len)));
            }
            self.line.clear();
            self.pos = 0;
            if self.io.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
        }
    }

    /// The next token converted to a number, or `None` at end of input.
    fn try_number<T>(&mut self) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.token_range()? {
            Some((start, end)) => self.line[start..end]
                .parse()
                .map(Some)
                .map_err(|err| Error::Format {
                    line: self.line_number,
                    msg: format!("{}", err),
                }),
            None => Ok(None),
        }
    }

    /// The next token converted to a number; end of input is an error.
    fn number<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.try_number()? {
            Some(v) => Ok(v),
            None => Err(Error::Format {
                line: self.line_number,
                msg: "unexpected end of input, expected number".to_string(),
            }),
        }
    }

    /// The next float converted to the graph's value type.
    fn float<F>(&mut self) -> Result<F>
    where
        F: Float,
    {
        let v: f64 = self.number()?;
        F::from(v).ok_or_else(|| Error::Data {
            line: self.line_number,
            msg: format!("value {} not representable", v),
        })
    }

    /// A vertex id checked against the announced vertex count.
    fn vertex(&mut self, n: u32) -> Result<u32> {
        let v = self.number()?;
        self.check_vertex(v, n)
    }

    /// Like [`vertex`][TokenReader::vertex], but `None` at end of input.
    fn try_vertex(&mut self, n: u32) -> Result<Option<u32>> {
        match self.try_number()? {
            Some(v) => self.check_vertex(v, n).map(Some),
            None => Ok(None),
        }
    }

    fn check_vertex(&self, v: u32, n: u32) -> Result<u32> {
        if v < n {
            Ok(v)
        } else {
            Err(Error::Data {
                line: self.line_number,
                msg: format!("vertex id {} out of range, graph has {} vertices", v, n),
            })
        }
    }
}

fn with_vertices<F>(n: u32) -> Graph<F>
where
    F: Float,
{
    let mut g = Graph::new();
    for v in 0..n {
        g.add_node(v);
    }
    g
}

/// Read a directed graph from records `u v`.
pub fn read_edge_list<F, R>(reader: R) -> Result<Graph<F>>
where
    F: Float,
    R: Read,
{
    let mut toks = TokenReader::new(reader);
    let n = toks.number()?;
    let mut g = with_vertices(n);

    while let Some(u) = toks.try_vertex(n)? {
        let v = toks.vertex(n)?;
        g.add_edge(u, v);
    }
    Ok(g)
}

/// Read an undirected graph from records `u v weight`.
///
/// Every record becomes a twin pair, so the edge count of the returned
/// graph is twice the number of records.
pub fn read_weighted<F, R>(reader: R) -> Result<Graph<F>>
where
    F: Float,
    R: Read,
{
    let mut toks = TokenReader::new(reader);
    let n = toks.number()?;
    let mut g = with_vertices(n);

    while let Some(u) = toks.try_vertex(n)? {
        let v = toks.vertex(n)?;
        let w = toks.float()?;
        g.add_undirected_edge(u, v, w);
    }
    Ok(g)
}

/// Read a balanced directed graph: `n` balances, then records
/// `u v cost capacity`.
pub fn read_balanced<F, R>(reader: R) -> Result<Graph<F>>
where
    F: Float,
    R: Read,
{
    let mut toks = TokenReader::new(reader);
    let n = toks.number()?;
    let mut g = with_vertices(n);

    for v in 0..n {
        let b = toks.float()?;
        g.set_balance(v, b);
    }
    while let Some(u) = toks.try_vertex(n)? {
        let v = toks.vertex(n)?;
        let cost = toks.float()?;
        let capacity = toks.float()?;
        g.add_costed_edge(u, v, cost, capacity);
    }
    Ok(g)
}

/// Read a directed graph from a row-major `n * n` adjacency matrix.
pub fn read_adjacency_matrix<F, R>(reader: R) -> Result<Graph<F>>
where
    F: Float,
    R: Read,
{
    let mut toks = TokenReader::new(reader);
    let n = toks.number()?;
    let mut g = with_vertices(n);

    for row in 0..n {
        for col in 0..n {
            let adjacent: u8 = toks.number()?;
            if adjacent != 0 {
                g.add_edge(row, col);
            }
        }
    }
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::{read_adjacency_matrix, read_balanced, read_edge_list, read_weighted, Error};
    use crate::graph::Direction;

    #[test]
    fn test_edge_list() {
        let input = "4\n0 1\n1 2\n2 3\n3 0\n";
        let g = read_edge_list::<f64, _>(input.as_bytes()).unwrap();
        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_edges(), 4);
        assert!(g.edge_between(3, 0, Direction::Forward).is_some());
        assert!(g.edge_between(0, 3, Direction::Forward).is_none());
    }

    #[test]
    fn test_edge_list_creates_isolated_vertices() {
        let g = read_edge_list::<f64, _>("3\n0 1\n".as_bytes()).unwrap();
        assert_eq!(g.num_nodes(), 3);
        assert!(g.contains_node(2));
    }

    #[test]
    fn test_weighted_builds_twins() {
        let input = "3\n0 1 2.5\n1 2 4.0\n";
        let g = read_weighted::<f64, _>(input.as_bytes()).unwrap();
        assert_eq!(g.num_edges(), 4);
        let e = g.edge_between(1, 0, Direction::Forward).unwrap();
        assert_eq!(g.edge(e).weight(), 2.5);
        assert!(!g.edge(e).is_directed());
    }

    #[test]
    fn test_balanced() {
        let input = "3\n2 0 -2\n0 1 3 5\n1 2 -1 4\n";
        let g = read_balanced::<f64, _>(input.as_bytes()).unwrap();
        assert_eq!(g.balance(0), 2.0);
        assert_eq!(g.balance(1), 0.0);
        assert_eq!(g.balance(2), -2.0);
        let e = g.edge_between(1, 2, Direction::Forward).unwrap();
        assert_eq!(g.edge(e).cost(), -1.0);
        assert_eq!(g.edge(e).capacity(), 4.0);
    }

    #[test]
    fn test_adjacency_matrix() {
        let input = "3\n0 1 0\n0 0 1\n1 0 0\n";
        let g = read_adjacency_matrix::<f64, _>(input.as_bytes()).unwrap();
        assert_eq!(g.num_edges(), 3);
        assert!(g.edge_between(2, 0, Direction::Forward).is_some());
    }

    #[test]
    fn test_out_of_range_vertex() {
        let err = read_edge_list::<f64, _>("2\n0 5\n".as_bytes()).unwrap_err();
        match err {
            Error::Data { line, .. } => assert_eq!(line, 2),
            other => panic!("expected data error, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_token() {
        let err = read_edge_list::<f64, _>("2\n0 x\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
    }

    #[test]
    fn test_truncated_record() {
        let err = read_balanced::<f64, _>("2\n1 -1\n0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
    }
}
