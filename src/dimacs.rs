// Copyright (c) 2022, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Reading and writing flow networks in DIMACS max-flow format.
//!
//! A DIMACS max-flow file looks as follows.
//!
//! 1. empty lines are allowed and ignored
//! 2. a line starting with `c` is a comment line and is ignored
//! 3. the first non-comment line must have the form `p max <n> <m>`, where
//!    `<n>` is the number of nodes and `<m>` the number of arcs
//! 4. next there must be exactly two node lines `n <node> <type>`, where
//!    `<node>` is a node number in `1..=n` and `<type>` is `s` for the
//!    source or `t` for the sink
//! 5. finally there must be exactly `m` arc lines `a <u> <v> <c>` with the
//!    tail, the head and the non-negative capacity of an arc
//!
//! A [`FlowGraph`] reserves vertex 0 for the source and vertex 1 for the
//! sink, so [`read`] renumbers the instance: the declared source becomes
//! [`SOURCE`], the declared sink [`SINK`] and the remaining nodes are
//! packed in order of first use. Loops are not allowed; parallel arcs are
//! merged by the network itself.

use crate::flowgraph::{FlowGraph, SINK, SOURCE};
use crate::num::traits::NumAssign;

use std::error;
use std::fmt;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::str::{FromStr, SplitWhitespace};

/// Error when reading a file in DIMACS format.
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

struct Reader<R: Read> {
    io: BufReader<R>,
    line: String,
    nline: usize,
}

impl<R: Read> Reader<R> {
    fn new(reader: R) -> Self {
        Reader {
            io: BufReader::new(reader),
            line: String::new(),
            nline: 0,
        }
    }

    /// Read the next non-comment, non-empty line.
    fn next_line(&mut self) -> Result<Option<Tokens>> {
        loop {
            self.line.clear();
            if self.io.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.nline += 1;

            let rest = self.line.trim_start();
            if !(rest.is_empty() || rest.starts_with('c')) {
                break;
            }
        }
        let rest = self.line.trim_start();
        Ok(Some(Tokens {
            it: rest.split_whitespace(),
            line: self.nline,
        }))
    }

    /// Read the next line and verify that it has the given descriptor.
    ///
    /// The *remaining* tokens of the line are returned.
    fn expect_line(&mut self, descriptor: char) -> Result<Tokens> {
        let nline = self.nline;
        let mut toks = self.next_line()?.ok_or_else(|| Error::Format {
            line: nline,
            msg: format!("unexpected end of file, expected '{}' line", descriptor),
        })?;
        match toks.str()? {
            d if d.len() == 1 && d.starts_with(descriptor) => Ok(toks),
            d => Err(Error::Format {
                line: toks.line,
                msg: format!("unexpected line, expected '{}', got '{}'", descriptor, d),
            }),
        }
    }
}

/// Iterates over the tokens in a line.
struct Tokens<'a> {
    it: SplitWhitespace<'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    /// Return the next token.
    fn str(&mut self) -> Result<&'a str> {
        self.it.next().ok_or_else(|| Error::Format {
            line: self.line,
            msg: "expected token".to_string(),
        })
    }

    /// Return an error if the next token is not the given token.
    fn expect(&mut self, tok: &str) -> Result<()> {
        let nxt = self.str()?;
        if nxt == tok {
            Ok(())
        } else {
            Err(Error::Format {
                line: self.line,
                msg: format!("expected '{}', got '{}'", tok, nxt),
            })
        }
    }

    /// Return the next token converted to a number.
    fn number<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.str()?.parse().map_err(|e| Error::Format {
            line: self.line,
            msg: format!("{}", e),
        })
    }

    /// Ensure that there is no next token.
    fn end(&mut self) -> Result<()> {
        if let Some(s) = self.it.next() {
            Err(Error::Format {
                line: self.line,
                msg: format!("unexpected token at end of line: {}", s),
            })
        } else {
            Ok(())
        }
    }
}

/// Read a max-flow instance into a [`FlowGraph`].
///
/// The declared source and sink are renumbered to [`SOURCE`] and [`SINK`],
/// all other nodes are packed in order of first use.
pub fn read<F, R>(r: R) -> Result<FlowGraph<F>>
where
    R: Read,
    F: NumAssign + Ord + Copy + FromStr,
    <F as FromStr>::Err: fmt::Display,
{
    let mut reader = Reader::new(r);

    // the problem line
    let mut pline = reader.expect_line('p')?;
    pline.expect("max")?;
    let nnodes: usize = pline.number()?;
    let nedges: usize = pline.number()?;
    pline.end()?;

    // the source and sink declarations
    let mut src = None;
    let mut snk = None;
    for _ in 0..2 {
        let mut nline = reader.expect_line('n')?;
        let u: usize = nline.number()?;
        if u < 1 || u > nnodes {
            return Err(Error::Data {
                line: nline.line,
                msg: format!("invalid node id {} (must be in 1..{})", u, nnodes),
            });
        }
        let what = nline.str()?;
        match what {
            "s" => {
                if src.replace(u).is_some() {
                    return Err(Error::Format {
                        line: nline.line,
                        msg: "duplicate source node".to_string(),
                    });
                }
            }
            "t" => {
                if snk.replace(u).is_some() {
                    return Err(Error::Format {
                        line: nline.line,
                        msg: "duplicate sink node".to_string(),
                    });
                }
            }
            _ => {
                return Err(Error::Format {
                    line: nline.line,
                    msg: format!("invalid node type, must be 's' or 't', got: {}", what),
                });
            }
        }
        if src == snk {
            return Err(Error::Data {
                line: nline.line,
                msg: "source and sink node must not be equal".to_string(),
            });
        }
    }
    // both lines have been seen, one of each kind
    let (src, snk) = (src.unwrap(), snk.unwrap());

    let mut g = FlowGraph::with_vertices(nnodes.max(2)).map_err(|e| Error::Data {
        line: reader.nline,
        msg: e.to_string(),
    })?;

    // renumbering of the instance's 1-based node ids
    let mut ids = vec![usize::MAX; nnodes + 1];
    ids[src] = SOURCE;
    ids[snk] = SINK;
    let mut next = 2;

    for _ in 0..nedges {
        let mut aline = reader.expect_line('a')?;
        let u: usize = aline.number()?;
        let v: usize = aline.number()?;
        let c: F = aline.number()?;

        for &w in &[u, v] {
            if w < 1 || w > nnodes {
                return Err(Error::Data {
                    line: aline.line,
                    msg: format!("invalid node id {} (must be in 1..{})", w, nnodes),
                });
            }
        }
        if u == v {
            return Err(Error::Data {
                line: aline.line,
                msg: format!("invalid loop ({},{}) in arc", u, u),
            });
        }

        for &w in &[u, v] {
            if ids[w] == usize::MAX {
                ids[w] = next;
                next += 1;
            }
        }
        g.add_edge(ids[u], ids[v], c).map_err(|e| Error::Data {
            line: aline.line,
            msg: e.to_string(),
        })?;
    }

    if let Some(toks) = reader.next_line()? {
        return Err(Error::Format {
            line: toks.line,
            msg: format!("unexpected line at the end of file (expected exactly {} 'a' lines)", nedges),
        });
    }

    Ok(g)
}

/// Read a max-flow instance from a named file.
pub fn read_from_file<F>(filename: &str) -> Result<FlowGraph<F>>
where
    F: NumAssign + Ord + Copy + FromStr,
    <F as FromStr>::Err: fmt::Display,
{
    read(std::fs::File::open(filename)?)
}

/// Write a network in its current state as a max-flow instance.
pub fn write<W, F>(mut w: W, g: &FlowGraph<F>) -> io::Result<()>
where
    W: Write,
    F: NumAssign + Ord + Copy + fmt::Display,
{
    writeln!(w, "p max {} {}", g.num_vertices(), g.num_edges())?;
    writeln!(w, "n {} s", SOURCE + 1)?;
    writeln!(w, "n {} t", SINK + 1)?;
    for (u, v, c) in g.arcs() {
        writeln!(w, "a {} {} {}", u + 1, v + 1, c)?;
    }

    Ok(())
}

/// Write a network to a named file as a max-flow instance.
pub fn write_to_file<F>(filename: &str, g: &FlowGraph<F>) -> io::Result<()>
where
    F: NumAssign + Ord + Copy + fmt::Display,
{
    write(std::fs::File::create(filename)?, g)
}

#[cfg(test)]
mod tests {
    use crate::dimacs;
    use crate::maxflow::{edmondskarp, fordfulkerson};
    use crate::FlowGraph;
    use std::io::Cursor;

    #[test]
    fn parse_file_test() {
        let file = "c this is a test file

p max 6 9
n 5 s
n 6 t

c there might be empty lines

a 5 1 10
a 5 2 10
a 1 2 2
a 1 3 4
a 1 4 8
a 2 4 9
a 3 6 10
a 4 3 6
a 4 6 10

c end of the file
";
        let g: FlowGraph<i64> = dimacs::read(Cursor::new(file)).unwrap();

        assert_eq!(g.num_vertices(), 6);
        assert_eq!(g.num_edges(), 9);

        // node 5 became the source, node 6 the sink, the rest was packed
        // in order of first use: 1 -> 2, 2 -> 3, 3 -> 4, 4 -> 5
        let mut arcs: Vec<_> = g.arcs().collect();
        arcs.sort();
        assert_eq!(
            arcs,
            vec![
                (0, 2, 10),
                (0, 3, 10),
                (2, 3, 2),
                (2, 4, 4),
                (2, 5, 8),
                (3, 5, 9),
                (4, 1, 10),
                (5, 1, 10),
                (5, 4, 6),
            ]
        );
    }

    #[test]
    fn solve_parsed_instance_test() {
        let file = "p max 6 9
n 5 s
n 6 t
a 5 1 10
a 5 2 10
a 1 2 2
a 1 3 4
a 1 4 8
a 2 4 9
a 3 6 10
a 4 3 6
a 4 6 10
";
        let g: FlowGraph<i64> = dimacs::read(Cursor::new(file)).unwrap();

        let (value, _, mincut) = fordfulkerson(g.clone());
        assert_eq!(value, 19);
        assert_eq!(mincut.iter().map(|&(_, _, c)| c).sum::<i64>(), 19);

        let (value, _, _) = edmondskarp(g);
        assert_eq!(value, 19);
    }

    #[test]
    fn reject_bad_files_test() {
        // loops are not allowed
        let file = "p max 3 1\nn 1 s\nn 2 t\na 3 3 1\n";
        assert!(dimacs::read::<i64, _>(Cursor::new(file)).is_err());

        // two sources
        let file = "p max 2 0\nn 1 s\nn 2 s\n";
        assert!(dimacs::read::<i64, _>(Cursor::new(file)).is_err());

        // source and sink must differ
        let file = "p max 2 0\nn 1 s\nn 1 t\n";
        assert!(dimacs::read::<i64, _>(Cursor::new(file)).is_err());

        // negative capacities are rejected by the network
        let file = "p max 2 1\nn 1 s\nn 2 t\na 1 2 -4\n";
        assert!(dimacs::read::<i64, _>(Cursor::new(file)).is_err());

        // trailing data
        let file = "p max 2 1\nn 1 s\nn 2 t\na 1 2 4\na 2 1 1\n";
        assert!(dimacs::read::<i64, _>(Cursor::new(file)).is_err());
    }

    #[test]
    fn write_file_test() {
        let mut g = FlowGraph::<i64>::with_vertices(4).unwrap();
        g.add_edge(0, 2, 3).unwrap();
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(2, 1, 2).unwrap();

        let mut buf = Cursor::new(Vec::new());
        dimacs::write(&mut buf, &g).unwrap();

        assert_eq!(
            String::from_utf8(buf.into_inner()).unwrap(),
            "p max 4 3
n 1 s
n 2 t
a 1 3 3
a 1 2 1
a 3 2 2
"
        );
    }

    #[test]
    fn write_read_roundtrip_test() {
        // the inner vertices first appear in increasing order, so the
        // renumbering on reading is the identity
        let mut g = FlowGraph::<i64>::with_vertices(5).unwrap();
        g.add_edge(0, 2, 7).unwrap();
        g.add_edge(0, 3, 2).unwrap();
        g.add_edge(2, 4, 4).unwrap();
        g.add_edge(4, 1, 9).unwrap();
        g.add_edge(3, 1, 2).unwrap();

        let mut buf = Cursor::new(Vec::new());
        dimacs::write(&mut buf, &g).unwrap();

        let h: FlowGraph<i64> = dimacs::read(Cursor::new(buf.into_inner())).unwrap();
        let mut garcs: Vec<_> = g.arcs().collect();
        let mut harcs: Vec<_> = h.arcs().collect();
        garcs.sort();
        harcs.sort();
        assert_eq!(garcs, harcs);
    }
}
