//! Text codecs between [`Graph`](crate::Graph) and the formats graphs are stored in.
//!
//! - [`g6`]: nauty's graph6 encoding, one graph per line.
//! - [`edge_list`]: `{{1,2},{2,3}}`, the representation persisted next to the order.
//! - [`list`]: `3 {1,2},{2,3}`, one graph per line with a leading order.
//! - [`adjacency`]: nauty `showg` adjacency-list blocks.
//! - [`tikz`]: LaTeX/TikZ drawing snippets (export only).
//!
//! Line/record oriented input is read through [`GraphReader`].

pub mod adjacency;
pub mod edge_list;
pub mod g6;
pub mod list;
mod reader;
pub mod tikz;

pub use reader::GraphReader;

use crate::{Error, Result};
use std::str::FromStr;

/// Record formats understood by [`GraphReader`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    G6,
    List,
    Adjacency,
}

impl Format {
    pub fn id(self) -> &'static str {
        match self {
            Format::G6 => "g6",
            Format::List => "list",
            Format::Adjacency => "adjacency",
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "g6" | "graph6" => Ok(Self::G6),
            "list" => Ok(Self::List),
            "adjacency" | "adj" | "showg" => Ok(Self::Adjacency),
            _ => Err(Error::UnknownCapability {
                kind: "format",
                key: s.to_string(),
            }),
        }
    }
}

/// Byte cursor shared by the hand-written edge grammars.
pub(crate) struct Scanner<'a> {
    format: &'static str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(format: &'static str, text: &'a str) -> Self {
        Self {
            format,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> Error {
        let message = message.into();
        Error::parse(self.format, format!("{message} at offset {}", self.pos))
    }

    fn describe(&self) -> String {
        match self.peek() {
            Some(b) => format!("'{}'", b as char),
            None => "end of input".to_string(),
        }
    }

    pub(crate) fn expect(&mut self, wanted: u8) -> Result<()> {
        if self.peek() == Some(wanted) {
            self.pos += 1;
            return Ok(());
        }
        let message = format!("expected '{}', got {}", wanted as char, self.describe());
        Err(self.error(message))
    }

    /// Consumes `wanted` if it is next.
    pub(crate) fn eat(&mut self, wanted: u8) -> bool {
        if self.peek() == Some(wanted) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// A non-empty run of decimal digits.
    pub(crate) fn number(&mut self) -> Result<usize> {
        let start = self.pos;
        let mut value = 0usize;
        while let Some(b @ b'0'..=b'9') = self.peek() {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(usize::from(b - b'0')))
                .ok_or_else(|| self.error("number out of range"))?;
            self.pos += 1;
        }
        if self.pos == start {
            let message = format!("expected a digit, got {}", self.describe());
            return Err(self.error(message));
        }
        Ok(value)
    }

    /// `{v,w}`
    pub(crate) fn edge(&mut self) -> Result<(usize, usize)> {
        self.expect(b'{')?;
        let v = self.number()?;
        self.expect(b',')?;
        let w = self.number()?;
        self.expect(b'}')?;
        Ok((v, w))
    }

    /// `{v,w},{v,w},...` up to (not including) `terminator`, or up to the end of input when
    /// `terminator` is `None`. An empty sequence is accepted.
    pub(crate) fn edge_sequence(&mut self, terminator: Option<u8>) -> Result<Vec<(usize, usize)>> {
        let mut edges = Vec::new();
        let done = |s: &Self| match terminator {
            Some(t) => s.peek() == Some(t),
            None => s.at_end(),
        };
        if done(&*self) {
            return Ok(edges);
        }
        loop {
            edges.push(self.edge()?);
            if done(&*self) {
                return Ok(edges);
            }
            self.expect(b',')?;
        }
    }

    pub(crate) fn finish(&self) -> Result<()> {
        if self.at_end() {
            return Ok(());
        }
        let message = format!("unexpected trailing {}", self.describe());
        Err(self.error(message))
    }
}
