use super::{Format, adjacency, g6, list};
use crate::{Graph, Result};
use std::io::BufRead;

/// Pulls one graph at a time out of a buffered stream.
///
/// End of input is not an error: [`GraphReader::read_next`] returns `Ok(false)` and the iterator
/// yields `None`. A malformed record is returned as an error; the stream position afterwards is
/// unspecified, so callers stop reading that stream.
#[derive(Debug)]
pub struct GraphReader<R> {
    input: R,
    format: Format,
    line: String,
    records: usize,
}

impl<R: BufRead> GraphReader<R> {
    pub fn new(input: R, format: Format) -> Self {
        Self {
            input,
            format,
            line: String::new(),
            records: 0,
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Number of graphs read so far.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Replaces `graph` with the next record. `graph` is only touched on success.
    pub fn read_next(&mut self, graph: &mut Graph) -> Result<bool> {
        let next = match self.format {
            Format::G6 => self.next_g6()?,
            Format::List => self.next_list()?,
            Format::Adjacency => self.next_adjacency()?,
        };
        let Some(next) = next else {
            return Ok(false);
        };
        self.records += 1;
        tracing::trace!(
            format = self.format.id(),
            record = self.records,
            order = next.order(),
            size = next.size(),
            "read graph"
        );
        *graph = next;
        Ok(true)
    }

    /// Reads one line without its terminator; `false` at end of input.
    fn read_line(&mut self) -> Result<bool> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(false);
        }
        let trimmed = self.line.trim_end_matches(['\n', '\r']).len();
        self.line.truncate(trimmed);
        Ok(true)
    }

    /// Reads lines until a non-blank one is found.
    fn read_nonblank_line(&mut self) -> Result<bool> {
        while self.read_line()? {
            if !self.line.trim().is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn next_g6(&mut self) -> Result<Option<Graph>> {
        if !self.read_line()? || self.line.is_empty() {
            return Ok(None);
        }
        if self.records == 0 && self.line == g6::HEADER {
            return self.next_g6();
        }
        g6::decode(&self.line).map(Some)
    }

    fn next_list(&mut self) -> Result<Option<Graph>> {
        if !self.read_nonblank_line()? {
            return Ok(None);
        }
        list::decode(self.line.trim_end()).map(Some)
    }

    fn next_adjacency(&mut self) -> Result<Option<Graph>> {
        // Header line; its content is ignored.
        if !self.read_nonblank_line()? {
            return Ok(None);
        }
        let mut block = Vec::new();
        while self.read_line()? && !self.line.trim().is_empty() {
            block.push(std::mem::take(&mut self.line));
        }
        let lines = block.iter().map(String::as_str);
        adjacency::decode_lines(lines).map(Some)
    }
}

impl<R: BufRead> Iterator for GraphReader<R> {
    type Item = Result<Graph>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut graph = Graph::new();
        match self.read_next(&mut graph) {
            Ok(true) => Some(Ok(graph)),
            Ok(false) => None,
            Err(err) => Some(Err(err)),
        }
    }
}
