//! nauty's graph6 format.
//!
//! The first byte is `order + 63`. The upper triangle of the adjacency matrix is read column by
//! column (`w = 2..=order`, `v = 1..w`) into a bit stream, which is cut into 6-bit groups (most
//! significant bit first, the last group zero-padded); each group is written as `group + 63`.
//! A first byte of 126 introduces the long form for orders above 62, which is not supported.

use crate::graph::MAX_ORDER;
use crate::{Error, Graph, Result};

const FORMAT: &str = "g6";
const BIAS: u8 = 63;
const LONG_ORDER: u8 = 126;

/// Optional file header written by some nauty tools.
pub const HEADER: &str = ">>graph6<<";

/// Number of data bytes following the order byte.
pub fn data_len(order: usize) -> usize {
    (order * order.saturating_sub(1) / 2).div_ceil(6)
}

pub fn encode(g: &Graph) -> String {
    let n = g.order();
    debug_assert!(n <= MAX_ORDER);
    let mut out = String::with_capacity(1 + data_len(n));
    out.push(char::from(n as u8 + BIAS));

    let mut group = 0u8;
    let mut filled = 0u32;
    for w in 2..=n {
        for v in 1..w {
            group = (group << 1) | u8::from(g.adjacent(v, w));
            filled += 1;
            if filled == 6 {
                out.push(char::from(group + BIAS));
                group = 0;
                filled = 0;
            }
        }
    }
    if filled > 0 {
        out.push(char::from((group << (6 - filled)) + BIAS));
    }
    out
}

pub fn decode(line: &str) -> Result<Graph> {
    let line = line.strip_prefix(HEADER).unwrap_or(line);
    let bytes = line.as_bytes();
    let Some(&first) = bytes.first() else {
        return Err(Error::parse(FORMAT, "empty line"));
    };
    if first == LONG_ORDER {
        return Err(Error::TooManyVertices {
            order: long_order(bytes).unwrap_or(MAX_ORDER + 1),
        });
    }
    if !(BIAS..LONG_ORDER).contains(&first) {
        let message = format!("invalid order byte {first:#04x}");
        return Err(Error::parse(FORMAT, message));
    }

    let order = usize::from(first - BIAS);
    let data = &bytes[1..];
    let expected = data_len(order);
    if data.len() != expected {
        let found = data.len();
        let message = format!("order {order} needs {expected} data bytes, found {found}");
        return Err(Error::parse(FORMAT, message));
    }
    if let Some(pos) = data.iter().position(|b| !(BIAS..=LONG_ORDER).contains(b)) {
        let (byte, offset) = (data[pos], pos + 1);
        let message = format!("invalid data byte {byte:#04x} at offset {offset}");
        return Err(Error::parse(FORMAT, message));
    }

    let mut bits = data
        .iter()
        .flat_map(|&b| (0..6).rev().map(move |i| ((b - BIAS) >> i) & 1 == 1));
    let mut edges = Vec::new();
    for w in 2..=order {
        for v in 1..w {
            if bits.next() == Some(true) {
                edges.push((v, w));
            }
        }
    }
    Graph::from_edges(order, &edges)
}

/// Order encoded by the 18-bit long form `126 b1 b2 b3`, when present.
fn long_order(bytes: &[u8]) -> Option<usize> {
    let digits = bytes.get(1..4)?;
    if digits[0] == LONG_ORDER {
        return None;
    }
    let mut order = 0;
    for &b in digits {
        order = (order << 6) | usize::from(b.wrapping_sub(BIAS) & 0x3f);
    }
    Some(order)
}
