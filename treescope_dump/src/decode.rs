// Copyright 2025 the Treescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-pass dump decoding and the per-dimensionality field layouts.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::error::DecodeError;
use crate::types::{AnyTree, Dim, LeafPoint, Region, Tree};

/// Field layout of one dump entry.
///
/// The layout differs per dimensionality, so each dimensionality gets its
/// own impl rather than one generic unpacking loop; mixing layouts silently
/// corrupts geometry. Producers write the min corner's fields first, then
/// the max corner's:
///
/// | entry         | fields                              |
/// |---------------|-------------------------------------|
/// | `Region<1>`   | `min max`                           |
/// | `Region<2>`   | `xmin ymin xmax ymax`               |
/// | `Region<3>`   | `xmin ymin zmin xmax ymax zmax`     |
/// | `LeafPoint<D>`| `D` coordinates                     |
pub trait FromFields: Sized {
    /// Number of whitespace-separated numeric fields per entry.
    const FIELDS: usize;

    /// Build an entry from exactly [`FIELDS`](Self::FIELDS) parsed fields.
    fn from_fields(fields: &[f64]) -> Self;
}

impl FromFields for Region<1> {
    const FIELDS: usize = 2;

    fn from_fields(f: &[f64]) -> Self {
        Self::new([f[0]], [f[1]])
    }
}

impl FromFields for Region<2> {
    const FIELDS: usize = 4;

    fn from_fields(f: &[f64]) -> Self {
        Self::new([f[0], f[1]], [f[2], f[3]])
    }
}

impl FromFields for Region<3> {
    const FIELDS: usize = 6;

    fn from_fields(f: &[f64]) -> Self {
        Self::new([f[0], f[1], f[2]], [f[3], f[4], f[5]])
    }
}

impl FromFields for LeafPoint<1> {
    const FIELDS: usize = 1;

    fn from_fields(f: &[f64]) -> Self {
        Self::new([f[0]])
    }
}

impl FromFields for LeafPoint<2> {
    const FIELDS: usize = 2;

    fn from_fields(f: &[f64]) -> Self {
        Self::new([f[0], f[1]])
    }
}

impl FromFields for LeafPoint<3> {
    const FIELDS: usize = 3;

    fn from_fields(f: &[f64]) -> Self {
        Self::new([f[0], f[1], f[2]])
    }
}

/// Decode a dump into a `D`-dimensional [`Tree`].
///
/// One forward pass, no backtracking: the header line gives the number of
/// branch levels `L`, the next `L` lines hold regions, and one more line
/// holds the leaf points. Exactly `L + 2` lines are consumed; anything after
/// them is ignored. Any structural problem aborts with a [`DecodeError`]
/// identifying the line, and no partial tree is returned.
///
/// Fields are separated by ASCII whitespace. Producers emit single spaces;
/// runs of spaces and tabs are deliberately accepted too, since the grammar
/// stays unambiguous and hand-edited dumps stay loadable.
pub fn decode<const D: usize>(src: &str) -> Result<Tree<D>, DecodeError>
where
    Region<D>: FromFields,
    LeafPoint<D>: FromFields,
{
    let mut lines = src.lines();
    let header = lines.next().ok_or(DecodeError::Empty)?;
    let leaf_level = parse_count(header.trim(), 1)?;
    let expected_lines = leaf_level.saturating_add(2);

    // The header is untrusted; an absurd level count must surface as
    // `Truncated` when the lines run out, not as an allocation failure here.
    let mut branches = Vec::with_capacity(leaf_level.min(1024));
    for level in 0..leaf_level {
        let line_no = level + 2;
        let line = lines.next().ok_or(DecodeError::Truncated {
            expected: expected_lines,
            found: line_no - 1,
        })?;
        branches.push(parse_entries::<Region<D>>(line, line_no)?);
    }

    let leaf_line_no = leaf_level + 2;
    let line = lines.next().ok_or(DecodeError::Truncated {
        expected: expected_lines,
        found: leaf_line_no - 1,
    })?;
    let leaves = parse_entries::<LeafPoint<D>>(line, leaf_line_no)?;

    Ok(Tree { branches, leaves })
}

/// Decode a dump with the dimensionality chosen at runtime.
pub fn decode_any(src: &str, dim: Dim) -> Result<AnyTree, DecodeError> {
    match dim {
        Dim::One => decode::<1>(src).map(AnyTree::One),
        Dim::Two => decode::<2>(src).map(AnyTree::Two),
        Dim::Three => decode::<3>(src).map(AnyTree::Three),
    }
}

/// Read and decode a dump file.
#[cfg(feature = "std")]
pub fn load<const D: usize>(path: impl AsRef<std::path::Path>) -> Result<Tree<D>, DecodeError>
where
    Region<D>: FromFields,
    LeafPoint<D>: FromFields,
{
    let src = std::fs::read_to_string(path)?;
    decode(&src)
}

/// Read and decode a dump file with the dimensionality chosen at runtime.
#[cfg(feature = "std")]
pub fn load_any(path: impl AsRef<std::path::Path>, dim: Dim) -> Result<AnyTree, DecodeError> {
    let src = std::fs::read_to_string(path)?;
    decode_any(&src, dim)
}

impl<const D: usize> FromStr for Tree<D>
where
    Region<D>: FromFields,
    LeafPoint<D>: FromFields,
{
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, DecodeError> {
        decode(s)
    }
}

fn parse_count(token: &str, line: usize) -> Result<usize, DecodeError> {
    token.parse().map_err(|_| DecodeError::InvalidCount {
        line,
        token: token.to_string(),
    })
}

fn parse_entries<E: FromFields>(line: &str, line_no: usize) -> Result<Vec<E>, DecodeError> {
    let mut tokens = line.split_ascii_whitespace();
    let declared = parse_count(tokens.next().unwrap_or(""), line_no)?;

    let fields = tokens
        .map(|token| {
            token.parse::<f64>().map_err(|_| DecodeError::InvalidNumber {
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<f64>, DecodeError>>()?;

    // checked_mul guards against absurd counts on 32-bit targets.
    let expected = declared
        .checked_mul(E::FIELDS)
        .filter(|&expected| expected == fields.len())
        .ok_or(DecodeError::FieldCount {
            line: line_no,
            declared,
            expected: declared.saturating_mul(E::FIELDS),
            found: fields.len(),
        })?;
    debug_assert_eq!(expected, fields.len());

    Ok(fields.chunks_exact(E::FIELDS).map(E::from_fields).collect())
}
