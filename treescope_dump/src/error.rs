// Copyright 2025 the Treescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`decode`](crate::decode) and friends.

use alloc::string::String;
use thiserror::Error;

/// Why a dump could not be decoded.
///
/// Decoding is all-or-nothing: on any error no partial
/// [`Tree`](crate::Tree) is produced. A malformed dump is a permanent
/// condition, so there is no retry path; callers should abort the
/// visualization run and surface the message. `line` fields are 1-based
/// positions in the dump text.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The dump contained no lines at all.
    #[error("empty dump")]
    Empty,

    /// A line did not begin with a non-negative integer entry count.
    #[error("line {line}: expected a leading entry count, found {token:?}")]
    InvalidCount {
        /// Line the bad count was found on.
        line: usize,
        /// The offending token (empty for a blank line).
        token: String,
    },

    /// A field failed numeric parsing.
    #[error("line {line}: not a number: {token:?}")]
    InvalidNumber {
        /// Line the bad field was found on.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// A line's declared entry count disagrees with the fields present.
    #[error(
        "line {line}: {declared} declared entries need {expected} fields, found {found}"
    )]
    FieldCount {
        /// Line with the mismatch.
        line: usize,
        /// Entry count the line declared.
        declared: usize,
        /// Fields the declared count implies.
        expected: usize,
        /// Fields actually present.
        found: usize,
    },

    /// The dump ended before the declared leaf line was consumed.
    #[error("dump truncated at line {found}, expected {expected} lines")]
    Truncated {
        /// Lines the header implies (`L + 2`).
        expected: usize,
        /// Lines actually present.
        found: usize,
    },

    /// A dimensionality outside 1..=3 was requested.
    #[error("unsupported dimensionality {0}, expected 1, 2, or 3")]
    UnsupportedDim(usize),

    /// The dump file could not be read.
    #[cfg(feature = "std")]
    #[error("reading dump: {0}")]
    Io(#[from] std::io::Error),
}
