// Copyright 2025 the Treescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Treescope Dump: decoder for level-by-level R-tree structure dumps.
//!
//! An R-tree dump is a small plain-text format describing one snapshot of a
//! spatial-partition tree: a header line with the number of non-leaf levels,
//! one line of bounding regions per level (root first), and a final line of
//! leaf points. The same grammar serves 1, 2, and 3 dimensions; only the
//! number of fields per entry changes (2, 4, or 6 per region and 1, 2, or 3
//! per point).
//!
//! - [`decode`] parses a dump into an immutable [`Tree`] in one forward pass.
//! - [`decode_any`] does the same with the dimensionality chosen at runtime
//!   via [`Dim`], yielding an [`AnyTree`].
//! - Decoding is all-or-nothing: any structural problem yields a
//!   [`DecodeError`] naming the offending line and no partial tree.
//!
//! The field order within a region is dimensionality-specific and selected by
//! the [`FromFields`] impl for that dimensionality; see that trait for the
//! exact layouts. Dumps carry no version or dimensionality tag, so the
//! caller must know the dimensionality out of band.
//!
//! # Example
//!
//! ```rust
//! use treescope_dump::Tree;
//!
//! let dump = "1\n\
//!             2 0.0 0.0 10.0 10.0 5.0 5.0 10.0 10.0\n\
//!             3 1.0 1.0 2.0 2.0 9.0 9.0\n";
//! let tree: Tree<2> = dump.parse().unwrap();
//!
//! assert_eq!(tree.level_count(), 2);
//! assert_eq!(tree.branch_levels()[0].len(), 2);
//! assert_eq!(tree.leaves().len(), 3);
//! assert_eq!(tree.leaves()[2].coords, [9.0, 9.0]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. The `std` feature (on by
//! default) adds [`load`]/[`load_any`] and an I/O error variant.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod decode;
pub mod error;
pub mod types;

pub use decode::{FromFields, decode, decode_any};
pub use error::DecodeError;
pub use types::{AnyTree, Dim, LeafPoint, Region, Tree};

#[cfg(feature = "std")]
pub use decode::{load, load_any};
