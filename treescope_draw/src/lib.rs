// Copyright 2025 the Treescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Treescope Draw: turns decoded tree dumps into drawable primitives.
//!
//! A renderer wants vertex lists, not bounding regions. This crate projects
//! each entry of a [`Tree`](treescope_dump::Tree) into one
//! [`Primitive`]: an ordered vertex list tagged with the entry's level and a
//! [`PrimitiveKind`] the renderer can dispatch on for palette and width
//! selection.
//!
//! The vertex construction is pure and dimension-specific:
//!
//! - 1D regions become two-point vertical segments in a level-vs-value
//!   plane, with a small deterministic horizontal jitter so siblings at the
//!   same level stay distinguishable.
//! - 2D regions become five-point closed rectangle outlines.
//! - 3D regions become sixteen-point single-path box wireframes covering
//!   all twelve edges without lifting the pen.
//! - Leaf points become single-vertex primitives at their raw coordinates
//!   (1D leaves are placed at `x = leaf_level` in the plotting plane).
//!
//! 1D and 2D projections use [`kurbo::Point`] vertices; 3D uses
//! [`glam::DVec3`]. The renderer decides how to get those on screen.
//!
//! # Example
//!
//! ```rust
//! use treescope_dump::Tree;
//! use treescope_draw::{PrimitiveKind, Project};
//!
//! let dump = "1\n2 0.0 0.0 10.0 10.0 5.0 5.0 10.0 10.0\n3 1.0 1.0 2.0 2.0 9.0 9.0\n";
//! let tree: Tree<2> = dump.parse().unwrap();
//!
//! let prims = tree.project();
//! assert_eq!(prims.len(), 5); // 2 rectangles + 3 leaf points
//! assert_eq!(prims[0].kind, PrimitiveKind::Outline);
//! assert_eq!(prims[0].vertices.len(), 5);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod primitive;
pub mod project;

pub use primitive::{Primitive, PrimitiveKind};
pub use project::{Project, box_wireframe, level_segment, rect_outline, sibling_offset, to_rect};
