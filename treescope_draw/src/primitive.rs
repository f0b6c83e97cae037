// Copyright 2025 the Treescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-facing drawable primitives.

use alloc::vec::Vec;

/// How a renderer should interpret a primitive's vertices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// A two-vertex line segment.
    Segment,
    /// A closed polyline outline (first vertex repeated last).
    Outline,
    /// A single marker vertex.
    Point,
}

/// One drawable item: an ordered vertex list plus the tree level it came
/// from.
///
/// The level index exists for the renderer's color/width selection; it has
/// no geometric meaning here. `V` is the vertex type of the projection that
/// produced the primitive ([`kurbo::Point`] for 1D/2D, [`glam::DVec3`] for
/// 3D).
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive<V> {
    /// Tree level the source entry sat at (leaf points use the leaf level).
    pub level: usize,
    /// Drawing interpretation of the vertices.
    pub kind: PrimitiveKind,
    /// The vertices, in draw order.
    pub vertices: Vec<V>,
}
