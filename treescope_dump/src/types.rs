// Copyright 2025 the Treescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree dump data model: dimensionality, regions, leaf points, and trees.

use alloc::vec::Vec;
use core::fmt;

use crate::error::DecodeError;

/// Dimensionality of a dump, for the runtime-dispatch entry points.
///
/// The dump format is not self-describing, so the dimensionality must be
/// supplied by the caller. Conversions from out-of-band integers (for
/// example a `--dim` command-line flag) go through [`TryFrom<usize>`] and
/// reject anything outside 1..=3.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dim {
    /// Intervals on a line.
    One = 1,
    /// Rectangles in the plane.
    Two = 2,
    /// Axis-aligned boxes in space.
    Three = 3,
}

impl Dim {
    /// The dimensionality as a plain integer.
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    /// Numeric fields per region line entry (2·D).
    pub const fn region_fields(self) -> usize {
        2 * self.as_usize()
    }

    /// Numeric fields per leaf line entry (D).
    pub const fn point_fields(self) -> usize {
        self.as_usize()
    }
}

impl TryFrom<usize> for Dim {
    type Error = DecodeError;

    fn try_from(value: usize) -> Result<Self, DecodeError> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(DecodeError::UnsupportedDim(other)),
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

/// Axis-aligned bounding region at one tree level.
///
/// Stored min-corner/max-corner regardless of how the dump encoded it; the
/// per-dimensionality field order lives in [`FromFields`](crate::FromFields).
/// Bounds come straight from the producer and are not validated beyond
/// numeric parsing (a well-formed producer never emits `min > max`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region<const D: usize> {
    /// Minimum corner, one value per axis.
    pub min: [f64; D],
    /// Maximum corner, one value per axis.
    pub max: [f64; D],
}

impl<const D: usize> Region<D> {
    /// Create a region from min/max corners.
    pub const fn new(min: [f64; D], max: [f64; D]) -> Self {
        Self { min, max }
    }
}

/// One indexed data point from the final (leaf) level of a dump.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LeafPoint<const D: usize> {
    /// Coordinates, one value per axis.
    pub coords: [f64; D],
}

impl<const D: usize> LeafPoint<D> {
    /// Create a leaf point from its coordinates.
    pub const fn new(coords: [f64; D]) -> Self {
        Self { coords }
    }
}

/// A decoded tree dump: `L` branch levels of regions plus one leaf level of
/// points.
///
/// Built only by [`decode`](crate::decode) and immutable thereafter. Level 0
/// is the root level; the leaf points always sit below the last branch
/// level, which the types enforce rather than a runtime invariant.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree<const D: usize> {
    pub(crate) branches: Vec<Vec<Region<D>>>,
    pub(crate) leaves: Vec<LeafPoint<D>>,
}

impl<const D: usize> Tree<D> {
    /// Regions per branch level, root level first.
    pub fn branch_levels(&self) -> &[Vec<Region<D>>] {
        &self.branches
    }

    /// The leaf points.
    pub fn leaves(&self) -> &[LeafPoint<D>] {
        &self.leaves
    }

    /// Index of the leaf level, equal to the dump's header integer `L`.
    pub fn leaf_level(&self) -> usize {
        self.branches.len()
    }

    /// Total number of levels including the leaf level (`L + 1`).
    pub fn level_count(&self) -> usize {
        self.branches.len() + 1
    }
}

/// A tree whose dimensionality was chosen at runtime.
///
/// Produced by [`decode_any`](crate::decode_any); callers that know the
/// dimensionality statically should use [`decode`](crate::decode) and
/// `Tree<D>` directly.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyTree {
    /// A 1-dimensional tree of intervals.
    One(Tree<1>),
    /// A 2-dimensional tree of rectangles.
    Two(Tree<2>),
    /// A 3-dimensional tree of boxes.
    Three(Tree<3>),
}

impl AnyTree {
    /// The dimensionality this tree was decoded with.
    pub fn dim(&self) -> Dim {
        match self {
            Self::One(_) => Dim::One,
            Self::Two(_) => Dim::Two,
            Self::Three(_) => Dim::Three,
        }
    }

    /// Total number of levels including the leaf level.
    pub fn level_count(&self) -> usize {
        match self {
            Self::One(t) => t.level_count(),
            Self::Two(t) => t.level_count(),
            Self::Three(t) => t.level_count(),
        }
    }

    /// Index of the leaf level.
    pub fn leaf_level(&self) -> usize {
        self.level_count() - 1
    }
}
