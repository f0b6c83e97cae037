// Copyright 2025 the Treescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-dimensionality vertex construction.

use alloc::vec;
use alloc::vec::Vec;

use glam::DVec3;
use kurbo::{Point, Rect};
use treescope_dump::{Region, Tree};

use crate::primitive::{Primitive, PrimitiveKind};

/// Projection from a decoded tree to drawable primitives.
///
/// One primitive per region and per leaf point, in level order (root level
/// first, leaf points last). Regions are assumed well-formed; the decoder
/// already rejected anything with a bad field stride.
pub trait Project {
    /// Vertex type of the produced primitives.
    type Vertex;

    /// Project every region and leaf point into a primitive.
    fn project(&self) -> Vec<Primitive<Self::Vertex>>;
}

/// Horizontal jitter separating sibling intervals at the same 1D level.
///
/// Purely presentational: the value never appears in the data model. It is
/// deterministic in the region's index within its level and the level's
/// entry count, and stays within `[-0.25, 0.25)` so neighboring levels
/// cannot collide.
pub fn sibling_offset(index: usize, count: usize) -> f64 {
    debug_assert!(index < count, "index must lie within its level");
    (index as f64 / count as f64 * 0.85) % 0.5 - 0.25
}

/// Two-point segment for a 1D region, drawn vertically at its level.
pub fn level_segment(region: &Region<1>, level: usize, index: usize, count: usize) -> [Point; 2] {
    let x = level as f64 + sibling_offset(index, count);
    [Point::new(x, region.min[0]), Point::new(x, region.max[0])]
}

/// The 2D region as a [`kurbo::Rect`].
pub fn to_rect(region: &Region<2>) -> Rect {
    Rect::new(region.min[0], region.min[1], region.max[0], region.max[1])
}

/// Five-point closed outline of a 2D region, counter-clockwise from the min
/// corner, first vertex repeated last.
pub fn rect_outline(region: &Region<2>) -> [Point; 5] {
    let r = to_rect(region);
    [
        Point::new(r.x0, r.y0),
        Point::new(r.x1, r.y0),
        Point::new(r.x1, r.y1),
        Point::new(r.x0, r.y1),
        Point::new(r.x0, r.y0),
    ]
}

/// Corner choices (0 = min, 1 = max, per axis) tracing all 12 edges of a box
/// as one connected path. Four corners are revisited to avoid lifting the
/// pen.
const BOX_PATH: [[usize; 3]; 16] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
    [0, 0, 1],
    [1, 0, 1],
    [1, 0, 0],
    [1, 1, 0],
    [1, 1, 1],
    [0, 1, 1],
    [0, 1, 0],
];

/// Sixteen-point single-path wireframe of a 3D region.
pub fn box_wireframe(region: &Region<3>) -> [DVec3; 16] {
    let corner = [region.min, region.max];
    BOX_PATH.map(|[x, y, z]| DVec3::new(corner[x][0], corner[y][1], corner[z][2]))
}

impl Project for Tree<1> {
    type Vertex = Point;

    fn project(&self) -> Vec<Primitive<Point>> {
        let mut out = Vec::new();
        for (level, regions) in self.branch_levels().iter().enumerate() {
            let count = regions.len();
            for (index, region) in regions.iter().enumerate() {
                out.push(Primitive {
                    level,
                    kind: PrimitiveKind::Segment,
                    vertices: level_segment(region, level, index, count).to_vec(),
                });
            }
        }
        let leaf_level = self.leaf_level();
        for point in self.leaves() {
            out.push(Primitive {
                level: leaf_level,
                kind: PrimitiveKind::Point,
                vertices: vec![Point::new(leaf_level as f64, point.coords[0])],
            });
        }
        out
    }
}

impl Project for Tree<2> {
    type Vertex = Point;

    fn project(&self) -> Vec<Primitive<Point>> {
        let mut out = Vec::new();
        for (level, regions) in self.branch_levels().iter().enumerate() {
            for region in regions {
                out.push(Primitive {
                    level,
                    kind: PrimitiveKind::Outline,
                    vertices: rect_outline(region).to_vec(),
                });
            }
        }
        let leaf_level = self.leaf_level();
        for point in self.leaves() {
            out.push(Primitive {
                level: leaf_level,
                kind: PrimitiveKind::Point,
                vertices: vec![Point::new(point.coords[0], point.coords[1])],
            });
        }
        out
    }
}

impl Project for Tree<3> {
    type Vertex = DVec3;

    fn project(&self) -> Vec<Primitive<DVec3>> {
        let mut out = Vec::new();
        for (level, regions) in self.branch_levels().iter().enumerate() {
            for region in regions {
                out.push(Primitive {
                    level,
                    kind: PrimitiveKind::Outline,
                    vertices: box_wireframe(region).to_vec(),
                });
            }
        }
        let leaf_level = self.leaf_level();
        for point in self.leaves() {
            out.push(Primitive {
                level: leaf_level,
                kind: PrimitiveKind::Point,
                vertices: vec![DVec3::new(point.coords[0], point.coords[1], point.coords[2])],
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use treescope_dump::decode;

    #[test]
    fn segment_has_two_vertices_at_its_level() {
        let region = Region::new([-3.0], [4.0]);
        let [a, b] = level_segment(&region, 2, 0, 1);
        assert_eq!(a.y, -3.0);
        assert_eq!(b.y, 4.0);
        assert_eq!(a.x, b.x, "a segment is vertical");
        assert!((a.x - 2.0).abs() < 0.25 + 1e-12, "jitter stays near the level");
    }

    #[test]
    fn jitter_is_bounded_and_deterministic() {
        for count in 1..20 {
            for index in 0..count {
                let off = sibling_offset(index, count);
                assert!((-0.25..0.25).contains(&off), "offset {off} out of range");
                assert_eq!(off, sibling_offset(index, count));
            }
        }
    }

    #[test]
    fn jitter_separates_adjacent_siblings() {
        let a = sibling_offset(0, 4);
        let b = sibling_offset(1, 4);
        assert_ne!(a, b);
    }

    #[test]
    fn rectangle_outline_is_closed_and_ordered() {
        let region = Region::new([0.0, 0.0], [10.0, 10.0]);
        let vs = rect_outline(&region);
        assert_eq!(vs.len(), 5);
        assert_eq!(vs[0], vs[4], "outline closes on its first vertex");
        assert_eq!(vs[1], Point::new(10.0, 0.0));
        assert_eq!(vs[2], Point::new(10.0, 10.0));
        assert_eq!(vs[3], Point::new(0.0, 10.0));
    }

    #[test]
    fn wireframe_covers_every_box_edge_once() {
        let vs = BOX_PATH;
        let mut edges: BTreeSet<([usize; 3], [usize; 3])> = BTreeSet::new();
        for pair in vs.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let differing = (0..3).filter(|&i| a[i] != b[i]).count();
            assert_eq!(differing, 1, "each step moves along exactly one axis");
            edges.insert(if a < b { (a, b) } else { (b, a) });
        }
        assert_eq!(edges.len(), 12, "all box edges are traced");
    }

    #[test]
    fn wireframe_vertices_use_region_bounds() {
        let region = Region::new([0.0, 1.0, 2.0], [10.0, 11.0, 12.0]);
        let vs = box_wireframe(&region);
        assert_eq!(vs.len(), 16);
        assert_eq!(vs[0], DVec3::new(0.0, 1.0, 2.0));
        assert_eq!(vs[7], DVec3::new(10.0, 11.0, 12.0));
        for v in vs {
            assert!(v.x == 0.0 || v.x == 10.0);
            assert!(v.y == 1.0 || v.y == 11.0);
            assert!(v.z == 2.0 || v.z == 12.0);
        }
    }

    #[test]
    fn projected_counts_per_dimensionality() {
        let one: Tree<1> = decode("1\n1 -1.0 1.0\n2 -0.5 0.5\n").unwrap();
        let prims = one.project();
        assert_eq!(prims.len(), 3);
        assert_eq!(prims[0].kind, PrimitiveKind::Segment);
        assert_eq!(prims[0].vertices.len(), 2);
        assert_eq!(prims[1].kind, PrimitiveKind::Point);
        assert_eq!(prims[1].vertices, vec![Point::new(1.0, -0.5)]);

        let two: Tree<2> = decode("1\n1 0.0 0.0 1.0 1.0\n1 0.5 0.5\n").unwrap();
        let prims = two.project();
        assert_eq!(prims[0].vertices.len(), 5);
        assert_eq!(prims[1].vertices, vec![Point::new(0.5, 0.5)]);

        let three: Tree<3> = decode("1\n1 0.0 0.0 0.0 1.0 1.0 1.0\n1 0.5 0.5 0.5\n").unwrap();
        let prims = three.project();
        assert_eq!(prims[0].vertices.len(), 16);
        assert_eq!(prims[1].vertices.len(), 1);
    }

    #[test]
    fn primitives_carry_their_level() {
        let dump = "2\n1 0.0 0.0 4.0 4.0\n2 0.0 0.0 2.0 2.0 2.0 2.0 4.0 4.0\n1 1.0 1.0\n";
        let tree: Tree<2> = decode(dump).unwrap();
        let prims = tree.project();
        let levels: Vec<usize> = prims.iter().map(|p| p.level).collect();
        assert_eq!(levels, vec![0, 1, 1, 2]);
        assert_eq!(prims.last().unwrap().kind, PrimitiveKind::Point);
    }
}
