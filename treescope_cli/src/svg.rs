// Copyright 2025 the Treescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG scene assembly: level styling, screen mapping, and emission.

use std::fmt::Write as _;

use glam::DVec3;
use kurbo::{Point, Rect};
use treescope_draw::{Primitive, PrimitiveKind};

/// Level palette, strongest first: black, tab:orange, tab:blue, tab:purple.
/// Leaf markers always take the last entry.
const PALETTE: [&str; 4] = ["#000000", "#ff7f0e", "#1f77b4", "#9467bd"];

/// Stroke widths, root-most level widest. Planar (1D/2D) scenes taper
/// gradually; spatial scenes thin out immediately below the root so nested
/// wireframes stay readable.
const PLANAR_WIDTHS: [f64; 3] = [1.5, 1.0, 0.5];
const SPATIAL_WIDTHS: [f64; 3] = [1.5, 0.5, 0.5];

/// Rendered width of the output image in pixels.
const IMAGE_WIDTH: f64 = 640.0;

/// Marker radius in pixels.
const MARKER_RADIUS: f64 = 2.0;

/// Stroke styling for one tree level.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Style {
    pub(crate) stroke: &'static str,
    pub(crate) width: f64,
}

/// Style for a branch level.
///
/// Shallow trees start further down the palette so the root of a two-level
/// tree and the root of a four-level tree read the same relative to their
/// leaves: the slot is `level + palette_len - 1 - leaf_level`, clamped.
pub(crate) fn level_style(level: usize, leaf_level: usize, widths: &[f64; 3]) -> Style {
    let slot = (level + PALETTE.len() - 1).saturating_sub(leaf_level);
    Style {
        stroke: PALETTE[slot.min(PALETTE.len() - 1)],
        width: widths[slot.min(widths.len() - 1)],
    }
}

/// Fixed isometric camera taking 3D wireframe vertices to the drawing plane
/// (z up).
pub(crate) fn isometric(v: DVec3) -> Point {
    const COS_30: f64 = 0.866_025_403_784_438_6;
    Point::new((v.x - v.y) * COS_30, (v.x + v.y) * 0.5 - v.z)
}

/// One SVG image being assembled.
///
/// A scene is built fresh for every rendered file; nothing carries over
/// between frames of a batch.
#[derive(Debug, Default)]
pub(crate) struct Scene {
    polylines: Vec<(Vec<Point>, Style)>,
    markers: Vec<Point>,
    bounds: Option<Rect>,
}

impl Scene {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add primitives already in the drawing plane (1D and 2D projections).
    pub(crate) fn add_planar(&mut self, prims: &[Primitive<Point>], leaf_level: usize) {
        for prim in prims {
            match prim.kind {
                PrimitiveKind::Segment | PrimitiveKind::Outline => {
                    self.push_polyline(
                        prim.vertices.clone(),
                        level_style(prim.level, leaf_level, &PLANAR_WIDTHS),
                    );
                }
                PrimitiveKind::Point => self.push_marker(prim.vertices[0]),
            }
        }
    }

    /// Add 3D primitives, mapping each vertex through the [`isometric`]
    /// camera.
    pub(crate) fn add_spatial(&mut self, prims: &[Primitive<DVec3>], leaf_level: usize) {
        for prim in prims {
            let vertices: Vec<Point> = prim.vertices.iter().copied().map(isometric).collect();
            match prim.kind {
                PrimitiveKind::Segment | PrimitiveKind::Outline => {
                    self.push_polyline(
                        vertices,
                        level_style(prim.level, leaf_level, &SPATIAL_WIDTHS),
                    );
                }
                PrimitiveKind::Point => self.push_marker(vertices[0]),
            }
        }
    }

    fn push_polyline(&mut self, vertices: Vec<Point>, style: Style) {
        for pair in vertices.windows(2) {
            self.grow_bounds(Rect::from_points(pair[0], pair[1]));
        }
        if let [only] = vertices[..] {
            self.grow_bounds(Rect::from_points(only, only));
        }
        self.polylines.push((vertices, style));
    }

    fn push_marker(&mut self, at: Point) {
        self.grow_bounds(Rect::from_points(at, at));
        self.markers.push(at);
    }

    fn grow_bounds(&mut self, r: Rect) {
        self.bounds = Some(match self.bounds {
            Some(b) => b.union(r),
            None => r,
        });
    }

    /// The union of everything added so far, in data coordinates.
    pub(crate) fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Emit the scene as a standalone SVG document, y axis pointing up.
    pub(crate) fn to_svg(&self) -> String {
        let data = fitted(self.bounds);
        let scale = IMAGE_WIDTH / data.width();
        let height = data.height() * scale;
        let map = |p: Point| {
            (
                (p.x - data.x0) * scale,
                height - (p.y - data.y0) * scale,
            )
        };

        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{IMAGE_WIDTH:.0}" height="{height:.0}" viewBox="0 0 {IMAGE_WIDTH:.0} {height:.0}">"#,
        );
        for (vertices, style) in &self.polylines {
            let _ = write!(
                out,
                r#"  <polyline fill="none" stroke="{}" stroke-width="{}" points=""#,
                style.stroke, style.width
            );
            for (i, &v) in vertices.iter().enumerate() {
                let (x, y) = map(v);
                let sep = if i == 0 { "" } else { " " };
                let _ = write!(out, "{sep}{x:.2},{y:.2}");
            }
            let _ = writeln!(out, r#""/>"#);
        }
        for &m in &self.markers {
            let (x, y) = map(m);
            let _ = writeln!(
                out,
                r#"  <circle cx="{x:.2}" cy="{y:.2}" r="{MARKER_RADIUS}" fill="{}"/>"#,
                PALETTE[PALETTE.len() - 1]
            );
        }
        out.push_str("</svg>\n");
        out
    }
}

/// Pad the data bounds by 5% per side and keep both extents positive so the
/// screen mapping never divides by zero.
fn fitted(bounds: Option<Rect>) -> Rect {
    let b = bounds.unwrap_or(Rect::new(0.0, 0.0, 1.0, 1.0));
    let pad_x = (b.width() * 0.05).max(0.5);
    let pad_y = (b.height() * 0.05).max(0.5);
    b.inflate(pad_x, pad_y)
}
