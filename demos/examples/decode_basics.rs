// Copyright 2025 the Treescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dump decoding basics.
//!
//! Decode a small 2D dump, look at its levels, and project it into
//! renderer-facing primitives.
//!
//! Run:
//! - `cargo run -p treescope_demos --example decode_basics`

use treescope_draw::{PrimitiveKind, Project};
use treescope_dump::Tree;

fn main() {
    // One branch level with two rectangles over three indexed points.
    let dump = "1\n\
                2 0.0 0.0 10.0 10.0 5.0 5.0 10.0 10.0\n\
                3 1.0 1.0 2.0 2.0 9.0 9.0\n";

    let tree: Tree<2> = dump.parse().expect("a well-formed dump");
    println!(
        "levels: {} ({} branch, 1 leaf)",
        tree.level_count(),
        tree.leaf_level()
    );
    for (level, regions) in tree.branch_levels().iter().enumerate() {
        for region in regions {
            println!("level {level}: {:?} -> {:?}", region.min, region.max);
        }
    }
    println!("leaves: {:?}", tree.leaves());

    // Project into drawable primitives.
    let prims = tree.project();
    println!("primitives: {}", prims.len());
    for prim in &prims {
        println!(
            "  level {} {:?} with {} vertices",
            prim.level,
            prim.kind,
            prim.vertices.len()
        );
    }

    let outlines = prims
        .iter()
        .filter(|p| p.kind == PrimitiveKind::Outline)
        .count();
    assert_eq!(outlines, 2, "one outline per region");
}
