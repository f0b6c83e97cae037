// Copyright 2025 the Treescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 3D wireframe walk-through.
//!
//! Decode a 3D dump and trace the single-path box wireframe a renderer
//! would draw for its root region.
//!
//! Run:
//! - `cargo run -p treescope_demos --example wireframe`

use treescope_draw::{Project, box_wireframe};
use treescope_dump::{Dim, Tree, decode_any};

fn main() {
    let dump = "1\n\
                1 0.0 0.0 0.0 4.0 2.0 1.0\n\
                2 1.0 1.0 0.5 3.0 1.5 0.25\n";

    // Runtime dispatch, as the CLI does it.
    let any = decode_any(dump, Dim::Three).expect("a well-formed dump");
    println!("decoded a {}-dimensional tree", any.dim());

    // Static dispatch for the same bytes.
    let tree: Tree<3> = dump.parse().expect("a well-formed dump");
    let root = tree.branch_levels()[0][0];
    let path = box_wireframe(&root);
    println!("wireframe path over {:?} -> {:?}:", root.min, root.max);
    for v in path {
        println!("  ({}, {}, {})", v.x, v.y, v.z);
    }
    assert_eq!(path.len(), 16, "a box wireframe is one 16-vertex path");

    let prims = tree.project();
    assert_eq!(prims.len(), 3, "one wireframe and two leaf markers");
    println!("projected {} primitives", prims.len());
}
