// Copyright 2025 the Treescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decode and projection throughput over synthesized dumps.

use std::fmt::Write as _;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use treescope_draw::Project;
use treescope_dump::{Tree, decode};

/// Build a plausible 2D dump: geometrically growing levels of nested
/// rectangles over a grid of leaf points.
fn synth_dump_2d(leaf_count: usize) -> String {
    let mut levels = Vec::new();
    let mut count = leaf_count / 8;
    while count >= 1 {
        levels.push(count);
        count /= 8;
    }
    levels.reverse();

    let mut out = String::new();
    let _ = writeln!(out, "{}", levels.len());
    for count in levels {
        let _ = write!(out, "{count}");
        for i in 0..count {
            let x = (i % 64) as f64;
            let y = (i / 64) as f64;
            let _ = write!(out, " {} {} {} {}", x, y, x + 4.0, y + 4.0);
        }
        let _ = writeln!(out);
    }
    let _ = write!(out, "{leaf_count}");
    for i in 0..leaf_count {
        let _ = write!(out, " {} {}", (i % 512) as f64 * 0.25, (i / 512) as f64 * 0.25);
    }
    let _ = writeln!(out);
    out
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_2d");
    for leaf_count in [512_usize, 8192] {
        let dump = synth_dump_2d(leaf_count);
        group.bench_function(format!("leaves_{leaf_count}"), |b| {
            b.iter(|| decode::<2>(black_box(&dump)).unwrap());
        });
    }
    group.finish();
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project_2d");
    for leaf_count in [512_usize, 8192] {
        let tree: Tree<2> = decode(&synth_dump_2d(leaf_count)).unwrap();
        group.bench_function(format!("leaves_{leaf_count}"), |b| {
            b.iter(|| black_box(&tree).project());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_project);
criterion_main!(benches);
