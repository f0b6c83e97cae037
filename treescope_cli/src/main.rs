// Copyright 2025 the Treescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `treescope`: render R-tree structure dumps to SVG.
//!
//! One dump file becomes one SVG image. `render` handles a single file;
//! `batch` walks a numbered sequence of dumps (as produced by an insert-one
//! -point-per-step run of the upstream tree builder) and writes one numbered
//! frame per input, suitable for assembling into an animation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use treescope_draw::Project;
use treescope_dump::{AnyTree, Dim, decode_any};

mod svg;

#[derive(Parser)]
#[command(name = "treescope", version, about = "Render R-tree structure dumps to SVG")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one dump file to an SVG image.
    Render {
        /// Dump file to read.
        input: PathBuf,
        /// Dimensionality of the dump (1, 2, or 3).
        #[arg(short, long, default_value_t = 2)]
        dim: usize,
        /// Output path; defaults to the input path with an `svg` extension.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a numbered sequence of dump files to numbered SVG frames.
    Batch {
        /// Number of frames to render.
        count: usize,
        /// Input path pattern; `{}` is replaced by the frame index.
        #[arg(long, default_value = "Point{}.txt")]
        pattern: String,
        /// Index of the first frame.
        #[arg(long, default_value_t = 1)]
        start: usize,
        /// Dimensionality of the dumps (1, 2, or 3).
        #[arg(short, long, default_value_t = 2)]
        dim: usize,
        /// Directory the numbered frames are written into.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Command::Render { input, dim, output } => render(&input, dim, output),
        Command::Batch {
            count,
            pattern,
            start,
            dim,
            out_dir,
        } => batch(&pattern, start, count, dim, &out_dir),
    }
}

fn render(input: &Path, dim: usize, output: Option<PathBuf>) -> Result<()> {
    let dim = Dim::try_from(dim)?;
    let document = render_file(input, dim)?;
    let output = output.unwrap_or_else(|| input.with_extension("svg"));
    fs::write(&output, document).with_context(|| format!("writing {}", output.display()))?;
    info!(output = %output.display(), "rendered");
    Ok(())
}

fn batch(pattern: &str, start: usize, count: usize, dim: usize, out_dir: &Path) -> Result<()> {
    let dim = Dim::try_from(dim)?;
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    for index in start..start + count {
        // Each frame gets a fresh scene; nothing carries across iterations.
        let input = PathBuf::from(pattern.replace("{}", &index.to_string()));
        let document = render_file(&input, dim)?;
        let output = out_dir.join(frame_name(index));
        fs::write(&output, document)
            .with_context(|| format!("writing {}", output.display()))?;
        info!(frame = index, output = %output.display(), "rendered");
    }
    Ok(())
}

fn render_file(path: &Path, dim: Dim) -> Result<String> {
    let src =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    render_dump(&src, dim).with_context(|| format!("decoding {}", path.display()))
}

/// Decode a dump and lay it out as an SVG document.
fn render_dump(src: &str, dim: Dim) -> Result<String> {
    let tree = decode_any(src, dim)?;
    Ok(scene_for(&tree).to_svg())
}

fn scene_for(tree: &AnyTree) -> svg::Scene {
    let mut scene = svg::Scene::new();
    let leaf_level = tree.leaf_level();
    match tree {
        AnyTree::One(t) => scene.add_planar(&t.project(), leaf_level),
        AnyTree::Two(t) => scene.add_planar(&t.project(), leaf_level),
        AnyTree::Three(t) => scene.add_spatial(&t.project(), leaf_level),
    }
    scene
}

fn frame_name(index: usize) -> String {
    format!("Point{index:04}.svg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write as _;

    const TWO_D: &str = "1\n2 0.0 0.0 10.0 10.0 5.0 5.0 10.0 10.0\n3 1.0 1.0 2.0 2.0 9.0 9.0\n";

    #[test]
    fn frame_names_are_zero_padded() {
        assert_eq!(frame_name(1), "Point0001.svg");
        assert_eq!(frame_name(1000), "Point1000.svg");
        assert_eq!(frame_name(12345), "Point12345.svg");
    }

    #[test]
    fn render_dump_produces_rectangles_and_markers() {
        let document = render_dump(TWO_D, Dim::Two).unwrap();
        assert_eq!(document.matches("<polyline").count(), 2);
        assert_eq!(document.matches("<circle").count(), 3);
    }

    #[test]
    fn render_dump_one_dimensional() {
        let document = render_dump("1\n2 -1.0 0.0 0.0 1.0\n2 -0.5 0.5\n", Dim::One).unwrap();
        assert_eq!(document.matches("<polyline").count(), 2);
        assert_eq!(document.matches("<circle").count(), 2);
    }

    #[test]
    fn render_dump_three_dimensional() {
        let document =
            render_dump("1\n1 0.0 0.0 0.0 1.0 1.0 1.0\n1 0.5 0.5 0.5\n", Dim::Three).unwrap();
        // One wireframe path with sixteen mapped vertices.
        assert_eq!(document.matches("<polyline").count(), 1);
        let points_attr = document
            .split("points=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap();
        assert_eq!(points_attr.split(' ').count(), 16);
    }

    #[test]
    fn render_dump_rejects_malformed_input() {
        assert!(render_dump("2\n1 0.0 0.0 1.0 1.0\n", Dim::Two).is_err());
    }

    #[test]
    fn render_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_D.as_bytes()).unwrap();
        let document = render_file(file.path(), Dim::Two).unwrap();
        assert!(document.starts_with("<svg"));
    }

    #[test]
    fn render_file_reports_missing_input() {
        let err = render_file(Path::new("no/such/dump.txt"), Dim::Two).unwrap_err();
        assert!(err.to_string().contains("no/such/dump.txt"));
    }
}
