//! CLI tool for scrollgrid - renders a JSON table description and outputs
//! the draw trace as JSON
//!
//! Usage:
//!   scrollgrid_cli <table.json>                     # Trace to stdout
//!   scrollgrid_cli <table.json> -o trace.json       # Trace to file
//!   scrollgrid_cli <table.json> --pointer 40,120    # Hover at a screen point
//!   scrollgrid_cli <table.json> --drag 0,300        # Drag the body scrollbar
//!   scrollgrid_cli <table.json> --layout-pass       # Measurement-only pass
//!
//! Set `RUST_LOG=scrollgrid=trace` for render logging on stderr.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use scrollgrid::model::{StaticTable, TableSpec};
use scrollgrid::render::{DrawCommand, FrameStats, GridRenderer, RecordingSurface};
use scrollgrid::table::GridTable;
use scrollgrid::types::{HostMetrics, RenderPass, ScrollOffset};

/// Screen budget used when the table description has none.
const FALLBACK_SCREEN: (f32, f32) = (1920.0, 1080.0);

#[derive(Serialize)]
struct Trace {
    stats: FrameStats,
    scroll: ScrollOffset,
    commands: Vec<DrawCommand>,
}

fn parse_pair(flag: &str, value: Option<&String>) -> (f32, f32) {
    let parsed = value.and_then(|v| {
        let (a, b) = v.split_once(',')?;
        Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
    });
    match parsed {
        Some(pair) => pair,
        None => {
            eprintln!("{flag} expects two comma-separated numbers, e.g. {flag} 10,20");
            std::process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: scrollgrid_cli <table.json> [-o trace.json] [--pointer x,y] [--drag dx,dy] [--layout-pass]"
        );
        std::process::exit(1);
    }

    let input_path = &args[1];
    let mut output_path = None;
    let mut pointer = None;
    let mut drag = None;
    let mut pass = RenderPass::Repaint;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "-o" => {
                output_path = args.get(i + 1).cloned();
                i += 1;
            }
            "--pointer" => {
                pointer = Some(parse_pair("--pointer", args.get(i + 1)));
                i += 1;
            }
            "--drag" => {
                drag = Some(parse_pair("--drag", args.get(i + 1)));
                i += 1;
            }
            "--layout-pass" => pass = RenderPass::Layout,
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Read and validate the table description
    let spec = match TableSpec::load(input_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };
    let metrics = spec
        .metrics
        .unwrap_or_else(|| HostMetrics::for_screen(FALLBACK_SCREEN.0, FALLBACK_SCREEN.1));
    let anchor = spec.anchor;
    let palette = spec.palette;

    let renderer = match GridRenderer::builder().metrics(metrics).palette(palette).build() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Invalid host metrics: {}", e);
            std::process::exit(1);
        }
    };
    let mut table = match StaticTable::from_spec(spec) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Invalid table: {}", e);
            std::process::exit(1);
        }
    };

    // Render one frame into the recorder
    let mut surface = RecordingSurface::new();
    if let Some((x, y)) = pointer {
        surface.set_pointer(x, y);
    }
    if let Some((dx, dy)) = drag {
        surface.drag_by(dx, dy);
    }
    let stats = match renderer.render_frame(pass, &anchor, &mut table, &mut surface) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Render failed: {}", e);
            std::process::exit(1);
        }
    };

    let trace = Trace {
        stats,
        scroll: table.scroll_position(),
        commands: surface.take_commands(),
    };
    let json = match serde_json::to_string_pretty(&trace) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
