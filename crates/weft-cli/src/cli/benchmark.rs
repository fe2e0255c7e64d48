//! Benchmark command implementation.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;

use weft::{draw_rows, DrawInstruction, DrawSink};

use super::common::read_pattern;
use super::settings::CanvasArgs;

#[derive(Debug, Args)]
pub struct BenchmarkArgs {
    /// Pattern file ('-' for stdin)
    pub pattern: String,

    /// Number of full passes over the pattern
    #[arg(short = 'n', long, default_value_t = 10)]
    pub iterations: u32,

    #[command(flatten)]
    pub canvas: CanvasArgs,
}

/// Sink that only counts strokes, so timing covers the walk itself.
#[derive(Default)]
struct Counter {
    strokes: usize,
    length: f64,
}

impl DrawSink for Counter {
    fn draw(&mut self, instruction: &DrawInstruction) {
        self.strokes += 1;
        self.length += instruction.line.length();
    }
}

/// Execute the benchmark command.
pub fn cmd_benchmark(args: &BenchmarkArgs) -> Result<()> {
    let settings = args.canvas.resolve()?;
    let iterations = args.iterations.max(1);

    let start_load = Instant::now();
    let pattern = read_pattern(&args.pattern)?;
    println!("Loaded {} rows in {:?}", pattern.len(), start_load.elapsed());

    let viewport = settings.viewport();
    println!("\nWalking {} pass(es) at {}x{} @ {}...", iterations, settings.width, settings.height, settings.scale);

    let mut counter = Counter::default();
    let mut skipped = 0;
    let mut fastest = Duration::MAX;
    let start = Instant::now();

    for _ in 0..iterations {
        counter = Counter::default();
        let pass = Instant::now();
        let stats = draw_rows(&pattern.rows, &viewport, &mut counter);
        fastest = fastest.min(pass.elapsed());
        skipped = stats.noops;
    }

    let elapsed = start.elapsed();
    let per_pass = elapsed.as_secs_f64() * 1000.0 / iterations as f64;

    println!();
    println!("═══════════════════════════════════════════════");
    println!("  BENCHMARK: {}", args.pattern);
    println!("═══════════════════════════════════════════════");
    println!("  Rows: {}", pattern.len());
    println!("  Strokes per pass: {}", counter.strokes);
    println!("  Skipped per pass: {}", skipped);
    println!("  Total line length: {:.1}", counter.length);
    println!("  Time: {:?}", elapsed);
    println!("  Avg per pass: {:.3}ms", per_pass);
    println!("  Fastest pass: {:.3}ms", fastest.as_secs_f64() * 1000.0);
    println!("═══════════════════════════════════════════════");
    Ok(())
}
