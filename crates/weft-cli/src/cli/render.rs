//! Render command implementation.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, bail, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use weft::{draw_rows, render, CanvasSettings, DrawInstruction, Lane, RenderStats, Scan, SvgSurface};

use super::common::{read_pattern, write_output};
use super::raster::{rasterize, save_image};
use super::settings::CanvasArgs;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Svg,
    Json,
    /// Raster image; the encoder follows the output file extension
    Png,
}

impl OutputFormat {
    /// Guess from the output extension: `.svg`, `.json`, else raster.
    fn infer(output: Option<&Path>) -> Self {
        let ext = output
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            None | Some("svg") => OutputFormat::Svg,
            Some("json") => OutputFormat::Json,
            Some(_) => OutputFormat::Png,
        }
    }
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Pattern file ('-' for stdin)
    pub pattern: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (default: from the output extension, else svg)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub canvas: CanvasArgs,
}

/// A stroke in JSON output format.
#[derive(Serialize)]
struct JsonStroke {
    index: i64,
    lane: u8,
    scan: &'static str,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dash: Vec<f64>,
    phase: f64,
}

impl From<&DrawInstruction> for JsonStroke {
    fn from(s: &DrawInstruction) -> Self {
        Self {
            index: s.index,
            lane: s.lane.as_index(),
            scan: match s.scan {
                Scan::Forward => "forward",
                Scan::Backward => "backward",
            },
            x1: s.line.x1,
            y1: s.line.y1,
            x2: s.line.x2,
            y2: s.line.y2,
            dash: s.dash.clone(),
            phase: s.phase,
        }
    }
}

#[derive(Serialize)]
struct JsonCanvas<'a> {
    width: u32,
    height: u32,
    scale: f64,
    color: &'a str,
}

#[derive(Serialize)]
struct JsonStats {
    rows: usize,
    strokes: usize,
    skipped: usize,
}

/// JSON output with canvas, counts and every stroke in drawing order.
#[derive(Serialize)]
struct JsonOutput<'a> {
    canvas: JsonCanvas<'a>,
    stats: JsonStats,
    strokes: Vec<JsonStroke>,
}

/// Execute the render command.
pub fn cmd_render(args: &RenderArgs) -> Result<()> {
    let settings = args.canvas.resolve()?;
    let output = args.output.as_deref();
    let format = args.format.unwrap_or_else(|| OutputFormat::infer(output));

    let raster_path = output.filter(|p| *p != Path::new("-"));
    if format == OutputFormat::Png && raster_path.is_none() {
        bail!("raster output needs --output <file>");
    }

    let pattern = read_pattern(&args.pattern)?;
    eprintln!("Loaded {} rows", pattern.len());

    let start = Instant::now();

    match format {
        OutputFormat::Json => {
            let mut strokes: Vec<DrawInstruction> = Vec::new();
            let stats = draw_rows(&pattern.rows, &settings.viewport(), &mut strokes);
            report(&stats, start);
            write_output(output, &to_json(&settings, &stats, &strokes)?)
        }
        OutputFormat::Svg => {
            let svg = render_svg(&pattern.rows, &settings, start)?;
            write_output(output, &svg)
        }
        OutputFormat::Png => {
            let svg = render_svg(&pattern.rows, &settings, start)?;
            let image = rasterize(&svg, settings.width, settings.height)?;
            let path = raster_path.ok_or_else(|| anyhow!("raster output needs --output <file>"))?;
            save_image(image, path)
        }
    }
}

fn render_svg(rows: &[weft::PatternRow], settings: &CanvasSettings, start: Instant) -> Result<String> {
    let mut surface = SvgSurface::new();
    let stats = render(rows, settings, &mut surface);
    report(&stats, start);
    Ok(surface.finish()?)
}

fn report(stats: &RenderStats, start: Instant) {
    eprintln!(
        "Generated {} strokes from {} rows in {:?}",
        stats.instructions,
        stats.rows,
        start.elapsed()
    );
    if stats.noops > 0 {
        log::debug!("{} strokes pointed away from the viewport", stats.noops);
    }
}

fn to_json(settings: &CanvasSettings, stats: &RenderStats, strokes: &[DrawInstruction]) -> Result<String> {
    let out = JsonOutput {
        canvas: JsonCanvas {
            width: settings.width,
            height: settings.height,
            scale: settings.scale,
            color: settings.stroke_color(),
        },
        stats: JsonStats {
            rows: stats.rows,
            strokes: stats.instructions,
            skipped: stats.noops,
        },
        strokes: strokes.iter().map(JsonStroke::from).collect(),
    };
    Ok(serde_json::to_string(&out)?)
}
