//! SVG surface: writes rendered strokes as an SVG document.
//!
//! The document mirrors canvas setup: a background rect in pixel space,
//! then a group translated to the canvas center and scaled, holding one
//! `<line>` per stroke with its own dash array and offset.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::error::{WeftError, WeftResult};
use crate::render::{parse_color, CanvasSettings, DrawSink, Surface, BACKGROUND_COLOR};
use crate::walk::DrawInstruction;

/// Collects strokes and serializes them on [`SvgSurface::finish`].
#[derive(Debug, Default)]
pub struct SvgSurface {
    settings: CanvasSettings,
    strokes: Vec<DrawInstruction>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Serialize the document.
    pub fn finish(&self) -> WeftResult<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        self.write_document(&mut writer).map_err(|e| WeftError::Svg(e.to_string()))?;
        String::from_utf8(writer.into_inner()).map_err(|e| WeftError::Svg(e.to_string()))
    }

    fn write_document(&self, writer: &mut Writer<Vec<u8>>) -> Result<(), Box<dyn std::error::Error>> {
        let settings = &self.settings;
        let width = settings.width.to_string();
        let height = settings.height.to_string();
        let view_box = format!("0 0 {} {}", settings.width, settings.height);
        let precision = coordinate_precision(settings.scale);
        let color = parse_color(settings.stroke_color()).unwrap_or_else(|e| {
            log::warn!("{}, using default stroke color", e);
            crate::render::LINE_COLOR.to_string()
        });

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut svg = BytesStart::new("svg");
        svg.push_attribute(("xmlns", "http://www.w3.org/2000/svg"));
        svg.push_attribute(("width", width.as_str()));
        svg.push_attribute(("height", height.as_str()));
        svg.push_attribute(("viewBox", view_box.as_str()));
        writer.write_event(Event::Start(svg))?;

        let mut background = BytesStart::new("rect");
        background.push_attribute(("width", width.as_str()));
        background.push_attribute(("height", height.as_str()));
        background.push_attribute(("fill", BACKGROUND_COLOR));
        writer.write_event(Event::Empty(background))?;

        // Pixel-space values print in shortest round-trip form.
        let transform = format!(
            "translate({} {}) scale({})",
            settings.width as f64 / 2.0,
            settings.height as f64 / 2.0,
            settings.scale
        );
        let stroke_width = fmt_num(settings.stroke_width(), precision);
        let mut group = BytesStart::new("g");
        group.push_attribute(("transform", transform.as_str()));
        group.push_attribute(("stroke", color.as_str()));
        group.push_attribute(("stroke-width", stroke_width.as_str()));
        group.push_attribute(("stroke-linecap", "round"));
        group.push_attribute(("fill", "none"));
        writer.write_event(Event::Start(group))?;

        for stroke in &self.strokes {
            writer.write_event(Event::Empty(line_element(stroke, precision)))?;
        }

        writer.write_event(Event::End(BytesEnd::new("g")))?;
        writer.write_event(Event::End(BytesEnd::new("svg")))?;
        Ok(())
    }
}

fn line_element(stroke: &DrawInstruction, precision: usize) -> BytesStart<'static> {
    let line = stroke.line;
    let mut elem = BytesStart::new("line");
    elem.push_attribute(("x1", fmt_num(line.x1, precision).as_str()));
    elem.push_attribute(("y1", fmt_num(line.y1, precision).as_str()));
    elem.push_attribute(("x2", fmt_num(line.x2, precision).as_str()));
    elem.push_attribute(("y2", fmt_num(line.y2, precision).as_str()));

    if !stroke.dash.is_empty() {
        let dash: Vec<String> = stroke.dash.iter().map(|d| fmt_num(*d, precision)).collect();
        elem.push_attribute(("stroke-dasharray", dash.join(" ").as_str()));
        if stroke.phase != 0.0 {
            elem.push_attribute(("stroke-dashoffset", fmt_num(stroke.phase, precision).as_str()));
        }
    }
    elem
}

/// Decimals needed for drawing-space values to stay within 0.001 px
/// once the group's `scale` is applied.
fn coordinate_precision(scale: f64) -> usize {
    3 + scale.log10().ceil().max(0.0) as usize
}

/// Format a number with up to `precision` decimals, trailing zeros trimmed.
fn fmt_num(value: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

impl DrawSink for SvgSurface {
    fn draw(&mut self, instruction: &DrawInstruction) {
        self.strokes.push(instruction.clone());
    }
}

impl Surface for SvgSurface {
    fn configure(&mut self, settings: &CanvasSettings) {
        self.settings = settings.clone();
        self.strokes.clear();
    }
}

// ============================================================================
// TESTS
// ============================================================================
