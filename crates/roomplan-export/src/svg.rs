//! SVG floor plan of a solved layout.
//!
//! Layout coordinates grow upwards from the external corner; SVG grows
//! downwards, so every rectangle is flipped about the external depth.

use log::debug;
use roomplan_core::{ExportError, Rect};
use roomplan_layout::{ItemKind, KeepOutKind, LayoutDocument};

use crate::LayoutExporter;

#[derive(Debug, Clone, Copy)]
pub struct SvgExporter {
    /// Pixels per millimetre
    pub scale: f64,
    pub labels: bool,
    pub keep_outs: bool,
}

impl Default for SvgExporter {
    fn default() -> Self {
        Self {
            scale: 0.1,
            labels: true,
            keep_outs: true,
        }
    }
}

impl LayoutExporter for SvgExporter {
    fn format(&self) -> &'static str {
        "svg"
    }

    fn export(&self, layout: &LayoutDocument) -> Result<Vec<u8>, ExportError> {
        self.render(layout).map(String::into_bytes)
    }
}

impl SvgExporter {
    pub fn render(&self, layout: &LayoutDocument) -> Result<String, ExportError> {
        if layout.furniture.is_empty() {
            return Err(ExportError::EmptyLayout);
        }
        let width = layout.room.external_width;
        let depth = layout.room.external_depth;

        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
"#,
            width * self.scale,
            depth * self.scale,
            width,
            depth
        ));

        let mut builder = SvgBuilder {
            svg: &mut svg,
            depth,
            indent: 1,
        };

        builder.open_group("walls");
        for band in &layout.walls.external {
            builder.rect(&band.rect, "#4b5563", None);
        }
        for stub in &layout.walls.wardrobe_enclosure {
            builder.rect(stub, "#6b7280", None);
        }
        builder.close_group();

        builder.open_group("openings");
        builder.rect(&layout.openings.door.rect, "#b45309", None);
        builder.rect(&layout.openings.window.rect, "#7dd3fc", None);
        builder.close_group();

        if self.keep_outs {
            builder.open_group("keep-outs");
            for zone in &layout.keep_outs {
                builder.rect(&zone.rect, keep_out_color(zone.kind), Some("stroke-dasharray=\"40 20\" fill-opacity=\"0.15\""));
            }
            builder.close_group();
        }

        builder.open_group("furniture");
        for item in layout.items() {
            builder.rect(&item.rect, fill_color(item.kind), Some("stroke=\"#111827\" stroke-width=\"10\""));
            if self.labels {
                builder.label(&item.rect, item.kind.key());
            }
        }
        builder.close_group();

        svg.push_str("</svg>\n");
        debug!(target: "roomplan::export", "rendered {} items to svg", layout.furniture.len());
        Ok(svg)
    }
}

struct SvgBuilder<'a> {
    svg: &'a mut String,
    /// External depth, used to flip the y axis
    depth: f64,
    indent: usize,
}

impl<'a> SvgBuilder<'a> {
    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.svg.push_str("  ");
        }
    }

    fn flip_y(&self, rect: &Rect) -> f64 {
        self.depth - rect.max_y()
    }

    fn open_group(&mut self, id: &str) {
        self.write_indent();
        self.svg.push_str(&format!("<g id=\"{}\">\n", escape_xml(id)));
        self.indent += 1;
    }

    fn close_group(&mut self) {
        self.indent -= 1;
        self.write_indent();
        self.svg.push_str("</g>\n");
    }

    fn rect(&mut self, rect: &Rect, fill: &str, extra: Option<&str>) {
        let y = self.flip_y(rect);
        self.write_indent();
        self.svg.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"",
            rect.x, y, rect.width, rect.depth, fill
        ));
        if let Some(extra) = extra {
            self.svg.push(' ');
            self.svg.push_str(extra);
        }
        self.svg.push_str(" />\n");
    }

    fn label(&mut self, rect: &Rect, text: &str) {
        let center = rect.center();
        let y = self.depth - center.y;
        self.write_indent();
        self.svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"80\" font-family=\"sans-serif\" text-anchor=\"middle\">{}</text>\n",
            center.x,
            y,
            escape_xml(text)
        ));
    }
}

fn fill_color(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Bed => "#c7d2fe",
        ItemKind::Headboard => "#6366f1",
        ItemKind::BedsideLeft | ItemKind::BedsideRight => "#fde68a",
        ItemKind::Wardrobe => "#d6d3d1",
        ItemKind::WardrobeReturnWallStart | ItemKind::WardrobeReturnWallEnd => "#6b7280",
        ItemKind::TvUnit => "#1f2937",
        ItemKind::DressingTable | ItemKind::Dresser => "#fbcfe8",
        ItemKind::Bench | ItemKind::Banquet => "#bbf7d0",
        ItemKind::StudyTable => "#fed7aa",
        ItemKind::Chair => "#fdba74",
    }
}

fn keep_out_color(kind: KeepOutKind) -> &'static str {
    match kind {
        KeepOutKind::DoorSwing | KeepOutKind::DoorApproach => "#f87171",
        KeepOutKind::WindowStrip => "#38bdf8",
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
