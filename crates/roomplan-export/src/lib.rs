//! Downstream collaborators for solved layouts.
//!
//! Supported formats:
//! - JSON (the layout document as-is)
//! - SVG (2D floor plan)
//! - DXF (CAD interchange) - planned
//!
//! Costing lives in [`boq`], with the services take-off in [`systems`].
//! Nothing here feeds back into placement.

pub mod boq;
pub mod json;
pub mod systems;

#[cfg(feature = "svg")]
pub mod svg;

use std::io::Write;

use roomplan_core::ExportError;
use roomplan_layout::LayoutDocument;

pub use boq::{BillOfQuantities, BoqLine, CostAggregator, UnitRateAggregator};
pub use json::JsonExporter;
pub use systems::{take_off, SystemsOptions, SystemsTakeoff};
#[cfg(feature = "svg")]
pub use svg::SvgExporter;

/// Turns a layout document into one file format.
pub trait LayoutExporter {
    /// Short format name, also used as the file extension.
    fn format(&self) -> &'static str;

    fn export(&self, layout: &LayoutDocument) -> Result<Vec<u8>, ExportError>;

    fn export_to(&self, layout: &LayoutDocument, writer: &mut dyn Write) -> Result<(), ExportError> {
        let bytes = self.export(layout)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }
}

/// Look up the exporter for a format name.
pub fn exporter_for(format: &str) -> Result<Box<dyn LayoutExporter>, ExportError> {
    match format {
        "json" => Ok(Box::new(JsonExporter::default())),
        #[cfg(feature = "svg")]
        "svg" => Ok(Box::new(SvgExporter::default())),
        other => Err(ExportError::UnsupportedFormat {
            format: other.to_string(),
        }),
    }
}

/// Export a layout to pretty-printed JSON.
pub fn export_json(layout: &LayoutDocument) -> Result<String, ExportError> {
    json::to_string(layout, true)
}

/// Export a layout to an SVG floor plan.
#[cfg(feature = "svg")]
pub fn export_svg(layout: &LayoutDocument) -> Result<String, ExportError> {
    SvgExporter::default().render(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomplan_layout::{generate_layout, PlanOptions, PlanRequest};

    fn layout() -> LayoutDocument {
        generate_layout(&PlanRequest::default(), &PlanOptions::default()).unwrap()
    }

    #[test]
    fn test_exporter_lookup() {
        assert_eq!(exporter_for("json").unwrap().format(), "json");
        #[cfg(feature = "svg")]
        assert_eq!(exporter_for("svg").unwrap().format(), "svg");
    }

    #[test]
    fn test_dxf_is_not_supported() {
        let err = exporter_for("dxf").err().unwrap();
        assert!(matches!(err, ExportError::UnsupportedFormat { ref format } if format == "dxf"));
    }

    #[test]
    fn test_export_to_writer() {
        let doc = layout();
        let mut out = Vec::new();
        JsonExporter::default().export_to(&doc, &mut out).unwrap();
        assert_eq!(out, JsonExporter::default().export(&doc).unwrap());
    }

    #[test]
    #[cfg(feature = "svg")]
    fn test_export_svg() {
        let svg = export_svg(&layout()).unwrap();
        assert!(svg.starts_with("<?xml"));
    }
}
