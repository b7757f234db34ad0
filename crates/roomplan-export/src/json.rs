//! JSON export of the layout document.

use roomplan_core::ExportError;
use roomplan_layout::LayoutDocument;

use crate::LayoutExporter;

#[derive(Debug, Clone, Copy)]
pub struct JsonExporter {
    pub pretty: bool,
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl LayoutExporter for JsonExporter {
    fn format(&self) -> &'static str {
        "json"
    }

    fn export(&self, layout: &LayoutDocument) -> Result<Vec<u8>, ExportError> {
        to_string(layout, self.pretty).map(String::into_bytes)
    }
}

pub(crate) fn to_string(layout: &LayoutDocument, pretty: bool) -> Result<String, ExportError> {
    let result = if pretty {
        serde_json::to_string_pretty(layout)
    } else {
        serde_json::to_string(layout)
    };
    result.map_err(|e| ExportError::Serialization { reason: e.to_string() })
}

/// Read a previously exported document back.
pub fn from_str(json: &str) -> Result<LayoutDocument, ExportError> {
    serde_json::from_str(json).map_err(|e| ExportError::Serialization { reason: e.to_string() })
}
