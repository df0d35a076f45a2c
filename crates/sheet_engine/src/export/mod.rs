mod csv;
mod markdown;
mod tabular;

use serde::{Deserialize, Serialize};

use crate::types::{ProblemRecord, SheetMetadata};

/// Output encodings the export stage can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Tabular,
    Markdown,
    Csv,
}

impl ExportFormat {
    /// Resolve a client-supplied format key. Unrecognized keys fall back to
    /// the spreadsheet format; that leniency is deliberate and relied upon
    /// by existing clients.
    pub fn from_key(key: &str) -> Self {
        match key {
            "markdown" | "md" => Self::Markdown,
            "csv" => Self::Csv,
            "excel" | "xlsx" | "tabular" => Self::Tabular,
            _ => Self::Tabular,
        }
    }
}

/// Per-export toggles supplied by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    #[serde(default)]
    pub include_progress: bool,
}

/// Attribution and toggles passed through to the renderers.
#[derive(Debug, Clone, Copy)]
pub struct ExportContext<'a> {
    pub metadata: Option<&'a SheetMetadata>,
    pub options: &'a ExportOptions,
}

/// A rendered export: raw bytes plus the transport metadata a caller needs
/// to serve or save them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub bytes: Vec<u8>,
    pub media_type: &'static str,
    pub extension: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("spreadsheet rendering failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

/// Render a filtered record list into the requested encoding. The text
/// formats cannot fail; only spreadsheet rendering carries an error path.
pub fn export(
    format: ExportFormat,
    records: &[ProblemRecord],
    extra_columns: &[String],
    context: &ExportContext<'_>,
) -> Result<ExportFile, ExportError> {
    match format {
        ExportFormat::Tabular => {
            let bytes = tabular::render(records, extra_columns, context)?;
            Ok(ExportFile {
                bytes,
                media_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                extension: "xlsx",
            })
        }
        ExportFormat::Markdown => Ok(ExportFile {
            bytes: markdown::render(records, context).into_bytes(),
            media_type: "text/markdown",
            extension: "md",
        }),
        ExportFormat::Csv => Ok(ExportFile {
            bytes: csv::render(records).into_bytes(),
            media_type: "text/csv",
            extension: "csv",
        }),
    }
}

/// The link a row points at: the problem page first, the editorial article
/// as a fallback, otherwise nothing.
pub(crate) fn solve_link(record: &ProblemRecord) -> &str {
    if !record.links.leetcode.is_empty() {
        &record.links.leetcode
    } else if !record.links.article.is_empty() {
        &record.links.article
    } else {
        ""
    }
}
