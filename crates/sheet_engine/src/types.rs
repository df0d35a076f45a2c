use serde::{Deserialize, Serialize};

use crate::export::ExportError;
use crate::extract::ExtractError;
use crate::fetch::FetchError;
use crate::registry::SheetSource;

/// Outbound links attached to a problem. Absent links are empty strings,
/// matching the upstream payload's field-or-nothing shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemLinks {
    #[serde(default)]
    pub leetcode: String,
    #[serde(default)]
    pub article: String,
    #[serde(default)]
    pub video: String,
}

/// One normalized practice problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub difficulty: String,
    pub topic: String,
    pub links: ProblemLinks,
}

/// Sheet-level metadata: static fields come from the registry, dynamic
/// fields from extraction. Field names follow the wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetMetadata {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub version: String,
    pub total_problems: usize,
    pub topics: Vec<String>,
    pub last_updated: String,
}

impl SheetMetadata {
    /// Merge registry fields into extraction-derived metadata. Dynamic
    /// fields (counts, topics, timestamp) are kept as-is.
    pub fn with_source(mut self, source: &SheetSource) -> Self {
        self.label = source.label.to_string();
        self.author = source.author.to_string();
        self.url = source.url.to_string();
        self.version = source.version.to_string();
        self
    }
}

/// The uniform schema every extractor produces. A successful extraction
/// always carries at least one problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSheet {
    pub metadata: SheetMetadata,
    pub problems: Vec<ProblemRecord>,
}

/// Failure taxonomy for the whole convert pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("unknown sheet id: {0}")]
    InvalidSource(String),
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractError),
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}
