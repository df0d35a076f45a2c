use std::sync::Arc;

use serde::Deserialize;

use crate::cache::SheetCache;
use crate::export::{export, ExportContext, ExportFile, ExportFormat, ExportOptions};
use crate::fetch::Fetcher;
use crate::filter::{apply_filters, SheetFilters};
use crate::registry;
use crate::types::{ConvertError, NormalizedSheet};

/// A conversion request as received over the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    pub sheet_id: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub extra_columns: Vec<String>,
    #[serde(default)]
    pub filters: SheetFilters,
    #[serde(default)]
    pub options: ExportOptions,
}

/// Orchestrates registry lookup, fetch, extraction, filtering and export
/// for one request at a time. Holds no mutable state; concurrent requests
/// for the same sheet simply perform redundant fetches.
pub struct SheetService {
    fetcher: Arc<dyn Fetcher>,
    cache: Option<SheetCache>,
}

impl SheetService {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: SheetCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Fetch the source page and normalize it: dynamic metadata from
    /// extraction, static attribution from the registry. A fetch failure
    /// falls back to the cached copy when one exists; a successful
    /// extraction refreshes the cache best-effort.
    pub async fn fetch_and_normalize(
        &self,
        sheet_id: &str,
    ) -> Result<NormalizedSheet, ConvertError> {
        let source = registry::find(sheet_id)
            .ok_or_else(|| ConvertError::InvalidSource(sheet_id.to_string()))?;
        let extractor = registry::extractor_for(sheet_id)
            .ok_or_else(|| ConvertError::InvalidSource(sheet_id.to_string()))?;

        log::info!("fetching {}", source.url);
        let markup = match self.fetcher.fetch(source.url).await {
            Ok(markup) => markup,
            Err(err) => {
                if let Some(cached) = self.cache.as_ref().and_then(|c| c.load(sheet_id)) {
                    log::warn!("fetch failed ({err}), serving cached copy of {sheet_id}");
                    return Ok(cached);
                }
                return Err(err.into());
            }
        };

        let extracted = extractor.extract(&markup)?;
        let sheet = NormalizedSheet {
            metadata: extracted.metadata.with_source(source),
            problems: extracted.problems,
        };

        if let Some(cache) = &self.cache {
            cache.store(sheet_id, &sheet);
        }
        Ok(sheet)
    }

    /// Full conversion: normalize, filter, export.
    pub async fn convert(&self, request: &ConvertRequest) -> Result<ExportFile, ConvertError> {
        let sheet = self.fetch_and_normalize(&request.sheet_id).await?;

        let filtered = apply_filters(&sheet.problems, &request.filters);
        log::info!(
            "exporting {} problems (filtered from {})",
            filtered.len(),
            sheet.problems.len()
        );

        let context = ExportContext {
            metadata: Some(&sheet.metadata),
            options: &request.options,
        };
        let file = export(
            ExportFormat::from_key(&request.format),
            &filtered,
            &request.extra_columns,
            &context,
        )?;
        Ok(file)
    }
}
