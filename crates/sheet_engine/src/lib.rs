//! Sheet engine: scrape curated problem-list pages, normalize the embedded
//! hydration payload, and re-export the result as a spreadsheet, Markdown
//! table, or CSV file.
mod cache;
mod export;
mod extract;
mod fetch;
mod filter;
pub mod registry;
mod service;
mod types;

pub use cache::{CacheError, SheetCache};
pub use export::{export, ExportContext, ExportError, ExportFile, ExportFormat, ExportOptions};
pub use extract::{
    slugify, ExtractError, NextHydrationExtractor, SheetExtractor, DEFAULT_TOPIC,
};
pub use fetch::{FetchError, FetchSettings, Fetcher, ReqwestFetcher};
pub use filter::{apply_filters, SheetFilters};
pub use registry::SheetSource;
pub use service::{ConvertRequest, SheetService};
pub use types::{ConvertError, NormalizedSheet, ProblemLinks, ProblemRecord, SheetMetadata};
