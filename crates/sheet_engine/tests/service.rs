use std::sync::Arc;

use pretty_assertions::assert_eq;
use sheet_engine::{
    ConvertError, ConvertRequest, FetchError, Fetcher, SheetCache, SheetFilters, SheetService,
};
use tempfile::TempDir;

/// Serves a canned page regardless of URL.
struct StubFetcher {
    markup: String,
}

#[async_trait::async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        Ok(self.markup.clone())
    }
}

struct FailingFetcher;

#[async_trait::async_trait]
impl Fetcher for FailingFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        Err(FetchError::Network("connection refused".to_string()))
    }
}

fn page(chunks: &[&str]) -> String {
    let scripts: Vec<String> = chunks
        .iter()
        .map(|chunk| format!(r#"<script>self.__next_f.push([1,"{chunk}"])</script>"#))
        .collect();
    format!("<html><body>{}</body></html>", scripts.join(""))
}

fn sample_markup() -> String {
    page(&[
        concat!(
            r#"\"category_name\":\"Arrays\","#,
            r#"\"problem_name\":\"Two Sum\","#,
            r#"\"leetcode_link\":\"https://x/two-sum\","#,
            r#"\"difficulty\":\"Easy\""#
        ),
        concat!(
            r#"\"problem_name\":\"Three Sum\","#,
            r#"\"difficulty\":\"Medium\""#
        ),
    ])
}

fn service_with_stub() -> SheetService {
    SheetService::new(Arc::new(StubFetcher {
        markup: sample_markup(),
    }))
}

#[tokio::test]
async fn unknown_sheet_id_is_an_invalid_source() {
    let err = service_with_stub()
        .fetch_and_normalize("no-such-sheet")
        .await
        .unwrap_err();
    assert!(matches!(err, ConvertError::InvalidSource(_)));
}

#[tokio::test]
async fn normalization_merges_registry_attribution() {
    let sheet = service_with_stub()
        .fetch_and_normalize("strivers-sde-sheet")
        .await
        .unwrap();

    // Static fields from the registry.
    assert_eq!(sheet.metadata.label, "Striver's SDE Sheet");
    assert_eq!(sheet.metadata.author, "Striver");
    assert!(sheet.metadata.url.starts_with("https://takeuforward.org/"));
    // Dynamic fields from extraction.
    assert_eq!(sheet.metadata.total_problems, 2);
    assert_eq!(
        sheet.metadata.topics,
        vec!["Arrays".to_string()]
    );
    assert_eq!(sheet.problems[1].topic, "Arrays");
}

#[tokio::test]
async fn successful_normalization_refreshes_the_cache() {
    let temp = TempDir::new().unwrap();
    let service = service_with_stub().with_cache(SheetCache::new(temp.path().to_path_buf()));

    service.fetch_and_normalize("blind-75").await.unwrap();
    assert!(temp.path().join("blind-75.json").is_file());
}

#[tokio::test]
async fn fetch_failure_falls_back_to_cached_copy() {
    let temp = TempDir::new().unwrap();
    let cache_dir = temp.path().to_path_buf();

    let warm = service_with_stub().with_cache(SheetCache::new(cache_dir.clone()));
    let expected = warm.fetch_and_normalize("blind-75").await.unwrap();

    let cold = SheetService::new(Arc::new(FailingFetcher))
        .with_cache(SheetCache::new(cache_dir));
    let cached = cold.fetch_and_normalize("blind-75").await.unwrap();
    assert_eq!(cached, expected);
}

#[tokio::test]
async fn fetch_failure_without_cache_propagates() {
    let service = SheetService::new(Arc::new(FailingFetcher));
    let err = service.fetch_and_normalize("blind-75").await.unwrap_err();
    assert!(matches!(err, ConvertError::Fetch(_)));
}

#[tokio::test]
async fn zero_record_page_is_an_extraction_failure() {
    let service = SheetService::new(Arc::new(StubFetcher {
        markup: "<html><body>nothing embedded</body></html>".to_string(),
    }));
    let err = service.fetch_and_normalize("blind-75").await.unwrap_err();
    assert!(matches!(err, ConvertError::Extraction(_)));
}

#[tokio::test]
async fn convert_renders_markdown_with_registry_attribution() {
    let request = ConvertRequest {
        sheet_id: "strivers-sde-sheet".to_string(),
        format: "markdown".to_string(),
        ..ConvertRequest::default()
    };

    let file = service_with_stub().convert(&request).await.unwrap();
    assert_eq!(file.extension, "md");

    let text = String::from_utf8(file.bytes).unwrap();
    assert!(text.starts_with("# Striver's SDE Sheet\n"));
    assert!(text.contains("| Arrays | Two Sum | Easy | [Solve](https://x/two-sum) |"));
}

#[tokio::test]
async fn convert_applies_filters_before_export() {
    let request = ConvertRequest {
        sheet_id: "strivers-sde-sheet".to_string(),
        format: "csv".to_string(),
        filters: SheetFilters {
            topics: vec![],
            difficulty: vec!["Medium".to_string()],
        },
        ..ConvertRequest::default()
    };

    let file = service_with_stub().convert(&request).await.unwrap();
    let text = String::from_utf8(file.bytes).unwrap();
    assert!(text.contains("Three Sum"));
    assert!(!text.contains("Two Sum"));
}

#[tokio::test]
async fn convert_with_unknown_format_defaults_to_spreadsheet() {
    let request = ConvertRequest {
        sheet_id: "strivers-sde-sheet".to_string(),
        format: "parquet".to_string(),
        ..ConvertRequest::default()
    };

    let file = service_with_stub().convert(&request).await.unwrap();
    assert_eq!(file.extension, "xlsx");
    assert!(file.bytes.starts_with(&[0x50, 0x4B]));
}
