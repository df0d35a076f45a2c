use pretty_assertions::assert_eq;
use sheet_engine::{
    NormalizedSheet, ProblemLinks, ProblemRecord, SheetCache, SheetMetadata,
};
use tempfile::TempDir;

fn sample_sheet() -> NormalizedSheet {
    NormalizedSheet {
        metadata: SheetMetadata {
            label: "Demo".to_string(),
            author: "A".to_string(),
            url: "https://x".to_string(),
            version: "1".to_string(),
            total_problems: 1,
            topics: vec!["Arrays".to_string()],
            last_updated: "2024-01-01T00:00:00.000Z".to_string(),
        },
        problems: vec![ProblemRecord {
            id: "two-sum".to_string(),
            title: "Two Sum".to_string(),
            slug: "two-sum".to_string(),
            difficulty: "Easy".to_string(),
            topic: "Arrays".to_string(),
            links: ProblemLinks {
                leetcode: "https://x/two-sum".to_string(),
                article: String::new(),
                video: String::new(),
            },
        }],
    }
}

#[test]
fn store_then_load_round_trips() {
    sheet_logging::initialize_for_tests();
    let temp = TempDir::new().unwrap();
    let cache = SheetCache::new(temp.path().to_path_buf());

    let sheet = sample_sheet();
    cache.store("demo-sheet", &sheet);

    let loaded = cache.load("demo-sheet").expect("cache hit");
    assert_eq!(loaded, sheet);
}

#[test]
fn store_creates_the_cache_directory() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("data").join("problems");
    let cache = SheetCache::new(nested.clone());

    cache.store("demo-sheet", &sample_sheet());
    assert!(nested.join("demo-sheet.json").is_file());
}

#[test]
fn load_returns_none_on_miss() {
    let temp = TempDir::new().unwrap();
    let cache = SheetCache::new(temp.path().to_path_buf());
    assert!(cache.load("never-stored").is_none());
}

#[test]
fn load_returns_none_on_unreadable_entry() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("broken.json"), "not json at all").unwrap();

    let cache = SheetCache::new(temp.path().to_path_buf());
    assert!(cache.load("broken").is_none());
}

#[test]
fn store_replaces_an_existing_entry() {
    let temp = TempDir::new().unwrap();
    let cache = SheetCache::new(temp.path().to_path_buf());

    let mut sheet = sample_sheet();
    cache.store("demo-sheet", &sheet);

    sheet.metadata.total_problems = 2;
    cache.store("demo-sheet", &sheet);

    let loaded = cache.load("demo-sheet").expect("cache hit");
    assert_eq!(loaded.metadata.total_problems, 2);
}
