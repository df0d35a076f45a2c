use std::sync::LazyLock;

use chrono::{SecondsFormat, Utc};
use regex::Regex;

use crate::types::{NormalizedSheet, ProblemLinks, ProblemRecord, SheetMetadata};

/// Topic assigned to records seen before any category marker.
pub const DEFAULT_TOPIC: &str = "General";

/// One escaped payload chunk per marker occurrence. The page streams its
/// data model as many independent fragments, so this matches repeatedly.
static CHUNK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)self\.__next_f\.push\(\[1,"(.*?)"\]\)"#).unwrap()
});

static CATEGORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""category_name":"([^"]+)""#).unwrap());

/// A record block spans from a problem-name marker to the next difficulty
/// marker, lazily. Adjacent records with no intervening text can let block
/// N swallow content belonging to record N+1's link fields; that matches
/// the upstream payload shape observed so far and is left as-is.
static RECORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)"problem_name":"([^"]+)".*?"difficulty":"([^"]+)""#).unwrap()
});

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""problem_name":"([^"]+)""#).unwrap());
static DIFFICULTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""difficulty":"([^"]+)""#).unwrap());
static LEETCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""leetcode_link":"([^"]+)""#).unwrap());
static ARTICLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""article_link":"([^"]+)""#).unwrap());
static VIDEO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""video_link":"([^"]+)""#).unwrap());

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no problems extracted")]
    NoProblems,
}

/// Turns raw page markup into a normalized sheet.
pub trait SheetExtractor: Send + Sync {
    fn extract(&self, markup: &str) -> Result<NormalizedSheet, ExtractError>;
}

/// Extractor for pages that embed their data model as streamed hydration
/// fragments inside inline script tags:
/// - collects every payload chunk in document order
/// - reverses the fixed escape transform per chunk
/// - threads a running category context across chunks; a chunk without its
///   own marker inherits the most recent category
/// - matches record blocks left-to-right, then pulls each field with a
///   block-local search (absent field resolves to empty string)
///
/// Zero recovered records is a failure, never an empty success.
#[derive(Debug, Default)]
pub struct NextHydrationExtractor;

impl SheetExtractor for NextHydrationExtractor {
    fn extract(&self, markup: &str) -> Result<NormalizedSheet, ExtractError> {
        let mut category: Option<String> = None;
        let mut problems: Vec<ProblemRecord> = Vec::new();

        for caps in CHUNK_RE.captures_iter(markup) {
            let Some(raw) = caps.get(1) else { continue };
            let chunk = decode_chunk(raw.as_str());
            scan_chunk(&chunk, &mut category, &mut problems);
        }

        if problems.is_empty() {
            return Err(ExtractError::NoProblems);
        }

        let mut topics: Vec<String> = Vec::new();
        for problem in &problems {
            if !topics.contains(&problem.topic) {
                topics.push(problem.topic.clone());
            }
        }

        log::info!(
            "extracted {} problems across {} topics",
            problems.len(),
            topics.len()
        );

        Ok(NormalizedSheet {
            metadata: SheetMetadata {
                total_problems: problems.len(),
                topics,
                last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                ..SheetMetadata::default()
            },
            problems,
        })
    }
}

/// Reverse the payload escaping. The order is fixed: unicode angle-bracket
/// escapes first, then literal newline escapes, then escaped quotes.
/// Reordering would let a later rule fire on artifacts of an earlier one.
fn decode_chunk(chunk: &str) -> String {
    chunk
        .replace("\\u003c", "<")
        .replace("\\u003e", ">")
        .replace("\\n", "")
        .replace("\\\"", "\"")
}

/// Scan one decoded chunk, emitting a record per matched block. Category
/// markers update the running context positionally, so a marker appearing
/// mid-chunk applies to the blocks after it.
fn scan_chunk(chunk: &str, category: &mut Option<String>, problems: &mut Vec<ProblemRecord>) {
    let markers: Vec<(usize, String)> = CATEGORY_RE
        .captures_iter(chunk)
        .filter_map(|caps| {
            let position = caps.get(0)?.start();
            let name = caps.get(1)?.as_str().to_string();
            Some((position, name))
        })
        .collect();

    let mut next_marker = 0;
    for block in RECORD_RE.find_iter(chunk) {
        while next_marker < markers.len() && markers[next_marker].0 < block.start() {
            *category = Some(markers[next_marker].1.clone());
            next_marker += 1;
        }
        problems.push(build_record(block.as_str(), category.as_deref()));
    }

    // Trailing markers still advance the context for later chunks.
    for (_, name) in markers.into_iter().skip(next_marker) {
        *category = Some(name);
    }
}

fn build_record(block: &str, category: Option<&str>) -> ProblemRecord {
    let title = field(&NAME_RE, block);
    let slug = slugify(&title);

    ProblemRecord {
        id: slug.clone(),
        title,
        slug,
        difficulty: field(&DIFFICULTY_RE, block),
        topic: category.unwrap_or(DEFAULT_TOPIC).to_string(),
        links: ProblemLinks {
            leetcode: field(&LEETCODE_RE, block),
            article: field(&ARTICLE_RE, block),
            video: field(&VIDEO_RE, block),
        },
    }
}

/// Block-local field lookup; a missing field is an empty string, never an
/// error.
fn field(re: &Regex, block: &str) -> String {
    re.captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Lowercase, non-alphanumeric runs collapsed to a single hyphen, no
/// leading or trailing hyphen.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
