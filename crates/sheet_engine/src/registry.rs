use crate::extract::{NextHydrationExtractor, SheetExtractor};

/// Static description of one scrapeable sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSource {
    pub id: &'static str,
    pub label: &'static str,
    pub author: &'static str,
    pub version: &'static str,
    pub url: &'static str,
}

const SHEETS: &[SheetSource] = &[
    SheetSource {
        id: "strivers-sde-sheet",
        label: "Striver's SDE Sheet",
        author: "Striver",
        version: "1.0",
        url: "https://takeuforward.org/interviews/strivers-sde-sheet-top-coding-interview-problems/",
    },
    SheetSource {
        id: "strivers-a2z-sheet",
        label: "Striver's A2Z DSA Sheet",
        author: "Striver",
        version: "1.0",
        url: "https://takeuforward.org/strivers-a2z-dsa-course/strivers-a2z-dsa-course-sheet-2/",
    },
    SheetSource {
        id: "blind-75",
        label: "Blind 75",
        author: "Striver",
        version: "1.0",
        url: "https://takeuforward.org/interviews/blind-75-leetcode-problems-detailed-video-solutions/",
    },
    SheetSource {
        id: "strivers-79",
        label: "Striver's 79 Sheet",
        author: "Striver",
        version: "1.0",
        url: "https://takeuforward.org/interview-sheets/strivers-79-last-moment-dsa-sheet-ace-interviews/",
    },
];

static NEXT_HYDRATION: NextHydrationExtractor = NextHydrationExtractor;

/// All registered sheets, in listing order.
pub fn all() -> &'static [SheetSource] {
    SHEETS
}

/// Look up a sheet by identifier.
pub fn find(sheet_id: &str) -> Option<&'static SheetSource> {
    SHEETS.iter().find(|source| source.id == sheet_id)
}

/// Resolve the extractor for a sheet. Every current source is served by the
/// hydration-payload extractor; new source families register here.
pub fn extractor_for(sheet_id: &str) -> Option<&'static dyn SheetExtractor> {
    find(sheet_id).map(|_| &NEXT_HYDRATION as &dyn SheetExtractor)
}
