use super::{solve_link, ExportContext};
use crate::types::ProblemRecord;

/// Render a title, an attribution line when metadata is present, and a
/// fixed-column pipe table.
pub(super) fn render(records: &[ProblemRecord], context: &ExportContext<'_>) -> String {
    let mut md = String::new();

    if let Some(meta) = context.metadata {
        md.push_str(&format!("# {}\n", meta.label));
        md.push_str(&format!(
            "> **Author**: {} | **Version**: {} | **Source**: {}\n\n",
            meta.author, meta.version, meta.url
        ));
    } else {
        md.push_str("# Practice Problems\n\n");
    }

    md.push_str("| Topic | Problem | Difficulty | Link |\n");
    md.push_str("|---|---|---|---|\n");

    for record in records {
        md.push_str(&format!(
            "| {} | {} | {} | [Solve]({}) |\n",
            record.topic,
            record.title,
            record.difficulty,
            solve_link(record)
        ));
    }

    md
}
