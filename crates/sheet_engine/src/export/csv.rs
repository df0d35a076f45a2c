use super::solve_link;
use crate::types::ProblemRecord;

/// Fixed four-column CSV. Every field is quoted whether or not the value
/// needs it, with internal quotes doubled.
pub(super) fn render(records: &[ProblemRecord]) -> String {
    let header = "Topic,Problem,Difficulty,Link\n";
    let rows: Vec<String> = records
        .iter()
        .map(|record| {
            format!(
                "{},{},{},{}",
                quoted(&record.topic),
                quoted(&record.title),
                quoted(&record.difficulty),
                quoted(solve_link(record)),
            )
        })
        .collect();

    format!("{header}{}", rows.join("\n"))
}

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
