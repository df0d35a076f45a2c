use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::{solve_link, ExportContext};
use crate::types::ProblemRecord;

const FIXED_HEADERS: [&str; 4] = ["Topic", "Problem", "Difficulty", "Link"];

/// Render an xlsx workbook: a "Problems" worksheet with one row per record,
/// empty placeholder columns for each requested extra column, an optional
/// progress column of unchecked booleans, and an "Info" worksheet carrying
/// the sheet attribution when metadata is present.
pub(super) fn render(
    records: &[ProblemRecord],
    extra_columns: &[String],
    context: &ExportContext<'_>,
) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet().set_name("Problems")?;

    let mut col: u16 = 0;
    for header in FIXED_HEADERS {
        worksheet.write_with_format(0, col, header, &header_format)?;
        col += 1;
    }
    for extra in extra_columns {
        worksheet.write_with_format(0, col, extra.as_str(), &header_format)?;
        col += 1;
    }
    let progress_col = if context.options.include_progress {
        worksheet.write_with_format(0, col, "Progress", &header_format)?;
        Some(col)
    } else {
        None
    };

    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        worksheet.write(row, 0, record.topic.as_str())?;
        worksheet.write(row, 1, record.title.as_str())?;
        worksheet.write(row, 2, record.difficulty.as_str())?;
        worksheet.write(row, 3, solve_link(record))?;
        // Extra columns stay empty; they exist for manual fill-in.
        if let Some(col) = progress_col {
            worksheet.write_boolean(row, col, false)?;
        }
    }

    worksheet.set_column_width(1, 40.0)?;
    worksheet.set_column_width(3, 50.0)?;

    if let Some(meta) = context.metadata {
        let info = workbook.add_worksheet().set_name("Info")?;
        let rows: [(&str, String); 6] = [
            ("Sheet", meta.label.clone()),
            ("Author", meta.author.clone()),
            ("Version", meta.version.clone()),
            ("Source", meta.url.clone()),
            ("Total Problems", meta.total_problems.to_string()),
            ("Last Updated", meta.last_updated.clone()),
        ];
        for (index, (key, value)) in rows.iter().enumerate() {
            let row = index as u32;
            info.write_with_format(row, 0, *key, &header_format)?;
            info.write(row, 1, value.as_str())?;
        }
        info.set_column_width(0, 18.0)?;
        info.set_column_width(1, 60.0)?;
    }

    workbook.save_to_buffer()
}
