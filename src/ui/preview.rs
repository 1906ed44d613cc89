//! Terminal preview of the report sheets, printed instead of writing a file.

use crate::export::model::{ABSENT_SHEET, ATTENDANCE_SHEET, TASK_SHEET, WEEKLY_SHEET};
use crate::export::{Cell, Sheet};
use crate::ui::messages::header;
use crate::utils::formatting::dim;
use crate::utils::table::Table;

fn title(sheet: &Sheet) -> String {
    match sheet.name {
        ATTENDANCE_SHEET => "Attendance Preview".to_string(),
        ABSENT_SHEET => "Absent Staff Preview".to_string(),
        TASK_SHEET => "Task Log Preview".to_string(),
        WEEKLY_SHEET => "Weekly Summary Preview".to_string(),
        other => format!("{other} Preview"),
    }
}

pub fn render_sheet(sheet: &Sheet) -> String {
    let rows = sheet.data_rows();
    let noun = if rows.len() == 1 { "row" } else { "rows" };
    let mut out = header(format!("{}  {} {noun}", title(sheet), rows.len()));
    out.push('\n');

    if rows.is_empty() {
        out.push_str(&dim("Nothing to export."));
        out.push('\n');
        return out;
    }

    let headers: Vec<String> = sheet.header().iter().map(Cell::display).collect();
    let mut table = Table::new(headers.as_slice());
    for row in rows {
        table.add_row(row.iter().map(Cell::display).collect());
    }
    out.push_str(&table.render());
    out
}

/// Every sheet in workbook order, separated by a blank line.
pub fn render_preview(sheets: &[Sheet]) -> String {
    sheets
        .iter()
        .map(render_sheet)
        .collect::<Vec<_>>()
        .join("\n")
}
