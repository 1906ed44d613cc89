// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::model::{Cell, Sheet};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

/// Writes every sheet into one workbook, with a styled frozen header,
/// banded rows and auto-sized columns.
///
/// Spreadsheet errors (bad sheet names, unwritable path, ...) are returned
/// as-is to the caller.
pub(crate) fn export_xlsx(sheets: &[Sheet], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name)?;
        write_sheet(worksheet, sheet)?;
        debug!(sheet = sheet.name, rows = sheet.rows.len(), "worksheet written");
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet) -> AppResult<()> {
    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x4F46E5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let header = sheet.header();
    for (col, cell) in header.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, cell.display(), &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = header.iter().map(|c| c.display().width()).collect();

    // ---------------------------
    // Rows
    // ---------------------------
    let band1 = Color::RGB(0xEEF2FF);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, cells) in sheet.data_rows().iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in cells.iter().enumerate() {
            write_cell(worksheet, row, col as u16, cell, band_color)?;

            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(cell.display().width());
            }
        }
    }

    // ---------------------------
    // Column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Number(n) => {
            let fmt = base.set_align(FormatAlign::Right);
            worksheet.write_with_format(row, col, *n, &fmt)?;
        }
        Cell::Text(s) => {
            worksheet.write_with_format(row, col, s.as_str(), &base)?;
        }
    }

    Ok(())
}
