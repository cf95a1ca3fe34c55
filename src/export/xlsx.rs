// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::excel_date::{DURATION_NUM_FORMAT, seconds_to_excel_serial};
use crate::models::MergedRow;
use crate::models::report::merged_headers;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Styled XLSX workbook with auto-sized columns.
pub(crate) fn write_xlsx(rows: &[MergedRow], path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Header
    // ---------------------------
    let headers = merged_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, merged) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        let text = merged.to_cells();
        for (col, value) in text.iter().enumerate() {
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }

        // Issue
        match merged.issue {
            Some(id) => write_number(worksheet, row, 0, f64::from(id), band_color)?,
            None => write_blank(worksheet, row, 0, band_color)?,
        }

        // Title, Comment
        for (col, value) in [(1u16, &merged.title), (2u16, &merged.comment)] {
            match value {
                Some(s) => write_text(worksheet, row, col, s, band_color)?,
                None => write_blank(worksheet, row, col, band_color)?,
            }
        }

        // Duration
        match merged.duration {
            Some(secs) => write_duration(worksheet, row, 3, secs, band_color)?,
            None => write_blank(worksheet, row, 3, band_color)?,
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    workbook.save(path)?;
    Ok(())
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_number(ws: &mut Worksheet, row: u32, col: u16, n: f64, bg: Color) -> AppResult<()> {
    let fmt = cell_format(bg).set_align(FormatAlign::Right);
    ws.write_with_format(row, col, n, &fmt)?;
    Ok(())
}

fn write_duration(ws: &mut Worksheet, row: u32, col: u16, secs: u64, bg: Color) -> AppResult<()> {
    let fmt = cell_format(bg)
        .set_num_format(DURATION_NUM_FORMAT)
        .set_align(FormatAlign::Right);
    ws.write_with_format(row, col, seconds_to_excel_serial(secs), &fmt)?;
    Ok(())
}

fn write_text(ws: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    ws.write_with_format(row, col, s, &cell_format(bg))?;
    Ok(())
}

fn write_blank(ws: &mut Worksheet, row: u32, col: u16, bg: Color) -> AppResult<()> {
    ws.write_blank(row, col, &cell_format(bg))?;
    Ok(())
}
