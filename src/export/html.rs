// src/export/html.rs

use crate::errors::AppResult;
use crate::models::MergedRow;
use crate::models::report::merged_headers;
use std::io::Write;

/// HTML table with a `dataframe` class:
/// one `<thead>` row, one `<tbody>` row per record, no index column.
pub(crate) fn write_html<W: Write>(rows: &[MergedRow], mut out: W) -> AppResult<()> {
    writeln!(out, "<table border=\"1\" class=\"dataframe\">")?;
    writeln!(out, "  <thead>")?;
    writeln!(out, "    <tr style=\"text-align: right;\">")?;
    for header in merged_headers() {
        writeln!(out, "      <th>{}</th>", escape(header))?;
    }
    writeln!(out, "    </tr>")?;
    writeln!(out, "  </thead>")?;
    writeln!(out, "  <tbody>")?;

    for row in rows {
        writeln!(out, "    <tr>")?;
        for cell in row.to_cells() {
            writeln!(out, "      <td>{}</td>", escape(&cell))?;
        }
        writeln!(out, "    </tr>")?;
    }

    writeln!(out, "  </tbody>")?;
    writeln!(out, "</table>")?;
    out.flush()?;
    Ok(())
}

fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
