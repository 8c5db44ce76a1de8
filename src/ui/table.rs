//! Aligned text tables with optional per-cell styles.

use std::fmt::Write;

use console::Style;

/// One table cell
#[derive(Debug, Clone)]
pub struct Cell {
    text: String,
    style: Option<Style>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }

    fn width(&self) -> usize {
        console::measure_text_width(&self.text)
    }

    /// Pad before styling so escape codes never count toward the width.
    fn render(&self, width: usize) -> String {
        let padded = console::pad_str(&self.text, width, console::Alignment::Left, None);
        match &self.style {
            Some(style) => style.apply_to(padded).to_string(),
            None => padded.into_owned(),
        }
    }
}

/// Header row plus body rows, rendered with two-space column gaps
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    headers: Vec<Cell>,
    rows: Vec<Vec<Cell>>,
}

impl TextTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header_style = Style::new().bold();
        Self {
            headers: headers
                .into_iter()
                .map(|h| Cell::styled(h, header_style.clone()))
                .collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let columns = self.headers.len();
        let widths: Vec<usize> = (0..columns)
            .map(|col| {
                std::iter::once(&self.headers)
                    .chain(self.rows.iter())
                    .filter_map(|row| row.get(col))
                    .map(Cell::width)
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        for row in std::iter::once(&self.headers).chain(self.rows.iter()) {
            let line: Vec<String> = (0..columns)
                .map(|col| {
                    row.get(col)
                        .map_or_else(|| " ".repeat(widths[col]), |cell| cell.render(widths[col]))
                })
                .collect();
            let _ = writeln!(out, "{}", line.join("  ").trim_end());
        }
        out
    }
}
