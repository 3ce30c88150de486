use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const COLUMN_GAP: &str = " | ";

/// Plain-text tables with a titled banner:
///
/// ```text
/// ---------------
/// TITLE
/// ---------------
/// # | NAME
/// ---------------
/// 1 | Trip
/// ---------------
/// ```
#[derive(Debug, Default, Clone)]
pub struct TablePrinter {
    util: WidthUtil,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        title: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: &str,
        out: &mut W,
    ) -> io::Result<()> {
        let widths = self.column_widths(headers, rows);
        let mut total = self.natural_width(&widths).max(self.util.visible_width(title));

        if rows.is_empty() {
            total = total.max(self.util.visible_width(empty_message));
            self.write_banner(out, title, total)?;
            writeln!(out, "{empty_message}")?;
            return self.write_rule(out, total);
        }

        self.write_banner(out, title, total)?;
        writeln!(out, "{}", self.line(headers, &widths))?;
        self.write_rule(out, total)?;
        for row in rows {
            writeln!(out, "{}", self.line(row, &widths))?;
        }
        self.write_rule(out, total)
    }

    fn column_widths<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> Vec<usize> {
        let mut widths: Vec<usize> = headers
            .iter()
            .map(|h| self.util.visible_width(h))
            .collect();
        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(self.util.visible_width(cell.as_ref()));
            }
        }
        widths
    }

    fn natural_width(&self, widths: &[usize]) -> usize {
        let gaps = widths.len().saturating_sub(1) * COLUMN_GAP.len();
        widths.iter().sum::<usize>() + gaps
    }

    fn line<T: AsRef<str>>(&self, cells: &[T], widths: &[usize]) -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| self.util.pad_visible(cell.as_ref(), *w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .trim_end()
            .to_string()
    }

    fn write_banner<W: Write + ?Sized>(&self, out: &mut W, title: &str, width: usize) -> io::Result<()> {
        self.write_rule(out, width)?;
        writeln!(out, "{}", title.to_uppercase())?;
        self.write_rule(out, width)
    }

    fn write_rule<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> io::Result<()> {
        writeln!(out, "{}", "-".repeat(width.max(1)))
    }
}
