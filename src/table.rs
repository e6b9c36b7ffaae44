//! Table
//!
//! Plain monospace tables: a header line, a dashed rule, the body, another rule and a
//! footer line. Every column is as wide as its widest cell, and cells on a line are
//! joined by a single space with no trailing space.

use std::{array, fmt, iter};

/// Text returned instead of a table when there are no body rows.
pub const NO_ITEMS: &str = "No items.";

/// Character used to draw separator rules.
const RULE: char = '-';

/// Gap placed between adjacent cells.
const CELL_GAP: &str = " ";

/// Horizontal alignment of a cell within its column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    /// Pad on the right.
    #[default]
    Left,

    /// Pad on both sides, with any odd space going to the right.
    Center,

    /// Pad on the left.
    Right,
}

/// Fits `value` into exactly `width` characters.
///
/// Values longer than `width` are cut to their first `width` characters. Shorter
/// values are padded with spaces according to `align`.
pub fn append_formatted(value: &str, align: Align, width: usize) -> String {
    let len = display_width(value);

    if len > width {
        return value.chars().take(width).collect();
    }

    let padding = width - len;
    let (before, after) = match align {
        Align::Left => (0, padding),
        Align::Center => (padding / 2, padding - padding / 2),
        Align::Right => (padding, 0),
    };

    let mut cell = String::with_capacity(value.len() + padding);
    cell.extend(iter::repeat_n(' ', before));
    cell.push_str(value);
    cell.extend(iter::repeat_n(' ', after));
    cell
}

/// Dashed rule as wide as a rendered line.
fn rule(widths: &[usize]) -> String {
    let gaps = widths.len().saturating_sub(1) * CELL_GAP.len();
    let len = widths.iter().sum::<usize>() + gaps;

    iter::repeat_n(RULE, len).collect()
}

/// Width of a cell in characters. Wide characters count as one.
fn display_width(value: &str) -> usize {
    value.chars().count()
}

/// A table of `N` columns with a header, body rows and a footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<const N: usize> {
    header: [String; N],
    alignments: [Align; N],
    rows: Vec<[String; N]>,
    footer: [String; N],
    empty_message: String,
}

impl<const N: usize> Table<N> {
    /// Creates an empty table with the given header and column alignments.
    pub fn new<S: Into<String>>(header: [S; N], alignments: [Align; N]) -> Self {
        Self {
            header: header.map(Into::into),
            alignments,
            rows: Vec::new(),
            footer: array::from_fn(|_| String::new()),
            empty_message: NO_ITEMS.to_string(),
        }
    }

    /// Sets the footer line.
    #[must_use]
    pub fn with_footer<S: Into<String>>(mut self, footer: [S; N]) -> Self {
        self.footer = footer.map(Into::into);
        self
    }

    /// Sets the text rendered when the table has no body rows.
    #[must_use]
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Appends a body row.
    pub fn push_row<S: Into<String>>(&mut self, row: [S; N]) -> &mut Self {
        self.rows.push(row.map(Into::into));
        self
    }

    /// Body rows, in insertion order.
    pub fn rows(&self) -> &[[String; N]] {
        &self.rows
    }

    /// Widest cell of each column across header, body and footer.
    pub fn column_widths(&self) -> [usize; N] {
        self.lines().fold([0; N], |widths, line| {
            array::from_fn(|col| {
                let width = widths.get(col).copied().unwrap_or_default();

                line.get(col)
                    .map_or(width, |cell| width.max(display_width(cell)))
            })
        })
    }

    /// Renders the table, or the empty message when there are no body rows.
    ///
    /// The output has no trailing newline.
    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return self.empty_message.clone();
        }

        let widths = self.column_widths();
        let rule = rule(&widths);

        let mut out = self.render_line(&self.header, &widths);
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');

        for row in &self.rows {
            out.push_str(&self.render_line(row, &widths));
            out.push('\n');
        }

        out.push_str(&rule);
        out.push('\n');
        out.push_str(&self.render_line(&self.footer, &widths));
        out
    }

    /// Header, body rows and footer, top to bottom.
    fn lines(&self) -> impl Iterator<Item = &[String; N]> {
        iter::once(&self.header)
            .chain(&self.rows)
            .chain(iter::once(&self.footer))
    }

    fn render_line(&self, cells: &[String; N], widths: &[usize; N]) -> String {
        cells
            .iter()
            .zip(&self.alignments)
            .zip(widths)
            .map(|((cell, &align), &width)| append_formatted(cell, align, width))
            .collect::<Vec<_>>()
            .join(CELL_GAP)
    }
}

impl<const N: usize> fmt::Display for Table<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
