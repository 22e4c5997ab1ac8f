//! The multi-section table model and its renderer.
//!
//! [`MultiTable`] is the in-memory representation the tree builder fills:
//! an ordered list of [`Section`]s, each carrying an optional title, an
//! indent level, and an ordered sequence of header and data [`Row`]s. The
//! model is write-once/read-once — built during one walk, rendered to one
//! sink, then discarded.
//!
//! Rendering pads every cell to a per-column display width and joins cells
//! with the configured separator. Sections whose header names a column set
//! share width computation, so a record list that was split across
//! re-opened sections still lines up as one table.
//!
//! ## Examples
//!
//! ```rust
//! use multitable::{ColorChoice, MultiTable, RenderOptions};
//!
//! let mut table = MultiTable::new(RenderOptions::new().with_color(ColorChoice::Off));
//! table.new_section(Some("Users"), 0);
//! table.add_row_header(vec!["Id".to_string(), "Name".to_string()]);
//! table.add_row(vec!["1".to_string(), "Alice".to_string()]);
//!
//! let mut out = Vec::new();
//! table.render(&mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("Id | Name"));
//! ```

use crate::{Error, RenderOptions, Result, Styler};
use console::measure_text_width;
use std::collections::HashMap;
use std::io::{self, Write};

/// One row of a section: either column names or cell values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row {
    Header(Vec<String>),
    Data(Vec<String>),
}

impl Row {
    /// The cell texts of this row, header or data.
    #[must_use]
    pub fn cells(&self) -> &[String] {
        match self {
            Row::Header(cells) | Row::Data(cells) => cells,
        }
    }

    /// Returns `true` for header rows.
    #[inline]
    #[must_use]
    pub const fn is_header(&self) -> bool {
        matches!(self, Row::Header(_))
    }
}

/// One titled, indented block of the rendered table.
#[derive(Clone, Debug)]
pub struct Section {
    title: Option<String>,
    indent: usize,
    rows: Vec<Row>,
}

impl Section {
    fn new(title: Option<&str>, indent: usize) -> Self {
        Section {
            title: title.map(str::to_string),
            indent,
            rows: Vec::new(),
        }
    }

    /// The section title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The nesting level; affects only the left margin.
    #[must_use]
    pub fn indent_level(&self) -> usize {
        self.indent
    }

    /// All rows of this section, in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The column names of the first header row, used as the width-sharing key.
    fn first_header(&self) -> Option<&[String]> {
        self.rows.iter().find_map(|row| match row {
            Row::Header(cells) => Some(cells.as_slice()),
            Row::Data(_) => None,
        })
    }

    /// Per-column display widths over this section's own rows.
    fn local_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            let cells = row.cells();
            if widths.len() < cells.len() {
                widths.resize(cells.len(), 0);
            }
            for (slot, cell) in widths.iter_mut().zip(cells) {
                *slot = (*slot).max(measure_text_width(cell));
            }
        }
        widths
    }

    fn write<W: Write>(
        &self,
        writer: &mut W,
        widths: &[usize],
        styler: &Styler,
        separator: char,
        indent_width: usize,
    ) -> io::Result<()> {
        let margin = " ".repeat(self.indent * indent_width);
        if let Some(title) = &self.title {
            let line = format!("{}{}", margin, styler.title(title));
            writeln!(writer, "{}", line.trim_end())?;
        }
        for row in &self.rows {
            if row.is_header() && row.cells().is_empty() {
                continue;
            }
            let joined = match row {
                Row::Header(cells) => compose_line(cells, widths, separator, &|t| styler.header(t)),
                Row::Data(cells) => compose_line(cells, widths, separator, &|t| t.to_string()),
            };
            let line = format!("{}{}", margin, joined);
            writeln!(writer, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Joins cells with ` <sep> `, padding every cell but the last to its
/// column width. Padding is derived from the undecorated text so ANSI
/// decoration cannot skew alignment.
fn compose_line(
    cells: &[String],
    widths: &[usize],
    separator: char,
    decorate: &dyn Fn(&str) -> String,
) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push(' ');
            line.push(separator);
            line.push(' ');
        }
        line.push_str(&decorate(cell));
        if i + 1 < cells.len() {
            let printed = measure_text_width(cell);
            let width = widths.get(i).copied().unwrap_or(0);
            if printed < width {
                line.push_str(&" ".repeat(width - printed));
            }
        }
    }
    line
}

/// An ordered collection of sections plus the render operation.
///
/// Created fresh for every formatting call, mutated only by the builder,
/// rendered exactly once.
#[derive(Clone, Debug)]
pub struct MultiTable {
    sections: Vec<Section>,
    styler: Styler,
    separator: char,
    indent_width: usize,
}

impl MultiTable {
    /// Creates an empty table configured by `options`.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        MultiTable {
            sections: Vec::new(),
            styler: Styler::for_choice(options.color),
            separator: options.separator,
            indent_width: options.indent,
        }
    }

    /// Appends a new section; it becomes the current insertion target.
    pub fn new_section(&mut self, title: Option<&str>, indent_level: usize) {
        self.sections.push(Section::new(title, indent_level));
    }

    /// Appends a header row of column names to the current section.
    pub fn add_row_header(&mut self, columns: Vec<String>) {
        self.current_section().rows.push(Row::Header(columns));
    }

    /// Appends a data row of cell values to the current section.
    pub fn add_row(&mut self, values: Vec<String>) {
        self.current_section().rows.push(Row::Data(values));
    }

    /// Returns `true` if no sections have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// All sections, in insertion order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    // Rows added before any section was opened land in an untitled
    // top-level section.
    fn current_section(&mut self) -> &mut Section {
        if self.sections.is_empty() {
            self.sections.push(Section::new(None, 0));
        }
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    /// Serializes the table to `writer` as a monospace-aligned grid.
    ///
    /// An empty table writes nothing. The writer is flushed at the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the sink fails. A closed pipe
    /// (`BrokenPipe`) is treated as normal early termination: writing
    /// stops and `Ok(())` is returned.
    pub fn render<W: Write>(&self, mut writer: W) -> Result<()> {
        match self.write_sections(&mut writer) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn write_sections<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let widths = self.column_widths();
        for (section, widths) in self.sections.iter().zip(&widths) {
            section.write(writer, widths, &self.styler, self.separator, self.indent_width)?;
        }
        writer.flush()
    }

    /// Display widths per section. Sections whose first header row names
    /// the same columns share widths; header-less sections size locally.
    fn column_widths(&self) -> Vec<Vec<usize>> {
        let mut widths: Vec<Vec<usize>> = self.sections.iter().map(Section::local_widths).collect();

        let mut shared: HashMap<Vec<String>, Vec<usize>> = HashMap::new();
        for (section, local) in self.sections.iter().zip(&widths) {
            if let Some(header) = section.first_header() {
                merge_widths(shared.entry(header.to_vec()).or_default(), local);
            }
        }
        for (section, local) in self.sections.iter().zip(widths.iter_mut()) {
            if let Some(merged) = section.first_header().and_then(|h| shared.get(h)) {
                *local = merged.clone();
            }
        }
        widths
    }
}

fn merge_widths(into: &mut Vec<usize>, other: &[usize]) {
    if into.len() < other.len() {
        into.resize(other.len(), 0);
    }
    for (slot, width) in into.iter_mut().zip(other) {
        *slot = (*slot).max(*width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorChoice;

    fn plain_table() -> MultiTable {
        MultiTable::new(RenderOptions::new().with_color(ColorChoice::Off))
    }

    fn render_to_string(table: &MultiTable) -> String {
        let mut out = Vec::new();
        table.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        let table = plain_table();
        assert_eq!(render_to_string(&table), "");
    }

    #[test]
    fn test_lazy_untitled_section() {
        let mut table = plain_table();
        table.add_row(vec!["a".to_string()]);
        assert_eq!(table.sections().len(), 1);
        assert!(table.sections()[0].title().is_none());
        assert_eq!(render_to_string(&table), "a\n");
    }

    #[test]
    fn test_padding_and_separator() {
        let mut table = plain_table();
        table.new_section(Some("T"), 0);
        table.add_row_header(vec!["Key".to_string(), "Value".to_string()]);
        table.add_row(vec!["a".to_string(), "1".to_string()]);
        let text = render_to_string(&table);
        assert_eq!(text, "T\nKey | Value\na   | 1\n");
    }

    #[test]
    fn test_indent_margin() {
        let mut table = plain_table();
        table.new_section(Some("Outer"), 0);
        table.add_row(vec!["x".to_string()]);
        table.new_section(Some("Inner"), 1);
        table.add_row(vec!["y".to_string()]);
        let text = render_to_string(&table);
        assert_eq!(text, "Outer\nx\n  Inner\n  y\n");
    }

    #[test]
    fn test_width_shared_across_equal_headers() {
        let mut table = plain_table();
        table.new_section(Some("S"), 0);
        table.add_row_header(vec!["Id".to_string(), "Name".to_string()]);
        table.add_row(vec!["1".to_string(), "a-long-name".to_string()]);
        table.new_section(Some("S"), 0);
        table.add_row_header(vec!["Id".to_string(), "Name".to_string()]);
        table.add_row(vec!["2".to_string(), "b".to_string()]);
        let text = render_to_string(&table);
        // Both segments pad "Id" to the same width even though the long
        // name lives only in the first one.
        for line in text.lines().filter(|l| l.contains('|')) {
            assert_eq!(line.find('|'), Some(3), "misaligned line: {:?}", line);
        }
    }

    #[test]
    fn test_empty_header_row_not_printed() {
        let mut table = plain_table();
        table.new_section(Some("S"), 0);
        table.add_row_header(vec![]);
        table.add_row(vec!["x".to_string()]);
        assert_eq!(render_to_string(&table), "S\nx\n");
    }

    #[test]
    fn test_broken_pipe_is_silent() {
        struct ClosedPipe;
        impl Write for ClosedPipe {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut table = plain_table();
        table.new_section(Some("S"), 0);
        table.add_row(vec!["x".to_string()]);
        assert!(table.render(ClosedPipe).is_ok());
    }

    #[test]
    fn test_other_write_errors_are_fatal() {
        struct FullDisk;
        impl Write for FullDisk {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut table = plain_table();
        table.new_section(Some("S"), 0);
        table.add_row(vec!["x".to_string()]);
        assert!(matches!(table.render(FullDisk), Err(Error::Io(_))));
    }
}
