use std::io;
use std::path::Path;

use crate::render::{Alignment, CellStyle, Page};
use crate::utils;

/// A plain text page on a monospace character grid.
///
/// Borders are drawn with `|`, highlighted cells are padded with `░` and
/// the bold flag is ignored, plain text has no weight. Adjacent bordered
/// cells share their separator like table cells on paper do.
#[derive(Debug, Clone, Default)]
pub struct TextPage {
    lines: Vec<String>,
    current: String,
}

impl TextPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered document, one string per line.
    ///
    /// An unterminated current line counts as a line of its own.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = self.lines.iter().map(String::as_str).collect();

        if !self.current.is_empty() {
            lines.push(&self.current);
        }

        lines
    }

    fn render_text(width: usize, text: &str, style: CellStyle) -> String {
        let text: String = text.chars().take(width).collect();
        let padding = width - text.chars().count();

        let (left, right) = match style.align {
            Alignment::Left => (0, padding),
            Alignment::Center => (padding / 2, padding - padding / 2),
            Alignment::Right => (padding, 0),
        };

        let pad = if style.filled { '░' } else { ' ' };

        let mut result = String::new();
        result.extend(std::iter::repeat(pad).take(left));
        result.push_str(&text);
        result.extend(std::iter::repeat(pad).take(right));
        result
    }
}

impl Page for TextPage {
    fn cell(&mut self, width: usize, text: &str, style: CellStyle) {
        let content = Self::render_text(width, text, style);

        if style.bordered {
            // merge with the closing border of the previous cell
            if !self.current.ends_with('|') {
                self.current.push('|');
            }

            self.current.push_str(&content);
            self.current.push('|');
        } else {
            self.current.push_str(&content);
        }
    }

    fn line_break(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
    }

    fn save(&self, path: &Path) -> io::Result<()> {
        let mut document = self.lines().join("\n");
        document.push('\n');

        utils::write(path, document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_alignment() {
        let style = CellStyle::new();

        assert_eq!(TextPage::render_text(6, "ab", style), "ab    ");
        assert_eq!(
            TextPage::render_text(6, "ab", style.align(Alignment::Right)),
            "    ab"
        );
        assert_eq!(
            TextPage::render_text(6, "ab", style.align(Alignment::Center)),
            "  ab  "
        );
        assert_eq!(
            TextPage::render_text(5, "ab", style.align(Alignment::Center)),
            " ab  "
        );
    }

    #[test]
    fn test_overlong_text_is_truncated() {
        assert_eq!(
            TextPage::render_text(4, "Mercredi 31", CellStyle::new()),
            "Merc"
        );
    }

    #[test]
    fn test_fill_padding() {
        assert_eq!(
            TextPage::render_text(4, "x", CellStyle::new().filled(true)),
            "x░░░"
        );
        assert_eq!(
            TextPage::render_text(
                4,
                "",
                CellStyle::new().filled(true).align(Alignment::Center)
            ),
            "░░░░"
        );
    }

    #[test]
    fn test_borders_are_merged() {
        let mut page = TextPage::new();
        let style = CellStyle::new().bordered();

        page.cell(3, "a", style);
        page.cell(3, "b", style);
        page.line_break();

        assert_eq!(page.lines(), vec!["|a  |b  |"]);
    }

    #[test]
    fn test_unbordered_cells_concatenate() {
        let mut page = TextPage::new();

        page.cell(4, "", CellStyle::new());
        page.cell(4, "ab", CellStyle::new().align(Alignment::Right));
        page.line_break();

        assert_eq!(page.lines(), vec!["      ab"]);
    }

    #[test]
    fn test_non_ascii_width() {
        // counted in characters, not bytes
        assert_eq!(TextPage::render_text(8, "Présent", CellStyle::new()), "Présent ");
    }
}
