//! Block renderer: alignment, padding, margin and colors

use super::ansi::strip_ansi_codes;
use super::color::paint;
use super::spacing::Spacing;
use clap::ValueEnum;
use crossterm::style::{Attribute, Color, ContentStyle};
use unicode_width::UnicodeWidthStr as _;

/// Horizontal alignment of lines inside a block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Visual style of a rendered block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub align: Align,
    /// Minimum block width, padding included
    pub width: Option<usize>,
    /// Space inside the background
    pub padding: Spacing,
    /// Space outside the background
    pub margin: Spacing,
}

impl Style {
    /// Style that only sets a foreground color
    #[must_use]
    pub fn foreground(color: Option<Color>) -> Self {
        Self {
            foreground: color,
            ..Self::default()
        }
    }

    fn block_style(&self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.background_color = self.background;
        style
    }

    fn text_style(&self) -> ContentStyle {
        let mut style = self.block_style();
        style.foreground_color = self.foreground;
        for (enabled, attribute) in [
            (self.bold, Attribute::Bold),
            (self.italic, Attribute::Italic),
            (self.underline, Attribute::Underlined),
        ] {
            if enabled {
                style.attributes.set(attribute);
            }
        }
        style
    }

    /// Render `text` as a block of lines joined with `\n`
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let mut lines: Vec<&str> = text.lines().collect();
        if lines.is_empty() {
            lines.push("");
        }

        let widest = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
        let inner = self
            .width
            .map_or(widest, |w| widest.max(w.saturating_sub(self.padding.horizontal())));
        let outer = inner + self.padding.horizontal();

        let block = self.block_style();
        let text_style = self.text_style();
        let blank_row = paint(&block, &" ".repeat(outer));

        let mut rows = Vec::with_capacity(lines.len() + self.padding.top + self.padding.bottom);
        rows.extend(std::iter::repeat_n(blank_row.clone(), self.padding.top));
        for line in lines {
            let gap = inner - display_width(line);
            let (before, after) = match self.align {
                Align::Left => (0, gap),
                Align::Right => (gap, 0),
                Align::Center => (gap / 2, gap - gap / 2),
            };
            rows.push(format!(
                "{}{}{}",
                paint(&block, &" ".repeat(self.padding.left + before)),
                paint(&text_style, line),
                paint(&block, &" ".repeat(after + self.padding.right)),
            ));
        }
        rows.extend(std::iter::repeat_n(blank_row, self.padding.bottom));

        let left = " ".repeat(self.margin.left);
        let right = " ".repeat(self.margin.right);
        let margin_row = " ".repeat(outer + self.margin.horizontal());

        let mut out = Vec::with_capacity(rows.len() + self.margin.top + self.margin.bottom);
        out.extend(std::iter::repeat_n(margin_row.clone(), self.margin.top));
        out.extend(rows.into_iter().map(|row| format!("{left}{row}{right}")));
        out.extend(std::iter::repeat_n(margin_row, self.margin.bottom));
        out.join("\n")
    }
}

/// Width of `text` in terminal columns, ignoring escape sequences
#[must_use]
pub fn display_width(text: &str) -> usize {
    if text.contains('\x1b') {
        strip_ansi_codes(text).width()
    } else {
        text.width()
    }
}
