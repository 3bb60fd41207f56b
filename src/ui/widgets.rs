//! Small shared widgets for the word card TUI.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::theme::{icons, Theme};
use crate::image::ImagePreview;

// ══════════════════════════════════════════════════════════════════════════
// Image Panel Widget
// ══════════════════════════════════════════════════════════════════════════

/// Placeholder standing in for the word's picture.
pub struct ImagePanel<'a> {
    preview: &'a ImagePreview,
    theme: &'a Theme,
}

impl<'a> ImagePanel<'a> {
    pub fn new(preview: &'a ImagePreview, theme: &'a Theme) -> Self {
        Self { preview, theme }
    }
}

impl Widget for ImagePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(self.theme.colors.text_dim));

        let inner = block.inner(area);
        block.render(area, buf);

        let caption = match self.preview {
            ImagePreview::Decoded { .. } => format!("{} {}", icons::IMAGE, self.preview.caption()),
            _ => self.preview.caption(),
        };

        let vertical_padding = inner.height.saturating_sub(1) / 2;
        let caption_area = Rect {
            y: inner.y + vertical_padding,
            height: inner.height.min(1),
            ..inner
        };

        Paragraph::new(truncate_to_width(&caption, inner.width as usize))
            .alignment(Alignment::Center)
            .style(self.theme.image_placeholder())
            .render(caption_area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Key Hints Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct KeyHints<'a> {
    hints: &'a [(&'a str, &'a str)],
    theme: &'a Theme,
}

impl<'a> KeyHints<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", self.theme.key_hint()));
            }
            spans.push(Span::styled(*key, self.theme.key_highlight()));
            spans.push(Span::styled(format!(" {}", desc), self.theme.key_hint()));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

/// Whether a screen position falls inside `area`.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Longest prefix of `s` that fits in `max_width` cells.
pub fn take_width(s: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width {
            return &s[..idx];
        }
        used += w;
    }
    s
}

/// Cut a string to a display width, marking the cut with an ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - icons::ELLIPSIS.width();
    format!("{}{}", take_width(s, budget), icons::ELLIPSIS)
}
