//! The word card: headword, picture, breakdown rows and language selectors.
//!
//! Rendering is a pure function of the [`WordRecord`] and the card's
//! [`WordCardState`]. The headword and every breakdown row always use the
//! same language.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Padding, Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::theme::{icons, Theme};
use super::widgets::{contains, take_width, truncate_to_width, ImagePanel};
use crate::image::ImagePreview;
use crate::models::{DisplayLanguage, SubWordLink, WordRecord};

/// Outer width of one card, borders included.
pub const CARD_WIDTH: u16 = 38;

const IMAGE_HEIGHT: u16 = 5;

/// Per-card view state: the selected language and where the selector
/// buttons landed on the last render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCardState {
    language: DisplayLanguage,
    buttons: [Rect; 3],
}

impl WordCardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(&self) -> DisplayLanguage {
        self.language
    }

    /// Switch the display language. Selecting the active language again
    /// changes nothing.
    pub fn select_language(&mut self, target: DisplayLanguage) {
        if self.language != target {
            tracing::debug!(from = ?self.language, to = ?target, "language selected");
        }
        self.language = target;
    }

    pub fn button_area(&self, language: DisplayLanguage) -> Rect {
        self.buttons[language.index()]
    }

    /// Selector under a screen position, if any.
    pub fn button_at(&self, column: u16, row: u16) -> Option<DisplayLanguage> {
        DisplayLanguage::ALL
            .into_iter()
            .find(|language| contains(self.button_area(*language), column, row))
    }

    /// Apply a click; returns whether it hit a selector.
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        match self.button_at(column, row) {
            Some(language) => {
                self.select_language(language);
                true
            }
            None => false,
        }
    }

    /// Drop hit areas of a card that is no longer on screen.
    pub fn clear_layout(&mut self) {
        self.buttons = [Rect::default(); 3];
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Word Card Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct WordCard<'a> {
    word: &'a WordRecord,
    image: &'a ImagePreview,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> WordCard<'a> {
    pub fn new(word: &'a WordRecord, image: &'a ImagePreview, theme: &'a Theme) -> Self {
        Self {
            word,
            image,
            theme,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn title_lines(&self, language: DisplayLanguage, width: u16) -> Vec<Line<'static>> {
        let headword = language.headword(self.word);
        textwrap::wrap(headword, usize::from(width.max(1)))
            .into_iter()
            .map(|line| Line::from(line.into_owned()))
            .collect()
    }

    fn breakdown_lines(&self, language: DisplayLanguage, width: u16) -> Vec<Line<'static>> {
        self.word
            .breakdown
            .iter()
            .map(|link| breakdown_row(link, language, usize::from(width), self.theme))
            .collect()
    }

    fn render_buttons(&self, area: Rect, buf: &mut Buffer, state: &mut WordCardState) {
        let chunks = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .spacing(1)
        .split(area);

        for (language, chunk) in DisplayLanguage::ALL.into_iter().zip(chunks.iter()) {
            let active = language == state.language();
            Paragraph::new(truncate_to_width(language.label(), chunk.width as usize))
                .alignment(Alignment::Center)
                .style(self.theme.button(active))
                .render(*chunk, buf);
            state.buttons[language.index()] = *chunk;
        }
    }
}

/// One breakdown row: primary word in bold, then the other two.
fn breakdown_row(
    link: &SubWordLink,
    language: DisplayLanguage,
    width: usize,
    theme: &Theme,
) -> Line<'static> {
    let [primary, secondary, tertiary] = link.ordered(language);
    let separator = format!(" {} ", icons::DOUBLE_ARROW_RIGHT);
    let parts = [
        (primary.to_string(), theme.primary_word()),
        (separator.clone(), theme.separator()),
        (secondary.to_string(), theme.secondary_word()),
        (separator, theme.separator()),
        (tertiary.to_string(), theme.secondary_word()),
    ];
    fit_spans(parts, width)
}

/// Lay spans out left to right. When they overflow, the cut is marked with
/// an ellipsis in the style of the span it lands in.
fn fit_spans(parts: impl IntoIterator<Item = (String, Style)>, width: usize) -> Line<'static> {
    let parts: Vec<(String, Style)> = parts.into_iter().collect();
    let total: usize = parts.iter().map(|(text, _)| text.width()).sum();
    if total <= width {
        return Line::from(
            parts
                .into_iter()
                .map(|(text, style)| Span::styled(text, style))
                .collect::<Vec<_>>(),
        );
    }
    if width == 0 {
        return Line::default();
    }

    let mut remaining = width - icons::ELLIPSIS.width();
    let mut spans = Vec::new();
    for (text, style) in parts {
        let w = text.width();
        if w <= remaining {
            remaining -= w;
            spans.push(Span::styled(text, style));
        } else {
            let head = take_width(&text, remaining);
            spans.push(Span::styled(format!("{}{}", head, icons::ELLIPSIS), style));
            break;
        }
    }
    Line::from(spans)
}

/// Rows that fit in `height`; when some don't, the last visible slot says
/// how many are hidden.
fn visible_rows(mut rows: Vec<Line<'static>>, height: usize, theme: &Theme) -> Vec<Line<'static>> {
    if rows.len() <= height || height == 0 {
        return rows;
    }
    let shown = height - 1;
    let hidden = rows.len() - shown;
    rows.truncate(shown);
    rows.push(Line::from(Span::styled(format!("+{} more", hidden), theme.muted())));
    rows
}

impl StatefulWidget for WordCard<'_> {
    type State = WordCardState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.card_border(self.focused))
            .padding(Padding::horizontal(1))
            .style(self.theme.card());

        let inner = block.inner(area);
        block.render(area, buf);

        let language = state.language();
        let title = self.title_lines(language, inner.width);

        let chunks = Layout::vertical([
            Constraint::Length(IMAGE_HEIGHT),       // Image
            Constraint::Length(1),                  // Spacing
            Constraint::Length(title.len() as u16), // Title
            Constraint::Length(1),                  // Spacing
            Constraint::Min(0),                     // Breakdown
            Constraint::Length(1),                  // Spacing
            Constraint::Length(1),                  // Selectors
        ])
        .split(inner);

        ImagePanel::new(self.image, self.theme).render(chunks[0], buf);

        Paragraph::new(title)
            .style(self.theme.title())
            .render(chunks[2], buf);

        let rows = self.breakdown_lines(language, chunks[4].width);
        Paragraph::new(visible_rows(rows, usize::from(chunks[4].height), self.theme))
            .render(chunks[4], buf);

        self.render_buttons(chunks[6], buf, state);
    }
}
