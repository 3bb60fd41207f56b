//! Main application state and logic.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use super::theme::Theme;
use super::widgets::{contains, truncate_to_width, KeyHints};
use super::word_card::{WordCard, WordCardState, CARD_WIDTH};
use crate::config::Config;
use crate::image::ImagePreview;
use crate::models::{DisplayLanguage, WordRecord};

const CARD_HEIGHT: u16 = 24;
const CARD_GAP: u16 = 1;
const STATUS_TTL: Duration = Duration::from_secs(5);

// ══════════════════════════════════════════════════════════════════════════
// Application State
// ══════════════════════════════════════════════════════════════════════════

pub struct App {
    pub running: bool,

    // Config and theme
    pub config: Config,
    config_path: Option<PathBuf>,
    pub theme: Theme,

    // One entry per word, index-aligned
    words: Vec<WordRecord>,
    previews: Vec<ImagePreview>,
    cards: Vec<WordCardState>,

    // Focus and last layout
    selected: usize,
    card_areas: Vec<(usize, Rect)>,

    // Status message (shown temporarily)
    status_message: Option<(String, Instant)>,
}

impl App {
    /// `config_path` is where theme changes are persisted; `None` keeps
    /// them in memory.
    pub fn new(words: Vec<WordRecord>, config: Config, config_path: Option<PathBuf>) -> Self {
        let theme = Theme::from_dark_mode(config.dark_mode);
        let previews = words
            .iter()
            .map(|word| ImagePreview::from_payload(word.image_data.as_deref()))
            .collect();
        let cards = vec![WordCardState::new(); words.len()];

        tracing::debug!(count = words.len(), "word cards mounted");

        Self {
            running: true,
            config,
            config_path,
            theme,
            words,
            previews,
            cards,
            selected: 0,
            card_areas: Vec::new(),
            status_message: None,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[cfg(test)]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[cfg(test)]
    pub fn card_state(&self, index: usize) -> Option<&WordCardState> {
        self.cards.get(index)
    }

    pub fn select_next(&mut self) {
        if !self.words.is_empty() {
            self.selected = (self.selected + 1) % self.words.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.words.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.words.len() - 1);
        }
    }

    /// Apply a language to the focused card only.
    pub fn select_language(&mut self, language: DisplayLanguage) {
        if let Some(card) = self.cards.get_mut(self.selected) {
            card.select_language(language);
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        let name = self.theme.name.next();
        self.theme = Theme::new(name);
        self.config.dark_mode = name.is_dark();

        if let Some(ref path) = self.config_path {
            if let Err(e) = self.config.save_to(path) {
                tracing::warn!(error = %e, "failed to persist theme");
                self.set_status(format!("Could not save config: {}", e));
            }
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    // ══════════════════════════════════════════════════════════════════════
    // Event Handling
    // ══════════════════════════════════════════════════════════════════════

    pub fn handle_events(&mut self) -> anyhow::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key.code),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('t') => self.toggle_dark_mode(),
            KeyCode::Left | KeyCode::Char('h') => self.select_previous(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.select_next(),
            KeyCode::Char(c) => {
                if let Some(language) = DisplayLanguage::from_key(c) {
                    self.select_language(language);
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let hit = self
            .card_areas
            .iter()
            .find(|(_, area)| contains(*area, mouse.column, mouse.row))
            .map(|(index, _)| *index);

        if let Some(index) = hit {
            self.selected = index;
            self.cards[index].click(mouse.column, mouse.row);
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Rendering
    // ══════════════════════════════════════════════════════════════════════

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Clear with background
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(self.theme.background()), area);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Top padding
            Constraint::Length(1), // Header
            Constraint::Length(1), // Spacing
            Constraint::Min(8),    // Cards
            Constraint::Length(1), // Status
            Constraint::Length(1), // Hints
        ])
        .split(area);

        let (start, end) = self.visible_range(chunks[3].width);
        self.render_header(frame, chunks[1], start, end);

        if self.words.is_empty() {
            let empty = Paragraph::new("No words to show")
                .alignment(Alignment::Center)
                .style(self.theme.muted());
            frame.render_widget(empty, centered_rows(1, chunks[3]));
        } else {
            self.render_cards(frame, chunks[3], start, end);
        }

        if let Some((ref msg, time)) = self.status_message {
            if time.elapsed() < STATUS_TTL {
                let status = Paragraph::new(truncate_to_width(msg, chunks[4].width as usize))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(self.theme.colors.accent));
                frame.render_widget(status, chunks[4]);
            }
        }

        let theme_hint = format!("[{}]", self.theme.name.display_name());
        let hints_data: [(&str, &str); 6] = [
            ("←/→", "card"),
            ("1/s", "Sánscrito"),
            ("2/e", "Español"),
            ("3/i", "Inglés"),
            ("t", &theme_hint),
            ("q", "quit"),
        ];
        frame.render_widget(KeyHints::new(&hints_data, &self.theme), chunks[5]);
    }

    /// Cards that fit side by side, paged so the focused one is shown.
    fn visible_range(&self, width: u16) -> (usize, usize) {
        let per_page = usize::from((width + CARD_GAP) / (CARD_WIDTH + CARD_GAP)).max(1);
        let start = (self.selected / per_page) * per_page;
        let end = (start + per_page).min(self.words.len());
        (start, end)
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, start: usize, end: usize) {
        let mut spans = vec![Span::styled("Word Cards", self.theme.title())];
        if !self.words.is_empty() {
            spans.push(Span::styled(
                format!("  {}–{} of {}", start + 1, end, self.words.len()),
                self.theme.muted(),
            ));
        }
        let header = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(header, area);
    }

    fn render_cards(&mut self, frame: &mut Frame, area: Rect, start: usize, end: usize) {
        for card in &mut self.cards {
            card.clear_layout();
        }
        self.card_areas.clear();

        let height = area.height.min(CARD_HEIGHT);
        let row = Rect { height, ..area };
        let slots = Layout::horizontal(vec![Constraint::Length(CARD_WIDTH); end - start])
            .flex(Flex::Center)
            .spacing(CARD_GAP)
            .split(row);

        for (index, slot) in (start..end).zip(slots.iter()) {
            let card = WordCard::new(&self.words[index], &self.previews[index], &self.theme)
                .focused(index == self.selected);
            frame.render_stateful_widget(card, *slot, &mut self.cards[index]);
            self.card_areas.push((index, *slot));
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Helper Functions
// ══════════════════════════════════════════════════════════════════════════

/// Rows of a given height, centered vertically.
fn centered_rows(height: u16, r: Rect) -> Rect {
    Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(r)[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use tempfile::TempDir;

    use crate::models::SubWordLink;

    fn words() -> Vec<WordRecord> {
        vec![
            WordRecord::new("Tadasana", "Postura de la Montaña", "Mountain Pose").with_breakdown(vec![
                SubWordLink::new("Asana", "postura", "pose"),
                SubWordLink::new("Tad", "montaña", "mountain"),
            ]),
            WordRecord::new("Vrksasana", "Postura del Árbol", "Tree Pose"),
            WordRecord::new("Savasana", "Postura del Cadáver", "Corpse Pose"),
        ]
    }

    fn app() -> App {
        App::new(words(), Config::default(), None)
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buf: &Buffer) -> String {
        buf.content
            .chunks(buf.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn every_card_starts_in_sanskrit() {
        let app = app();
        for i in 0..app.word_count() {
            assert_eq!(app.card_state(i).unwrap().language(), DisplayLanguage::Sanskrit);
        }
    }

    #[test]
    fn keys_change_only_the_focused_card() {
        let mut app = app();
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Char('2'));

        assert_eq!(app.selected(), 1);
        assert_eq!(app.card_state(0).unwrap().language(), DisplayLanguage::Sanskrit);
        assert_eq!(app.card_state(1).unwrap().language(), DisplayLanguage::Spanish);

        app.handle_key(KeyCode::Char('i'));
        assert_eq!(app.card_state(1).unwrap().language(), DisplayLanguage::English);
    }

    #[test]
    fn focus_wraps_around() {
        let mut app = app();
        app.handle_key(KeyCode::Left);
        assert_eq!(app.selected(), 2);
        app.handle_key(KeyCode::Char('l'));
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn renders_all_cards_when_they_fit() {
        let mut app = app();
        let rendered = text(&draw(&mut app, 120, 30));

        assert!(rendered.contains("Tadasana"));
        assert!(rendered.contains("Vrksasana"));
        assert!(rendered.contains("Savasana"));
        assert!(rendered.contains("1–3 of 3"));
    }

    #[test]
    fn pages_to_the_focused_card() {
        let mut app = app();
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Right);
        let rendered = text(&draw(&mut app, 40, 30));

        assert!(rendered.contains("Savasana"));
        assert!(!rendered.contains("Tadasana"));
        assert!(rendered.contains("3–3 of 3"));
    }

    #[test]
    fn click_selects_language_on_that_card() {
        let mut app = app();
        draw(&mut app, 120, 30);

        let area = app.card_state(1).unwrap().button_area(DisplayLanguage::English);
        app.handle_mouse(left_click(area.x, area.y));

        assert_eq!(app.selected(), 1);
        assert_eq!(app.card_state(1).unwrap().language(), DisplayLanguage::English);
        assert_eq!(app.card_state(0).unwrap().language(), DisplayLanguage::Sanskrit);

        let rendered = text(&draw(&mut app, 120, 30));
        assert!(rendered.contains("Tree Pose"));
        assert!(rendered.contains("Tadasana"));
    }

    #[test]
    fn click_outside_selectors_only_focuses() {
        let mut app = app();
        draw(&mut app, 120, 30);

        let area = app.card_state(2).unwrap().button_area(DisplayLanguage::Spanish);
        app.handle_mouse(left_click(area.x, area.y - 3));

        assert_eq!(app.selected(), 2);
        assert_eq!(app.card_state(2).unwrap().language(), DisplayLanguage::Sanskrit);
    }

    #[test]
    fn clicks_on_hidden_cards_are_ignored() {
        let mut app = app();
        draw(&mut app, 120, 30);
        let area = app.card_state(2).unwrap().button_area(DisplayLanguage::Spanish);

        // Narrow terminal: only the first card remains on screen.
        draw(&mut app, 40, 30);
        app.handle_mouse(left_click(area.x, area.y));

        assert_eq!(app.selected(), 0);
        assert_eq!(app.card_state(2).unwrap().language(), DisplayLanguage::Sanskrit);
    }

    #[test]
    fn empty_word_list() {
        let mut app = App::new(Vec::new(), Config::default(), None);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Char('2'));

        let rendered = text(&draw(&mut app, 80, 20));
        assert!(rendered.contains("No words to show"));
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn theme_toggle_is_persisted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut app = App::new(words(), Config::default(), Some(path.clone()));

        app.handle_key(KeyCode::Char('t'));

        assert!(app.theme.name.is_dark());
        assert!(Config::load_from(&path).unwrap().dark_mode);
        assert!(text(&draw(&mut app, 120, 30)).contains("[Dark]"));
    }

    #[test]
    fn theme_toggle_without_config_path_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "dark_mode = \"sometimes\"\nwords_file = \"/srv/words.json\"\n").unwrap();

        let (config, save_path) = Config::load_for_session(&path);
        let mut app = App::new(words(), config, save_path);
        app.handle_key(KeyCode::Char('t'));

        assert!(app.theme.name.is_dark());
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("/srv/words.json"));
        assert!(on_disk.contains("sometimes"));
    }

    #[test]
    fn long_breakdown_shows_overflow_in_short_terminal() {
        let breakdown = (1..=10)
            .map(|i| SubWordLink::new(&format!("part{:02}", i), "es", "en"))
            .collect();
        let word = WordRecord::new("Tadasana", "", "").with_breakdown(breakdown);
        let mut app = App::new(vec![word], Config::default(), None);

        // 20 rows leave a 15-row card with 3 breakdown rows.
        let rendered = text(&draw(&mut app, 80, 20));

        assert!(rendered.contains("part02"));
        assert!(!rendered.contains("part03"));
        assert!(rendered.contains("+8 more"));
    }

    #[test]
    fn dark_mode_config_starts_dark() {
        let config = Config {
            dark_mode: true,
            ..Default::default()
        };
        let app = App::new(words(), config, None);
        assert!(app.theme.name.is_dark());
    }
}
