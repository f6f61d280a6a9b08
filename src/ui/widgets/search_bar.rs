//! Search bar widget for query input

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Hint shown in an empty, unfocused input
pub const PLACEHOLDER: &str = "Enter a part of the name";

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Cursor position in the query
    cursor: usize,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the input has focus
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            theme,
            focused: false,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn cursor_span() -> Span<'static> {
        Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK))
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::new();

        if self.query.is_empty() {
            if self.focused {
                spans.push(Self::cursor_span());
            } else {
                spans.push(Span::styled(PLACEHOLDER, self.theme.dimmed_style()));
            }
        } else if self.focused {
            // Split query at cursor position
            let cursor = self.cursor.min(self.query.len());
            let (before, after) = self.query.split_at(cursor);
            spans.push(Span::raw(before));
            spans.push(Self::cursor_span());
            spans.push(Span::raw(after));
        } else {
            spans.push(Span::raw(self.query));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
