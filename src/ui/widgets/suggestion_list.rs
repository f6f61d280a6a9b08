//! Suggestion list widget

use crate::ui::theme::Theme;
use crate::widget::SuggestionRow;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Clickable list of suggestions, one row per displayed person
pub struct SuggestionList<'a> {
    /// Rows to show, in order
    rows: &'a [SuggestionRow<'a>],
    /// Highlighted row
    cursor: usize,
    /// First visible row
    scroll_offset: usize,
    /// Total people in the dataset, for the title
    total: usize,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> SuggestionList<'a> {
    /// Create a new suggestion list widget
    #[must_use]
    pub const fn new(rows: &'a [SuggestionRow<'a>], total: usize, theme: &'a Theme) -> Self {
        Self {
            rows,
            cursor: 0,
            scroll_offset: 0,
            total,
            theme,
        }
    }

    /// Set the highlighted row and scroll position
    #[must_use]
    pub const fn cursor(mut self, cursor: usize, scroll_offset: usize) -> Self {
        self.cursor = cursor;
        self.scroll_offset = scroll_offset;
        self
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(format!(" Suggestions ({}/{}) ", self.rows.len(), self.total))
    }

    /// Area inside the border where rows are drawn
    #[must_use]
    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }

    /// Screen area of each visible row, with its row number and slug
    #[must_use]
    pub fn row_areas(&self, area: Rect) -> Vec<(usize, &'a str, Rect)> {
        let inner = self.inner(area);
        let visible = inner.height as usize;

        self.rows
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible)
            .enumerate()
            .map(|(line, (row, suggestion))| {
                #[allow(clippy::cast_possible_truncation)]
                let y = inner.y + line as u16;
                (row, suggestion.person.slug.as_str(), Rect::new(inner.x, y, inner.width, 1))
            })
            .collect()
    }

    fn render_row(&self, row: &SuggestionRow<'a>, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let text_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let line = Line::from(vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(row.person.name.as_str(), text_style),
        ]);

        ListItem::new(line)
    }
}

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner.height as usize)
            .map(|(idx, row)| self.render_row(row, idx == self.cursor))
            .collect();

        List::new(items).render(inner, buf);
    }
}
