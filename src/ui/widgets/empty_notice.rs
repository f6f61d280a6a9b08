//! Notice shown when no suggestion matches

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Text of the empty-result notice
pub const NO_MATCHES: &str = "No matching suggestions";

/// Empty-result notice
pub struct EmptyNotice<'a> {
    theme: &'a Theme,
}

impl<'a> EmptyNotice<'a> {
    /// Create a new notice widget
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for EmptyNotice<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.error_style());

        Paragraph::new(Line::styled(NO_MATCHES, self.theme.error_style()))
            .block(block)
            .render(area, buf);
    }
}
