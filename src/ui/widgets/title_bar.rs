//! Title bar widget showing the selected person

use crate::ui::theme::Theme;
use crate::widget::NO_SELECTION;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Header with the selected person's label, or the placeholder
pub struct TitleBar<'a> {
    header: &'a str,
    theme: &'a Theme,
}

impl<'a> TitleBar<'a> {
    /// Create a new title bar widget
    #[must_use]
    pub const fn new(header: &'a str, theme: &'a Theme) -> Self {
        Self { header, theme }
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Person ");

        let style = if self.header == NO_SELECTION {
            self.theme.dimmed_style()
        } else {
            self.theme.title_style()
        };

        Paragraph::new(Line::styled(self.header, style))
            .block(block)
            .render(area, buf);
    }
}
