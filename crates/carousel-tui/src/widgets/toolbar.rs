use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Bottom toolbar with the previous/next arrow buttons
pub struct ToolbarWidget;

impl ToolbarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let base = Style::default().bg(app.theme.bg1);
        frame.render_widget(Paragraph::new("").style(base), area);

        let arrow_style = |enabled: bool| {
            if enabled {
                base.fg(app.theme.accent).add_modifier(Modifier::BOLD)
            } else {
                base.fg(app.theme.fg1).add_modifier(Modifier::DIM)
            }
        };

        let previous = Paragraph::new("←")
            .alignment(Alignment::Center)
            .style(arrow_style(!app.controller.is_first()));
        let next = Paragraph::new("→")
            .alignment(Alignment::Center)
            .style(arrow_style(!app.controller.is_last()));

        frame.render_widget(previous, app.layout.previous_button);
        frame.render_widget(next, app.layout.next_button);
    }
}
