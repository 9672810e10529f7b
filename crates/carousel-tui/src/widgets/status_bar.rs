use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{describe_event, App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let mode_str = match app.mode {
            Mode::Normal if app.drag.is_dragging() => "DRAG",
            Mode::Normal => "NORMAL",
            Mode::Help => "HELP",
        };

        let mut status_text = format!(
            " {} | {}/{} {}",
            mode_str,
            app.controller.current_index() + 1,
            app.controller.item_count(),
            app.current_panel(),
        );
        if let Some(event) = app.last_event() {
            status_text.push_str(" | ");
            status_text.push_str(&describe_event(&event));
        }

        let keys = &app.config.keymap;
        let help_hint = format!(
            " {}/{}:move drag:swipe {}:help {}:quit ",
            keys.previous, keys.next, keys.help, keys.quit
        );
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let style = Style::default().bg(app.theme.bg1);
        let line = Line::from(vec![
            Span::styled(status_text, style.fg(app.theme.fg0)),
            Span::styled(" ".repeat(padding_len), style),
            Span::styled(help_hint, style.fg(app.theme.fg1)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
