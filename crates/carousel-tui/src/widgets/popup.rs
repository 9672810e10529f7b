use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::input::Action;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the help overlay listing controls
    pub fn render_help(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let keymap = &app.keymap;

        let rows = [
            ("Previous panel", keymap.describe(&Action::Previous)),
            ("Next panel", keymap.describe(&Action::Next)),
            ("Swipe", "drag the stage left or right".to_string()),
            ("Tap", "click ← or → in the toolbar".to_string()),
            ("Cancel drag", keymap.describe(&Action::Cancel)),
            ("Help", keymap.describe(&Action::ToggleHelp)),
            ("Quit", keymap.describe(&Action::Quit)),
        ];

        let key_style = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(theme.fg0);

        let mut lines: Vec<Line> = rows
            .iter()
            .map(|(label, keys)| {
                Line::from(vec![
                    Span::styled(format!("{:<16}", label), text_style),
                    Span::styled(keys.clone(), key_style),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                "press any key to close",
                Style::default().fg(theme.fg1),
            ))
            .alignment(Alignment::Center),
        );

        let area = frame.area();
        let popup_width = 50u16.min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
