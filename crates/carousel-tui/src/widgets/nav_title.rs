use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::App;

/// Large navigation title above the stage
pub struct NavTitleWidget;

impl NavTitleWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let title = truncate_to_width(&app.config.ui.title, area.width.saturating_sub(2) as usize);

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                title,
                Style::default()
                    .fg(app.theme.fg0)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let paragraph = Paragraph::new(line).style(Style::default().bg(app.theme.bg0));
        frame.render_widget(paragraph, area);
    }
}

/// Truncate a string to a display width, adding an ellipsis when cut
pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate_to_width("Image Carousel", 20), "Image Carousel");
    }

    #[test]
    fn test_truncate_cuts_with_ellipsis() {
        assert_eq!(truncate_to_width("Image Carousel", 6), "Image…");
        assert_eq!(truncate_to_width("Image Carousel", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK character is two columns wide
        assert_eq!(truncate_to_width("图片轮播", 5), "图片…");
    }
}
