use carousel_core::carousel::layout::ACTIVE_SCALE;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of each toolbar arrow button in columns
const BUTTON_WIDTH: u16 = 5;
/// Share of the stage the focused panel may take up
const MAX_STAGE_WIDTH_SHARE: f64 = 0.6;
const MAX_STAGE_HEIGHT_SHARE: f64 = 0.9;
/// Terminal cells are about twice as tall as they are wide
const CELL_ASPECT: f64 = 2.0;

/// Screen areas from the last draw, used for rendering and mouse hit-testing
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub stage: Rect,
    pub toolbar: Rect,
    pub status: Rect,
    pub previous_button: Rect,
    pub next_button: Rect,
    /// Carousel units covered by one terminal column
    pub units_per_column: f64,
}

impl ScreenLayout {
    pub fn new(area: Rect, panel_width: f64, panel_height: f64) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Navigation title
                Constraint::Min(3),    // Stage
                Constraint::Length(1), // Toolbar
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let (title, stage, toolbar, status) = (rows[0], rows[1], rows[2], rows[3]);

        let button_width = BUTTON_WIDTH.min(toolbar.width / 2);
        let previous_button = Rect::new(toolbar.x, toolbar.y, button_width, toolbar.height);
        let next_button = Rect::new(
            toolbar.x + toolbar.width - button_width,
            toolbar.y,
            button_width,
            toolbar.height,
        );

        Self {
            title,
            stage,
            toolbar,
            status,
            previous_button,
            next_button,
            units_per_column: units_per_column(stage, panel_width, panel_height),
        }
    }

    /// Carousel units covered by one terminal row
    pub fn units_per_row(&self) -> f64 {
        self.units_per_column * CELL_ASPECT
    }
}

/// Scale so the focused (enlarged) panel fits inside the stage
fn units_per_column(stage: Rect, panel_width: f64, panel_height: f64) -> f64 {
    let columns = stage.width.max(1) as f64;
    let rows = stage.height.max(1) as f64;

    let by_width = ACTIVE_SCALE * panel_width / (MAX_STAGE_WIDTH_SHARE * columns);
    let by_height = ACTIVE_SCALE * panel_height / (CELL_ASPECT * MAX_STAGE_HEIGHT_SHARE * rows);
    by_width.max(by_height).max(f64::EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_stack_vertically() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 100, 30), 300.0, 500.0);
        assert_eq!(layout.title, Rect::new(0, 0, 100, 2));
        assert_eq!(layout.stage, Rect::new(0, 2, 100, 26));
        assert_eq!(layout.toolbar, Rect::new(0, 28, 100, 1));
        assert_eq!(layout.status, Rect::new(0, 29, 100, 1));
    }

    #[test]
    fn test_buttons_sit_at_toolbar_edges() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 100, 30), 300.0, 500.0);
        assert_eq!(layout.previous_button, Rect::new(0, 28, 5, 1));
        assert_eq!(layout.next_button, Rect::new(95, 28, 5, 1));
    }

    #[test]
    fn test_focused_panel_fits_stage() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 100, 30), 300.0, 500.0);
        let stage = layout.stage;
        let width = ACTIVE_SCALE * 300.0 / layout.units_per_column;
        let height = ACTIVE_SCALE * 500.0 / layout.units_per_row();
        assert!(width <= stage.width as f64);
        assert!(height <= stage.height as f64);
    }

    #[test]
    fn test_empty_area_does_not_divide_by_zero() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 0, 0), 300.0, 500.0);
        assert!(layout.units_per_column.is_finite());
        assert!(layout.units_per_column > 0.0);
    }
}
