use ratatui::{buffer::Buffer, layout::Rect, style::Color, Frame};

use crate::app::{App, PanelView};
use crate::theme::{mix, Theme};

const WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);
const LABEL: Color = Color::Rgb(0x1d, 0x20, 0x21);
/// How much lighter the top edge of a panel is than its bottom
const GRADIENT_STRENGTH: f64 = 0.2;
const BORDER_LIGHTEN: f64 = 0.35;

/// Draws the overlapping panels of the carousel
pub struct StageWidget;

impl StageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let buf = frame.buffer_mut();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_bg(app.theme.bg0);
                }
            }
        }

        if area.width == 0 || area.height == 0 {
            return;
        }

        let geometry = StageGeometry {
            area,
            units_per_column: app.layout.units_per_column,
            units_per_row: app.layout.units_per_row(),
            panel_width: app.config.ui.panel_width,
            panel_height: app.config.ui.panel_height,
        };

        for view in app.panel_views() {
            draw_panel(buf, &geometry, &view, &app.theme);
        }
    }
}

struct StageGeometry {
    area: Rect,
    units_per_column: f64,
    units_per_row: f64,
    panel_width: f64,
    panel_height: f64,
}

/// Cell bounds of a panel, unclipped (may extend past the stage)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PanelBounds {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl StageGeometry {
    fn bounds(&self, view: &PanelView) -> PanelBounds {
        let t = &view.transform;
        let width = (t.scale * self.panel_width / self.units_per_column).round().max(2.0);
        let height = (t.scale * self.panel_height / self.units_per_row).round().max(2.0);

        let center_x = self.area.x as f64 + self.area.width as f64 / 2.0
            + t.offset / self.units_per_column;
        let center_y = self.area.y as f64 + self.area.height as f64 / 2.0;

        let left = (center_x - width / 2.0).round() as i32;
        let top = (center_y - height / 2.0).round() as i32;
        PanelBounds {
            left,
            top,
            right: left + width as i32 - 1,
            bottom: top + height as i32 - 1,
        }
    }
}

fn draw_panel(buf: &mut Buffer, geometry: &StageGeometry, view: &PanelView, theme: &Theme) {
    let area = geometry.area;
    let b = geometry.bounds(view);

    let x_start = b.left.max(area.left() as i32);
    let x_end = b.right.min(area.right() as i32 - 1);
    let y_start = b.top.max(area.top() as i32);
    let y_end = b.bottom.min(area.bottom() as i32 - 1);
    if x_start > x_end || y_start > y_end {
        return;
    }

    let base = theme.panel_color(view.color);
    let fade = 1.0 - view.transform.opacity;
    let border = mix(mix(base, WHITE, BORDER_LIGHTEN), theme.bg0, fade);
    let span = (b.bottom - b.top).max(1) as f64;

    for y in y_start..=y_end {
        let row_frac = (y - b.top) as f64 / span;
        let fill = mix(
            mix(base, WHITE, GRADIENT_STRENGTH * (1.0 - row_frac)),
            theme.bg0,
            fade,
        );

        for x in x_start..=x_end {
            if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
                cell.set_symbol(edge_symbol(&b, x, y))
                    .set_fg(border)
                    .set_bg(fill);
            }
        }
    }

    draw_label(buf, &b, (x_start, x_end), (y_start, y_end), view, theme, fade);
}

/// Rounded-rectangle border glyph for a cell of the panel
fn edge_symbol(b: &PanelBounds, x: i32, y: i32) -> &'static str {
    match (x == b.left, x == b.right, y == b.top, y == b.bottom) {
        (true, _, true, _) => "╭",
        (_, true, true, _) => "╮",
        (true, _, _, true) => "╰",
        (_, true, _, true) => "╯",
        (_, _, true, _) | (_, _, _, true) => "─",
        (true, _, _, _) | (_, true, _, _) => "│",
        _ => " ",
    }
}

fn draw_label(
    buf: &mut Buffer,
    b: &PanelBounds,
    (x_start, x_end): (i32, i32),
    (y_start, y_end): (i32, i32),
    view: &PanelView,
    theme: &Theme,
    fade: f64,
) {
    let name = view.color.name();
    let inner_width = b.right - b.left - 1;
    if inner_width < name.len() as i32 {
        return;
    }

    let y = b.top + (b.bottom - b.top) / 2;
    if y < y_start || y > y_end {
        return;
    }

    let fg = mix(LABEL, theme.bg0, fade);
    let first = b.left + 1 + (inner_width - name.len() as i32) / 2;
    for (i, ch) in name.chars().enumerate() {
        let x = first + i as i32;
        if x < x_start || x > x_end {
            continue;
        }
        if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
            cell.set_char(ch).set_fg(fg);
        }
    }
}
