use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Mode};
use crate::keymap::KeyBinding;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Previous,
    Next,
    ToggleHelp,
    /// Esc: close help or abandon a drag
    Cancel,
    /// Left button pressed on the stage at this column
    BeginDrag(u16),
    /// Pointer dragged to this column
    DragTo(u16),
    /// Left button released at this column
    EndDrag(u16),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    let action = app
        .keymap
        .get(&KeyBinding::from_event(&key))
        .copied()
        .unwrap_or(Action::None);

    match app.mode {
        // Any key closes help, but quitting still works
        Mode::Help => match action {
            Action::Quit => Action::Quit,
            _ => Action::ToggleHelp,
        },
        Mode::Normal => action,
    }
}

/// Handle a mouse event and return the corresponding action
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    if app.mode == Mode::Help {
        return match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Action::ToggleHelp,
            _ => Action::None,
        };
    }

    let layout = &app.layout;
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if contains(layout.previous_button, mouse.column, mouse.row) {
                Action::Previous
            } else if contains(layout.next_button, mouse.column, mouse.row) {
                Action::Next
            } else if contains(layout.stage, mouse.column, mouse.row) {
                Action::BeginDrag(mouse.column)
            } else {
                Action::None
            }
        }
        MouseEventKind::Drag(MouseButton::Left) if app.drag.is_dragging() => {
            Action::DragTo(mouse.column)
        }
        MouseEventKind::Up(MouseButton::Left) if app.drag.is_dragging() => {
            Action::EndDrag(mouse.column)
        }
        _ => Action::None,
    }
}

fn contains(area: ratatui::layout::Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use carousel_core::config::AnimationConfig;
    use carousel_core::AppConfig;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::layout::Rect;

    use crate::screen::ScreenLayout;
    use crate::theme::Theme;

    // 100x30 terminal: stage rows 2..28, previous arrow at (0..5, 28),
    // next arrow at (95..100, 28)
    fn app() -> App {
        let mut config = AppConfig::default();
        config.ui.animation = AnimationConfig {
            enabled: false,
            ..Default::default()
        };
        let mut app = App::new(Arc::new(config), Theme::default());
        app.set_layout(ScreenLayout::new(Rect::new(0, 0, 100, 30), 300.0, 500.0));
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn press(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_taps() {
        let app = app();
        assert_eq!(handle_mouse_event(press(2, 28), &app), Action::Previous);
        assert_eq!(handle_mouse_event(press(97, 28), &app), Action::Next);
    }

    #[test]
    fn test_stage_press_begins_drag() {
        let app = app();
        assert_eq!(handle_mouse_event(press(40, 10), &app), Action::BeginDrag(40));
        // Toolbar between the arrows, title and status bar do nothing
        assert_eq!(handle_mouse_event(press(50, 28), &app), Action::None);
        assert_eq!(handle_mouse_event(press(50, 0), &app), Action::None);
        assert_eq!(handle_mouse_event(press(50, 29), &app), Action::None);
        // Other buttons are ignored
        let right = mouse(MouseEventKind::Down(MouseButton::Right), 40, 10);
        assert_eq!(handle_mouse_event(right, &app), Action::None);
    }

    #[test]
    fn test_drag_and_release_need_active_drag() {
        let mut app = app();
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 30, 10);
        let up = mouse(MouseEventKind::Up(MouseButton::Left), 30, 10);
        assert_eq!(handle_mouse_event(drag, &app), Action::None);
        assert_eq!(handle_mouse_event(up, &app), Action::None);

        app.apply(handle_mouse_event(press(40, 10), &app));
        assert_eq!(handle_mouse_event(drag, &app), Action::DragTo(30));
        // Releasing outside the stage still ends the drag
        let up_outside = mouse(MouseEventKind::Up(MouseButton::Left), 30, 0);
        assert_eq!(handle_mouse_event(up_outside, &app), Action::EndDrag(30));
    }

    #[test]
    fn test_tap_after_lost_release() {
        let mut app = app();
        app.apply(handle_mouse_event(press(80, 10), &app));
        assert!(app.drag.is_dragging());

        let tap = handle_mouse_event(press(97, 28), &app);
        assert_eq!(tap, Action::Next);
        app.apply(tap);
        assert_eq!(app.controller.current_index(), 1);

        let release = mouse(MouseEventKind::Up(MouseButton::Left), 97, 28);
        app.apply(handle_mouse_event(release, &app));
        assert_eq!(app.controller.current_index(), 1);
    }

    #[test]
    fn test_keys_in_normal_mode() {
        let app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('h')), &app), Action::Previous);
        assert_eq!(handle_key_event(key(KeyCode::Right), &app), Action::Next);
        assert_eq!(handle_key_event(key(KeyCode::Char('?')), &app), Action::ToggleHelp);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::Cancel);
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &app), Action::None);
    }

    #[test]
    fn test_help_mode_closes_on_any_input() {
        let mut app = app();
        app.apply(Action::ToggleHelp);
        assert_eq!(app.mode, Mode::Help);

        assert_eq!(handle_key_event(key(KeyCode::Char('l')), &app), Action::ToggleHelp);
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &app), Action::ToggleHelp);
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app), Action::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &app), Action::Quit);

        // Taps do not reach the arrows behind the popup
        assert_eq!(handle_mouse_event(press(97, 28), &app), Action::ToggleHelp);
        let moved = mouse(MouseEventKind::Moved, 40, 10);
        assert_eq!(handle_mouse_event(moved, &app), Action::None);
    }
}
