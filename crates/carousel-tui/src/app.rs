use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use carousel_core::{
    AppConfig, CarouselController, CarouselEvent, DragOutcome, PanelColor, PanelTransform,
    Transition,
};
use tracing::debug;

use crate::animation::TransitionAnimator;
use crate::gesture::DragTracker;
use crate::input::Action;
use crate::keymap::Keymap;
use crate::screen::ScreenLayout;
use crate::theme::Theme;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Help overlay
    Help,
}

/// A panel ready to draw: its color and where it sits this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelView {
    pub index: usize,
    pub color: PanelColor,
    pub transform: PanelTransform,
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub controller: CarouselController,
    pub animator: TransitionAnimator,
    pub drag: DragTracker,
    pub keymap: Keymap,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Screen areas from the last draw
    pub layout: ScreenLayout,
    /// Most recent controller notification, shown in the status bar
    last_event: Rc<Cell<Option<CarouselEvent>>>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme) -> Self {
        let mut controller = CarouselController::new(PanelColor::ALL.len());

        let last_event = Rc::new(Cell::new(None));
        let sink = Rc::clone(&last_event);
        controller.subscribe(move |event| {
            // Live drag movement would drown out the interesting events
            if !matches!(event, CarouselEvent::DragMoved { .. }) {
                sink.set(Some(*event));
            }
        });

        let animator =
            TransitionAnimator::new(config.ui.animation.clone(), controller.current_index());
        let keymap = Keymap::from_config(&config.keymap);

        Self {
            config,
            controller,
            animator,
            drag: DragTracker::new(1.0),
            keymap,
            theme,
            mode: Mode::Normal,
            should_quit: false,
            layout: ScreenLayout::default(),
            last_event,
        }
    }

    /// Apply an input action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Previous => {
                // A tap while a drag is still open means its release was lost
                self.cancel_drag();
                let transition = self.controller.go_previous();
                self.start_transition(transition);
            }
            Action::Next => {
                self.cancel_drag();
                let transition = self.controller.go_next();
                self.start_transition(transition);
            }
            Action::ToggleHelp => {
                self.cancel_drag();
                self.mode = match self.mode {
                    Mode::Normal => Mode::Help,
                    Mode::Help => Mode::Normal,
                };
            }
            Action::Cancel => {
                if self.mode == Mode::Help {
                    self.mode = Mode::Normal;
                } else {
                    self.cancel_drag();
                }
            }
            Action::BeginDrag(column) => {
                // A new press without a release means the old drag was lost
                self.cancel_drag();
                // Measure the drag against a settled panel
                self.animator.finish();
                self.drag.begin(column);
                debug!(column, "drag started");
            }
            Action::DragTo(column) => {
                if let Some(translation) = self.drag.translation(column) {
                    self.controller.on_drag_update(translation);
                }
            }
            Action::EndDrag(column) => {
                if let Some(translation) = self.drag.end(column) {
                    let outcome = self.controller.on_drag_end(translation);
                    self.start_transition(outcome.transition());
                }
            }
            Action::None => {}
        }
    }

    /// Abandon the drag in progress, if any
    pub fn cancel_drag(&mut self) {
        if self.drag.cancel() {
            self.controller.on_drag_cancel();
        }
    }

    /// Record the layout of the current frame
    pub fn set_layout(&mut self, layout: ScreenLayout) {
        self.drag.set_units_per_column(layout.units_per_column);
        self.layout = layout;
    }

    /// Terminal was resized; a drag measured against the old layout is meaningless
    pub fn on_resize(&mut self) {
        self.cancel_drag();
    }

    /// Advance the transition animation
    pub fn tick(&mut self) {
        self.animator.update();
    }

    /// Whether the next frame should come at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.animator.is_animating() || self.drag.is_dragging()
    }

    /// Panels in draw order (the most prominent one last) with their transforms
    pub fn panel_views(&self) -> Vec<PanelView> {
        let panel_width = self.config.ui.panel_width;
        let transforms: Vec<PanelTransform> = if self.animator.is_animating() {
            let position = self.animator.position();
            let drag_offset = self.controller.drag_offset();
            (0..self.controller.item_count())
                .map(|index| PanelTransform::at_position(index, position, drag_offset, panel_width))
                .collect()
        } else {
            PanelTransform::all(&self.controller.snapshot(), panel_width)
        };

        let mut views: Vec<PanelView> = PanelColor::ALL
            .iter()
            .zip(transforms)
            .enumerate()
            .map(|(index, (&color, transform))| PanelView {
                index,
                color,
                transform,
            })
            .collect();

        views.sort_by(|a, b| a.transform.scale.total_cmp(&b.transform.scale));
        views
    }

    /// The panel currently selected by the controller
    pub fn current_panel(&self) -> PanelColor {
        PanelColor::at(self.controller.current_index()).unwrap_or(PanelColor::Red)
    }

    pub fn last_event(&self) -> Option<CarouselEvent> {
        self.last_event.get()
    }

    fn start_transition(&mut self, transition: Option<Transition>) {
        if let Some(transition) = transition {
            self.animator.retarget(transition);
        }
    }
}

/// Short description of a controller event for the status bar
pub fn describe_event(event: &CarouselEvent) -> String {
    match event {
        CarouselEvent::IndexChanged(t) => {
            let arrow = if t.to < t.from { "←" } else { "→" };
            let name = PanelColor::at(t.to).map(|c| c.name()).unwrap_or("?");
            format!("{} {}", arrow, name)
        }
        CarouselEvent::DragMoved { offset } => format!("dragging {:+.0}", offset),
        CarouselEvent::DragEnded { outcome, .. } => match outcome {
            DragOutcome::Stay => "swipe too short".to_string(),
            DragOutcome::Previous(None) => "already at first panel".to_string(),
            DragOutcome::Next(None) => "already at last panel".to_string(),
            DragOutcome::Previous(Some(t)) | DragOutcome::Next(Some(t)) => {
                let name = PanelColor::at(t.to).map(|c| c.name()).unwrap_or("?");
                format!("swiped to {}", name)
            }
        },
        CarouselEvent::DragCancelled => "drag cancelled".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::config::AnimationConfig;
    use ratatui::layout::Rect;

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

    #[test]
    fn test_buttons_move_and_clamp() {
        let mut app = app();
        app.apply(Action::Previous);
        assert_eq!(app.controller.current_index(), 0);

        for _ in 0..7 {
            app.apply(Action::Next);
        }
        assert_eq!(app.controller.current_index(), 4);
        assert_eq!(app.animator.position(), 4.0);
        assert_eq!(app.current_panel(), PanelColor::Purple);
    }

    #[test]
    fn test_drag_past_threshold_goes_next() {
        let mut app = app();
        let columns = (60.0 / app.drag.units_per_column()).ceil() as u16;

        app.apply(Action::BeginDrag(50));
        app.apply(Action::DragTo(50 - columns));
        assert!(app.controller.drag_offset() < -50.0);
        assert!(app.needs_fast_update());

        app.apply(Action::EndDrag(50 - columns));
        assert_eq!(app.controller.current_index(), 1);
        assert_eq!(app.controller.drag_offset(), 0.0);
        assert!(!app.drag.is_dragging());
        assert_eq!(app.last_event().map(|e| describe_event(&e)), Some("swiped to orange".to_string()));
    }

    #[test]
    fn test_short_drag_stays() {
        let mut app = app();
        app.apply(Action::Next);
        app.apply(Action::BeginDrag(50));
        app.apply(Action::EndDrag(51));
        assert_eq!(app.controller.current_index(), 1);
        assert_eq!(app.last_event().map(|e| describe_event(&e)), Some("swipe too short".to_string()));
    }

    #[test]
    fn test_escape_cancels_drag() {
        let mut app = app();
        app.apply(Action::BeginDrag(50));
        app.apply(Action::DragTo(90));
        app.apply(Action::Cancel);
        assert_eq!(app.controller.drag_offset(), 0.0);
        assert!(!app.drag.is_dragging());
        // Release after cancel is ignored
        app.apply(Action::EndDrag(90));
        assert_eq!(app.controller.current_index(), 0);
    }

    #[test]
    fn test_resize_cancels_drag() {
        let mut app = app();
        app.apply(Action::BeginDrag(50));
        app.apply(Action::DragTo(10));
        app.on_resize();
        assert_eq!(app.controller.drag_offset(), 0.0);
        assert_eq!(app.last_event(), Some(CarouselEvent::DragCancelled));
    }

    #[test]
    fn test_help_toggles() {
        let mut app = app();
        app.apply(Action::ToggleHelp);
        assert_eq!(app.mode, Mode::Help);
        app.apply(Action::Cancel);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_tap_during_lost_drag_is_not_undone() {
        let mut app = app();
        // Stage press whose release never arrives
        app.apply(Action::BeginDrag(80));
        app.apply(Action::Next);
        assert_eq!(app.controller.current_index(), 1);
        assert!(!app.drag.is_dragging());

        // The tap's own release must not become a swipe
        app.apply(Action::EndDrag(97));
        assert_eq!(app.controller.current_index(), 1);
        assert_eq!(app.controller.drag_offset(), 0.0);
    }

    #[test]
    fn test_drag_settles_running_transition() {
        let mut config = AppConfig::default();
        config.ui.animation = AnimationConfig {
            enabled: true,
            duration_ms: 10_000,
            ..Default::default()
        };
        let mut app = App::new(Arc::new(config), Theme::default());
        app.set_layout(ScreenLayout::new(Rect::new(0, 0, 100, 30), 300.0, 500.0));

        app.apply(Action::Next);
        assert!(app.animator.is_animating());
        app.apply(Action::BeginDrag(50));
        assert!(!app.animator.is_animating());
        assert_eq!(app.animator.position(), 1.0);
    }

    #[test]
    fn test_current_panel_drawn_last() {
        let mut app = app();
        app.apply(Action::Next);
        app.apply(Action::Next);
        let views = app.panel_views();
        assert_eq!(views.len(), 5);
        let top = views.last().unwrap();
        assert_eq!(top.index, 2);
        assert_eq!(top.transform.scale, 1.2);
        assert_eq!(top.transform.offset, 0.0);
    }
}
