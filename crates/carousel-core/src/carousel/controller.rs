use std::fmt;

use tracing::debug;

use super::item::PanelColor;

/// Horizontal drag distance (in carousel units) a released gesture must exceed to change panels
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// An index change that the display layer should animate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

/// What a released drag gesture did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Swiped right past the threshold; `None` when already on the first panel
    Previous(Option<Transition>),
    /// Swiped left past the threshold; `None` when already on the last panel
    Next(Option<Transition>),
    /// Released inside the threshold
    Stay,
}

impl DragOutcome {
    /// The index change caused by the gesture, if any
    pub fn transition(&self) -> Option<Transition> {
        match self {
            DragOutcome::Previous(t) | DragOutcome::Next(t) => *t,
            DragOutcome::Stay => None,
        }
    }
}

/// Notification delivered to subscribers after each state change
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    IndexChanged(Transition),
    DragMoved { offset: f64 },
    DragEnded { translation: f64, outcome: DragOutcome },
    DragCancelled,
}

/// Read-only copy of the controller state, taken once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSnapshot {
    pub current_index: usize,
    pub item_count: usize,
    pub drag_offset: f64,
}

/// Handle returned by [`CarouselController::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&CarouselEvent)>;

/// Carousel controller
///
/// Owns the current panel index and the in-progress drag offset. Button
/// presses and drag gestures are translated into clamped index updates;
/// every operation reports what changed so the caller can start a
/// transition, and subscribers are notified synchronously.
pub struct CarouselController {
    current_index: usize,
    item_count: usize,
    drag_offset: f64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for CarouselController {
    fn default() -> Self {
        Self::new(PanelColor::ALL.len())
    }
}

impl fmt::Debug for CarouselController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselController")
            .field("current_index", &self.current_index)
            .field("item_count", &self.item_count)
            .field("drag_offset", &self.drag_offset)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl CarouselController {
    /// Create a controller over `item_count` panels, starting at the first.
    /// A carousel always has at least one panel.
    pub fn new(item_count: usize) -> Self {
        Self {
            current_index: 0,
            item_count: item_count.max(1),
            drag_offset: 0.0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn drag_offset(&self) -> f64 {
        self.drag_offset
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index == self.item_count - 1
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: self.current_index,
            item_count: self.item_count,
            drag_offset: self.drag_offset,
        }
    }

    /// Register a listener for state changes
    pub fn subscribe(&mut self, listener: impl FnMut(&CarouselEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Show the previous panel. No-op on the first panel.
    pub fn go_previous(&mut self) -> Option<Transition> {
        self.move_to(self.current_index.saturating_sub(1))
    }

    /// Show the next panel. No-op on the last panel.
    pub fn go_next(&mut self) -> Option<Transition> {
        self.move_to(self.current_index + 1)
    }

    /// Track an in-progress drag for visual feedback
    pub fn on_drag_update(&mut self, translation: f64) {
        self.drag_offset = translation;
        self.notify(&CarouselEvent::DragMoved { offset: translation });
    }

    /// Finish a drag gesture.
    ///
    /// Dragging right past [`SWIPE_THRESHOLD`] shows the previous panel,
    /// dragging left past it shows the next one. The drag offset is
    /// always cleared.
    pub fn on_drag_end(&mut self, translation: f64) -> DragOutcome {
        self.drag_offset = 0.0;

        let outcome = if translation > SWIPE_THRESHOLD {
            DragOutcome::Previous(self.go_previous())
        } else if translation < -SWIPE_THRESHOLD {
            DragOutcome::Next(self.go_next())
        } else {
            DragOutcome::Stay
        };

        debug!(translation, ?outcome, "drag ended");
        self.notify(&CarouselEvent::DragEnded { translation, outcome });
        outcome
    }

    /// Abandon a drag gesture without changing panels
    pub fn on_drag_cancel(&mut self) {
        self.drag_offset = 0.0;
        debug!("drag cancelled");
        self.notify(&CarouselEvent::DragCancelled);
    }

    fn move_to(&mut self, target: usize) -> Option<Transition> {
        let target = target.min(self.item_count - 1);
        if target == self.current_index {
            return None;
        }

        let transition = Transition {
            from: self.current_index,
            to: target,
        };
        self.current_index = target;
        debug!(from = transition.from, to = transition.to, "carousel index changed");
        self.notify(&CarouselEvent::IndexChanged(transition));
        Some(transition)
    }

    fn notify(&mut self, event: &CarouselEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}
