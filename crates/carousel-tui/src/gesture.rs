//! Mouse drag tracking
//!
//! Converts terminal column positions into horizontal drag translations in
//! carousel units.

/// Tracks one left-button drag across the stage
#[derive(Debug, Clone)]
pub struct DragTracker {
    start_column: Option<u16>,
    units_per_column: f64,
}

impl DragTracker {
    pub fn new(units_per_column: f64) -> Self {
        Self {
            start_column: None,
            units_per_column,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.start_column.is_some()
    }

    /// Carousel units covered by one terminal column
    pub fn units_per_column(&self) -> f64 {
        self.units_per_column
    }

    pub fn set_units_per_column(&mut self, units: f64) {
        self.units_per_column = units;
    }

    /// Start a drag at `column`, replacing any drag in progress
    pub fn begin(&mut self, column: u16) {
        self.start_column = Some(column);
    }

    /// Translation of the drag in progress if the pointer is at `column`
    pub fn translation(&self, column: u16) -> Option<f64> {
        self.start_column
            .map(|start| (column as f64 - start as f64) * self.units_per_column)
    }

    /// Finish the drag at `column`, returning its final translation
    pub fn end(&mut self, column: u16) -> Option<f64> {
        let translation = self.translation(column);
        self.start_column = None;
        translation
    }

    /// Forget the drag in progress. Returns true if there was one.
    pub fn cancel(&mut self) -> bool {
        self.start_column.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_in_units() {
        let mut drag = DragTracker::new(10.0);
        assert_eq!(drag.translation(40), None);

        drag.begin(40);
        assert!(drag.is_dragging());
        assert_eq!(drag.translation(46), Some(60.0));
        assert_eq!(drag.translation(37), Some(-30.0));
    }

    #[test]
    fn test_end_clears_drag() {
        let mut drag = DragTracker::new(12.5);
        drag.begin(10);
        assert_eq!(drag.end(6), Some(-50.0));
        assert!(!drag.is_dragging());
        assert_eq!(drag.end(6), None);
    }

    #[test]
    fn test_cancel() {
        let mut drag = DragTracker::new(10.0);
        assert!(!drag.cancel());
        drag.begin(3);
        assert!(drag.cancel());
        assert!(!drag.is_dragging());
    }
}
