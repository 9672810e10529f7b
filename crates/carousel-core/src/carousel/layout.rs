//! Visual attributes of each panel, derived from controller state.
//!
//! Nothing here is stored: the display layer recomputes transforms on
//! every frame from a [`CarouselSnapshot`] (or from the animated position
//! while a transition runs).

use super::controller::CarouselSnapshot;

pub const ACTIVE_OPACITY: f64 = 1.0;
pub const INACTIVE_OPACITY: f64 = 0.5;
pub const ACTIVE_SCALE: f64 = 1.2;
pub const INACTIVE_SCALE: f64 = 0.8;

/// Opacity, scale and horizontal offset (in carousel units) of one panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelTransform {
    pub opacity: f64,
    pub scale: f64,
    pub offset: f64,
}

impl PanelTransform {
    /// Transform of panel `index` for the given state
    pub fn for_panel(index: usize, snapshot: &CarouselSnapshot, panel_width: f64) -> Self {
        Self::at_position(
            index,
            snapshot.current_index as f64,
            snapshot.drag_offset,
            panel_width,
        )
    }

    /// Transform of panel `index` when the carousel sits at a possibly
    /// fractional `position`.
    ///
    /// Integral positions give the plain active/inactive values; between
    /// two panels opacity and scale blend by distance from the position.
    pub fn at_position(index: usize, position: f64, drag_offset: f64, panel_width: f64) -> Self {
        let distance = index as f64 - position;
        let emphasis = 1.0 - distance.abs().min(1.0);

        Self {
            opacity: blend(INACTIVE_OPACITY, ACTIVE_OPACITY, emphasis),
            scale: blend(INACTIVE_SCALE, ACTIVE_SCALE, emphasis),
            offset: distance * panel_width + drag_offset,
        }
    }

    /// Transforms for every panel, in index order
    pub fn all(snapshot: &CarouselSnapshot, panel_width: f64) -> Vec<Self> {
        (0..snapshot.item_count)
            .map(|index| Self::for_panel(index, snapshot, panel_width))
            .collect()
    }
}

#[inline]
fn blend(inactive: f64, active: f64, emphasis: f64) -> f64 {
    active * emphasis + inactive * (1.0 - emphasis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(current_index: usize, drag_offset: f64) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index,
            item_count: 5,
            drag_offset,
        }
    }

    #[test]
    fn test_current_panel_is_emphasized() {
        let state = snapshot(2, 0.0);
        let current = PanelTransform::for_panel(2, &state, 300.0);
        assert_eq!(current.opacity, 1.0);
        assert_eq!(current.scale, 1.2);
        assert_eq!(current.offset, 0.0);

        let other = PanelTransform::for_panel(0, &state, 300.0);
        assert_eq!(other.opacity, 0.5);
        assert_eq!(other.scale, 0.8);
        assert_eq!(other.offset, -600.0);
    }

    #[test]
    fn test_drag_offset_shifts_every_panel() {
        let transforms = PanelTransform::all(&snapshot(1, 25.0), 300.0);
        let offsets: Vec<f64> = transforms.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![-275.0, 25.0, 325.0, 625.0, 925.0]);
    }

    #[test]
    fn test_halfway_position_blends() {
        let t = PanelTransform::at_position(1, 0.5, 0.0, 300.0);
        assert!((t.opacity - 0.75).abs() < 1e-9);
        assert!((t.scale - 1.0).abs() < 1e-9);
        assert!((t.offset - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_far_panels_stay_inactive_between_positions() {
        let t = PanelTransform::at_position(4, 1.5, 0.0, 300.0);
        assert_eq!(t.opacity, 0.5);
        assert_eq!(t.scale, 0.8);
    }
}
