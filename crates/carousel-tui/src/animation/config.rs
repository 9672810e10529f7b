//! Configuration helpers for transitions
//!
//! Re-exports configuration from carousel-core and adds Duration conversions.

use std::time::Duration;

pub use carousel_core::AnimationConfig;

/// Extension trait for AnimationConfig with utility methods
pub trait AnimationConfigExt {
    /// Transition duration as Duration
    fn duration(&self) -> Duration;

    /// Redraw interval while a transition is running
    fn frame_interval(&self) -> Duration;

    /// Whether index changes are actually animated
    fn is_animated(&self) -> bool;
}

impl AnimationConfigExt for AnimationConfig {
    #[inline]
    fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[inline]
    fn frame_interval(&self) -> Duration {
        if self.fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            // Never a zero poll timeout
            Duration::from_millis((1000 / self.fps as u64).max(1))
        }
    }

    #[inline]
    fn is_animated(&self) -> bool {
        self.enabled && self.duration_ms > 0
    }
}
