//! Panel transition animator
//!
//! Combines easing and timing to move the visual carousel position from
//! one panel index to another.

use std::time::{Duration, Instant};

use carousel_core::Transition;

use super::config::{AnimationConfig, AnimationConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

/// Active transition state
#[derive(Debug, Clone)]
struct ActiveTransition {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Transition animator
///
/// Tracks the visual position of the carousel as a fractional panel index.
/// Call `retarget()` whenever the controller reports a [`Transition`], then
/// `update()` each frame to get the interpolated position.
#[derive(Debug, Clone)]
pub struct TransitionAnimator {
    animation: Option<ActiveTransition>,
    config: AnimationConfig,
    position: f64,
}

impl TransitionAnimator {
    pub fn new(config: AnimationConfig, index: usize) -> Self {
        Self {
            animation: None,
            config,
            position: index as f64,
        }
    }

    /// Check if a transition is currently running
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Current visual position (fractional while animating)
    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Start animating toward the destination of `transition`.
    ///
    /// An in-flight transition is superseded: the new one starts from the
    /// currently displayed position, not from `transition.from`.
    pub fn retarget(&mut self, transition: Transition) {
        self.retarget_at(transition, Instant::now());
    }

    /// Advance the animation and return the current position
    pub fn update(&mut self) -> f64 {
        self.update_at(Instant::now())
    }

    /// Stop at the destination immediately
    pub fn finish(&mut self) {
        if let Some(anim) = self.animation.take() {
            self.position = anim.to;
        }
    }

    fn retarget_at(&mut self, transition: Transition, now: Instant) {
        let to = transition.to as f64;

        if !self.config.is_animated() {
            self.position = to;
            self.animation = None;
            return;
        }

        if self.animation.is_some() {
            self.update_at(now);
        }

        if self.position == to {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveTransition {
            start: now,
            from: self.position,
            to,
            duration: self.config.duration(),
            easing: self.config.easing,
        });
    }

    fn update_at(&mut self, now: Instant) -> f64 {
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration, now) {
                self.position = anim.to;
                self.animation = None;
            } else {
                let t = anim.easing.apply(progress(anim.start, anim.duration, now));
                self.position = lerp(anim.from, anim.to, t);
            }
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(duration_ms: u64) -> AnimationConfig {
        AnimationConfig {
            enabled: true,
            duration_ms,
            easing: EasingType::Linear,
            fps: 60,
        }
    }

    #[test]
    fn test_jump_when_disabled() {
        let config = AnimationConfig {
            enabled: false,
            ..Default::default()
        };
        let mut animator = TransitionAnimator::new(config, 0);
        animator.retarget(Transition { from: 0, to: 3 });
        assert_eq!(animator.position(), 3.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_interpolates_then_settles() {
        let mut animator = TransitionAnimator::new(linear(100), 1);
        let start = Instant::now();
        animator.retarget_at(Transition { from: 1, to: 2 }, start);
        assert!(animator.is_animating());

        let mid = animator.update_at(start + Duration::from_millis(50));
        assert!((mid - 1.5).abs() < 1e-9);

        let end = animator.update_at(start + Duration::from_millis(100));
        assert_eq!(end, 2.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_new_request_supersedes_in_flight() {
        let mut animator = TransitionAnimator::new(linear(100), 0);
        let start = Instant::now();
        animator.retarget_at(Transition { from: 0, to: 1 }, start);

        let later = start + Duration::from_millis(50);
        animator.retarget_at(Transition { from: 1, to: 2 }, later);
        // Continues from where the first transition was displayed
        assert!((animator.update_at(later) - 0.5).abs() < 1e-9);
        assert_eq!(animator.update_at(later + Duration::from_millis(100)), 2.0);
    }

    #[test]
    fn test_finish_snaps_to_target() {
        let mut animator = TransitionAnimator::new(linear(10_000), 4);
        animator.retarget(Transition { from: 4, to: 3 });
        animator.finish();
        assert_eq!(animator.position(), 3.0);
        assert!(!animator.is_animating());
    }
}
