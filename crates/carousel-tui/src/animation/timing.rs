//! Time calculation utilities for transitions

use std::time::{Duration, Instant};

/// Animation progress in [0.0, 1.0] at `now`
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Check if an animation started at `start` has run its course
#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 4.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 4.0, 0.5) - 2.0).abs() < 0.001);
        assert!((lerp(3.0, 1.0, 1.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress() {
        let start = Instant::now();
        let duration = Duration::from_millis(200);
        assert_eq!(progress(start, duration, start), 0.0);
        assert!((progress(start, duration, start + Duration::from_millis(100)) - 0.5).abs() < 1e-9);
        assert_eq!(progress(start, duration, start + Duration::from_secs(1)), 1.0);
        assert!(is_complete(start, duration, start + duration));
        assert!(!is_complete(start, duration, start + Duration::from_millis(199)));
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert_eq!(progress(start, Duration::ZERO, start), 1.0);
    }
}
