//! Panel transition animation
//!
//! - `easing` - pure easing curves
//! - `timing` - progress and interpolation helpers
//! - `config` - Duration conversions for the animation config
//! - `transition` - the animator driven by controller transitions

pub mod config;
pub mod easing;
pub mod timing;

pub mod transition;

pub use config::{AnimationConfig, AnimationConfigExt};
pub use easing::{EasingType, EasingTypeExt};
pub use transition::TransitionAnimator;
