pub mod carousel;
pub mod config;
pub mod error;

pub use carousel::{
    CarouselController, CarouselEvent, CarouselSnapshot, DragOutcome, PanelColor,
    PanelTransform, SubscriptionId, Transition,
};
pub use config::{AnimationConfig, AppConfig, EasingType};
pub use error::{Error, Result};
