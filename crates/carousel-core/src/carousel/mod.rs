//! Carousel controller and its rendering contract
//!
//! - `item` - the fixed, ordered panel colors
//! - `controller` - clamped index state, drag handling, change notification
//! - `layout` - per-panel opacity, scale and offset derived from state

pub mod controller;
pub mod item;
pub mod layout;

pub use controller::{
    CarouselController, CarouselEvent, CarouselSnapshot, DragOutcome, SubscriptionId,
    Transition, SWIPE_THRESHOLD,
};
pub use item::PanelColor;
pub use layout::PanelTransform;
