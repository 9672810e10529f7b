pub mod animation;
pub mod app;
pub mod event;
pub mod gesture;
pub mod input;
pub mod keymap;
pub mod screen;
pub mod theme;
pub mod themes;
pub mod widgets;

pub use app::App;
pub use themes::{available_themes, load_theme};
