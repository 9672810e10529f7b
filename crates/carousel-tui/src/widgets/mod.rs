mod nav_title;
mod popup;
mod stage;
mod status_bar;
mod toolbar;

pub use nav_title::NavTitleWidget;
pub use popup::PopupWidget;
pub use stage::StageWidget;
pub use status_bar::StatusBarWidget;
pub use toolbar::ToolbarWidget;
