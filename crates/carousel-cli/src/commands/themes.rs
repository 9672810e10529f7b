use anyhow::Result;

use carousel_core::AppConfig;
use carousel_tui::available_themes;

pub fn run(config: &AppConfig) -> Result<()> {
    let current = config.ui.theme.name.to_lowercase();
    for name in available_themes() {
        let marker = if name == current { "*" } else { " " };
        println!("{} {}", marker, name);
    }
    Ok(())
}
