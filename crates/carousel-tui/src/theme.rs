use carousel_core::PanelColor;
use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub accent: Color,

    // Panel colors
    pub red: Color,
    pub orange: Color,
    pub green: Color,
    pub blue: Color,
    pub purple: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Default to Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            red: Color::Rgb(0xea, 0x69, 0x62),
            orange: Color::Rgb(0xe7, 0x8a, 0x4e),
            green: Color::Rgb(0xa9, 0xb6, 0x65),
            blue: Color::Rgb(0x7d, 0xae, 0xa3),
            purple: Color::Rgb(0xd3, 0x86, 0x9b),
        }
    }
}

impl Theme {
    /// Fill color of a panel
    pub fn panel_color(&self, panel: PanelColor) -> Color {
        match panel {
            PanelColor::Red => self.red,
            PanelColor::Orange => self.orange,
            PanelColor::Green => self.green,
            PanelColor::Blue => self.blue,
            PanelColor::Purple => self.purple,
        }
    }
}

/// Mix `color` toward `toward` by `amount` (0.0 = color, 1.0 = toward).
///
/// Only RGB colors can be mixed; named colors snap to whichever side is closer.
pub fn mix(color: Color, toward: Color, amount: f64) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    match (color, toward) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let channel = |a: u8, b: u8| -> u8 {
                (a as f64 + (b as f64 - a as f64) * amount).round() as u8
            };
            Color::Rgb(channel(r1, r2), channel(g1, g2), channel(b1, b2))
        }
        _ => {
            if amount < 0.5 {
                color
            } else {
                toward
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_rgb() {
        let black = Color::Rgb(0, 0, 0);
        let white = Color::Rgb(255, 255, 255);
        assert_eq!(mix(white, black, 0.0), white);
        assert_eq!(mix(white, black, 1.0), black);
        assert_eq!(mix(Color::Rgb(200, 100, 0), black, 0.5), Color::Rgb(100, 50, 0));
    }

    #[test]
    fn test_mix_named_colors_snap() {
        assert_eq!(mix(Color::Red, Color::Black, 0.25), Color::Red);
        assert_eq!(mix(Color::Red, Color::Black, 0.75), Color::Black);
    }

    #[test]
    fn test_panel_colors_follow_palette() {
        let theme = Theme::default();
        assert_eq!(theme.panel_color(PanelColor::Red), theme.red);
        assert_eq!(theme.panel_color(PanelColor::Purple), theme.purple);
    }
}
