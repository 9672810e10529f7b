//! Gruvbox themes
//! https://github.com/morhetz/gruvbox

use ratatui::style::Color;
use crate::theme::Theme;

/// Gruvbox dark (material variant)
pub fn dark() -> Theme {
    Theme::default()
}

/// Gruvbox light
pub fn light() -> Theme {
    Theme {
        bg0: Color::Rgb(0xfb, 0xf1, 0xc7),
        bg1: Color::Rgb(0xeb, 0xdb, 0xb2),
        fg0: Color::Rgb(0x3c, 0x38, 0x36),
        fg1: Color::Rgb(0x7c, 0x6f, 0x64),
        accent: Color::Rgb(0x42, 0x7b, 0x58),
        red: Color::Rgb(0xcc, 0x24, 0x1d),
        orange: Color::Rgb(0xd6, 0x5d, 0x0e),
        green: Color::Rgb(0x98, 0x97, 0x1a),
        blue: Color::Rgb(0x45, 0x85, 0x88),
        purple: Color::Rgb(0xb1, 0x62, 0x86),
    }
}
