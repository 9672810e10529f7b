//! Nord theme
//! https://www.nordtheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

/// Nord default theme
pub fn default() -> Theme {
    Theme {
        // Polar Night
        bg0: Color::Rgb(0x2e, 0x34, 0x40), // nord0
        bg1: Color::Rgb(0x3b, 0x42, 0x52), // nord1
        // Snow Storm
        fg0: Color::Rgb(0xec, 0xef, 0xf4), // nord6
        fg1: Color::Rgb(0xd8, 0xde, 0xe9), // nord4
        // Frost
        accent: Color::Rgb(0x8f, 0xbc, 0xbb), // nord7
        blue: Color::Rgb(0x81, 0xa1, 0xc1),   // nord9
        // Aurora
        red: Color::Rgb(0xbf, 0x61, 0x6a),    // nord11
        orange: Color::Rgb(0xd0, 0x87, 0x70), // nord12
        green: Color::Rgb(0xa3, 0xbe, 0x8c),  // nord14
        purple: Color::Rgb(0xb4, 0x8e, 0xad), // nord15
    }
}
