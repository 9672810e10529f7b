//! One Dark theme
//! https://github.com/joshdick/onedark.vim

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2c, 0x34),
        bg1: Color::Rgb(0x31, 0x35, 0x3f),
        fg0: Color::Rgb(0xab, 0xb2, 0xbf),
        fg1: Color::Rgb(0x5c, 0x63, 0x70),
        accent: Color::Rgb(0x61, 0xaf, 0xef),
        red: Color::Rgb(0xe0, 0x6c, 0x75),
        orange: Color::Rgb(0xd1, 0x9a, 0x66),
        green: Color::Rgb(0x98, 0xc3, 0x79),
        blue: Color::Rgb(0x61, 0xaf, 0xef),
        purple: Color::Rgb(0xc6, 0x78, 0xdd),
    }
}
