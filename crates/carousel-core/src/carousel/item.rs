use std::fmt;

/// A carousel panel, identified only by its color and position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelColor {
    Red,
    Orange,
    Green,
    Blue,
    Purple,
}

impl PanelColor {
    /// Panels in display order
    pub const ALL: [PanelColor; 5] = [
        PanelColor::Red,
        PanelColor::Orange,
        PanelColor::Green,
        PanelColor::Blue,
        PanelColor::Purple,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PanelColor::Red => "red",
            PanelColor::Orange => "orange",
            PanelColor::Green => "green",
            PanelColor::Blue => "blue",
            PanelColor::Purple => "purple",
        }
    }

    /// Panel at `index`, if any
    pub fn at(index: usize) -> Option<PanelColor> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for PanelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
