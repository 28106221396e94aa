//! Fixed color palette used by the pattern generators

use crate::pixel::buffer::Rgb;

/// Named colors with fixed RGB values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// `(255, 0, 0)`
    Red,
    /// `(255, 165, 0)`
    Orange,
    /// `(255, 255, 0)`
    Yellow,
    /// `(0, 255, 0)`
    Green,
    /// `(0, 0, 255)`
    Blue,
    /// `(75, 0, 130)`
    Indigo,
    /// `(148, 0, 211)`
    Violet,
    /// `(255, 255, 255)`
    White,
    /// `(0, 0, 0)`
    Black,
}

impl Color {
    /// Every palette entry
    pub const ALL: [Self; 9] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
        Self::White,
        Self::Black,
    ];

    /// Rainbow band order, top/left first
    pub const ROYGBIV: [Self; 7] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
    ];

    /// The color's channel values
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Red => [255, 0, 0],
            Self::Orange => [255, 165, 0],
            Self::Yellow => [255, 255, 0],
            Self::Green => [0, 255, 0],
            Self::Blue => [0, 0, 255],
            Self::Indigo => [75, 0, 130],
            Self::Violet => [148, 0, 211],
            Self::White => [255, 255, 255],
            Self::Black => [0, 0, 0],
        }
    }

    /// Lowercase palette name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// Look a color up by name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }
}
