//! Peg colors
//!
//! Every color has a single-letter symbol used by the text front ends.

use std::fmt;

/// A peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
    White,
    Orange,
    Purple,
}

impl Color {
    /// Every color the game knows about, in palette order
    pub const ALL: [Self; 7] = [
        Self::Red,
        Self::Blue,
        Self::Yellow,
        Self::Green,
        Self::White,
        Self::Orange,
        Self::Purple,
    ];

    /// Single-letter symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Green => 'G',
            Self::White => 'W',
            Self::Orange => 'O',
            Self::Purple => 'P',
        }
    }

    /// Parse a symbol (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::from_symbol('r'), Some(Color::Red));
    /// assert_eq!(Color::from_symbol('x'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'R' => Some(Self::Red),
            'B' => Some(Self::Blue),
            'Y' => Some(Self::Yellow),
            'G' => Some(Self::Green),
            'W' => Some(Self::White),
            'O' => Some(Self::Orange),
            'P' => Some(Self::Purple),
            _ => None,
        }
    }

    /// Full lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::White => "white",
            Self::Orange => "orange",
            Self::Purple => "purple",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parse a string of symbols into colors
///
/// Whitespace, commas and dashes are ignored so `"R G B Y"` and `"r,g,b,y"`
/// both parse. Returns the first unrecognised symbol on failure.
///
/// # Errors
/// Returns the offending character if it is not a color symbol.
pub fn parse_colors(input: &str) -> Result<Vec<Color>, char> {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '-')
        .map(|c| Color::from_symbol(c).ok_or(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip_for_every_color() {
        for color in Color::ALL {
            assert_eq!(Color::from_symbol(color.symbol()), Some(color));
        }
    }

    #[test]
    fn symbols_are_unique() {
        let mut symbols: Vec<char> = Color::ALL.iter().map(|c| c.symbol()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), Color::ALL.len());
    }

    #[test]
    fn parse_colors_ignores_separators() {
        let expected = vec![Color::Red, Color::Green, Color::Blue, Color::Yellow];
        assert_eq!(parse_colors("RGBY"), Ok(expected.clone()));
        assert_eq!(parse_colors("r g b y"), Ok(expected.clone()));
        assert_eq!(parse_colors("r,g-b, y\n"), Ok(expected));
    }

    #[test]
    fn parse_colors_reports_unknown_symbol() {
        assert_eq!(parse_colors("RGXY"), Err('X'));
        assert_eq!(parse_colors("R1"), Err('1'));
    }

    #[test]
    fn parse_colors_keeps_length() {
        assert_eq!(parse_colors("RGB").map(|c| c.len()), Ok(3));
        assert_eq!(parse_colors("").map(|c| c.len()), Ok(0));
    }
}
