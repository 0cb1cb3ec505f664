//! Four-peg color codes
//!
//! A `Code` is the fixed-length sequence used for both the hidden solution and
//! a validated guess.

use super::{Color, color::parse_colors};
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of pegs in a code
pub const CODE_LENGTH: usize = 4;

/// An ordered sequence of exactly four colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Color; CODE_LENGTH]);

impl Code {
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    /// Build a code from a slice, returning `None` unless it has exactly four colors
    ///
    /// Palette membership is not checked here; the engine does that against
    /// the configured palette.
    #[must_use]
    pub fn from_slice(colors: &[Color]) -> Option<Self> {
        <[Color; CODE_LENGTH]>::try_from(colors).ok().map(Self)
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// Count of each color in the code
    #[must_use]
    pub fn color_counts(&self) -> FxHashMap<Color, u8> {
        let mut counts = FxHashMap::default();
        for &color in &self.0 {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }

    /// First color that appears more than once, scanning left to right
    #[must_use]
    pub fn first_duplicate(&self) -> Option<Color> {
        self.0
            .iter()
            .enumerate()
            .find(|&(i, color)| self.0[..i].contains(color))
            .map(|(_, &color)| color)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Code {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = parse_colors(s).map_err(|c| format!("Invalid color symbol: {c}"))?;
        Self::from_slice(&colors).ok_or_else(|| {
            format!(
                "Code must have exactly {CODE_LENGTH} colors, got {}",
                colors.len()
            )
        })
    }
}
