//! Configured color palette

use super::Color;
use std::fmt;

/// Ordered set of colors a game is played with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// The classic six-color palette: red, blue, yellow, green, white, orange
    #[must_use]
    pub fn classic() -> Self {
        Self::first(6)
    }

    /// The first `count` colors of [`Color::ALL`] (clamped to the full set)
    #[must_use]
    pub fn first(count: usize) -> Self {
        Self::new(Color::ALL.iter().copied().take(count))
    }

    /// Build a palette, dropping repeated colors while keeping first-seen order
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Color, Palette};
    ///
    /// let palette = Palette::new([Color::Red, Color::Blue, Color::Red]);
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        let mut unique = Vec::new();
        for color in colors {
            if !unique.contains(&color) {
                unique.push(color);
            }
        }
        Self { colors: unique }
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Position of a color in the palette
    #[must_use]
    pub fn index_of(&self, color: Color) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
