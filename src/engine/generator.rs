//! Solution generation and validation

use crate::core::{CODE_LENGTH, Code, Color, ConfigError, InvalidSolution, Palette};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Produces hidden solutions for a palette and duplicate policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionGenerator {
    palette: Palette,
    allow_duplicates: bool,
}

impl SolutionGenerator {
    /// Create a generator
    ///
    /// # Errors
    /// Returns `ConfigError` if the palette is empty, or if duplicates are off
    /// and the palette has fewer than four colors.
    pub fn new(palette: Palette, allow_duplicates: bool) -> Result<Self, ConfigError> {
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if !allow_duplicates && palette.len() < CODE_LENGTH {
            return Err(ConfigError::PaletteTooSmall {
                size: palette.len(),
                required: CODE_LENGTH,
            });
        }

        Ok(Self {
            palette,
            allow_duplicates,
        })
    }

    #[inline]
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Generate a random solution
    ///
    /// Without duplicates this samples four distinct colors without
    /// replacement; with duplicates every position is drawn independently.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Palette;
    /// use mastermind::engine::SolutionGenerator;
    ///
    /// let generator = SolutionGenerator::new(Palette::classic(), false).unwrap();
    /// let solution = generator.generate(&mut rand::rng());
    /// assert!(solution.first_duplicate().is_none());
    /// ```
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Code {
        let colors = self.palette.colors();
        let mut code = [Color::Red; CODE_LENGTH];

        if self.allow_duplicates {
            for slot in &mut code {
                *slot = colors[rng.random_range(0..colors.len())];
            }
        } else {
            for (slot, &color) in code
                .iter_mut()
                .zip(colors.choose_multiple(rng, CODE_LENGTH))
            {
                *slot = color;
            }
        }

        Code::new(code)
    }

    /// Validate an externally supplied solution
    ///
    /// # Errors
    /// Returns `InvalidSolution` if the length is wrong, a color is outside
    /// the palette, or a color repeats while duplicates are off.
    pub fn validate(&self, colors: &[Color]) -> Result<Code, InvalidSolution> {
        let code =
            Code::from_slice(colors).ok_or(InvalidSolution::WrongLength(colors.len()))?;

        if let Some(&color) = code.colors().iter().find(|&&c| !self.palette.contains(c)) {
            return Err(InvalidSolution::ColorNotInPalette(color));
        }

        if !self.allow_duplicates
            && let Some(color) = code.first_duplicate()
        {
            return Err(InvalidSolution::DuplicateColor(color));
        }

        Ok(code)
    }
}
