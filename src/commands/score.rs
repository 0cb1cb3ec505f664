//! One-shot scoring command
//!
//! Scores a single guess against a given solution without playing a game.

use crate::core::{Code, Feedback, InvalidGuess, InvalidSolution, Palette, parse_colors};
use crate::engine::{SolutionGenerator, evaluate};
use anyhow::{Context, Result};

/// Result of scoring one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub solution: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Score `guess` against `solution`, both given as color symbols
///
/// The solution is checked against the palette and duplicate rule exactly as
/// a host-supplied solution would be.
///
/// # Errors
///
/// Returns an error if the palette is unusable, the solution breaks the
/// solution rules, or the guess is malformed.
pub fn score_codes(
    solution: &str,
    guess: &str,
    palette: &Palette,
    allow_duplicates: bool,
) -> Result<ScoreResult> {
    let generator = SolutionGenerator::new(palette.clone(), allow_duplicates)?;

    let solution_colors = parse_colors(solution).map_err(InvalidSolution::UnknownSymbol)?;
    let solution = generator
        .validate(&solution_colors)
        .context("Invalid solution")?;

    let guess_colors = parse_colors(guess).map_err(InvalidGuess::UnknownSymbol)?;
    let feedback = evaluate(&guess_colors, &solution, palette).context("Invalid guess")?;
    let guess = Code::from_slice(&guess_colors)
        .ok_or(InvalidGuess::WrongLength(guess_colors.len()))?;

    Ok(ScoreResult {
        solution,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_duplicate_heavy_pair() {
        let result = score_codes("RGRY", "RRRR", &Palette::classic(), true).unwrap();
        assert_eq!(result.feedback, Feedback::new(2, 0));
        assert_eq!(result.solution.to_string(), "RGRY");
        assert_eq!(result.guess.to_string(), "RRRR");
    }

    #[test]
    fn scores_permutation() {
        let result = score_codes("yrgb", "b g r y", &Palette::classic(), false).unwrap();
        assert_eq!(result.feedback, Feedback::new(0, 4));
    }

    #[test]
    fn rejects_solution_with_repeats_when_duplicates_off() {
        let err = score_codes("RGRY", "RRRR", &Palette::classic(), false).unwrap_err();
        assert!(err.to_string().contains("Invalid solution"));
        assert_eq!(
            err.downcast_ref::<InvalidSolution>(),
            Some(&InvalidSolution::DuplicateColor(crate::core::Color::Red))
        );
    }

    #[test]
    fn rejects_short_or_unknown_guess() {
        let short = score_codes("RGBY", "RGB", &Palette::classic(), false).unwrap_err();
        assert_eq!(
            short.downcast_ref::<InvalidGuess>(),
            Some(&InvalidGuess::WrongLength(3))
        );

        let unknown = score_codes("RGBY", "RGBX", &Palette::classic(), false).unwrap_err();
        assert_eq!(
            unknown.downcast_ref::<InvalidGuess>(),
            Some(&InvalidGuess::UnknownSymbol('X'))
        );
    }
}
