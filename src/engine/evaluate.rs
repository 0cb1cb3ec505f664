//! Guess validation and scoring against a palette

use crate::core::{Code, Color, Feedback, InvalidGuess, Palette};

/// Check that a raw guess is a four-color code drawn from the palette
///
/// # Errors
/// Returns `InvalidGuess::WrongLength` or `InvalidGuess::ColorNotInPalette`.
pub fn validate_guess(guess: &[Color], palette: &Palette) -> Result<Code, InvalidGuess> {
    let code = Code::from_slice(guess).ok_or(InvalidGuess::WrongLength(guess.len()))?;

    match code.colors().iter().find(|&&c| !palette.contains(c)) {
        Some(&color) => Err(InvalidGuess::ColorNotInPalette(color)),
        None => Ok(code),
    }
}

/// Validate a raw guess and score it against the solution
///
/// # Errors
/// Returns `InvalidGuess` if the guess is malformed; nothing is scored then.
///
/// # Examples
/// ```
/// use mastermind::core::{Color, Palette};
/// use mastermind::engine::evaluate;
///
/// let solution = "YRGB".parse().unwrap();
/// let guess = [Color::Blue, Color::Green, Color::Red, Color::Yellow];
///
/// let feedback = evaluate(&guess, &solution, &Palette::classic()).unwrap();
/// assert_eq!((feedback.exact(), feedback.color_only()), (0, 4));
/// ```
pub fn evaluate(
    guess: &[Color],
    solution: &Code,
    palette: &Palette,
) -> Result<Feedback, InvalidGuess> {
    let guess = validate_guess(guess, palette)?;
    Ok(Feedback::calculate(&guess, solution))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Blue, Green, Orange, Purple, Red, Yellow};

    #[test]
    fn rejects_wrong_length() {
        let solution = Code::new([Red, Green, Red, Yellow]);
        let palette = Palette::classic();

        assert_eq!(
            evaluate(&[Red, Green, Red], &solution, &palette),
            Err(InvalidGuess::WrongLength(3))
        );
        assert_eq!(
            evaluate(&[], &solution, &palette),
            Err(InvalidGuess::WrongLength(0))
        );
        assert_eq!(
            evaluate(&[Red; 5], &solution, &palette),
            Err(InvalidGuess::WrongLength(5))
        );
    }

    #[test]
    fn rejects_color_outside_palette() {
        let solution = Code::new([Red, Green, Red, Yellow]);
        assert_eq!(
            evaluate(&[Red, Purple, Red, Yellow], &solution, &Palette::classic()),
            Err(InvalidGuess::ColorNotInPalette(Purple))
        );
    }

    #[test]
    fn scores_valid_guess() {
        let solution = Code::new([Red, Green, Red, Yellow]);
        let palette = Palette::classic();

        let feedback = evaluate(&[Red; 4], &solution, &palette).unwrap();
        assert_eq!((feedback.exact(), feedback.color_only()), (2, 0));

        let feedback = evaluate(&[Orange, Red, Red, Orange], &solution, &palette).unwrap();
        assert_eq!(feedback.exact(), 1);

        let feedback = evaluate(&[Blue; 4], &solution, &palette).unwrap();
        assert_eq!(feedback, Feedback::default());
    }
}
