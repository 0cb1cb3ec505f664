//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Code, Color, Feedback, Palette, Peg};
use colored::{ColoredString, Colorize};
use rand::Rng;
use rand::seq::SliceRandom;

const PEG: &str = "●";
const EMPTY: &str = "·";

/// A colored peg glyph for one color
#[must_use]
pub fn color_peg(color: Color) -> ColoredString {
    match color {
        Color::Red => PEG.red(),
        Color::Blue => PEG.blue(),
        Color::Yellow => PEG.yellow(),
        Color::Green => PEG.green(),
        Color::White => PEG.white(),
        Color::Orange => PEG.truecolor(255, 165, 0),
        Color::Purple => PEG.magenta(),
    }
}

/// A code as colored pegs followed by its symbols, e.g. `● ● ● ●  RGBY`
#[must_use]
pub fn format_code(code: &Code) -> String {
    let pegs: Vec<String> = code.colors().iter().map(|&c| color_peg(c).to_string()).collect();
    format!("{}  {}", pegs.join(" "), code.to_string().bold())
}

/// Placeholder for a solution that is still hidden
#[must_use]
pub fn hidden_code() -> String {
    ["?"; CODE_LENGTH].join(" ")
}

/// Feedback pegs in random order
///
/// Peg order carries no meaning, so front ends shuffle before drawing to
/// avoid hinting at positions.
pub fn shuffled_pegs<R: Rng + ?Sized>(feedback: Feedback, rng: &mut R) -> Vec<Peg> {
    let mut pegs = feedback.pegs();
    pegs.shuffle(rng);
    pegs
}

/// Feedback pegs as text: `B` exact, `W` color only, `·` empty slot
#[must_use]
pub fn format_pegs(pegs: &[Peg]) -> String {
    let mut parts: Vec<String> = pegs
        .iter()
        .map(|peg| match peg {
            Peg::Exact => peg.symbol().to_string().bright_white().on_black().bold().to_string(),
            Peg::ColorOnly => peg.symbol().to_string().black().on_white().to_string(),
        })
        .collect();
    parts.extend(std::iter::repeat_n(
        EMPTY.bright_black().to_string(),
        CODE_LENGTH.saturating_sub(pegs.len()),
    ));
    parts.join(" ")
}

/// Palette legend, e.g. `● R  ● B  ...`
#[must_use]
pub fn palette_legend(palette: &Palette) -> String {
    palette
        .colors()
        .iter()
        .map(|&c| format!("{} {}", color_peg(c), c.symbol()))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffled_pegs_keep_counts() {
        let feedback = Feedback::new(2, 2);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..20 {
            let mut pegs = shuffled_pegs(feedback, &mut rng);
            assert_eq!(pegs.len(), 4);
            pegs.sort_unstable();
            assert_eq!(pegs, feedback.pegs());
        }
    }

    #[test]
    fn format_pegs_pads_empty_slots() {
        let text = format_pegs(&[Peg::Exact]);
        assert_eq!(text.matches(EMPTY).count(), 3);
        assert!(text.contains('B'));

        let empty = format_pegs(&[]);
        assert_eq!(empty.matches(EMPTY).count(), 4);
    }

    #[test]
    fn format_code_includes_symbols() {
        let code: Code = "RGBY".parse().unwrap();
        let text = format_code(&code);
        assert_eq!(text.matches(PEG).count(), 4);
        assert!(text.contains("RGBY"));
    }

    #[test]
    fn hidden_code_has_one_mark_per_peg() {
        assert_eq!(hidden_code(), "? ? ? ?");
    }

    #[test]
    fn legend_lists_every_palette_color() {
        let legend = palette_legend(&Palette::classic());
        for color in Palette::classic().colors() {
            assert!(legend.contains(color.symbol()));
        }
    }
}
