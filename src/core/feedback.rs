//! Guess feedback calculation and representation
//!
//! Feedback is two counts:
//! - exact: right color in the right position (a black peg)
//! - color-only: right color in the wrong position (a white peg)
//!
//! Pegs carry no positional meaning. Front ends that draw individual pegs
//! should shuffle them before display.

use super::{CODE_LENGTH, Code, Color};
use rustc_hash::FxHashMap;
use std::fmt;

/// A single feedback peg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Peg {
    /// Color and position both correct
    Exact,
    /// Color present elsewhere in the solution
    ColorOnly,
}

impl Peg {
    /// Traditional marker: `B` for black (exact), `W` for white (color only)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'B',
            Self::ColorOnly => 'W',
        }
    }
}

/// Feedback for one guess against the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: u8,
    color_only: u8,
}

impl Feedback {
    /// All four pegs exact (the winning feedback)
    pub const PERFECT: Self = Self {
        exact: CODE_LENGTH as u8,
        color_only: 0,
    };

    /// Build feedback from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if the counts add up to more than four
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, color_only: u8) -> Self {
        debug_assert!(
            (exact + color_only) as usize <= CODE_LENGTH,
            "Feedback cannot exceed the code length"
        );
        Self { exact, color_only }
    }

    /// Score `guess` against `solution`
    ///
    /// # Algorithm
    /// 1. Count exact position matches; those positions are removed from both sides
    /// 2. For every color, add `min(remaining in guess, remaining in solution)`
    ///    to the color-only count
    ///
    /// Removing exact matches first is what keeps repeated colors from being
    /// counted twice.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback};
    ///
    /// let solution: Code = "RGRY".parse().unwrap();
    /// let guess: Code = "RRRR".parse().unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &solution);
    /// assert_eq!((feedback.exact(), feedback.color_only()), (2, 0));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, solution: &Code) -> Self {
        let mut exact = 0u8;
        let mut guess_remaining: FxHashMap<Color, u8> = FxHashMap::default();
        let mut solution_remaining: FxHashMap<Color, u8> = FxHashMap::default();

        for (&g, &s) in guess.colors().iter().zip(solution.colors()) {
            if g == s {
                exact += 1;
            } else {
                *guess_remaining.entry(g).or_insert(0) += 1;
                *solution_remaining.entry(s).or_insert(0) += 1;
            }
        }

        let color_only = guess_remaining
            .iter()
            .map(|(color, &count)| count.min(solution_remaining.get(color).copied().unwrap_or(0)))
            .sum();

        Self { exact, color_only }
    }

    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    #[inline]
    #[must_use]
    pub const fn color_only(self) -> u8 {
        self.color_only
    }

    /// Total number of pegs awarded
    #[inline]
    #[must_use]
    pub const fn total(self) -> u8 {
        self.exact + self.color_only
    }

    /// Check if every peg is exact
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// Pegs as a multiset, exact pegs first
    ///
    /// The order is only a convenience; callers must not read positions into it.
    #[must_use]
    pub fn pegs(self) -> Vec<Peg> {
        let mut pegs = vec![Peg::Exact; usize::from(self.exact)];
        pegs.resize(usize::from(self.total()), Peg::ColorOnly);
        pegs
    }
}

impl fmt::Display for Feedback {
    /// Formats as `BBW-`: one symbol per peg, `-` for empty slots
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in self.pegs() {
            write!(f, "{}", peg.symbol())?;
        }
        for _ in self.total() as usize..CODE_LENGTH {
            write!(f, "-")?;
        }
        Ok(())
    }
}
