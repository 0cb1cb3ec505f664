//! Board history

use crate::core::{Code, Feedback};

/// One accepted guess and its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub feedback: Feedback,
}

/// Fixed number of turn slots, filled from the last row towards row 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Option<Turn>>,
}

impl Board {
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self {
            rows: vec![None; rows],
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Option<Turn>] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn record(&mut self, row: usize, turn: Turn) {
        debug_assert!(self.rows[row].is_none(), "row {row} already played");
        self.rows[row] = Some(turn);
    }

    pub(crate) fn clear(&mut self) {
        self.rows.fill(None);
    }

    /// Played turns in the order they were submitted
    pub fn turns(&self) -> impl Iterator<Item = &Turn> {
        self.rows.iter().rev().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Blue, Red};

    #[test]
    fn turns_follow_play_order() {
        let mut board = Board::new(3);
        let first = Turn {
            guess: Code::new([Red; 4]),
            feedback: Feedback::new(1, 0),
        };
        let second = Turn {
            guess: Code::new([Blue; 4]),
            feedback: Feedback::new(0, 0),
        };

        board.record(2, first);
        board.record(1, second);

        let played: Vec<Turn> = board.turns().copied().collect();
        assert_eq!(played, vec![first, second]);
        assert!(board.rows()[0].is_none());

        board.clear();
        assert_eq!(board.turns().count(), 0);
        assert_eq!(board.len(), 3);
    }
}
