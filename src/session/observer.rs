#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{keyboard::KeyboardState, puzzle::Grade};

/// Receives every change a [`GameSession`](super::GameSession) makes, so a
/// presentation layer can render it.
///
/// All methods do nothing by default. For an accepted guess the calls come in
/// this order: [`row_evaluated()`](Self::row_evaluated()), then
/// [`cell_revealed()`](Self::cell_revealed()) once per column from left to
/// right, then [`keyboard_updated()`](Self::keyboard_updated()), and finally
/// [`game_won()`](Self::game_won()) or [`game_lost()`](Self::game_lost()) if
/// the game ended.
pub trait Observer {
    /// A cell was typed into (`Some`) or cleared (`None`).
    fn cell_changed(&mut self, _row: usize, _col: usize, _ch: Option<char>) {}

    /// A guess was graded. Its reveal starts now.
    fn row_evaluated(&mut self, _row: usize, _grades: &[Grade]) {}

    /// One cell of the row being revealed turned over.
    fn cell_revealed(&mut self, _row: usize, _col: usize, _grade: Grade) {}

    fn keyboard_updated(&mut self, _keys: &KeyboardState) {}

    /// The player tried to submit a row that is not filled in.
    fn row_rejected(&mut self, _row: usize) {}

    fn game_won(&mut self) {}

    fn game_lost(&mut self) {}
}

/// Ignores everything.
impl Observer for () {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn cell_changed(&mut self, row: usize, col: usize, ch: Option<char>) {
        (**self).cell_changed(row, col, ch)
    }

    fn row_evaluated(&mut self, row: usize, grades: &[Grade]) {
        (**self).row_evaluated(row, grades)
    }

    fn cell_revealed(&mut self, row: usize, col: usize, grade: Grade) {
        (**self).cell_revealed(row, col, grade)
    }

    fn keyboard_updated(&mut self, keys: &KeyboardState) {
        (**self).keyboard_updated(keys)
    }

    fn row_rejected(&mut self, row: usize) {
        (**self).row_rejected(row)
    }

    fn game_won(&mut self) {
        (**self).game_won()
    }

    fn game_lost(&mut self) {
        (**self).game_lost()
    }
}

/// A single observed change, for consumers that would rather poll a list
/// than implement [`Observer`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(crate = "serde_crate", tag = "type", rename_all = "snake_case")
)]
pub enum Event {
    CellChanged {
        row: usize,
        col: usize,
        ch: Option<char>,
    },
    RowEvaluated {
        row: usize,
        grades: Vec<Grade>,
    },
    CellRevealed {
        row: usize,
        col: usize,
        grade: Grade,
    },
    KeyboardUpdated {
        keys: KeyboardState,
    },
    RowRejected {
        row: usize,
    },
    GameWon,
    GameLost,
}

/// Records every change, in order.
impl Observer for Vec<Event> {
    fn cell_changed(&mut self, row: usize, col: usize, ch: Option<char>) {
        self.push(Event::CellChanged { row, col, ch });
    }

    fn row_evaluated(&mut self, row: usize, grades: &[Grade]) {
        self.push(Event::RowEvaluated {
            row,
            grades: grades.to_vec(),
        });
    }

    fn cell_revealed(&mut self, row: usize, col: usize, grade: Grade) {
        self.push(Event::CellRevealed { row, col, grade });
    }

    fn keyboard_updated(&mut self, keys: &KeyboardState) {
        self.push(Event::KeyboardUpdated { keys: keys.clone() });
    }

    fn row_rejected(&mut self, row: usize) {
        self.push(Event::RowRejected { row });
    }

    fn game_won(&mut self) {
        self.push(Event::GameWon);
    }

    fn game_lost(&mut self) {
        self.push(Event::GameLost);
    }
}
