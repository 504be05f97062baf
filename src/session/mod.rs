//! A single play of the daily puzzle.
//!
//! [`GameSession`] owns the board, the grades, the cursor and the keyboard
//! state. Presentation code drives it with three inputs (type, delete,
//! submit) and hears about every change through an [`Observer`].

use chrono::NaiveDate;
use log::{debug, info, trace};

use crate::{
    card::{Card, Catalog},
    input::Input,
    keyboard::KeyboardState,
    puzzle::{Grade, Puzzle, Word},
};

mod grid;
pub use grid::Grid;

mod observer;
pub use observer::{Event, Observer};

/// The default number of guesses.
pub const MAX_ROWS: usize = 6;

/// The default narrowest board.
pub const MIN_COLS: usize = 3;

/// Board dimensions for a session.
///
/// Configuration methods consume the existing [`Rules`] and return a new one.
///
/// ```rust
/// use cardle::Rules;
///
/// let rules = Rules::new().max_rows(8).min_cols(4);
/// assert_eq!(rules.rows(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rules {
    max_rows: usize,
    min_cols: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            max_rows: MAX_ROWS,
            min_cols: MIN_COLS,
        }
    }
}

impl Rules {
    /// Creates the standard rules: six guesses, at least three columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of guesses. At least one.
    pub fn max_rows(self, n: usize) -> Self {
        Rules {
            max_rows: n.max(1),
            ..self
        }
    }

    /// Sets the narrowest board; longer words widen it. At least one.
    pub fn min_cols(self, n: usize) -> Self {
        Rules {
            min_cols: n.max(1),
            ..self
        }
    }

    pub fn rows(&self) -> usize {
        self.max_rows
    }
}

/// The cell the next typed character goes into.
///
/// `col` can equal the column count once a row is filled, and `row` can equal
/// the row count once the game is lost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

/// What a session did with an input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// A cell was typed into or cleared.
    Accepted,

    /// Nothing happened: the row or board is full, the row is empty, the
    /// game is over, a reveal is still running, or the character is not a
    /// letter or digit.
    Ignored,

    /// The row is not filled in, so it cannot be submitted.
    Rejected,

    /// The row was graded and its reveal has begun. No other input is
    /// accepted until [`GameSession::reveal_next()`] has walked every column
    /// or [`GameSession::finish_reveal()`] is called.
    Evaluated(Vec<Grade>),
}

/// A graded row whose cells are still being turned over.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Reveal {
    row: usize,
    grades: Vec<Grade>,
    next: usize,
    solved: bool,
}

/// One player's attempt at a puzzle.
///
/// # Examples
///
/// ```rust
/// use cardle::{Card, GameSession, Grade::*, Response, Status};
///
/// let mut session = GameSession::new(Card::new(0, "Zap")?);
/// let mut observer = ();
///
/// for ch in "PAZ".chars() {
///     session.type_char(ch, &mut observer);
/// }
/// assert_eq!(
///     session.submit_guess(&mut observer),
///     Response::Evaluated(vec![Present, Correct, Present])
/// );
///
/// // The reveal has to finish before the next row opens up.
/// assert_eq!(session.type_char('Z', &mut observer), Response::Ignored);
/// session.finish_reveal(&mut observer);
///
/// session.enter("ZAP", &mut observer);
/// assert_eq!(session.status(), Status::Won);
/// #
/// # Ok::<_, cardle::CardleError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    card: Card,
    puzzle: Puzzle,
    rules: Rules,
    letters: Grid<char>,
    grades: Grid<Grade>,
    cursor: Cursor,
    keyboard: KeyboardState,
    status: Status,
    reveal: Option<Reveal>,
}

impl GameSession {
    /// Starts a session with the standard [`Rules`].
    pub fn new(card: Card) -> Self {
        Self::with_rules(card, Rules::default())
    }

    pub fn with_rules(card: Card, rules: Rules) -> Self {
        let puzzle = Puzzle::new(card.word().clone(), rules.min_cols);
        let cols = puzzle.cols();
        debug!(
            "new session: {} rows, {} columns for a {} letter word",
            rules.max_rows,
            cols,
            puzzle.word().len()
        );

        GameSession {
            card,
            puzzle,
            rules,
            letters: Grid::new(rules.max_rows, cols),
            grades: Grid::new(rules.max_rows, cols),
            cursor: Cursor::default(),
            keyboard: KeyboardState::new(),
            status: Status::Playing,
            reveal: None,
        }
    }

    /// Starts a session on the card everyone plays on `date`.
    pub fn daily(catalog: &Catalog, date: NaiveDate, rules: Rules) -> Self {
        Self::with_rules(catalog.daily(date).clone(), rules)
    }

    /// Starts a session on today's card, by the UTC calendar.
    #[cfg(feature = "clock")]
    pub fn today(catalog: &Catalog, rules: Rules) -> Self {
        Self::with_rules(catalog.today().clone(), rules)
    }

    /// The card being guessed. Only show its name once the game is over.
    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn target(&self) -> &Word {
        self.puzzle.word()
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn rows(&self) -> usize {
        self.rules.max_rows
    }

    pub fn cols(&self) -> usize {
        self.puzzle.cols()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Typed characters, one row per guess.
    pub fn letters(&self) -> &Grid<char> {
        &self.letters
    }

    /// Grades of submitted rows. Rows not yet submitted are empty.
    pub fn grades(&self) -> &Grid<Grade> {
        &self.grades
    }

    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// True between an accepted submission and the end of its reveal.
    pub fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    fn accepts_input(&self) -> bool {
        self.status == Status::Playing && self.reveal.is_none()
    }

    /// Dispatches an [`Input`] to the matching transition.
    pub fn apply<O: Observer + ?Sized>(&mut self, input: Input, observer: &mut O) -> Response {
        match input {
            Input::Char(ch) => self.type_char(ch, observer),
            Input::Delete => self.delete_char(observer),
            Input::Submit => self.submit_guess(observer),
        }
    }

    /// Types `ch` into the cell under the cursor and moves the cursor right.
    ///
    /// Lowercase letters are uppercased. Anything that is not an ASCII
    /// letter or digit, and typing into a full row, is ignored.
    pub fn type_char<O: Observer + ?Sized>(&mut self, ch: char, observer: &mut O) -> Response {
        let ch = ch.to_ascii_uppercase();
        let Cursor { row, col } = self.cursor;
        if !self.accepts_input()
            || !ch.is_ascii_alphanumeric()
            || row >= self.rows()
            || col >= self.cols()
        {
            return Response::Ignored;
        }

        trace!("typed {ch:?} at ({row}, {col})");
        self.letters.set(row, col, Some(ch));
        observer.cell_changed(row, col, Some(ch));
        self.cursor.col += 1;
        Response::Accepted
    }

    /// Clears the cell left of the cursor.
    ///
    /// Never crosses into the previous row: at the start of a row this does
    /// nothing, so submitted guesses cannot be edited.
    pub fn delete_char<O: Observer + ?Sized>(&mut self, observer: &mut O) -> Response {
        let Cursor { row, col } = self.cursor;
        if !self.accepts_input() || col == 0 {
            return Response::Ignored;
        }

        let col = col - 1;
        trace!("deleted ({row}, {col})");
        self.letters.set(row, col, None);
        observer.cell_changed(row, col, None);
        self.cursor.col = col;
        Response::Accepted
    }

    /// Grades the current row against the target.
    ///
    /// An incomplete row is [`Response::Rejected`] without changing anything.
    /// A complete one is graded and recorded right away, and its reveal
    /// begins; the keyboard merge and the move to the next row (or the end
    /// of the game) only happen once the reveal is over.
    pub fn submit_guess<O: Observer + ?Sized>(&mut self, observer: &mut O) -> Response {
        let row = self.cursor.row;
        if !self.accepts_input() || row >= self.rows() {
            return Response::Ignored;
        }

        if !self.letters.row_full(row) {
            debug!("rejected incomplete row {row}");
            observer.row_rejected(row);
            return Response::Rejected;
        }

        let guess: String = self.letters.row(row).iter().flatten().collect();
        let (grades, solved) = self.puzzle.check(&guess);
        debug!("row {row}: {guess} graded {grades:?}");

        for (col, &grade) in grades.iter().enumerate() {
            self.grades.set(row, col, Some(grade));
        }
        observer.row_evaluated(row, &grades);

        self.reveal = Some(Reveal {
            row,
            grades: grades.clone(),
            next: 0,
            solved,
        });
        Response::Evaluated(grades)
    }

    /// Turns over the next cell of the row being revealed and returns its
    /// column and grade, or `None` if no reveal is running.
    ///
    /// Turning over the last cell finishes the submission: the keyboard is
    /// updated and the session moves on to the next row or ends.
    pub fn reveal_next<O: Observer + ?Sized>(&mut self, observer: &mut O) -> Option<(usize, Grade)> {
        let reveal = self.reveal.as_mut()?;
        let (row, col) = (reveal.row, reveal.next);
        let grade = reveal.grades[col];
        reveal.next += 1;
        let done = reveal.next == reveal.grades.len();

        observer.cell_revealed(row, col, grade);
        if done {
            self.settle(observer);
        }
        Some((col, grade))
    }

    /// Reveals every remaining cell at once.
    pub fn finish_reveal<O: Observer + ?Sized>(&mut self, observer: &mut O) {
        while self.reveal_next(observer).is_some() {}
    }

    /// Types `guess`, submits it and runs the whole reveal.
    ///
    /// Characters that do not fit or are not letters or digits are skipped,
    /// exactly as if they had been typed one by one.
    pub fn enter<O: Observer + ?Sized>(&mut self, guess: &str, observer: &mut O) -> Response {
        for ch in guess.chars() {
            self.type_char(ch, observer);
        }
        let response = self.submit_guess(observer);
        self.finish_reveal(observer);
        response
    }

    fn settle<O: Observer + ?Sized>(&mut self, observer: &mut O) {
        let Some(Reveal {
            row,
            grades,
            solved,
            ..
        }) = self.reveal.take()
        else {
            return;
        };

        let typed = self.letters.row(row).iter().flatten().copied();
        self.keyboard.merge_row(typed.zip(grades.iter().copied()));
        observer.keyboard_updated(&self.keyboard);

        if solved {
            info!("solved {} in {} guesses", self.puzzle.word(), row + 1);
            self.status = Status::Won;
            observer.game_won();
            return;
        }

        self.cursor = Cursor { row: row + 1, col: 0 };
        if self.cursor.row >= self.rows() {
            info!("out of guesses; the answer was {}", self.puzzle.word());
            self.status = Status::Lost;
            observer.game_lost();
        }
    }
}
