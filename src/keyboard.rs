//! What the player has learned about each key so far.

use std::collections::BTreeMap;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::puzzle::Grade;

/// The rows of the on-screen keyboard, top to bottom.
///
/// The last row is flanked by [`ENTER`] on the left and [`BACK`] on the right.
pub const LAYOUT: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Name of the on-screen submit key.
pub const ENTER: &str = "ENTER";

/// Name of the on-screen delete key.
pub const BACK: &str = "BACK";

/// Combines what a key was known to be with a new grade for it.
///
/// The better of the two always wins, so a key never goes back from
/// `Correct` to `Present` or from `Present` to `Absent`.
pub fn merge(existing: Option<Grade>, incoming: Grade) -> Grade {
    existing.map_or(incoming, |e| e.max(incoming))
}

/// The best known [`Grade`] for every character guessed so far.
///
/// # Examples
///
/// ```rust
/// use cardle::{KeyboardState, Grade::*};
///
/// let mut keys = KeyboardState::new();
/// keys.merge_row("ZAP".chars().zip([Correct, Absent, Present]));
/// keys.merge_row("ZAP".chars().zip([Absent, Absent, Correct]));
///
/// assert_eq!(keys.get('Z'), Some(Correct));
/// assert_eq!(keys.get('A'), Some(Absent));
/// assert_eq!(keys.get('P'), Some(Correct));
/// assert_eq!(keys.get('Q'), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct KeyboardState {
    keys: BTreeMap<char, Grade>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The best known grade for `ch`, if it has been guessed.
    pub fn get(&self, ch: char) -> Option<Grade> {
        self.keys.get(&ch.to_ascii_uppercase()).copied()
    }

    /// Folds one evaluated row into the state.
    ///
    /// Returns true if any key changed.
    pub fn merge_row(&mut self, row: impl IntoIterator<Item = (char, Grade)>) -> bool {
        let mut changed = false;
        for (ch, grade) in row {
            let ch = ch.to_ascii_uppercase();
            let merged = merge(self.keys.get(&ch).copied(), grade);
            if self.keys.insert(ch, merged) != Some(merged) {
                changed = true;
            }
        }
        changed
    }

    /// Every known key and its grade, in character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, Grade)> + '_ {
        self.keys.iter().map(|(&c, &g)| (c, g))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl std::fmt::Display for KeyboardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys = self.iter().map(|(c, g)| format!("{c}:{g}")).join(" ");
        f.write_str(&keys)
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::puzzle::Grade::*;

    #[test]
    fn merge_takes_the_best_grade() {
        assert_eq!(merge(None, Absent), Absent);
        assert_eq!(merge(Some(Absent), Present), Present);
        assert_eq!(merge(Some(Present), Correct), Correct);
        assert_eq!(merge(Some(Correct), Absent), Correct);
        assert_eq!(merge(Some(Correct), Present), Correct);
        assert_eq!(merge(Some(Present), Absent), Present);
    }

    #[test]
    fn correct_key_stays_correct() {
        let mut keys = KeyboardState::new();
        assert!(keys.merge_row([('H', Correct), ('I', Absent)]));
        assert!(!keys.merge_row([('H', Absent), ('I', Absent)]));
        assert_eq!(keys.get('H'), Some(Correct));
        assert_eq!(keys.get('h'), Some(Correct));
    }

    #[test]
    fn display_lists_keys_in_order() {
        let mut keys = KeyboardState::new();
        keys.merge_row([('Z', Present), ('A', Absent), ('2', Correct)]);
        assert_eq!(keys.to_string(), "2:correct A:absent Z:present");
    }

    #[test]
    fn layout_covers_the_alphabet_once() {
        let letters: String = LAYOUT.iter().flat_map(|r| r.chars()).sorted().collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    fn grade() -> impl Strategy<Value = Grade> {
        prop_oneof![Just(Absent), Just(Present), Just(Correct)]
    }

    proptest! {
        #[test]
        fn merging_never_downgrades(rows in prop::collection::vec(prop::collection::vec(("[A-D]", grade()), 1..6), 1..8)) {
            let mut keys = KeyboardState::new();
            for row in rows {
                let before = keys.clone();
                keys.merge_row(row.iter().map(|(s, g)| (s.chars().next().unwrap(), *g)));
                for (c, g) in before.iter() {
                    prop_assert!(keys.get(c).unwrap() >= g);
                }
                for (s, g) in &row {
                    prop_assert!(keys.get(s.chars().next().unwrap()).unwrap() >= *g);
                }
            }
        }
    }
}
