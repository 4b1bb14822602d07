use std::fmt;

use crate::scene::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl OptionKey {
    pub const ALL: [OptionKey; 6] = [
        OptionKey::A,
        OptionKey::B,
        OptionKey::C,
        OptionKey::D,
        OptionKey::E,
        OptionKey::F,
    ];

    pub const fn index(self) -> usize {
        match self {
            OptionKey::A => 0,
            OptionKey::B => 1,
            OptionKey::C => 2,
            OptionKey::D => 3,
            OptionKey::E => 4,
            OptionKey::F => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            OptionKey::A => "A",
            OptionKey::B => "B",
            OptionKey::C => "C",
            OptionKey::D => "D",
            OptionKey::E => "E",
            OptionKey::F => "F",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One authored matrix exercise. Exactly one matrix slot is `None` (the
/// blank the user fills in); the six candidate cells are indexed by
/// `OptionKey`, so the correct key always names a real option.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Question {
    pub id: u32,
    pub matrix: [[Option<Cell>; 3]; 3],
    pub answer: OptionKey,
    pub options: [Cell; 6],
    pub hint: &'static str,
}

impl Question {
    pub fn option(&self, key: OptionKey) -> &Cell {
        &self.options[key.index()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Unanswered,
    Answered { key: OptionKey, correct: bool },
}

/// Quiz controller: current question index, answer sub-state, and the
/// orthogonal hint-modal flag. All transitions are total; out-of-range
/// navigation is a no-op.
#[derive(Clone, Debug, PartialEq)]
pub struct Quiz {
    questions: &'static [Question],
    index: usize,
    answer: Answer,
    hint_open: bool,
}

impl Quiz {
    pub fn new(questions: &'static [Question]) -> Self {
        debug_assert!(!questions.is_empty());
        Self {
            questions,
            index: 0,
            answer: Answer::Unanswered,
            hint_open: false,
        }
    }

    pub fn question(&self) -> &Question {
        &self.questions[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn answer(&self) -> Answer {
        self.answer
    }

    pub fn hint_open(&self) -> bool {
        self.hint_open
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.questions.len()
    }

    /// Record a selection and return whether it was correct. Re-selecting
    /// from an answered state replaces the previous answer.
    pub fn select_answer(&mut self, key: OptionKey) -> bool {
        let correct = key == self.question().answer;
        self.answer = Answer::Answered { key, correct };
        correct
    }

    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.index += 1;
        self.answer = Answer::Unanswered;
        true
    }

    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.index -= 1;
        self.answer = Answer::Unanswered;
        true
    }

    pub fn show_hint(&mut self) {
        self.hint_open = true;
    }

    pub fn hide_hint(&mut self) {
        self.hint_open = false;
    }
}
