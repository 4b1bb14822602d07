use katachi_core::{Answer, OptionKey, Quiz, QUESTION_CATALOG};

fn quiz() -> Quiz {
    Quiz::new(QUESTION_CATALOG)
}

#[test]
fn starts_on_the_first_question_unanswered() {
    let quiz = quiz();
    assert_eq!(quiz.index(), 0);
    assert_eq!(quiz.question().id, 1);
    assert_eq!(quiz.answer(), Answer::Unanswered);
    assert!(!quiz.hint_open());
    assert!(!quiz.has_previous());
    assert!(quiz.has_next());
}

#[test]
fn correct_selection() {
    let mut quiz = quiz();
    assert!(quiz.select_answer(OptionKey::E));
    assert_eq!(
        quiz.answer(),
        Answer::Answered {
            key: OptionKey::E,
            correct: true
        }
    );
}

#[test]
fn incorrect_selection() {
    let mut quiz = quiz();
    assert!(!quiz.select_answer(OptionKey::A));
    assert_eq!(
        quiz.answer(),
        Answer::Answered {
            key: OptionKey::A,
            correct: false
        }
    );
}

#[test]
fn reselection_replaces_the_previous_answer() {
    let mut quiz = quiz();
    quiz.select_answer(OptionKey::A);
    quiz.select_answer(OptionKey::E);
    assert_eq!(
        quiz.answer(),
        Answer::Answered {
            key: OptionKey::E,
            correct: true
        }
    );
}

#[test]
fn next_walks_to_the_end_and_stops() {
    let mut quiz = quiz();
    for expected in 1..QUESTION_CATALOG.len() {
        assert!(quiz.next());
        assert_eq!(quiz.index(), expected);
    }
    assert!(!quiz.has_next());
    assert!(!quiz.next());
    assert_eq!(quiz.index(), QUESTION_CATALOG.len() - 1);
}

#[test]
fn previous_at_the_start_is_a_no_op() {
    let mut quiz = quiz();
    assert!(!quiz.previous());
    assert_eq!(quiz.index(), 0);
}

#[test]
fn navigation_resets_the_answer() {
    let mut quiz = quiz();
    quiz.select_answer(OptionKey::E);
    quiz.next();
    assert_eq!(quiz.answer(), Answer::Unanswered);

    quiz.select_answer(OptionKey::C);
    quiz.previous();
    assert_eq!(quiz.answer(), Answer::Unanswered);
}

#[test]
fn hint_flag_is_independent_of_answers_and_navigation() {
    let mut quiz = quiz();
    quiz.show_hint();
    assert!(quiz.hint_open());

    quiz.select_answer(OptionKey::B);
    assert!(quiz.hint_open());

    quiz.next();
    assert!(quiz.hint_open());

    quiz.hide_hint();
    assert!(!quiz.hint_open());
}

#[test]
fn only_the_published_answer_is_correct() {
    let mut quiz = quiz();
    loop {
        let answer = quiz.question().answer;
        for key in OptionKey::ALL {
            assert_eq!(quiz.select_answer(key), key == answer);
        }
        if !quiz.next() {
            break;
        }
    }
}
