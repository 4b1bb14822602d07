use katachi_core::catalog::validate_question;
use katachi_core::{question_by_id, validate_catalog, OptionKey, QUESTION_CATALOG};

#[test]
fn catalog_passes_validation() {
    validate_catalog().unwrap();
}

#[test]
fn catalog_has_ten_questions_with_sequential_ids() {
    assert_eq!(QUESTION_CATALOG.len(), 10);
    for (index, question) in QUESTION_CATALOG.iter().enumerate() {
        assert_eq!(question.id as usize, index + 1);
    }
}

#[test]
fn every_question_has_one_hole_in_the_last_slot() {
    for question in QUESTION_CATALOG {
        let holes = question
            .matrix
            .iter()
            .flatten()
            .filter(|slot| slot.is_none())
            .count();
        assert_eq!(holes, 1, "question {}", question.id);
        assert!(question.matrix[2][2].is_none(), "question {}", question.id);
    }
}

#[test]
fn every_fill_is_a_percentage() {
    for question in QUESTION_CATALOG {
        let cells = question
            .matrix
            .iter()
            .flatten()
            .flatten()
            .chain(question.options.iter());
        for cell in cells {
            for shape in cell.shapes {
                assert!(shape.fill <= 100, "question {}", question.id);
            }
        }
    }
}

#[test]
fn every_option_cell_draws_something() {
    for question in QUESTION_CATALOG {
        for key in OptionKey::ALL {
            assert!(
                !question.option(key).is_empty(),
                "question {} option {key}",
                question.id
            );
        }
    }
}

#[test]
fn hints_are_present() {
    for question in QUESTION_CATALOG {
        assert!(!question.hint.trim().is_empty(), "question {}", question.id);
    }
}

#[test]
fn lookup_by_id() {
    let question = question_by_id(7).unwrap();
    assert_eq!(question.id, 7);
    assert_eq!(question.answer, OptionKey::E);

    assert!(question_by_id(0).is_none());
    assert!(question_by_id(11).is_none());
}

#[test]
fn validate_question_accepts_each_entry() {
    for question in QUESTION_CATALOG {
        validate_question(question).unwrap();
    }
}

#[test]
fn expected_answer_keys() {
    let expected = [
        (1, OptionKey::E),
        (2, OptionKey::C),
        (3, OptionKey::C),
        (4, OptionKey::C),
        (5, OptionKey::C),
        (6, OptionKey::E),
        (7, OptionKey::E),
        (8, OptionKey::F),
        (9, OptionKey::A),
        (10, OptionKey::A),
    ];
    for (id, key) in expected {
        assert_eq!(question_by_id(id).unwrap().answer, key, "question {id}");
    }
}
