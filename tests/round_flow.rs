//! Whole rounds driven through the public API

use wordle_game::core::{EvaluationRule, Feedback, Word};
use wordle_game::game::{Action, FixedIndex, GuessError, Outcome, Phase, RoundController, Step};
use wordle_game::wordlists::{Dictionary, TargetPool};

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|w| Word::new(w).unwrap()).collect()
}

fn controller(
    dictionary: &[&str],
    targets: &[&str],
    indices: &[usize],
) -> RoundController<FixedIndex> {
    controller_with_rule(dictionary, targets, indices, EvaluationRule::Lenient)
}

fn controller_with_rule(
    dictionary: &[&str],
    targets: &[&str],
    indices: &[usize],
    rule: EvaluationRule,
) -> RoundController<FixedIndex> {
    RoundController::new(
        Dictionary::from_words(words(dictionary)),
        TargetPool::new(words(targets)).unwrap(),
        FixedIndex::new(indices.to_vec()),
        rule,
    )
}

fn type_word(round: &mut RoundController<FixedIndex>, word: &str) {
    for c in word.chars() {
        round.handle(Action::Letter(c));
    }
}

/// Type, submit and finish the reveal; returns the committed outcome
fn play(round: &mut RoundController<FixedIndex>, word: &str) -> Outcome {
    type_word(round, word);
    match round.handle(Action::Submit) {
        Step::Evaluating(_) => {}
        other => panic!("expected evaluation for {word}, got {other:?}"),
    }
    match round.finish_feedback() {
        Step::Resolved(outcome) => outcome,
        other => panic!("expected resolution, got {other:?}"),
    }
}

const DICT: [&str; 10] = [
    "crane", "slate", "mound", "fight", "brick", "jumpy", "spoke", "apple", "dance", "geese",
];

#[test]
fn win_on_third_guess() {
    let mut round = controller(&DICT, &["crane"], &[0]);

    assert_eq!(play(&mut round, "slate"), Outcome::InProgress);
    assert_eq!(play(&mut round, "dance"), Outcome::InProgress);
    assert_eq!(play(&mut round, "crane"), Outcome::Won);

    let state = round.state();
    assert_eq!(state.history().len(), 3);
    assert_eq!(state.phase(), &Phase::Won);
    assert!(state.history()[2].is_perfect());
}

#[test]
fn six_misses_lose_and_lock_the_board() {
    let mut round = controller(&DICT, &["crane"], &[0]);
    let misses = ["slate", "mound", "fight", "brick", "jumpy"];
    for word in misses {
        assert_eq!(play(&mut round, word), Outcome::InProgress);
    }
    assert_eq!(play(&mut round, "spoke"), Outcome::Lost);
    assert_eq!(round.state().phase(), &Phase::Lost);

    assert_eq!(round.handle(Action::Letter('c')), Step::Ignored);
    assert_eq!(round.handle(Action::Submit), Step::Ignored);
    assert_eq!(round.state().history().len(), 6);
}

#[test]
fn apple_survives_six_wrong_guesses() {
    let mut round = controller(&DICT, &["apple"], &[0]);

    type_word(&mut round, "ab");
    assert_eq!(
        round.handle(Action::Submit),
        Step::Rejected(GuessError::IncompleteGuess { letters: 2 })
    );
    round.handle(Action::Delete);
    round.handle(Action::Delete);

    for word in ["crane", "slate", "mound", "fight", "brick"] {
        assert_eq!(play(&mut round, word), Outcome::InProgress);
    }
    assert_eq!(play(&mut round, "jumpy"), Outcome::Lost);
    assert_eq!(round.state().outcome(), Outcome::Lost);
}

#[test]
fn winning_on_the_last_row_is_a_win() {
    let mut round = controller(&DICT, &["crane"], &[0]);
    for word in ["slate", "mound", "fight", "brick", "jumpy"] {
        play(&mut round, word);
    }
    assert_eq!(play(&mut round, "crane"), Outcome::Won);
}

#[test]
fn rejected_guesses_leave_history_alone() {
    let mut round = controller(&DICT, &["crane"], &[0]);

    type_word(&mut round, "cra");
    assert_eq!(
        round.handle(Action::Submit),
        Step::Rejected(GuessError::IncompleteGuess { letters: 3 })
    );

    type_word(&mut round, "zz");
    assert_eq!(
        round.handle(Action::Submit),
        Step::Rejected(GuessError::NotInDictionary {
            word: "crazz".to_string()
        })
    );

    assert!(round.state().history().is_empty());
    assert_eq!(round.state().current().as_str(), "crazz");
    assert_eq!(round.state().phase(), &Phase::Active);
}

#[test]
fn target_outside_dictionary_is_still_guessable() {
    let mut round = controller(&["slate"], &["crane"], &[0]);
    assert_eq!(play(&mut round, "crane"), Outcome::Won);
}

fn feedback_for(rule: EvaluationRule, guess: &str, target: &str) -> [Feedback; 5] {
    let mut round = controller_with_rule(&DICT, &[target], &[0], rule);
    type_word(&mut round, guess);
    let Step::Evaluating(evaluated) = round.handle(Action::Submit) else {
        panic!("{guess} should be accepted");
    };
    *evaluated.evaluation().feedback()
}

#[test]
fn repeated_letters_depend_on_the_rule() {
    use Feedback::{Absent, Correct, Present};

    // One 'e' in the target, three in the guess
    assert_eq!(
        feedback_for(EvaluationRule::Lenient, "geese", "crane"),
        [Absent, Present, Present, Absent, Correct]
    );
    assert_eq!(
        feedback_for(EvaluationRule::Standard, "geese", "crane"),
        [Absent, Absent, Absent, Absent, Correct]
    );
}

#[test]
fn keyboard_keeps_the_best_feedback() {
    let mut round = controller(&DICT, &["crane"], &[0]);
    play(&mut round, "dance");
    assert_eq!(round.state().letters().get(b'a'), Some(Feedback::Present));
    assert_eq!(round.state().letters().get(b'c'), Some(Feedback::Present));
    assert_eq!(round.state().letters().get(b'e'), Some(Feedback::Correct));
    assert_eq!(round.state().letters().get(b'd'), Some(Feedback::Absent));

    play(&mut round, "crane");
    assert_eq!(round.state().letters().get(b'a'), Some(Feedback::Correct));
    assert_eq!(round.state().letters().get(b'c'), Some(Feedback::Correct));
    assert_eq!(round.state().letters().get(b'd'), Some(Feedback::Absent));
    assert_eq!(round.state().letters().get(b'z'), None);
}

#[test]
fn new_word_draws_again_and_reset_keeps_the_target() {
    let mut round = controller(&DICT, &["crane", "slate"], &[0, 1]);
    assert_eq!(round.state().target().as_str(), "crane");

    play(&mut round, "mound");
    assert_eq!(round.handle(Action::Reset), Step::Restarted);
    assert_eq!(round.state().target().as_str(), "crane");
    assert!(round.state().history().is_empty());
    assert!(round.state().letters().is_empty());

    play(&mut round, "crane");
    assert_eq!(round.handle(Action::NewWord), Step::Restarted);
    assert_eq!(round.state().target().as_str(), "slate");
    assert_eq!(round.state().phase(), &Phase::Active);
}

#[test]
fn evaluating_blocks_every_action() {
    let mut round = controller(&DICT, &["crane"], &[0]);
    type_word(&mut round, "slate");
    assert!(matches!(round.handle(Action::Submit), Step::Evaluating(_)));

    for action in [
        Action::Letter('x'),
        Action::Delete,
        Action::Submit,
        Action::NewWord,
        Action::Reset,
    ] {
        assert_eq!(round.handle(action), Step::Ignored);
    }
    assert!(round.state().history().is_empty());
    assert_eq!(round.finish_feedback(), Step::Resolved(Outcome::InProgress));
    assert_eq!(round.state().history().len(), 1);
}
