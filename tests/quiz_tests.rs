// tests for the stress check

use zenvibe::core::quiz::{QUESTIONS, Quiz, QuizBand, clamp_score};

#[test]
fn test_band_boundaries() {
    assert_eq!(QuizBand::from_score(7.01), QuizBand::Struggling);
    assert_eq!(QuizBand::from_score(7.0), QuizBand::Journey);
    assert_eq!(QuizBand::from_score(4.0), QuizBand::Journey);
    assert_eq!(QuizBand::from_score(3.99), QuizBand::Thriving);
    assert_eq!(QuizBand::from_score(10.0), QuizBand::Struggling);
    assert_eq!(QuizBand::from_score(0.0), QuizBand::Thriving);
}

#[test]
fn test_clamp_score() {
    assert_eq!(clamp_score(11.0), 10.0);
    assert_eq!(clamp_score(-2.5), 0.0);
    assert_eq!(clamp_score(f64::NAN), 0.0);
    assert_eq!(clamp_score(6.5), 6.5);
}

#[test]
fn test_score_counts_agreements() {
    let mut quiz = Quiz::new();
    assert_eq!(quiz.current(), Some(QUESTIONS[0]));

    for i in 0..QUESTIONS.len() {
        assert!(quiz.answer(i < 8));
    }

    assert!(quiz.is_complete());
    assert_eq!(quiz.current(), None);
    assert_eq!(quiz.score(), 8.0);
    assert_eq!(QuizBand::from_score(quiz.score()), QuizBand::Struggling);
}

#[test]
fn test_extra_answers_are_ignored() {
    let mut quiz = Quiz::new();
    for _ in 0..QUESTIONS.len() {
        quiz.answer(false);
    }
    assert!(!quiz.answer(true));
    assert_eq!(quiz.score(), 0.0);
}

#[test]
fn test_reset_starts_over() {
    let mut quiz = Quiz::new();
    quiz.answer(true);
    quiz.answer(true);
    quiz.reset();
    assert_eq!(quiz.position(), 0);
    assert_eq!(quiz.score(), 0.0);
}
