// wellbeing check - ten statements, score is how many the user agrees with

use serde::Serialize;

pub const MAX_SCORE: f64 = 10.0;

pub const QUESTIONS: [&str; 10] = [
    "I've been feeling overwhelmed by school or homework lately.",
    "I've had trouble falling asleep or staying asleep.",
    "I often feel tired, even after resting.",
    "I've been feeling irritable or snapping at people.",
    "I find it hard to focus on things I used to enjoy.",
    "I've been worrying a lot about things I can't control.",
    "I've been spending less time with friends or family.",
    "I feel like I have too much on my plate.",
    "I've noticed changes in my appetite.",
    "I feel like nobody really gets what I'm going through.",
];

/// Which tone the feedback message takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizBand {
    /// score > 7
    Struggling,
    /// 4 <= score <= 7
    Journey,
    /// score < 4
    Thriving,
}

impl QuizBand {
    pub fn from_score(score: f64) -> Self {
        if score > 7.0 {
            QuizBand::Struggling
        } else if score >= 4.0 {
            QuizBand::Journey
        } else {
            QuizBand::Thriving
        }
    }
}

/// Pulls a score into `[0, 10]`. NaN counts as zero.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, MAX_SCORE)
    }
}

#[derive(Debug, Clone)]
pub struct Quiz {
    answers: Vec<bool>,
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}

impl Quiz {
    pub fn new() -> Self {
        Self {
            answers: Vec::with_capacity(QUESTIONS.len()),
        }
    }

    /// The statement waiting for an answer, if any.
    pub fn current(&self) -> Option<&'static str> {
        QUESTIONS.get(self.answers.len()).copied()
    }

    pub fn position(&self) -> usize {
        self.answers.len()
    }

    /// Records an answer. Returns false once every question is answered.
    pub fn answer(&mut self, agree: bool) -> bool {
        if self.is_complete() {
            return false;
        }
        self.answers.push(agree);
        true
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == QUESTIONS.len()
    }

    pub fn score(&self) -> f64 {
        self.answers.iter().filter(|&&a| a).count() as f64
    }

    pub fn reset(&mut self) {
        self.answers.clear();
    }
}
