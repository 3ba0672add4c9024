//! Quiz progress - one attempt over a work's question bank.

use anthology::Mcq;
use serde::{Deserialize, Serialize};

/// Running score for a quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// Mutable progress through a question bank.
///
/// The record holds indices and flags only; the questions themselves are
/// passed into every call and never stored. A question is scored at the
/// moment it is revealed, and exactly once: answering again while revealed
/// is ignored, so the score can never double-count.
#[derive(Debug, Clone, Default)]
pub struct QuizProgress {
    question: usize,
    selected: Option<usize>,
    revealed: bool,
    score: Score,
}

impl QuizProgress {
    /// Fresh progress: first question, nothing selected, score 0/0.
    pub fn new() -> Self {
        Self::default()
    }

    /// 0-based index of the question currently shown.
    pub fn question_index(&self) -> usize {
        self.question
    }

    /// The option picked for the current question, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the current question's answer has been revealed.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// The score so far.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Answer the current question with the given option.
    ///
    /// Records the choice, reveals the answer and updates the score.
    /// Ignored if the question is already revealed or the choice is out of
    /// range; returns whether anything changed.
    pub fn answer(&mut self, mcqs: &[Mcq], choice: usize) -> bool {
        if self.revealed {
            return false;
        }
        let Some(mcq) = mcqs.get(self.question) else {
            return false;
        };
        if choice >= mcq.options.len() {
            tracing::warn!(
                question = self.question,
                choice,
                options = mcq.options.len(),
                "ignoring out-of-range answer"
            );
            return false;
        }
        self.selected = Some(choice);
        self.revealed = true;
        self.score.record(mcq.is_correct(choice));
        true
    }

    /// Move on to the next question once the current one is revealed.
    ///
    /// A no-op before reveal and on the last question; returns whether the
    /// index moved.
    pub fn advance(&mut self, mcqs: &[Mcq]) -> bool {
        if !self.can_advance(mcqs) {
            return false;
        }
        self.question += 1;
        self.selected = None;
        self.revealed = false;
        true
    }

    /// Whether a next-question move is currently possible.
    pub fn can_advance(&self, mcqs: &[Mcq]) -> bool {
        self.revealed && self.question + 1 < mcqs.len()
    }

    /// Start the attempt over from the first question with a 0/0 score.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> Vec<Mcq> {
        vec![
            Mcq::new("First?", ["a", "b", "c"], 1),
            Mcq::new("Second?", ["a", "b"], 0),
            Mcq::new("Third?", ["a", "b", "c", "d"], 2),
        ]
    }

    #[test]
    fn test_answer_reveals_and_scores_once() {
        let bank = bank();
        let mut quiz = QuizProgress::new();

        assert!(quiz.answer(&bank, 1));
        assert!(quiz.is_revealed());
        assert_eq!(quiz.selected(), Some(1));
        assert_eq!(quiz.score(), Score { correct: 1, total: 1 });

        // Re-answering a revealed question changes nothing.
        assert!(!quiz.answer(&bank, 0));
        assert!(!quiz.answer(&bank, 1));
        assert_eq!(quiz.selected(), Some(1));
        assert_eq!(quiz.score(), Score { correct: 1, total: 1 });
    }

    #[test]
    fn test_wrong_answer_counts_total_only() {
        let bank = bank();
        let mut quiz = QuizProgress::new();

        quiz.answer(&bank, 0);
        assert_eq!(quiz.score(), Score { correct: 0, total: 1 });
    }

    #[test]
    fn test_out_of_range_choice_is_ignored() {
        let bank = bank();
        let mut quiz = QuizProgress::new();

        assert!(!quiz.answer(&bank, 3));
        assert!(!quiz.is_revealed());
        assert_eq!(quiz.selected(), None);
        assert_eq!(quiz.score(), Score::default());

        // The boundary option itself is valid.
        assert!(quiz.answer(&bank, 2));
    }

    #[test]
    fn test_advance_requires_reveal() {
        let bank = bank();
        let mut quiz = QuizProgress::new();

        assert!(!quiz.can_advance(&bank));
        assert!(!quiz.advance(&bank));
        assert_eq!(quiz.question_index(), 0);

        quiz.answer(&bank, 1);
        assert!(quiz.can_advance(&bank));
        assert!(quiz.advance(&bank));
        assert_eq!(quiz.question_index(), 1);
        assert!(!quiz.is_revealed());
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn test_advance_stops_at_last_question() {
        let bank = bank();
        let mut quiz = QuizProgress::new();

        quiz.answer(&bank, 1);
        quiz.advance(&bank);
        quiz.answer(&bank, 0);
        quiz.advance(&bank);
        quiz.answer(&bank, 2);

        // Revealed, but there is nowhere to go.
        assert_eq!(quiz.question_index(), 2);
        assert!(!quiz.can_advance(&bank));
        assert!(!quiz.advance(&bank));
        assert_eq!(quiz.question_index(), 2);
        assert_eq!(quiz.score(), Score { correct: 3, total: 3 });
    }

    #[test]
    fn test_empty_bank_is_inert() {
        let mut quiz = QuizProgress::new();

        assert!(!quiz.answer(&[], 0));
        assert!(!quiz.advance(&[]));
        assert_eq!(quiz.question_index(), 0);
        assert_eq!(quiz.score(), Score::default());
    }

    #[test]
    fn test_reset_clears_everything() {
        let bank = bank();
        let mut quiz = QuizProgress::new();

        quiz.answer(&bank, 1);
        quiz.advance(&bank);
        quiz.answer(&bank, 1);
        assert_eq!(quiz.score(), Score { correct: 1, total: 2 });

        quiz.reset();
        assert_eq!(quiz.question_index(), 0);
        assert_eq!(quiz.selected(), None);
        assert!(!quiz.is_revealed());
        assert_eq!(quiz.score(), Score { correct: 0, total: 0 });
    }

    #[test]
    fn test_correct_never_exceeds_total() {
        let bank = bank();
        // Every possible answer sequence over the bank keeps the sum
        // invariant; spot-check all choices at each position.
        for choices in [[0, 0, 0], [1, 0, 2], [2, 1, 3], [1, 1, 1]] {
            let mut quiz = QuizProgress::new();
            for choice in choices {
                quiz.answer(&bank, choice);
                let score = quiz.score();
                assert!(score.correct <= score.total);
                assert!(score.total <= bank.len() as u32);
                quiz.advance(&bank);
            }
        }
    }

    #[test]
    fn test_score_display() {
        let mut quiz = QuizProgress::new();
        let bank = bank();
        quiz.answer(&bank, 1);
        assert_eq!(quiz.score().to_string(), "1/1");
        assert_eq!(Score::default().to_string(), "0/0");
    }
}
