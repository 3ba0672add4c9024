//! Comprehension progress - passage selection and model-answer visibility.

use anthology::ComprehensionPassage;

/// Mutable progress through a work's comprehension passages.
///
/// `shown` tracks which model answers of the current passage are visible.
/// The flags belong to one passage at a time: any passage selection wipes
/// them, including re-selecting the passage already open.
#[derive(Debug, Clone, Default)]
pub struct PassageProgress {
    passage: usize,
    shown: Vec<bool>,
}

impl PassageProgress {
    /// Fresh progress: first passage, no answers shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// 0-based index of the passage currently open.
    pub fn passage_index(&self) -> usize {
        self.passage
    }

    /// Open a passage by index, clamping into range, and hide every model
    /// answer.
    pub fn select(&mut self, passages: &[ComprehensionPassage], index: usize) {
        self.passage = match passages.len() {
            0 => 0,
            len => index.min(len - 1),
        };
        self.shown.clear();
    }

    /// Toggle the visibility of one question's model answer within the
    /// current passage. Ignored for out-of-range questions; returns whether
    /// anything changed.
    pub fn toggle(&mut self, passages: &[ComprehensionPassage], question: usize) -> bool {
        let Some(passage) = passages.get(self.passage) else {
            return false;
        };
        if question >= passage.questions.len() {
            return false;
        }
        if self.shown.len() < passage.questions.len() {
            self.shown.resize(passage.questions.len(), false);
        }
        self.shown[question] = !self.shown[question];
        true
    }

    /// Whether the model answer for `question` is currently visible.
    /// Unanswered and out-of-range questions read as hidden.
    pub fn is_shown(&self, question: usize) -> bool {
        self.shown.get(question).copied().unwrap_or(false)
    }

    /// Back to the first passage with everything hidden.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passages() -> Vec<ComprehensionPassage> {
        vec![
            ComprehensionPassage::new("p1", "First extract.")
                .with_question("Q1?", "A1.")
                .with_question("Q2?", "A2.")
                .with_question("Q3?", "A3."),
            ComprehensionPassage::new("p2", "Second extract.").with_question("Q1?", "A1."),
        ]
    }

    #[test]
    fn test_toggle_flips_independently() {
        let passages = passages();
        let mut progress = PassageProgress::new();

        assert!(!progress.is_shown(0));
        assert!(progress.toggle(&passages, 0));
        assert!(progress.toggle(&passages, 2));
        assert!(progress.is_shown(0));
        assert!(!progress.is_shown(1));
        assert!(progress.is_shown(2));

        // A second toggle hides again without touching the others.
        assert!(progress.toggle(&passages, 0));
        assert!(!progress.is_shown(0));
        assert!(progress.is_shown(2));
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let passages = passages();
        let mut progress = PassageProgress::new();

        assert!(!progress.toggle(&passages, 3));
        assert!(!progress.is_shown(3));
        assert!(!progress.toggle(&[], 0));
    }

    #[test]
    fn test_select_clamps_into_range() {
        let passages = passages();
        let mut progress = PassageProgress::new();

        progress.select(&passages, 1);
        assert_eq!(progress.passage_index(), 1);

        progress.select(&passages, 99);
        assert_eq!(progress.passage_index(), 1);

        progress.select(&[], 5);
        assert_eq!(progress.passage_index(), 0);
    }

    #[test]
    fn test_select_hides_all_answers() {
        let passages = passages();
        let mut progress = PassageProgress::new();

        progress.toggle(&passages, 0);
        progress.toggle(&passages, 1);
        progress.select(&passages, 1);
        assert!(!progress.is_shown(0));
        assert!(!progress.is_shown(1));
    }

    #[test]
    fn test_reselecting_same_passage_also_hides() {
        let passages = passages();
        let mut progress = PassageProgress::new();

        progress.toggle(&passages, 1);
        assert!(progress.is_shown(1));

        progress.select(&passages, 0);
        assert!(!progress.is_shown(1));
    }

    #[test]
    fn test_flags_follow_current_passage_length() {
        let passages = passages();
        let mut progress = PassageProgress::new();

        progress.select(&passages, 1);
        // The second passage has a single question.
        assert!(progress.toggle(&passages, 0));
        assert!(!progress.toggle(&passages, 1));
        assert!(progress.is_shown(0));
    }
}
