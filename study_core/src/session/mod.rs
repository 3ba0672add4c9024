//! Reading sessions - the navigator over the catalog.
//!
//! A session is an explicit state machine: a `View` tag plus progress
//! records for the quiz and comprehension work. The navigator stores the
//! open work's ID and plain indices, never references into the catalog;
//! callers pass the catalog into each operation.

mod comprehension;
mod quiz;

pub use comprehension::*;
pub use quiz::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use anthology::{
    Catalog, ComprehensionPassage, LineExplanation, LiteraryWork, Mcq, WorkId,
};

/// Unique identifier for a reading session, used to correlate log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The views a session can be in.
///
/// `Idle` means no work is open; the rest are the study views of the open
/// work. Which of them a work offers follows from its apparatus lists
/// being non-empty, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Idle,
    Overview,
    LineByLine,
    Quiz,
    Comprehension,
    Devices,
}

impl View {
    /// Whether this view is offered for `work`.
    pub fn offered_for(self, work: &LiteraryWork) -> bool {
        match self {
            View::Idle => false,
            View::Overview => true,
            View::LineByLine => work.has_line_explanations(),
            View::Quiz => work.has_quiz(),
            View::Comprehension => work.has_comprehension(),
            View::Devices => work.has_devices(),
        }
    }
}

/// Per-reader navigator over the catalog.
///
/// All operations run to completion synchronously and none of them can
/// fail: requests that make no sense in the current state are ignored
/// (the `bool` returns say whether anything changed) and indices clamp
/// into range. Opening a work drops every trace of the previous one.
#[derive(Debug, Clone)]
pub struct Navigator {
    session: SessionId,
    view: View,
    work: Option<WorkId>,
    quiz: QuizProgress,
    passages: PassageProgress,
    line: usize,
}

impl Navigator {
    /// Create an idle session with a fresh ID.
    pub fn new() -> Self {
        Self {
            session: SessionId::new(),
            view: View::Idle,
            work: None,
            quiz: QuizProgress::new(),
            passages: PassageProgress::new(),
            line: 0,
        }
    }

    /// This session's ID.
    pub fn session_id(&self) -> SessionId {
        self.session
    }

    /// The current view.
    pub fn view(&self) -> View {
        self.view
    }

    /// The open work, if any.
    pub fn current_work<'a>(&self, catalog: &'a Catalog) -> Option<&'a LiteraryWork> {
        self.work.as_ref().and_then(|id| catalog.get(id.as_str()))
    }

    /// Open a work and land on its overview.
    ///
    /// All progress from the previous selection is discarded, even when
    /// the same work is reopened. Unknown IDs are ignored; returns whether
    /// a work was opened.
    pub fn open(&mut self, catalog: &Catalog, id: &str) -> bool {
        let Some(work) = catalog.get(id) else {
            tracing::warn!(session = %self.session, id, "ignoring open of unknown work");
            return false;
        };
        self.reset_progress();
        self.work = Some(work.id.clone());
        self.view = View::Overview;
        tracing::info!(
            session = %self.session,
            work = %work.id,
            kind = work.kind.label(),
            "work opened"
        );
        true
    }

    /// Close the open work and return to `Idle`.
    pub fn close(&mut self) {
        self.reset_progress();
        self.work = None;
        self.view = View::Idle;
    }

    /// Switch to another view of the open work.
    ///
    /// Only views backed by content are selectable; `Idle` is reached
    /// through [`close`](Self::close), not here. Returns whether the view
    /// changed.
    pub fn select_view(&mut self, catalog: &Catalog, view: View) -> bool {
        let Some(work) = self.current_work(catalog) else {
            return false;
        };
        if !view.offered_for(work) {
            return false;
        }
        self.view = view;
        tracing::debug!(session = %self.session, ?view, "view selected");
        true
    }

    /// The views offered for the open work, overview first. Empty while
    /// idle.
    pub fn available_views(&self, catalog: &Catalog) -> Vec<View> {
        let Some(work) = self.current_work(catalog) else {
            return Vec::new();
        };
        [
            View::Overview,
            View::LineByLine,
            View::Quiz,
            View::Comprehension,
            View::Devices,
        ]
        .into_iter()
        .filter(|view| view.offered_for(work))
        .collect()
    }

    fn reset_progress(&mut self) {
        self.quiz.reset();
        self.passages.reset();
        self.line = 0;
    }

    // --- quiz ---------------------------------------------------------

    /// Answer the open work's current quiz question.
    pub fn answer(&mut self, catalog: &Catalog, choice: usize) -> bool {
        let Some(work) = self.current_work(catalog) else {
            return false;
        };
        self.quiz.answer(&work.mcqs, choice)
    }

    /// Move to the next quiz question once the current one is revealed.
    pub fn advance_question(&mut self, catalog: &Catalog) -> bool {
        let Some(work) = self.current_work(catalog) else {
            return false;
        };
        self.quiz.advance(&work.mcqs)
    }

    /// Whether the next-question control is enabled.
    pub fn can_advance(&self, catalog: &Catalog) -> bool {
        self.current_work(catalog)
            .map(|work| self.quiz.can_advance(&work.mcqs))
            .unwrap_or(false)
    }

    /// Restart the quiz from the first question; the view stays put.
    pub fn reset_quiz(&mut self) {
        self.quiz.reset();
    }

    /// The quiz score so far.
    pub fn score(&self) -> Score {
        self.quiz.score()
    }

    /// 0-based index of the current quiz question.
    pub fn question_index(&self) -> usize {
        self.quiz.question_index()
    }

    /// The option picked for the current question, if any.
    pub fn selected_answer(&self) -> Option<usize> {
        self.quiz.selected()
    }

    /// Whether the current question's answer is revealed.
    pub fn is_revealed(&self) -> bool {
        self.quiz.is_revealed()
    }

    /// The quiz question currently shown, if the work has one.
    pub fn current_question<'a>(&self, catalog: &'a Catalog) -> Option<&'a Mcq> {
        self.current_work(catalog)?.mcqs.get(self.quiz.question_index())
    }

    // --- line-by-line -------------------------------------------------

    /// 0-based index of the paraphrase card currently shown.
    pub fn line_index(&self) -> usize {
        self.line
    }

    /// Jump to a paraphrase card, clamped into range.
    pub fn go_to_line(&mut self, catalog: &Catalog, index: usize) {
        let Some(work) = self.current_work(catalog) else {
            return;
        };
        self.line = clamp_index(index as isize, work.line_explanations.len());
    }

    /// Step forwards or backwards through the cards, clamped at both ends.
    pub fn step_line(&mut self, catalog: &Catalog, delta: isize) {
        let Some(work) = self.current_work(catalog) else {
            return;
        };
        self.line = clamp_index(self.line as isize + delta, work.line_explanations.len());
    }

    /// The paraphrase card currently shown, if the work has any.
    pub fn current_line<'a>(&self, catalog: &'a Catalog) -> Option<&'a LineExplanation> {
        self.current_work(catalog)?.line_explanations.get(self.line)
    }

    // --- comprehension ------------------------------------------------

    /// 0-based index of the open comprehension passage.
    pub fn passage_index(&self) -> usize {
        self.passages.passage_index()
    }

    /// Open a comprehension passage, clamped into range. Every model
    /// answer is hidden again, even when re-selecting the open passage.
    pub fn select_passage(&mut self, catalog: &Catalog, index: usize) {
        let Some(work) = self.current_work(catalog) else {
            return;
        };
        self.passages.select(&work.comprehension_passages, index);
    }

    /// Show or hide the model answer for one question of the open passage.
    pub fn toggle_answer(&mut self, catalog: &Catalog, question: usize) -> bool {
        let Some(work) = self.current_work(catalog) else {
            return false;
        };
        self.passages.toggle(&work.comprehension_passages, question)
    }

    /// Whether a model answer is currently visible.
    pub fn is_answer_shown(&self, question: usize) -> bool {
        self.passages.is_shown(question)
    }

    /// The open comprehension passage, if the work has any.
    pub fn current_passage<'a>(&self, catalog: &'a Catalog) -> Option<&'a ComprehensionPassage> {
        self.current_work(catalog)?
            .comprehension_passages
            .get(self.passages.passage_index())
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_index(index: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.clamp(0, len as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use anthology::{LiteraryDevice, WorkKind};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            LiteraryWork::new("the-tyger", "The Tyger", WorkKind::Poem)
                .with_author("William Blake")
                .with_summary("A fearful symmetry.")
                .with_themes(["Creation", "Awe"])
                .with_line_explanation(LineExplanation::new("Lines 1-4", "Tyger Tyger...", "..."))
                .with_line_explanation(LineExplanation::new("Lines 5-8", "In what distant...", "..."))
                .with_line_explanation(LineExplanation::new("Lines 9-12", "And what shoulder...", "..."))
                .with_mcq(Mcq::new("First?", ["a", "b", "c"], 1))
                .with_mcq(Mcq::new("Second?", ["a", "b"], 0))
                .with_mcq(Mcq::new("Third?", ["a", "b", "c", "d"], 2))
                .with_passage(
                    ComprehensionPassage::new("tyger-p1", "Tyger Tyger, burning bright")
                        .with_question("Q1?", "A1.")
                        .with_question("Q2?", "A2.")
                        .with_question("Q3?", "A3."),
                )
                .with_passage(
                    ComprehensionPassage::new("tyger-p2", "What immortal hand or eye")
                        .with_question("Q1?", "A1."),
                )
                .with_device(LiteraryDevice::new("Alliteration", "burning bright", "...")),
            LiteraryWork::new("westminster-bridge", "Upon Westminster Bridge", WorkKind::Poem)
                .with_author("William Wordsworth")
                .with_summary("The sleeping city at dawn.")
                .with_themes(["The city", "Stillness"]),
            LiteraryWork::new("the-last-leaf", "The Last Leaf", WorkKind::Story)
                .with_author("O. Henry")
                .with_summary("An old painter's masterpiece.")
                .with_themes(["Sacrifice", "Hope"])
                .with_mcq(Mcq::new("Only?", ["a", "b"], 0)),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_session_is_idle() {
        let catalog = catalog();
        let nav = Navigator::new();

        assert_eq!(nav.view(), View::Idle);
        assert!(nav.current_work(&catalog).is_none());
        assert!(nav.available_views(&catalog).is_empty());
        assert_eq!(nav.score(), Score::default());
    }

    #[test]
    fn test_open_lands_on_overview() {
        let catalog = catalog();
        let mut nav = Navigator::new();

        assert!(nav.open(&catalog, "the-tyger"));
        assert_eq!(nav.view(), View::Overview);
        assert_eq!(nav.current_work(&catalog).unwrap().title, "The Tyger");
    }

    #[test]
    fn test_open_unknown_work_is_ignored() {
        let catalog = catalog();
        let mut nav = Navigator::new();

        assert!(!nav.open(&catalog, "no-such-work"));
        assert_eq!(nav.view(), View::Idle);
        assert!(nav.current_work(&catalog).is_none());

        // An existing selection survives a bad open.
        nav.open(&catalog, "the-tyger");
        assert!(!nav.open(&catalog, "no-such-work"));
        assert_eq!(nav.current_work(&catalog).unwrap().id.as_str(), "the-tyger");
    }

    #[test]
    fn test_available_views_follow_content() {
        let catalog = catalog();
        let mut nav = Navigator::new();

        nav.open(&catalog, "the-tyger");
        assert_eq!(
            nav.available_views(&catalog),
            vec![
                View::Overview,
                View::LineByLine,
                View::Quiz,
                View::Comprehension,
                View::Devices
            ]
        );

        nav.open(&catalog, "westminster-bridge");
        assert_eq!(nav.available_views(&catalog), vec![View::Overview]);

        nav.open(&catalog, "the-last-leaf");
        assert_eq!(nav.available_views(&catalog), vec![View::Overview, View::Quiz]);
    }

    #[test]
    fn test_select_view_requires_content() {
        let catalog = catalog();
        let mut nav = Navigator::new();

        // Nothing selectable while idle.
        assert!(!nav.select_view(&catalog, View::Quiz));

        nav.open(&catalog, "westminster-bridge");
        assert!(!nav.select_view(&catalog, View::Quiz));
        assert!(!nav.select_view(&catalog, View::LineByLine));
        assert!(!nav.select_view(&catalog, View::Idle));
        assert_eq!(nav.view(), View::Overview);

        nav.open(&catalog, "the-tyger");
        assert!(nav.select_view(&catalog, View::Quiz));
        assert_eq!(nav.view(), View::Quiz);
        assert!(nav.select_view(&catalog, View::Overview));
        assert_eq!(nav.view(), View::Overview);
    }

    #[test]
    fn test_close_returns_to_idle() {
        let catalog = catalog();
        let mut nav = Navigator::new();

        nav.open(&catalog, "the-tyger");
        nav.select_view(&catalog, View::Quiz);
        nav.answer(&catalog, 1);

        nav.close();
        assert_eq!(nav.view(), View::Idle);
        assert!(nav.current_work(&catalog).is_none());
        assert_eq!(nav.score(), Score::default());
        assert!(!nav.answer(&catalog, 0));
    }

    #[test]
    fn test_full_quiz_walkthrough() {
        let catalog = catalog();
        let mut nav = Navigator::new();

        nav.open(&catalog, "the-tyger");
        nav.select_view(&catalog, View::Quiz);

        assert_eq!(nav.current_question(&catalog).unwrap().question, "First?");
        assert!(nav.answer(&catalog, 1));
        assert!(nav.is_revealed());
        assert_eq!(nav.selected_answer(), Some(1));
        assert_eq!(nav.score(), Score { correct: 1, total: 1 });

        assert!(nav.advance_question(&catalog));
        assert_eq!(nav.question_index(), 1);
        assert!(!nav.is_revealed());
        assert!(nav.answer(&catalog, 0));
        assert_eq!(nav.score(), Score { correct: 2, total: 2 });

        assert!(nav.advance_question(&catalog));
        assert!(nav.answer(&catalog, 0)); // wrong, key is 2
        assert_eq!(nav.score(), Score { correct: 2, total: 3 });

        // Last question: revealed but nowhere to advance.
        assert!(!nav.can_advance(&catalog));
        assert!(!nav.advance_question(&catalog));
        assert_eq!(nav.question_index(), 2);

        nav.reset_quiz();
        assert_eq!(nav.question_index(), 0);
        assert_eq!(nav.score(), Score::default());
        assert_eq!(nav.view(), View::Quiz);
    }

    #[test]
    fn test_answer_cannot_double_count() {
        let catalog = catalog();
        let mut nav = Navigator::new();

        nav.open(&catalog, "the-tyger");
        assert!(nav.answer(&catalog, 1));
        assert!(!nav.answer(&catalog, 1));
        assert!(!nav.answer(&catalog, 0));
        assert_eq!(nav.score(), Score { correct: 1, total: 1 });
        assert_eq!(nav.selected_answer(), Some(1));
    }

    #[test]
    fn test_advance_requires_reveal_through_navigator() {
        let catalog = catalog();
        let mut nav = Navigator::new();

        nav.open(&catalog, "the-tyger");
        assert!(!nav.can_advance(&catalog));
        assert!(!nav.advance_question(&catalog));
        assert_eq!(nav.question_index(), 0);
    }

    #[test]
    fn test_opening_a_work_resets_everything() {
        let catalog = catalog();
        let mut nav = Navigator::new();

        nav.open(&catalog, "the-tyger");
        nav.select_view(&catalog, View::Quiz);
        nav.answer(&catalog, 1);
        nav.advance_question(&catalog);
        nav.go_to_line(&catalog, 2);
        nav.select_passage(&catalog, 1);
        nav.toggle_answer(&catalog, 0);

        nav.open(&catalog, "the-last-leaf");
        assert_eq!(nav.view(), View::Overview);
        assert_eq!(nav.score(), Score::default());
        assert_eq!(nav.question_index(), 0);
        assert_eq!(nav.selected_answer(), None);
        assert_eq!(nav.line_index(), 0);
        assert_eq!(nav.passage_index(), 0);
        assert!(!nav.is_answer_shown(0));
    }

    #[test]
    fn test_reopening_same_work_starts_fresh() {
        let catalog = catalog();
        let mut nav = Navigator::new();

        // Leave the quiz mid-progress, browse elsewhere, come back.
        nav.open(&catalog, "the-tyger");
        nav.answer(&catalog, 1);
        nav.advance_question(&catalog);
        nav.answer(&catalog, 1);
        assert_eq!(nav.score(), Score { correct: 1, total: 2 });

        nav.open(&catalog, "the-last-leaf");
        nav.open(&catalog, "the-tyger");
        assert_eq!(nav.score(), Score::default());
        assert_eq!(nav.question_index(), 0);
        assert_eq!(nav.view(), View::Overview);
    }

    #[test]
    fn test_line_navigation_clamps() {
        let catalog = catalog();
        let mut nav = Navigator::new();

        nav.open(&catalog, "the-tyger");
        assert_eq!(nav.current_line(&catalog).unwrap().lines, "Lines 1-4");

        nav.step_line(&catalog, -1);
        assert_eq!(nav.line_index(), 0);

        nav.step_line(&catalog, 1);
        assert_eq!(nav.line_index(), 1);

        nav.step_line(&catalog, 100);
        assert_eq!(nav.line_index(), 2);
        assert_eq!(nav.current_line(&catalog).unwrap().lines, "Lines 9-12");

        nav.go_to_line(&catalog, 99);
        assert_eq!(nav.line_index(), 2);
        nav.go_to_line(&catalog, 1);
        assert_eq!(nav.line_index(), 1);

        // A work with no cards pins the index at zero.
        nav.open(&catalog, "the-last-leaf");
        nav.step_line(&catalog, 5);
        assert_eq!(nav.line_index(), 0);
        assert!(nav.current_line(&catalog).is_none());
    }

    #[test]
    fn test_passage_selection_hides_answers() {
        let catalog = catalog();
        let mut nav = Navigator::new();

        nav.open(&catalog, "the-tyger");
        nav.select_view(&catalog, View::Comprehension);
        assert_eq!(nav.current_passage(&catalog).unwrap().id, "tyger-p1");

        assert!(nav.toggle_answer(&catalog, 0));
        assert!(nav.toggle_answer(&catalog, 2));
        assert!(nav.is_answer_shown(0));

        nav.select_passage(&catalog, 1);
        assert_eq!(nav.current_passage(&catalog).unwrap().id, "tyger-p2");
        assert!(!nav.is_answer_shown(0));
        assert!(!nav.is_answer_shown(2));

        // Out-of-range selection clamps to the last passage.
        nav.select_passage(&catalog, 42);
        assert_eq!(nav.passage_index(), 1);

        // Re-selecting the open passage still hides everything.
        nav.toggle_answer(&catalog, 0);
        nav.select_passage(&catalog, 1);
        assert!(!nav.is_answer_shown(0));
    }

    #[test]
    fn test_quiz_and_comprehension_do_not_interfere() {
        let catalog = catalog();
        let mut nav = Navigator::new();

        nav.open(&catalog, "the-tyger");
        nav.answer(&catalog, 1);
        nav.toggle_answer(&catalog, 0);

        assert_eq!(nav.score(), Score { correct: 1, total: 1 });
        assert!(nav.is_answer_shown(0));

        nav.select_passage(&catalog, 0);
        // Hiding model answers never touches the quiz score.
        assert!(!nav.is_answer_shown(0));
        assert_eq!(nav.score(), Score { correct: 1, total: 1 });
    }

    #[test]
    fn test_operations_without_a_work_are_inert() {
        let catalog = catalog();
        let mut nav = Navigator::new();

        assert!(!nav.answer(&catalog, 0));
        assert!(!nav.advance_question(&catalog));
        assert!(!nav.toggle_answer(&catalog, 0));
        nav.go_to_line(&catalog, 3);
        nav.step_line(&catalog, -2);
        nav.select_passage(&catalog, 1);

        assert_eq!(nav.line_index(), 0);
        assert_eq!(nav.passage_index(), 0);
        assert!(nav.current_question(&catalog).is_none());
        assert!(nav.current_passage(&catalog).is_none());
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        let a = Navigator::new();
        let b = Navigator::new();
        assert_ne!(a.session_id(), b.session_id());
    }
}
