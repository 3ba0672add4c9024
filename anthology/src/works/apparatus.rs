//! Study apparatus attached to works: explanations, questions, and notes.

use serde::{Deserialize, Serialize};

/// A stretch of the text paired with its paraphrase.
///
/// Works like a flashcard: the reader steps through these one at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineExplanation {
    /// Which lines the card covers, e.g. "Lines 1-6".
    pub lines: String,
    /// The quoted excerpt itself.
    pub text: String,
    /// Plain-language explanation of the excerpt.
    pub explanation: String,
}

impl LineExplanation {
    /// Create an explanation card for a stretch of lines.
    pub fn new(
        lines: impl Into<String>,
        text: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            lines: lines.into(),
            text: text.into(),
            explanation: explanation.into(),
        }
    }
}

/// A multiple-choice question with exactly one correct option.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mcq {
    pub question: String,
    pub options: Vec<String>,
    /// 0-based index into `options`.
    #[serde(alias = "correctAnswer")]
    pub correct_answer_index: usize,
    /// Shown after the answer is revealed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Mcq {
    /// Create a question from its options and the index of the right one.
    pub fn new(
        question: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_answer_index: usize,
    ) -> Self {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer_index,
            explanation: None,
        }
    }

    /// Attach a post-reveal explanation.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Check a chosen option against the answer key.
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer_index
    }
}

/// An extract from the text paired with open-response questions.
///
/// These are never scored; each question carries a model answer the reader
/// can show or hide while writing their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComprehensionPassage {
    /// Slug identifying the passage within its work.
    pub id: String,
    pub extract: String,
    pub questions: Vec<ComprehensionQuestion>,
}

impl ComprehensionPassage {
    /// Create a passage with no questions yet.
    pub fn new(id: impl Into<String>, extract: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extract: extract.into(),
            questions: Vec::new(),
        }
    }

    /// Add an open-response question and its model answer.
    pub fn with_question(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.questions.push(ComprehensionQuestion {
            question: question.into(),
            answer: answer.into(),
        });
        self
    }
}

/// One open-response question and its model answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComprehensionQuestion {
    pub question: String,
    pub answer: String,
}

/// A literary device with an example drawn from the text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteraryDevice {
    /// Name of the device, e.g. "Simile".
    pub device: String,
    /// The line or phrase where it appears.
    pub example: String,
    /// What the device achieves in context.
    pub explanation: String,
}

impl LiteraryDevice {
    /// Create a device note.
    pub fn new(
        device: impl Into<String>,
        example: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            device: device.into(),
            example: example.into(),
            explanation: explanation.into(),
        }
    }
}

/// A character sketch for prose works.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterNote {
    pub name: String,
    pub description: String,
}

impl CharacterNote {
    /// Create a character sketch.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mcq_answer_key() {
        let mcq = Mcq::new("2 + 2?", ["3", "4", "5"], 1);
        assert!(mcq.is_correct(1));
        assert!(!mcq.is_correct(0));
        assert!(!mcq.is_correct(2));
        assert!(mcq.explanation.is_none());
    }

    #[test]
    fn test_mcq_accepts_legacy_answer_key_field() {
        // Older records used "correctAnswer" for the answer index.
        let mcq: Mcq = serde_json::from_str(
            r#"{"question": "Q?", "options": ["a", "b"], "correctAnswer": 1}"#,
        )
        .unwrap();
        assert_eq!(mcq.correct_answer_index, 1);

        let mcq: Mcq = serde_json::from_str(
            r#"{"question": "Q?", "options": ["a", "b"], "correctAnswerIndex": 0}"#,
        )
        .unwrap();
        assert_eq!(mcq.correct_answer_index, 0);
    }

    #[test]
    fn test_passage_builder() {
        let passage = ComprehensionPassage::new("p1", "It was a dark and stormy night.")
            .with_question("What was the weather?", "Dark and stormy.")
            .with_question("What time of day is it?", "Night.");

        assert_eq!(passage.id, "p1");
        assert_eq!(passage.questions.len(), 2);
        assert_eq!(passage.questions[1].answer, "Night.");
    }
}
