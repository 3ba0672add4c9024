//! The literary work record itself.

use serde::{Deserialize, Serialize};

use super::{
    CharacterNote, ComprehensionPassage, LineExplanation, LiteraryDevice, Mcq, WorkId, WorkKind,
};

/// A poem or short story together with its study apparatus.
///
/// The serialized form follows the original content schema (camelCase keys,
/// `type` for the kind) so published study records round-trip unchanged.
/// Every apparatus list may be empty; which study views a work offers is
/// derived from which lists are populated, nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteraryWork {
    pub id: WorkId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "type")]
    pub kind: WorkKind,

    /// Short orientation paragraph shown wherever the work is listed.
    pub summary: String,

    /// Longer treatment for the overview page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_summary: Option<String>,

    #[serde(default)]
    pub themes: Vec<String>,

    #[serde(default)]
    pub key_points: Vec<String>,

    /// Stanza-by-stanza (or passage-by-passage) paraphrase cards.
    #[serde(default)]
    pub line_explanations: Vec<LineExplanation>,

    /// The quiz question bank.
    #[serde(default)]
    pub mcqs: Vec<Mcq>,

    /// Extracts with open-response questions.
    #[serde(default)]
    pub comprehension_passages: Vec<ComprehensionPassage>,

    #[serde(default)]
    pub literary_devices: Vec<LiteraryDevice>,

    /// Character sketches, usually only for prose.
    #[serde(default)]
    pub characters: Vec<CharacterNote>,

    #[serde(default)]
    pub important_quotes: Vec<String>,
}

impl LiteraryWork {
    /// Create a bare work record with an empty apparatus.
    pub fn new(id: impl Into<WorkId>, title: impl Into<String>, kind: WorkKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: None,
            kind,
            summary: String::new(),
            detailed_summary: None,
            themes: Vec::new(),
            key_points: Vec::new(),
            line_explanations: Vec::new(),
            mcqs: Vec::new(),
            comprehension_passages: Vec::new(),
            literary_devices: Vec::new(),
            characters: Vec::new(),
            important_quotes: Vec::new(),
        }
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the short summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the longer overview treatment.
    pub fn with_detailed_summary(mut self, summary: impl Into<String>) -> Self {
        self.detailed_summary = Some(summary.into());
        self
    }

    /// Add themes.
    pub fn with_themes(mut self, themes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.themes.extend(themes.into_iter().map(Into::into));
        self
    }

    /// Add key points for the overview page.
    pub fn with_key_points(mut self, points: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.key_points.extend(points.into_iter().map(Into::into));
        self
    }

    /// Add a paraphrase card.
    pub fn with_line_explanation(mut self, card: LineExplanation) -> Self {
        self.line_explanations.push(card);
        self
    }

    /// Add a quiz question.
    pub fn with_mcq(mut self, mcq: Mcq) -> Self {
        self.mcqs.push(mcq);
        self
    }

    /// Add a comprehension passage.
    pub fn with_passage(mut self, passage: ComprehensionPassage) -> Self {
        self.comprehension_passages.push(passage);
        self
    }

    /// Add a literary device note.
    pub fn with_device(mut self, device: LiteraryDevice) -> Self {
        self.literary_devices.push(device);
        self
    }

    /// Add a character sketch.
    pub fn with_character(mut self, character: CharacterNote) -> Self {
        self.characters.push(character);
        self
    }

    /// Add important quotes.
    pub fn with_quotes(mut self, quotes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.important_quotes.extend(quotes.into_iter().map(Into::into));
        self
    }

    /// Whether the work offers line-by-line study.
    pub fn has_line_explanations(&self) -> bool {
        !self.line_explanations.is_empty()
    }

    /// Whether the work offers a quiz.
    pub fn has_quiz(&self) -> bool {
        !self.mcqs.is_empty()
    }

    /// Whether the work offers comprehension passages.
    pub fn has_comprehension(&self) -> bool {
        !self.comprehension_passages.is_empty()
    }

    /// Whether the work offers literary device notes.
    pub fn has_devices(&self) -> bool {
        !self.literary_devices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_work_offers_nothing() {
        let work = LiteraryWork::new("test-poem", "Test Poem", WorkKind::Poem);
        assert!(!work.has_line_explanations());
        assert!(!work.has_quiz());
        assert!(!work.has_comprehension());
        assert!(!work.has_devices());
        assert!(work.author.is_none());
    }

    #[test]
    fn test_work_builder() {
        let work = LiteraryWork::new("test-story", "Test Story", WorkKind::Story)
            .with_author("A. Writer")
            .with_summary("A story about testing.")
            .with_themes(["Perseverance", "Craft"])
            .with_mcq(Mcq::new("Who wrote it?", ["A. Writer", "B. Writer"], 0))
            .with_character(CharacterNote::new("The Tester", "Checks everything twice."));

        assert_eq!(work.author.as_deref(), Some("A. Writer"));
        assert_eq!(work.themes.len(), 2);
        assert!(work.has_quiz());
        assert!(!work.has_comprehension());
        assert_eq!(work.characters[0].name, "The Tester");
    }

    #[test]
    fn test_serialized_form_matches_content_schema() {
        let work = LiteraryWork::new("ode", "Ode", WorkKind::Poem)
            .with_summary("Short.")
            .with_mcq(Mcq::new("Q?", ["a", "b"], 1));

        let json = serde_json::to_value(&work).unwrap();
        assert_eq!(json["type"], "poem");
        assert_eq!(json["id"], "ode");
        assert_eq!(json["mcqs"][0]["correctAnswerIndex"], 1);
        // Unset options stay out of the record entirely.
        assert!(json.get("author").is_none());
        assert!(json.get("detailedSummary").is_none());
    }

    #[test]
    fn test_deserializes_sparse_record() {
        // Apparatus lists are all optional in the content files.
        let work: LiteraryWork = serde_json::from_str(
            r#"{
                "id": "sparse",
                "title": "Sparse",
                "type": "story",
                "summary": "Barely there."
            }"#,
        )
        .unwrap();

        assert_eq!(work.kind, WorkKind::Story);
        assert!(work.mcqs.is_empty());
        assert!(work.important_quotes.is_empty());
    }
}
