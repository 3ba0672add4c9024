//! Catalog - the validated, immutable store the whole syllabus lives in.

use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::works::{LiteraryWork, WorkId, WorkKind};

/// Content-integrity failures caught while a catalog is being built.
///
/// These are authoring mistakes, not runtime conditions: a catalog that
/// constructs successfully can never produce one afterwards.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate work id `{0}`")]
    DuplicateWorkId(WorkId),

    #[error("work `{work}`: question {index} has {count} option(s), need at least 2")]
    TooFewOptions {
        work: WorkId,
        index: usize,
        count: usize,
    },

    #[error("work `{work}`: question {index} marks option {answer} correct but only {count} options exist")]
    AnswerOutOfRange {
        work: WorkId,
        index: usize,
        answer: usize,
        count: usize,
    },

    #[error("work `{work}`: duplicate passage id `{passage}`")]
    DuplicatePassageId { work: WorkId, passage: String },

    #[error("work `{work}`: passage `{passage}` has no questions")]
    EmptyPassage { work: WorkId, passage: String },
}

/// The catalog of works available for study.
///
/// Works keep the order they were registered in (listings and search
/// results preserve it); lookups by ID go through an index. Once built,
/// the catalog is read-only for the rest of the process.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    works: Vec<LiteraryWork>,
    by_id: HashMap<WorkId, usize>,
}

impl Catalog {
    /// Build a catalog, validating every record on the way in.
    pub fn new(works: Vec<LiteraryWork>) -> Result<Self, ContentError> {
        let mut by_id = HashMap::with_capacity(works.len());
        for (position, work) in works.iter().enumerate() {
            validate_work(work)?;
            if by_id.insert(work.id.clone(), position).is_some() {
                return Err(ContentError::DuplicateWorkId(work.id.clone()));
            }
        }
        Ok(Self { works, by_id })
    }

    /// Ingest records in the published content schema, then validate.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let works: Vec<LiteraryWork> = serde_json::from_str(json)?;
        Self::new(works)
    }

    /// Look up a work by its ID slug.
    pub fn get(&self, id: &str) -> Option<&LiteraryWork> {
        self.by_id.get(id).map(|&position| &self.works[position])
    }

    /// Check whether a work is in the catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// All works, in registration order.
    pub fn works(&self) -> &[LiteraryWork] {
        &self.works
    }

    /// Works of one kind, in registration order.
    pub fn of_kind(&self, kind: WorkKind) -> impl Iterator<Item = &LiteraryWork> {
        self.works.iter().filter(move |work| work.kind == kind)
    }

    /// Total number of works.
    pub fn work_count(&self) -> usize {
        self.works.len()
    }

    /// Whether the catalog holds no works at all.
    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    /// Number of poems.
    pub fn poem_count(&self) -> usize {
        self.of_kind(WorkKind::Poem).count()
    }

    /// Number of stories.
    pub fn story_count(&self) -> usize {
        self.of_kind(WorkKind::Story).count()
    }

    /// Total quiz questions across every work.
    pub fn mcq_count(&self) -> usize {
        self.works.iter().map(|work| work.mcqs.len()).sum()
    }

    /// Total comprehension passages across every work.
    pub fn passage_count(&self) -> usize {
        self.works
            .iter()
            .map(|work| work.comprehension_passages.len())
            .sum()
    }
}

fn validate_work(work: &LiteraryWork) -> Result<(), ContentError> {
    for (index, mcq) in work.mcqs.iter().enumerate() {
        let count = mcq.options.len();
        if count < 2 {
            return Err(ContentError::TooFewOptions {
                work: work.id.clone(),
                index,
                count,
            });
        }
        if mcq.correct_answer_index >= count {
            return Err(ContentError::AnswerOutOfRange {
                work: work.id.clone(),
                index,
                answer: mcq.correct_answer_index,
                count,
            });
        }
    }

    let mut passage_ids = HashSet::new();
    for passage in &work.comprehension_passages {
        if passage.questions.is_empty() {
            return Err(ContentError::EmptyPassage {
                work: work.id.clone(),
                passage: passage.id.clone(),
            });
        }
        if !passage_ids.insert(passage.id.as_str()) {
            return Err(ContentError::DuplicatePassageId {
                work: work.id.clone(),
                passage: passage.id.clone(),
            });
        }
    }

    Ok(())
}
