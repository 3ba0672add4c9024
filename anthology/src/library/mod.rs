//! The built-in reading list - the study content shipped with the crate.
//!
//! Content lives here as plain Rust data built through the record builders,
//! one module per work kind. Coverage is deliberately uneven: not every work
//! carries every kind of apparatus, and the study views offered downstream
//! follow whatever is actually present.

mod poems;
mod stories;

use std::sync::OnceLock;

use crate::catalog::Catalog;
use crate::works::LiteraryWork;

/// All built-in works, poems first, in syllabus order.
pub fn works() -> Vec<LiteraryWork> {
    let mut works = poems::poems();
    works.extend(stories::stories());
    works
}

/// The validated built-in catalog, built on first access and shared for the
/// rest of the process.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        Catalog::new(works()).expect("built-in study content failed integrity checks")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::works::WorkKind;

    #[test]
    fn test_built_in_content_is_valid() {
        // Guards the `expect` in `catalog()`: authoring slips surface here,
        // not at first use.
        let catalog = Catalog::new(works()).unwrap();
        assert_eq!(catalog.work_count(), 9);
        assert_eq!(catalog.poem_count(), 5);
        assert_eq!(catalog.story_count(), 4);
    }

    #[test]
    fn test_shared_catalog_is_stable() {
        let first = catalog();
        let second = catalog();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.work_count(), 9);
    }

    #[test]
    fn test_every_work_has_an_overview() {
        for work in catalog().works() {
            assert!(!work.summary.is_empty(), "{} has no summary", work.id);
            assert!(!work.themes.is_empty(), "{} has no themes", work.id);
        }
    }

    #[test]
    fn test_apparatus_coverage_is_uneven() {
        let catalog = catalog();

        // Every poem carries paraphrase cards.
        for poem in catalog.of_kind(WorkKind::Poem) {
            assert!(poem.has_line_explanations(), "{} has no cards", poem.id);
        }

        // Some works deliberately skip a view.
        assert!(!catalog.get("the-bangle-sellers").unwrap().has_quiz());
        assert!(!catalog.get("the-heart-of-the-tree").unwrap().has_comprehension());
        assert!(!catalog.get("the-little-match-girl").unwrap().has_devices());
        assert!(catalog.get("an-angel-in-disguise").unwrap().characters.len() >= 3);
    }
}
