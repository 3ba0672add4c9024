//! Free-text search over the catalog.
//!
//! Matching is a case-insensitive substring test against a work's title,
//! author and themes. Queries are taken as typed: no trimming, no token
//! splitting. Results keep catalog order.

use anthology::{Catalog, LiteraryWork, WorkKind};

/// Works of `kind` whose title, author or any theme contains `query`,
/// case-insensitively. An empty query matches every work of the kind.
pub fn search<'a>(catalog: &'a Catalog, kind: WorkKind, query: &str) -> Vec<&'a LiteraryWork> {
    let needle = query.to_lowercase();
    catalog
        .of_kind(kind)
        .filter(|work| matches_query(work, &needle))
        .collect()
}

fn matches_query(work: &LiteraryWork, needle: &str) -> bool {
    if work.title.to_lowercase().contains(needle) {
        return true;
    }
    if let Some(author) = &work.author {
        if author.to_lowercase().contains(needle) {
            return true;
        }
    }
    work.themes
        .iter()
        .any(|theme| theme.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            LiteraryWork::new("dover-beach", "Dover Beach", WorkKind::Poem)
                .with_author("Matthew Arnold")
                .with_summary("The sea at night.")
                .with_themes(["Faith and doubt", "Love"]),
            LiteraryWork::new("ozymandias", "Ozymandias", WorkKind::Poem)
                .with_author("Percy Bysshe Shelley")
                .with_summary("A ruined colossus.")
                .with_themes(["Pride", "Impermanence"]),
            LiteraryWork::new("the-open-window", "The Open Window", WorkKind::Story)
                .with_author("Saki")
                .with_summary("A niece's tale.")
                .with_themes(["Deception", "Imagination"]),
            LiteraryWork::new("anonymous-ballad", "A Border Ballad", WorkKind::Poem)
                .with_summary("No author recorded.")
                .with_themes(["Loyalty"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_query_returns_all_of_kind_in_order() {
        let catalog = catalog();
        let poems = search(&catalog, WorkKind::Poem, "");
        let titles: Vec<_> = poems.iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, ["Dover Beach", "Ozymandias", "A Border Ballad"]);

        let stories = search(&catalog, WorkKind::Story, "");
        assert_eq!(stories.len(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        assert_eq!(search(&catalog, WorkKind::Poem, "OZYMANDIAS").len(), 1);
        assert_eq!(search(&catalog, WorkKind::Poem, "ozYMANDias").len(), 1);
        assert_eq!(search(&catalog, WorkKind::Story, "saki").len(), 1);
    }

    #[test]
    fn test_search_matches_substrings() {
        let catalog = catalog();
        // "over" sits inside "Dover Beach" and nowhere in the stories.
        assert_eq!(search(&catalog, WorkKind::Poem, "over").len(), 1);
        assert_eq!(search(&catalog, WorkKind::Story, "over").len(), 0);
        assert_eq!(search(&catalog, WorkKind::Story, "window").len(), 1);
    }

    #[test]
    fn test_search_covers_author_and_themes() {
        let catalog = catalog();
        let by_author = search(&catalog, WorkKind::Poem, "shelley");
        assert_eq!(by_author[0].id.as_str(), "ozymandias");

        let by_theme = search(&catalog, WorkKind::Poem, "doubt");
        assert_eq!(by_theme[0].id.as_str(), "dover-beach");

        // Summaries are not searched.
        assert!(search(&catalog, WorkKind::Poem, "colossus").is_empty());
    }

    #[test]
    fn test_search_respects_kind_partition() {
        let catalog = catalog();
        // "Imagination" is a story theme; the poem listing must not show it.
        assert!(search(&catalog, WorkKind::Poem, "imagination").is_empty());
        assert_eq!(search(&catalog, WorkKind::Story, "imagination").len(), 1);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = catalog();
        assert!(search(&catalog, WorkKind::Poem, "zzz-no-such-work").is_empty());
    }

    #[test]
    fn test_missing_author_is_not_an_error() {
        let catalog = catalog();
        let hits = search(&catalog, WorkKind::Poem, "ballad");
        assert_eq!(hits[0].id.as_str(), "anonymous-ballad");
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let catalog = catalog();
        // A trailing space only matches where the text actually has one.
        assert!(search(&catalog, WorkKind::Poem, "ozymandias ").is_empty());
        assert_eq!(search(&catalog, WorkKind::Poem, "dover ").len(), 1);
    }
}
