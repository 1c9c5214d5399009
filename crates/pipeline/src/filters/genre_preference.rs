//! Filter to keep only content in the viewer's favorite genres.

use crate::context::ViewerContext;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Content;

/// Keeps only candidates whose genre is one of the viewer's favorites.
///
/// ## Algorithm
/// 1. If the viewer has no favorite genres, nothing can match: return empty
/// 2. Otherwise keep a candidate when its genre is in the favorite set
///    (exact, case-sensitive comparison)
pub struct GenrePreferenceFilter;

impl Filter for GenrePreferenceFilter {
    fn name(&self) -> &str {
        "GenrePreferenceFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Content>,
        context: &ViewerContext,
    ) -> Result<Vec<&'a Content>> {
        if context.favorite_genres.is_empty() {
            return Ok(Vec::new());
        }
        let filtered: Vec<&Content> = candidates
            .into_iter()
            .filter(|content| context.likes_genre(content.genre()))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_catalog() -> Vec<Content> {
        vec![
            Content::movie("Mad Max: Fury Road", "Action", "George Miller", 120).unwrap(),
            Content::movie("Gladiator", "Drama", "Ridley Scott", 155).unwrap(),
            Content::movie("The Matrix", "Sci-Fi", "The Wachowskis", 136).unwrap(),
            Content::series("Stranger Things", "Sci-Fi", "Duffer Brothers", 3, 5).unwrap(),
        ]
    }

    #[test]
    fn test_genre_preference_filter() {
        let catalog = create_test_catalog();
        let mut context = ViewerContext::new("bob@example.com");
        context.favorite_genres.insert("Action".to_string());
        context.favorite_genres.insert("Sci-Fi".to_string());

        let candidates: Vec<&Content> = catalog.iter().collect();

        let filter = GenrePreferenceFilter;
        let filtered = filter.apply(candidates, &context).unwrap();

        let titles: Vec<&str> = filtered.iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["Mad Max: Fury Road", "The Matrix", "Stranger Things"]);
    }

    #[test]
    fn test_no_favorite_genres_matches_nothing() {
        let catalog = create_test_catalog();
        let context = ViewerContext::new("bob@example.com");

        let filtered = GenrePreferenceFilter
            .apply(catalog.iter().collect(), &context)
            .unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_genre_match_is_case_sensitive() {
        let catalog = create_test_catalog();
        let mut context = ViewerContext::new("bob@example.com");
        context.favorite_genres.insert("sci-fi".to_string());

        let filtered = GenrePreferenceFilter
            .apply(catalog.iter().collect(), &context)
            .unwrap();
        assert!(filtered.is_empty());
    }
}
