//! Filter to remove content the viewer has already watched.

use crate::context::ViewerContext;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Content;

/// Removes candidates whose title is in the viewer's watch history.
///
/// ## Algorithm
/// Uses the HashSet in ViewerContext.watched_titles for O(1) lookups.
pub struct AlreadyWatchedFilter;

impl Filter for AlreadyWatchedFilter {
    fn name(&self) -> &str {
        "AlreadyWatchedFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Content>,
        context: &ViewerContext,
    ) -> Result<Vec<&'a Content>> {
        let filtered: Vec<&Content> = candidates
            .into_iter()
            .filter(|content| !context.has_watched(content.title()))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_watched_filter() {
        let mut context = ViewerContext::new("alice@example.com");
        context.watched_titles.insert("Interstellar".to_string());
        context.watched_titles.insert("Breaking Bad".to_string());

        let interstellar = Content::movie("Interstellar", "Sci-Fi", "Christopher Nolan", 169).unwrap();
        let inception = Content::movie("Inception", "Sci-Fi", "Christopher Nolan", 148).unwrap();
        let breaking_bad = Content::series("Breaking Bad", "Crime", "Vince Gilligan", 2, 5).unwrap();
        let joker = Content::movie("Joker", "Crime", "Todd Phillips", 122).unwrap();

        let candidates = vec![&interstellar, &inception, &breaking_bad, &joker];

        let filter = AlreadyWatchedFilter;
        let filtered = filter.apply(candidates, &context).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title(), "Inception");
        assert_eq!(filtered[1].title(), "Joker");
    }
}
