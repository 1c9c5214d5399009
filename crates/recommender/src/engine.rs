//! # Recommendation Engine
//!
//! Coordinates a recommendation request:
//! 1. Snapshot the subscriber into a viewer context
//! 2. Enumerate every entry of the content repository
//! 3. Apply the filter pipeline (favorite genre, not yet watched, ...)
//! 4. Keep the first `max_count` survivors in repository order
//!
//! No scoring or re-ranking happens; results follow repository order.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use catalog::{Content, ContentRepository, Subscriber};
use pipeline::filters::{AlreadyWatchedFilter, GenrePreferenceFilter, MinimumRatingFilter};
use pipeline::{FilterPipeline, ViewerContext, build_viewer_context};

/// Read-only recommendation query over a content repository
pub struct RecommendationEngine<'r> {
    content: &'r ContentRepository,
    filter_pipeline: FilterPipeline,
}

impl<'r> RecommendationEngine<'r> {
    /// Create an engine with the default pipeline:
    /// - GenrePreferenceFilter
    /// - AlreadyWatchedFilter
    pub fn new(content: &'r ContentRepository) -> Self {
        let filter_pipeline = FilterPipeline::new()
            .add_filter(GenrePreferenceFilter)
            .add_filter(AlreadyWatchedFilter);
        Self {
            content,
            filter_pipeline,
        }
    }

    /// Additionally require an average rating of at least `min_rating`
    /// from at least `min_count` ratings.
    pub fn with_minimum_rating(mut self, min_rating: f32, min_count: usize) -> Result<Self> {
        let filter = MinimumRatingFilter::new(min_rating, min_count)
            .context("Invalid minimum rating filter")?;
        self.filter_pipeline = self.filter_pipeline.add_filter(filter);
        Ok(self)
    }

    /// Names of the filters applied, in order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filter_pipeline.filter_names()
    }

    /// Main entry point: unseen content in the subscriber's favorite genres.
    ///
    /// # Arguments
    /// * `subscriber` - Whose favorite genres and history drive the filters
    /// * `max_count` - Upper bound on the number of results
    ///
    /// # Returns
    /// Up to `max_count` entries borrowed from the repository, in repository
    /// order. Empty when the subscriber has no favorite genres.
    #[instrument(skip_all, fields(email = %subscriber.email(), max_count = max_count))]
    pub fn recommend_by_favorite_genres(
        &self,
        subscriber: &Subscriber,
        max_count: usize,
    ) -> Result<Vec<&'r Content>> {
        let start_time = Instant::now();

        let context = build_viewer_context(subscriber);
        if context.favorite_genres.is_empty() || max_count == 0 {
            debug!("No favorite genres or zero limit, nothing to recommend");
            return Ok(Vec::new());
        }

        let candidates: Vec<&'r Content> = self.content.iter().collect();
        debug!("Enumerated {} candidates", candidates.len());

        let mut recommendations = self.apply_filters(candidates, &context)?;
        recommendations.truncate(max_count);

        info!(
            "Selected {} recommendations for {} in {:.2?}",
            recommendations.len(),
            subscriber.email(),
            start_time.elapsed()
        );
        Ok(recommendations)
    }

    /// Apply the filter pipeline to candidates
    fn apply_filters(
        &self,
        candidates: Vec<&'r Content>,
        context: &ViewerContext,
    ) -> Result<Vec<&'r Content>> {
        let filtered = self
            .filter_pipeline
            .apply(candidates, context)
            .context("Failed to apply filters")?;
        debug!("Filtering complete, {} candidates remain", filtered.len());
        Ok(filtered)
    }
}

/// Render a recommendation list for `subscriber` as plain text.
pub fn format_recommendations(results: &[&Content], subscriber: &Subscriber) -> String {
    let mut out = format!("Recommendations for {}:", subscriber.email());
    if results.is_empty() {
        out.push_str("\n  No recommendations available.");
        return out;
    }
    for (rank, content) in results.iter().enumerate() {
        let kind = if content.is_movie() { "Movie" } else { "Series" };
        out.push_str(&format!(
            "\n  {}. {} [{}] ({}) - avg rating {:.2}",
            rank + 1,
            content.title(),
            content.genre(),
            kind,
            content.average_rating()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::SubscriptionPlan;

    fn build_test_repository() -> ContentRepository {
        let mut repo = ContentRepository::new(10).unwrap();
        repo.add_content(Content::movie("Interstellar", "Sci-Fi", "Christopher Nolan", 169).unwrap())
            .unwrap();
        repo.add_content(Content::movie("Gladiator", "Drama", "Ridley Scott", 155).unwrap())
            .unwrap();
        repo.add_content(Content::series("The Witcher", "Fantasy", "Lauren Schmidt Hissrich", 1, 3).unwrap())
            .unwrap();
        repo
    }

    fn subscriber(genres: &[&str]) -> Subscriber {
        let mut s = Subscriber::new("charlie@example.com", "UltraPass3$", SubscriptionPlan::premium())
            .unwrap();
        s.set_favorite_genres(genres.iter().copied());
        s
    }

    #[test]
    fn test_default_filters() {
        let repo = build_test_repository();
        let engine = RecommendationEngine::new(&repo);
        assert_eq!(
            engine.filter_names(),
            vec!["GenrePreferenceFilter", "AlreadyWatchedFilter"]
        );
    }

    #[test]
    fn test_recommends_series_as_well_as_movies() {
        let repo = build_test_repository();
        let engine = RecommendationEngine::new(&repo);
        let charlie = subscriber(&["Fantasy", "Drama"]);

        let results = engine.recommend_by_favorite_genres(&charlie, 5).unwrap();
        let titles: Vec<&str> = results.iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["Gladiator", "The Witcher"]);
    }

    #[test]
    fn test_zero_limit() {
        let repo = build_test_repository();
        let engine = RecommendationEngine::new(&repo);
        let charlie = subscriber(&["Drama"]);

        assert!(engine.recommend_by_favorite_genres(&charlie, 0).unwrap().is_empty());
    }

    #[test]
    fn test_minimum_rating_opt_in() {
        let mut repo = build_test_repository();
        repo.find_content_by_title_mut("Gladiator").unwrap().add_rating(2.0).unwrap();
        let charlie = subscriber(&["Drama", "Fantasy"]);

        let engine = RecommendationEngine::new(&repo).with_minimum_rating(3.0, 0).unwrap();
        // Gladiator averages 2.0, The Witcher has no ratings (0.0)
        assert!(engine.recommend_by_favorite_genres(&charlie, 5).unwrap().is_empty());

        assert!(RecommendationEngine::new(&repo).with_minimum_rating(9.0, 0).is_err());
    }

    #[test]
    fn test_format_recommendations() {
        let repo = build_test_repository();
        let engine = RecommendationEngine::new(&repo);
        let charlie = subscriber(&["Drama"]);

        let results = engine.recommend_by_favorite_genres(&charlie, 5).unwrap();
        let text = format_recommendations(&results, &charlie);
        assert!(text.starts_with("Recommendations for charlie@example.com:"));
        assert!(text.contains("1. Gladiator [Drama] (Movie)"));
        assert_eq!(text.lines().count(), 2);
        assert!(!text.ends_with('\n'));

        let charlie = subscriber(&["Fantasy"]);
        let results = engine.recommend_by_favorite_genres(&charlie, 5).unwrap();
        assert_eq!(
            format_recommendations(&results, &charlie),
            "Recommendations for charlie@example.com:\n  1. The Witcher [Fantasy] (Series) - avg rating 0.00"
        );

        let empty = format_recommendations(&[], &charlie);
        assert_eq!(
            empty,
            "Recommendations for charlie@example.com:\n  No recommendations available."
        );
    }
}
