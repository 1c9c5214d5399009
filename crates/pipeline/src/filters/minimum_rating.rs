//! Filter to ensure a minimum quality threshold.
//!
//! Not part of the default recommendation pipeline; callers opt in.

use crate::context::ViewerContext;
use crate::traits::Filter;
use anyhow::{Result, bail};
use catalog::{Content, MAX_RATING, MIN_RATING};

/// Removes candidates below quality thresholds.
///
/// ## Algorithm
/// For each candidate keep it only if:
/// 1. it has at least `min_count` ratings, and
/// 2. its average rating is at least `min_rating`
pub struct MinimumRatingFilter {
    min_rating: f32,
    min_count: usize,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Minimum average rating, within `[0, 5]`
    /// * `min_count` - Minimum number of ratings
    pub fn new(min_rating: f32, min_count: usize) -> Result<Self> {
        if !(MIN_RATING..=MAX_RATING).contains(&min_rating) {
            bail!("minimum rating {} is outside [{}, {}]", min_rating, MIN_RATING, MAX_RATING);
        }
        Ok(Self {
            min_rating,
            min_count,
        })
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Content>,
        _context: &ViewerContext,
    ) -> Result<Vec<&'a Content>> {
        let filtered: Vec<&Content> = candidates
            .into_iter()
            .filter(|content| {
                content.ratings().len() >= self.min_count
                    && content.average_rating() >= self.min_rating
            })
            .collect();

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(title: &str, ratings: &[f32]) -> Content {
        let mut content = Content::movie(title, "Action", "Someone", 100).unwrap();
        for &r in ratings {
            content.add_rating(r).unwrap();
        }
        content
    }

    #[test]
    fn test_minimum_rating_filter() {
        let high = rated("High Rated Movie", &[5.0, 4.8, 5.0]);
        let low = rated("Low Rated Movie", &[2.0, 1.5, 2.5]);
        let few = rated("Few Ratings Movie", &[5.0]);

        let filter = MinimumRatingFilter::new(3.5, 2).unwrap();
        let filtered = filter
            .apply(vec![&high, &low, &few], &ViewerContext::new("x@example.com"))
            .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title(), "High Rated Movie");
    }

    #[test]
    fn test_invalid_threshold() {
        assert!(MinimumRatingFilter::new(5.5, 1).is_err());
        assert!(MinimumRatingFilter::new(-1.0, 1).is_err());
    }
}
