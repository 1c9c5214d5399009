//! Viewer context built from a subscriber.
//!
//! Filters consult the same snapshot of favorite genres and watch history
//! instead of reaching back into the `Subscriber` for every candidate.

use catalog::{Genre, Subscriber};
use std::collections::HashSet;

/// The parts of a subscriber the filters need, as sets.
#[derive(Debug, Clone, Default)]
pub struct ViewerContext {
    pub email: String,
    pub favorite_genres: HashSet<Genre>,
    /// Titles the viewer has already watched
    pub watched_titles: HashSet<String>,
}

impl ViewerContext {
    /// Create an empty context with no favorites and no history.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn likes_genre(&self, genre: &str) -> bool {
        self.favorite_genres.contains(genre)
    }

    pub fn has_watched(&self, title: &str) -> bool {
        self.watched_titles.contains(title)
    }
}

/// Snapshot `subscriber`'s favorite genres and watched titles.
pub fn build_viewer_context(subscriber: &Subscriber) -> ViewerContext {
    ViewerContext {
        email: subscriber.email().to_string(),
        favorite_genres: subscriber.favorite_genres().iter().cloned().collect(),
        watched_titles: subscriber.watched_titles().map(str::to_string).collect(),
    }
}

impl From<&Subscriber> for ViewerContext {
    fn from(subscriber: &Subscriber) -> Self {
        build_viewer_context(subscriber)
    }
}
