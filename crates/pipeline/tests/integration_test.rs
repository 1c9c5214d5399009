//! Integration tests for the pipeline.
//!
//! These tests verify that filters work together over a repository
//! populated the way the catalog driver populates it.

use catalog::{Content, ContentRepository, Subscriber, SubscriptionPlan};
use pipeline::filters::*;
use pipeline::{FilterPipeline, build_viewer_context};

fn create_test_setup() -> (ContentRepository, Subscriber) {
    let mut repo = ContentRepository::new(20).unwrap();

    repo.add_content(Content::movie("Interstellar", "Sci-Fi", "Christopher Nolan", 169).unwrap())
        .unwrap();
    repo.add_content(Content::movie("Mad Max: Fury Road", "Action", "George Miller", 120).unwrap())
        .unwrap();
    repo.add_content(Content::movie("Inception", "Sci-Fi", "Christopher Nolan", 148).unwrap())
        .unwrap();
    repo.add_content(Content::movie("The Godfather", "Crime", "Francis Ford Coppola", 175).unwrap())
        .unwrap();
    repo.add_content(Content::series("Breaking Bad", "Crime", "Vince Gilligan", 2, 5).unwrap())
        .unwrap();

    for rating in [5.0, 4.5, 4.8] {
        repo.find_content_by_title_mut("Inception")
            .unwrap()
            .add_rating(rating)
            .unwrap();
    }
    repo.find_content_by_title_mut("The Godfather")
        .unwrap()
        .add_rating(2.0)
        .unwrap();

    // Alice likes Sci-Fi and Crime, has seen Interstellar and Breaking Bad
    let mut alice =
        Subscriber::new("alice@example.com", "SecurePass1!", SubscriptionPlan::basic()).unwrap();
    alice.set_favorite_genres(["Sci-Fi", "Crime"]);
    alice.watch_content(repo.find_content_by_title("Interstellar").unwrap());
    alice.watch_content(repo.find_content_by_title("Breaking Bad").unwrap());

    (repo, alice)
}

#[test]
fn test_full_pipeline_filters_correctly() {
    let (repo, alice) = create_test_setup();
    let context = build_viewer_context(&alice);

    let pipeline = FilterPipeline::new()
        .add_filter(GenrePreferenceFilter)
        .add_filter(AlreadyWatchedFilter);

    let filtered = pipeline.apply(repo.iter().collect(), &context).unwrap();

    // Filtered out:
    // - Interstellar (watched)
    // - Mad Max (Action is not a favorite)
    // - Breaking Bad (watched)
    let titles: Vec<&str> = filtered.iter().map(|c| c.title()).collect();
    assert_eq!(titles, vec!["Inception", "The Godfather"]);
}

#[test]
fn test_filter_order_does_not_change_result() {
    let (repo, alice) = create_test_setup();
    let context = build_viewer_context(&alice);

    let genre_first = FilterPipeline::new()
        .add_filter(GenrePreferenceFilter)
        .add_filter(AlreadyWatchedFilter);
    let watched_first = FilterPipeline::new()
        .add_filter(AlreadyWatchedFilter)
        .add_filter(GenrePreferenceFilter);

    let a = genre_first.apply(repo.iter().collect(), &context).unwrap();
    let b = watched_first.apply(repo.iter().collect(), &context).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_complete_pipeline_with_quality_threshold() {
    let (repo, alice) = create_test_setup();
    let context = build_viewer_context(&alice);

    let pipeline = FilterPipeline::new()
        .add_filter(GenrePreferenceFilter)
        .add_filter(AlreadyWatchedFilter)
        .add_filter(MinimumRatingFilter::new(3.5, 1).unwrap());

    let filtered = pipeline.apply(repo.iter().collect(), &context).unwrap();

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title(), "Inception");
    assert!(filtered[0].average_rating() >= 3.5);
}

#[test]
fn test_candidates_are_repository_entries() {
    let (repo, alice) = create_test_setup();
    let context = build_viewer_context(&alice);

    let filtered = FilterPipeline::new()
        .add_filter(AlreadyWatchedFilter)
        .apply(repo.iter().collect(), &context)
        .unwrap();

    // Candidates borrow the stored entries rather than copies
    let stored = repo.find_content_by_title("Inception").unwrap();
    assert!(filtered.iter().any(|c| std::ptr::eq(*c, stored)));
}
