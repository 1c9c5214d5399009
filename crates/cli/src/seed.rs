//! Demo catalog used by every command.
//!
//! Ten movies, three series and three subscribers. Insert failures (for
//! example a `--capacity` smaller than the catalog) are logged and skipped
//! so the remaining data is still usable.

use anyhow::Result;
use catalog::{CatalogError, Content, ContentRepository, Subscriber, SubscriberRepository, SubscriptionPlan};
use tracing::{info, warn};

const MOVIES: [(&str, &str, &str, u32); 10] = [
    ("Interstellar", "Sci-Fi", "Christopher Nolan", 169),
    ("Mad Max: Fury Road", "Action", "George Miller", 120),
    ("The Dark Knight", "Action", "Christopher Nolan", 152),
    ("Inception", "Sci-Fi", "Christopher Nolan", 148),
    ("Gladiator", "Drama", "Ridley Scott", 155),
    ("The Matrix", "Sci-Fi", "The Wachowskis", 136),
    ("John Wick", "Action", "Chad Stahelski", 101),
    ("Avengers: Endgame", "Superhero", "Anthony & Joe Russo", 181),
    ("The Godfather", "Crime", "Francis Ford Coppola", 175),
    ("Joker", "Crime", "Todd Phillips", 122),
];

const RATINGS: [(&str, &[f32]); 3] = [
    ("Interstellar", &[5.0, 4.5, 4.8]),
    ("Mad Max: Fury Road", &[4.7, 4.9]),
    ("The Dark Knight", &[5.0, 4.8, 5.0]),
];

/// (season, slot, title), zero-based
type EpisodeSeed = (usize, usize, &'static str);

const BREAKING_BAD: [EpisodeSeed; 4] = [
    (0, 0, "Pilot"),
    (0, 1, "Cat's in the Bag..."),
    (1, 0, "Seven Thirty-Seven"),
    (1, 1, "Grilled"),
];

const STRANGER_THINGS: [EpisodeSeed; 6] = [
    (0, 0, "The Vanishing of Will Byers"),
    (0, 1, "The Weirdo on Maple Street"),
    (1, 0, "Madmax"),
    (1, 1, "The Spy"),
    (2, 0, "Suzie, Do You Copy?"),
    (2, 1, "The Mall Rats"),
];

const THE_WITCHER: [EpisodeSeed; 3] = [
    (0, 0, "The End's Beginning"),
    (0, 1, "Four Marks"),
    (0, 2, "Betrayer Moon"),
];

const ACTORS: [(&str, [&str; 3]); 7] = [
    ("Interstellar", ["Matthew McConaughey", "Anne Hathaway", "Jessica Chastain"]),
    ("The Dark Knight", ["Christian Bale", "Heath Ledger", "Gary Oldman"]),
    ("Inception", ["Leonardo DiCaprio", "Joseph Gordon-Levitt", "Elliot Page"]),
    ("The Godfather", ["Marlon Brando", "Al Pacino", "James Caan"]),
    ("Breaking Bad", ["Bryan Cranston", "Aaron Paul", "Anna Gunn"]),
    ("Stranger Things", ["Winona Ryder", "David Harbour", "Millie Bobby Brown"]),
    ("The Witcher", ["Henry Cavill", "Freya Allan", "Anya Chalotra"]),
];

/// Build the demo repositories.
pub fn seed(capacity: usize) -> Result<(ContentRepository, SubscriberRepository)> {
    let mut content = ContentRepository::new(capacity)?;

    for (title, genre, director, minutes) in MOVIES {
        store(&mut content, Content::movie(title, genre, director, minutes)?);
    }
    for (title, ratings) in RATINGS {
        if let Some(movie) = content.find_content_by_title_mut(title) {
            for &rating in ratings {
                movie.add_rating(rating)?;
            }
        }
    }

    store(
        &mut content,
        series("Breaking Bad", "Crime", "Vince Gilligan", 2, 5, &BREAKING_BAD)?,
    );
    store(
        &mut content,
        series("Stranger Things", "Sci-Fi", "Duffer Brothers", 3, 5, &STRANGER_THINGS)?,
    );
    store(
        &mut content,
        series("The Witcher", "Fantasy", "Lauren Schmidt Hissrich", 1, 3, &THE_WITCHER)?,
    );

    if let Some(grid) = content
        .find_content_by_title_mut("Stranger Things")
        .and_then(Content::as_series_mut)
    {
        grid.remove_episode(1, "The Spy")?;
    }
    if let Some(grid) = content
        .find_content_by_title_mut("Breaking Bad")
        .and_then(Content::as_series_mut)
    {
        grid.update_episode(0, 1, "Cat's in the Bag... (Updated)")?;
    }

    for (title, actors) in ACTORS {
        if let Some(entry) = content.find_content_by_title_mut(title) {
            for actor in actors {
                entry.add_actor(actor)?;
            }
        }
    }

    let mut subscribers = SubscriberRepository::new();
    let plans = [
        ("alice@example.com", "SecurePass1!", SubscriptionPlan::basic()),
        ("bob@example.com", "StrongPass2@", SubscriptionPlan::standard()),
        ("charlie@example.com", "UltraPass3$", SubscriptionPlan::premium()),
    ];
    let history: [&[&str]; 3] = [
        &["Interstellar", "Breaking Bad"],
        &["Mad Max: Fury Road", "Stranger Things"],
        &["The Dark Knight", "Breaking Bad", "Stranger Things"],
    ];
    let favorites: [&[&str]; 3] = [&["Sci-Fi", "Crime"], &["Action", "Sci-Fi"], &["Drama", "Superhero"]];

    for (((email, credential, plan), watched), genres) in plans.into_iter().zip(history).zip(favorites) {
        let mut subscriber = Subscriber::new(email, credential, plan)?;
        for &title in watched {
            match content.find_content_by_title(title) {
                Some(entry) => subscriber.watch_content(entry),
                None => warn!(email, title, "Watched title is not in the catalog"),
            }
        }
        subscriber.set_favorite_genres(genres.iter().copied());
        if let Err(err) = subscribers.add_subscriber(subscriber) {
            warn!("Skipping subscriber: {err}");
        }
    }
    subscribers.deactivate_subscriber("bob@example.com");

    info!(
        "Seeded {} content entries and {} subscribers",
        content.len(),
        subscribers.len()
    );
    Ok((content, subscribers))
}

fn series(
    title: &str,
    genre: &str,
    creator: &str,
    seasons: usize,
    slots: usize,
    episodes: &[EpisodeSeed],
) -> Result<Content, CatalogError> {
    let mut content = Content::series(title, genre, creator, seasons, slots)?;
    if let Some(grid) = content.as_series_mut() {
        for &(season, slot, name) in episodes {
            grid.add_episode(season, slot, name)?;
        }
    }
    Ok(content)
}

fn store(repo: &mut ContentRepository, content: Content) {
    if let Err(err) = repo.add_content(content) {
        warn!("Skipping content: {err}");
    }
}
