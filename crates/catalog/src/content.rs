//! Catalog content: movies and multi-season series.
//!
//! `Content` carries the fields every catalog entry shares (title, genre,
//! creator, ratings, actors) and a `ContentKind` payload with the
//! variant-specific data. Series keep their episodes in an `EpisodeGrid`,
//! a fixed `seasons x slots` matrix where each slot is empty or holds a title.

use crate::error::{require_non_empty, CatalogError, Result};
use crate::types::{Genre, MAX_RATING, MIN_RATING};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

// =============================================================================
// Content
// =============================================================================

/// A catalog entry.
///
/// The title is fixed at construction. Uniqueness of titles is enforced by
/// `ContentRepository`, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawContent")]
pub struct Content {
    title: String,
    genre: Genre,
    creator: String,
    ratings: Vec<f32>,
    actors: Vec<String>,
    kind: ContentKind,
}

/// Variant-specific payload of a `Content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentKind {
    Movie { duration_minutes: u32 },
    Series(EpisodeGrid),
}

impl Content {
    /// Create a movie.
    ///
    /// # Errors
    /// `InvalidArgument` if a string field is empty or the duration is zero.
    pub fn movie(
        title: impl Into<String>,
        genre: impl Into<Genre>,
        director: impl Into<String>,
        duration_minutes: u32,
    ) -> Result<Self> {
        Self::with_kind(
            title.into(),
            genre.into(),
            director.into(),
            ContentKind::Movie { duration_minutes },
        )
    }

    /// Create a series with an empty `season_count x max_episodes_per_season` grid.
    ///
    /// # Errors
    /// `InvalidArgument` if a string field is empty or either bound is zero.
    pub fn series(
        title: impl Into<String>,
        genre: impl Into<Genre>,
        creator: impl Into<String>,
        season_count: usize,
        max_episodes_per_season: usize,
    ) -> Result<Self> {
        let grid = EpisodeGrid::new(season_count, max_episodes_per_season)?;
        Self::with_kind(title.into(), genre.into(), creator.into(), ContentKind::Series(grid))
    }

    fn with_kind(title: String, genre: Genre, creator: String, kind: ContentKind) -> Result<Self> {
        require_non_empty("title", &title)?;
        require_non_empty("genre", &genre)?;
        require_non_empty("creator", &creator)?;
        if let ContentKind::Movie { duration_minutes: 0 } = kind {
            return Err(CatalogError::invalid("duration", "must be a positive number of minutes"));
        }
        Ok(Self {
            title,
            genre,
            creator,
            ratings: Vec::new(),
            actors: Vec::new(),
            kind,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Director for movies, creator for series
    pub fn creator(&self) -> &str {
        &self.creator
    }

    pub fn ratings(&self) -> &[f32] {
        &self.ratings
    }

    /// Actors in insertion order (duplicates kept)
    pub fn actors(&self) -> &[String] {
        &self.actors
    }

    pub fn kind(&self) -> &ContentKind {
        &self.kind
    }

    pub fn is_movie(&self) -> bool {
        matches!(self.kind, ContentKind::Movie { .. })
    }

    pub fn is_series(&self) -> bool {
        matches!(self.kind, ContentKind::Series(_))
    }

    /// Runtime in minutes, `None` for series
    pub fn duration_minutes(&self) -> Option<u32> {
        match self.kind {
            ContentKind::Movie { duration_minutes } => Some(duration_minutes),
            ContentKind::Series(_) => None,
        }
    }

    pub fn as_series(&self) -> Option<&EpisodeGrid> {
        match &self.kind {
            ContentKind::Series(grid) => Some(grid),
            ContentKind::Movie { .. } => None,
        }
    }

    pub fn as_series_mut(&mut self) -> Option<&mut EpisodeGrid> {
        match &mut self.kind {
            ContentKind::Series(grid) => Some(grid),
            ContentKind::Movie { .. } => None,
        }
    }

    /// Record a rating.
    ///
    /// # Errors
    /// `InvalidArgument` if `value` is NaN or outside `[0, 5]`. Rejected
    /// values are not recorded.
    pub fn add_rating(&mut self, value: f32) -> Result<()> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(CatalogError::invalid(
                "rating",
                format!("{value} is outside [{MIN_RATING}, {MAX_RATING}]"),
            ));
        }
        self.ratings.push(value);
        Ok(())
    }

    /// Arithmetic mean of all ratings, `0.0` when there are none.
    pub fn average_rating(&self) -> f32 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let total: f32 = self.ratings.iter().sum();
        total / self.ratings.len() as f32
    }

    /// Append an actor. No deduplication.
    ///
    /// # Errors
    /// `InvalidArgument` if `name` is empty.
    pub fn add_actor(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        require_non_empty("actor", &name)?;
        self.actors.push(name);
        Ok(())
    }

    /// Human-readable multi-line description.
    ///
    /// Seasons and episodes are numbered from 1 in the output.
    pub fn details(&self) -> String {
        self.to_string()
    }
}

/// Wire shape of `Content`, replayed through the constructors on load.
#[derive(Deserialize)]
struct RawContent {
    title: String,
    genre: Genre,
    creator: String,
    ratings: Vec<f32>,
    actors: Vec<String>,
    kind: ContentKind,
}

impl TryFrom<RawContent> for Content {
    type Error = CatalogError;

    fn try_from(raw: RawContent) -> Result<Self> {
        let mut content = Self::with_kind(raw.title, raw.genre, raw.creator, raw.kind)?;
        for rating in raw.ratings {
            content.add_rating(rating)?;
        }
        for actor in raw.actors {
            content.add_actor(actor)?;
        }
        Ok(content)
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (label, creator_label) = match self.kind {
            ContentKind::Movie { .. } => ("Movie", "Director"),
            ContentKind::Series(_) => ("Series", "Creator"),
        };
        writeln!(f, "{label}: {}", self.title)?;
        writeln!(f, "Genre: {}", self.genre)?;
        writeln!(f, "{creator_label}: {}", self.creator)?;
        writeln!(
            f,
            "Average rating: {:.2} ({} rating{})",
            self.average_rating(),
            self.ratings.len(),
            if self.ratings.len() == 1 { "" } else { "s" }
        )?;
        if self.actors.is_empty() {
            writeln!(f, "Actors: none listed")?;
        } else {
            writeln!(f, "Actors: {}", self.actors.join(", "))?;
        }
        match &self.kind {
            ContentKind::Movie { duration_minutes } => write!(f, "Duration: {duration_minutes} min"),
            ContentKind::Series(grid) => write!(f, "{grid}"),
        }
    }
}

// =============================================================================
// Episode Grid
// =============================================================================

/// Fixed-size season/episode matrix of a series.
///
/// Both indices are zero-based: seasons in `[0, season_count)`, slots in
/// `[0, max_episodes_per_season)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEpisodeGrid")]
pub struct EpisodeGrid {
    max_episodes_per_season: usize,
    seasons: Vec<Vec<Option<String>>>,
}

#[derive(Deserialize)]
struct RawEpisodeGrid {
    max_episodes_per_season: usize,
    seasons: Vec<Vec<Option<String>>>,
}

impl TryFrom<RawEpisodeGrid> for EpisodeGrid {
    type Error = CatalogError;

    /// Every season must have exactly `max_episodes_per_season` slots.
    fn try_from(raw: RawEpisodeGrid) -> Result<Self> {
        let mut grid = Self::new(raw.seasons.len(), raw.max_episodes_per_season)?;
        for (season, slots) in raw.seasons.into_iter().enumerate() {
            if slots.len() != grid.max_episodes_per_season {
                return Err(CatalogError::invalid(
                    "seasons",
                    format!(
                        "season {season} has {} slots, expected {}",
                        slots.len(),
                        grid.max_episodes_per_season
                    ),
                ));
            }
            for (slot, title) in slots.into_iter().enumerate() {
                if let Some(title) = title {
                    grid.add_episode(season, slot, title)?;
                }
            }
        }
        Ok(grid)
    }
}

impl EpisodeGrid {
    /// # Errors
    /// `InvalidArgument` if either bound is zero.
    pub fn new(season_count: usize, max_episodes_per_season: usize) -> Result<Self> {
        if season_count == 0 {
            return Err(CatalogError::invalid("season_count", "must be at least 1"));
        }
        if max_episodes_per_season == 0 {
            return Err(CatalogError::invalid("max_episodes_per_season", "must be at least 1"));
        }
        Ok(Self {
            max_episodes_per_season,
            seasons: vec![vec![None; max_episodes_per_season]; season_count],
        })
    }

    pub fn season_count(&self) -> usize {
        self.seasons.len()
    }

    pub fn max_episodes_per_season(&self) -> usize {
        self.max_episodes_per_season
    }

    /// Number of occupied slots across all seasons
    pub fn episode_count(&self) -> usize {
        self.seasons
            .iter()
            .map(|season| season.iter().filter(|slot| slot.is_some()).count())
            .sum()
    }

    /// Title stored at `(season, slot)`, `None` if the slot is empty.
    ///
    /// # Errors
    /// `InvalidIndex` if either index is out of bounds.
    pub fn episode(&self, season: usize, slot: usize) -> Result<Option<&str>> {
        self.check_slot(season, slot)?;
        Ok(self.seasons[season][slot].as_deref())
    }

    /// Occupied slots of one season as `(slot, title)` pairs.
    ///
    /// # Errors
    /// `InvalidIndex` if `season` is out of bounds.
    pub fn season_episodes(&self, season: usize) -> Result<Vec<(usize, &str)>> {
        self.check_season(season)?;
        Ok(self.seasons[season]
            .iter()
            .enumerate()
            .filter_map(|(slot, title)| title.as_deref().map(|t| (slot, t)))
            .collect())
    }

    /// Store `title` at `(season, slot)`, overwriting whatever was there.
    ///
    /// # Errors
    /// `InvalidIndex` if either index is out of bounds; `InvalidArgument` if
    /// the title is empty. The grid is unchanged on error.
    pub fn add_episode(&mut self, season: usize, slot: usize, title: impl Into<String>) -> Result<()> {
        self.check_slot(season, slot)?;
        let title = title.into();
        require_non_empty("episode title", &title)?;
        debug!(season, slot, title = %title, "Adding episode");
        self.seasons[season][slot] = Some(title);
        Ok(())
    }

    /// Replace the title of an existing episode.
    ///
    /// # Errors
    /// `InvalidIndex` if either index is out of bounds; `EpisodeNotFound` if
    /// the slot is empty; `InvalidArgument` if the title is empty.
    pub fn update_episode(&mut self, season: usize, slot: usize, new_title: impl Into<String>) -> Result<()> {
        self.check_slot(season, slot)?;
        let new_title = new_title.into();
        require_non_empty("episode title", &new_title)?;
        match self.seasons[season][slot].as_mut() {
            Some(current) => {
                debug!(season, slot, from = %current, to = %new_title, "Updating episode");
                *current = new_title;
                Ok(())
            }
            None => Err(CatalogError::EpisodeNotFound {
                season,
                detail: format!("slot {slot} is empty"),
            }),
        }
    }

    /// Clear the first slot in `season` whose title equals `title`.
    ///
    /// # Errors
    /// `InvalidIndex` if `season` is out of bounds; `EpisodeNotFound` if no
    /// episode in that season has this title.
    pub fn remove_episode(&mut self, season: usize, title: &str) -> Result<()> {
        self.check_season(season)?;
        let slot = self.seasons[season]
            .iter_mut()
            .find(|slot| slot.as_deref() == Some(title))
            .ok_or_else(|| CatalogError::EpisodeNotFound {
                season,
                detail: format!("no episode titled '{title}'"),
            })?;
        debug!(season, title, "Removing episode");
        *slot = None;
        Ok(())
    }

    fn check_season(&self, season: usize) -> Result<()> {
        if season >= self.seasons.len() {
            return Err(self.index_error(season, None));
        }
        Ok(())
    }

    fn check_slot(&self, season: usize, slot: usize) -> Result<()> {
        if season >= self.seasons.len() || slot >= self.max_episodes_per_season {
            return Err(self.index_error(season, Some(slot)));
        }
        Ok(())
    }

    fn index_error(&self, season: usize, slot: Option<usize>) -> CatalogError {
        CatalogError::InvalidIndex {
            season,
            slot,
            seasons: self.seasons.len(),
            slots: self.max_episodes_per_season,
        }
    }
}

impl fmt::Display for EpisodeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Seasons: {} (up to {} episodes each)",
            self.seasons.len(),
            self.max_episodes_per_season
        )?;
        for (season_idx, season) in self.seasons.iter().enumerate() {
            write!(f, "\n  Season {}:", season_idx + 1)?;
            let mut any = false;
            for (slot, title) in season.iter().enumerate() {
                if let Some(title) = title {
                    write!(f, "\n    Episode {}: {}", slot + 1, title)?;
                    any = true;
                }
            }
            if !any {
                write!(f, " (no episodes)")?;
            }
        }
        Ok(())
    }
}
