//! Subscribers: account data, favorite genres and watch history.

use crate::content::Content;
use crate::error::{require_non_empty, Result};
use crate::types::{Credential, Genre, SubscriptionPlan};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// A streaming subscriber.
///
/// The watch history stores content titles, the unique key of
/// `ContentRepository`, so a subscriber never owns catalog entries.
/// Subscribers are only ever built through `new`; serialization is one-way
/// and leaves the credential out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subscriber {
    email: String,
    #[serde(skip_serializing)]
    credential: Credential,
    plan: SubscriptionPlan,
    active: bool,
    favorite_genres: Vec<Genre>,
    watched: BTreeSet<String>,
}

impl Subscriber {
    /// Create an active subscriber with no history and no favorite genres.
    ///
    /// # Errors
    /// `InvalidArgument` if the email or the credential is empty.
    pub fn new(email: impl Into<String>, credential: impl Into<String>, plan: SubscriptionPlan) -> Result<Self> {
        let email = email.into();
        let credential = credential.into();
        require_non_empty("email", &email)?;
        require_non_empty("credential", &credential)?;
        Ok(Self {
            email,
            credential: Credential::new(credential),
            plan,
            active: true,
            favorite_genres: Vec::new(),
            watched: BTreeSet::new(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn plan(&self) -> &SubscriptionPlan {
        &self.plan
    }

    pub fn change_plan(&mut self, plan: SubscriptionPlan) {
        self.plan = plan;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Favorite genres in the order they were given, without duplicates
    pub fn favorite_genres(&self) -> &[Genre] {
        &self.favorite_genres
    }

    /// Replace the favorite genres wholesale. Repeated entries keep their
    /// first position.
    pub fn set_favorite_genres<I, S>(&mut self, genres: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Genre>,
    {
        let mut unique: Vec<Genre> = Vec::new();
        for genre in genres {
            let genre = genre.into();
            if !unique.contains(&genre) {
                unique.push(genre);
            }
        }
        self.favorite_genres = unique;
    }

    /// Record that `content` was watched. Watching it again changes nothing.
    pub fn watch_content(&mut self, content: &Content) {
        self.watched.insert(content.title().to_string());
    }

    pub fn has_watched(&self, content: &Content) -> bool {
        self.watched.contains(content.title())
    }

    /// Watched titles in alphabetical order
    pub fn watched_titles(&self) -> impl Iterator<Item = &str> {
        self.watched.iter().map(String::as_str)
    }

    pub fn watched_count(&self) -> usize {
        self.watched.len()
    }

    /// Human-readable multi-line description. The credential is not shown.
    pub fn details(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Subscriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Subscriber: {}", self.email)?;
        writeln!(f, "Plan: {}", self.plan)?;
        writeln!(f, "Status: {}", if self.active { "active" } else { "inactive" })?;
        if self.favorite_genres.is_empty() {
            writeln!(f, "Favorite genres: none")?;
        } else {
            writeln!(f, "Favorite genres: {}", self.favorite_genres.join(", "))?;
        }
        if self.watched.is_empty() {
            write!(f, "Watched: nothing yet")
        } else {
            let titles: Vec<&str> = self.watched_titles().collect();
            write!(f, "Watched: {}", titles.join(", "))
        }
    }
}
