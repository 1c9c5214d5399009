//! In-memory repositories for content and subscribers.
//!
//! Both keep entries in insertion order and look them up with a linear scan
//! on their unique key (title or email, exact match). Entries are never
//! removed.

use crate::content::Content;
use crate::error::{CatalogError, Result};
use crate::subscriber::Subscriber;
use tracing::{debug, warn};

// =============================================================================
// ContentRepository
// =============================================================================

/// Capacity-bounded store of content keyed by title.
#[derive(Debug, Clone)]
pub struct ContentRepository {
    capacity: usize,
    contents: Vec<Content>,
}

impl ContentRepository {
    /// Create an empty repository holding at most `capacity` entries.
    ///
    /// # Errors
    /// `InvalidArgument` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CatalogError::invalid("capacity", "must be at least 1"));
        }
        Ok(Self {
            capacity,
            contents: Vec::with_capacity(capacity),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Store `content`.
    ///
    /// The duplicate check runs before the capacity check, so a full
    /// repository still reports `DuplicateTitle` for a known title.
    ///
    /// # Errors
    /// `DuplicateTitle` or `CapacityExceeded`; the repository is unchanged.
    pub fn add_content(&mut self, content: Content) -> Result<()> {
        if self.find_content_by_title(content.title()).is_some() {
            warn!(title = content.title(), "Rejected duplicate title");
            return Err(CatalogError::DuplicateTitle {
                title: content.title().to_string(),
            });
        }
        if self.contents.len() >= self.capacity {
            warn!(title = content.title(), capacity = self.capacity, "Content repository is full");
            return Err(CatalogError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        debug!(title = content.title(), genre = content.genre(), "Added content");
        self.contents.push(content);
        Ok(())
    }

    /// Exact, case-sensitive title lookup
    pub fn find_content_by_title(&self, title: &str) -> Option<&Content> {
        self.contents.iter().find(|content| content.title() == title)
    }

    pub fn find_content_by_title_mut(&mut self, title: &str) -> Option<&mut Content> {
        self.contents.iter_mut().find(|content| content.title() == title)
    }

    /// All stored content in insertion order
    pub fn get_all_content(&self) -> &[Content] {
        &self.contents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Content> {
        self.contents.iter()
    }
}

impl<'a> IntoIterator for &'a ContentRepository {
    type Item = &'a Content;
    type IntoIter = std::slice::Iter<'a, Content>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// SubscriberRepository
// =============================================================================

/// Unbounded store of subscribers keyed by email.
#[derive(Debug, Clone, Default)]
pub struct SubscriberRepository {
    subscribers: Vec<Subscriber>,
}

impl SubscriberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Store `subscriber`.
    ///
    /// # Errors
    /// `DuplicateEmail` if the email is already registered.
    pub fn add_subscriber(&mut self, subscriber: Subscriber) -> Result<()> {
        if self.find_subscriber_by_email(subscriber.email()).is_some() {
            warn!(email = subscriber.email(), "Rejected duplicate email");
            return Err(CatalogError::DuplicateEmail {
                email: subscriber.email().to_string(),
            });
        }
        debug!(email = subscriber.email(), plan = subscriber.plan().name(), "Added subscriber");
        self.subscribers.push(subscriber);
        Ok(())
    }

    /// Exact email lookup
    pub fn find_subscriber_by_email(&self, email: &str) -> Option<&Subscriber> {
        self.subscribers.iter().find(|s| s.email() == email)
    }

    pub fn find_subscriber_by_email_mut(&mut self, email: &str) -> Option<&mut Subscriber> {
        self.subscribers.iter_mut().find(|s| s.email() == email)
    }

    /// Mark the subscriber with `email` inactive.
    ///
    /// Returns `false`, changing nothing, when no subscriber has this email.
    pub fn deactivate_subscriber(&mut self, email: &str) -> bool {
        self.set_active(email, false)
    }

    /// Mark the subscriber with `email` active again.
    ///
    /// Returns `false`, changing nothing, when no subscriber has this email.
    pub fn activate_subscriber(&mut self, email: &str) -> bool {
        self.set_active(email, true)
    }

    fn set_active(&mut self, email: &str, active: bool) -> bool {
        match self.find_subscriber_by_email_mut(email) {
            Some(subscriber) => {
                if active {
                    subscriber.activate();
                } else {
                    subscriber.deactivate();
                }
                debug!(email, active, "Subscriber status changed");
                true
            }
            None => {
                debug!(email, "Status change for unknown subscriber ignored");
                false
            }
        }
    }

    /// All subscribers in insertion order
    pub fn get_subscribers(&self) -> &[Subscriber] {
        &self.subscribers
    }
}
