//! # Catalog Crate
//!
//! Entities and in-memory repositories of the streaming catalog.
//!
//! ## Main Components
//!
//! - **content**: `Content` with its Movie/Series payload and the series `EpisodeGrid`
//! - **subscriber**: `Subscriber` with watch history and favorite genres
//! - **repository**: `ContentRepository` (capacity-bounded) and `SubscriberRepository`
//! - **types**: `SubscriptionPlan`, `Credential`, rating bounds
//! - **error**: `CatalogError` taxonomy
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{Content, ContentRepository};
//!
//! let mut repo = ContentRepository::new(100)?;
//! repo.add_content(Content::movie("Inception", "Sci-Fi", "Christopher Nolan", 148)?)?;
//!
//! let inception = repo.find_content_by_title_mut("Inception").unwrap();
//! inception.add_rating(4.5)?;
//! assert_eq!(inception.average_rating(), 4.5);
//! # Ok::<(), catalog::CatalogError>(())
//! ```

pub mod content;
pub mod error;
pub mod repository;
pub mod subscriber;
pub mod types;

// Re-export commonly used types for convenience
pub use content::{Content, ContentKind, EpisodeGrid};
pub use error::{CatalogError, Result};
pub use repository::{ContentRepository, SubscriberRepository};
pub use subscriber::Subscriber;
pub use types::{Credential, Genre, SubscriptionPlan, MAX_RATING, MIN_RATING};
