//! Recommendation crate for the streaming catalog.
//!
//! This crate contains the engine that turns a content repository and a
//! subscriber into a short list of unseen titles in the subscriber's
//! favorite genres.

pub mod engine;

pub use engine::{RecommendationEngine, format_recommendations};
