//! Pipeline for filtering catalog content into recommendation candidates.
//!
//! This crate provides:
//! - ViewerContext, a set-based snapshot of a subscriber's tastes and history
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//!
//! ## Architecture
//! Candidates are `&Content` borrowed from the repository. Filters only
//! remove entries; none of them reorder, so the pipeline output keeps the
//! repository's enumeration order.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, build_viewer_context};
//! use pipeline::filters::*;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(GenrePreferenceFilter)
//!     .add_filter(AlreadyWatchedFilter);
//!
//! let context = build_viewer_context(&subscriber);
//! let filtered = pipeline.apply(repo.iter().collect(), &context)?;
//! ```

pub mod context;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use context::{ViewerContext, build_viewer_context};
pub use filter_pipeline::FilterPipeline;
pub use traits::Filter;
