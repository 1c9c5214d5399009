//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use crate::context::ViewerContext;
use anyhow::Result;
use catalog::Content;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Candidates are borrowed from the `ContentRepository`; filters never copy content
/// - Filters take ownership of the Vec and return the survivors in their original order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `context` - Viewer context containing favorite genres and history
    ///
    /// # Returns
    /// * `Ok(Vec<&Content>)` - The filtered candidates
    /// * `Err` - If filtering fails
    fn apply<'a>(
        &self,
        candidates: Vec<&'a Content>,
        context: &ViewerContext,
    ) -> Result<Vec<&'a Content>>;
}
