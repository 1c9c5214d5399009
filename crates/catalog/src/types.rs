//! Shared value types for the streaming catalog.
//!
//! Content titles and subscriber emails are the unique keys of their
//! repositories. Genres are free-form strings compared exactly.

use crate::error::{require_non_empty, CatalogError, Result};
use serde::Serialize;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Genre label, e.g. "Sci-Fi" or "Crime" (case-sensitive)
pub type Genre = String;

/// Lowest accepted rating value
pub const MIN_RATING: f32 = 0.0;

/// Highest accepted rating value
pub const MAX_RATING: f32 = 5.0;

// =============================================================================
// Subscription Plan
// =============================================================================

/// A subscription tier. Informational only: the stream limit is never
/// enforced against watch history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionPlan {
    name: String,
    price: f64,
    max_streams: u8,
}

impl SubscriptionPlan {
    /// Create a plan.
    ///
    /// # Errors
    /// `InvalidArgument` if the name is empty, the price is negative or not
    /// finite, or `max_streams` is zero.
    pub fn new(name: impl Into<String>, price: f64, max_streams: u8) -> Result<Self> {
        let name = name.into();
        require_non_empty("plan name", &name)?;
        if !price.is_finite() || price < 0.0 {
            return Err(CatalogError::invalid("plan price", format!("{price} is not a valid price")));
        }
        if max_streams == 0 {
            return Err(CatalogError::invalid("plan max_streams", "must be at least 1"));
        }
        Ok(Self {
            name,
            price,
            max_streams,
        })
    }

    pub fn basic() -> Self {
        Self {
            name: "Basic".to_string(),
            price: 7.99,
            max_streams: 1,
        }
    }

    pub fn standard() -> Self {
        Self {
            name: "Standard".to_string(),
            price: 15.49,
            max_streams: 2,
        }
    }

    pub fn premium() -> Self {
        Self {
            name: "Premium".to_string(),
            price: 22.99,
            max_streams: 4,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn max_streams(&self) -> u8 {
        self.max_streams
    }
}

impl fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (${:.2}/month, {} stream{})",
            self.name,
            self.price,
            self.max_streams,
            if self.max_streams == 1 { "" } else { "s" }
        )
    }
}

// =============================================================================
// Credential
// =============================================================================

/// Opaque subscriber credential.
///
/// Stored as given and never inspected. `Debug` and `Display` redact it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_presets() {
        assert_eq!(SubscriptionPlan::basic().max_streams(), 1);
        assert_eq!(SubscriptionPlan::standard().price(), 15.49);
        assert_eq!(SubscriptionPlan::premium().name(), "Premium");
    }

    #[test]
    fn test_plan_validation() {
        assert!(SubscriptionPlan::new("Family", 29.99, 6).is_ok());
        assert!(SubscriptionPlan::new("", 1.0, 1).is_err());
        assert!(SubscriptionPlan::new("Free", -1.0, 1).is_err());
        assert!(SubscriptionPlan::new("Broken", f64::NAN, 1).is_err());
        assert!(SubscriptionPlan::new("Nobody", 1.0, 0).is_err());
    }

    #[test]
    fn test_plan_display() {
        assert_eq!(SubscriptionPlan::basic().to_string(), "Basic ($7.99/month, 1 stream)");
        assert_eq!(SubscriptionPlan::premium().to_string(), "Premium ($22.99/month, 4 streams)");
    }

    #[test]
    fn test_credential_is_redacted() {
        let credential = Credential::new("SecurePass1!");
        assert_eq!(format!("{:?}", credential), "Credential(***)");
        assert_eq!(credential.to_string(), "***");
        assert_eq!(credential, Credential::new("SecurePass1!"));
        assert_ne!(credential, Credential::new("***"));
    }
}
