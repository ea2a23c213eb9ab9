//! Parameter structures for greenhouse operations.
//!
//! These types carry request input from the HTTP layer into the
//! [`Greenhouse`](crate::Greenhouse) operations. They derive serde so the
//! server can decode request bodies and query strings straight into them, but
//! carry no framework-specific attributes beyond that.

use std::num::IntErrorKind;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{GreenhouseError, Result};

/// Draft of a new plant, i.e. every attribute except the system-assigned ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePlant {
    /// Common name of the plant
    pub name: String,
    /// Botanical name
    #[serde(default)]
    pub scientific_name: Option<String>,
    /// Whether the plant is toxic
    #[serde(default)]
    pub is_poisonous: bool,
    /// Dominant colour
    #[serde(default)]
    pub primary_color: Option<String>,
    /// Link to a picture
    #[serde(default)]
    pub image_link: Option<String>,
}

impl CreatePlant {
    /// Draft with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse a plant draft from a raw JSON request body.
    ///
    /// # Errors
    ///
    /// * `GreenhouseError::Serialization` - body is not a valid draft
    /// * `GreenhouseError::InvalidInput` - name is blank
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let draft: Self = serde_json::from_slice(body)?;
        draft.validate()?;
        Ok(draft)
    }

    /// Validates the draft before it reaches the database.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GreenhouseError::invalid_input("name").with_reason("must not be blank"));
        }
        Ok(())
    }
}

/// Requested page of a listing.
///
/// Deserializes leniently from a query string: a missing, non-numeric or
/// non-positive `page` falls back to the first page, and one too large for
/// `u32` saturates to `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "first_page", deserialize_with = "lenient_page")]
    pub page: u32,
}

impl PageRequest {
    /// Request for the given one-based page.
    pub fn new(page: u32) -> Self {
        Self { page: page.max(1) }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: first_page() }
    }
}

fn first_page() -> u32 {
    1
}

fn lenient_page<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let page = match raw.as_deref().map(|value| value.trim().parse::<u32>()) {
        Some(Ok(page)) => page,
        // Past the last representable page is still past the end.
        Some(Err(e)) if *e.kind() == IntErrorKind::PosOverflow => u32::MAX,
        _ => first_page(),
    };
    Ok(page.max(first_page()))
}
