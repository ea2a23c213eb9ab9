//! Request types for updating models.

use serde::{Deserialize, Serialize};

use super::Plant;
use crate::error::{GreenhouseError, Result};

/// Partial set of plant attributes for an update.
///
/// Every field is optional. A field that is absent (or `null`) in the request
/// leaves the stored value untouched; a present field replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePlantRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub is_poisonous: Option<bool>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub image_link: Option<String>,
}

impl UpdatePlantRequest {
    /// Parse a partial update from a raw JSON request body.
    ///
    /// # Errors
    ///
    /// * `GreenhouseError::Serialization` - body is not a JSON object of
    ///   known plant attributes
    /// * `GreenhouseError::InvalidInput` - a provided name is blank
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let request: Self = serde_json::from_slice(body)?;
        request.validate()?;
        Ok(request)
    }

    /// Rejects a name that is present but blank.
    pub fn validate(&self) -> Result<()> {
        match self.name.as_deref() {
            Some(name) if name.trim().is_empty() => {
                Err(GreenhouseError::invalid_input("name").with_reason("must not be blank"))
            }
            _ => Ok(()),
        }
    }

    /// Returns true when no attribute would change.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merge the provided attributes onto `plant`, field by field.
    pub fn apply_to(&self, plant: &mut Plant) {
        if let Some(ref name) = self.name {
            plant.name.clone_from(name);
        }
        if let Some(ref scientific_name) = self.scientific_name {
            plant.scientific_name = Some(scientific_name.clone());
        }
        if let Some(is_poisonous) = self.is_poisonous {
            plant.is_poisonous = is_poisonous;
        }
        if let Some(ref primary_color) = self.primary_color {
            plant.primary_color = Some(primary_color.clone());
        }
        if let Some(ref image_link) = self.image_link {
            plant.image_link = Some(image_link.clone());
        }
    }
}
