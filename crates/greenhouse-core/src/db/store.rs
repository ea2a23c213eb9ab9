//! The narrow persistence interface for plant records.

use crate::{
    error::Result,
    models::{Plant, UpdatePlantRequest},
    params::CreatePlant,
};

/// CRUD access to the plants collection.
///
/// Implementations run every call inside the transaction they were created
/// with; nothing is durable until that transaction commits.
pub trait PlantStore {
    /// Fetches a plant by ID.
    ///
    /// # Errors
    ///
    /// `GreenhouseError::PlantNotFound` if no plant has this ID.
    fn get_plant(&self, id: u64) -> Result<Plant>;

    /// Lists every plant ordered by ID ascending.
    fn list_plants(&self) -> Result<Vec<Plant>>;

    /// Lists plants whose name contains `text` (case-sensitive), ordered by
    /// ID ascending. No match is an empty vector, not an error.
    fn find_plants_by_name(&self, text: &str) -> Result<Vec<Plant>>;

    /// Inserts a draft and returns the stored plant with its new ID.
    fn insert_plant(&self, draft: &CreatePlant) -> Result<Plant>;

    /// Merges the provided attributes onto an existing plant.
    ///
    /// # Errors
    ///
    /// `GreenhouseError::PlantNotFound` if no plant has this ID.
    fn update_plant(&self, id: u64, changes: &UpdatePlantRequest) -> Result<()>;

    /// Permanently removes a plant.
    ///
    /// # Errors
    ///
    /// `GreenhouseError::PlantNotFound` if no plant has this ID.
    fn delete_plant(&self, id: u64) -> Result<()>;
}
