//! Plant operations for the Greenhouse.

use log::{debug, info};
use serde::Serialize;

use super::Greenhouse;
use crate::{
    db::PlantStore,
    error::Result,
    models::{Plant, PlantPage, UpdatePlantRequest},
    params::{CreatePlant, PageRequest},
};

/// Outcome of creating a plant: its new ID and the listing after the insert.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreatedPlant {
    pub id: u64,
    pub page: PlantPage,
}

/// Outcome of deleting a plant: its former ID and the remaining listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeletedPlant {
    pub id: u64,
    pub page: PlantPage,
}

impl Greenhouse {
    /// Lists one page of all plants, ordered by ID.
    pub async fn list_plants(&self, page: PageRequest) -> Result<PlantPage> {
        let per_page = self.page_size;

        self.with_read_session(move |session| {
            let plants = session.list_plants()?;
            Ok(PlantPage::paginate(plants, page.page, per_page))
        })
        .await
    }

    /// Retrieves a plant by its ID.
    pub async fn get_plant(&self, id: u64) -> Result<Plant> {
        self.with_read_session(move |session| session.get_plant(id))
            .await
    }

    /// Inserts a new plant and returns its ID together with the requested
    /// page of the updated listing.
    ///
    /// The insert and the follow-up listing share one transaction: if the
    /// listing fails, the insert is rolled back as well.
    pub async fn create_plant(&self, draft: CreatePlant, page: PageRequest) -> Result<CreatedPlant> {
        draft.validate()?;
        let per_page = self.page_size;

        let created = self
            .with_session(move |session| {
                let plant = session.insert_plant(&draft)?;
                let plants = session.list_plants()?;
                Ok(CreatedPlant {
                    id: plant.id,
                    page: PlantPage::paginate(plants, page.page, per_page),
                })
            })
            .await?;

        info!("Created plant {}", created.id);
        Ok(created)
    }

    /// Applies a partial update to an existing plant and returns its ID.
    pub async fn update_plant(&self, id: u64, changes: UpdatePlantRequest) -> Result<u64> {
        changes.validate()?;
        if changes.is_empty() {
            debug!("Update for plant {id} carries no attributes");
        }

        self.with_session(move |session| session.update_plant(id, &changes))
            .await?;

        info!("Updated plant {id}");
        Ok(id)
    }

    /// Permanently deletes a plant and returns the requested page of what
    /// remains.
    pub async fn delete_plant(&self, id: u64, page: PageRequest) -> Result<DeletedPlant> {
        let per_page = self.page_size;

        let deleted = self
            .with_session(move |session| {
                session.get_plant(id)?;
                session.delete_plant(id)?;
                let plants = session.list_plants()?;
                Ok(DeletedPlant {
                    id,
                    page: PlantPage::paginate(plants, page.page, per_page),
                })
            })
            .await?;

        info!("Deleted plant {id}");
        Ok(deleted)
    }

    /// Lists one page of plants whose name contains `name`.
    ///
    /// The match is a case-sensitive substring match. `total` on the returned
    /// page is the number of matches before slicing.
    pub async fn search_plants(&self, name: &str, page: PageRequest) -> Result<PlantPage> {
        let name = name.to_string();
        let per_page = self.page_size;

        self.with_read_session(move |session| {
            let plants = session.find_plants_by_name(&name)?;
            Ok(PlantPage::paginate(plants, page.page, per_page))
        })
        .await
    }
}
