//! Plant CRUD operations and queries.

use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::{PlantStore, Session};
use crate::{
    error::{DatabaseResultExt, GreenhouseError, Result},
    models::{Plant, UpdatePlantRequest},
    params::CreatePlant,
};

const PLANT_COLUMNS: &str = "id, name, scientific_name, is_poisonous, primary_color, image_link";

const INSERT_PLANT_SQL: &str = "INSERT INTO plants (name, scientific_name, is_poisonous, primary_color, image_link) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_PLANT_SQL: &str = "UPDATE plants SET name = ?1, scientific_name = ?2, is_poisonous = ?3, primary_color = ?4, image_link = ?5 WHERE id = ?6";
const DELETE_PLANT_SQL: &str = "DELETE FROM plants WHERE id = ?1";

fn plant_from_row(row: &Row<'_>) -> rusqlite::Result<Plant> {
    Ok(Plant {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        scientific_name: row.get(2)?,
        is_poisonous: row.get(3)?,
        primary_color: row.get(4)?,
        image_link: row.get(5)?,
    })
}

impl Session<'_> {
    fn query_plants(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Plant>> {
        let mut stmt = self.tx.prepare(sql).db_context("Failed to prepare query")?;

        let plants = stmt
            .query_map(params, plant_from_row)
            .db_context("Failed to query plants")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plants");
        plants
    }
}

impl PlantStore for Session<'_> {
    fn get_plant(&self, id: u64) -> Result<Plant> {
        let sql = format!("SELECT {PLANT_COLUMNS} FROM plants WHERE id = ?1");

        self.tx
            .query_row(&sql, params![id as i64], plant_from_row)
            .optional()
            .db_context("Failed to query plant")?
            .ok_or(GreenhouseError::PlantNotFound { id })
    }

    fn list_plants(&self) -> Result<Vec<Plant>> {
        let sql = format!("SELECT {PLANT_COLUMNS} FROM plants ORDER BY id ASC");
        self.query_plants(&sql, [])
    }

    fn find_plants_by_name(&self, text: &str) -> Result<Vec<Plant>> {
        // instr() is case-sensitive and treats the needle literally, unlike LIKE.
        let sql =
            format!("SELECT {PLANT_COLUMNS} FROM plants WHERE instr(name, ?1) > 0 ORDER BY id ASC");
        let plants = self.query_plants(&sql, params![text])?;
        debug!("Name search '{text}' matched {} plant(s)", plants.len());
        Ok(plants)
    }

    fn insert_plant(&self, draft: &CreatePlant) -> Result<Plant> {
        self.tx
            .execute(
                INSERT_PLANT_SQL,
                params![
                    draft.name,
                    draft.scientific_name,
                    draft.is_poisonous,
                    draft.primary_color,
                    draft.image_link
                ],
            )
            .db_context("Failed to insert plant")?;

        let id = self.tx.last_insert_rowid() as u64;
        debug!("Inserted plant {id}");

        Ok(Plant {
            id,
            name: draft.name.clone(),
            scientific_name: draft.scientific_name.clone(),
            is_poisonous: draft.is_poisonous,
            primary_color: draft.primary_color.clone(),
            image_link: draft.image_link.clone(),
        })
    }

    fn update_plant(&self, id: u64, changes: &UpdatePlantRequest) -> Result<()> {
        let mut plant = self.get_plant(id)?;
        changes.apply_to(&mut plant);

        let rows_affected = self
            .tx
            .execute(
                UPDATE_PLANT_SQL,
                params![
                    plant.name,
                    plant.scientific_name,
                    plant.is_poisonous,
                    plant.primary_color,
                    plant.image_link,
                    id as i64
                ],
            )
            .db_context("Failed to update plant")?;

        if rows_affected == 0 {
            return Err(GreenhouseError::PlantNotFound { id });
        }
        debug!("Updated plant {id}");
        Ok(())
    }

    fn delete_plant(&self, id: u64) -> Result<()> {
        let rows_affected = self
            .tx
            .execute(DELETE_PLANT_SQL, params![id as i64])
            .db_context("Failed to delete plant")?;

        if rows_affected == 0 {
            return Err(GreenhouseError::PlantNotFound { id });
        }
        debug!("Deleted plant {id}");
        Ok(())
    }
}
