//! Plant model definition.

use serde::{Deserialize, Serialize};

/// A single catalogued plant as stored in the `plants` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plant {
    /// Unique identifier assigned by the database on insert
    pub id: u64,

    /// Common name of the plant
    pub name: String,

    /// Botanical (Latin) name
    pub scientific_name: Option<String>,

    /// Whether the plant is toxic to people or pets
    #[serde(default)]
    pub is_poisonous: bool,

    /// Dominant colour of the foliage or flower
    pub primary_color: Option<String>,

    /// Link to a picture of the plant
    pub image_link: Option<String>,
}
