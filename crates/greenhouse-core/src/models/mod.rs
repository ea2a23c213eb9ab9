//! Data models for plants and paginated plant listings.
//!
//! [`Plant`] is a plain record with no persistence behaviour attached; all
//! reads and writes go through [`crate::db::PlantStore`]. Partial updates are
//! described by [`UpdatePlantRequest`], whose optional fields are merged onto
//! an existing plant one by one. [`PlantPage`] is the request-scoped slice of
//! an ordered query that every list-style response is built from.
//!
//! # Examples
//!
//! ```rust
//! use greenhouse_core::models::{Plant, PlantPage, UpdatePlantRequest};
//!
//! let mut plant = Plant {
//!     id: 1,
//!     name: "Fern".to_string(),
//!     scientific_name: Some("Nephrolepis exaltata".to_string()),
//!     is_poisonous: false,
//!     primary_color: Some("green".to_string()),
//!     image_link: None,
//! };
//!
//! let update = UpdatePlantRequest {
//!     name: Some("Boston Fern".to_string()),
//!     ..Default::default()
//! };
//! update.apply_to(&mut plant);
//! assert_eq!(plant.name, "Boston Fern");
//! assert_eq!(plant.primary_color.as_deref(), Some("green"));
//!
//! let page = PlantPage::paginate(vec![plant], 1, 10);
//! assert_eq!(page.total, 1);
//! ```

pub mod page;
pub mod plant;
pub mod requests;


pub use page::{PlantPage, PLANTS_PER_PAGE};
pub use plant::Plant;
pub use requests::UpdatePlantRequest;
