//! Core library for the Greenhouse plant catalogue.
//!
//! This crate provides everything below the HTTP surface: the [`Plant`]
//! model, the SQLite-backed [`PlantStore`], pagination, and the async
//! [`Greenhouse`] facade whose operations each run in their own
//! all-or-nothing session.
//!
//! # Quick Start
//!
//! ```rust
//! use greenhouse_core::{
//!     params::{CreatePlant, PageRequest},
//!     GreenhouseBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let greenhouse = GreenhouseBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let created = greenhouse
//!     .create_plant(CreatePlant::named("Fern"), PageRequest::default())
//!     .await?;
//! println!("Created plant {}", created.id);
//!
//! let page = greenhouse.list_plants(PageRequest::default()).await?;
//! for plant in &page.plants {
//!     println!("{}: {}", plant.id, plant.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod error;
pub mod greenhouse;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use db::{Database, PlantStore, Session};
pub use error::{GreenhouseError, Result};
pub use greenhouse::{CreatedPlant, DeletedPlant, Greenhouse, GreenhouseBuilder};
pub use models::{Plant, PlantPage, UpdatePlantRequest, PLANTS_PER_PAGE};
pub use params::{CreatePlant, PageRequest};
