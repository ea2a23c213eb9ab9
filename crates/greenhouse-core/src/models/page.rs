//! Page-sized projections of plant query results.

use serde::Serialize;

use super::Plant;

/// Number of plants returned per page unless configured otherwise.
pub const PLANTS_PER_PAGE: usize = 10;

/// One page of an ordered plant query.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlantPage {
    /// Plants on the requested page, ordered by ID
    pub plants: Vec<Plant>,

    /// One-based number of the page that was requested
    pub current_page: u32,

    /// Number of matching plants before slicing
    pub total: usize,
}

impl PlantPage {
    /// Slice `plants` down to page `page` of `per_page` items.
    ///
    /// `page` is one-based; zero is treated as the first page. A page past
    /// the end of the result yields an empty slice, the caller decides
    /// whether that means "not found".
    pub fn paginate(plants: Vec<Plant>, page: u32, per_page: usize) -> Self {
        let current_page = page.max(1);
        let total = plants.len();
        let start = (current_page as usize - 1).saturating_mul(per_page);

        let plants = plants.into_iter().skip(start).take(per_page).collect();

        Self {
            plants,
            current_page,
            total,
        }
    }

    /// Returns true when the page holds no plants.
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}
