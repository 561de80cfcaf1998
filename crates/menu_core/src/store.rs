use shared::filters::{CategoryFilter, DietFilter, FilterCriteria, PriceRange, SortBy, ViewMode};
use tracing::debug;

/// Session-owned holder of the active [`FilterCriteria`].
///
/// Each setter replaces exactly one facet. Fields are private so the
/// criteria can only change through these methods.
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    criteria: FilterCriteria,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        debug!(facet = "category", value = %category, "filter changed");
        self.criteria.category = category;
    }

    pub fn set_diet(&mut self, diet: DietFilter) {
        debug!(facet = "diet", value = %diet, "filter changed");
        self.criteria.diet = diet;
    }

    pub fn set_price_range(&mut self, price_range: PriceRange) {
        debug!(facet = "price_range", value = %price_range, "filter changed");
        self.criteria.price_range = price_range;
    }

    pub fn set_sort(&mut self, sort_by: SortBy) {
        debug!(facet = "sort_by", value = %sort_by, "filter changed");
        self.criteria.sort_by = sort_by;
    }

    pub fn set_chef_special_only(&mut self, chef_special_only: bool) {
        debug!(facet = "chef_special_only", value = chef_special_only, "filter changed");
        self.criteria.chef_special_only = chef_special_only;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        debug!(facet = "view_mode", value = %view_mode, "filter changed");
        self.criteria.view_mode = view_mode;
    }

    /// Resets every filter and the sort order; the view mode is kept.
    pub fn clear_filters(&mut self) {
        debug!("filters cleared");
        self.criteria = FilterCriteria {
            view_mode: self.criteria.view_mode,
            ..FilterCriteria::default()
        };
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
