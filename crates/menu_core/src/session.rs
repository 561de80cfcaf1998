use shared::{
    domain::{Dish, DishId},
    filters::{CategoryFilter, DietFilter, FilterCriteria, PriceRange, SortBy, ViewMode},
    locale::Language,
};
use tracing::{debug, warn};

use crate::{
    catalog::Catalog,
    engine::{self, CategorySection},
    input::{self, ModalCommand, NavKey},
    selection::{ModalSnapshot, SelectionController},
    store::FilterStore,
};

/// One browsing session: the catalog, the criteria and the open detail view.
///
/// Filter setters re-derive the visible sequence before returning, so every
/// read after a setter observes the new criteria.
#[derive(Debug, Clone)]
pub struct MenuSession {
    catalog: Catalog,
    store: FilterStore,
    selection: SelectionController,
    visible: Vec<usize>,
}

impl MenuSession {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_criteria(catalog, FilterCriteria::default())
    }

    pub fn with_criteria(catalog: Catalog, mut criteria: FilterCriteria) -> Self {
        criteria.category = engine::resolve_category(catalog.dishes(), &criteria.category);
        let visible = engine::derive_indices(catalog.dishes(), &criteria);
        Self {
            catalog,
            store: FilterStore::with_criteria(criteria),
            selection: SelectionController::new(),
            visible,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        self.store.criteria()
    }

    /// The derived sequence for the current criteria.
    pub fn visible(&self) -> Vec<&Dish> {
        let dishes = self.catalog.dishes();
        self.visible.iter().map(|&index| &dishes[index]).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// A key no dish belongs to is stored as `All`.
    pub fn set_category(&mut self, category: CategoryFilter) {
        let category = engine::resolve_category(self.catalog.dishes(), &category);
        self.store.set_category(category);
        self.refresh();
    }

    pub fn set_diet(&mut self, diet: DietFilter) {
        self.store.set_diet(diet);
        self.refresh();
    }

    pub fn set_price_range(&mut self, price_range: PriceRange) {
        self.store.set_price_range(price_range);
        self.refresh();
    }

    pub fn set_sort(&mut self, sort_by: SortBy) {
        self.store.set_sort(sort_by);
        self.refresh();
    }

    pub fn set_chef_special_only(&mut self, chef_special_only: bool) {
        self.store.set_chef_special_only(chef_special_only);
        self.refresh();
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.store.set_view_mode(view_mode);
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.store.clear_filters();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.visible = engine::derive_indices(self.catalog.dishes(), self.store.criteria());
        debug!(
            visible = self.visible.len(),
            total = self.catalog.len(),
            "menu re-derived"
        );
        if let Some(active) = self.selection.active() {
            if self.selection.position(&self.visible()).is_none() {
                debug!(dish = %active.id, "open dish is hidden by the current filters");
            }
        }
    }

    /// Category sections of the visible sequence in catalog order.
    pub fn sections(&self) -> Vec<CategorySection<'_>> {
        engine::group_by_category(&self.visible(), &self.catalog.category_order())
    }

    /// The featured rail, shown only while no filter is active.
    pub fn star_rail(&self) -> Vec<&Dish> {
        if self.criteria().has_active_filters() {
            Vec::new()
        } else {
            engine::star_rail(self.catalog.dishes())
        }
    }

    pub fn active(&self) -> Option<&Dish> {
        self.selection.active()
    }

    pub fn open(&mut self, dish: &Dish) {
        self.selection.open(dish);
    }

    /// Opens a dish from anywhere in the catalog. Returns `false` for an
    /// unknown id and leaves the selection unchanged.
    pub fn open_by_id(&mut self, id: &DishId) -> bool {
        match self.catalog.get(id) {
            Some(dish) => {
                self.selection.open(dish);
                true
            }
            None => {
                warn!(dish = %id, "cannot open unknown dish");
                false
            }
        }
    }

    pub fn close(&mut self) {
        self.selection.close();
    }

    pub fn next(&mut self) -> bool {
        let dishes = self.catalog.dishes();
        let sequence: Vec<&Dish> = self.visible.iter().map(|&index| &dishes[index]).collect();
        self.selection.next(&sequence)
    }

    pub fn previous(&mut self) -> bool {
        let dishes = self.catalog.dishes();
        let sequence: Vec<&Dish> = self.visible.iter().map(|&index| &dishes[index]).collect();
        self.selection.previous(&sequence)
    }

    /// Runs a detail-view command. Returns whether the selection changed.
    pub fn apply(&mut self, command: ModalCommand) -> bool {
        match command {
            ModalCommand::Close => {
                let was_open = self.selection.is_open();
                self.close();
                was_open
            }
            ModalCommand::Previous => self.previous(),
            ModalCommand::Next => self.next(),
        }
    }

    /// Keys only act while a dish is open.
    pub fn handle_key(&mut self, key: NavKey, language: Language) -> bool {
        if !self.selection.is_open() {
            return false;
        }
        self.apply(input::command_for_key(key, language))
    }

    pub fn modal(&self) -> Option<ModalSnapshot<'_>> {
        self.selection.snapshot(&self.visible())
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
