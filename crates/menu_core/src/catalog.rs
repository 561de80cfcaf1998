use std::sync::Arc;

use shared::domain::{Category, CategoryKey, Dish, DishId};

/// Immutable, cheaply cloneable menu catalog.
///
/// Built once by the loader; every view the engine produces borrows from it.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Arc<[Category]>,
    dishes: Arc<[Dish]>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, dishes: Vec<Dish>) -> Self {
        Self {
            categories: categories.into(),
            dishes: dishes.into(),
        }
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category keys in declared display order.
    pub fn category_order(&self) -> Vec<CategoryKey> {
        self.categories.iter().map(|c| c.key.clone()).collect()
    }

    pub fn category(&self, key: &CategoryKey) -> Option<&Category> {
        self.categories.iter().find(|c| &c.key == key)
    }

    pub fn get(&self, id: &DishId) -> Option<&Dish> {
        self.dishes.iter().find(|d| &d.id == id)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
