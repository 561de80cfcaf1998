use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result};
use menu_core::Catalog;
use serde::Deserialize;
use shared::{
    domain::{Category, CategoryKey, Dish, LocalizedText},
    error::CatalogError,
    filters::{CHEF_SPECIALTIES_KEY, STAR_ITEMS_KEY},
};
use tracing::info;

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    categories: Vec<Category>,
    dishes: Vec<Dish>,
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog '{}'", path.display()))?;
    parse_catalog(&raw).with_context(|| format!("invalid catalog '{}'", path.display()))
}

/// Parses and validates a catalog document.
///
/// A document without a `categories` list gets one inferred from the dishes
/// in order of first appearance, named by key.
pub fn parse_catalog(raw: &str) -> Result<Catalog> {
    let document: CatalogDocument =
        serde_json::from_str(raw).context("catalog is not a valid JSON document")?;

    let categories = if document.categories.is_empty() {
        infer_categories(&document.dishes)
    } else {
        document.categories
    };
    validate_catalog(&categories, &document.dishes)?;

    info!(
        dishes = document.dishes.len(),
        categories = categories.len(),
        "catalog loaded"
    );
    Ok(Catalog::new(categories, document.dishes))
}

pub fn validate_catalog(categories: &[Category], dishes: &[Dish]) -> Result<(), CatalogError> {
    let mut declared: HashSet<&CategoryKey> = HashSet::new();
    for category in categories {
        if is_reserved(&category.key) {
            return Err(CatalogError::ReservedCategory(category.key.clone()));
        }
        if !declared.insert(&category.key) {
            return Err(CatalogError::DuplicateCategory(category.key.clone()));
        }
    }

    let mut seen = HashSet::new();
    for (index, dish) in dishes.iter().enumerate() {
        if dish.id.as_str().trim().is_empty() {
            return Err(CatalogError::EmptyId { index });
        }
        if !seen.insert(&dish.id) {
            return Err(CatalogError::DuplicateId(dish.id.clone()));
        }
        if !declared.contains(&dish.category) {
            return Err(CatalogError::UnknownCategory {
                dish: dish.id.clone(),
                category: dish.category.clone(),
            });
        }
        if !dish.price.is_finite() || dish.price < 0.0 {
            return Err(CatalogError::InvalidPrice {
                dish: dish.id.clone(),
                price: dish.price,
            });
        }
    }
    Ok(())
}

fn is_reserved(key: &CategoryKey) -> bool {
    matches!(key.as_str(), "all" | STAR_ITEMS_KEY | CHEF_SPECIALTIES_KEY)
}

fn infer_categories(dishes: &[Dish]) -> Vec<Category> {
    let mut seen = HashSet::new();
    dishes
        .iter()
        .filter(|dish| seen.insert(dish.category.clone()))
        .map(|dish| Category {
            key: dish.category.clone(),
            name: LocalizedText::new(dish.category.as_str(), dish.category.as_str()),
        })
        .collect()
}
