//! Pure derivation of the visible menu from a catalog and filter criteria.
//!
//! Nothing here holds state: the same inputs always produce the same
//! sequence, so callers may re-derive after every criteria change.

use std::cmp::Ordering;
use std::collections::HashMap;

use shared::{
    domain::{CategoryKey, Dish},
    filters::{CategoryFilter, FilterCriteria, SortBy, CHEF_SPECIALTIES_KEY, STAR_ITEMS_KEY},
};
use tracing::trace;

/// Filters then stably sorts `catalog` under `criteria`.
pub fn derive<'a>(catalog: &'a [Dish], criteria: &FilterCriteria) -> Vec<&'a Dish> {
    let category = resolve_category(catalog, &criteria.category);
    let mut visible: Vec<&Dish> = catalog
        .iter()
        .filter(|dish| matches_category(dish, &category) && matches_refinements(dish, criteria))
        .collect();
    // slice::sort_by is stable, so equal keys keep catalog order.
    visible.sort_by(|a, b| compare(a, b, criteria.sort_by));
    trace!(
        total = catalog.len(),
        visible = visible.len(),
        sort = %criteria.sort_by,
        "derived menu"
    );
    visible
}

/// Same as [`derive`] but yields positions into `catalog`.
pub fn derive_indices(catalog: &[Dish], criteria: &FilterCriteria) -> Vec<usize> {
    let category = resolve_category(catalog, &criteria.category);
    let mut visible: Vec<usize> = catalog
        .iter()
        .enumerate()
        .filter(|(_, dish)| matches_category(dish, &category) && matches_refinements(dish, criteria))
        .map(|(index, _)| index)
        .collect();
    visible.sort_by(|&a, &b| compare(&catalog[a], &catalog[b], criteria.sort_by));
    visible
}

/// A key no dish in `catalog` belongs to degrades to [`CategoryFilter::All`],
/// like any other unrecognized selector value.
pub fn resolve_category(catalog: &[Dish], category: &CategoryFilter) -> CategoryFilter {
    match category {
        CategoryFilter::Key(key) if !catalog.iter().any(|dish| &dish.category == key) => {
            trace!(category = %key, "unknown category key, showing all");
            CategoryFilter::All
        }
        other => other.clone(),
    }
}

/// True when `dish` passes every active predicate of `criteria`, taking the
/// category literally.
pub fn matches_criteria(dish: &Dish, criteria: &FilterCriteria) -> bool {
    matches_category(dish, &criteria.category) && matches_refinements(dish, criteria)
}

fn matches_refinements(dish: &Dish, criteria: &FilterCriteria) -> bool {
    (!criteria.chef_special_only || dish.is_chef_specialty)
        && criteria.diet.matches(dish.diet)
        && criteria.price_range.matches(dish.price)
}

fn matches_category(dish: &Dish, category: &CategoryFilter) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::StarItems => dish.is_star,
        CategoryFilter::ChefSpecialties => dish.is_chef_specialty,
        CategoryFilter::Key(key) => &dish.category == key,
    }
}

fn compare(a: &Dish, b: &Dish, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::PriceAsc => a.price.total_cmp(&b.price),
        SortBy::PriceDesc => b.price.total_cmp(&a.price),
        SortBy::Popularity => b.popularity_score().total_cmp(&a.popularity_score()),
        SortBy::Default => b
            .default_rank()
            .cmp(&a.default_rank())
            .then_with(|| b.popularity_score().total_cmp(&a.popularity_score())),
    }
}

/// A run of visible dishes sharing one category, for sectioned rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySection<'a> {
    pub key: CategoryKey,
    pub dishes: Vec<&'a Dish>,
}

fn is_synthetic(key: &CategoryKey) -> bool {
    key.as_str() == STAR_ITEMS_KEY || key.as_str() == CHEF_SPECIALTIES_KEY
}

/// Groups an already derived sequence by category.
///
/// Sections follow `category_order`; keys missing from it come after, in
/// order of first appearance. Empty sections are never emitted and the
/// synthetic rail keys never form a section.
pub fn group_by_category<'a>(
    sequence: &[&'a Dish],
    category_order: &[CategoryKey],
) -> Vec<CategorySection<'a>> {
    let mut buckets: HashMap<&CategoryKey, Vec<&'a Dish>> = HashMap::new();
    let mut appearance: Vec<&CategoryKey> = Vec::new();
    for &dish in sequence {
        let bucket = buckets.entry(&dish.category).or_insert_with(|| {
            appearance.push(&dish.category);
            Vec::new()
        });
        bucket.push(dish);
    }

    let unlisted = appearance
        .into_iter()
        .filter(|key| !category_order.contains(*key));

    category_order
        .iter()
        .chain(unlisted)
        .filter(|key| !is_synthetic(key))
        .filter_map(|key| {
            buckets.remove(key).map(|dishes| CategorySection {
                key: key.clone(),
                dishes,
            })
        })
        .collect()
}

/// Featured dishes (star or chef specialty) in catalog order. Ignores the
/// criteria entirely.
pub fn star_rail(catalog: &[Dish]) -> Vec<&Dish> {
    catalog.iter().filter(|dish| dish.is_featured()).collect()
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
