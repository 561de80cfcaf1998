use super::*;

#[test]
fn selectors_parse_wire_strings() {
    assert_eq!(DietFilter::parse_lenient("non-vegetarian"), DietFilter::NonVegetarian);
    assert_eq!(PriceRange::parse_lenient("over100"), PriceRange::Over100);
    assert_eq!(SortBy::parse_lenient("price-desc"), SortBy::PriceDesc);
    assert_eq!(ViewMode::parse_lenient("list"), ViewMode::List);
}

#[test]
fn unknown_selector_values_degrade_to_default() {
    assert_eq!(DietFilter::parse_lenient("pescatarian"), DietFilter::All);
    assert_eq!(PriceRange::parse_lenient("under10"), PriceRange::All);
    assert_eq!(SortBy::parse_lenient("rating"), SortBy::Default);
    assert_eq!(ViewMode::parse_lenient("carousel"), ViewMode::Grid);
}

#[test]
fn category_filter_recognizes_synthetic_keys() {
    assert_eq!(CategoryFilter::parse_lenient("all"), CategoryFilter::All);
    assert_eq!(CategoryFilter::parse_lenient(""), CategoryFilter::All);
    assert_eq!(CategoryFilter::parse_lenient("starItems"), CategoryFilter::StarItems);
    assert_eq!(
        CategoryFilter::parse_lenient("chefSpecialties"),
        CategoryFilter::ChefSpecialties
    );
    assert_eq!(
        CategoryFilter::parse_lenient("sushi"),
        CategoryFilter::Key(CategoryKey::new("sushi"))
    );
}

#[test]
fn price_range_bounds_are_inclusive_on_both_sides_of_100() {
    assert!(PriceRange::Under30.matches(30.0));
    assert!(!PriceRange::Under30.matches(30.5));
    assert!(PriceRange::Under100.matches(100.0));
    assert!(PriceRange::Over100.matches(100.0));
    assert!(!PriceRange::Over100.matches(99.99));
    assert!(PriceRange::All.matches(0.0));
}

#[test]
fn criteria_deserialize_with_unknown_values_and_missing_fields() {
    let criteria: FilterCriteria = serde_json::from_str(
        r#"{"category":"chefSpecialties","diet":"keto","sortBy":"price-asc"}"#,
    )
    .expect("criteria json");

    assert_eq!(criteria.category, CategoryFilter::ChefSpecialties);
    assert_eq!(criteria.diet, DietFilter::All);
    assert_eq!(criteria.price_range, PriceRange::All);
    assert_eq!(criteria.sort_by, SortBy::PriceAsc);
    assert!(!criteria.chef_special_only);
    assert_eq!(criteria.view_mode, ViewMode::Grid);
}

#[test]
fn criteria_serialize_to_wire_strings() {
    let criteria = FilterCriteria {
        price_range: PriceRange::Under50,
        view_mode: ViewMode::List,
        ..FilterCriteria::default()
    };
    let json = serde_json::to_value(&criteria).expect("serialize");
    assert_eq!(json["priceRange"], "under50");
    assert_eq!(json["viewMode"], "list");
    assert_eq!(json["category"], "all");
}

#[test]
fn view_mode_alone_is_not_an_active_filter() {
    let criteria = FilterCriteria {
        view_mode: ViewMode::List,
        ..FilterCriteria::default()
    };
    assert!(!criteria.has_active_filters());
}

#[test]
fn category_counts_as_active_filter_but_not_as_refinement() {
    let criteria = FilterCriteria {
        category: CategoryFilter::StarItems,
        ..FilterCriteria::default()
    };
    assert!(criteria.has_active_filters());
    assert!(!criteria.has_refinements());
    assert!(criteria.active_facets().is_empty());
}

#[test]
fn active_facets_follow_panel_order() {
    let criteria = FilterCriteria {
        chef_special_only: true,
        sort_by: SortBy::Popularity,
        diet: DietFilter::Vegetarian,
        ..FilterCriteria::default()
    };
    assert_eq!(
        criteria.active_facets(),
        vec![
            ActiveFacet::Diet(DietFilter::Vegetarian),
            ActiveFacet::Sort(SortBy::Popularity),
            ActiveFacet::ChefSpecial,
        ]
    );
}
