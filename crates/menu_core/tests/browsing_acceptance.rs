use menu_core::{derive, Catalog, MenuSession, ModalCommand, NavKey};
use shared::{
    domain::{Category, Dish, DishId},
    filters::{CategoryFilter, FilterCriteria, PriceRange, SortBy},
    locale::Language,
};

const DISHES: &str = r#"[
    {"id": "hummus", "name": {"en": "Hummus", "ar": "حمص"},
     "description": {"en": "Chickpea dip", "ar": "غموس"},
     "category": "mezze", "price": 24, "image": "/img/hummus.jpg",
     "diet": "vegetarian", "popularity": 80},
    {"id": "halloumi", "name": {"en": "Halloumi", "ar": "حلوم"},
     "description": {"en": "Grilled cheese", "ar": "جبن مشوي"},
     "category": "mezze", "price": 38, "image": "/img/halloumi.jpg",
     "diet": "vegetarian", "isStar": true, "country": "CY"},
    {"id": "lamb", "name": {"en": "Lamb Ouzi", "ar": "قوزي"},
     "description": {"en": "Slow roasted", "ar": "مشوي"},
     "category": "grill", "price": 145, "image": "/img/lamb.jpg",
     "diet": "non-vegetarian", "isChefSpecialty": true, "isStar": true,
     "popularity": 95, "spiceLevel": 2},
    {"id": "kofta", "name": {"en": "Kofta", "ar": "كفتة"},
     "description": {"en": "Skewers", "ar": "أسياخ"},
     "category": "grill", "price": 100, "image": "/img/kofta.jpg",
     "diet": "non-vegetarian", "popularity": 60, "pricePerPiece": true},
    {"id": "kunafa", "name": {"en": "Kunafa", "ar": "كنافة"},
     "description": {"en": "Cheese pastry", "ar": "حلوى"},
     "category": "sweets", "price": 30, "image": "/img/kunafa.jpg",
     "diet": "vegetarian", "isChefSpecialty": true}
]"#;

const CATEGORIES: &str = r#"[
    {"key": "mezze", "name": {"en": "Mezze", "ar": "مقبلات"}},
    {"key": "grill", "name": {"en": "Grill", "ar": "مشاوي"}},
    {"key": "sweets", "name": {"en": "Sweets", "ar": "حلويات"}}
]"#;

fn catalog() -> Catalog {
    let categories: Vec<Category> = serde_json::from_str(CATEGORIES).expect("categories");
    let dishes: Vec<Dish> = serde_json::from_str(DISHES).expect("dishes");
    Catalog::new(categories, dishes)
}

fn ids(dishes: &[&Dish]) -> Vec<String> {
    dishes.iter().map(|d| d.id.to_string()).collect()
}

#[test]
fn default_view_orders_featured_dishes_first() {
    let session = MenuSession::new(catalog());
    assert_eq!(
        ids(&session.visible()),
        vec!["lamb", "halloumi", "kunafa", "hummus", "kofta"]
    );
    assert_eq!(
        ids(&session.star_rail()),
        vec!["halloumi", "lamb", "kunafa"]
    );
}

#[test]
fn session_and_pure_derive_agree() {
    let catalog = catalog();
    let mut session = MenuSession::new(catalog.clone());
    session.set_price_range(PriceRange::Over100);
    session.set_sort(SortBy::PriceAsc);

    let criteria = FilterCriteria {
        price_range: PriceRange::Over100,
        sort_by: SortBy::PriceAsc,
        ..FilterCriteria::default()
    };
    assert_eq!(
        ids(&session.visible()),
        ids(&derive(catalog.dishes(), &criteria))
    );
    assert_eq!(ids(&session.visible()), vec!["kofta", "lamb"]);
}

#[test]
fn browsing_flow_with_filter_change_while_detail_is_open() {
    let mut session = MenuSession::new(catalog());
    session.set_category(CategoryFilter::parse_lenient("grill"));
    assert!(session.open_by_id(&DishId::new("lamb")));

    let modal = session.modal().expect("open");
    assert_eq!(modal.position, Some(0));
    assert!(modal.has_next);
    assert!(!modal.has_previous);

    assert!(session.handle_key(NavKey::ArrowRight, Language::En));
    assert_eq!(session.active().map(|d| d.id.to_string()), Some("kofta".into()));

    session.set_category(CategoryFilter::parse_lenient("mezze"));
    assert!(!session.apply(ModalCommand::Next));
    assert!(!session.apply(ModalCommand::Previous));
    assert_eq!(session.active().map(|d| d.id.to_string()), Some("kofta".into()));

    assert!(session.apply(ModalCommand::Close));
    assert!(session.modal().is_none());
}

#[test]
fn empty_result_is_a_valid_state() {
    let mut session = MenuSession::new(catalog());
    session.set_category(CategoryFilter::ChefSpecialties);
    session.set_price_range(PriceRange::Under30);
    assert_eq!(ids(&session.visible()), vec!["kunafa"]);

    session.set_price_range(PriceRange::parse_lenient("under50"));
    session.set_category(CategoryFilter::parse_lenient("sweets"));
    session.set_chef_special_only(true);
    assert_eq!(session.visible_len(), 1);

    session.set_category(CategoryFilter::parse_lenient("mezze"));
    assert!(session.visible().is_empty());
    assert!(session.sections().is_empty());
}
