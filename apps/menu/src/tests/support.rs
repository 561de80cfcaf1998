use menu_core::Catalog;
use shared::domain::{Category, CategoryKey, Diet, Dish, DishId, LocalizedText};

fn dish(id: &str, en: &str, ar: &str, category: &str, price: f64) -> Dish {
    Dish {
        id: DishId::new(id),
        name: LocalizedText::new(en, ar),
        description: LocalizedText::new(format!("{en} description"), format!("وصف {ar}")),
        category: CategoryKey::new(category),
        price,
        price_per_piece: false,
        image: format!("/img/{id}.jpg"),
        images: Vec::new(),
        diet: Diet::NonVegetarian,
        calories: None,
        is_star: false,
        is_chef_specialty: false,
        popularity: None,
        ingredients: Vec::new(),
        allergens: Vec::new(),
        country: None,
        spice_level: None,
    }
}

pub fn sample_catalog() -> Catalog {
    let categories = vec![
        Category {
            key: CategoryKey::new("sushi"),
            name: LocalizedText::new("Sushi", "سوشي"),
        },
        Category {
            key: CategoryKey::new("noodles"),
            name: LocalizedText::new("Noodles", "نودلز"),
        },
    ];

    let mut salmon = dish("salmon-nigiri", "Salmon Nigiri", "نيغيري سلمون", "sushi", 12.0);
    salmon.price_per_piece = true;
    salmon.is_star = true;
    salmon.country = Some("JP".into());

    let mut maki = dish("veg-maki", "Veggie Maki", "ماكي نباتي", "sushi", 26.5);
    maki.diet = Diet::Vegetarian;
    maki.popularity = Some(40.0);

    let mut ramen = dish("tantan", "Tantanmen", "تانتانمن", "noodles", 58.0);
    ramen.is_chef_specialty = true;
    ramen.spice_level = Some(3);
    ramen.calories = Some(720);
    ramen.ingredients = vec!["sesame".into(), "pork".into()];
    ramen.images = vec!["/img/tantan-1.jpg".into(), "/img/tantan-2.jpg".into()];

    let mut udon = dish("udon", "Kake Udon", "أودون", "noodles", 34.0);
    udon.diet = Diet::Vegetarian;
    udon.popularity = Some(70.0);

    Catalog::new(categories, vec![salmon, maki, ramen, udon])
}
