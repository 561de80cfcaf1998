use shared::domain::{CategoryKey, Diet, Dish, DishId, LocalizedText};

pub fn dish(id: &str, category: &str, price: f64) -> Dish {
    Dish {
        id: DishId::new(id),
        name: LocalizedText::new(format!("{id} en"), format!("{id} ar")),
        description: LocalizedText::default(),
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

pub fn starred(mut dish: Dish) -> Dish {
    dish.is_star = true;
    dish
}

pub fn chef(mut dish: Dish) -> Dish {
    dish.is_chef_specialty = true;
    dish
}

pub fn veg(mut dish: Dish) -> Dish {
    dish.diet = Diet::Vegetarian;
    dish
}

pub fn popular(mut dish: Dish, popularity: f64) -> Dish {
    dish.popularity = Some(popularity);
    dish
}

pub fn ids(dishes: &[&Dish]) -> Vec<String> {
    dishes.iter().map(|dish| dish.id.0.clone()).collect()
}
