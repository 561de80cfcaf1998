//! Plain-text rendering of the derived menu and the detail view.

use std::fmt::{self, Write};

use menu_core::{Catalog, MenuSession, ModalSnapshot};
use shared::{
    country::{country_flag, country_name},
    domain::{CategoryKey, Diet, Dish, MAX_SPICE_LEVEL},
    filters::{ActiveFacet, DietFilter, PriceRange, SortBy, ViewMode},
    locale::Language,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Menu,
    Featured,
    NoResults,
    ChefBadge,
    StarBadge,
    Ingredients,
    Allergens,
    Spice,
    Origin,
    Previous,
    Next,
    Vegetarian,
    NonVegetarian,
    Over100,
    SortPopularity,
    SortPriceAsc,
    SortPriceDesc,
    ChefSpecial,
    HiddenByFilters,
}

pub fn label(label: Label, language: Language) -> &'static str {
    use Label::*;
    match (label, language) {
        (Menu, Language::En) => "Menu",
        (Menu, Language::Ar) => "القائمة",
        (Featured, Language::En) => "Star items",
        (Featured, Language::Ar) => "الأطباق المميزة",
        (NoResults, Language::En) => "No dishes match your filters. Try clearing some filters.",
        (NoResults, Language::Ar) => "لا توجد أطباق مطابقة. جرّب إزالة بعض عوامل التصفية.",
        (ChefBadge, Language::En) => "Chef's pick",
        (ChefBadge, Language::Ar) => "اختيار الشيف",
        (StarBadge, _) => "Star",
        (Ingredients, Language::En) => "Ingredients",
        (Ingredients, Language::Ar) => "المكونات",
        (Allergens, Language::En) => "Allergens",
        (Allergens, Language::Ar) => "مسببات الحساسية",
        (Spice, Language::En) => "Spice",
        (Spice, Language::Ar) => "الحرارة",
        (Origin, Language::En) => "Origin",
        (Origin, Language::Ar) => "المنشأ",
        (Previous, Language::En) => "previous",
        (Previous, Language::Ar) => "السابق",
        (Next, Language::En) => "next",
        (Next, Language::Ar) => "التالي",
        (Vegetarian, Language::En) => "Vegetarian",
        (Vegetarian, Language::Ar) => "نباتي",
        (NonVegetarian, Language::En) => "Non-vegetarian",
        (NonVegetarian, Language::Ar) => "غير نباتي",
        (Over100, Language::En) => "Over 100",
        (Over100, Language::Ar) => "أكثر من 100",
        (SortPopularity, Language::En) => "Most popular",
        (SortPopularity, Language::Ar) => "الأكثر شعبية",
        (SortPriceAsc, Language::En) => "Price: low to high",
        (SortPriceAsc, Language::Ar) => "السعر: من الأقل إلى الأعلى",
        (SortPriceDesc, Language::En) => "Price: high to low",
        (SortPriceDesc, Language::Ar) => "السعر: من الأعلى إلى الأقل",
        (ChefSpecial, Language::En) => "Chef's special",
        (ChefSpecial, Language::Ar) => "طبق الشيف",
        (HiddenByFilters, Language::En) => "not in the current results",
        (HiddenByFilters, Language::Ar) => "غير موجود في النتائج الحالية",
    }
}

pub fn facet_label(facet: ActiveFacet, language: Language) -> String {
    match facet {
        ActiveFacet::Diet(DietFilter::Vegetarian) => label(Label::Vegetarian, language).into(),
        ActiveFacet::Diet(DietFilter::NonVegetarian) => {
            label(Label::NonVegetarian, language).into()
        }
        ActiveFacet::Price(PriceRange::Over100) => label(Label::Over100, language).into(),
        ActiveFacet::Price(range) => match (range.ceiling(), language) {
            (Some(ceiling), Language::En) => format!("Under {ceiling}"),
            (Some(ceiling), Language::Ar) => format!("أقل من {ceiling}"),
            (None, _) => range.as_str().into(),
        },
        ActiveFacet::Sort(SortBy::Popularity) => label(Label::SortPopularity, language).into(),
        ActiveFacet::Sort(SortBy::PriceAsc) => label(Label::SortPriceAsc, language).into(),
        ActiveFacet::Sort(SortBy::PriceDesc) => label(Label::SortPriceDesc, language).into(),
        ActiveFacet::ChefSpecial => label(Label::ChefSpecial, language).into(),
        ActiveFacet::Diet(DietFilter::All) | ActiveFacet::Sort(SortBy::Default) => String::new(),
    }
}

pub fn format_price(dish: &Dish, language: Language) -> String {
    let amount = if dish.price.fract() == 0.0 {
        format!("{:.0}", dish.price)
    } else {
        format!("{:.2}", dish.price)
    };
    match (dish.price_per_piece, language) {
        (false, _) => amount,
        (true, Language::En) => format!("{amount} / piece"),
        (true, Language::Ar) => format!("{amount} / للقطعة"),
    }
}

fn spice_meter(dish: &Dish) -> Option<String> {
    dish.spice_display_level().map(|level| {
        let lit = usize::from(level);
        let dim = usize::from(MAX_SPICE_LEVEL) - lit;
        format!("{}{}", "*".repeat(lit), ".".repeat(dim))
    })
}

fn badges(dish: &Dish, language: Language) -> String {
    let mut badges = Vec::new();
    if dish.is_chef_specialty {
        badges.push(format!("★ {}", label(Label::ChefBadge, language)));
    } else if dish.is_star {
        badges.push(format!("☆ {}", label(Label::StarBadge, language)));
    }
    if dish.diet == Diet::Vegetarian {
        badges.push("V".into());
    }
    if let Some(code) = dish.country.as_deref() {
        let flag = country_flag(code);
        if !flag.is_empty() {
            badges.push(flag);
        }
    }
    badges.join(" ")
}

fn category_title(catalog: &Catalog, key: &CategoryKey, language: Language) -> String {
    catalog
        .category(key)
        .map(|category| category.name.resolve(language).to_string())
        .unwrap_or_else(|| key.to_string())
}

fn write_dish_line(
    out: &mut impl Write,
    dish: &Dish,
    language: Language,
    view_mode: ViewMode,
) -> fmt::Result {
    write!(
        out,
        "  - {} [{}] {}",
        dish.name.resolve(language),
        dish.id,
        format_price(dish, language)
    )?;
    let badges = badges(dish, language);
    if !badges.is_empty() {
        write!(out, "  {badges}")?;
    }
    if let Some(meter) = spice_meter(dish) {
        write!(out, "  {meter}")?;
    }
    writeln!(out)?;
    if view_mode == ViewMode::List {
        let description = dish.description.resolve(language);
        if !description.is_empty() {
            writeln!(out, "      {description}")?;
        }
        if let Some(calories) = dish.calories {
            writeln!(out, "      {calories} kcal")?;
        }
    }
    Ok(())
}

fn write_menu(out: &mut impl Write, session: &MenuSession, language: Language) -> fmt::Result {
    let criteria = session.criteria();
    writeln!(
        out,
        "{} ({}, {})",
        label(Label::Menu, language),
        language.tag(),
        language.direction()
    )?;

    let chips: Vec<String> = criteria
        .active_facets()
        .into_iter()
        .map(|facet| facet_label(facet, language))
        .collect();
    if !chips.is_empty() {
        writeln!(out, "[{}]", chips.join("] ["))?;
    }

    let rail = session.star_rail();
    if !rail.is_empty() {
        writeln!(out, "\n== {} ==", label(Label::Featured, language))?;
        for dish in rail {
            write_dish_line(out, dish, language, ViewMode::Grid)?;
        }
    }

    let sections = session.sections();
    if sections.is_empty() {
        return writeln!(out, "\n{}", label(Label::NoResults, language));
    }
    for section in sections {
        writeln!(
            out,
            "\n== {} ==",
            category_title(session.catalog(), &section.key, language)
        )?;
        for dish in section.dishes {
            write_dish_line(out, dish, language, criteria.view_mode)?;
        }
    }
    Ok(())
}

fn write_detail(
    out: &mut impl Write,
    modal: &ModalSnapshot<'_>,
    visible_len: usize,
    language: Language,
) -> fmt::Result {
    let dish = modal.dish;
    writeln!(out, "{} [{}]", dish.name.resolve(language), dish.id)?;
    let badges = badges(dish, language);
    if !badges.is_empty() {
        writeln!(out, "{badges}")?;
    }
    let description = dish.description.resolve(language);
    if !description.is_empty() {
        writeln!(out, "{description}")?;
    }
    if !dish.ingredients.is_empty() {
        writeln!(
            out,
            "{}: {}",
            label(Label::Ingredients, language),
            dish.ingredients.join(", ")
        )?;
    }
    if !dish.allergens.is_empty() {
        writeln!(
            out,
            "{}: {}",
            label(Label::Allergens, language),
            dish.allergens.join(", ")
        )?;
    }
    write!(out, "{}", format_price(dish, language))?;
    if let Some(meter) = spice_meter(dish) {
        write!(out, "  {}: {meter}", label(Label::Spice, language))?;
    }
    if let Some(calories) = dish.calories {
        write!(out, "  {calories} kcal")?;
    }
    writeln!(out)?;
    if let Some(code) = dish.country.as_deref() {
        let name = country_name(code).unwrap_or(code);
        writeln!(out, "{}: {} {name}", label(Label::Origin, language), country_flag(code))?;
    }
    if modal.gallery.len() > 1 {
        writeln!(out, "images: {}", modal.gallery.join(", "))?;
    }

    match modal.position {
        Some(index) => write!(out, "({}/{visible_len})", index + 1)?,
        None => write!(out, "({})", label(Label::HiddenByFilters, language))?,
    }
    if modal.show_navigation {
        let marker = |enabled: bool| if enabled { "+" } else { "-" };
        write!(
            out,
            "  {}{} {}{}",
            marker(modal.has_previous),
            label(Label::Previous, language),
            marker(modal.has_next),
            label(Label::Next, language)
        )?;
    }
    writeln!(out)
}

/// Chips, featured rail and category sections for the session's criteria.
pub fn render_menu(session: &MenuSession, language: Language) -> String {
    let mut out = String::new();
    // Writing into a String is infallible.
    let _ = write_menu(&mut out, session, language);
    out
}

/// The open dish with its navigation state.
pub fn render_detail(modal: &ModalSnapshot<'_>, visible_len: usize, language: Language) -> String {
    let mut out = String::new();
    let _ = write_detail(&mut out, modal, visible_len, language);
    out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
