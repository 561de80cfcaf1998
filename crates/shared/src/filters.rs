//! Filter, sort and view selectors plus the criteria record they form.
//!
//! Every selector parses leniently: a value this build does not know
//! degrades to the "all"/"default" variant instead of failing, so older
//! builds keep working against newer catalog data and saved links.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{CategoryKey, Diet};

macro_rules! selector_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            #[default]
            $default:ident => $default_str:literal,
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            #[default]
            $default,
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$name::$default, $($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $name::$default => $default_str,
                    $($name::$variant => $wire),+
                }
            }

            /// Unknown values fall back to the default variant.
            pub fn parse_lenient(value: &str) -> Self {
                match value.trim() {
                    $($wire => $name::$variant,)+
                    _ => $name::$default,
                }
            }

            pub fn is_default(self) -> bool {
                self == $name::$default
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::parse_lenient(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

selector_enum!(
    DietFilter {
        #[default]
        All => "all",
        Vegetarian => "vegetarian",
        NonVegetarian => "non-vegetarian",
    }
);

selector_enum!(
    /// Inclusive price bounds in the catalog's currency unit.
    PriceRange {
        #[default]
        All => "all",
        Under30 => "under30",
        Under50 => "under50",
        Under100 => "under100",
        Over100 => "over100",
    }
);

selector_enum!(
    SortBy {
        #[default]
        Default => "default",
        PriceAsc => "price-asc",
        PriceDesc => "price-desc",
        Popularity => "popularity",
    }
);

selector_enum!(
    /// Display-only; never changes the derived sequence.
    ViewMode {
        #[default]
        Grid => "grid",
        List => "list",
    }
);

impl DietFilter {
    pub fn matches(self, diet: Diet) -> bool {
        match self {
            DietFilter::All => true,
            DietFilter::Vegetarian => diet == Diet::Vegetarian,
            DietFilter::NonVegetarian => diet == Diet::NonVegetarian,
        }
    }
}

impl PriceRange {
    /// Both `Under100` and `Over100` accept a price of exactly 100.
    pub fn matches(self, price: f64) -> bool {
        match self {
            PriceRange::All => true,
            PriceRange::Under30 => price <= 30.0,
            PriceRange::Under50 => price <= 50.0,
            PriceRange::Under100 => price <= 100.0,
            PriceRange::Over100 => price >= 100.0,
        }
    }

    /// Upper bound shown next to "under" labels.
    pub fn ceiling(self) -> Option<u32> {
        match self {
            PriceRange::Under30 => Some(30),
            PriceRange::Under50 => Some(50),
            PriceRange::Under100 => Some(100),
            PriceRange::All | PriceRange::Over100 => None,
        }
    }
}

pub const STAR_ITEMS_KEY: &str = "starItems";
pub const CHEF_SPECIALTIES_KEY: &str = "chefSpecialties";

/// Category selector: everything, one of the two synthetic rails, or a real
/// category key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    StarItems,
    ChefSpecialties,
    Key(CategoryKey),
}

impl CategoryFilter {
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim() {
            "" | "all" => CategoryFilter::All,
            STAR_ITEMS_KEY => CategoryFilter::StarItems,
            CHEF_SPECIALTIES_KEY => CategoryFilter::ChefSpecialties,
            key => CategoryFilter::Key(CategoryKey::new(key)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::StarItems => STAR_ITEMS_KEY,
            CategoryFilter::ChefSpecialties => CHEF_SPECIALTIES_KEY,
            CategoryFilter::Key(key) => key.as_str(),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == CategoryFilter::All
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One refinement chip shown above the menu while it is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveFacet {
    Diet(DietFilter),
    Price(PriceRange),
    Sort(SortBy),
    ChefSpecial,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub diet: DietFilter,
    pub price_range: PriceRange,
    pub sort_by: SortBy,
    pub chef_special_only: bool,
    pub view_mode: ViewMode,
}

impl FilterCriteria {
    /// True when anything except the view mode differs from the defaults.
    pub fn has_active_filters(&self) -> bool {
        !self.category.is_default() || self.has_refinements()
    }

    /// Like [`has_active_filters`](Self::has_active_filters) but ignores the
    /// category, which has its own navigation.
    pub fn has_refinements(&self) -> bool {
        !self.diet.is_default()
            || !self.price_range.is_default()
            || !self.sort_by.is_default()
            || self.chef_special_only
    }

    pub fn active_facets(&self) -> Vec<ActiveFacet> {
        let mut facets = Vec::new();
        if !self.diet.is_default() {
            facets.push(ActiveFacet::Diet(self.diet));
        }
        if !self.price_range.is_default() {
            facets.push(ActiveFacet::Price(self.price_range));
        }
        if !self.sort_by.is_default() {
            facets.push(ActiveFacet::Sort(self.sort_by));
        }
        if self.chef_special_only {
            facets.push(ActiveFacet::ChefSpecial);
        }
        facets
    }
}

#[cfg(test)]
#[path = "tests/filters_tests.rs"]
mod tests;
