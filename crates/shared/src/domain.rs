use std::fmt;

use serde::{Deserialize, Serialize};

use crate::locale::Language;

macro_rules! key_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

key_newtype!(DishId);
key_newtype!(CategoryKey);

/// Highest spice level a renderer shows; larger values are clamped.
pub const MAX_SPICE_LEVEL: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub ar: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    pub fn resolve(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    Vegetarian,
    NonVegetarian,
}

impl Diet {
    pub fn as_str(self) -> &'static str {
        match self {
            Diet::Vegetarian => "vegetarian",
            Diet::NonVegetarian => "non-vegetarian",
        }
    }
}

/// A menu category as declared by the catalog, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub key: CategoryKey,
    pub name: LocalizedText,
}

/// One immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: DishId,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub category: CategoryKey,
    pub price: f64,
    #[serde(default)]
    pub price_per_piece: bool,
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    pub diet: Diet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(default)]
    pub is_star: bool,
    #[serde(default)]
    pub is_chef_specialty: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allergens: Vec<String>,
    /// ISO 3166-1 alpha-2 code of the dish's origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// 0 = not spicy, 4 = very hot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spice_level: Option<i32>,
}

impl Dish {
    /// Popularity with an absent score counted as zero.
    pub fn popularity_score(&self) -> f64 {
        self.popularity.unwrap_or(0.0)
    }

    /// Rank used by the default ordering: star weighs 2, chef specialty 1.
    pub fn default_rank(&self) -> u8 {
        u8::from(self.is_star) * 2 + u8::from(self.is_chef_specialty)
    }

    pub fn is_featured(&self) -> bool {
        self.is_star || self.is_chef_specialty
    }

    /// `None` when the level is absent or negative.
    pub fn spice_display_level(&self) -> Option<u8> {
        match self.spice_level {
            Some(level) if level >= 0 => Some(level.min(i32::from(MAX_SPICE_LEVEL)) as u8),
            _ => None,
        }
    }

    /// Images for the detail carousel; the primary image when no extras exist.
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.image.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }
}
