//! File-backed collaborators of the menu engine: the catalog loader and the
//! theme/language preference file.

pub mod catalog;
pub mod preferences;

pub use catalog::{load_catalog, parse_catalog, validate_catalog};
pub use preferences::{PreferenceStore, Preferences};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
