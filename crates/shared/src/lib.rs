pub mod country;
pub mod domain;
pub mod error;
pub mod filters;
pub mod locale;
pub mod theme;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
