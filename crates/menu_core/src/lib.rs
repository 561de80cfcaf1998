//! Menu browsing core: the filter/sort engine, the filter state store, the
//! detail-view selection controller and the session tying them together.

pub mod catalog;
pub mod engine;
pub mod input;
pub mod selection;
pub mod session;
pub mod store;

pub use catalog::Catalog;
pub use engine::{derive, group_by_category, star_rail, CategorySection};
pub use input::{ModalCommand, NavKey};
pub use selection::{ModalSnapshot, SelectionController};
pub use session::MenuSession;
pub use store::FilterStore;

#[cfg(test)]
#[path = "tests/support.rs"]
mod support;
