//! Detail-view selection: which dish is open and how to step to its
//! neighbours.
//!
//! The active dish is kept by value and located in the current derived
//! sequence by id on every query, so a filter change while the detail view
//! is open can never leave a stale position behind.

use shared::domain::Dish;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    active: Option<Dish>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&Dish> {
        self.active.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Opens `dish` even when the current filters hide it.
    pub fn open(&mut self, dish: &Dish) {
        debug!(dish = %dish.id, "detail opened");
        self.active = Some(dish.clone());
    }

    pub fn close(&mut self) {
        if let Some(dish) = self.active.take() {
            debug!(dish = %dish.id, "detail closed");
        }
    }

    /// Position of the active dish within `sequence`, if it is there.
    pub fn position(&self, sequence: &[&Dish]) -> Option<usize> {
        let active = self.active.as_ref()?;
        sequence.iter().position(|dish| dish.id == active.id)
    }

    pub fn has_previous(&self, sequence: &[&Dish]) -> bool {
        matches!(self.position(sequence), Some(index) if index > 0)
    }

    pub fn has_next(&self, sequence: &[&Dish]) -> bool {
        matches!(self.position(sequence), Some(index) if index + 1 < sequence.len())
    }

    /// Moves to the following dish. Returns whether the active dish changed.
    pub fn next(&mut self, sequence: &[&Dish]) -> bool {
        let Some(index) = self.position(sequence) else {
            return false;
        };
        match sequence.get(index + 1) {
            Some(dish) => {
                self.step_to(dish);
                true
            }
            None => false,
        }
    }

    /// Moves to the preceding dish. Returns whether the active dish changed.
    pub fn previous(&mut self, sequence: &[&Dish]) -> bool {
        match self.position(sequence) {
            Some(index) if index > 0 => {
                self.step_to(sequence[index - 1]);
                true
            }
            _ => false,
        }
    }

    fn step_to(&mut self, dish: &Dish) {
        debug!(dish = %dish.id, "detail navigated");
        self.active = Some(dish.clone());
    }

    /// Everything a detail view needs to render the active dish.
    pub fn snapshot<'s>(&'s self, sequence: &[&Dish]) -> Option<ModalSnapshot<'s>> {
        let dish = self.active.as_ref()?;
        let position = self.position(sequence);
        Some(ModalSnapshot {
            dish,
            position,
            has_previous: matches!(position, Some(index) if index > 0),
            has_next: matches!(position, Some(index) if index + 1 < sequence.len()),
            show_navigation: sequence.len() > 1,
            gallery: dish.gallery(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalSnapshot<'a> {
    pub dish: &'a Dish,
    /// `None` when the dish is open but filtered out of the sequence.
    pub position: Option<usize>,
    pub has_previous: bool,
    pub has_next: bool,
    pub show_navigation: bool,
    pub gallery: Vec<&'a str>,
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
