//! Translation of raw detail-view input into navigation commands.

use shared::locale::Language;

/// Horizontal drag distance past which the detail view is dismissed.
pub const SWIPE_DISMISS_OFFSET: f32 = 100.0;
/// Horizontal fling speed past which the detail view is dismissed.
pub const SWIPE_DISMISS_VELOCITY: f32 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalCommand {
    Close,
    Previous,
    Next,
}

/// Arrow keys follow reading direction, so they swap in right-to-left
/// layouts.
pub fn command_for_key(key: NavKey, language: Language) -> ModalCommand {
    match (key, language.is_rtl()) {
        (NavKey::Escape, _) => ModalCommand::Close,
        (NavKey::ArrowLeft, false) | (NavKey::ArrowRight, true) => ModalCommand::Previous,
        (NavKey::ArrowRight, false) | (NavKey::ArrowLeft, true) => ModalCommand::Next,
    }
}

pub fn swipe_dismisses(offset_x: f32, velocity_x: f32) -> bool {
    offset_x > SWIPE_DISMISS_OFFSET || velocity_x > SWIPE_DISMISS_VELOCITY
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
